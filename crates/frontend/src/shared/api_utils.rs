//! Helpers for reaching the analysis service.

/// Base URL of the analysis service.
///
/// Read once from the `BACKEND_URL` environment variable at build time,
/// falling back to the local development address.
pub fn backend_base() -> String {
    normalize(option_env!("BACKEND_URL").unwrap_or("http://127.0.0.1:8000"))
}

fn normalize(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}
