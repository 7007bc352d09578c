use contracts::analysis::AnalysisResponse;
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::backend_base;
use crate::system::session::{UploadOutcome, ERR_UPLOAD_FAILED};

/// POST the selected file to `{base}/analyze` as multipart form data with a
/// Basic authorization header.
///
/// Infallible by construction: every failure mode maps onto an
/// [`UploadOutcome`] variant for the state machine to consume.
pub async fn analyze_file(authorization: &str, file: &web_sys::File) -> UploadOutcome {
    let form_data = match FormData::new() {
        Ok(form_data) => form_data,
        Err(e) => {
            log::error!("failed to build form data: {e:?}");
            return UploadOutcome::Unreachable;
        }
    };
    if let Err(e) = form_data.append_with_blob_and_filename("file", file, &file.name()) {
        log::error!("failed to attach file to form data: {e:?}");
        return UploadOutcome::Unreachable;
    }

    // No explicit Content-Type: the browser supplies the multipart boundary.
    let request = match Request::post(&format!("{}/analyze", backend_base()))
        .header("Authorization", authorization)
        .body(form_data)
    {
        Ok(request) => request,
        Err(e) => {
            log::error!("failed to build /analyze request: {e}");
            return UploadOutcome::Unreachable;
        }
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("/analyze did not respond: {e}");
            return UploadOutcome::Unreachable;
        }
    };

    if response.status() == 401 {
        return UploadOutcome::Unauthorized;
    }
    if !response.ok() {
        log::warn!("/analyze returned HTTP {}", response.status());
        return UploadOutcome::Rejected(ERR_UPLOAD_FAILED.to_string());
    }

    match response.json::<AnalysisResponse>().await {
        Ok(results) => UploadOutcome::Completed(results),
        Err(e) => {
            log::warn!("failed to parse /analyze response: {e}");
            UploadOutcome::Rejected(ERR_UPLOAD_FAILED.to_string())
        }
    }
}
