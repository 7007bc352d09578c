use contracts::analysis::AnalysisResponse;
use contracts::system::auth::Credentials;

pub const ERR_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const ERR_NO_FILE: &str = "Please select a file";
pub const ERR_AUTH_FAILED: &str = "Authentication failed";
pub const ERR_UPLOAD_FAILED: &str = "Upload failed";
pub const ERR_UNREACHABLE: &str = "Analysis failed. Please try again.";

/// The session/upload/result state machine.
///
/// One immutable snapshot, advanced only through [`SessionModel::apply`]:
/// every UI trigger and every network resolution is a [`SessionEvent`], and
/// each transition is a pure `(state, event) -> state` step. Generic over the
/// selected-file handle so the machine runs in host tests without a browser;
/// the app instantiates it with `web_sys::File`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionModel<F> {
    /// Replayed verbatim as a Basic header on every upload once logged in.
    pub credentials: Credentials,
    pub logged_in: bool,
    /// Cleared only by a fresh selection, never after an upload or a logout.
    pub selected_file: Option<F>,
    /// Overwritten wholesale by a newer successful upload; a failed attempt
    /// leaves stale results visible next to the error line.
    pub results: Option<AnalysisResponse>,
    /// At most one active message, always human-readable.
    pub error: Option<String>,
    pub in_flight: bool,
}

impl<F> Default for SessionModel<F> {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            logged_in: false,
            selected_file: None,
            results: None,
            error: None,
            in_flight: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SessionEvent<F> {
    /// Login form submitted. Checked locally for non-emptiness only; no
    /// network call and no verification.
    LoginSubmitted { username: String, password: String },
    /// A file was picked; replaces any prior selection, in any state.
    FileSelected(F),
    /// Upload form submitted.
    UploadRequested,
    /// The `/analyze` call resolved.
    UploadResolved(UploadOutcome),
}

/// Resolution of one `/analyze` request.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Completed(AnalysisResponse),
    /// HTTP 401: the service rejected the replayed credentials.
    Unauthorized,
    /// Any other non-success status.
    Rejected(String),
    /// Transport failure, no response at all.
    Unreachable,
}

impl<F> SessionModel<F> {
    pub fn apply(mut self, event: SessionEvent<F>) -> Self {
        match event {
            SessionEvent::LoginSubmitted { username, password } => {
                self.credentials = Credentials::new(username, password);
                if self.credentials.is_complete() {
                    self.logged_in = true;
                    self.error = None;
                } else {
                    self.logged_in = false;
                    self.error = Some(ERR_INVALID_CREDENTIALS.to_string());
                }
            }
            SessionEvent::FileSelected(file) => {
                self.selected_file = Some(file);
            }
            SessionEvent::UploadRequested => {
                if !self.logged_in || self.in_flight {
                    // Not reachable from the rendered view; leave state intact.
                } else if self.selected_file.is_none() {
                    self.error = Some(ERR_NO_FILE.to_string());
                } else {
                    self.in_flight = true;
                    self.error = None;
                }
            }
            SessionEvent::UploadResolved(outcome) => {
                self.in_flight = false;
                match outcome {
                    UploadOutcome::Completed(results) => {
                        self.results = Some(results);
                        self.error = None;
                    }
                    UploadOutcome::Unauthorized => {
                        // Implicit logout. The selected file and any stale
                        // results stay untouched.
                        self.logged_in = false;
                        self.error = Some(ERR_AUTH_FAILED.to_string());
                    }
                    UploadOutcome::Rejected(message) => {
                        self.error = Some(message);
                    }
                    UploadOutcome::Unreachable => {
                        self.error = Some(ERR_UNREACHABLE.to_string());
                    }
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::analysis::DetailedResult;
    use std::collections::BTreeMap;

    type Model = SessionModel<&'static str>;

    fn login(model: Model, username: &str, password: &str) -> Model {
        model.apply(SessionEvent::LoginSubmitted {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    fn logged_in_with_file() -> Model {
        login(Model::default(), "alice", "pw").apply(SessionEvent::FileSelected("data.csv"))
    }

    fn sample_results() -> AnalysisResponse {
        AnalysisResponse {
            sentiment_distribution: BTreeMap::from([
                ("positive".to_string(), 2),
                ("negative".to_string(), 1),
            ]),
            detailed_results: vec![
                DetailedResult {
                    text: "good".to_string(),
                    sentiment: "positive".to_string(),
                },
                DetailedResult {
                    text: "bad".to_string(),
                    sentiment: "negative".to_string(),
                },
                DetailedResult {
                    text: "great".to_string(),
                    sentiment: "positive".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_login_rejects_empty_fields() {
        for (username, password) in [("", ""), ("alice", ""), ("", "pw")] {
            let model = login(Model::default(), username, password);
            assert!(!model.logged_in);
            assert_eq!(model.error.as_deref(), Some(ERR_INVALID_CREDENTIALS));
        }
    }

    #[test]
    fn test_login_accepts_any_non_empty_pair() {
        let model = login(Model::default(), "anyone", "anything");
        assert!(model.logged_in);
        assert_eq!(model.error, None);
        assert_eq!(model.credentials, Credentials::new("anyone", "anything"));
    }

    #[test]
    fn test_login_clears_prior_error() {
        let model = login(Model::default(), "", "");
        let model = login(model, "alice", "pw");
        assert!(model.logged_in);
        assert_eq!(model.error, None);
    }

    #[test]
    fn test_login_is_idempotent() {
        let once = login(Model::default(), "alice", "pw");
        let twice = login(once.clone(), "alice", "pw");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_upload_without_file_is_rejected_locally() {
        let model = login(Model::default(), "alice", "pw").apply(SessionEvent::UploadRequested);
        assert!(!model.in_flight);
        assert!(model.logged_in);
        assert_eq!(model.error.as_deref(), Some(ERR_NO_FILE));
    }

    #[test]
    fn test_upload_starts_and_clears_error() {
        let model = logged_in_with_file()
            .apply(SessionEvent::UploadRequested)
            .apply(SessionEvent::UploadRequested); // re-entrant call, ignored
        assert!(model.in_flight);
        assert_eq!(model.error, None);
        assert_eq!(model.selected_file, Some("data.csv"));
    }

    #[test]
    fn test_upload_requested_while_logged_out_is_ignored() {
        let model = Model::default()
            .apply(SessionEvent::FileSelected("data.csv"))
            .apply(SessionEvent::UploadRequested);
        assert!(!model.in_flight);
        assert_eq!(model.error, None);
    }

    #[test]
    fn test_file_selection_replaces_prior_one() {
        let model = logged_in_with_file().apply(SessionEvent::FileSelected("other.csv"));
        assert_eq!(model.selected_file, Some("other.csv"));
    }

    #[test]
    fn test_success_overwrites_results_and_clears_error() {
        let mut first = sample_results();
        first.detailed_results.truncate(1);

        let model = logged_in_with_file()
            .apply(SessionEvent::UploadRequested)
            .apply(SessionEvent::UploadResolved(UploadOutcome::Completed(
                first,
            )))
            .apply(SessionEvent::UploadRequested)
            .apply(SessionEvent::UploadResolved(UploadOutcome::Completed(
                sample_results(),
            )));

        assert!(!model.in_flight);
        assert!(model.logged_in);
        assert_eq!(model.error, None);
        // No merge with the earlier response.
        assert_eq!(model.results, Some(sample_results()));
    }

    #[test]
    fn test_unauthorized_forces_logout_but_keeps_file_and_results() {
        let model = logged_in_with_file()
            .apply(SessionEvent::UploadRequested)
            .apply(SessionEvent::UploadResolved(UploadOutcome::Completed(
                sample_results(),
            )))
            .apply(SessionEvent::UploadRequested)
            .apply(SessionEvent::UploadResolved(UploadOutcome::Unauthorized));

        assert!(!model.logged_in);
        assert!(!model.in_flight);
        assert_eq!(model.error.as_deref(), Some(ERR_AUTH_FAILED));
        assert_eq!(model.selected_file, Some("data.csv"));
        assert_eq!(model.results, Some(sample_results()));
    }

    #[test]
    fn test_rejected_upload_keeps_stale_results_visible() {
        let model = logged_in_with_file()
            .apply(SessionEvent::UploadRequested)
            .apply(SessionEvent::UploadResolved(UploadOutcome::Completed(
                sample_results(),
            )))
            .apply(SessionEvent::UploadRequested)
            .apply(SessionEvent::UploadResolved(UploadOutcome::Rejected(
                ERR_UPLOAD_FAILED.to_string(),
            )));

        assert!(model.logged_in);
        assert!(!model.in_flight);
        assert_eq!(model.error.as_deref(), Some(ERR_UPLOAD_FAILED));
        assert_eq!(model.results, Some(sample_results()));
    }

    #[test]
    fn test_transport_failure_message() {
        let model = logged_in_with_file()
            .apply(SessionEvent::UploadRequested)
            .apply(SessionEvent::UploadResolved(UploadOutcome::Unreachable));

        assert!(model.logged_in);
        assert!(!model.in_flight);
        assert_eq!(model.error.as_deref(), Some(ERR_UNREACHABLE));
        assert_eq!(model.results, None);
    }

    #[test]
    fn test_scenario_successful_analysis() {
        let model = login(Model::default(), "alice", "pw");
        assert!(model.logged_in);

        let model = model
            .apply(SessionEvent::FileSelected("data.csv"))
            .apply(SessionEvent::UploadRequested);
        assert!(model.in_flight);

        let model = model.apply(SessionEvent::UploadResolved(UploadOutcome::Completed(
            sample_results(),
        )));
        assert_eq!(model.results, Some(sample_results()));
        assert_eq!(model.error, None);
        assert!(!model.in_flight);
    }

    #[test]
    fn test_scenario_401_returns_to_login() {
        let model = logged_in_with_file()
            .apply(SessionEvent::UploadRequested)
            .apply(SessionEvent::UploadResolved(UploadOutcome::Unauthorized));

        // The view switches on `logged_in`, so this reverts to the login form.
        assert!(!model.logged_in);
        assert_eq!(model.error.as_deref(), Some(ERR_AUTH_FAILED));
    }
}
