use fantoccini::error::CmdError;
use thiserror::Error;

/// Errors surfaced by page objects, the session layer and scenarios.
///
/// Per-item extraction faults are deliberately not represented here: bulk
/// extraction swallows them and degrades the affected record to absent
/// fields, so only structural timeouts and scenario assertions propagate.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// A required structural element did not appear within its wait bound
    #[error("timed out waiting for {0}")]
    LoadTimeout(String),

    /// The WebDriver rejected or failed a command
    #[error("webdriver command failed: {0}")]
    WebDriver(#[from] CmdError),

    /// No WebDriver server could be reached
    #[error("could not establish a webdriver session: {0}")]
    Session(String),

    /// A scenario invariant did not hold; carries the observed value
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// Configuration file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

impl SuiteError {
    /// Maps a wait expiry onto `LoadTimeout`, leaving other command
    /// failures as `WebDriver` errors.
    pub fn from_wait(error: CmdError, what: &str) -> Self {
        match error {
            CmdError::WaitTimeout => SuiteError::LoadTimeout(what.to_string()),
            other => SuiteError::WebDriver(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_expiry_becomes_load_timeout() {
        let err = SuiteError::from_wait(CmdError::WaitTimeout, "the story rows");
        assert!(matches!(err, SuiteError::LoadTimeout(_)));
        assert_eq!(err.to_string(), "timed out waiting for the story rows");
    }

    #[test]
    fn test_missing_structure_reports_what_never_appeared() {
        // Out-of-range clicks surface as structural absence, not as a
        // scenario assertion
        let err = SuiteError::LoadTimeout("story row at index 31".to_string());
        assert_eq!(err.to_string(), "timed out waiting for story row at index 31");
    }
}
