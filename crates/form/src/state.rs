use std::fmt::Display;

/// UI-facing status of the most recent submission attempt.
///
/// The record is never mutated in place; each transition returns the next
/// state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub is_loading: bool,
    pub server_message: Option<String>,
    pub is_error: bool,
}

impl SubmissionState {
    /// A new attempt starts: loading, previous message and error cleared.
    pub fn begin(&self) -> Self {
        Self {
            is_loading: true,
            server_message: None,
            is_error: false,
        }
    }

    pub fn succeed(&self, message: impl Into<String>) -> Self {
        Self {
            is_loading: self.is_loading,
            server_message: Some(message.into()),
            is_error: false,
        }
    }

    pub fn fail(&self, reason: impl Display) -> Self {
        Self {
            is_loading: self.is_loading,
            server_message: Some(format!("Error: {}", reason)),
            is_error: true,
        }
    }

    /// The attempt is over, whatever its outcome.
    pub fn settle(&self) -> Self {
        Self {
            is_loading: false,
            ..self.clone()
        }
    }
}
