use std::time::Duration;

use thiserror::Error;

use crate::api_client::ApiError;
use crate::form::sections::SectionKind;

/// Shown when the server gives no usable `message`/`detail`, or never answered.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

pub const TERMS_MESSAGE: &str = "You must accept the Terms of Service to submit your profile.";

/// Application-level error type.
/// `user_message` turns any variant into the text shown in the error banner.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("terms not accepted")]
    TermsNotAccepted,

    #[error("Unknown field '{field}' in section {section}")]
    UnknownField { section: SectionKind, field: String },

    #[error("Unknown profile field '{0}'")]
    UnknownScalar(String),

    #[error("Index {index} out of range for section {section} (len {len})")]
    IndexOutOfRange {
        section: SectionKind,
        index: usize,
        len: usize,
    },

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

/// Coarse classification of a failed submission, kept next to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Consent missing; no request was made.
    Gate,
    /// The server answered with a non-2xx status.
    Server { status: u16 },
    /// Transport error, unreadable response, or timeout.
    Network,
    /// Local form misuse (bad field name or index).
    Form,
}

impl ProfileError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ProfileError::TermsNotAccepted => FailureKind::Gate,
            ProfileError::UnknownField { .. }
            | ProfileError::UnknownScalar(_)
            | ProfileError::IndexOutOfRange { .. } => FailureKind::Form,
            ProfileError::Api(ApiError::Status { status, .. }) => {
                FailureKind::Server { status: *status }
            }
            ProfileError::Api(_) | ProfileError::Timeout(_) => FailureKind::Network,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ProfileError::TermsNotAccepted => TERMS_MESSAGE.to_string(),
            ProfileError::Api(ApiError::Status {
                message: Some(msg), ..
            }) => msg.clone(),
            ProfileError::Api(_) | ProfileError::Timeout(_) => FALLBACK_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_shown_verbatim() {
        let err = ProfileError::from(ApiError::Status {
            status: 400,
            message: Some("duplicate email".to_string()),
        });
        assert_eq!(err.user_message(), "duplicate email");
        assert_eq!(err.kind(), FailureKind::Server { status: 400 });
    }

    #[test]
    fn test_status_without_message_falls_back() {
        let err = ProfileError::from(ApiError::Status {
            status: 500,
            message: None,
        });
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_timeout_is_network_failure() {
        let err = ProfileError::Timeout(Duration::from_secs(30));
        assert_eq!(err.kind(), FailureKind::Network);
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_terms_error_reads_terms_not_accepted() {
        let err = ProfileError::TermsNotAccepted;
        assert_eq!(err.to_string(), "terms not accepted");
        assert_eq!(err.kind(), FailureKind::Gate);
        assert_eq!(err.user_message(), TERMS_MESSAGE);
    }
}
