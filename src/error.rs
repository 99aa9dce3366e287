//! Error types for date arithmetic and conversion.

/// Errors returned by the fallible date helpers.
///
/// Every variant describes bad caller input. None of them is transient, so
/// callers at a service boundary should answer with a client error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date/time: {0}")]
    Validation(String),

    #[error("Cannot use '{input}' with format '{pattern}': {reason}")]
    Format {
        input: String,
        pattern: String,
        reason: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DateError {
    pub(crate) fn format(input: impl Into<String>, pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::Format {
            input: input.into(),
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error was caused by the caller (always true today).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Format { .. } | Self::InvalidArgument(_)
        )
    }

    /// HTTP status a service boundary should map this error to.
    pub fn status_code(&self) -> u16 {
        400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_message() {
        let err = DateError::format("2021-13-01", "%Y-%m-%d", "input is out of range");
        assert_eq!(
            err.to_string(),
            "Cannot use '2021-13-01' with format '%Y-%m-%d': input is out of range"
        );
    }

    #[test]
    fn all_errors_are_bad_requests() {
        let errors = [
            DateError::Validation("month 13".to_string()),
            DateError::format("x", "%Y", "bad"),
            DateError::InvalidArgument("n".to_string()),
        ];
        for err in errors {
            assert!(err.is_client_error());
            assert_eq!(err.status_code(), 400);
        }
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<DateError>();
    }
}
