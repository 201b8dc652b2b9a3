use serde::Serialize;

/// Result of checking one raw field value.
///
/// Validators report problems as data, never as errors: an unparseable value
/// yields `is_valid = false` with a human-readable message, and an empty
/// value is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationOutcome {
    /// Accepting outcome with no message.
    pub fn valid() -> Self {
        ValidationOutcome {
            is_valid: true,
            error: None,
        }
    }

    /// Rejecting outcome carrying the reason.
    pub fn invalid(error: impl Into<String>) -> Self {
        ValidationOutcome {
            is_valid: false,
            error: Some(error.into()),
        }
    }
}

/// True when the input counts as absent under the universal optional rule.
pub(crate) fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::ValidationOutcome;

    #[test]
    fn valid_outcome_has_no_error() {
        let outcome = ValidationOutcome::valid();
        assert!(outcome.is_valid);
        assert_eq!(outcome.error, None);
    }

    #[test]
    fn invalid_outcome_keeps_message() {
        let outcome = ValidationOutcome::invalid("bad value");
        assert!(!outcome.is_valid);
        assert_eq!(outcome.error.as_deref(), Some("bad value"));
    }
}
