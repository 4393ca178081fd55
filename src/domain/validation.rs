use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyBaseUrl,
    InvalidBaseUrl { input: String, reason: String },
    MissingApiKey,
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBaseUrl => write!(
                f,
                "you must set a base url; use DEFAULT_BASE_URL for the production gateway"
            ),
            Self::InvalidBaseUrl { input, reason } => {
                write!(f, "invalid base url {input:?}: {reason}")
            }
            Self::MissingApiKey => write!(f, "you must provide an API key"),
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "numbers" };
        assert_eq!(err.to_string(), "numbers must not be empty");

        assert_eq!(
            ValidationError::MissingApiKey.to_string(),
            "you must provide an API key"
        );
        assert!(
            ValidationError::EmptyBaseUrl
                .to_string()
                .contains("DEFAULT_BASE_URL")
        );

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::InvalidBaseUrl {
            input: "nope".to_owned(),
            reason: "relative URL without a base".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid base url \"nope\": relative URL without a base"
        );
    }
}
