//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::SendMessage;
pub use response::{ApiErrorEntry, Balance, BalanceResponse, Status, StatusResponse};
pub use validation::ValidationError;
pub use value::{
    ApiKey, BaseUrl, DEFAULT_BASE_URL, ErrorCode, KnownErrorCode, MessageText, PhoneNumber,
    RawPhoneNumber, SenderName,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert_eq!(ApiKey::new(""), Err(ValidationError::MissingApiKey));
        assert_eq!(ApiKey::new("   "), Err(ValidationError::MissingApiKey));
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("secret-key").unwrap();
        assert!(!format!("{key:?}").contains("secret-key"));
        assert_eq!(key.as_str(), "secret-key");
    }

    #[test]
    fn api_key_keeps_surrounding_whitespace() {
        assert_eq!(ApiKey::new(" abc ").unwrap().as_str(), " abc ");
    }

    #[test]
    fn base_url_rejects_empty() {
        assert_eq!(BaseUrl::new(""), Err(ValidationError::EmptyBaseUrl));
        assert_eq!(BaseUrl::new("///"), Err(ValidationError::EmptyBaseUrl));
    }

    #[test]
    fn base_url_strips_trailing_slashes() {
        assert_eq!(
            BaseUrl::new("http://localhost/").unwrap().as_str(),
            "http://localhost"
        );
        assert_eq!(
            BaseUrl::new("https://api.txtlocal.com//").unwrap().as_str(),
            "https://api.txtlocal.com"
        );
    }

    #[test]
    fn base_url_rejects_relative_urls() {
        assert!(matches!(
            BaseUrl::new("api.txtlocal.com"),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("mailto:someone@example.com"),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn base_url_builds_endpoints() {
        let base = BaseUrl::new("http://localhost/v2/").unwrap();
        assert_eq!(base.endpoint("balance"), "http://localhost/v2/balance");
        assert_eq!(base.endpoint("/send"), "http://localhost/v2/send");
        assert_eq!(BaseUrl::default().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn message_and_sender_reject_blank() {
        assert!(matches!(
            MessageText::new("  "),
            Err(ValidationError::Empty {
                field: MessageText::FIELD
            })
        ));
        assert!(matches!(
            SenderName::new(""),
            Err(ValidationError::Empty {
                field: SenderName::FIELD
            })
        ));
        assert_eq!(MessageText::new(" hi ").unwrap().as_str(), " hi ");
        assert_eq!(SenderName::new(" Acme ").unwrap().as_str(), "Acme");
    }

    #[test]
    fn send_message_requires_recipients() {
        let err = SendMessage::new(
            Vec::new(),
            MessageText::new("hi").unwrap(),
            SenderName::new("Acme").unwrap(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: RawPhoneNumber::FIELD
            }
        );
    }

    #[test]
    fn phone_number_converts_to_international_digits() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::GB), " 07400 123456 ").unwrap();
        assert_eq!(pn.raw(), "07400 123456");
        assert_eq!(pn.e164(), "+447400123456");

        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "447400123456");
    }

    #[test]
    fn phone_number_rejects_garbage() {
        assert!(matches!(
            PhoneNumber::parse(None, "not a number"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(matches!(
            PhoneNumber::parse(None, " "),
            Err(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn error_code_known_mapping() {
        assert_eq!(
            ErrorCode::new(1).known_kind(),
            Some(KnownErrorCode::NoCommandSpecified)
        );
        assert_eq!(
            ErrorCode::new(2).known_kind(),
            Some(KnownErrorCode::UnrecognisedCommand)
        );
        assert_eq!(
            ErrorCode::new(3).known_kind(),
            Some(KnownErrorCode::InvalidLoginDetails)
        );
        assert_eq!(ErrorCode::new(0).known_kind(), None);
        assert_eq!(ErrorCode::new(80).known_kind(), None);
        assert_eq!(KnownErrorCode::InvalidLoginDetails.code(), 3);
    }
}
