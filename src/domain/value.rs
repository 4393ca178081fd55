use crate::domain::validation::ValidationError;

use phonenumber::country;

/// Production Textlocal API gateway.
pub const DEFAULT_BASE_URL: &str = "https://api.txtlocal.com";

#[derive(Clone, PartialEq, Eq, Hash)]
/// Textlocal `apiKey` token.
///
/// Invariant: not blank. The value is sent exactly as provided; `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Query/form field name used by Textlocal (`apiKey`).
    pub const FIELD: &'static str = "apiKey";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::MissingApiKey);
        }
        Ok(Self(value))
    }

    /// Borrow the token as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway base URL without trailing slashes.
///
/// Invariant: non-empty and parses as an absolute URL.
pub struct BaseUrl(String);

impl BaseUrl {
    /// Create a validated [`BaseUrl`], stripping surrounding whitespace and trailing `/`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyBaseUrl);
        }

        let parsed = url::Url::parse(trimmed).map_err(|err| ValidationError::InvalidBaseUrl {
            input: trimmed.to_owned(),
            reason: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ValidationError::InvalidBaseUrl {
                input: trimmed.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the normalized base URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Endpoint URL for `path` (`{base}/{path}`).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(DEFAULT_BASE_URL.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body (`message`).
///
/// Invariant: non-empty after trimming. The provided value (including whitespace) is kept as-is.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by Textlocal (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender identifier shown to recipients (`sender`).
///
/// Invariant: non-empty after trimming. The value must be approved on your Textlocal account.
pub struct SenderName(String);

impl SenderName {
    /// Form field name used by Textlocal (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`SenderName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated recipient number as sent to Textlocal (one entry of `numbers`).
///
/// Invariant: non-empty after trimming. This type does not normalize; parse into
/// [`PhoneNumber`] and convert it when you want international formatting.
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by Textlocal (`numbers`).
    pub const FIELD: &'static str = "numbers";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Textlocal.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Textlocal expects international numbers without the leading `+` (`447123456789`).
    fn from(value: PhoneNumber) -> Self {
        Self(value.international().to_owned())
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// Form field name used by Textlocal (`numbers`).
    pub const FIELD: &'static str = "numbers";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation (`+447123456789`).
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// E.164 digits without the leading `+`, the form Textlocal accepts.
    pub fn international(&self) -> &str {
        self.e164.trim_start_matches('+')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Error code reported by Textlocal in an `errors[].code` entry.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ErrorCode(i64);

impl ErrorCode {
    /// Construct an error code from its integer representation.
    pub fn new(code: i64) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by Textlocal.
    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Map this code to a known error code variant, if one exists.
    pub fn known_kind(self) -> Option<KnownErrorCode> {
        KnownErrorCode::from_code(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Textlocal error codes this crate translates into dedicated errors.
pub enum KnownErrorCode {
    NoCommandSpecified,
    UnrecognisedCommand,
    InvalidLoginDetails,
}

impl KnownErrorCode {
    /// Convert a raw integer error code into a known variant.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            1 => Self::NoCommandSpecified,
            2 => Self::UnrecognisedCommand,
            3 => Self::InvalidLoginDetails,
            _ => return None,
        })
    }

    /// Integer code used on the wire.
    pub fn code(self) -> i64 {
        match self {
            Self::NoCommandSpecified => 1,
            Self::UnrecognisedCommand => 2,
            Self::InvalidLoginDetails => 3,
        }
    }
}
