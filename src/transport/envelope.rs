use serde::de::{DeserializeOwned, Error as DeError, IgnoredAny};
use serde::{Deserialize, Deserializer};

use crate::domain::{ApiErrorEntry, ErrorCode, Status};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Value that either matches `T` or is kept as an opaque malformed token.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum Lenient<T> {
    Valid(T),
    Malformed(IgnoredAny),
}

impl<T> Lenient<T> {
    pub(super) fn into_option(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Malformed(_) => None,
        }
    }
}

/// `T` decoded from a JSON object only; arrays are rejected instead of matched by position.
#[derive(Debug, Clone)]
pub(super) struct Object<T>(pub(super) T);

impl<'de, T: DeserializeOwned> Deserialize<'de> for Object<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        serde_json::from_value(serde_json::Value::Object(object))
            .map(Self)
            .map_err(D::Error::custom)
    }
}

/// Textlocal reports errors either as a list of entries or, occasionally, as one object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum TransportErrors {
    Many(Vec<Lenient<Object<TransportErrorEntry>>>),
    One(Object<TransportErrorEntry>),
    Malformed(IgnoredAny),
}

impl TransportErrors {
    fn into_entries(self) -> Vec<ApiErrorEntry> {
        match self {
            Self::Many(items) => items
                .into_iter()
                .map(|item| {
                    item.into_option()
                        .map(|Object(entry)| entry.into_domain())
                        .unwrap_or_default()
                })
                .collect(),
            Self::One(Object(entry)) => vec![entry.into_domain()],
            Self::Malformed(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct TransportErrorEntry {
    #[serde(default)]
    code: Option<Lenient<TransportCode>>,
    #[serde(default)]
    message: Option<Lenient<String>>,
}

impl TransportErrorEntry {
    fn into_domain(self) -> ApiErrorEntry {
        ApiErrorEntry {
            code: self
                .code
                .and_then(Lenient::into_option)
                .and_then(TransportCode::into_error_code),
            message: self.message.and_then(Lenient::into_option),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportCode {
    Int(i64),
    String(String),
}

impl TransportCode {
    fn into_error_code(self) -> Option<ErrorCode> {
        match self {
            Self::Int(value) => Some(ErrorCode::new(value)),
            Self::String(value) => value.trim().parse::<i64>().ok().map(ErrorCode::new),
        }
    }
}

/// Only the literal `"success"` counts; a missing or non-string status is a failure.
pub(super) fn decode_status(status: Option<Lenient<String>>) -> Status {
    match status.and_then(Lenient::into_option) {
        Some(value) if value == "success" => Status::Success,
        _ => Status::Failure,
    }
}

/// Entries from `error`, falling back to `errors` when the former yields none.
pub(super) fn decode_errors(
    error: Option<TransportErrors>,
    errors: Option<TransportErrors>,
) -> Vec<ApiErrorEntry> {
    let entries = error
        .map(TransportErrors::into_entries)
        .unwrap_or_default();
    if !entries.is_empty() {
        return entries;
    }
    errors
        .map(TransportErrors::into_entries)
        .unwrap_or_default()
}

/// Decode a top-level JSON object; arrays and scalars are rejected.
pub(super) fn decode_object<T: DeserializeOwned>(json: &str) -> Result<T, TransportError> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
    Ok(serde_json::from_value(serde_json::Value::Object(object))?)
}
