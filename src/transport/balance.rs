use serde::Deserialize;

use super::envelope::{
    Lenient, Object, TransportError, TransportErrors, decode_errors, decode_object, decode_status,
};
use crate::domain::{Balance, BalanceResponse};

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    #[serde(default)]
    status: Option<Lenient<String>>,
    #[serde(default)]
    error: Option<TransportErrors>,
    #[serde(default)]
    errors: Option<TransportErrors>,
    #[serde(default)]
    balance: Option<Lenient<Object<TransportBalance>>>,
}

#[derive(Debug, Clone, Deserialize)]
struct TransportBalance {
    #[serde(default)]
    sms: Option<Lenient<TransportCredits>>,
    #[serde(default)]
    mms: Option<Lenient<TransportCredits>>,
}

/// Credit count returned as a JSON number (possibly fractional) or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportCredits {
    Number(f64),
    String(String),
}

impl TransportCredits {
    fn into_i64(self) -> Option<i64> {
        let value = match self {
            Self::Number(value) => value,
            Self::String(value) => value.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value.trunc() as i64)
    }
}

fn credits(value: Option<Lenient<TransportCredits>>) -> i64 {
    value
        .and_then(Lenient::into_option)
        .and_then(TransportCredits::into_i64)
        .unwrap_or(0)
}

pub fn decode_balance_json_response(json: &str) -> Result<BalanceResponse, TransportError> {
    let parsed: BalanceJsonResponse = decode_object(json)?;
    let balance = parsed
        .balance
        .and_then(Lenient::into_option)
        .map(|Object(balance)| Balance {
            sms: credits(balance.sms),
            mms: credits(balance.mms),
        })
        .unwrap_or_default();

    Ok(BalanceResponse {
        status: decode_status(parsed.status),
        errors: decode_errors(parsed.error, parsed.errors),
        balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, Status};

    #[test]
    fn decode_balance_truncates_fractional_credits() {
        let json = r#"{"balance": {"sms": 361.5, "mms": 0}, "status": "success"}"#;

        let parsed = decode_balance_json_response(json).unwrap();
        assert_eq!(parsed.status, Status::Success);
        assert_eq!(parsed.balance, Balance { sms: 361, mms: 0 });
        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn decode_balance_defaults_missing_object_to_zero() {
        let parsed = decode_balance_json_response(r#"{"status": "success"}"#).unwrap();
        assert_eq!(parsed.balance, Balance::default());

        let parsed =
            decode_balance_json_response(r#"{"status": "success", "balance": "lots"}"#).unwrap();
        assert_eq!(parsed.balance, Balance::default());
    }

    #[test]
    fn decode_balance_accepts_numeric_strings_and_ignores_garbage() {
        let json = r#"
        {
          "status": "success",
          "balance": {"sms": "12.9", "mms": {"nested": true}}
        }
        "#;

        let parsed = decode_balance_json_response(json).unwrap();
        assert_eq!(parsed.balance, Balance { sms: 12, mms: 0 });
    }

    #[test]
    fn decode_balance_treats_array_shaped_balance_as_malformed() {
        let parsed =
            decode_balance_json_response(r#"{"status": "success", "balance": [361, 7]}"#).unwrap();
        assert_eq!(parsed.status, Status::Success);
        assert_eq!(parsed.balance, Balance::default());
    }

    #[test]
    fn decode_balance_keeps_error_entries_on_failure() {
        let json = r#"
        {
          "status": "failure",
          "errors": [{"code": 3, "message": "Invalid login details"}]
        }
        "#;

        let parsed = decode_balance_json_response(json).unwrap();
        assert_eq!(parsed.status, Status::Failure);
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].code, Some(ErrorCode::new(3)));
        assert_eq!(
            parsed.errors[0].message.as_deref(),
            Some("Invalid login details")
        );
    }

    #[test]
    fn decode_balance_rejects_non_object_bodies() {
        assert!(decode_balance_json_response("[]").is_err());
        assert!(decode_balance_json_response("\"success\"").is_err());
        assert!(decode_balance_json_response("{ not json }").is_err());
    }
}
