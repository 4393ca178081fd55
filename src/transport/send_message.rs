use serde::Deserialize;

use super::envelope::{
    Lenient, TransportError, TransportErrors, decode_errors, decode_object, decode_status,
};
use crate::domain::{MessageText, RawPhoneNumber, SendMessage, SenderName, StatusResponse};

#[derive(Debug, Clone, Deserialize)]
struct SendMessageJsonResponse {
    #[serde(default)]
    status: Option<Lenient<String>>,
    #[serde(default)]
    error: Option<TransportErrors>,
    #[serde(default)]
    errors: Option<TransportErrors>,
}

pub fn encode_send_message_form(request: &SendMessage) -> Vec<(String, String)> {
    let numbers = request
        .recipients()
        .iter()
        .map(RawPhoneNumber::raw)
        .collect::<Vec<_>>()
        .join(",");

    vec![
        (RawPhoneNumber::FIELD.to_owned(), numbers),
        (
            MessageText::FIELD.to_owned(),
            request.message().as_str().to_owned(),
        ),
        (
            SenderName::FIELD.to_owned(),
            request.sender().as_str().to_owned(),
        ),
    ]
}

pub fn decode_send_message_json_response(json: &str) -> Result<StatusResponse, TransportError> {
    let parsed: SendMessageJsonResponse = decode_object(json)?;
    Ok(StatusResponse {
        status: decode_status(parsed.status),
        errors: decode_errors(parsed.error, parsed.errors),
    })
}
