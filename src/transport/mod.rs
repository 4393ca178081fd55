//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod balance;
mod envelope;
mod send_message;

pub use balance::decode_balance_json_response;
pub use envelope::TransportError;
pub use send_message::{decode_send_message_json_response, encode_send_message_form};
