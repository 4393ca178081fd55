//! Typed Rust client for the Textlocal SMS gateway HTTP API.
//!
//! The crate is split into a domain layer of validated types, a transport
//! layer for wire-format quirks, and a small client layer orchestrating the
//! two supported calls: balance lookup and message sending.
//!
//! ```rust,no_run
//! use textlocal::{
//!     DEFAULT_BASE_URL, MessageText, RawPhoneNumber, SendMessage, SenderName, TextlocalClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), textlocal::TextlocalError> {
//!     let client = TextlocalClient::new(DEFAULT_BASE_URL, "...")?;
//!     let balance = client.get_balance().await?;
//!     println!("{} SMS credits left", balance.sms);
//!
//!     let request = SendMessage::new(
//!         vec![RawPhoneNumber::new("447400123456")?],
//!         MessageText::new("hello")?,
//!         SenderName::new("Acme")?,
//!     )?;
//!     client.send_message(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{TextlocalClient, TextlocalClientBuilder, TextlocalError};
pub use domain::{
    ApiErrorEntry, ApiKey, Balance, BaseUrl, DEFAULT_BASE_URL, ErrorCode, KnownErrorCode,
    MessageText, PhoneNumber, RawPhoneNumber, SendMessage, SenderName, ValidationError,
};
