//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{
    ApiErrorEntry, ApiKey, Balance, BaseUrl, ErrorCode, KnownErrorCode, SendMessage, Status,
    ValidationError,
};
use crate::transport::TransportError;

const BALANCE_PATH: &str = "balance";
const SEND_PATH: &str = "send";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).query(&query).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TextlocalClient`].
///
/// Construction problems surface as [`TextlocalError::Validation`]. Failures
/// reported by the gateway (top-level `status != "success"`) are translated
/// through the first entry of the response's error list.
pub enum TextlocalError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code with a body that is not a JSON object.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as a JSON object.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// Gateway did not recognise the command (codes 1 and 2).
    #[error("API error, unknown command.")]
    CommandNotValid,

    /// Gateway rejected the login details (code 3).
    #[error("API error, invalid api key provided.")]
    InvalidApiKey,

    /// Gateway reported a failure without a code this crate translates.
    #[error("API error, unknown.")]
    Unknown {
        code: Option<ErrorCode>,
        message: Option<String>,
    },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl TextlocalError {
    /// Translate a failed response's error list; only the first entry is considered.
    pub fn from_api_errors(errors: &[ApiErrorEntry]) -> Self {
        let Some(first) = errors.first() else {
            return Self::Unknown {
                code: None,
                message: None,
            };
        };

        match first.code.and_then(ErrorCode::known_kind) {
            Some(KnownErrorCode::NoCommandSpecified | KnownErrorCode::UnrecognisedCommand) => {
                Self::CommandNotValid
            }
            Some(KnownErrorCode::InvalidLoginDetails) => Self::InvalidApiKey,
            None => Self::Unknown {
                code: first.code,
                message: first.message.clone(),
            },
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TextlocalClient`].
///
/// Use this when you need to customize the timeout, user-agent, or the
/// underlying `reqwest::Client`. A client passed to [`http_client`] is used
/// as-is and the timeout/user-agent settings are ignored.
///
/// [`http_client`]: TextlocalClientBuilder::http_client
pub struct TextlocalClientBuilder {
    base_url: String,
    api_key: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl TextlocalClientBuilder {
    /// Create a builder; nothing is validated until [`TextlocalClientBuilder::build`].
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: None,
            user_agent: None,
            http_client: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured `reqwest::Client` as the transport.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Validate the configuration and build a [`TextlocalClient`].
    pub fn build(self) -> Result<TextlocalClient, TextlocalError> {
        let base_url = BaseUrl::new(self.base_url)?;
        let api_key = ApiKey::new(self.api_key)?;

        let client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                builder
                    .build()
                    .map_err(|err| TextlocalError::Transport(Box::new(err)))?
            }
        };

        Ok(TextlocalClient {
            api_key,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Textlocal client.
///
/// Holds the gateway base URL, the API key and a shared HTTP transport. The
/// client is immutable after construction and can be cloned or shared across
/// tasks freely.
pub struct TextlocalClient {
    api_key: ApiKey,
    base_url: BaseUrl,
    http: Arc<dyn HttpTransport>,
}

impl TextlocalClient {
    /// Create a client with a default `reqwest::Client`.
    ///
    /// Fails with [`ValidationError::EmptyBaseUrl`] or [`ValidationError::MissingApiKey`]
    /// (checked in that order), or [`ValidationError::InvalidBaseUrl`] when the base URL is
    /// not an absolute URL (`"localhost"` is rejected, `"http://localhost"` is accepted).
    /// Pass [`crate::DEFAULT_BASE_URL`] for the production gateway.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, TextlocalError> {
        Self::with_http_client(base_url, api_key, reqwest::Client::new())
    }

    /// Create a client that sends requests through `client`.
    pub fn with_http_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client: reqwest::Client,
    ) -> Result<Self, TextlocalError> {
        TextlocalClientBuilder::new(base_url, api_key)
            .http_client(client)
            .build()
    }

    /// Start building a client with custom settings.
    pub fn builder(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> TextlocalClientBuilder {
        TextlocalClientBuilder::new(base_url, api_key)
    }

    /// Base URL with trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Fetch the remaining SMS and MMS credits on the account.
    ///
    /// Errors:
    /// - [`TextlocalError::CommandNotValid`], [`TextlocalError::InvalidApiKey`] or
    ///   [`TextlocalError::Unknown`] when the gateway reports a failure,
    /// - [`TextlocalError::Transport`] / [`TextlocalError::Parse`] for I/O and decoding failures.
    pub async fn get_balance(&self) -> Result<Balance, TextlocalError> {
        let url = self.base_url.endpoint(BALANCE_PATH);
        debug!(url = %url, "requesting textlocal balance");

        let response = self
            .http
            .get(&url, self.auth_params())
            .await
            .map_err(TextlocalError::Transport)?;

        let parsed = decode_body(response, crate::transport::decode_balance_json_response)?;
        if parsed.status != Status::Success {
            return Err(api_failure(&url, &parsed.errors));
        }

        debug!(
            sms = parsed.balance.sms,
            mms = parsed.balance.mms,
            "textlocal balance received"
        );
        Ok(parsed.balance)
    }

    /// Send one message to every recipient in `request`.
    ///
    /// Recipients are sent as a single comma-joined `numbers` field.
    ///
    /// Errors: same as [`TextlocalClient::get_balance`].
    pub async fn send_message(&self, request: SendMessage) -> Result<(), TextlocalError> {
        let url = self.base_url.endpoint(SEND_PATH);
        debug!(
            url = %url,
            recipients = request.recipients().len(),
            sender = request.sender().as_str(),
            "sending textlocal message"
        );

        let mut params = self.auth_params();
        params.extend(crate::transport::encode_send_message_form(&request));

        let response = self
            .http
            .post_form(&url, params)
            .await
            .map_err(TextlocalError::Transport)?;

        let parsed = decode_body(response, crate::transport::decode_send_message_json_response)?;
        if parsed.status != Status::Success {
            return Err(api_failure(&url, &parsed.errors));
        }

        Ok(())
    }

    fn auth_params(&self) -> Vec<(String, String)> {
        vec![(ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned())]
    }
}

fn decode_body<T>(
    response: HttpResponse,
    decode: impl FnOnce(&str) -> Result<T, TransportError>,
) -> Result<T, TextlocalError> {
    debug!(status = response.status, "textlocal response received");

    match decode(&response.body) {
        Ok(parsed) => Ok(parsed),
        Err(_) if !(200..=299).contains(&response.status) => {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            Err(TextlocalError::HttpStatus {
                status: response.status,
                body,
            })
        }
        Err(err) => Err(TextlocalError::Parse(Box::new(err))),
    }
}

fn api_failure(url: &str, errors: &[ApiErrorEntry]) -> TextlocalError {
    let first = errors.first();
    warn!(
        url = %url,
        code = ?first.and_then(|entry| entry.code).map(ErrorCode::as_i64),
        message = ?first.and_then(|entry| entry.message.as_deref()),
        "textlocal reported a failure"
    );
    TextlocalError::from_api_errors(errors)
}
