//! Inference Client - HTTP access to hosted pretrained models.
//!
//! Speaks the common hosted-inference shape: `POST {endpoint}` with
//! `{"inputs": "...", "parameters": {...}}` and an optional bearer token.
//! Inputs are cut to the model's character limit before they leave the
//! process.
//!
//! # Configuration
//!
//! ```ignore
//! let config = InferenceConfig::new("http://localhost:9000/models/sentiment")
//!     .with_api_token(token)
//!     .with_timeout(Duration::from_secs(10))
//!     .with_max_input_chars(512);
//!
//! let client = InferenceClient::new(config)?;
//! ```

use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::ports::ModelUnavailableError;

/// Default per-request character limit for model inputs.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 512;

/// Text sent by [`InferenceClient::probe`].
const PROBE_INPUT: &str = "Project status is on track.";

/// Configuration for one hosted model endpoint.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Full URL of the model endpoint.
    pub endpoint: String,
    /// Bearer token, if the endpoint needs one.
    api_token: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
    /// Inputs longer than this many characters are truncated.
    pub max_input_chars: usize,
}

impl InferenceConfig {
    /// Creates a configuration for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_token: None,
            timeout: Duration::from_secs(10),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }

    /// Sets the bearer token.
    pub fn with_api_token(mut self, token: Secret<String>) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the input character limit.
    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max;
        self
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<&'a Value>,
}

/// Client for a single hosted model endpoint.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    config: InferenceConfig,
    client: Client,
}

impl InferenceClient {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns `Network` if the HTTP client cannot be constructed.
    pub fn new(config: InferenceConfig) -> Result<Self, ModelUnavailableError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ModelUnavailableError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Text as the model will see it.
    pub fn model_input<'a>(&self, text: &'a str) -> &'a str {
        truncate_chars(text, self.config.max_input_chars)
    }

    /// Runs the model on `text` and decodes the response body as `T`.
    pub async fn infer<T: DeserializeOwned>(
        &self,
        text: &str,
        parameters: Option<&Value>,
    ) -> Result<T, ModelUnavailableError> {
        let body = InferenceRequest {
            inputs: self.model_input(text),
            parameters,
        };

        let mut request = self.client.post(&self.config.endpoint).json(&body);
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ModelUnavailableError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                ModelUnavailableError::Network(format!("Connection failed: {}", e))
            } else {
                ModelUnavailableError::Network(e.to_string())
            }
        })?;

        let response = Self::handle_response_status(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| ModelUnavailableError::Parse(format!("Failed to parse response: {}", e)))
    }

    /// Sends a fixed input to check that the endpoint answers.
    pub async fn probe(&self) -> Result<(), ModelUnavailableError> {
        self.infer::<Value>(PROBE_INPUT, None).await.map(|_| ())
    }

    async fn handle_response_status(response: Response) -> Result<Response, ModelUnavailableError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(ModelUnavailableError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
