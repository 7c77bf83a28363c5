//! Transport abstraction for reaching the chat endpoint

use async_trait::async_trait;
use reqwest::Url;

use crate::error::{Error, Result};
use crate::types::{ChatRequest, ChatResponse, ErrorBody};

/// Default endpoint of the companion chat server
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5001/chat";

/// Sends one message and returns the endpoint's reply strings
#[async_trait]
pub trait Transport: Send + Sync {
    /// Post `message` and return the responses in the order received
    async fn send(&self, message: &str) -> Result<Vec<String>>;

    /// Human readable description of where messages go
    fn describe(&self) -> String {
        String::from("custom transport")
    }
}

/// JSON-over-HTTP transport: one POST per message
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Create a transport posting to `endpoint`
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create with a preconfigured reqwest client
    pub fn with_client(client: reqwest::Client, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::InvalidEndpoint(format!(
                "{}: unsupported scheme '{}'",
                endpoint,
                endpoint.scheme()
            )));
        }
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, message: &str) -> Result<Vec<String>> {
        tracing::debug!(endpoint = %self.endpoint, len = message.len(), "posting chat message");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // A JSON error body is still a reply, just one without responses
            let Ok(parsed) = serde_json::from_str::<ChatResponse>(&body) else {
                return Err(Error::api(status.as_u16(), body));
            };
            let reason = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_default();
            tracing::warn!(status = status.as_u16(), error = %reason, "endpoint reported an error");
            return Ok(parsed.responses);
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        tracing::debug!(count = parsed.responses.len(), "received chat responses");
        Ok(parsed.responses)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}
