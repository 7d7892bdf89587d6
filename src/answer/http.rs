//! HTTP answer service for `POST /api/chat`.

use url::Url;

use super::AnswerService;
use crate::config::WidgetConfig;
use crate::error::{Result, WidgetError};
use crate::message::{ChatReply, ChatRequest};

/// Answer service backed by a JSON endpoint.
///
/// # Example
///
/// ```rust,no_run
/// use chat_widget::{AnswerService, HttpAnswerService};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = HttpAnswerService::new("http://localhost:5000/api/chat")?;
/// let answer = service.ask("How do I list an item?").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpAnswerService {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpAnswerService {
    /// Create a service for an absolute endpoint URL.
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self> {
        let endpoint = Url::parse(endpoint.as_ref())?;
        Ok(Self::with_client(endpoint, reqwest::Client::new()))
    }

    /// Create a service with a custom reqwest client.
    pub fn with_client(endpoint: Url, http: reqwest::Client) -> Self {
        Self { endpoint, http }
    }

    /// Create a service from config, resolving a relative endpoint
    /// against `base` (the page URL in the browser).
    pub fn from_config(config: &WidgetConfig, base: &str) -> Result<Self> {
        let endpoint = config.endpoint_url(base)?;
        Ok(Self::with_client(endpoint, reqwest::Client::new()))
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn handle_response(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ChatReply>(&body) {
            // An `error` body wins regardless of status; the service sends
            // these with 400 and 500.
            Ok(reply @ ChatReply::Error { .. }) => reply.into_answer(),
            _ if !status.is_success() => Err(WidgetError::Status {
                status: status.as_u16(),
                body,
            }),
            Ok(reply) => reply.into_answer(),
            Err(err) => Err(WidgetError::Decode(err.to_string())),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, question: &str) -> Result<String> {
        let req = ChatRequest {
            question: question.to_string(),
        };
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&req)
            .send()
            .await?;
        Self::handle_response(response).await
    }
}
