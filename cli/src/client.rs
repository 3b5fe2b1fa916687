//! Async HTTP client for the four feedback endpoints.

use std::time::Duration;

use feedback_dashboard_shared::{
    config::API_KEY_HEADER,
    summary::{summary_or_unavailable, SUMMARY_FAILED},
    ApiConfig, ApiError, Feedback, FeedbackList, FeedbackStatus, NewFeedback, SummaryRequest,
    UpdateStatusRequest,
};
use reqwest::RequestBuilder;
use serde::Serialize;
use serde_json::Value;

/// Thin wrapper over a configured `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct FeedbackClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl FeedbackClient {
    /// Builds a client with the given per-request timeout.
    pub fn new(config: ApiConfig, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            config,
            client,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET /feedbacks. A `null` body counts as an empty list; records that
    /// do not decode are logged and left out.
    pub async fn list(&self) -> Result<Vec<Feedback>, ApiError> {
        let request = self.client.get(self.config.feedbacks_url());
        let list = FeedbackList::decode(self.send(request).await?)?;
        for reason in &list.skipped {
            tracing::warn!("skipping feedback {reason}");
        }
        Ok(list.feedbacks)
    }

    /// Looks a record up by id through [`FeedbackClient::list`].
    pub async fn find(&self, id: i64) -> Result<Option<Feedback>, ApiError> {
        let feedbacks = self.list().await?;
        Ok(feedbacks.into_iter().find(|feedback| feedback.id == id))
    }

    /// POST /feedbacks/add. Returns whatever the service echoed back.
    pub async fn create(&self, feedback: &NewFeedback) -> Result<Value, ApiError> {
        let request = self.client.post(self.config.create_url());
        self.send_json(request, feedback).await.and_then(ApiError::require_body)
    }

    /// PATCH /feedbacks/{id}/status.
    pub async fn update_status(&self, id: i64, status: FeedbackStatus) -> Result<Value, ApiError> {
        let request = self.client.patch(self.config.status_url(id));
        self.send_json(request, &UpdateStatusRequest {
            status,
        })
        .await
        .and_then(ApiError::require_body)
    }

    /// POST /feedbacks/summary, with the dashboard's fallback texts.
    pub async fn summarize(&self, message: &str) -> String {
        let request = self.client.post(self.config.summary_url());
        let body = SummaryRequest {
            feedback: message.to_string(),
        };
        match self.send_json(request, &body).await {
            Ok(value) => summary_or_unavailable(&value),
            Err(err) => {
                tracing::warn!("summary request failed: {err}");
                SUMMARY_FAILED.to_string()
            },
        }
    }

    async fn send_json<T: Serialize>(
        &self,
        request: RequestBuilder,
        body: &T,
    ) -> Result<Value, ApiError> {
        let payload = serde_json::to_vec(body).map_err(|err| ApiError::Serialize(err.to_string()))?;
        let request = request
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload);
        self.send(request).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "feedback api response");
        ApiError::check_status(status.as_u16())?;

        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|err| ApiError::Parse(err.to_string()))
    }
}
