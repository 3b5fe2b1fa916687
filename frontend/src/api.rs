use feedback_dashboard_shared::{
    config::API_KEY_HEADER,
    summary::{summary_or_unavailable, SUMMARY_FAILED},
    ApiConfig, ApiError, Feedback, FeedbackList, FeedbackStatus, NewFeedback, SummaryRequest,
    UpdateStatusRequest,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsValue;

// API base URL 与 key 编译时从 FEEDBACK_API_BASE / FEEDBACK_API_KEY 读取
fn config() -> ApiConfig {
    ApiConfig::from_build_env()
}

pub fn log_error(context: &str, err: &ApiError) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{context}: {err}")));
}

/// GET /feedbacks. Records that do not decode are logged and left out.
pub async fn fetch_feedbacks() -> Result<Vec<Feedback>, ApiError> {
    let config = config();
    let response = Request::get(&config.feedbacks_url())
        .header(API_KEY_HEADER, &config.api_key)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let list = FeedbackList::decode(read_json(response).await?)?;
    for reason in &list.skipped {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Skipping feedback {reason}")));
    }
    Ok(list.feedbacks)
}

/// POST /feedbacks/add
pub async fn create_feedback(request: &NewFeedback) -> Result<(), ApiError> {
    let config = config();
    let builder = Request::post(&config.create_url()).header(API_KEY_HEADER, &config.api_key);
    send_json(builder, request).await.map(drop)
}

/// PATCH /feedbacks/:id/status
pub async fn update_feedback_status(id: i64, status: FeedbackStatus) -> Result<(), ApiError> {
    let config = config();
    let builder = Request::patch(&config.status_url(id)).header(API_KEY_HEADER, &config.api_key);
    send_json(builder, &UpdateStatusRequest {
        status,
    })
    .await
    .map(drop)
}

/// POST /feedbacks/summary
///
/// Never fails: the reply or the error is turned into display text.
pub async fn fetch_feedback_summary(message: &str) -> String {
    let config = config();
    let builder = Request::post(&config.summary_url()).header(API_KEY_HEADER, &config.api_key);
    let request = SummaryRequest {
        feedback: message.to_string(),
    };

    match post_for_value(builder, &request).await {
        Ok(value) => summary_or_unavailable(&value),
        Err(err) => {
            log_error("Error getting feedback summary", &err);
            SUMMARY_FAILED.to_string()
        },
    }
}

/// Sends a JSON body and requires a 2xx status with a non-empty JSON reply.
async fn send_json<T: Serialize>(builder: RequestBuilder, body: &T) -> Result<Value, ApiError> {
    post_for_value(builder, body).await.and_then(ApiError::require_body)
}

async fn post_for_value<T: Serialize>(builder: RequestBuilder, body: &T) -> Result<Value, ApiError> {
    let response = builder
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    read_json(response).await
}

async fn read_json(response: Response) -> Result<Value, ApiError> {
    ApiError::check_status(response.status())?;
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
}
