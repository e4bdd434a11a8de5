//! HTTP request handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{Map, Value};

use super::server::AppState;
use super::types::{ServiceInfo, CHAT_COMPLETIONS_PATH, MODELS_PATH};
use crate::error::{Error, Result};

/// Decode an upstream body, keeping text that is not JSON as a JSON string.
fn decode_body(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

/// Send a prepared upstream request and decode its body.
///
/// Transport errors, timeouts and non-2xx statuses all become
/// [`Error::Upstream`].
async fn forward(request: reqwest::RequestBuilder, url: &str) -> Result<Value> {
    let result = async {
        let response = request.send().await?.error_for_status()?;
        let text = response.text().await?;
        Ok::<_, reqwest::Error>(decode_body(text))
    }
    .await;

    match result {
        Ok(body) => {
            tracing::debug!(url = %url, "Upstream request succeeded");
            Ok(body)
        }
        Err(e) => {
            tracing::error!(
                url = %url,
                status = ?e.status(),
                error = %e,
                "Upstream request failed"
            );
            Err(Error::from(e))
        }
    }
}

/// Handle GET /
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

/// Handle POST /v1/chat/completions
///
/// A body sent without a JSON content type is not parsed and an empty object
/// is forwarded in its place. Malformed JSON is still rejected.
pub async fn chat_completions(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Map::new()),
        Err(rejection) => return Err(Error::from(rejection)),
    };

    let url = state.config.upstream_url(CHAT_COMPLETIONS_PATH);
    tracing::info!(
        url = %url,
        model = ?body.get("model").and_then(|m| m.as_str()),
        "Forwarding chat completion request"
    );

    let request = state.http_client.post(&url).json(&body);
    forward(request, &url).await.map(Json)
}

/// Handle GET /v1/models
pub async fn list_models(State(state): State<AppState>) -> Result<Json<Value>> {
    let url = state.config.upstream_url(MODELS_PATH);
    tracing::info!(url = %url, "Forwarding model listing request");

    let request = state.http_client.get(&url);
    forward(request, &url).await.map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    /// State pointing at a loopback port that was just released.
    fn unreachable_state() -> AppState {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        AppState {
            http_client: reqwest::Client::new(),
            config: Arc::new(Config::new(0, format!("http://127.0.0.1:{}", port)).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_root_payload() {
        let Json(info) = root().await;
        assert_eq!(info.message, "Shimmy Express Integration");
    }

    #[tokio::test]
    async fn test_list_models_unreachable_is_500() {
        let err = list_models(State(unreachable_state())).await.unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
        assert!(!err.to_string().is_empty());

        let response = err.into_response();
        assert_eq!(
            response.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_chat_completions_unreachable_is_500() {
        let body = serde_json::json!({ "model": "phi3", "messages": [] });
        let err = chat_completions(State(unreachable_state()), Ok(Json(body)))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Upstream(ref e) if e.status().is_none()));
    }

    #[test]
    fn test_decode_body_json() {
        let value = decode_body(r#"{"object":"list","data":[]}"#.to_string());
        assert_eq!(value, serde_json::json!({"object": "list", "data": []}));
    }

    #[test]
    fn test_decode_body_plain_text_kept_as_string() {
        assert_eq!(
            decode_body("not json".to_string()),
            Value::String("not json".to_string())
        );
        assert_eq!(decode_body(String::new()), Value::String(String::new()));
    }
}
