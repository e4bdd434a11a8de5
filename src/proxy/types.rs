//! Response bodies produced by the relay itself.
//!
//! Upstream payloads are relayed as untyped `serde_json::Value`; only the
//! root endpoint and the error shape are owned here.

use serde::{Deserialize, Serialize};

/// Message returned by `GET /`.
pub const SERVICE_MESSAGE: &str = "Shimmy Express Integration";

/// Chat completions route, identical on the relay and the upstream.
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
/// Model listing route, identical on the relay and the upstream.
pub const MODELS_PATH: &str = "/v1/models";

/// Identification payload for the root endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceInfo {
    pub message: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            message: SERVICE_MESSAGE.to_string(),
        }
    }
}

/// Body of every forwarding failure: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
