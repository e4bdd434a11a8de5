//! HTTP relay module.
//!
//! This module serves the root endpoint and the OpenAI-compatible routes,
//! forwarding the latter unchanged to the configured Shimmy server.

mod handlers;
mod server;
pub mod types;

pub use server::{create_router, run_server, AppState};
pub use types::{ErrorBody, ServiceInfo};
