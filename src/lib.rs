//! shimmy-relay - minimal HTTP relay for Shimmy
//!
//! This library provides the configuration, error handling and HTTP relay
//! that forwards OpenAI-style requests to a single Shimmy server.

pub mod config;
pub mod error;
pub mod proxy;

pub use config::Config;
pub use error::{Error, Result};
