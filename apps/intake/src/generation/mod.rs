//! Generation service boundary.
//!
//! The intake form only ever talks to a `GenerationService`. The remote HTTP
//! client and the demo generator are interchangeable behind it.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::intake::{GeneratedContent, IntakeRequest};

pub mod client;
pub mod demo;
pub mod tone;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation service base URL is not configured (set API_BASE_URL)")]
    MissingBaseUrl,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode generation response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Turns founder notes into hooks, outlines and full posts.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, request: &IntakeRequest) -> Result<GeneratedContent, GenerationError>;

    /// Short description for logs and the page footer.
    fn describe(&self) -> String;
}
