use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::{Config, GenerationMode};
use crate::errors::AppError;
use crate::generation::client::HttpGenerationService;
use crate::generation::demo::DemoGenerationService;
use crate::generation::GenerationService;
use crate::intake::view::IntakeView;
use crate::render::PageRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Remote HTTP client or demo generator, chosen by `GENERATION_MODE`.
    pub generator: Arc<dyn GenerationService>,
    /// The single intake view every request reads and submits into. The page
    /// is single-user: every client sees the same view, there are no sessions.
    pub view: Arc<RwLock<IntakeView>>,
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let generator: Arc<dyn GenerationService> = match config.generation_mode {
            GenerationMode::Remote => {
                Arc::new(HttpGenerationService::new(config.api_base_url.clone()))
            }
            GenerationMode::Demo => Arc::new(DemoGenerationService),
        };
        let renderer = PageRenderer::new(generator.describe())?;

        Ok(Self {
            config,
            generator,
            view: Arc::default(),
            renderer: Arc::new(renderer),
        })
    }
}
