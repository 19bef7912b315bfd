use std::sync::Arc;
use std::time::Duration;

use crate::config::consts::{DEFAULT_GENERATOR_COUNT, DEFAULT_STEP_DELAY_MS};
use crate::config::{PipelineDefaults, StageConfig};
use crate::errors::StageMapError;
use crate::traits::Stage;

use super::{PacedGenerator, ShapeDispatcher};

/// Factory for creating stage instances from configuration
pub struct StageFactory;

impl StageFactory {
    /// Create a stage instance from configuration
    ///
    /// The `stage` field in the config determines which stage to create:
    /// - "paced_generator" -> PacedGenerator (count + per-element delay)
    /// - "shape_dispatcher" -> ShapeDispatcher
    ///
    /// A generator's delay is resolved in order: stage `delay_ms`, pipeline
    /// `defaults.delay_ms`, then the built-in default.
    pub fn create_stage(
        config: &StageConfig,
        defaults: &PipelineDefaults,
    ) -> Result<Arc<dyn Stage>, StageMapError> {
        match config.stage.as_str() {
            "paced_generator" => {
                let count = config.count.unwrap_or(DEFAULT_GENERATOR_COUNT);
                let delay_ms = config
                    .delay_ms
                    .or(defaults.delay_ms)
                    .unwrap_or(DEFAULT_STEP_DELAY_MS);
                Ok(Arc::new(PacedGenerator::new(
                    count,
                    Duration::from_millis(delay_ms),
                )))
            }
            "shape_dispatcher" => Ok(Arc::new(ShapeDispatcher::new())),
            _ => Err(StageMapError::UnknownStageKind {
                stage_id: config.id.clone(),
                kind: config.stage.clone(),
            }),
        }
    }

    /// List all available stage kinds
    pub fn list_available_kinds() -> Vec<&'static str> {
        vec!["paced_generator", "shape_dispatcher"]
    }

    /// Check if a stage kind is available
    pub fn is_kind_available(kind: &str) -> bool {
        Self::list_available_kinds().contains(&kind)
    }
}
