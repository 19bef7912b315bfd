// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::FailureStrategy;
use crate::observability::messages::validation::ValidationFailed;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure for a paced pipeline run.
///
/// This struct represents the complete configuration for one pipeline,
/// including the failure strategy, shared stage defaults, and the ordered
/// stage definitions. It is typically loaded from a YAML configuration file.
///
/// # Fields
/// * `pipeline` - Display name for the pipeline (optional, defaults to "pipeline")
/// * `failure_strategy` - How to handle stage failures (optional, defaults to FailFast)
/// * `defaults` - Shared stage defaults (optional)
/// * `stages` - Ordered stage configurations; execution follows declaration order
///
/// # Example
/// ```yaml
/// pipeline: demo
/// failure_strategy: fail_fast
/// defaults:
///   delay_ms: 100
/// stages:
///   - id: generate
///     stage: paced_generator
///     count: 3
///   - id: dispatch
///     stage: shape_dispatcher
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_pipeline_name")]
    pub pipeline: String,
    #[serde(default)]
    pub failure_strategy: FailureStrategy,
    #[serde(default)]
    pub defaults: PipelineDefaults,
    pub stages: Vec<StageConfig>,
}

fn default_pipeline_name() -> String {
    "pipeline".to_string()
}

impl Config {
    /// Override the element count of every generator stage.
    ///
    /// Used by the CLI's `--count` flag; stages of other kinds are untouched.
    pub fn override_generator_count(&mut self, count: i64) {
        for stage in &mut self.stages {
            if stage.stage == "paced_generator" {
                stage.count = Some(count);
            }
        }
    }
}

/// Shared defaults applied to stages that do not configure their own values.
///
/// # Fields
/// * `delay_ms` - Per-element delay for generator stages (optional)
#[derive(Debug, Deserialize, Default)]
pub struct PipelineDefaults {
    pub delay_ms: Option<u64>,
}

/// Configuration for a single stage in the pipeline.
///
/// Each stage is one step of the chain. The `stage` field names the
/// implementation kind the factory instantiates; remaining fields are
/// kind-specific options.
///
/// # Fields
/// * `id` - Unique identifier for this stage
/// * `stage` - Implementation kind ("paced_generator", "shape_dispatcher")
/// * `count` - Element count (generator stages)
/// * `delay_ms` - Per-element delay in milliseconds (generator stages)
///
/// # Example
/// ```yaml
/// id: "generate"
/// stage: paced_generator
/// count: 3
/// delay_ms: 100
/// ```
#[derive(Debug, Deserialize)]
pub struct StageConfig {
    pub id: String,
    pub stage: String,
    pub count: Option<i64>,    // for paced_generator
    pub delay_ms: Option<u64>, // for paced_generator
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// This function loads the configuration and validates the stage list to
/// ensure ids are unique and stage options are coherent.
pub fn load_and_validate_config<P: AsRef<Path>>(
    path: P,
) -> Result<Config, Box<dyn std::error::Error>> {
    let config_path = path.as_ref().display().to_string();
    let cfg = load_config(path)?;

    if let Err(validation_errors) = crate::config::validate_pipeline(&cfg) {
        ValidationFailed {
            config_path: &config_path,
            error_count: validation_errors.len(),
        }
        .log();
        // Convert validation errors into a single error message
        let error_messages: Vec<String> = validation_errors.iter().map(|e| e.to_string()).collect();
        let combined_error = format!(
            "Configuration validation failed:\n{}",
            error_messages.join("\n")
        );
        return Err(combined_error.into());
    }

    Ok(cfg)
}
