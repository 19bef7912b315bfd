// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use crate::config::Config;
use crate::errors::ValidationError;

/// Validate a pipeline configuration before building its runtime.
///
/// Checks performed:
/// 1. The stage list is non-empty
/// 2. Stage ids are unique
/// 3. Generator-only options (`count`, `delay_ms`) do not appear on other kinds
///
/// All violations are collected and returned together so a misconfigured
/// pipeline is reported in one pass.
pub fn validate_pipeline(cfg: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if cfg.stages.is_empty() {
        errors.push(ValidationError::EmptyPipeline);
    }

    let mut seen = HashSet::new();
    for stage in &cfg.stages {
        if !seen.insert(stage.id.as_str()) {
            errors.push(ValidationError::DuplicateStageId {
                stage_id: stage.id.clone(),
            });
        }

        if stage.stage != "paced_generator" {
            if stage.count.is_some() {
                errors.push(ValidationError::OptionNotApplicable {
                    stage_id: stage.id.clone(),
                    option: "count".to_string(),
                });
            }
            if stage.delay_ms.is_some() {
                errors.push(ValidationError::OptionNotApplicable {
                    stage_id: stage.id.clone(),
                    option: "delay_ms".to_string(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
