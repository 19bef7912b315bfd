// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{Config, StageMap, StageOrder};
use crate::engine::SequentialExecutor;
use crate::errors::{FailureStrategy, StageMapError};
use crate::stages::StageFactory;
use crate::traits::PipelineExecutor;

/// Pipeline runtime builder - turns a validated configuration into the
/// pieces the executor needs.
///
/// The `RuntimeBuilder` coordinates stage instantiation and executor
/// selection so callers get a ready-to-run pipeline from one call.
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build a complete pipeline runtime from configuration.
    ///
    /// Creates and returns:
    /// - `StageMap`: registry of all configured stages
    /// - `StageOrder`: stage ids in declaration (= execution) order
    /// - `Box<dyn PipelineExecutor>`: the sequential executor
    /// - `FailureStrategy`: how to handle stage failures
    ///
    /// # Arguments
    /// * `cfg` - Configuration containing stage definitions and options
    pub fn from_config(
        cfg: &Config,
    ) -> Result<(StageMap, StageOrder, Box<dyn PipelineExecutor>, FailureStrategy), StageMapError>
    {
        let mut stages = StageMap::new();
        let mut order = StageOrder::new();

        for stage_config in &cfg.stages {
            let stage = StageFactory::create_stage(stage_config, &cfg.defaults)?;
            stages.insert(stage_config.id.clone(), stage);
            order.add(stage_config.id.clone());
        }

        let executor: Box<dyn PipelineExecutor> = Box::new(SequentialExecutor::named(cfg.pipeline.clone()));
        Ok((stages, order, executor, cfg.failure_strategy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_runtime_from_config() {
        let cfg: Config = serde_yaml::from_str(
            r#"
failure_strategy: best_effort
stages:
  - id: generate
    stage: paced_generator
    count: 2
    delay_ms: 1
  - id: dispatch
    stage: shape_dispatcher
"#,
        )
        .unwrap();

        let (stages, order, _executor, failure_strategy) =
            RuntimeBuilder::from_config(&cfg).unwrap();

        assert_eq!(stages.len(), 2);
        assert!(stages.contains_key("generate"));
        assert!(stages.contains_key("dispatch"));
        assert_eq!(
            order.iter().collect::<Vec<_>>(),
            vec!["generate", "dispatch"]
        );
        assert_eq!(failure_strategy, FailureStrategy::BestEffort);
    }

    #[test]
    fn unknown_stage_kind_fails() {
        let cfg: Config = serde_yaml::from_str(
            r#"
stages:
  - id: mystery
    stage: does_not_exist
"#,
        )
        .unwrap();

        let result = RuntimeBuilder::from_config(&cfg);
        assert!(matches!(
            result,
            Err(StageMapError::UnknownStageKind { ref stage_id, .. }) if stage_id == "mystery"
        ));
    }
}
