// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! End-to-end tests wiring configuration, stages, and the executor together.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, RuntimeBuilder, StageMap, StageOrder};
use crate::model::{Outcome, StageRequest};
use crate::stages::{PacedGenerator, ShapeDispatcher};
use crate::traits::PipelineExecutor;

use super::SequentialExecutor;

#[tokio::test]
async fn generate_then_dispatch_from_config() {
    let cfg: Config = serde_yaml::from_str(
        r#"
pipeline: demo
stages:
  - id: generate
    stage: paced_generator
    count: 3
    delay_ms: 1
  - id: dispatch
    stage: shape_dispatcher
"#,
    )
    .unwrap();

    let (stages, order, executor, failure_strategy) = RuntimeBuilder::from_config(&cfg).unwrap();

    let (results, run_metadata) = executor
        .execute_with_strategy(stages, order, StageRequest::empty(), failure_strategy)
        .await
        .unwrap();

    // count=3 -> [0, 2, 4] -> 0 + (2 + 4)
    assert_eq!(
        results.get("generate").unwrap().outcome,
        Some(Outcome::Values(vec![0, 2, 4]))
    );
    assert_eq!(
        results.get("dispatch").unwrap().outcome,
        Some(Outcome::Total(6))
    );

    let dispatch_metadata = run_metadata.metadata.get("dispatch").unwrap();
    assert_eq!(dispatch_metadata.get("shape").unwrap(), "non_empty");
    assert_eq!(dispatch_metadata.get("total").unwrap(), "6");
}

#[tokio::test]
async fn dispatcher_only_pipeline_uses_default_sample() {
    let cfg: Config = serde_yaml::from_str(
        r#"
pipeline: dispatch-only
stages:
  - id: dispatch
    stage: shape_dispatcher
"#,
    )
    .unwrap();

    let (stages, order, executor, failure_strategy) = RuntimeBuilder::from_config(&cfg).unwrap();

    let (results, _) = executor
        .execute_with_strategy(stages, order, StageRequest::empty(), failure_strategy)
        .await
        .unwrap();

    // No upstream sequence -> [0, 2, 4, 6, 8] -> first 0 + rest sum 20
    assert_eq!(
        results.get("dispatch").unwrap().outcome,
        Some(Outcome::Total(20))
    );
}

#[tokio::test]
async fn zero_count_generator_dispatches_to_zero() {
    let mut stages = StageMap::new();
    stages.insert(
        "generate".to_string(),
        Arc::new(PacedGenerator::new(0, Duration::from_millis(1))),
    );
    stages.insert("dispatch".to_string(), Arc::new(ShapeDispatcher::new()));

    let order = StageOrder::from(vec!["generate", "dispatch"]);
    let executor = SequentialExecutor::named("zero-count");

    let (results, _) = executor
        .execute(stages, order, StageRequest::empty())
        .await
        .unwrap();

    // Generator produced [], which is an empty (not absent) sequence
    assert_eq!(
        results.get("generate").unwrap().outcome,
        Some(Outcome::Values(vec![]))
    );
    assert_eq!(
        results.get("dispatch").unwrap().outcome,
        Some(Outcome::Total(0))
    );
}

#[tokio::test]
async fn generator_completes_before_dispatcher_consumes() {
    let mut stages = StageMap::new();
    stages.insert(
        "generate".to_string(),
        Arc::new(PacedGenerator::new(4, Duration::from_millis(2))),
    );
    stages.insert("dispatch".to_string(), Arc::new(ShapeDispatcher::new()));

    let order = StageOrder::from(vec!["generate", "dispatch"]);
    let executor = SequentialExecutor::named("paced");

    let started = std::time::Instant::now();
    let (results, _) = executor
        .execute(stages, order, StageRequest::empty())
        .await
        .unwrap();

    // Four elements, each preceded by a 2ms sleep, all elapsed sequentially
    assert!(started.elapsed() >= Duration::from_millis(8));
    // [0, 2, 4, 6] -> first 0 + rest sum 12
    assert_eq!(
        results.get("dispatch").unwrap().outcome,
        Some(Outcome::Total(12))
    );
}
