// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Instant;

use crate::config::{StageMap, StageOrder};
use crate::errors::{ExecutionError, FailureStrategy};
use crate::model::{Outcome, RunMetadata, StageRequest, StageResponse};
use crate::observability::messages::engine::{
    ExecutionCompleted, ExecutionFailed, ExecutionStarted,
};
use crate::observability::messages::stage::{
    StageExecutionCompleted, StageExecutionFailed, StageExecutionStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::PipelineExecutor;

/// Sequential executor - runs the stage chain strictly in order.
///
/// Each stage runs to completion before its successor starts. The only
/// suspension points during a run are the ones stages themselves await
/// (the paced generator's per-element sleeps); no stage ever runs
/// concurrently with another.
///
/// ## Payload Threading
///
/// The executor threads each stage's outcome into the next stage's request:
/// - `Values(v)` becomes the next request's sequence
/// - `Total(t)` becomes a one-element sequence `[t]`
/// - `Error` / missing outcome: per failure strategy, either the run aborts
///   or the failing stage's input is forwarded unchanged
pub struct SequentialExecutor {
    /// Display name of the pipeline, used in log events
    pipeline: String,
}

impl SequentialExecutor {
    /// Create a new sequential executor with a generic pipeline name
    pub fn new() -> Self {
        Self::named("pipeline")
    }

    /// Create a new sequential executor logging under the given pipeline name
    pub fn named(pipeline: impl Into<String>) -> Self {
        Self {
            pipeline: pipeline.into(),
        }
    }

    /// The request handed to the stage after this response.
    ///
    /// Returns `None` for error or missing outcomes; the caller decides what
    /// to forward based on the failure strategy.
    fn next_request(response: &StageResponse) -> Option<StageRequest> {
        match &response.outcome {
            Some(Outcome::Values(values)) => Some(StageRequest {
                values: Some(values.clone()),
            }),
            Some(Outcome::Total(total)) => Some(StageRequest {
                values: Some(vec![*total]),
            }),
            Some(Outcome::Error(_)) | None => None,
        }
    }

    /// Failure description for a response with an error or missing outcome.
    fn failure_message(response: &StageResponse) -> String {
        match &response.outcome {
            Some(Outcome::Error(detail)) => detail.message.clone(),
            _ => "Stage returned no outcome".to_string(),
        }
    }
}

impl Default for SequentialExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PipelineExecutor for SequentialExecutor {
    async fn execute_with_strategy(
        &self,
        stages: StageMap,
        order: StageOrder,
        input: StageRequest,
        failure_strategy: FailureStrategy,
    ) -> Result<(HashMap<String, StageResponse>, RunMetadata), ExecutionError> {
        let run_started = Instant::now();
        ExecutionStarted {
            pipeline: &self.pipeline,
            stage_count: order.len(),
        }
        .log();

        let mut results = HashMap::new();
        let mut run_metadata = RunMetadata::new();
        let mut request = input;

        for stage_id in order.iter() {
            let stage = stages
                .get(stage_id)
                .ok_or_else(|| ExecutionError::StageNotFound(stage_id.clone()))?;

            tracing::info!(
                "{}",
                StageExecutionStarted {
                    stage_id,
                    input_len: request.len(),
                }
            );

            let stage_started = Instant::now();
            let response = stage.process(request.clone()).await;
            let duration = stage_started.elapsed();

            match Self::next_request(&response) {
                Some(next) => {
                    tracing::info!("{}", StageExecutionCompleted { stage_id, duration });
                    request = next;
                }
                None => {
                    let error = ExecutionError::StageFailed {
                        stage_id: stage_id.clone(),
                        error: Self::failure_message(&response),
                    };
                    tracing::error!(
                        "{}",
                        StageExecutionFailed {
                            stage_id,
                            error: &error,
                        }
                    );

                    match failure_strategy {
                        FailureStrategy::FailFast => {
                            ExecutionFailed {
                                pipeline: &self.pipeline,
                                error: &error,
                            }
                            .log();
                            return Err(error);
                        }
                        FailureStrategy::ContinueOnError | FailureStrategy::BestEffort => {
                            // Failing stage's input is forwarded to its successor unchanged
                        }
                    }
                }
            }

            run_metadata.merge_stage_response(stage_id, &response);
            results.insert(stage_id.clone(), response);
        }

        ExecutionCompleted {
            pipeline: &self.pipeline,
            stage_count: results.len(),
            duration: run_started.elapsed(),
        }
        .log();

        Ok((results, run_metadata))
    }
}
