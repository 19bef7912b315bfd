use async_trait::async_trait;
use std::collections::HashMap;

use crate::config::{StageMap, StageOrder};
use crate::errors::{ExecutionError, FailureStrategy};
use crate::model::{RunMetadata, StageRequest, StageResponse};

#[async_trait]
pub trait PipelineExecutor: Send + Sync {
    /// Execute a pipeline given its stages and their configured order.
    ///
    /// - `stages`: registry mapping id -> stage instance
    /// - `order`: stage ids in execution order
    /// - `input`: initial request (usually [`StageRequest::empty`])
    ///
    /// Returns a Result containing either:
    /// - Ok((HashMap, RunMetadata)): per-stage responses and merged metadata
    /// - Err(ExecutionError): details about what went wrong during execution
    async fn execute(
        &self,
        stages: StageMap,
        order: StageOrder,
        input: StageRequest,
    ) -> Result<(HashMap<String, StageResponse>, RunMetadata), ExecutionError> {
        self.execute_with_strategy(stages, order, input, FailureStrategy::default())
            .await
    }

    /// Execute with a specific failure handling strategy
    async fn execute_with_strategy(
        &self,
        stages: StageMap,
        order: StageOrder,
        input: StageRequest,
        failure_strategy: FailureStrategy,
    ) -> Result<(HashMap<String, StageResponse>, RunMetadata), ExecutionError>;
}
