// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while executing a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// A stage id in the execution order has no registered implementation
    #[error("Stage '{0}' not found in stage map")]
    StageNotFound(String),

    /// A stage returned an error outcome, or no outcome at all
    #[error("Stage '{stage_id}' failed: {error}")]
    StageFailed { stage_id: String, error: String },

    /// Executor-internal invariant violation
    #[error("Internal executor error: {message}")]
    InternalError { message: String },
}

/// How the executor reacts to a failing stage.
///
/// `FailFast` aborts the run on the first failure. `ContinueOnError` and
/// `BestEffort` record the failure and keep running, forwarding the failing
/// stage's input to its successor unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    #[default]
    FailFast,
    ContinueOnError,
    BestEffort,
}
