// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for executor lifecycle and run events.
//!
//! This module contains message types for logging events related to:
//! * Pipeline run lifecycle (start, completion, failure)
//! * Stage ordering and sequencing

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Pipeline run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use cadence::observability::messages::engine::ExecutionStarted;
///
/// let msg = ExecutionStarted {
///     pipeline: "demo",
///     stage_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ExecutionStarted<'a> {
    pub pipeline: &'a str,
    pub stage_count: usize,
}

impl Display for ExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting sequential execution of pipeline '{}': {} stages",
            self.pipeline, self.stage_count
        )
    }
}

impl StructuredLog for ExecutionStarted<'_> {
    fn log(&self) {
        tracing::info!(
            pipeline = self.pipeline,
            stage_count = self.stage_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "execution",
            span_name = name,
            pipeline = self.pipeline,
            stage_count = self.stage_count,
        )
    }
}

/// Pipeline run completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use cadence::observability::messages::engine::ExecutionCompleted;
/// use std::time::Duration;
///
/// let msg = ExecutionCompleted {
///     pipeline: "demo",
///     stage_count: 2,
///     duration: Duration::from_millis(310),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ExecutionCompleted<'a> {
    pub pipeline: &'a str,
    pub stage_count: usize,
    pub duration: std::time::Duration,
}

impl Display for ExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline '{}' completed: {} stages in {:?}",
            self.pipeline, self.stage_count, self.duration
        )
    }
}

impl StructuredLog for ExecutionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            pipeline = self.pipeline,
            stage_count = self.stage_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "execution_completed",
            span_name = name,
            pipeline = self.pipeline,
            stage_count = self.stage_count,
            duration = ?self.duration,
        )
    }
}

/// Pipeline run failed with error.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use cadence::observability::messages::engine::ExecutionFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
/// let msg = ExecutionFailed {
///     pipeline: "demo",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ExecutionFailed<'a> {
    pub pipeline: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline '{}' failed: {}",
            self.pipeline, self.error
        )
    }
}

impl StructuredLog for ExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            pipeline = self.pipeline,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "execution_failed",
            span_name = name,
            pipeline = self.pipeline,
            error = %self.error,
        )
    }
}
