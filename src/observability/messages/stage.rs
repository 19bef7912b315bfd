// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for stage execution and lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Stage execution lifecycle (start, completion, failure)
//! * Generator element production

use std::fmt::{Display, Formatter};

/// Stage execution started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use cadence::observability::messages::stage::StageExecutionStarted;
///
/// let msg = StageExecutionStarted {
///     stage_id: "generate",
///     input_len: 0,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct StageExecutionStarted<'a> {
    pub stage_id: &'a str,
    pub input_len: usize,
}

impl Display for StageExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stage '{}' execution started: input_len={}",
            self.stage_id, self.input_len
        )
    }
}

/// Stage execution completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use cadence::observability::messages::stage::StageExecutionCompleted;
/// use std::time::Duration;
///
/// let msg = StageExecutionCompleted {
///     stage_id: "generate",
///     duration: Duration::from_millis(300),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct StageExecutionCompleted<'a> {
    pub stage_id: &'a str,
    pub duration: std::time::Duration,
}

impl Display for StageExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stage '{}' completed: duration={:?}",
            self.stage_id, self.duration
        )
    }
}

/// Stage execution failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use cadence::observability::messages::stage::StageExecutionFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
/// let msg = StageExecutionFailed {
///     stage_id: "dispatch",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct StageExecutionFailed<'a> {
    pub stage_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for StageExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stage '{}' execution failed: {}",
            self.stage_id, self.error
        )
    }
}

/// Generator produced one element after its delay tick.
///
/// # Log Level
/// `debug!` - Per-element detail, high volume
///
/// # Example
/// ```
/// use cadence::observability::messages::stage::ElementProduced;
///
/// let msg = ElementProduced { index: 1, value: 2 };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ElementProduced {
    pub index: usize,
    pub value: i64,
}

impl Display for ElementProduced {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Produced element {}: {}", self.index, self.value)
    }
}
