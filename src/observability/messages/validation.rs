// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation errors.
//!
//! This module contains message types for logging events related to:
//! * Duplicate stage id detection
//! * Empty pipeline detection
//! * Inapplicable stage option detection

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration validation failed with one or more errors.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use cadence::observability::messages::validation::ValidationFailed;
///
/// let msg = ValidationFailed {
///     config_path: "configs/pipeline.yaml",
///     error_count: 2,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ValidationFailed<'a> {
    pub config_path: &'a str,
    pub error_count: usize,
}

impl Display for ValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Validation of '{}' failed with {} error(s)",
            self.config_path, self.error_count
        )
    }
}

impl StructuredLog for ValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            config_path = self.config_path,
            error_count = self.error_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation_failed",
            span_name = name,
            config_path = self.config_path,
            error_count = self.error_count,
        )
    }
}
