// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements the `Display` trait for human-readable
//! output. Messages that carry enough context for structured emission also
//! implement [`StructuredLog`], which logs with typed fields attached.
//!
//! # Organization
//!
//! * `engine` - executor lifecycle and run events
//! * `stage` - stage execution and lifecycle events
//! * `validation` - configuration validation errors
//!
//! # Usage Pattern
//!
//! ```rust
//! use cadence::observability::messages::engine::ExecutionStarted;
//! use cadence::observability::messages::StructuredLog;
//!
//! let msg = ExecutionStarted {
//!     pipeline: "demo",
//!     stage_count: 2,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod engine;
pub mod stage;
pub mod validation;

/// Emit a message through tracing with structured fields attached.
pub trait StructuredLog {
    /// Log the message at its natural level with typed fields.
    fn log(&self);

    /// Create a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
