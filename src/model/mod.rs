// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request and response types exchanged between pipeline stages.

use std::collections::HashMap;

/// Input handed to a stage by the executor.
///
/// `values` is the integer sequence produced by the upstream stage, or `None`
/// when no upstream stage has produced one yet (entry stages, or pipelines
/// that start directly at a reducing stage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRequest {
    pub values: Option<Vec<i64>>,
}

impl StageRequest {
    /// An empty request: no upstream sequence.
    pub fn empty() -> Self {
        Self { values: None }
    }

    /// Length of the carried sequence, 0 when absent.
    pub fn len(&self) -> usize {
        self.values.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stage-level failure detail carried inside an [`Outcome::Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub code: u32,
    pub message: String,
}

/// What a stage produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A produced or transformed integer sequence, fed to the next stage.
    Values(Vec<i64>),
    /// A single reduced integer. Fed downstream as a one-element sequence.
    Total(i64),
    /// The stage failed; handling depends on the configured failure strategy.
    Error(ErrorDetail),
}

/// Result returned by a stage.
///
/// A `None` outcome is treated as a stage failure by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageResponse {
    pub outcome: Option<Outcome>,
    pub metadata: HashMap<String, String>,
}

impl StageResponse {
    /// Successful response carrying a sequence and no metadata.
    pub fn values(values: Vec<i64>) -> Self {
        Self {
            outcome: Some(Outcome::Values(values)),
            metadata: HashMap::new(),
        }
    }

    /// Successful response carrying a reduced total and no metadata.
    pub fn total(total: i64) -> Self {
        Self {
            outcome: Some(Outcome::Total(total)),
            metadata: HashMap::new(),
        }
    }

    /// Failed response with the given error detail.
    pub fn error(code: u32, message: impl Into<String>) -> Self {
        Self {
            outcome: Some(Outcome::Error(ErrorDetail {
                code,
                message: message.into(),
            })),
            metadata: HashMap::new(),
        }
    }
}

/// Per-stage metadata accumulated across a run.
///
/// Each stage's metadata is nested under its stage id so keys from different
/// stages cannot collide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunMetadata {
    pub metadata: HashMap<String, HashMap<String, String>>,
}

impl RunMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a stage response's metadata under the stage's id.
    pub fn merge_stage_response(&mut self, stage_id: &str, response: &StageResponse) {
        if response.metadata.is_empty() {
            return;
        }
        self.metadata
            .entry(stage_id.to_string())
            .or_default()
            .extend(response.metadata.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }
}
