// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for stage map creation and stage instantiation.

use std::error::Error;
use std::fmt;

/// Errors that can occur during stage map creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageMapError {
    /// A stage kind is not known to the factory
    UnknownStageKind {
        stage_id: String,
        kind: String,
    },
}

impl fmt::Display for StageMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageMapError::UnknownStageKind { stage_id, kind } => {
                write!(
                    f,
                    "Unknown stage kind '{}' for stage '{}'",
                    kind, stage_id
                )
            }
        }
    }
}

impl Error for StageMapError {}
