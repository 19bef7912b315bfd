// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur during pipeline configuration validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two stages share the same id
    DuplicateStageId {
        /// The duplicate stage ID
        stage_id: String,
    },
    /// The configuration declares no stages at all
    EmptyPipeline,
    /// A stage carries an option that its kind does not understand
    OptionNotApplicable {
        /// The stage carrying the option
        stage_id: String,
        /// The option that does not apply to this stage kind
        option: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateStageId { stage_id } => {
                write!(f, "Duplicate stage ID: '{}'", stage_id)
            }
            ValidationError::EmptyPipeline => {
                write!(f, "Pipeline configuration declares no stages")
            }
            ValidationError::OptionNotApplicable { stage_id, option } => {
                write!(
                    f,
                    "Stage '{}' sets option '{}' which its stage kind does not use",
                    stage_id, option
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
