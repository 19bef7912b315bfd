// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod runtime;
mod stage_map;
mod stage_order;
mod validation;

pub mod consts;

pub use loader::{load_and_validate_config, load_config, Config, PipelineDefaults, StageConfig};
pub use runtime::RuntimeBuilder;
pub use stage_map::StageMap;
pub use stage_order::StageOrder;
pub use validation::validate_pipeline;
