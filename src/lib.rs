// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // config + runtime builder
pub mod engine;     // pipeline executors
pub mod errors;     // error handling
pub mod model;      // stage request/response types
pub mod observability;
pub mod stages;     // stage implementations
pub mod traits;     // unified abstractions
