// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Stage implementations for the paced pipeline.
//!
//! Each stage implements the [`Stage`](crate::traits::Stage) trait and is
//! instantiated through the configuration-driven [`StageFactory`].
//!
//! # Available Stages
//!
//! ## Paced Generator
//! Entry stage producing an integer sequence one element at a time, each
//! element preceded by a fixed `tokio::time::sleep`. Element `i` equals
//! `2 * i`; a non-positive count produces an empty sequence.
//!
//! ## Shape Dispatcher
//! Reducing stage classifying its (optional) input sequence by shape and
//! computing a single integer total from it.
//!
//! ## Stub Stages (Test-Only)
//! Testing utilities for executor development (only available in test builds):
//! - **StubStage**: forwards its input unchanged
//! - **FailingStage**: simulates failures for error handling tests
//! - **NoOutcomeStage**: tests invalid response scenarios

pub mod factory;
pub mod paced_generator;
pub mod shape_dispatcher;
#[cfg(test)]
pub mod stub;

pub use factory::StageFactory;
pub use paced_generator::PacedGenerator;
pub use shape_dispatcher::{default_sample, Shape, ShapeDispatcher};
