// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::{StageRequest, StageResponse};
use crate::traits::Stage;

/// A stub stage implementation for testing and placeholder purposes
pub struct StubStage {
    pub id: String,
}

impl StubStage {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[async_trait::async_trait]
impl Stage for StubStage {
    async fn process(&self, req: StageRequest) -> StageResponse {
        // Forward the input sequence unchanged so chain tests can observe flow
        StageResponse::values(req.values.unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// A stage that always fails for testing failure scenarios
pub struct FailingStage {
    pub id: String,
}

impl FailingStage {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[async_trait::async_trait]
impl Stage for FailingStage {
    async fn process(&self, _req: StageRequest) -> StageResponse {
        StageResponse::error(500, "Simulated stage failure")
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// A stage that returns no outcome for testing invalid response scenarios
pub struct NoOutcomeStage {
    pub id: String,
}

impl NoOutcomeStage {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[async_trait::async_trait]
impl Stage for NoOutcomeStage {
    async fn process(&self, _req: StageRequest) -> StageResponse {
        StageResponse {
            outcome: None,
            metadata: std::collections::HashMap::new(),
        }
    }

    fn name(&self) -> &'static str {
        "no_outcome"
    }
}
