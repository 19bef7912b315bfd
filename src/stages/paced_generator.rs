// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::consts::STEP_MULTIPLIER;
use crate::model::{StageRequest, StageResponse};
use crate::observability::messages::stage::ElementProduced;
use crate::traits::Stage;

/// Paced Generator stage - produces `count` integers, one per delay tick.
///
/// Element `i` (0-indexed) equals `2 * i`. Each element's production is
/// preceded by a `tokio::time::sleep`, a real suspension point on the
/// runtime. Nothing else is scheduled alongside a sequential pipeline, so
/// the sleeps simply pace the sequence out in time.
///
/// A negative `count` produces an empty sequence; it is not an error.
pub struct PacedGenerator {
    count: i64,
    delay: Duration,
}

impl PacedGenerator {
    pub fn new(count: i64, delay: Duration) -> Self {
        Self { count, delay }
    }
}

#[async_trait]
impl Stage for PacedGenerator {
    async fn process(&self, _req: StageRequest) -> StageResponse {
        // Entry stage: upstream values, if any, are ignored.
        let steps = usize::try_from(self.count).unwrap_or(0);

        let mut values = Vec::with_capacity(steps);
        for index in 0..steps {
            tokio::time::sleep(self.delay).await;
            let value = STEP_MULTIPLIER * index as i64;
            tracing::debug!("{}", ElementProduced { index, value });
            values.push(value);
        }

        let mut metadata = HashMap::new();
        metadata.insert("count".to_string(), steps.to_string());
        metadata.insert("delay_ms".to_string(), self.delay.as_millis().to_string());

        let mut response = StageResponse::values(values);
        response.metadata = metadata;
        response
    }

    fn name(&self) -> &'static str {
        "paced_generator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Outcome;

    fn generated_values(response: &StageResponse) -> &[i64] {
        match &response.outcome {
            Some(Outcome::Values(values)) => values,
            other => panic!("Expected Values outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn produces_doubled_indices() {
        let generator = PacedGenerator::new(3, Duration::from_millis(1));
        let response = generator.process(StageRequest::empty()).await;
        assert_eq!(generated_values(&response), [0, 2, 4]);
    }

    #[tokio::test]
    async fn length_matches_count() {
        for count in 0..6 {
            let generator = PacedGenerator::new(count, Duration::ZERO);
            let response = generator.process(StageRequest::empty()).await;
            let values = generated_values(&response);
            assert_eq!(values.len() as i64, count);
            for (i, value) in values.iter().enumerate() {
                assert_eq!(*value, 2 * i as i64);
            }
        }
    }

    #[tokio::test]
    async fn zero_count_produces_empty_sequence() {
        let generator = PacedGenerator::new(0, Duration::from_millis(1));
        let response = generator.process(StageRequest::empty()).await;
        assert!(generated_values(&response).is_empty());
    }

    #[tokio::test]
    async fn negative_count_produces_empty_sequence() {
        let generator = PacedGenerator::new(-4, Duration::from_millis(1));
        let response = generator.process(StageRequest::empty()).await;
        assert!(generated_values(&response).is_empty());
    }

    #[tokio::test]
    async fn ignores_upstream_values() {
        let generator = PacedGenerator::new(2, Duration::ZERO);
        let response = generator
            .process(StageRequest {
                values: Some(vec![99, 98]),
            })
            .await;
        assert_eq!(generated_values(&response), [0, 2]);
    }

    #[tokio::test]
    async fn reports_count_and_delay_metadata() {
        let generator = PacedGenerator::new(2, Duration::from_millis(7));
        let response = generator.process(StageRequest::empty()).await;
        assert_eq!(response.metadata.get("count"), Some(&"2".to_string()));
        assert_eq!(response.metadata.get("delay_ms"), Some(&"7".to_string()));
    }
}
