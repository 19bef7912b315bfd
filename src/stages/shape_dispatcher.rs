// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;

use crate::config::consts::DEFAULT_SAMPLE_BOUND;
use crate::model::{StageRequest, StageResponse};
use crate::traits::Stage;

/// The structural classification of a dispatched sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Empty,
    NonEmpty,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Empty => "empty",
            Shape::NonEmpty => "non_empty",
        }
    }
}

/// The default sample used when no upstream stage supplied a sequence:
/// the even integers in `[0, DEFAULT_SAMPLE_BOUND)`.
pub fn default_sample() -> Vec<i64> {
    (0..DEFAULT_SAMPLE_BOUND).filter(|v| v % 2 == 0).collect()
}

/// Shape Dispatcher stage - classifies a sequence by shape and reduces it.
///
/// An absent input defaults to [`default_sample`]. An empty sequence reduces
/// to 0; a non-empty sequence reduces to its first element plus the sum of
/// the rest, which is the sum of the whole sequence. The slice match below
/// is exhaustive, so no fallback arm exists.
pub struct ShapeDispatcher;

impl ShapeDispatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShapeDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ShapeSummary {
    shape: &'static str,
    first: Option<i64>,
    rest_sum: i64,
    total: i64,
}

#[async_trait]
impl Stage for ShapeDispatcher {
    async fn process(&self, req: StageRequest) -> StageResponse {
        let values = req.values.unwrap_or_else(default_sample);

        let (shape, first, rest_sum) = match values.as_slice() {
            [] => (Shape::Empty, None, 0),
            [first, rest @ ..] => (Shape::NonEmpty, Some(*first), rest.iter().sum::<i64>()),
        };
        let total = first.unwrap_or(0) + rest_sum;

        let summary = ShapeSummary {
            shape: shape.as_str(),
            first,
            rest_sum,
            total,
        };
        let json_summary = match serde_json::to_string(&summary) {
            Ok(json) => json,
            Err(e) => {
                return StageResponse::error(500, format!("Failed to serialize summary: {}", e));
            }
        };

        let mut metadata = HashMap::new();
        metadata.insert("shape".to_string(), shape.as_str().to_string());
        metadata.insert("total".to_string(), total.to_string());
        metadata.insert("summary".to_string(), json_summary);

        let mut response = StageResponse::total(total);
        response.metadata = metadata;
        response
    }

    fn name(&self) -> &'static str {
        "shape_dispatcher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Outcome;

    fn dispatched_total(response: &StageResponse) -> i64 {
        match &response.outcome {
            Some(Outcome::Total(total)) => *total,
            other => panic!("Expected Total outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_sequence_reduces_to_zero() {
        let dispatcher = ShapeDispatcher::new();
        let response = dispatcher
            .process(StageRequest {
                values: Some(vec![]),
            })
            .await;
        assert_eq!(dispatched_total(&response), 0);
        assert_eq!(response.metadata.get("shape"), Some(&"empty".to_string()));
    }

    #[tokio::test]
    async fn non_empty_sequence_reduces_to_first_plus_rest() {
        let dispatcher = ShapeDispatcher::new();
        let response = dispatcher
            .process(StageRequest {
                values: Some(vec![0, 2, 4]),
            })
            .await;
        // 0 + (2 + 4)
        assert_eq!(dispatched_total(&response), 6);
        assert_eq!(
            response.metadata.get("shape"),
            Some(&"non_empty".to_string())
        );
    }

    #[tokio::test]
    async fn absent_input_defaults_to_even_sample() {
        let dispatcher = ShapeDispatcher::new();
        let response = dispatcher.process(StageRequest::empty()).await;
        // [0, 2, 4, 6, 8] -> first 0, rest sum 20
        assert_eq!(dispatched_total(&response), 20);
    }

    #[tokio::test]
    async fn total_equals_whole_sequence_sum() {
        let dispatcher = ShapeDispatcher::new();
        let values = vec![3, -1, 7, 11];
        let expected: i64 = values.iter().sum();
        let response = dispatcher
            .process(StageRequest {
                values: Some(values),
            })
            .await;
        assert_eq!(dispatched_total(&response), expected);
    }

    #[tokio::test]
    async fn summary_metadata_is_json() {
        let dispatcher = ShapeDispatcher::new();
        let response = dispatcher
            .process(StageRequest {
                values: Some(vec![0, 2, 4]),
            })
            .await;
        let summary = response.metadata.get("summary").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(summary).unwrap();
        assert_eq!(parsed["shape"], "non_empty");
        assert_eq!(parsed["first"], 0);
        assert_eq!(parsed["rest_sum"], 6);
        assert_eq!(parsed["total"], 6);
    }

    #[test]
    fn default_sample_is_evens_below_bound() {
        assert_eq!(default_sample(), vec![0, 2, 4, 6, 8]);
    }
}
