// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::traits::Stage;

/// Newtype wrapper for the stage registry providing type safety
#[derive(Clone)]
pub struct StageMap(pub HashMap<String, Arc<dyn Stage>>);

impl StageMap {
    /// Create a new empty stage map
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Insert a stage into the map
    pub fn insert(&mut self, id: String, stage: Arc<dyn Stage>) {
        self.0.insert(id, stage);
    }

    /// Get a stage by ID
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Stage>> {
        self.0.get(id)
    }

    /// Check if a stage exists
    pub fn contains_key(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Get all stage IDs
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StageMap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StageMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageMap")
            .field("stage_count", &self.0.len())
            .field("stage_ids", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl From<HashMap<String, Arc<dyn Stage>>> for StageMap {
    fn from(map: HashMap<String, Arc<dyn Stage>>) -> Self {
        Self(map)
    }
}
