//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! ECS components for host entities

use std::any::Any;
use std::collections::HashMap;
use sylvan_api::DataValue;

/// Unique identifier for entities that plugins can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityUuid(pub uuid::Uuid);

impl EntityUuid {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for EntityUuid {
    fn default() -> Self {
        Self::new()
    }
}

/// Entity type identifier, e.g. `cat`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityKind(pub &'static str);

/// Keyed values exposed to plugins through the data API
#[derive(Default)]
pub struct DataComponents {
    values: HashMap<&'static str, Box<dyn Any + Send + Sync>>,
}

impl DataComponents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the value stored under `key`, if it has type `V`
    pub fn get<V: DataValue>(&self, key: &str) -> Option<V> {
        self.values.get(key)?.downcast_ref::<V>().cloned()
    }

    /// Store a value, replacing whatever was there
    pub fn insert<V: DataValue>(&mut self, key: &'static str, value: V) {
        self.values.insert(key, Box::new(value));
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Debug for DataComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.values.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_components_typed_access() {
        let mut data = DataComponents::new();
        data.insert("lives", 9u8);

        assert_eq!(data.get::<u8>("lives"), Some(9));
        assert_eq!(data.get::<u32>("lives"), None);
        assert_eq!(data.get::<u8>("age"), None);
        assert!(data.contains("lives"));
        assert_eq!(data.len(), 1);

        assert!(data.remove("lives"));
        assert!(!data.remove("lives"));
        assert!(data.is_empty());
    }

    #[test]
    fn test_entity_uuid_unique() {
        assert_ne!(EntityUuid::new(), EntityUuid::new());
    }
}
