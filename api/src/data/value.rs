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


//! Value snapshots handed out by data holders

use super::key::Key;

/// Immutable snapshot of a keyed value
#[derive(Debug, Clone, PartialEq)]
pub struct Value<V> {
    key: Key<V>,
    value: V,
}

impl<V> Value<V> {
    pub fn new(key: Key<V>, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> Key<V> {
        self.key
    }

    pub fn get(&self) -> &V {
        &self.value
    }

    pub fn into_inner(self) -> V {
        self.value
    }

    /// Detach a mutable copy of this value
    pub fn as_mutable(&self) -> MutableValue<V>
    where
        V: Clone,
    {
        MutableValue {
            key: self.key,
            value: self.value.clone(),
        }
    }
}

/// Mutable copy of a keyed value.
///
/// Changes are local until the value is offered back to a
/// [`DataHolder`](super::DataHolder).
#[derive(Debug, Clone, PartialEq)]
pub struct MutableValue<V> {
    key: Key<V>,
    value: V,
}

impl<V> MutableValue<V> {
    pub fn new(key: Key<V>, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> Key<V> {
        self.key
    }

    pub fn get(&self) -> &V {
        &self.value
    }

    /// Replace the held value
    pub fn set(&mut self, value: V) -> &mut Self {
        self.value = value;
        self
    }

    /// Transform the held value in place
    pub fn transform(&mut self, f: impl FnOnce(V) -> V) -> &mut Self
    where
        V: Clone,
    {
        self.value = f(self.value.clone());
        self
    }

    pub fn as_immutable(&self) -> Value<V>
    where
        V: Clone,
    {
        Value::new(self.key, self.value.clone())
    }

    pub fn into_inner(self) -> V {
        self.value
    }
}
