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


//! Keyed value stores exposed by entities

use super::key::Key;
use super::manipulator::DataManipulator;
use super::value::{MutableValue, Value};
use crate::error::{ApiError, ApiResult};

/// Marker for types that can live in a data store.
pub trait DataValue: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> DataValue for T {}

/// Something that owns keyed data, implemented by the host.
pub trait DataHolder {
    /// Snapshot the value stored under `key`, if any
    fn get_value<V: DataValue>(&self, key: Key<V>) -> Option<Value<V>>;

    /// Write a value back into the store under its key
    fn offer<V: DataValue>(&self, value: &MutableValue<V>) -> ApiResult<()>;

    /// Whether the store holds a value for `key`
    fn supports<V: DataValue>(&self, key: Key<V>) -> bool {
        self.get_value(key).is_some()
    }

    /// Assemble a structured data view from the store
    fn get<M: DataManipulator>(&self) -> Option<M> {
        M::from_holder(self)
    }

    /// Like [`DataHolder::get_value`], failing when the value is absent
    fn require_value<V: DataValue>(&self, key: Key<V>) -> ApiResult<Value<V>> {
        self.get_value(key)
            .ok_or(ApiError::MissingValue { key: key.id() })
    }

    /// Like [`DataHolder::get`], failing when the view cannot be assembled
    fn require<M: DataManipulator>(&self) -> ApiResult<M> {
        self.get::<M>().ok_or(ApiError::MissingData {
            manipulator: M::NAME,
        })
    }
}
