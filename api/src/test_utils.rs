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


//! Test utilities for API testing

use crate::catalog::{CatalogEntry, CatalogObject, CatalogRef, CatalogType, ObjectProvider};
use crate::damage::DamageTypes;
use crate::data::{CatTypes, DataHolder, DataValue, DyeColors, Key, MutableValue, Value, WoodTypes};
use crate::entity::{Animal, Cat, Entity};
use crate::error::ApiResult;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Provider seeded with every declared constant
#[derive(Default)]
pub struct TestProvider {
    objects: HashMap<(TypeId, String), CatalogObject>,
}

impl TestProvider {
    pub fn seeded() -> Self {
        let mut provider = Self::default();
        provider.seed(CatTypes::all());
        provider.seed(WoodTypes::all());
        provider.seed(DyeColors::all());
        provider.seed(DamageTypes::all());
        provider
    }

    fn seed<T: CatalogType>(&mut self, refs: &[CatalogRef<T>]) {
        for handle in refs {
            let object = T::from_entry(CatalogEntry::from_id(handle.id()));
            self.objects
                .insert((TypeId::of::<T>(), handle.id().to_string()), Arc::new(object));
        }
    }
}

impl ObjectProvider for TestProvider {
    fn provide(&self, _catalog: &str, type_id: TypeId, id: &str) -> Option<CatalogObject> {
        self.objects.get(&(type_id, id.to_string())).cloned()
    }
}

/// Install the seeded provider, tolerating earlier installs by other tests
pub fn install_test_provider() {
    let _ = crate::catalog::install_provider(TestProvider::seeded());
}

/// Cat backed by an in-memory map
pub struct TestCat {
    id: Uuid,
    data: Mutex<HashMap<&'static str, Box<dyn Any + Send + Sync>>>,
}

impl Default for TestCat {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCat {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            data: Mutex::new(HashMap::new()),
        }
    }

    pub fn put<V: DataValue>(&self, key: Key<V>, value: V) {
        self.data.lock().unwrap().insert(key.id(), Box::new(value));
    }
}

impl Entity for TestCat {
    fn unique_id(&self) -> Uuid {
        self.id
    }

    fn entity_type(&self) -> &str {
        "cat"
    }
}

impl DataHolder for TestCat {
    fn get_value<V: DataValue>(&self, key: Key<V>) -> Option<Value<V>> {
        let data = self.data.lock().unwrap();
        let value = data.get(key.id())?.downcast_ref::<V>()?.clone();
        Some(Value::new(key, value))
    }

    fn offer<V: DataValue>(&self, value: &MutableValue<V>) -> ApiResult<()> {
        self.put(value.key(), value.get().clone());
        Ok(())
    }
}

impl Animal for TestCat {}

impl Cat for TestCat {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataHolder, Keys};
    use crate::entity::Entity;

    #[test]
    fn test_default_cat_is_empty_and_unique() {
        let first = TestCat::default();
        let second = TestCat::default();
        assert_ne!(first.unique_id(), second.unique_id());
        assert!(!first.supports(Keys::CAT_TYPE));
        assert!(!first.supports(Keys::DYE_COLOR));
    }
}
