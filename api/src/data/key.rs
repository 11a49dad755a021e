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


//! Typed data keys

use super::types::{CatType, DyeColor};
use std::fmt;
use std::marker::PhantomData;

/// Identifies one value in an entity data store, typed by the value it holds.
pub struct Key<V> {
    id: &'static str,
    _value: PhantomData<fn() -> V>,
}

impl<V> Key<V> {
    pub const fn new(id: &'static str) -> Self {
        Self {
            id,
            _value: PhantomData,
        }
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }
}

impl<V> Clone for Key<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Key<V> {}

impl<V> PartialEq for Key<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for Key<V> {}

impl<V> fmt::Debug for Key<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.id).finish()
    }
}

/// Well known data keys.
///
/// ```compile_fail
/// let keys = sylvan_api::Keys;
/// ```
#[derive(Debug)]
pub enum Keys {}

impl Keys {
    /// Breed of a cat
    pub const CAT_TYPE: Key<CatType> = Key::new("cat_type");

    /// Dye colour of a dyeable entity, e.g. a cat's collar
    pub const DYE_COLOR: Key<DyeColor> = Key::new("dye_color");
}
