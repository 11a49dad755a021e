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


//! Sylvan Plugin API
//!
//! This crate defines the surface plugins program against:
//! - Catalog constants resolved lazily through a host supplied [`ObjectProvider`]
//! - Typed keys, values and data manipulators over entity data stores
//! - Entity capability traits such as [`Cat`]
//! - Damage source descriptors and their builders
//!
//! Nothing in here simulates anything. The host runtime implements the
//! collaborator traits and installs itself with [`install_provider`].

#[macro_use]
mod macros;

pub mod catalog;
pub mod damage;
pub mod data;
pub mod entity;
mod error;
#[cfg(test)]
mod test_utils;

pub use catalog::{
    CatalogEntry, CatalogRef, CatalogType, ObjectProvider, install_provider, provider,
};
pub use damage::{
    BaseDamageSource, BaseEntityDamageSource, DamageFlags, DamageSource, DamageSourceBuilder,
    DamageType, DamageTypes, EntityDamageSource, EntityDamageSourceBuilder, resolve_exhaustion,
};
pub use data::{
    CatData, CatType, CatTypes, DataHolder, DataManipulator, DataValue, DyeColor, DyeColors,
    DyeableData, Key, Keys, MutableValue, Value, WoodType, WoodTypes,
};
pub use entity::{Animal, Cat, Entity, EntityRef};
pub use error::{ApiError, ApiResult, DamageSourceError};
