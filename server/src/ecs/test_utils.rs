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


//! Test utilities for ECS testing

use crate::ecs::{HostCat, HostWorld};
use crate::provider::CatalogRegistry;
use sylvan_api::{CatTypes, DyeColors};

/// Create a registry seeded with the vanilla catalogs
pub fn catalog() -> CatalogRegistry {
    CatalogRegistry::vanilla().unwrap()
}

/// Spawn a calico cat wearing a red collar
pub fn spawn_test_cat(world: &HostWorld) -> HostCat {
    let registry = catalog();
    let calico = CatTypes::CALICO.resolve_with(&registry).unwrap();
    let red = DyeColors::RED.resolve_with(&registry).unwrap();
    world.spawn_cat((*calico).clone(), (*red).clone())
}
