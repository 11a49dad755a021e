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


//! Shared host world and the entity handles plugins receive

use super::components::{DataComponents, EntityKind, EntityUuid};
use super::{EcsEntity, GameWorld};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use sylvan_api::{
    Animal, ApiError, ApiResult, Cat, CatType, DataHolder, DataValue, DyeColor, Entity, Key, Keys,
    MutableValue, Value,
};
use uuid::Uuid;

/// Entity kind carried by every cat
pub const CAT_KIND: &str = "cat";

/// The host's world, shared between every entity handle
#[derive(Clone, Default)]
pub struct HostWorld {
    world: Arc<RwLock<GameWorld>>,
}

impl HostWorld {
    /// Create a new empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn an entity of `kind` with an empty data store
    pub fn spawn(&self, kind: &'static str) -> HostEntity {
        self.spawn_with(kind, DataComponents::new())
    }

    /// Spawn a cat with its breed and collar colour populated
    pub fn spawn_cat(&self, cat_type: CatType, collar: DyeColor) -> HostCat {
        let mut data = DataComponents::new();
        data.insert(Keys::CAT_TYPE.id(), cat_type);
        data.insert(Keys::DYE_COLOR.id(), collar);
        HostCat {
            entity: self.spawn_with(CAT_KIND, data),
        }
    }

    fn spawn_with(&self, kind: &'static str, data: DataComponents) -> HostEntity {
        let uuid = EntityUuid::new();
        let entity = self.write().spawn((uuid, EntityKind(kind), data));
        tracing::debug!("Spawned {} {}", kind, uuid.0);
        HostEntity {
            world: self.world.clone(),
            entity,
            uuid: uuid.0,
            kind,
        }
    }

    /// Find a live entity by its UUID
    pub fn find(&self, uuid: Uuid) -> Option<HostEntity> {
        self.read().iter().find_map(|entity_ref| {
            let entity_uuid = *entity_ref.get::<&EntityUuid>()?;
            if entity_uuid.0 != uuid {
                return None;
            }
            let kind = *entity_ref.get::<&EntityKind>()?;
            Some(HostEntity {
                world: self.world.clone(),
                entity: entity_ref.entity(),
                uuid,
                kind: kind.0,
            })
        })
    }

    /// Remove an entity from the world
    ///
    /// # Returns
    /// * `true` - If the entity was alive and has been removed
    pub fn despawn(&self, entity: &HostEntity) -> bool {
        self.write().despawn(entity.entity).is_ok()
    }

    /// Number of live entities
    pub fn len(&self) -> u32 {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, GameWorld> {
        self.world.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GameWorld> {
        self.world.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Plugin facing handle to a host entity
///
/// Handles stay valid after the entity is despawned; reads then find no data.
#[derive(Clone)]
pub struct HostEntity {
    world: Arc<RwLock<GameWorld>>,
    entity: EcsEntity,
    uuid: Uuid,
    kind: &'static str,
}

impl HostEntity {
    /// Get the runtime ECS entity handle
    pub fn ecs_entity(&self) -> EcsEntity {
        self.entity
    }

    pub fn is_alive(&self) -> bool {
        self.world
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(self.entity)
    }

    /// View this entity as a cat, if it is one
    pub fn as_cat(&self) -> Option<HostCat> {
        (self.kind == CAT_KIND).then(|| HostCat {
            entity: self.clone(),
        })
    }
}

impl Entity for HostEntity {
    fn unique_id(&self) -> Uuid {
        self.uuid
    }

    fn entity_type(&self) -> &str {
        self.kind
    }
}

impl DataHolder for HostEntity {
    fn get_value<V: DataValue>(&self, key: Key<V>) -> Option<Value<V>> {
        let world = self.world.read().unwrap_or_else(PoisonError::into_inner);
        let data = world.get::<&DataComponents>(self.entity).ok()?;
        data.get::<V>(key.id()).map(|value| Value::new(key, value))
    }

    fn offer<V: DataValue>(&self, value: &MutableValue<V>) -> ApiResult<()> {
        let world = self.world.write().unwrap_or_else(PoisonError::into_inner);
        let mut data = world
            .get::<&mut DataComponents>(self.entity)
            .map_err(|e| ApiError::StoreUnavailable(format!("entity {}: {}", self.uuid, e)))?;
        data.insert(value.key().id(), value.get().clone());
        tracing::debug!("Entity {} accepted {}", self.uuid, value.key().id());
        Ok(())
    }
}


impl std::fmt::Debug for HostEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostEntity")
            .field("entity", &self.entity)
            .field("uuid", &self.uuid)
            .field("kind", &self.kind)
            .finish()
    }
}

/// A host entity known to be a cat
#[derive(Debug, Clone)]
pub struct HostCat {
    entity: HostEntity,
}

impl HostCat {
    /// The underlying entity handle
    pub fn entity(&self) -> &HostEntity {
        &self.entity
    }

    pub fn into_entity(self) -> HostEntity {
        self.entity
    }
}

impl Entity for HostCat {
    fn unique_id(&self) -> Uuid {
        self.entity.unique_id()
    }

    fn entity_type(&self) -> &str {
        self.entity.entity_type()
    }
}

impl DataHolder for HostCat {
    fn get_value<V: DataValue>(&self, key: Key<V>) -> Option<Value<V>> {
        self.entity.get_value(key)
    }

    fn offer<V: DataValue>(&self, value: &MutableValue<V>) -> ApiResult<()> {
        self.entity.offer(value)
    }
}

impl Animal for HostCat {}

impl Cat for HostCat {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::test_utils::{catalog, spawn_test_cat};
    use sylvan_api::{CatTypes, CatalogType, DyeColors};

    #[test]
    fn test_spawn_cat_populates_store() {
        let world = HostWorld::new();
        let cat = spawn_test_cat(&world);

        assert_eq!(cat.entity_type(), "cat");
        assert_eq!(cat.cat_type().unwrap().get().id(), "CALICO");
        assert_eq!(cat.collar_color().unwrap().get().id(), "RED");
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_only_cats_have_the_cat_view() {
        let world = HostWorld::new();
        let ocelot = world.spawn("ocelot");
        assert!(ocelot.as_cat().is_none());
        assert!(!ocelot.supports(Keys::DYE_COLOR));

        let cat = spawn_test_cat(&world);
        let view = cat.entity().as_cat().unwrap();
        assert_eq!(view.unique_id(), cat.unique_id());
        assert_eq!(view.cat_type().unwrap().get().id(), "CALICO");
    }

    #[test]
    fn test_cat_with_empty_store_is_missing_values() {
        let world = HostWorld::new();
        let cat = world.spawn(CAT_KIND).as_cat().unwrap();

        assert_eq!(
            cat.cat_type().unwrap_err(),
            ApiError::MissingValue { key: "cat_type" }
        );
        assert_eq!(
            cat.collar_color_data().unwrap_err(),
            ApiError::MissingData { manipulator: "DyeableData" }
        );
    }

    #[test]
    fn test_offer_updates_store() {
        let world = HostWorld::new();
        let cat = spawn_test_cat(&world);
        let registry = catalog();

        let mut collar = cat.collar_color().unwrap();
        collar.set((*DyeColors::LIME.resolve_with(&registry).unwrap()).clone());
        cat.offer(&collar).unwrap();

        assert_eq!(cat.collar_color_data().unwrap().color().get().id(), "LIME");
    }

    #[test]
    fn test_offer_adds_missing_key() {
        let world = HostWorld::new();
        let entity = world.spawn(CAT_KIND).as_cat().unwrap();
        let registry = catalog();

        let breed = MutableValue::new(
            Keys::CAT_TYPE,
            (*CatTypes::JELLIE.resolve_with(&registry).unwrap()).clone(),
        );
        entity.offer(&breed).unwrap();
        assert_eq!(entity.cat_data().unwrap().cat_type().get().id(), "JELLIE");
    }

    #[test]
    fn test_despawned_entity() {
        let world = HostWorld::new();
        let cat = spawn_test_cat(&world);
        let collar = cat.collar_color().unwrap();

        assert!(world.despawn(cat.entity()));
        assert!(!world.despawn(cat.entity()));
        assert!(!cat.entity().is_alive());
        assert!(world.is_empty());

        assert!(cat.cat_type().is_err());
        assert!(matches!(
            cat.offer(&collar),
            Err(ApiError::StoreUnavailable(_))
        ));
    }

    #[test]
    fn test_find_by_uuid() {
        let world = HostWorld::new();
        let cat = spawn_test_cat(&world);
        world.spawn("wolf");

        let found = world.find(cat.unique_id()).unwrap();
        assert_eq!(found.ecs_entity(), cat.entity().ecs_entity());
        assert_eq!(found.entity_type(), "cat");
        assert!(found.as_cat().is_some());
        assert!(world.find(Uuid::new_v4()).is_none());
    }
}
