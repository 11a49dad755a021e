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


//! Damage source builders

use super::source::{BaseDamageSource, BaseEntityDamageSource, DamageFlags, DamageSource, EntityDamageSource};
use super::types::DamageType;
use crate::entity::EntityRef;
use crate::error::DamageSourceError;
use std::fmt;
use std::sync::Arc;

/// Builder for [`BaseDamageSource`]s.
///
/// Every flag starts out false and no exhaustion is set, in which case the
/// built source derives it from the flags.
#[derive(Debug, Clone, Default)]
pub struct DamageSourceBuilder {
    damage_type: Option<Arc<DamageType>>,
    flags: DamageFlags,
    exhaustion: Option<f64>,
}

impl DamageSourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn damage_type(&mut self, damage_type: Arc<DamageType>) -> &mut Self {
        self.damage_type = Some(damage_type);
        self
    }

    pub fn absolute(&mut self) -> &mut Self {
        self.flags.absolute = true;
        self
    }

    pub fn bypasses_armor(&mut self) -> &mut Self {
        self.flags.bypasses_armor = true;
        self
    }

    pub fn scales_with_difficulty(&mut self) -> &mut Self {
        self.flags.scales_with_difficulty = true;
        self
    }

    pub fn explosion(&mut self) -> &mut Self {
        self.flags.explosive = true;
        self
    }

    pub fn magical(&mut self) -> &mut Self {
        self.flags.magic = true;
        self
    }

    pub fn creative(&mut self) -> &mut Self {
        self.flags.affects_creative = true;
        self
    }

    pub fn fire(&mut self) -> &mut Self {
        self.flags.fire = true;
        self
    }

    /// Replace every flag at once
    pub fn flags(&mut self, flags: DamageFlags) -> &mut Self {
        self.flags = flags;
        self
    }

    /// Set the exhaustion explicitly, overriding the flag derived default
    pub fn exhaustion(&mut self, exhaustion: f64) -> &mut Self {
        self.exhaustion = Some(exhaustion);
        self
    }

    /// Copy the type, flags and exhaustion of an existing source
    pub fn from_source<S: DamageSource + ?Sized>(&mut self, source: &S) -> &mut Self {
        self.damage_type = Some(source.damage_type().clone());
        self.flags = DamageFlags {
            absolute: source.is_absolute(),
            bypasses_armor: source.is_bypassing_armor(),
            scales_with_difficulty: source.is_scaled_by_difficulty(),
            explosive: source.is_explosive(),
            magic: source.is_magic(),
            affects_creative: source.does_affect_creative(),
            fire: source.is_fire(),
        };
        self.exhaustion = Some(source.exhaustion());
        self
    }

    /// Return to the empty state
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    pub fn build(&self) -> Result<BaseDamageSource, DamageSourceError> {
        let Some(damage_type) = self.damage_type.clone() else {
            tracing::debug!("Rejected damage source without a damage type");
            return Err(DamageSourceError::MissingDamageType);
        };
        Ok(BaseDamageSource::new(damage_type, self.flags, self.exhaustion))
    }

    /// Build and wrap the result in a custom source type
    pub fn build_with<S>(
        &self,
        wrap: impl FnOnce(BaseDamageSource) -> S,
    ) -> Result<S, DamageSourceError> {
        self.build().map(wrap)
    }
}

/// Builder for [`BaseEntityDamageSource`]s
#[derive(Clone, Default)]
pub struct EntityDamageSourceBuilder {
    base: DamageSourceBuilder,
    source: Option<EntityRef>,
}

impl EntityDamageSourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entity responsible for the damage
    pub fn entity(&mut self, entity: EntityRef) -> &mut Self {
        self.source = Some(entity);
        self
    }

    pub fn damage_type(&mut self, damage_type: Arc<DamageType>) -> &mut Self {
        self.base.damage_type(damage_type);
        self
    }

    pub fn absolute(&mut self) -> &mut Self {
        self.base.absolute();
        self
    }

    pub fn bypasses_armor(&mut self) -> &mut Self {
        self.base.bypasses_armor();
        self
    }

    pub fn scales_with_difficulty(&mut self) -> &mut Self {
        self.base.scales_with_difficulty();
        self
    }

    pub fn explosion(&mut self) -> &mut Self {
        self.base.explosion();
        self
    }

    pub fn magical(&mut self) -> &mut Self {
        self.base.magical();
        self
    }

    pub fn creative(&mut self) -> &mut Self {
        self.base.creative();
        self
    }

    pub fn fire(&mut self) -> &mut Self {
        self.base.fire();
        self
    }

    pub fn flags(&mut self, flags: DamageFlags) -> &mut Self {
        self.base.flags(flags);
        self
    }

    pub fn exhaustion(&mut self, exhaustion: f64) -> &mut Self {
        self.base.exhaustion(exhaustion);
        self
    }

    pub fn from_source<S: DamageSource + ?Sized>(&mut self, source: &S) -> &mut Self {
        self.base.from_source(source);
        self
    }

    /// Copy an existing entity source, including the entity itself
    pub fn from_entity_source<S: EntityDamageSource + ?Sized>(&mut self, source: &S) -> &mut Self {
        self.base.from_source(source);
        self.source = Some(source.source().clone());
        self
    }

    /// Return to the empty state, dropping the source entity too
    pub fn reset(&mut self) -> &mut Self {
        self.base.reset();
        self.source = None;
        self
    }

    pub fn build(&self) -> Result<BaseEntityDamageSource, DamageSourceError> {
        let base = self.base.build()?;
        let Some(source) = self.source.clone() else {
            tracing::debug!("Rejected entity damage source without a source entity");
            return Err(DamageSourceError::MissingSource);
        };
        Ok(BaseEntityDamageSource::new(base, source))
    }

    pub fn build_with<S>(
        &self,
        wrap: impl FnOnce(BaseEntityDamageSource) -> S,
    ) -> Result<S, DamageSourceError> {
        self.build().map(wrap)
    }
}

impl fmt::Debug for EntityDamageSourceBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityDamageSourceBuilder")
            .field("base", &self.base)
            .field("source", &self.source.as_ref().map(|entity| entity.unique_id()))
            .finish()
    }
}
