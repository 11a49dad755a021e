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


//! Damage source descriptors

use super::types::DamageType;
use crate::entity::EntityRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Exhaustion applied when nothing else is specified
pub const DEFAULT_EXHAUSTION: f64 = 0.1;

/// Exhaustion applied to absolute or armor bypassing damage
pub const BYPASSING_EXHAUSTION: f64 = 0.0;

/// Pick the exhaustion for a damage source.
///
/// An explicit value always wins. Otherwise absolute or armor bypassing damage
/// costs nothing and everything else costs [`DEFAULT_EXHAUSTION`].
pub fn resolve_exhaustion(explicit: Option<f64>, absolute: bool, bypasses_armor: bool) -> f64 {
    match explicit {
        Some(exhaustion) => exhaustion,
        None if absolute || bypasses_armor => BYPASSING_EXHAUSTION,
        None => DEFAULT_EXHAUSTION,
    }
}

/// The boolean properties of a damage source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageFlags {
    pub absolute: bool,
    pub bypasses_armor: bool,
    pub scales_with_difficulty: bool,
    pub explosive: bool,
    pub magic: bool,
    pub affects_creative: bool,
    pub fire: bool,
}

impl DamageFlags {
    /// Exhaustion these flags imply when no explicit value is given
    pub fn exhaustion(&self, explicit: Option<f64>) -> f64 {
        resolve_exhaustion(explicit, self.absolute, self.bypasses_armor)
    }
}

/// Where damage came from and how it applies.
pub trait DamageSource: Send + Sync {
    fn damage_type(&self) -> &Arc<DamageType>;

    /// Absolute damage ignores every reduction, potions and armor included
    fn is_absolute(&self) -> bool;

    fn is_bypassing_armor(&self) -> bool;

    fn is_scaled_by_difficulty(&self) -> bool;

    fn is_explosive(&self) -> bool;

    fn is_magic(&self) -> bool;

    /// Whether this damage also hits players in creative mode
    fn does_affect_creative(&self) -> bool;

    fn is_fire(&self) -> bool;

    /// Exhaustion added to the target when the damage lands
    fn exhaustion(&self) -> f64;
}

/// Damage caused by an entity.
pub trait EntityDamageSource: DamageSource {
    fn source(&self) -> &EntityRef;
}

/// Shared state of every damage source.
///
/// Custom sources embed this and delegate to it:
///
/// ```
/// use std::sync::Arc;
/// use sylvan_api::{BaseDamageSource, DamageSource, DamageSourceBuilder, DamageType};
///
/// struct Lightning {
///     base: BaseDamageSource,
///     strikes: u32,
/// }
///
/// impl DamageSource for Lightning {
///     fn damage_type(&self) -> &Arc<DamageType> { self.base.damage_type() }
///     fn is_absolute(&self) -> bool { self.base.is_absolute() }
///     fn is_bypassing_armor(&self) -> bool { self.base.is_bypassing_armor() }
///     fn is_scaled_by_difficulty(&self) -> bool { self.base.is_scaled_by_difficulty() }
///     fn is_explosive(&self) -> bool { self.base.is_explosive() }
///     fn is_magic(&self) -> bool { self.base.is_magic() }
///     fn does_affect_creative(&self) -> bool { self.base.does_affect_creative() }
///     fn is_fire(&self) -> bool { self.base.is_fire() }
///     fn exhaustion(&self) -> f64 { self.base.exhaustion() }
/// }
///
/// use sylvan_api::CatalogType;
/// let fire = Arc::new(DamageType::from_entry(sylvan_api::CatalogEntry::from_id("FIRE")));
/// let lightning = DamageSourceBuilder::new()
///     .damage_type(fire)
///     .fire()
///     .build_with(|base| Lightning { base, strikes: 3 })
///     .unwrap();
/// assert!(lightning.is_fire());
/// assert_eq!(lightning.exhaustion(), 0.1);
/// assert_eq!(lightning.strikes, 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BaseDamageSource {
    damage_type: Arc<DamageType>,
    flags: DamageFlags,
    exhaustion: f64,
}

impl BaseDamageSource {
    pub(crate) fn new(
        damage_type: Arc<DamageType>,
        flags: DamageFlags,
        explicit_exhaustion: Option<f64>,
    ) -> Self {
        Self {
            damage_type,
            flags,
            exhaustion: flags.exhaustion(explicit_exhaustion),
        }
    }

    pub fn flags(&self) -> DamageFlags {
        self.flags
    }
}

impl DamageSource for BaseDamageSource {
    fn damage_type(&self) -> &Arc<DamageType> {
        &self.damage_type
    }

    fn is_absolute(&self) -> bool {
        self.flags.absolute
    }

    fn is_bypassing_armor(&self) -> bool {
        self.flags.bypasses_armor
    }

    fn is_scaled_by_difficulty(&self) -> bool {
        self.flags.scales_with_difficulty
    }

    fn is_explosive(&self) -> bool {
        self.flags.explosive
    }

    fn is_magic(&self) -> bool {
        self.flags.magic
    }

    fn does_affect_creative(&self) -> bool {
        self.flags.affects_creative
    }

    fn is_fire(&self) -> bool {
        self.flags.fire
    }

    fn exhaustion(&self) -> f64 {
        self.exhaustion
    }
}

/// Shared state of every entity damage source
#[derive(Clone)]
pub struct BaseEntityDamageSource {
    base: BaseDamageSource,
    source: EntityRef,
}

impl BaseEntityDamageSource {
    pub(crate) fn new(base: BaseDamageSource, source: EntityRef) -> Self {
        Self { base, source }
    }

    pub fn base(&self) -> &BaseDamageSource {
        &self.base
    }
}

impl DamageSource for BaseEntityDamageSource {
    fn damage_type(&self) -> &Arc<DamageType> {
        self.base.damage_type()
    }

    fn is_absolute(&self) -> bool {
        self.base.is_absolute()
    }

    fn is_bypassing_armor(&self) -> bool {
        self.base.is_bypassing_armor()
    }

    fn is_scaled_by_difficulty(&self) -> bool {
        self.base.is_scaled_by_difficulty()
    }

    fn is_explosive(&self) -> bool {
        self.base.is_explosive()
    }

    fn is_magic(&self) -> bool {
        self.base.is_magic()
    }

    fn does_affect_creative(&self) -> bool {
        self.base.does_affect_creative()
    }

    fn is_fire(&self) -> bool {
        self.base.is_fire()
    }

    fn exhaustion(&self) -> f64 {
        self.base.exhaustion()
    }
}

impl EntityDamageSource for BaseEntityDamageSource {
    fn source(&self) -> &EntityRef {
        &self.source
    }
}

impl fmt::Debug for BaseEntityDamageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseEntityDamageSource")
            .field("base", &self.base)
            .field("source", &self.source.unique_id())
            .finish()
    }
}
