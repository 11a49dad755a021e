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


//! Exhaustion and precondition properties of damage source builders

use proptest::prelude::*;
use std::sync::Arc;
use sylvan_api::{
    CatalogEntry, CatalogType, DamageFlags, DamageSource, DamageSourceBuilder, DamageSourceError,
    DamageType, Entity, EntityDamageSource, EntityDamageSourceBuilder, EntityRef,
};
use uuid::Uuid;

struct Zombie(Uuid);

impl Entity for Zombie {
    fn unique_id(&self) -> Uuid {
        self.0
    }

    fn entity_type(&self) -> &str {
        "zombie"
    }
}

fn generic() -> Arc<DamageType> {
    Arc::new(DamageType::from_entry(CatalogEntry::from_id("GENERIC")))
}

fn every_flag_combination() -> impl Iterator<Item = DamageFlags> {
    (0u8..128).map(|bits| DamageFlags {
        absolute: bits & 1 != 0,
        bypasses_armor: bits & 2 != 0,
        scales_with_difficulty: bits & 4 != 0,
        explosive: bits & 8 != 0,
        magic: bits & 16 != 0,
        affects_creative: bits & 32 != 0,
        fire: bits & 64 != 0,
    })
}

fn damage_flags() -> impl Strategy<Value = DamageFlags> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(absolute, bypasses_armor, scales_with_difficulty, explosive, magic, affects_creative, fire)| {
                DamageFlags {
                    absolute,
                    bypasses_armor,
                    scales_with_difficulty,
                    explosive,
                    magic,
                    affects_creative,
                    fire,
                }
            },
        )
}

#[test]
fn test_derived_exhaustion_for_every_combination() {
    for flags in every_flag_combination() {
        let source = DamageSourceBuilder::new()
            .damage_type(generic())
            .flags(flags)
            .build()
            .unwrap();

        let expected = if flags.absolute || flags.bypasses_armor {
            0.0
        } else {
            0.1
        };
        assert_eq!(source.exhaustion(), expected, "flags: {:?}", flags);
        assert_eq!(source.flags(), flags);
    }
}

#[test]
fn test_entity_variant_matches_plain_variant() {
    let zombie: EntityRef = Arc::new(Zombie(Uuid::new_v4()));
    for flags in every_flag_combination() {
        let plain = DamageSourceBuilder::new()
            .damage_type(generic())
            .flags(flags)
            .build()
            .unwrap();
        let attributed = EntityDamageSourceBuilder::new()
            .damage_type(generic())
            .entity(zombie.clone())
            .flags(flags)
            .build()
            .unwrap();

        assert_eq!(attributed.base(), &plain);
        assert_eq!(attributed.source().unique_id(), zombie.unique_id());
    }
}

#[test]
fn test_spec_examples() {
    let absolute = DamageSourceBuilder::new()
        .damage_type(generic())
        .absolute()
        .build()
        .unwrap();
    assert_eq!(absolute.exhaustion(), 0.0);

    let plain = DamageSourceBuilder::new()
        .damage_type(generic())
        .build()
        .unwrap();
    assert_eq!(plain.exhaustion(), 0.1);

    let explicit = DamageSourceBuilder::new()
        .damage_type(generic())
        .exhaustion(0.5)
        .absolute()
        .build()
        .unwrap();
    assert_eq!(explicit.exhaustion(), 0.5);
}

proptest! {
    #[test]
    fn explicit_exhaustion_ignores_flags(flags in damage_flags(), exhaustion in -1000.0f64..1000.0) {
        let source = DamageSourceBuilder::new()
            .damage_type(generic())
            .flags(flags)
            .exhaustion(exhaustion)
            .build()
            .unwrap();
        prop_assert_eq!(source.exhaustion(), exhaustion);
    }

    #[test]
    fn missing_type_always_fails(flags in damage_flags(), exhaustion in proptest::option::of(0.0f64..10.0)) {
        let mut builder = DamageSourceBuilder::new();
        builder.flags(flags);
        if let Some(exhaustion) = exhaustion {
            builder.exhaustion(exhaustion);
        }
        prop_assert_eq!(builder.build().unwrap_err(), DamageSourceError::MissingDamageType);
    }

    #[test]
    fn missing_entity_always_fails(flags in damage_flags(), exhaustion in proptest::option::of(0.0f64..10.0)) {
        let mut builder = EntityDamageSourceBuilder::new();
        builder.damage_type(generic()).flags(flags);
        if let Some(exhaustion) = exhaustion {
            builder.exhaustion(exhaustion);
        }
        prop_assert_eq!(builder.build().unwrap_err(), DamageSourceError::MissingSource);
    }
}
