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


//! Damage type catalog

define_catalog! {
    /// The kind of damage being dealt
    type DamageType;

    /// The vanilla [`DamageType`]s.
    namespace DamageTypes in "damage_type" {
        ATTACK,
        CONTACT,
        CUSTOM,
        DROWN,
        DRYOUT,
        EXPLOSIVE,
        FALL,
        FIRE,
        GENERIC,
        HUNGER,
        MAGIC,
        PROJECTILE,
        SUFFOCATE,
        SWEEPING_ATTACK,
        VOID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_types_declared() {
        let ids: Vec<_> = DamageTypes::all().iter().map(|t| t.id()).collect();
        assert_eq!(ids.len(), 15);
        assert_eq!(ids.first(), Some(&"ATTACK"));
        assert_eq!(ids.last(), Some(&"VOID"));
    }
}
