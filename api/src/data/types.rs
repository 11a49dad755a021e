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


//! Catalog types for entity data

define_catalog! {
    /// A breed of cat
    type CatType;

    /// The vanilla [`CatType`]s.
    namespace CatTypes in "cat_type" {
        ALL_BLACK,
        BLACK,
        BRITISH_SHORTHAIR,
        CALICO,
        JELLIE,
        PERSIAN,
        RAGDOLL,
        RED,
        SIAMESE,
        WHITE,
    }
}

define_catalog! {
    /// A species of tree, used by logs, planks and boats
    type WoodType;

    /// The vanilla [`WoodType`]s.
    namespace WoodTypes in "wood_type" {
        ACACIA,
        BIRCH,
        DARK_OAK,
        JUNGLE,
        OAK,
        SPRUCE,
    }
}

define_catalog! {
    /// A dye colour
    type DyeColor;

    /// The vanilla [`DyeColor`]s.
    namespace DyeColors in "dye_color" {
        BLACK,
        BLUE,
        BROWN,
        CYAN,
        GRAY,
        GREEN,
        LIGHT_BLUE,
        LIGHT_GRAY,
        LIME,
        MAGENTA,
        ORANGE,
        PINK,
        PURPLE,
        RED,
        WHITE,
        YELLOW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogRef, CatalogType};

    fn assert_sorted<T>(refs: &[CatalogRef<T>]) {
        let ids: Vec<_> = refs.iter().map(|r| r.id()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_namespaces_are_alphabetical() {
        assert_sorted(CatTypes::all());
        assert_sorted(WoodTypes::all());
        assert_sorted(DyeColors::all());
    }

    #[test]
    fn test_namespace_sizes() {
        assert_eq!(CatTypes::all().len(), 10);
        assert_eq!(WoodTypes::all().len(), 6);
        assert_eq!(DyeColors::all().len(), 16);
    }

    #[test]
    fn test_catalog_names() {
        assert_eq!(CatType::CATALOG, "cat_type");
        assert_eq!(WoodType::CATALOG, "wood_type");
        assert_eq!(DyeColor::CATALOG, "dye_color");
    }

    #[test]
    fn test_catalog_type_serializes() {
        let oak = WoodType::from_entry(crate::catalog::CatalogEntry::from_id("DARK_OAK"));
        let json = serde_json::to_string(&oak).unwrap();
        assert_eq!(json, r#"{"id":"DARK_OAK","name":"Dark Oak"}"#);
        assert_eq!(oak.to_string(), "Dark Oak");
    }
}
