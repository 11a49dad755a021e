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


//! Animals

use super::Entity;
use crate::data::{CatData, CatType, DataHolder, DyeColor, DyeableData, Keys, MutableValue};
use crate::error::ApiResult;

/// A living animal.
pub trait Animal: Entity {}

/// Represents a cat, meow.
///
/// Every accessor reads from the entity's data store and fails with
/// [`ApiError::MissingValue`](crate::ApiError::MissingValue) or
/// [`ApiError::MissingData`](crate::ApiError::MissingData) when the host has
/// not populated the backing key.
pub trait Cat: Animal + DataHolder {
    /// Copy of the current [`CatData`]
    fn cat_data(&self) -> ApiResult<CatData> {
        self.require::<CatData>()
    }

    /// Mutable copy of this cat's breed
    fn cat_type(&self) -> ApiResult<MutableValue<CatType>> {
        Ok(self.require_value(Keys::CAT_TYPE)?.as_mutable())
    }

    /// Copy of the current collar [`DyeableData`]
    fn collar_color_data(&self) -> ApiResult<DyeableData> {
        self.require::<DyeableData>()
    }

    /// Mutable copy of the collar colour
    fn collar_color(&self) -> ApiResult<MutableValue<DyeColor>> {
        Ok(self.require_value(Keys::DYE_COLOR)?.as_mutable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogType;
    use crate::data::{CatTypes, DyeColors};
    use crate::error::ApiError;
    use crate::test_utils::{TestCat, install_test_provider};

    #[test]
    fn test_cat_accessors_read_store() {
        install_test_provider();
        let cat = TestCat::new();
        cat.put(Keys::CAT_TYPE, (*CatTypes::CALICO.get().unwrap()).clone());
        cat.put(Keys::DYE_COLOR, (*DyeColors::RED.get().unwrap()).clone());

        assert_eq!(cat.cat_type().unwrap().get().id(), "CALICO");
        assert_eq!(cat.cat_data().unwrap().cat_type().get().id(), "CALICO");
        assert_eq!(cat.collar_color().unwrap().get().id(), "RED");
        assert_eq!(cat.collar_color_data().unwrap().color().get().name(), "Red");
    }

    #[test]
    fn test_cat_accessors_fail_without_value() {
        let cat = TestCat::new();

        assert_eq!(
            cat.cat_type().unwrap_err(),
            ApiError::MissingValue { key: "cat_type" }
        );
        assert_eq!(
            cat.cat_data().unwrap_err(),
            ApiError::MissingData {
                manipulator: "CatData"
            }
        );
        assert_eq!(
            cat.collar_color().unwrap_err(),
            ApiError::MissingValue { key: "dye_color" }
        );
        assert_eq!(
            cat.collar_color_data().unwrap_err(),
            ApiError::MissingData {
                manipulator: "DyeableData"
            }
        );
    }

    #[test]
    fn test_mutable_value_is_detached_until_offered() {
        install_test_provider();
        let cat = TestCat::new();
        cat.put(Keys::CAT_TYPE, (*CatTypes::BLACK.get().unwrap()).clone());

        let mut breed = cat.cat_type().unwrap();
        breed.set((*CatTypes::PERSIAN.get().unwrap()).clone());
        assert_eq!(cat.cat_type().unwrap().get().id(), "BLACK");

        cat.offer(&breed).unwrap();
        assert_eq!(cat.cat_type().unwrap().get().id(), "PERSIAN");
    }
}
