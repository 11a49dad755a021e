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


//! Structured data views over a data holder

use super::holder::DataHolder;
use super::key::Keys;
use super::types::{CatType, DyeColor};
use super::value::{MutableValue, Value};

/// A structured view assembled from one or more keyed values.
pub trait DataManipulator: Sized {
    /// Name used in error messages
    const NAME: &'static str;

    /// Assemble the view, or `None` when the holder lacks a required value
    fn from_holder<H: DataHolder + ?Sized>(holder: &H) -> Option<Self>;
}

/// Cat specific data
#[derive(Debug, Clone, PartialEq)]
pub struct CatData {
    cat_type: Value<CatType>,
}

impl CatData {
    pub fn new(cat_type: Value<CatType>) -> Self {
        Self { cat_type }
    }

    /// Mutable copy of the breed
    pub fn cat_type(&self) -> MutableValue<CatType> {
        self.cat_type.as_mutable()
    }
}

impl DataManipulator for CatData {
    const NAME: &'static str = "CatData";

    fn from_holder<H: DataHolder + ?Sized>(holder: &H) -> Option<Self> {
        holder.get_value(Keys::CAT_TYPE).map(Self::new)
    }
}

/// Data for anything that can be dyed
#[derive(Debug, Clone, PartialEq)]
pub struct DyeableData {
    color: Value<DyeColor>,
}

impl DyeableData {
    pub fn new(color: Value<DyeColor>) -> Self {
        Self { color }
    }

    /// Mutable copy of the dye colour
    pub fn color(&self) -> MutableValue<DyeColor> {
        self.color.as_mutable()
    }
}

impl DataManipulator for DyeableData {
    const NAME: &'static str = "DyeableData";

    fn from_holder<H: DataHolder + ?Sized>(holder: &H) -> Option<Self> {
        holder.get_value(Keys::DYE_COLOR).map(Self::new)
    }
}
