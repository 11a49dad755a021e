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


//! Error types shared by the API surface

use thiserror::Error;

/// Errors raised by catalog resolution and data access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No host has installed an object provider yet.
    #[error("No object provider has been installed")]
    ProviderNotInstalled,

    /// A host attempted to install a second object provider.
    #[error("An object provider has already been installed")]
    ProviderAlreadyInstalled,

    /// The provider does not know the requested catalog entry.
    #[error("Unknown {catalog} entry: {id}")]
    UnknownCatalogEntry { catalog: &'static str, id: String },

    /// The provider returned an object of the wrong concrete type.
    #[error("Catalog entry {catalog}:{id} resolved to an unexpected type")]
    CatalogTypeMismatch { catalog: &'static str, id: String },

    /// The data store holds no value for the key.
    #[error("No value present for key {key}")]
    MissingValue { key: &'static str },

    /// The data store cannot assemble the requested manipulator.
    #[error("No {manipulator} present")]
    MissingData { manipulator: &'static str },

    /// The backing data store rejected the operation.
    #[error("Data store unavailable: {0}")]
    StoreUnavailable(String),

    /// A damage source failed to build.
    #[error(transparent)]
    DamageSource(#[from] DamageSourceError),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Precondition failures when building a damage source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DamageSourceError {
    /// `build` was called before a damage type was supplied.
    #[error("A damage type is required to build a damage source")]
    MissingDamageType,

    /// `build` was called on an entity damage source without a source entity.
    #[error("A source entity is required to build an entity damage source")]
    MissingSource,
}
