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


//! Catalog constants and the object provider that resolves them
//!
//! A catalog is a named family of singleton constants, such as cat breeds or
//! wood species. This crate only declares the identifiers; the host owns the
//! canonical instances and hands them out through an installed
//! [`ObjectProvider`]. Constants are exposed as [`CatalogRef`] handles that are
//! resolved on first use and cached for the lifetime of the process.

use crate::error::{ApiError, ApiResult};
use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared, type-erased catalog instance as handed out by a provider.
pub type CatalogObject = Arc<dyn Any + Send + Sync>;

/// A named type constant belonging to a catalog.
pub trait CatalogType: fmt::Debug + Clone + Send + Sync + 'static {
    /// Name of the catalog this type belongs to, e.g. `cat_type`.
    const CATALOG: &'static str;

    /// Declared identifier, e.g. `ALL_BLACK`.
    fn id(&self) -> &str;

    /// Human readable name.
    fn name(&self) -> &str;

    /// Build an instance from a provider's catalog entry.
    fn from_entry(entry: CatalogEntry) -> Self;
}

/// Raw data a provider uses to construct a catalog instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
}

impl CatalogEntry {
    /// Create an entry with an explicit display name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Create an entry whose display name is derived from the identifier
    ///
    /// `BRITISH_SHORTHAIR` becomes `British Shorthair`.
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        let name = id
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        Self { id, name }
    }
}

/// Resolves catalog identifiers to the host's canonical instances.
///
/// Implementations must return the same instance for the same
/// `(type_id, id)` pair every time.
#[cfg_attr(test, mockall::automock)]
pub trait ObjectProvider: Send + Sync {
    /// Look up the canonical instance of `type_id` named `id` in `catalog`.
    fn provide(&self, catalog: &str, type_id: TypeId, id: &str) -> Option<CatalogObject>;
}

static PROVIDER: OnceCell<Box<dyn ObjectProvider>> = OnceCell::new();

static RESOLVED: Lazy<RwLock<HashMap<(TypeId, &'static str), CatalogObject>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Install the process wide object provider.
///
/// Only the first call succeeds.
pub fn install_provider<P: ObjectProvider + 'static>(provider: P) -> ApiResult<()> {
    PROVIDER
        .set(Box::new(provider))
        .map_err(|_| ApiError::ProviderAlreadyInstalled)?;
    tracing::info!("Object provider installed");
    Ok(())
}

/// Get the installed object provider
pub fn provider() -> ApiResult<&'static dyn ObjectProvider> {
    PROVIDER
        .get()
        .map(|provider| provider.as_ref())
        .ok_or(ApiError::ProviderNotInstalled)
}

/// Handle to a single catalog constant.
///
/// Handles are plain `const` values; resolution happens in [`CatalogRef::get`].
pub struct CatalogRef<T> {
    id: &'static str,
    _type: PhantomData<fn() -> T>,
}

impl<T> CatalogRef<T> {
    pub const fn new(id: &'static str) -> Self {
        Self {
            id,
            _type: PhantomData,
        }
    }

    /// Declared identifier of the constant
    pub const fn id(&self) -> &'static str {
        self.id
    }
}

impl<T: CatalogType> CatalogRef<T> {
    /// Resolve through the installed provider, caching the result
    pub fn get(&self) -> ApiResult<Arc<T>> {
        let key = (TypeId::of::<T>(), self.id);
        let cached = RESOLVED
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();
        if let Some(object) = cached {
            return downcast::<T>(object, self.id);
        }

        let resolved = self.resolve_with(provider()?)?;
        let stored = RESOLVED
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert_with(|| resolved as CatalogObject)
            .clone();
        tracing::debug!(catalog = T::CATALOG, id = self.id, "Resolved catalog entry");
        downcast::<T>(stored, self.id)
    }

    /// Resolve through an explicit provider, bypassing the cache
    pub fn resolve_with(&self, provider: &dyn ObjectProvider) -> ApiResult<Arc<T>> {
        let object = provider
            .provide(T::CATALOG, TypeId::of::<T>(), self.id)
            .ok_or_else(|| ApiError::UnknownCatalogEntry {
                catalog: T::CATALOG,
                id: self.id.to_string(),
            })?;
        downcast::<T>(object, self.id)
    }
}

fn downcast<T: CatalogType>(object: CatalogObject, id: &str) -> ApiResult<Arc<T>> {
    object
        .downcast::<T>()
        .map_err(|_| ApiError::CatalogTypeMismatch {
            catalog: T::CATALOG,
            id: id.to_string(),
        })
}

impl<T> Clone for CatalogRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CatalogRef<T> {}

impl<T> PartialEq for CatalogRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for CatalogRef<T> {}

impl<T> fmt::Debug for CatalogRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CatalogRef").field(&self.id).finish()
    }
}

impl<T> fmt::Display for CatalogRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
