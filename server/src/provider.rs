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


//! Catalog Registry providing canonical catalog instances to plugins
//!
//! This module owns one shared instance per `(catalog type, identifier)` pair:
//! - Every constant declared by the API is seeded by [`CatalogRegistry::vanilla`]
//! - Hosts may register additional entries, e.g. from configuration
//!
//! The registry implements [`ObjectProvider`] so it can be installed as the
//! process wide provider that backs every `CatalogRef`.

use crate::config::CatalogConfig;
use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use sylvan_api::catalog::CatalogObject;
use sylvan_api::{
    ApiResult, CatTypes, CatalogEntry, CatalogRef, CatalogType, DamageType, DamageTypes,
    DyeColors, ObjectProvider, WoodType, WoodTypes,
};
use thiserror::Error;

/// Errors raised while registering catalog entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{catalog} entry {id} is already registered")]
    Duplicate { catalog: &'static str, id: String },

    #[error("Invalid {catalog} identifier {id:?}: expected UPPER_SNAKE_CASE")]
    InvalidId { catalog: &'static str, id: String },
}

/// Registry of canonical catalog instances
#[derive(Default)]
pub struct CatalogRegistry {
    /// Map from catalog type and identifier to the shared instance
    objects: HashMap<(TypeId, String), CatalogObject>,

    /// Number of entries per catalog name
    counts: BTreeMap<&'static str, usize>,
}

impl CatalogRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every constant the API declares
    pub fn vanilla() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register_declared(CatTypes::all())?;
        registry.register_declared(WoodTypes::all())?;
        registry.register_declared(DyeColors::all())?;
        registry.register_declared(DamageTypes::all())?;
        tracing::debug!("Seeded {} vanilla catalog entries", registry.len());
        Ok(registry)
    }

    /// Register a new catalog entry
    ///
    /// # Arguments
    /// * `entry` - Identifier and display name of the new instance
    ///
    /// # Returns
    /// * `Ok(Arc<T>)` - The canonical instance now held by the registry
    /// * `Err(RegistryError)` - If the identifier is malformed or already registered
    pub fn register<T: CatalogType>(&mut self, entry: CatalogEntry) -> Result<Arc<T>, RegistryError> {
        if !is_valid_id(&entry.id) {
            return Err(RegistryError::InvalidId {
                catalog: T::CATALOG,
                id: entry.id,
            });
        }
        let key = (TypeId::of::<T>(), entry.id.clone());
        if self.objects.contains_key(&key) {
            return Err(RegistryError::Duplicate {
                catalog: T::CATALOG,
                id: entry.id,
            });
        }

        let object = Arc::new(T::from_entry(entry));
        self.objects.insert(key, object.clone());
        *self.counts.entry(T::CATALOG).or_default() += 1;
        Ok(object)
    }

    /// Register every handle in a namespace, deriving names from the identifiers
    pub fn register_declared<T: CatalogType>(
        &mut self,
        handles: &[CatalogRef<T>],
    ) -> Result<(), RegistryError> {
        for handle in handles {
            self.register::<T>(CatalogEntry::from_id(handle.id()))?;
        }
        Ok(())
    }

    /// Register the extra damage and wood types named in the configuration
    ///
    /// Identifiers are upper-cased before validation, so `frost_bite` becomes
    /// `FROST_BITE`.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of entries added
    pub fn register_configured(&mut self, config: &CatalogConfig) -> Result<usize, RegistryError> {
        let mut added = 0;
        for id in &config.extra_damage_types {
            self.register::<DamageType>(CatalogEntry::from_id(id.to_ascii_uppercase()))?;
            added += 1;
        }
        for id in &config.extra_wood_types {
            self.register::<WoodType>(CatalogEntry::from_id(id.to_ascii_uppercase()))?;
            added += 1;
        }
        if added > 0 {
            tracing::info!("Registered {} configured catalog entries", added);
        }
        Ok(added)
    }

    /// Look up the canonical instance of `T` named `id`
    pub fn lookup<T: CatalogType>(&self, id: &str) -> Option<Arc<T>> {
        self.objects
            .get(&(TypeId::of::<T>(), id.to_string()))
            .cloned()
            .and_then(|object| object.downcast::<T>().ok())
    }

    /// Check if an entry is registered
    pub fn contains<T: CatalogType>(&self, id: &str) -> bool {
        self.objects.contains_key(&(TypeId::of::<T>(), id.to_string()))
    }

    /// Number of entries registered for a catalog
    pub fn count(&self, catalog: &str) -> usize {
        self.counts.get(catalog).copied().unwrap_or(0)
    }

    /// Get the number of registered entries
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectProvider for CatalogRegistry {
    fn provide(&self, catalog: &str, type_id: TypeId, id: &str) -> Option<CatalogObject> {
        let object = self.objects.get(&(type_id, id.to_string())).cloned();
        if object.is_none() {
            tracing::warn!("No {} entry registered for {}", catalog, id);
        }
        object
    }
}

/// Outcome of resolving every declared constant
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// Resolved constants per catalog name
    pub resolved: BTreeMap<&'static str, usize>,
}

impl VerificationReport {
    pub fn total(&self) -> usize {
        self.resolved.values().sum()
    }

    fn verify<T: CatalogType>(
        &mut self,
        provider: &dyn ObjectProvider,
        handles: &[CatalogRef<T>],
    ) -> ApiResult<()> {
        for handle in handles {
            handle.resolve_with(provider)?;
        }
        *self.resolved.entry(T::CATALOG).or_default() += handles.len();
        Ok(())
    }
}

/// Resolve every constant the API declares against `provider`
///
/// Fails on the first constant the provider cannot supply.
pub fn verify_declared(provider: &dyn ObjectProvider) -> ApiResult<VerificationReport> {
    let mut report = VerificationReport::default();
    report.verify(provider, CatTypes::all())?;
    report.verify(provider, WoodTypes::all())?;
    report.verify(provider, DyeColors::all())?;
    report.verify(provider, DamageTypes::all())?;
    Ok(report)
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('_')
        && id
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
