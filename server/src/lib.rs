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


//! Sylvan reference host
//!
//! Implements the collaborators the plugin API expects from a game server:
//! a catalog [`provider`], ECS backed entities in [`ecs`] and the
//! [`config`]uration that drives start-up.

pub mod config;
pub mod ecs;
pub mod provider;

use crate::config::{ConfigError, Configuration};
use crate::provider::{CatalogRegistry, RegistryError, VerificationReport, verify_declared};
use sylvan_api::ApiError;
use thiserror::Error;

/// Errors that abort host start-up
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog registration failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("Catalog verification failed: {0}")]
    Api(#[from] ApiError),
}

/// Summary of a completed start-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootReport {
    /// Entries held by the installed registry
    pub registered: usize,
    /// Entries added from configuration
    pub configured: usize,
    /// Verification result, absent when verification was skipped
    pub verification: Option<VerificationReport>,
}

/// Build the catalog registry described by `config`, verify it and install it
/// as the process wide object provider.
pub fn bootstrap(config: &Configuration) -> Result<BootReport, HostError> {
    let mut registry = CatalogRegistry::vanilla()?;
    let configured = registry.register_configured(&config.catalogs)?;

    let verification = if *config.catalogs.skip_verification {
        tracing::warn!("Skipping catalog verification");
        None
    } else {
        let report = verify_declared(&registry)?;
        tracing::info!("Verified {} declared catalog constants", report.total());
        Some(report)
    };

    let registered = registry.len();
    sylvan_api::install_provider(registry)?;

    Ok(BootReport {
        registered,
        configured,
        verification,
    })
}
