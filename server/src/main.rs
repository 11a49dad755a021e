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


use clap::Parser;
use sylvan_api::{
    Cat, CatTypes, CatalogType, DamageSource, DamageTypes, DyeColors, Entity,
    EntityDamageSourceBuilder,
};
use sylvan_server::config::{Arguments, Configuration};
use sylvan_server::ecs::HostWorld;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load arguments from the command line
    let arguments: Arguments = Parser::parse();

    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .with_ansi(true)
        .init();

    // Load environment variables from .env file if specified
    if let Some(ref env_file) = arguments.env_file {
        if std::path::Path::new(env_file).exists() {
            tracing::debug!("Loading environment variables from file: {}", env_file);
            dotenv::from_filename(env_file).ok();
        }
    } else {
        tracing::debug!("Loading environment variables from default file");
        dotenv::dotenv().ok();
    }

    // Load configuration from a file with environment variable substitution
    let config = Configuration::load(&arguments.config_file)?;
    tracing::debug!("Configuration loaded: {:?}", config);
    tracing::info!("Starting Sylvan host {}...", config.host.display_name());

    let report = sylvan_server::bootstrap(&config)?;
    tracing::info!(
        "Object provider ready with {} catalog entries ({} from configuration)",
        report.registered,
        report.configured
    );

    // Exercise the installed provider end to end
    let world = HostWorld::new();
    let cat = world.spawn_cat(
        (*CatTypes::BRITISH_SHORTHAIR.get()?).clone(),
        (*DyeColors::BLUE.get()?).clone(),
    );
    let breed = cat.cat_type()?;
    let attack = EntityDamageSourceBuilder::new()
        .damage_type(DamageTypes::ATTACK.get()?)
        .entity(std::sync::Arc::new(cat.clone()))
        .build()?;
    tracing::info!(
        "Self check: {} {} attacks with {} damage costing {} exhaustion",
        breed.get().name(),
        cat.unique_id(),
        attack.damage_type().name(),
        attack.exhaustion()
    );

    tracing::info!("Sylvan host ready");
    Ok(())
}
