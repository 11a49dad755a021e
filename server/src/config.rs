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
use serde::{Deserialize, Serialize};
use serde_env_field::EnvField;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    #[arg(
        short = 'c',
        long = "config",
        help = "Path to configuration file",
        default_value = "server/config.yaml"
    )]
    pub config_file: String,

    #[arg(
        short = 'e',
        long = "env",
        help = "Path to environment file",
        default_value = "server/.env"
    )]
    pub env_file: Option<String>,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            config_file: "config.yaml".to_string(),
            env_file: Some(".env".to_string()),
        }
    }
}

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open config file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub catalogs: CatalogConfig,
}

impl Configuration {
    pub fn load(path: &str) -> Result<Configuration, ConfigError> {
        let file = std::fs::File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_string(),
            source,
        })?;
        let conf = serde_yaml::from_reader(file)?;

        Ok(conf)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Name reported in logs
    #[serde(default)]
    pub name: EnvField<String>,
}

impl HostConfig {
    /// Configured name, falling back to `sylvan`
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "sylvan"
        } else {
            self.name.as_str()
        }
    }
}

/// Catalog entries contributed by the host on top of the vanilla set
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Skip resolving every declared constant at start-up
    #[serde(default)]
    pub skip_verification: EnvField<bool>,

    #[serde(default)]
    pub extra_damage_types: Vec<String>,

    #[serde(default)]
    pub extra_wood_types: Vec<String>,
}
