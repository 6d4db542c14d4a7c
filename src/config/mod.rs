// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. Only settings
//! live here, the catalog and playlists are never written to disk.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "mini-spotify";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Load the demo catalog at start-up.
    pub seed_catalog: bool,
    /// Default `tracing` filter, `RUST_LOG` takes precedence.
    pub log_filter: String,
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            seed_catalog: true,
            log_filter: "mini_spotify=warn".to_string(),
            prompt: "spotify>".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seeds_the_catalog() {
        let config = AppConfig::default();
        assert!(config.seed_catalog);
        assert_eq!(config.version, 1);
    }
}
