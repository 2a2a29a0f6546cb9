use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

use super::command::DEFAULT_MANAGER;
use super::packages::PackageList;
use super::presentation::DEFAULT_TITLE;

// Optional JSON file overriding the built-in defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub manager: Option<String>,
    pub packages: Option<Vec<String>>,
    pub title: Option<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: ConfigFile = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub manager: String,
    pub packages: PackageList,
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manager: DEFAULT_MANAGER.to_string(),
            packages: PackageList::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Settings {
    /// Command line values win over the config file, which wins over the defaults.
    pub fn resolve(
        file: Option<ConfigFile>,
        manager: Option<String>,
        packages: Vec<String>,
    ) -> Result<Self> {
        let mut settings = Settings::default();
        let file = file.unwrap_or_default();

        if let Some(manager) = manager.or(file.manager) {
            settings.manager = manager;
        }
        if settings.manager.trim().is_empty() {
            return Err(anyhow::anyhow!("Package manager must not be empty."));
        }

        if !packages.is_empty() {
            settings.packages = PackageList::new(packages)?;
        } else if let Some(packages) = file.packages {
            settings.packages = PackageList::new(packages).context("invalid config file")?;
        }

        if let Some(title) = file.title {
            settings.title = title;
        }
        Ok(settings)
    }
}
