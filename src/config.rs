use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::resources::Resources;

pub const RESOURCES_DIR_ENV: &str = "RESOURCES_DIR";

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostConfig {
    pub resources_dir: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            resources_dir: default_resources_dir(),
        }
    }
}

impl HostConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid host config")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Unable to read config {}", path.display()))?;
        let mut config = Self::from_json(&json)
            .with_context(|| format!("Unable to parse config {}", path.display()))?;

        // Relative roots are taken relative to the config file.
        if config.resources_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.resources_dir = parent.join(&config.resources_dir);
            }
        }
        Ok(config)
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_resources_dir_override(env::var_os(RESOURCES_DIR_ENV).map(PathBuf::from))
    }

    fn with_resources_dir_override(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir.filter(|dir| !dir.as_os_str().is_empty()) {
            log::info!("Using resources directory from {RESOURCES_DIR_ENV}");
            self.resources_dir = dir;
        }
        self
    }

    pub fn resources(&self) -> Resources {
        Resources::new(&self.resources_dir)
    }
}

/// `resources/` next to the running executable, or in the working directory
/// if the executable's location is unknown.
fn default_resources_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("resources")))
        .unwrap_or_else(|| PathBuf::from("resources"))
}
