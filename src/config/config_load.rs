// src/config/config_load.rs
//
// loading the config.toml

use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub paths: PathConfig,
    pub window: WindowConfig,
    pub osc: OscConfig,
    pub style: StyleConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub spawner: SpawnerConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    pub fn parse(content: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(content)?)
    }

    fn load_from_exe_dir() -> Option<Self> {
        let config_path = exe_dir()?.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            match Self::parse(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    log::warn!("Ignoring {}: {}", config_path.display(), e);
                    None
                }
            }
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string("config.toml")?;
        Self::parse(&content)
    }

    pub fn resolve_scene_path(&self) -> PathBuf {
        resolve_path(&self.paths.scene_file, exe_dir())
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
}

// Relative paths resolve against the executable's directory when it is known
fn resolve_path(path: &str, base: Option<PathBuf>) -> PathBuf {
    if Path::new(path).is_absolute() {
        return PathBuf::from(path);
    }
    match base {
        Some(dir) if dir.join(path).exists() => dir.join(path),
        _ => PathBuf::from(path),
    }
}
