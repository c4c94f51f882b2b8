//! Configuration handling for habitat-dock
//!
//! Configuration is stored in `dock.toml` (project, found by walking up from
//! the working directory) and `~/.config/habitat-dock/config.toml` (global).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;
use crate::domain::{Connector, DirectionMatch, ModuleId, ResolveStrategy};

/// Project configuration file name
pub const PROJECT_CONFIG_FILE: &str = "dock.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Resolution strategy name as written in config files
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Every target placed relative to the origin, last write wins
    #[default]
    SingleHop,
    /// Breadth-first accumulation from root modules
    Chained,
}

impl StrategyKind {
    pub fn as_str(&self) -> &str {
        match self {
            StrategyKind::SingleHop => "single_hop",
            StrategyKind::Chained => "chained",
        }
    }
}

/// Configuration for layout resolution
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResolverConfig {
    /// Resolution strategy
    pub strategy: StrategyKind,

    /// Root module for chained resolution (defaults to modules with no
    /// incoming connection)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<ModuleId>,
}

/// Configuration for anchor compatibility
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompatibilityConfig {
    /// Cosine tolerance for antiparallel directions; 0 means exact equality
    pub epsilon: f64,

    /// Reject anchors whose direction or up vector is not unit length
    pub require_unit_vectors: bool,
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectConfig {
    /// Resolution settings
    pub resolver: ResolverConfig,

    /// Compatibility settings
    pub compatibility: CompatibilityConfig,
}

impl ProjectConfig {
    /// Checks values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        let epsilon = self.compatibility.epsilon;
        if !epsilon.is_finite() || !(0.0..=2.0).contains(&epsilon) {
            return Err(ConfigError::Invalid(format!(
                "compatibility.epsilon must be within [0, 2], got {}",
                epsilon
            )));
        }
        Ok(())
    }

    /// Builds the connector described by the compatibility settings
    pub fn connector(&self) -> Connector {
        Connector::new()
            .with_direction_match(DirectionMatch::from_epsilon(self.compatibility.epsilon))
            .require_unit_vectors(self.compatibility.require_unit_vectors)
    }

    /// Builds the resolution strategy described by the resolver settings
    pub fn strategy(&self) -> ResolveStrategy {
        match self.resolver.strategy {
            StrategyKind::SingleHop => ResolveStrategy::SingleHop,
            StrategyKind::Chained => ResolveStrategy::Chained {
                root: self.resolver.root.clone(),
            },
        }
    }
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

/// Combined configuration (global + project)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub project: ProjectConfig,
    pub global: GlobalConfig,
    pub project_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        let project_root = std::env::current_dir()
            .ok()
            .and_then(|dir| Self::find_project_root(&dir));

        match project_root {
            Some(root) => Self::for_project(&root),
            None => Ok(Self {
                project: ProjectConfig::default(),
                global: Self::load_global()?,
                project_root: None,
            }),
        }
    }

    /// Loads configuration for a specific project
    pub fn for_project(project_root: &Path) -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::load_project_config(project_root)?;

        Ok(Self {
            project,
            global,
            project_root: Some(project_root.to_path_buf()),
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "habitat-dock", "habitat-dock")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Loads project configuration from a specific root
    fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
        let config_path = project_root.join(PROJECT_CONFIG_FILE);

        if !config_path.exists() {
            return Ok(ProjectConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        let config: ProjectConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse project config")?;

        config
            .validate()
            .with_context(|| format!("Invalid project config: {}", config_path.display()))?;

        Ok(config)
    }

    /// Finds the project root by looking for `dock.toml` in `start` or a parent
    pub fn find_project_root(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(PROJECT_CONFIG_FILE).is_file() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}
