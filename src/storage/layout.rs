//! Layout files
//!
//! A layout file lists modules (with their anchors) and the connections to
//! resolve between them. TOML, YAML and JSON are accepted; the format is
//! picked from the file extension.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ConnectionRegistry, ConnectionSpec, Connector, Module, ModuleId};

/// Starter layout written by `dock init`
pub const SAMPLE_LAYOUT: &str = r#"# habitat-dock layout
#
# Modules list their anchors in module-local coordinates. Two anchors mate
# when their directions are exact opposites. Connections are resolved in
# the order they are declared.

[[modules]]
id = "modulo_1"
type = "habitat"

[[modules.anchors]]
id = "anclaje_A"
kind = "vertical_interconnect"
radius = 0.2
position = [0.0, -2.0, 0.0]
direction = [0.0, -1.0, 0.0]
up = [0.0, 0.0, 1.0]
compatible_types = ["habitat", "lab", "storage", "power", "life_support"]

[[modules.anchors]]
id = "anclaje_C"
kind = "horizontal_interconnect"
radius = 0.2
position = [2.0, 0.0, 0.0]
direction = [1.0, 0.0, 0.0]
up = [0.0, 1.0, 0.0]
compatible_types = ["habitat", "lab", "storage", "power", "life_support"]

[[modules]]
id = "modulo_2"
type = "habitat"

[[modules.anchors]]
id = "anclaje_B"
kind = "vertical_interconnect"
radius = 0.2
position = [0.0, 2.0, 0.0]
direction = [0.0, 1.0, 0.0]
up = [0.0, 0.0, 1.0]
compatible_types = ["habitat", "lab", "storage", "power", "life_support"]

[[modules.anchors]]
id = "anclaje_D"
kind = "horizontal_interconnect"
radius = 0.2
position = [-2.0, 0.0, 0.0]
direction = [-1.0, 0.0, 0.0]
up = [0.0, 1.0, 0.0]
compatible_types = ["habitat", "lab", "storage", "power", "life_support"]

[[connections]]
source_module = "modulo_1"
source_anchor = "anclaje_C"
target_module = "modulo_2"
target_anchor = "anclaje_D"
label = "C-D"

[[connections]]
source_module = "modulo_1"
source_anchor = "anclaje_A"
target_module = "modulo_2"
target_anchor = "anclaje_B"
label = "A-B"
"#;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Unsupported layout format for {0}: expected .toml, .yaml, .yml or .json")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse {format} layout: {message}")]
    Parse {
        format: LayoutFormat,
        message: String,
    },

    #[error("Duplicate module id: {0}")]
    DuplicateModule(ModuleId),
}

/// Serialization format of a layout file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFormat {
    Toml,
    Yaml,
    Json,
}

impl LayoutFormat {
    /// Picks the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, LayoutError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("toml") => Ok(LayoutFormat::Toml),
            Some("yaml") | Some("yml") => Ok(LayoutFormat::Yaml),
            Some("json") => Ok(LayoutFormat::Json),
            _ => Err(LayoutError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl fmt::Display for LayoutFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutFormat::Toml => write!(f, "TOML"),
            LayoutFormat::Yaml => write!(f, "YAML"),
            LayoutFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Modules and connections describing one layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutFile {
    #[serde(default)]
    pub modules: Vec<Module>,

    #[serde(default)]
    pub connections: Vec<ConnectionSpec>,
}

impl LayoutFile {
    /// Reads and validates a layout file
    pub fn load(path: &Path) -> Result<Self> {
        let format = LayoutFormat::from_path(path)?;

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout: {}", path.display()))?;

        Self::parse(&content, format)
            .with_context(|| format!("Invalid layout: {}", path.display()))
    }

    /// Parses and validates layout text
    pub fn parse(content: &str, format: LayoutFormat) -> Result<Self, LayoutError> {
        let parse_err = |message: String| LayoutError::Parse { format, message };

        let layout: LayoutFile = match format {
            LayoutFormat::Toml => toml::from_str(content).map_err(|e| parse_err(e.to_string()))?,
            LayoutFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))?
            }
            LayoutFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_err(e.to_string()))?
            }
        };

        layout.validate()?;
        Ok(layout)
    }

    /// Module ids must be unique across the file
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::new();
        for module in &self.modules {
            if !seen.insert(&module.id) {
                return Err(LayoutError::DuplicateModule(module.id.clone()));
            }
        }
        Ok(())
    }

    /// Looks up a module by id
    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id.as_str() == id)
    }

    /// Registers every module and declares every connection
    pub fn into_registry(self, connector: Connector) -> ConnectionRegistry {
        let mut registry = ConnectionRegistry::with_connector(connector);

        for module in self.modules {
            registry.register(module);
        }
        for spec in self.connections {
            registry.declare_connection(spec);
        }

        registry
    }

    /// Two modules joined by a vertical and a horizontal hatch
    pub fn sample() -> Result<Self, LayoutError> {
        Self::parse(SAMPLE_LAYOUT, LayoutFormat::Toml)
    }
}
