//! Project scaffolding
//!
//! A dock project is a directory holding `dock.toml` and, by convention,
//! its layout files. [`Config::load`](super::Config::load) finds it by
//! walking up from the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::config::PROJECT_CONFIG_FILE;
use super::layout::SAMPLE_LAYOUT;

/// Layout file written by `dock init`
pub const SAMPLE_LAYOUT_FILE: &str = "layout.toml";

const DEFAULT_CONFIG: &str = r#"# habitat-dock configuration

[resolver]
# "single_hop": every target is placed relative to the origin, last connection wins
# "chained": breadth-first from root modules, placements accumulate along connections
strategy = "single_hop"
# root = "modulo_1"

[compatibility]
# Cosine tolerance for opposing anchor directions; 0 requires exact opposites
epsilon = 0.0
# Reject anchors whose direction or up vector is not unit length
require_unit_vectors = false
"#;

/// A dock project
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Initializes a project at the given path; existing files are kept
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create project directory: {}", root.display()))?;

        let config_path = root.join(PROJECT_CONFIG_FILE);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        let layout_path = root.join(SAMPLE_LAYOUT_FILE);
        if !layout_path.exists() {
            fs::write(&layout_path, SAMPLE_LAYOUT)
                .with_context(|| format!("Failed to write layout: {}", layout_path.display()))?;
        }

        Ok(Self { root })
    }

    /// Returns the project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the sample layout path
    pub fn layout_path(&self) -> PathBuf {
        self.root.join(SAMPLE_LAYOUT_FILE)
    }
}
