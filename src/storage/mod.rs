//! # Storage Layer
//!
//! File formats for habitat-dock: layouts and configuration.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Layouts | TOML, YAML or JSON (by extension) | anywhere, passed on the command line |
//! | Project config | TOML | `dock.toml` in the project root |
//! | Global config | TOML | `~/.config/habitat-dock/config.toml` |
//!
//! ## Key Types
//!
//! - [`LayoutFile`] - Modules and declared connections, loadable into a registry
//! - [`Config`] - Project and global configuration
//! - [`Project`] - A directory holding `dock.toml`

mod config;
mod layout;
mod project;

pub use config::{
    CompatibilityConfig, Config, ConfigError, GlobalConfig, ProjectConfig, ResolverConfig,
    StrategyKind, PROJECT_CONFIG_FILE,
};
pub use layout::{LayoutError, LayoutFile, LayoutFormat, SAMPLE_LAYOUT};
pub use project::{Project, SAMPLE_LAYOUT_FILE};
