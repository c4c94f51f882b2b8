//! Resolve command
//!
//! Loads a layout into a registry and prints the placement of every
//! module a connection reached.

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::storage::{Config, LayoutFile};

pub fn run(output: &Output, config: &Config, layout_path: &Path) -> Result<()> {
    let layout = LayoutFile::load(layout_path)?;
    output.verbose_ctx(
        "resolve",
        &format!(
            "Loaded {} modules and {} connections from {}",
            layout.modules.len(),
            layout.connections.len(),
            layout_path.display()
        ),
    );

    let strategy_name = config.project.resolver.strategy.as_str();
    let declared = layout.connections.len();
    let registry = layout.into_registry(config.project.connector());
    let resolution = registry.resolve_with(&config.project.strategy());

    output.verbose_ctx(
        "resolve",
        &format!(
            "{} placements, {} diagnostics",
            resolution.placements.len(),
            resolution.diagnostics.len()
        ),
    );

    if output.is_json() {
        output.data(&serde_json::json!({
            "strategy": strategy_name,
            "connections": declared,
            "clean": resolution.is_clean(),
            "placements": resolution.placements,
            "diagnostics": resolution.diagnostics,
        }));
        return Ok(());
    }

    if resolution.placements.is_empty() {
        println!("No modules placed.");
    } else {
        println!(
            "Placements ({} strategy, {} connections):",
            strategy_name, declared
        );
        println!("{:<20} {:<28} ROTATION", "MODULE", "POSITION");
        println!("{}", "-".repeat(76));
        for (module, placement) in &resolution.placements {
            println!(
                "{:<20} {:<28} {:.2}",
                module.as_str(),
                format!("{:.2}", placement.position),
                placement.rotation
            );
        }
    }

    if resolution.is_clean() {
        output.verbose_ctx("resolve", "All connections applied");
    }
    for diagnostic in &resolution.diagnostics {
        output.warn(&format!("skipped {}", diagnostic));
    }

    Ok(())
}
