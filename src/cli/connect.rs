//! Connect command
//!
//! Runs the connection kernel on two anchors of a layout without touching
//! any placement state.

use std::path::Path;

use anyhow::{anyhow, Context, Result};

use super::output::Output;
use crate::domain::{Anchor, AnchorRef};
use crate::storage::{Config, LayoutFile};

pub fn run(
    output: &Output,
    config: &Config,
    layout_path: &Path,
    source: &str,
    target: &str,
) -> Result<()> {
    let layout = LayoutFile::load(layout_path)?;

    let source_ref: AnchorRef = source
        .parse()
        .with_context(|| format!("Invalid source anchor: {}", source))?;
    let target_ref: AnchorRef = target
        .parse()
        .with_context(|| format!("Invalid target anchor: {}", target))?;

    let a = find_anchor(&layout, &source_ref)?;
    let b = find_anchor(&layout, &target_ref)?;

    let connector = config.project.connector();
    output.verbose_ctx(
        "connect",
        &format!(
            "{} -> {} using {:?} matching, {} alignment",
            source_ref,
            target_ref,
            connector.direction_match(),
            connector.alignment().name()
        ),
    );

    let result = connector.connect(a, b);

    if output.is_json() {
        output.data(&serde_json::json!({
            "source": source_ref.to_string(),
            "target": target_ref.to_string(),
            "result": result,
        }));
        return Ok(());
    }

    println!("{} ↔ {}", source_ref, target_ref);
    if result.compatible {
        println!("Compatible");
        println!("  Translation: {:.2}", result.translation);
        println!("  Rotation:    {:.2}°", result.rotation_degrees);
        println!("  Distance:    {:.2}", result.distance);
    } else {
        println!(
            "Incompatible: {}",
            result.error.as_deref().unwrap_or("unknown reason")
        );
    }

    Ok(())
}

fn find_anchor<'a>(layout: &'a LayoutFile, anchor_ref: &AnchorRef) -> Result<&'a Anchor> {
    let module = layout
        .module(anchor_ref.module.as_str())
        .ok_or_else(|| anyhow!("Module not found: {}", anchor_ref.module))?;

    module
        .anchor(anchor_ref.anchor.as_str())
        .ok_or_else(|| anyhow!("Anchor not found: {}", anchor_ref))
}
