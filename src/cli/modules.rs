//! Modules command

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::storage::LayoutFile;

/// Lists the modules of a layout with their anchors
pub fn run(output: &Output, layout_path: &Path) -> Result<()> {
    let layout = LayoutFile::load(layout_path)?;

    if output.is_json() {
        output.data(&layout.modules);
        return Ok(());
    }

    if layout.modules.is_empty() {
        println!("No modules.");
        return Ok(());
    }

    for module in &layout.modules {
        match &module.module_type {
            Some(module_type) => println!("{} ({})", module.id, module_type),
            None => println!("{}", module.id),
        }

        for anchor in module.anchors() {
            let position = format!("{:.2}", anchor.position);
            let direction = format!("{:.2}", anchor.direction);
            output.row(&[
                "",
                anchor.id.as_str(),
                &anchor.kind.to_string(),
                &format!("r={:.2}", anchor.radius),
                &format!("pos={}", position),
                &format!("dir={}", direction),
            ]);
        }
    }

    output.blank();
    println!(
        "{} modules, {} connections",
        layout.modules.len(),
        layout.connections.len()
    );

    Ok(())
}
