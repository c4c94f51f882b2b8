//! Check command
//!
//! Reports every problem in a layout and fails if there is at least one.

use std::path::Path;

use anyhow::{bail, Result};
use serde::Serialize;

use super::output::Output;
use crate::domain::{ConnectionRegistry, ConnectionSpec};
use crate::storage::{Config, LayoutFile};

/// One problem found in a layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Problem {
    /// Module, anchor or connection the problem is about
    pub subject: String,
    pub message: String,
}

impl Problem {
    fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }
}

pub fn run(output: &Output, config: &Config, layout_path: &Path) -> Result<()> {
    let layout = LayoutFile::load(layout_path)?;
    let module_count = layout.modules.len();
    let connection_count = layout.connections.len();

    let problems = collect_problems(layout, config);

    output.verbose_ctx(
        "check",
        &format!("{} problems in {}", problems.len(), layout_path.display()),
    );

    if output.is_json() {
        output.data(&serde_json::json!({
            "ok": problems.is_empty(),
            "modules": module_count,
            "connections": connection_count,
            "problems": problems,
        }));
    } else if problems.is_empty() {
        output.success(&format!(
            "Layout OK: {} modules, {} connections",
            module_count, connection_count
        ));
    } else {
        for problem in &problems {
            println!("{}: {}", problem.subject, problem.message);
        }
        output.blank();
    }

    if !problems.is_empty() {
        bail!(
            "{} problem(s) found in {}",
            problems.len(),
            layout_path.display()
        );
    }

    Ok(())
}

/// Every problem in a layout, each reported once
///
/// Skewed anchors are reported per anchor whether or not strict mode is
/// on, so connections are checked with the unit-vector test disabled.
fn collect_problems(layout: LayoutFile, config: &Config) -> Vec<Problem> {
    let mut problems = unit_vector_problems(&layout);

    let connector = config.project.connector().require_unit_vectors(false);
    let registry = layout.into_registry(connector);
    problems.extend(connection_problems(&registry, config));
    problems.extend(type_problems(&registry));

    problems
}

/// Anchors whose direction or up vector is not unit length
fn unit_vector_problems(layout: &LayoutFile) -> Vec<Problem> {
    layout
        .modules
        .iter()
        .flat_map(|module| {
            module.anchors().iter().filter_map(move |anchor| {
                anchor
                    .validate_unit_vectors()
                    .err()
                    .map(|e| Problem::new(format!("{}.{}", module.id, anchor.id), e.to_string()))
            })
        })
        .collect()
}

/// Everything the configured resolution strategy would skip
fn connection_problems(registry: &ConnectionRegistry, config: &Config) -> Vec<Problem> {
    registry
        .resolve_with(&config.project.strategy())
        .diagnostics
        .into_iter()
        .map(|d| {
            Problem::new(
                format!("#{} {}", d.index, d.connection),
                d.issue.to_string(),
            )
        })
        .collect()
}

/// Connections whose anchors do not accept the other module's type
fn type_problems(registry: &ConnectionRegistry) -> Vec<Problem> {
    let mut problems = Vec::new();

    for (index, spec) in registry.connections().iter().enumerate() {
        let Ok((source, target)) = registry.lookup(spec) else {
            continue;
        };

        let sides = [
            (source, &spec.source_module, &spec.target_module),
            (target, &spec.target_module, &spec.source_module),
        ];
        for (anchor, own_module, other_module) in sides {
            let Some(other_type) = registry
                .module(other_module.as_str())
                .and_then(|m| m.module_type.as_deref())
            else {
                continue;
            };

            if !anchor.accepts(other_type) {
                problems.push(Problem::new(
                    subject(index, spec),
                    format!(
                        "anchor {}.{} does not accept modules of type '{}'",
                        own_module, anchor.id, other_type
                    ),
                ));
            }
        }
    }

    problems
}

fn subject(index: usize, spec: &ConnectionSpec) -> String {
    format!("#{} {}", index, spec.display_name())
}
