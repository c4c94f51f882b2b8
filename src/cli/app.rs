//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{check, connect, modules, resolve};
use crate::domain::{DirectionMatch, ModuleId};
use crate::storage::{Config, Project, StrategyKind};

#[derive(Parser)]
#[command(name = "dock")]
#[command(author, version, about = "Anchor-based docking for habitat modules")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for the `[compatibility]` config section
#[derive(Args, Debug, Clone, Default)]
pub struct CompatArgs {
    /// Cosine tolerance for opposing directions (0 = exact)
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Reject anchors whose direction or up vector is not unit length
    #[arg(long)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a dock project with a sample layout
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Resolve every declared connection into module placements
    Resolve {
        /// Layout file (.toml, .yaml, .yml or .json)
        layout: PathBuf,

        /// Accumulate placements along connection chains
        #[arg(long)]
        chained: bool,

        /// Root module for chained resolution (implies --chained)
        #[arg(long)]
        root: Option<String>,

        #[command(flatten)]
        compat: CompatArgs,
    },

    /// Connect two anchors and print the result
    Connect {
        /// Layout file holding both modules
        layout: PathBuf,

        /// Source anchor as module.anchor
        source: String,

        /// Target anchor as module.anchor
        target: String,

        #[command(flatten)]
        compat: CompatArgs,
    },

    /// Validate a layout without resolving it
    ///
    /// Non-unit anchor vectors are always reported.
    Check {
        /// Layout file
        layout: PathBuf,

        /// Cosine tolerance for opposing directions (0 = exact)
        #[arg(long)]
        epsilon: Option<f64>,
    },

    /// List modules and their anchors
    Modules {
        /// Layout file
        layout: PathBuf,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load()?;
    let output = Output::new(cli.format.unwrap_or(config.global.default_format));

    match &config.project_root {
        Some(root) => output.verbose_ctx("config", &format!("Using {}", root.display())),
        None => output.verbose_ctx("config", "No dock.toml found, using defaults"),
    }

    match cli.command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Initializing project at: {}", path));
            let project = Project::init(&path)?;
            output.verbose_ctx(
                "init",
                &format!("Sample layout at: {}", project.layout_path().display()),
            );
            output.success(&format!(
                "Initialized dock project at {}",
                project.root().display()
            ));
        }

        Commands::Resolve {
            layout,
            chained,
            root,
            compat,
        } => {
            apply_compat(&mut config, &compat)?;
            if let Some(root) = root {
                config.project.resolver.root = Some(ModuleId::new(root)?);
                config.project.resolver.strategy = StrategyKind::Chained;
            } else if chained {
                config.project.resolver.strategy = StrategyKind::Chained;
            }
            resolve::run(&output, &config, &layout)?
        }

        Commands::Connect {
            layout,
            source,
            target,
            compat,
        } => {
            apply_compat(&mut config, &compat)?;
            connect::run(&output, &config, &layout, &source, &target)?
        }

        Commands::Check { layout, epsilon } => {
            let compat = CompatArgs {
                epsilon,
                strict: false,
            };
            apply_compat(&mut config, &compat)?;
            check::run(&output, &config, &layout)?
        }

        Commands::Modules { layout } => modules::run(&output, &layout)?,
    }

    output.verbose_ctx("dock", "Command completed successfully");
    Ok(())
}

/// `--verbose` turns on debug logging; RUST_LOG takes precedence
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "error" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn apply_compat(config: &mut Config, compat: &CompatArgs) -> Result<()> {
    if let Some(epsilon) = compat.epsilon {
        config.project.compatibility.epsilon = epsilon;
    }
    if compat.strict {
        config.project.compatibility.require_unit_vectors = true;
    }
    config.project.validate()?;

    if let DirectionMatch::Tolerant { epsilon } = config.project.connector().direction_match() {
        log::debug!("Tolerant direction matching, epsilon = {}", epsilon);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn resolve_flags_parse() {
        let cli = Cli::try_parse_from([
            "dock", "resolve", "layout.toml", "--root", "hub", "--epsilon", "0.01", "--strict",
        ])
        .unwrap();

        match cli.command {
            Commands::Resolve {
                layout,
                chained,
                root,
                compat,
            } => {
                assert_eq!(layout, PathBuf::from("layout.toml"));
                assert!(!chained);
                assert_eq!(root.as_deref(), Some("hub"));
                assert_eq!(compat.epsilon, Some(0.01));
                assert!(compat.strict);
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn check_takes_epsilon_only() {
        let cli = Cli::try_parse_from(["dock", "check", "l.toml", "--epsilon", "0.5"]).unwrap();
        assert!(matches!(cli.command, Commands::Check { epsilon: Some(e), .. } if e == 0.5));

        assert!(Cli::try_parse_from(["dock", "check", "l.toml", "--strict"]).is_err());
    }

    #[test]
    fn global_format_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["dock", "modules", "l.json", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn compat_overrides_config() {
        let mut config = Config::default();
        let compat = CompatArgs {
            epsilon: Some(0.25),
            strict: true,
        };

        apply_compat(&mut config, &compat).unwrap();
        assert_eq!(config.project.compatibility.epsilon, 0.25);
        assert!(config.project.compatibility.require_unit_vectors);
    }

    #[test]
    fn compat_rejects_out_of_range_epsilon() {
        let mut config = Config::default();
        let compat = CompatArgs {
            epsilon: Some(3.0),
            strict: false,
        };
        assert!(apply_compat(&mut config, &compat).is_err());
    }
}
