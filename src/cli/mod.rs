//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `init` | Create `dock.toml` and a sample `layout.toml` |
//! | `resolve` | Place every module reached by a connection |
//! | `connect` | Run the connection kernel on two anchors |
//! | `check` | Report unknown references, incompatible pairs, skewed vectors and type mismatches |
//! | `modules` | List modules and anchors |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug logging, or set `RUST_LOG`:
//! ```bash
//! dock --verbose resolve layout.toml --chained
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod check;
mod connect;
mod modules;
mod resolve;

pub use app::{run, Cli, Commands, CompatArgs};
pub use check::Problem;
pub use output::{Output, OutputFormat};
