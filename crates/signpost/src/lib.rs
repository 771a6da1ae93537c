//! # Signpost — categorized help catalogs for clap CLIs
//!
//! Signpost groups a clap application's subcommands into a fixed, ordered
//! set of categories and renders them as a formatted help catalog, or
//! delegates to a specific subcommand's own help text when a command path
//! is given.
//!
//! - [`Category`]: the closed set of recognized categories, in catalog order
//! - [`CatalogRegistry`]: per-command category/order metadata, registered at
//!   command-registration time
//! - [`CatalogConfig`]: product description and explicit category display
//!   order
//! - [`run_help`] / [`help_command`]: the help dispatcher and its subcommand
//! - [`catalog_data`]: the catalog as serializable data, for callers that
//!   want structure instead of text
//!
//! The command tree itself is plain `clap::Command`; Signpost only reads it.
//!
//! ## Quick start
//!
//! ```rust
//! use clap::Command;
//! use signpost::{run_help, CatalogConfig, CatalogRegistry, Category};
//!
//! let root = Command::new("shipit")
//!     .subcommand(Command::new("init").about("Initialize a project"))
//!     .subcommand(Command::new("deploy").about("Deploy an application"));
//!
//! let registry = CatalogRegistry::new()
//!     .register("init", Category::GettingStarted, "1")
//!     .register("deploy", Category::Application, "1");
//!
//! let config = CatalogConfig {
//!     description: "Ship applications from the command line.".into(),
//!     ..Default::default()
//! };
//!
//! let mut out = Vec::new();
//! run_help(&mut out, &root, &registry, &config, &[]).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("Getting Started:"));
//! assert!(text.contains("Application:"));
//! ```
//!
//! Hidden commands and help-topic placeholders never appear in any rendered
//! view. Commands with no registry entry are left out of the catalog but
//! stay addressable by path: `run_help` with `["that-command"]` renders
//! their own clap help.

mod category;
mod config;
mod data;
mod dispatch;
mod error;
mod registry;
mod render;

pub use category::Category;
pub use config::CatalogConfig;
pub use data::{catalog_data, CatalogData, Printable, Section};
pub use dispatch::{help_command, run_help, run_help_matches};
pub use error::HelpError;
pub use registry::{validate_registry, CatalogRegistry, CommandInfo};
pub use render::{render_catalog, render_category};
