//! Sample CLI exercising the signpost catalog.
//!
//! This is a demo application modeled on a small delivery-platform CLI.
//! Commands echo what was invoked instead of doing real work; only `help`
//! (and the bare invocation) are wired up for real.

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use signpost::{run_help, CatalogConfig, CatalogRegistry, Category};

#[derive(Parser)]
#[command(
    name = "shipit",
    about = "Ship applications from the command line",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a project
    Init,
    /// Start a local environment
    Up,
    /// List applications
    Ls,
    /// Deploy an application
    Deploy {
        /// Application name
        name: String,
    },
    /// Show application status
    Status,
    /// Promote a release to the next environment
    Promote,
    /// Roll back to the previous release
    Rollback,
    /// Manage addons
    Addon,
    /// Show logs
    Logs,
    /// Print version information
    Version,
    /// Generate shell completion
    #[command(hide = true)]
    Completion,
    /// Help about any command
    Help {
        /// Command path to show help for
        command: Vec<String>,
    },
}

fn catalog_registry() -> CatalogRegistry {
    CatalogRegistry::new()
        .register("init", Category::GettingStarted, "1")
        .register("up", Category::GettingStarted, "2")
        .register("ls", Category::Application, "1")
        .register("deploy", Category::Application, "2")
        .register("status", Category::Application, "3")
        .register("promote", Category::ContinuousDelivery, "1")
        .register("rollback", Category::ContinuousDelivery, "2")
        .register("addon", Category::Extension, "1")
        .register("logs", Category::System, "1")
        .register("version", Category::System, "2")
}

fn catalog_config() -> CatalogConfig {
    CatalogConfig {
        description: "Ship applications from the command line.".into(),
        ..Default::default()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = Cli::command();
    let registry = catalog_registry();
    let config = catalog_config();

    match cli.command {
        Some(Commands::Help { command }) => {
            run_help(&mut io::stdout(), &root, &registry, &config, &command)?;
        }
        Some(Commands::Deploy { name }) => println!("deploy: would deploy {name}"),
        Some(_) => println!("this sample only implements help"),
        None => {
            run_help(&mut io::stdout(), &root, &registry, &config, &[])?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use signpost::validate_registry;

    #[test]
    fn test_registry_matches_commands() {
        validate_registry(&Cli::command(), &catalog_registry()).unwrap();
    }
}
