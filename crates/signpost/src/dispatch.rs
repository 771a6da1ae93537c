//! Help dispatch: full catalog vs a single command's own help.

use std::io::Write;

use clap::{Arg, ArgMatches, Command};

use crate::render::render_catalog;
use crate::{CatalogConfig, CatalogRegistry, HelpError};

/// Builds the `help [command]...` subcommand.
///
/// It takes zero or more positional tokens forming a command path and no
/// flags beyond the implicit help flag. Pair it with [`run_help_matches`]
/// in the application's dispatch loop.
pub fn help_command() -> Command {
    Command::new("help")
        .about("Help about any command")
        .arg(
            Arg::new("command")
                .value_name("COMMAND")
                .num_args(0..)
                .help("Command path to show help for"),
        )
}

/// Runs the help dispatcher.
///
/// With no path arguments the full catalog is rendered. Otherwise the path
/// is resolved against the tree with exact, case-sensitive matching at each
/// level, and the resolved command renders its own clap help. An unresolved
/// path produces no output and no error, as do hidden commands and topic
/// placeholders, which are excluded from delegated views as well as from
/// the catalog. Topics are registered by root-level name, so only a
/// single-token path can resolve to one; a nested command that merely
/// shares the name stays addressable.
pub fn run_help<W: Write>(
    w: &mut W,
    root: &Command,
    registry: &CatalogRegistry,
    config: &CatalogConfig,
    path: &[String],
) -> Result<(), HelpError> {
    if path.is_empty() {
        return render_catalog(w, root, registry, config);
    }

    // render_help needs a mutable command, so resolution walks a clone.
    let mut root = root.clone();
    let mut node = &mut root;
    for token in path {
        node = match node.find_subcommand_mut(token) {
            Some(sub) => sub,
            None => return Ok(()),
        };
    }
    if node.is_hide_set() {
        return Ok(());
    }
    // Topic names only exist at root level.
    if path.len() == 1 && registry.is_topic(node.get_name()) {
        return Ok(());
    }
    write!(w, "{}", node.render_help())?;
    Ok(())
}

/// Dispatches from the parsed matches of [`help_command`].
pub fn run_help_matches<W: Write>(
    w: &mut W,
    root: &Command,
    registry: &CatalogRegistry,
    config: &CatalogConfig,
    matches: &ArgMatches,
) -> Result<(), HelpError> {
    let path: Vec<String> = matches
        .get_many::<String>("command")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    run_help(w, root, registry, config, &path)
}
