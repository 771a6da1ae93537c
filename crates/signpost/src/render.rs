//! Catalog rendering.
//!
//! Text is written incrementally to the caller-supplied stream in rendering
//! order; write failures propagate as [`HelpError::Io`].

use std::io::Write;

use clap::Command;
use signpost_table::Table;

use crate::data::{category_commands, MAX_COL_WIDTH, NAME_COLUMN_WIDTH};
use crate::{CatalogConfig, CatalogRegistry, Category, HelpError};

/// Renders one category block.
///
/// The block is the category tag as a `<Tag>:` header line, then one
/// two-column row per command (name prefixed by two spaces and left-padded
/// to 15 characters, then the short description), then a trailing blank
/// line. A category with no qualifying commands renders nothing at all —
/// the emptiness check is on the filtered per-category set, not the whole
/// command tree.
pub fn render_category<W: Write>(
    w: &mut W,
    root: &Command,
    registry: &CatalogRegistry,
    category: Category,
) -> Result<(), HelpError> {
    let commands = category_commands(root, registry, category);
    if commands.is_empty() {
        return Ok(());
    }

    let mut table = Table::new().max_col_width(MAX_COL_WIDTH);
    for command in &commands {
        table.add_row([
            format!("  {:<width$}", command.name, width = NAME_COLUMN_WIDTH),
            command.short.clone(),
        ]);
    }

    writeln!(w, "{}:", category.tag())?;
    writeln!(w, "{table}")?;
    writeln!(w)?;
    Ok(())
}

/// Renders the full catalog.
///
/// Output is the configured product description, each configured category in
/// order via [`render_category`], then a static flags/usage footer naming
/// the root command.
pub fn render_catalog<W: Write>(
    w: &mut W,
    root: &Command,
    registry: &CatalogRegistry,
    config: &CatalogConfig,
) -> Result<(), HelpError> {
    writeln!(w, "{}\n", config.description)?;
    for &category in &config.categories {
        render_category(w, root, registry, category)?;
    }

    let tool = root.get_name();
    writeln!(w, "Flags:")?;
    writeln!(w, "  -h, --help   help for {tool}")?;
    writeln!(w)?;
    writeln!(
        w,
        "Use \"{tool} [command] --help\" for more information about a command."
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string<F>(render: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), HelpError>,
    {
        let mut out = Vec::new();
        render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_category_block_format() {
        let root = Command::new("shipit")
            .subcommand(Command::new("deploy").about("deploy app"))
            .subcommand(Command::new("list").about("list apps"));
        let registry = CatalogRegistry::new()
            .register("deploy", Category::Application, "2")
            .register("list", Category::Application, "1");

        let out =
            render_to_string(|w| render_category(w, &root, &registry, Category::Application));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Application:");
        assert_eq!(lines[1], format!("  {:<15}  {}", "list", "list apps"));
        assert_eq!(lines[2], format!("  {:<15}  {}", "deploy", "deploy app"));
        assert!(out.ends_with("\n\n"), "block should end with a blank line");
    }

    #[test]
    fn test_empty_category_renders_nothing() {
        let root = Command::new("shipit").subcommand(Command::new("deploy").about("deploy app"));
        let registry = CatalogRegistry::new().register("deploy", Category::Application, "1");

        let out = render_to_string(|w| render_category(w, &root, &registry, Category::System));
        assert!(out.is_empty(), "output: {out:?}");
    }

    #[test]
    fn test_catalog_footer_names_tool() {
        let root = Command::new("shipit");
        let registry = CatalogRegistry::new();
        let config = CatalogConfig {
            description: "Ship applications from the command line.".into(),
            ..Default::default()
        };

        let out = render_to_string(|w| render_catalog(w, &root, &registry, &config));

        assert!(out.starts_with("Ship applications from the command line.\n\n"));
        assert!(out.contains("  -h, --help   help for shipit"), "output:\n{out}");
        assert!(
            out.contains("Use \"shipit [command] --help\" for more information about a command."),
            "output:\n{out}"
        );
    }
}
