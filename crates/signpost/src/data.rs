//! Catalog data extraction from a clap command tree.
//!
//! Extraction is separate from rendering: the filter/sort pipeline produces
//! serializable projections, and the render layer turns them into text.

use clap::Command;
use serde::Serialize;

use crate::{CatalogConfig, CatalogRegistry, Category};

/// Width the command name is left-padded to in catalog rows.
pub(crate) const NAME_COLUMN_WIDTH: usize = 15;

/// Maximum rendered width of any catalog table column.
pub(crate) const MAX_COL_WIDTH: usize = 80;

/// Render-only projection of one catalog command.
#[derive(Clone, Debug, Serialize)]
pub struct Printable {
    /// Sort key within the category; byte-wise lexicographic, empty first.
    pub order: String,
    pub name: String,
    pub short: String,
}

/// One category section of the catalog.
#[derive(Clone, Debug, Serialize)]
pub struct Section {
    pub category: Category,
    pub commands: Vec<Printable>,
}

/// Serializable projection of the full catalog.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogData {
    pub description: String,
    pub sections: Vec<Section>,
}

/// Collects, filters, and sorts the commands of one category.
///
/// Hidden commands and topic placeholders are dropped, as are commands with
/// no registry entry or one under a different category. The sort is stable
/// (`slice::sort_by`), so equal order keys keep declaration order.
pub(crate) fn category_commands(
    root: &Command,
    registry: &CatalogRegistry,
    category: Category,
) -> Vec<Printable> {
    let mut commands: Vec<Printable> = root
        .get_subcommands()
        .filter(|c| !c.is_hide_set() && !registry.is_topic(c.get_name()))
        .filter_map(|c| {
            let info = registry.info(c.get_name())?;
            (info.category == category).then(|| Printable {
                order: info.order.clone(),
                name: c.get_name().to_string(),
                short: c.get_about().map(|s| s.to_string()).unwrap_or_default(),
            })
        })
        .collect();
    commands.sort_by(|a, b| a.order.cmp(&b.order));
    commands
}

/// Extracts the full catalog as serializable data.
///
/// Sections follow the configured category order; categories with no
/// qualifying commands are omitted entirely.
pub fn catalog_data(
    root: &Command,
    registry: &CatalogRegistry,
    config: &CatalogConfig,
) -> CatalogData {
    CatalogData {
        description: config.description.clone(),
        sections: config
            .categories
            .iter()
            .map(|&category| Section {
                category,
                commands: category_commands(root, registry, category),
            })
            .filter(|section| !section.commands.is_empty())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_root() -> Command {
        Command::new("shipit")
            .subcommand(Command::new("deploy").about("deploy app"))
            .subcommand(Command::new("list").about("list apps"))
            .subcommand(Command::new("secret").about("hidden").hide(true))
            .subcommand(Command::new("workflow").about("topic"))
            .subcommand(Command::new("untagged").about("no category"))
    }

    fn sample_registry() -> CatalogRegistry {
        CatalogRegistry::new()
            .register("deploy", Category::Application, "2")
            .register("list", Category::Application, "1")
            .register("secret", Category::Application, "3")
            .register("workflow", Category::Application, "4")
            .topic("workflow")
    }

    #[test]
    fn test_sorts_by_order_key() {
        let commands = category_commands(&sample_root(), &sample_registry(), Category::Application);
        let names: Vec<&str> = commands.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["list", "deploy"]);
    }

    #[test]
    fn test_hidden_and_topics_excluded_even_if_registered() {
        let commands = category_commands(&sample_root(), &sample_registry(), Category::Application);
        assert!(commands.iter().all(|p| p.name != "secret"));
        assert!(commands.iter().all(|p| p.name != "workflow"));
    }

    #[test]
    fn test_unregistered_command_excluded() {
        let commands = category_commands(&sample_root(), &sample_registry(), Category::Application);
        assert!(commands.iter().all(|p| p.name != "untagged"));
    }

    #[test]
    fn test_equal_order_keys_keep_declaration_order() {
        let root = Command::new("root")
            .subcommand(Command::new("zebra").about("z"))
            .subcommand(Command::new("apple").about("a"));
        let registry = CatalogRegistry::new()
            .register("zebra", Category::System, "1")
            .register("apple", Category::System, "1");

        let commands = category_commands(&root, &registry, Category::System);
        let names: Vec<&str> = commands.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["zebra", "apple"]);
    }

    #[test]
    fn test_missing_order_key_sorts_first() {
        let root = Command::new("root")
            .subcommand(Command::new("late").about("l"))
            .subcommand(Command::new("early").about("e"));
        let registry = CatalogRegistry::new()
            .register("late", Category::System, "1")
            .register("early", Category::System, "");

        let commands = category_commands(&root, &registry, Category::System);
        assert_eq!(commands[0].name, "early");
        assert_eq!(commands[1].name, "late");
    }

    #[test]
    fn test_catalog_data_omits_empty_sections() {
        let data = catalog_data(
            &sample_root(),
            &sample_registry(),
            &CatalogConfig::default(),
        );
        assert_eq!(data.sections.len(), 1);
        assert_eq!(data.sections[0].category, Category::Application);
    }

    #[test]
    fn test_catalog_data_serializes() {
        let config = CatalogConfig {
            description: "Sample".into(),
            ..Default::default()
        };
        let data = catalog_data(&sample_root(), &sample_registry(), &config);
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"category\":\"Application\""), "json: {json}");
        assert!(json.contains("\"name\":\"list\""), "json: {json}");
    }
}
