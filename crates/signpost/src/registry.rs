//! Command metadata registration.
//!
//! clap commands carry no user-defined annotations, so category membership
//! and in-category ordering are registered here at command-registration
//! time, keyed by command name. A command absent from the registry is
//! uncategorized: it never appears in the full catalog but stays directly
//! addressable by path.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use clap::Command;

use crate::{Category, HelpError};

/// Catalog metadata for one command.
#[derive(Clone, Debug)]
pub struct CommandInfo {
    /// Category the command is listed under.
    pub category: Category,
    /// Sort key within the category, compared byte-wise. An empty key sorts
    /// first.
    pub order: String,
}

/// Maps command names to catalog metadata.
///
/// Built once at startup with the fluent API and treated as read-only during
/// rendering:
///
/// ```rust
/// use signpost::{CatalogRegistry, Category};
///
/// let registry = CatalogRegistry::new()
///     .register("init", Category::GettingStarted, "1")
///     .register("deploy", Category::Application, "2")
///     .topic("workflow");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CatalogRegistry {
    info: BTreeMap<String, CommandInfo>,
    topics: BTreeSet<String>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under a category with an order key.
    pub fn register(
        mut self,
        name: impl Into<String>,
        category: Category,
        order: impl Into<String>,
    ) -> Self {
        self.info.insert(
            name.into(),
            CommandInfo {
                category,
                order: order.into(),
            },
        );
        self
    }

    /// Marks a command as a pure help-topic placeholder.
    ///
    /// Topics never appear in any rendered view, catalog or delegated.
    pub fn topic(mut self, name: impl Into<String>) -> Self {
        self.topics.insert(name.into());
        self
    }

    /// Catalog metadata for a command, if it was registered.
    pub fn info(&self, name: &str) -> Option<&CommandInfo> {
        self.info.get(name)
    }

    pub fn is_topic(&self, name: &str) -> bool {
        self.topics.contains(name)
    }

    /// Every name the registry knows about, info entries and topics alike.
    fn registered_names(&self) -> BTreeSet<&str> {
        self.info
            .keys()
            .map(String::as_str)
            .chain(self.topics.iter().map(String::as_str))
            .collect()
    }
}

/// Validates a registry against the actual clap command tree.
///
/// Checks for phantom references: registered names that do not exist as
/// visible subcommands of `root`. Unregistered commands are fine — they are
/// simply left out of the catalog. Call this from a `#[test]` to catch
/// misconfigurations in CI.
pub fn validate_registry(root: &Command, registry: &CatalogRegistry) -> Result<(), HelpError> {
    let known: BTreeSet<&str> = root
        .get_subcommands()
        .filter(|c| !c.is_hide_set())
        .map(|c| c.get_name())
        .collect();

    let phantoms: Vec<String> = registry
        .registered_names()
        .into_iter()
        .filter(|name| !known.contains(name))
        .map(|name| format!("\"{name}\" is registered but does not exist"))
        .collect();

    if phantoms.is_empty() {
        Ok(())
    } else {
        Err(HelpError::Config(phantoms.join("\n  ")))
    }
}
