//! Catalog configuration.

use crate::Category;

/// Configuration for full-catalog rendering.
///
/// The category list is the catalog's display order. It is passed in
/// explicitly rather than read from a hidden global, so callers can reorder
/// or drop sections without touching the registry.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// One-line product description printed above the catalog.
    pub description: String,
    /// Categories to render, in display order.
    pub categories: Vec<Category>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            description: String::new(),
            categories: Category::ALL.to_vec(),
        }
    }
}
