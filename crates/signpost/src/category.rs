//! The closed set of catalog categories.

use serde::Serialize;
use std::fmt;

/// A top-level grouping used to organize commands in the full-catalog help
/// view.
///
/// The set is closed and its declaration order is the default catalog
/// display order. Membership is assigned at command-registration time (see
/// [`CatalogRegistry`](crate::CatalogRegistry)), so an unrecognized tag is
/// structurally just an unregistered command rather than a stray string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Getting Started")]
    GettingStarted,
    #[serde(rename = "Application")]
    Application,
    #[serde(rename = "Continuous Delivery")]
    ContinuousDelivery,
    #[serde(rename = "Extension")]
    Extension,
    #[serde(rename = "System")]
    System,
}

impl Category {
    /// All recognized categories, in fixed catalog display order.
    pub const ALL: [Category; 5] = [
        Category::GettingStarted,
        Category::Application,
        Category::ContinuousDelivery,
        Category::Extension,
        Category::System,
    ];

    /// The display tag used as the section header in catalog output.
    pub fn tag(self) -> &'static str {
        match self {
            Category::GettingStarted => "Getting Started",
            Category::Application => "Application",
            Category::ContinuousDelivery => "Continuous Delivery",
            Category::Extension => "Extension",
            Category::System => "System",
        }
    }

    /// Parses a display tag back into a category.
    pub fn from_tag(tag: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.tag() == tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
