use serde::{Deserialize, Serialize};

use crate::serde::deserialize_optional_string;

/// A flat category record as stored by the CMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub parent_id: Option<String>,
    /// Position among siblings. Categories without one sort last.
    #[serde(default)]
    pub sort_order: Option<i64>,
}

impl Category {
    /// Creates a root category.
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            parent_id: None,
            sort_order: None,
        }
    }

    /// Sets the parent category id.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Sets the sibling sort order.
    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = Some(sort_order);
        self
    }
}

/// A category placed in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    pub category: Category,
    /// Zero for roots.
    pub depth: usize,
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A category in depth-first order, with its slug path from the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatCategory<'a> {
    pub category: &'a Category,
    pub depth: usize,
    /// Slugs from the root joined with `/`, e.g. `"news/local"`.
    pub path: String,
}
