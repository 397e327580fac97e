use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::types::{Category, CategoryNode, FlatCategory};

/// Builds a category tree from flat records.
///
/// Categories with no parent, a parent that is not in the list, or themselves as parent
/// become roots. Siblings are ordered by `sort_order` (missing last), then by input
/// order. When an id appears more than once, only the first record is kept.
///
/// Categories caught in a parent cycle cannot be reached from any root. They are
/// promoted to roots in input order, so every category appears exactly once.
///
/// # Examples
///
/// ```
/// use contentkit_core::category::{build_category_tree, Category};
///
/// let categories = vec![
///     Category::new("2", "Local", "local").with_parent("1"),
///     Category::new("1", "News", "news"),
/// ];
///
/// let tree = build_category_tree(&categories);
/// assert_eq!(tree.len(), 1);
/// assert_eq!(tree[0].category.slug, "news");
/// assert_eq!(tree[0].children[0].category.slug, "local");
/// ```
pub fn build_category_tree(categories: &[Category]) -> Vec<CategoryNode> {
    let mut seen = HashSet::new();
    let unique: Vec<&Category> = categories
        .iter()
        .filter(|category| seen.insert(category.id.as_str()))
        .collect();

    let mut roots = Vec::new();
    let mut children_of: HashMap<&str, Vec<usize>> = HashMap::new();

    for (index, &category) in unique.iter().enumerate() {
        match category.parent_id.as_deref() {
            Some(parent) if parent != category.id && seen.contains(parent) => {
                children_of.entry(parent).or_default().push(index);
            }
            _ => roots.push(index),
        }
    }

    sort_siblings(&mut roots, &unique);
    for siblings in children_of.values_mut() {
        sort_siblings(siblings, &unique);
    }

    let mut builder = TreeBuilder {
        placed: vec![false; unique.len()],
        categories: unique,
        children_of,
    };

    let mut tree: Vec<CategoryNode> = roots
        .into_iter()
        .map(|index| builder.node(index, 0))
        .collect();

    for index in 0..builder.categories.len() {
        if !builder.placed[index] {
            debug!(
                id = %builder.categories[index].id,
                "category unreachable from any root, promoting to root"
            );
            tree.push(builder.node(index, 0));
        }
    }

    tree
}

/// Flattens a tree in depth-first pre-order.
pub fn flatten_category_tree(tree: &[CategoryNode]) -> Vec<FlatCategory<'_>> {
    let mut flat = Vec::new();
    for node in tree {
        flatten_into(node, "", &mut flat);
    }
    flat
}

/// Returns the breadcrumb from a root down to the category with `id`.
pub fn find_category_path<'a>(tree: &'a [CategoryNode], id: &str) -> Option<Vec<&'a Category>> {
    for node in tree {
        if node.category.id == id {
            return Some(vec![&node.category]);
        }
        if let Some(mut path) = find_category_path(&node.children, id) {
            path.insert(0, &node.category);
            return Some(path);
        }
    }
    None
}

/// Finds the first node whose category has the given slug, searching depth-first.
pub fn find_category_by_slug<'a>(tree: &'a [CategoryNode], slug: &str) -> Option<&'a CategoryNode> {
    tree.iter().find_map(|node| {
        if node.category.slug == slug {
            Some(node)
        } else {
            find_category_by_slug(&node.children, slug)
        }
    })
}

/// Collects the ids of every descendant of `node`, in pre-order, excluding the node itself.
pub fn collect_descendant_ids(node: &CategoryNode) -> Vec<&str> {
    let mut ids = Vec::new();
    for child in &node.children {
        ids.push(child.category.id.as_str());
        ids.extend(collect_descendant_ids(child));
    }
    ids
}

struct TreeBuilder<'a> {
    categories: Vec<&'a Category>,
    children_of: HashMap<&'a str, Vec<usize>>,
    placed: Vec<bool>,
}

impl TreeBuilder<'_> {
    fn node(&mut self, index: usize, depth: usize) -> CategoryNode {
        self.placed[index] = true;
        let category = self.categories[index];

        let child_indexes = self
            .children_of
            .get(category.id.as_str())
            .cloned()
            .unwrap_or_default();

        let mut children = Vec::with_capacity(child_indexes.len());
        for child in child_indexes {
            if !self.placed[child] {
                children.push(self.node(child, depth + 1));
            }
        }

        CategoryNode {
            category: category.clone(),
            depth,
            children,
        }
    }
}

fn sort_siblings(indexes: &mut [usize], categories: &[&Category]) {
    // Stable, so equal sort orders keep input order.
    indexes.sort_by_key(|&index| {
        let order = categories[index].sort_order;
        (order.is_none(), order)
    });
}

fn flatten_into<'a>(node: &'a CategoryNode, parent_path: &str, flat: &mut Vec<FlatCategory<'a>>) {
    let path = if parent_path.is_empty() {
        node.category.slug.clone()
    } else {
        format!("{}/{}", parent_path, node.category.slug)
    };

    flat.push(FlatCategory {
        category: &node.category,
        depth: node.depth,
        path: path.clone(),
    });

    for child in &node.children {
        flatten_into(child, &path, flat);
    }
}
