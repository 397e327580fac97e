mod tree;
mod types;

pub use tree::{
    build_category_tree, collect_descendant_ids, find_category_by_slug, find_category_path,
    flatten_category_tree,
};
pub use types::{Category, CategoryNode, FlatCategory};
