mod blog;
mod error;
mod page;
mod sections;
mod selection;
mod types;

pub use blog::resolve_blog_post_variant;
pub use error::{Result, VariantError};
pub use page::resolve_page_variant;
pub use sections::resolve_form_variants_in_sections;
pub use selection::{is_multivariate_content, select_variant};
pub use types::{PageContent, PageVariant, ResolvedPage, Weighted, WeightedVariant};
