use tracing::debug;

use super::error::{Result, VariantError};
use super::selection::select_variant;
use super::types::{PageContent, ResolvedPage};

/// Resolves multivariate page content to the sections of a single variant.
///
/// The selected id is looked up by exact match. If the lookup misses, the first variant
/// is used instead. The input is left untouched.
///
/// # Errors
///
/// Returns [`VariantError::EmptyVariants`] when the page has no variants.
///
/// # Examples
///
/// ```
/// use contentkit_core::variant::{resolve_page_variant, PageContent, PageVariant};
/// use serde_json::json;
///
/// let content = PageContent::new(vec![
///     PageVariant::new("control", 50.0, vec![json!({"type": "hero"})]),
///     PageVariant::new("test", 50.0, vec![json!({"type": "banner"})]),
/// ]);
///
/// let resolved = resolve_page_variant(&content, 0.75).unwrap();
/// assert_eq!(resolved.variant_id, "test");
/// assert_eq!(resolved.sections, vec![json!({"type": "banner"})]);
/// ```
pub fn resolve_page_variant(content: &PageContent, bucket: f64) -> Result<ResolvedPage> {
    let selected = select_variant(bucket, &content.variants)?;

    let chosen = match content.variants.iter().find(|v| v.id == selected) {
        Some(variant) => variant,
        None => {
            debug!(selected, "selected page variant not found, using first variant");
            content
                .variants
                .first()
                .ok_or(VariantError::EmptyVariants)?
        }
    };

    Ok(ResolvedPage {
        sections: chosen.sections.clone(),
        variant_id: chosen.id.clone(),
    })
}
