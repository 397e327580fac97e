use serde_json::Value;
use tracing::debug;

use super::error::Result;
use super::selection::{coerce_candidates, has_id, select_variant};
use crate::coerce::is_truthy;

/// Resolves a multivariate blog post in place.
///
/// Content that is not a record, has a falsy `multivariate` flag, or whose `variants`
/// is not an array is left untouched. Otherwise the chosen variant's `blocks` are
/// installed on the record and the `multivariate` and `variants` keys are removed, so
/// renderers only ever see `blocks`.
///
/// Ids and weights are coerced before selection, but the chosen id is matched against
/// the original `id` fields. A miss (for example numeric ids) falls back to the first
/// variant.
///
/// # Errors
///
/// Returns [`VariantError::EmptyVariants`](super::VariantError::EmptyVariants) when the
/// post is flagged multivariate with an empty `variants` array. The content is not
/// modified in that case.
pub fn resolve_blog_post_variant(content: &mut Value, bucket: f64) -> Result<()> {
    let Some(record) = content.as_object_mut() else {
        return Ok(());
    };

    if !record.get("multivariate").is_some_and(is_truthy) {
        return Ok(());
    }

    let Some(variants) = record.get("variants").and_then(Value::as_array) else {
        debug!("multivariate blog post without a variants array, leaving as is");
        return Ok(());
    };

    let candidates = coerce_candidates(variants);
    let selected = select_variant(bucket, &candidates)?;

    let chosen = match variants.iter().find(|v| has_id(v, selected)) {
        Some(variant) => Some(variant),
        None => {
            debug!(selected, "selected blog variant not found, using first variant");
            variants.first()
        }
    };
    let blocks = chosen.and_then(|v| v.get("blocks")).cloned();

    match blocks {
        Some(blocks) => {
            record.insert("blocks".to_string(), blocks);
        }
        None => {
            record.remove("blocks");
        }
    }
    record.remove("multivariate");
    record.remove("variants");

    Ok(())
}
