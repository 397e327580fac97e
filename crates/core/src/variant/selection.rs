use serde_json::Value;

use super::error::{Result, VariantError};
use super::types::{Weighted, WeightedVariant};
use crate::coerce::{to_js_number, to_js_string};

/// Picks one variant for a visitor bucket.
///
/// Weights are normalized against their total and laid out as consecutive intervals
/// over `[0, 1)` in list order. The first variant whose interval ends above `bucket`
/// wins. When rounding leaves the bucket past every interval, the last variant wins.
///
/// The function is deterministic. Keeping `bucket` stable per visitor is the caller's
/// job.
///
/// # Errors
///
/// Returns [`VariantError::EmptyVariants`] when `variants` is empty.
///
/// # Examples
///
/// ```
/// use contentkit_core::variant::{select_variant, WeightedVariant};
///
/// let variants = vec![WeightedVariant::new("a", 50.0), WeightedVariant::new("b", 50.0)];
///
/// assert_eq!(select_variant(0.0, &variants).unwrap(), "a");
/// assert_eq!(select_variant(0.5, &variants).unwrap(), "b");
/// assert!(select_variant(0.5, &Vec::<WeightedVariant>::new()).is_err());
/// ```
pub fn select_variant<V: Weighted>(bucket: f64, variants: &[V]) -> Result<&str> {
    let Some(last) = variants.last() else {
        return Err(VariantError::EmptyVariants);
    };

    let total: f64 = variants.iter().map(Weighted::weight).sum();
    let mut cumulative = 0.0;

    for variant in variants {
        cumulative += variant.weight() / total;
        if bucket < cumulative {
            return Ok(variant.id());
        }
    }

    Ok(last.id())
}

/// Returns true when `content` is a record with `multivariate: true` and an array of
/// `variants`. The flag must be the boolean `true`, not just a truthy value.
pub fn is_multivariate_content(content: &Value) -> bool {
    content.get("multivariate") == Some(&Value::Bool(true))
        && content.get("variants").is_some_and(Value::is_array)
}

/// Normalizes loosely typed variant records into selection candidates.
pub(crate) fn coerce_candidates(variants: &[Value]) -> Vec<WeightedVariant> {
    variants
        .iter()
        .map(|variant| WeightedVariant {
            id: variant
                .get("id")
                .map_or_else(|| "undefined".to_string(), to_js_string),
            weight: variant.get("weight").map_or(f64::NAN, to_js_number),
        })
        .collect()
}

/// Strict id comparison against the un-coerced record. Only a string id can match.
pub(crate) fn has_id(variant: &Value, id: &str) -> bool {
    variant.get("id").and_then(Value::as_str) == Some(id)
}
