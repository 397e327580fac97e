use thiserror::Error;

/// Errors that can occur when selecting a content variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VariantError {
    #[error("variants array must not be empty")]
    EmptyVariants,
}

/// Result type for variant resolution.
pub type Result<T> = std::result::Result<T, VariantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_error_display() {
        assert_eq!(
            VariantError::EmptyVariants.to_string(),
            "variants array must not be empty"
        );
    }
}
