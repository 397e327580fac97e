//! Pure rendering helpers for the contentkit CMS.
//!
//! Everything in this crate is a side-effect-free transformation over content that has
//! already been fetched from storage: A/B/n variant resolution, category trees, style to
//! CSS conversion, localized strings and JSON-LD metadata.

pub mod category;
pub mod coerce;
pub mod config;
pub mod locale;
pub mod serde;
pub mod structured_data;
pub mod style;
pub mod variant;

pub use config::{ConfigError, LocaleConfig, RenderConfig};
