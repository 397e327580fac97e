mod fallback;
mod types;

pub use fallback::{locale_fallback_chain, negotiate_locale, resolve_localized};
pub use types::LocalizedText;
