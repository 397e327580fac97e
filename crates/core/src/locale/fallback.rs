use tracing::debug;

use super::types::LocalizedText;
use crate::config::LocaleConfig;

/// Returns the locales to try, most specific first.
///
/// The requested tag is followed by each shorter prefix, then the default locale and
/// its prefixes. `_` separators are accepted. Duplicates are dropped, ignoring case.
///
/// # Examples
///
/// ```
/// use contentkit_core::locale::locale_fallback_chain;
/// use contentkit_core::LocaleConfig;
///
/// let chain = locale_fallback_chain("pt_BR", &LocaleConfig::new("en-US"));
/// assert_eq!(chain, vec!["pt-BR", "pt", "en-US", "en"]);
/// ```
pub fn locale_fallback_chain(locale: &str, config: &LocaleConfig) -> Vec<String> {
    let mut chain = Vec::new();
    for tag in [locale, config.default_locale.as_str()] {
        for candidate in prefixes(tag) {
            push_unique(&mut chain, candidate);
        }
    }
    chain
}

/// Picks the text for `locale`, walking its fallback chain.
///
/// A plain string always resolves to itself. For a per-locale map, keys are matched
/// without regard to case and blank translations are skipped. When nothing in the
/// chain matches, the first non-blank translation in key order is used.
pub fn resolve_localized<'a>(
    text: &'a LocalizedText,
    locale: &str,
    config: &LocaleConfig,
) -> Option<&'a str> {
    let translations = match text {
        LocalizedText::Plain(s) => return Some(s.as_str()),
        LocalizedText::Localized(translations) => translations,
    };

    for tag in locale_fallback_chain(locale, config) {
        let hit = translations.iter().find(|(key, value)| {
            normalize(key).eq_ignore_ascii_case(&tag) && !value.trim().is_empty()
        });
        if let Some((_, value)) = hit {
            return Some(value.as_str());
        }
    }

    let fallback = translations
        .values()
        .find(|value| !value.trim().is_empty())
        .map(String::as_str);
    if fallback.is_some() {
        debug!(locale, "no translation in fallback chain, using first available");
    }
    fallback
}

/// Chooses the best supported locale for a visitor's ordered preferences.
///
/// Each requested tag and its prefixes are checked against the supported locales. The
/// supported spelling is returned, or the default locale when nothing matches.
pub fn negotiate_locale(requested: &[&str], config: &LocaleConfig) -> String {
    requested
        .iter()
        .flat_map(|tag| prefixes(tag))
        .find_map(|candidate| {
            config
                .supported_locales
                .iter()
                .find(|supported| normalize(supported).eq_ignore_ascii_case(&candidate))
                .cloned()
        })
        .unwrap_or_else(|| config.default_locale.clone())
}

fn normalize(tag: &str) -> String {
    tag.trim().replace('_', "-")
}

/// `"pt-BR-x"` → `["pt-BR-x", "pt-BR", "pt"]`.
fn prefixes(tag: &str) -> Vec<String> {
    let normalized = normalize(tag);
    let parts: Vec<&str> = normalized
        .split('-')
        .filter(|part| !part.is_empty())
        .collect();

    (1..=parts.len())
        .rev()
        .map(|len| parts[..len].join("-"))
        .collect()
}

fn push_unique(chain: &mut Vec<String>, candidate: String) {
    if !chain
        .iter()
        .any(|known| known.eq_ignore_ascii_case(&candidate))
    {
        chain.push(candidate);
    }
}
