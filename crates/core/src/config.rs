use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::structured_data::SiteConfig;

const DEFAULT_LOCALE: &str = "en";
const DEFAULT_SITE_NAME: &str = "Site";
const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid site URL {url:?}: {reason}")]
    InvalidSiteUrl { url: String, reason: String },
}

/// Locale settings used when resolving localized strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// Last resort of every fallback chain.
    pub default_locale: String,
    /// Locales the site publishes. Always contains the default locale.
    pub supported_locales: Vec<String>,
}

impl LocaleConfig {
    /// Creates a config that supports only `default_locale`.
    pub fn new(default_locale: impl Into<String>) -> Self {
        let default_locale = default_locale.into();
        Self {
            supported_locales: vec![default_locale.clone()],
            default_locale,
        }
    }

    /// Adds supported locales. The default locale stays supported.
    pub fn with_supported<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for locale in locales {
            let locale = locale.into();
            if !self
                .supported_locales
                .iter()
                .any(|known| known.eq_ignore_ascii_case(&locale))
            {
                self.supported_locales.push(locale);
            }
        }
        self
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

/// Settings shared by every render helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub locale: LocaleConfig,
    pub site: SiteConfig,
}

impl RenderConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CONTENTKIT_DEFAULT_LOCALE` - Fallback locale (default: "en")
    /// - `CONTENTKIT_SUPPORTED_LOCALES` - Comma-separated published locales (default: the default locale)
    /// - `CONTENTKIT_SITE_NAME` - Site name used in structured data (default: "Site")
    /// - `CONTENTKIT_SITE_URL` - Absolute base URL (default: "http://localhost:3000")
    /// - `CONTENTKIT_SITE_LOGO` - Logo URL or path (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let default_locale =
            get("CONTENTKIT_DEFAULT_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        let supported: Vec<String> = get("CONTENTKIT_SUPPORTED_LOCALES")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|locale| !locale.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let locale = LocaleConfig::new(default_locale).with_supported(supported);

        let raw_url = get("CONTENTKIT_SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        let base_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidSiteUrl {
            url: raw_url.clone(),
            reason: e.to_string(),
        })?;

        let site = SiteConfig {
            name: get("CONTENTKIT_SITE_NAME").unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            base_url,
            logo: get("CONTENTKIT_SITE_LOGO"),
        };

        Ok(Self { locale, site })
    }
}
