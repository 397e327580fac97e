use serde::{Deserialize, Serialize};

use crate::serde::deserialize_optional_string;

/// A CSS length as authored: a bare number of pixels or a literal CSS value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssLength {
    Pixels(f64),
    Raw(String),
}

impl From<f64> for CssLength {
    fn from(value: f64) -> Self {
        CssLength::Pixels(value)
    }
}

impl From<&str> for CssLength {
    fn from(value: &str) -> Self {
        CssLength::Raw(value.to_string())
    }
}

/// Per-side spacing. Missing sides render as `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxSpacing {
    #[serde(default)]
    pub top: Option<CssLength>,
    #[serde(default)]
    pub right: Option<CssLength>,
    #[serde(default)]
    pub bottom: Option<CssLength>,
    #[serde(default)]
    pub left: Option<CssLength>,
}

impl BoxSpacing {
    /// Vertical and horizontal spacing.
    pub fn symmetric(vertical: impl Into<CssLength>, horizontal: impl Into<CssLength>) -> Self {
        let vertical = vertical.into();
        let horizontal = horizontal.into();
        Self {
            top: Some(vertical.clone()),
            right: Some(horizontal.clone()),
            bottom: Some(vertical),
            left: Some(horizontal),
        }
    }
}

/// Padding or margin: either one value for every side or per-side values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    Uniform(CssLength),
    Sides(BoxSpacing),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

/// Style settings attached to a section or block in the CMS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    #[serde(default)]
    pub padding: Option<Spacing>,
    #[serde(default)]
    pub margin: Option<Spacing>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub background_color: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub text_color: Option<String>,
    #[serde(default)]
    pub border_radius: Option<CssLength>,
    #[serde(default)]
    pub max_width: Option<CssLength>,
    #[serde(default)]
    pub gap: Option<CssLength>,
    #[serde(default)]
    pub text_align: Option<TextAlign>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub class_name: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}
