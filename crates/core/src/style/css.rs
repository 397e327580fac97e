use std::collections::HashSet;

use tracing::debug;

use super::types::{BoxSpacing, CssLength, Spacing, StyleConfig};

/// Converts an authored length to a CSS value.
///
/// Numbers are pixels (`0` stays unitless), strings are passed through trimmed. Blank
/// strings and non-finite numbers have no CSS value.
pub fn to_css_length(length: &CssLength) -> Option<String> {
    match length {
        CssLength::Pixels(n) if !n.is_finite() => None,
        CssLength::Pixels(n) if *n == 0.0 => Some("0".to_string()),
        CssLength::Pixels(n) if n.fract() == 0.0 => Some(format!("{n:.0}px")),
        CssLength::Pixels(n) => Some(format!("{n}px")),
        CssLength::Raw(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
    }
}

/// Renders per-side spacing as a CSS shorthand with the fewest values needed.
///
/// Returns `None` when no side has a value.
pub fn box_spacing_to_css(spacing: &BoxSpacing) -> Option<String> {
    let sides = [
        &spacing.top,
        &spacing.right,
        &spacing.bottom,
        &spacing.left,
    ]
    .map(|side| side.as_ref().and_then(to_css_length));

    if sides.iter().all(Option::is_none) {
        return None;
    }

    let [top, right, bottom, left] = sides.map(|side| side.unwrap_or_else(|| "0".to_string()));

    let shorthand = if top == right && top == bottom && top == left {
        top
    } else if top == bottom && right == left {
        format!("{top} {right}")
    } else if right == left {
        format!("{top} {right} {bottom}")
    } else {
        format!("{top} {right} {bottom} {left}")
    };

    Some(shorthand)
}

/// Returns the CSS declarations for a style config, in a fixed property order.
///
/// Values that could break out of a `style` attribute are dropped.
pub fn style_to_declarations(style: &StyleConfig) -> Vec<(&'static str, String)> {
    let candidates = [
        ("padding", style.padding.as_ref().and_then(spacing_to_css)),
        ("margin", style.margin.as_ref().and_then(spacing_to_css)),
        ("background-color", trimmed(style.background_color.as_deref())),
        ("color", trimmed(style.text_color.as_deref())),
        ("border-radius", style.border_radius.as_ref().and_then(to_css_length)),
        ("max-width", style.max_width.as_ref().and_then(to_css_length)),
        ("gap", style.gap.as_ref().and_then(to_css_length)),
        ("text-align", style.text_align.map(|align| align.as_str().to_string())),
    ];

    candidates
        .into_iter()
        .filter_map(|(property, value)| {
            let value = value?;
            if is_safe_css_value(&value) {
                Some((property, value))
            } else {
                debug!(property, value = %value, "dropping unsafe css value");
                None
            }
        })
        .collect()
}

/// Renders a style config as an inline `style` attribute value.
///
/// # Examples
///
/// ```
/// use contentkit_core::style::{style_to_inline_css, Spacing, StyleConfig};
///
/// let style = StyleConfig {
///     padding: Some(Spacing::Uniform(16.0.into())),
///     text_color: Some("#333".to_string()),
///     ..StyleConfig::default()
/// };
///
/// assert_eq!(style_to_inline_css(&style), "padding: 16px; color: #333");
/// ```
pub fn style_to_inline_css(style: &StyleConfig) -> String {
    style_to_declarations(style)
        .iter()
        .map(|(property, value)| format!("{property}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Returns the class list for a style config: custom classes, alignment, visibility.
pub fn style_to_class_names(style: &StyleConfig) -> String {
    let align = style
        .text_align
        .map(|align| format!("text-{}", align.as_str()));
    let hidden = style.hidden.then_some("hidden".to_string());

    class_names(
        [style.class_name.clone(), align, hidden]
            .into_iter()
            .flatten(),
    )
}

/// Joins class tokens into one class attribute value.
///
/// Each item may hold several whitespace-separated classes. Empty tokens are dropped
/// and duplicates keep their first position.
pub fn class_names<I>(classes: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    for item in classes {
        for token in item.as_ref().split_whitespace() {
            if seen.insert(token.to_string()) {
                tokens.push(token.to_string());
            }
        }
    }

    tokens.join(" ")
}

fn spacing_to_css(spacing: &Spacing) -> Option<String> {
    match spacing {
        Spacing::Uniform(length) => to_css_length(length),
        Spacing::Sides(sides) => box_spacing_to_css(sides),
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn is_safe_css_value(value: &str) -> bool {
    !value.contains([';', '{', '}', '<', '>', '"', '\''])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::types::TextAlign;

    #[test]
    fn test_to_css_length() {
        assert_eq!(to_css_length(&CssLength::Pixels(0.0)), Some("0".to_string()));
        assert_eq!(to_css_length(&CssLength::Pixels(12.0)), Some("12px".to_string()));
        assert_eq!(to_css_length(&CssLength::Pixels(1.5)), Some("1.5px".to_string()));
        assert_eq!(to_css_length(&CssLength::Pixels(f64::NAN)), None);
        assert_eq!(to_css_length(&"  2rem ".into()), Some("2rem".to_string()));
        assert_eq!(to_css_length(&"   ".into()), None);
    }

    #[test]
    fn test_box_spacing_collapses_shorthand() {
        assert_eq!(
            box_spacing_to_css(&BoxSpacing::symmetric(8.0, 8.0)),
            Some("8px".to_string())
        );
        assert_eq!(
            box_spacing_to_css(&BoxSpacing::symmetric(8.0, "1rem")),
            Some("8px 1rem".to_string())
        );
        assert_eq!(
            box_spacing_to_css(&BoxSpacing {
                top: Some(4.0.into()),
                right: Some(2.0.into()),
                bottom: Some(6.0.into()),
                left: Some(2.0.into()),
            }),
            Some("4px 2px 6px".to_string())
        );
        assert_eq!(
            box_spacing_to_css(&BoxSpacing {
                top: Some(1.0.into()),
                right: Some(2.0.into()),
                bottom: Some(3.0.into()),
                left: Some(4.0.into()),
            }),
            Some("1px 2px 3px 4px".to_string())
        );
    }

    #[test]
    fn test_box_spacing_missing_sides() {
        assert_eq!(box_spacing_to_css(&BoxSpacing::default()), None);
        assert_eq!(
            box_spacing_to_css(&BoxSpacing {
                top: Some(10.0.into()),
                ..BoxSpacing::default()
            }),
            Some("10px 0 0".to_string())
        );
    }

    #[test]
    fn test_style_to_inline_css_order() {
        let style = StyleConfig {
            padding: Some(Spacing::Sides(BoxSpacing::symmetric(8.0, 16.0))),
            margin: Some(Spacing::Uniform(0.0.into())),
            background_color: Some("#fff".to_string()),
            text_color: Some(" red ".to_string()),
            border_radius: Some(4.0.into()),
            max_width: Some("60ch".into()),
            gap: Some(12.0.into()),
            text_align: Some(TextAlign::Right),
            ..StyleConfig::default()
        };

        assert_eq!(
            style_to_inline_css(&style),
            "padding: 8px 16px; margin: 0; background-color: #fff; color: red; \
             border-radius: 4px; max-width: 60ch; gap: 12px; text-align: right"
        );
    }

    #[test]
    fn test_style_to_inline_css_empty() {
        assert_eq!(style_to_inline_css(&StyleConfig::default()), "");
    }

    #[test]
    fn test_unsafe_values_are_dropped() {
        let style = StyleConfig {
            background_color: Some("red; position: fixed".to_string()),
            text_color: Some("</style><script>".to_string()),
            max_width: Some("100%".into()),
            ..StyleConfig::default()
        };

        assert_eq!(style_to_inline_css(&style), "max-width: 100%");
    }

    #[test]
    fn test_quoted_values_are_dropped() {
        let style = StyleConfig {
            background_color: Some("red\" onmouseover=\"alert(1)".to_string()),
            text_color: Some("blue' onclick='alert(1)".to_string()),
            gap: Some("1rem".into()),
            ..StyleConfig::default()
        };

        assert_eq!(style_to_inline_css(&style), "gap: 1rem");
    }

    #[test]
    fn test_style_to_class_names() {
        let style = StyleConfig {
            class_name: Some("card  card--wide".to_string()),
            text_align: Some(TextAlign::Center),
            hidden: true,
            ..StyleConfig::default()
        };

        assert_eq!(
            style_to_class_names(&style),
            "card card--wide text-center hidden"
        );
        assert_eq!(style_to_class_names(&StyleConfig::default()), "");
    }

    #[test]
    fn test_class_names_dedupes_and_skips_empty() {
        assert_eq!(class_names(["a b", "", "  ", "b c", "a"]), "a b c");
        assert_eq!(class_names(Vec::<String>::new()), "");
    }
}
