mod css;
mod types;

pub use css::{
    box_spacing_to_css, class_names, style_to_class_names, style_to_declarations,
    style_to_inline_css, to_css_length,
};
pub use types::{BoxSpacing, CssLength, Spacing, StyleConfig, TextAlign};
