use std::fmt::Write;

use crate::css::color_to_css;
use crate::models::Color;

/// A `:root` block of custom properties followed by a text and a
/// background utility class per color. Indices start at 1.
pub fn render_css_variables(colors: &[Color], slug: &str) -> String {
    let mut out = String::from(":root {\n");
    for (i, color) in colors.iter().enumerate() {
        let _ = writeln!(out, "  --{slug}-color-{}: {};", i + 1, color_to_css(color));
    }
    out.push_str("}\n");

    for i in 1..=colors.len() {
        let _ = write!(
            out,
            "\n.{slug}-color-{i} {{ color: var(--{slug}-color-{i}); }}\n\
             .{slug}-bg-{i} {{ background-color: var(--{slug}-color-{i}); }}\n"
        );
    }
    out
}
