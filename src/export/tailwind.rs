use std::fmt::Write;

use crate::conversion::rgb_to_hex;
use crate::models::Color;

/// Escape a value for a single-quoted JavaScript string.
fn js_quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// A `tailwind.config.js` body extending the theme with one color group
/// keyed by the palette name. Values are lowercase `#rrggbb`.
pub fn render_tailwind_config(colors: &[Color], palette_name: &str) -> String {
    let mut entries = String::new();
    for (i, color) in colors.iter().enumerate() {
        let _ = writeln!(entries, "          'color-{}': '{}',", i + 1, rgb_to_hex(color.to_rgb()));
    }

    format!(
        "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n        '{}': {{\n{entries}        }},\n      }},\n    }},\n  }},\n}};\n",
        js_quote(palette_name)
    )
}
