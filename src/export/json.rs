use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::css::{color_to_css, whole_hue};
use crate::error::ColorError;
use crate::models::Color;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteDocument<'a> {
    name: &'a str,
    colors: Vec<ColorRecord>,
    exported_at: String,
}

#[derive(Serialize)]
struct ColorRecord {
    id: String,
    hex: String,
    rgb: RgbRecord,
    hsl: HslRecord,
    css: String,
}

#[derive(Serialize)]
struct RgbRecord {
    r: u8,
    g: u8,
    b: u8,
}

/// HSL components rounded to integers, as in CSS output.
#[derive(Serialize)]
struct HslRecord {
    h: i64,
    s: i64,
    l: i64,
}

impl ColorRecord {
    fn new(index: usize, color: &Color) -> Self {
        let rgb = color.to_rgb();
        let hsl = color.to_hsl();
        Self {
            id: format!("color-{}", index + 1),
            hex: format!("#{}", hex::encode(rgb.to_bytes())),
            rgb: RgbRecord {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            },
            hsl: HslRecord {
                h: whole_hue(hsl.h),
                s: hsl.s.round() as i64,
                l: hsl.l.round() as i64,
            },
            css: color_to_css(color),
        }
    }
}

/// Pretty-printed palette document with an RFC 3339 `exportedAt`.
pub fn render_json(
    colors: &[Color],
    palette_name: &str,
    exported_at: DateTime<Utc>,
) -> Result<String, ColorError> {
    let document = PaletteDocument {
        name: palette_name,
        colors: colors
            .iter()
            .enumerate()
            .map(|(i, color)| ColorRecord::new(i, color))
            .collect(),
        exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn timestamp() -> DateTime<Utc> {
        "2024-03-01T09:30:00Z".parse().unwrap()
    }

    #[test]
    fn test_document_fields() {
        let colors = [
            Color::hex("#336699").unwrap(),
            Color::rgb(255, 0, 0).with_alpha(Some(0.5)),
        ];
        let text = render_json(&colors, "Ocean", timestamp()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ocean",
                "colors": [
                    {
                        "id": "color-1",
                        "hex": "#336699",
                        "rgb": {"r": 51, "g": 102, "b": 153},
                        "hsl": {"h": 210, "s": 50, "l": 40},
                        "css": "#336699"
                    },
                    {
                        "id": "color-2",
                        "hex": "#ff0000",
                        "rgb": {"r": 255, "g": 0, "b": 0},
                        "hsl": {"h": 0, "s": 100, "l": 50},
                        "css": "rgba(255, 0, 0, 0.5)"
                    }
                ],
                "exportedAt": "2024-03-01T09:30:00.000Z"
            })
        );
    }

    #[test]
    fn test_pretty_printed() {
        let text = render_json(&[Color::BLACK], "k", timestamp()).unwrap();
        assert!(text.starts_with("{\n  \"name\": \"k\","));
    }

    #[test]
    fn test_empty_list() {
        let text = render_json(&[], "none", timestamp()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["colors"], serde_json::json!([]));
    }

    #[test]
    fn test_hsl_hue_stays_below_360() {
        let text = render_json(&[Color::rgb(255, 0, 1)], "edge", timestamp()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["colors"][0]["hsl"]["h"], 0);
    }
}
