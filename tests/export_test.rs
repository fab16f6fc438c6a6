//! Export engine tests, writing artifacts the way a caller would.

mod common;

use common::fixtures;
use huecraft::{
    export_colors, export_colors_at, export_colors_with, ColorError, Color, EngineConfig,
    ExportContent, ExportFormat, ExportRequest,
};
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn test_ase_exact_bytes_for_single_red() {
    common::init_tracing();

    let request = ExportRequest::new(ExportFormat::Ase, vec![Color::rgb(255, 0, 0)], "t");
    let artifact = export_colors(&request).unwrap();

    assert_eq!(artifact.file_name, "t.ase");
    assert_eq!(artifact.mime_type, "application/octet-stream");
    assert_eq!(
        artifact.content,
        ExportContent::Binary(vec![
            0x41, 0x53, 0x45, 0x46, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00,
            0x00, 0x1A, 0x00, 0x03, 0x00, 0x74, 0x00, 0x2D, 0x00, 0x31, 0x52, 0x47, 0x42, 0x20,
            0x3F, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02,
        ])
    );
}

#[test]
fn test_ase_structure_for_brand_palette() {
    let colors = fixtures::brand_colors();
    let request = ExportRequest::new(ExportFormat::Ase, colors.clone(), "brand");
    let artifact = export_colors(&request).unwrap();
    let bytes = artifact.content.as_bytes();

    assert_eq!(&bytes[..4], b"ASEF");
    assert_eq!(common::be_u32(bytes, 4), 0x0001_0000);
    assert_eq!(usize::from(common::be_u16(bytes, 8)), colors.len());

    let mut offset = 10;
    for (i, color) in colors.iter().enumerate() {
        assert_eq!(common::be_u16(bytes, offset), 0x0001);
        let block_len = common::be_u32(bytes, offset + 2) as usize;
        let name_len = usize::from(common::be_u16(bytes, offset + 6));
        let name = format!("brand-{}", i + 1);
        assert_eq!(name_len, name.len());
        assert_eq!(block_len, 2 + 2 * name_len + 4 + 12 + 2);

        let model = offset + 8 + 2 * name_len;
        assert_eq!(&bytes[model..model + 4], b"RGB ");
        let red = f32::from_be_bytes(bytes[model + 4..model + 8].try_into().unwrap());
        assert_eq!(red, f32::from(color.to_rgb().r) / 255.0);
        assert_eq!(common::be_u16(bytes, model + 16), 0x0002);

        offset += 6 + block_len;
    }
    assert_eq!(offset, bytes.len());
}

#[test]
fn test_css_variables() {
    let request = ExportRequest::new(
        ExportFormat::Css,
        vec![Color::hex("#336699").unwrap(), Color::rgb(1, 2, 3)],
        "Brand Colors",
    );
    let artifact = export_colors(&request).unwrap();
    let css = artifact.content.as_text().unwrap();

    assert_eq!(artifact.file_name, "brand-colors.css");
    assert!(css.contains("  --brand-colors-color-1: #336699;\n"));
    assert!(css.contains("  --brand-colors-color-2: rgb(1, 2, 3);\n"));
    assert!(css.contains(".brand-colors-color-2 { color: var(--brand-colors-color-2); }"));
    assert!(css.contains(".brand-colors-bg-1 { background-color: var(--brand-colors-color-1); }"));
}

#[test]
fn test_tailwind_config() {
    let request = ExportRequest::new(ExportFormat::Tailwind, fixtures::brand_colors(), "brand");
    let artifact = export_colors(&request).unwrap();
    let config = artifact.content.as_text().unwrap();

    assert_eq!(artifact.file_name, "brand.config.js");
    assert_eq!(artifact.mime_type, "application/javascript");
    assert!(config.starts_with("module.exports = {"));
    assert!(config.contains("'brand': {"));
    assert!(config.contains("'color-1': '#336699',"));
    assert!(config.contains("'color-5': '#"));
}

#[test]
fn test_json_document() {
    let request = ExportRequest::new(ExportFormat::Json, fixtures::brand_colors(), "Brand");
    let artifact = export_colors_at(&request, fixtures::exported_at()).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(artifact.content.as_text().unwrap()).unwrap();

    assert_eq!(artifact.file_name, "brand.json");
    assert_eq!(value["name"], "Brand");
    assert_eq!(value["exportedAt"], "2024-06-01T12:00:00.000Z");

    let records = value["colors"].as_array().unwrap();
    assert_eq!(records.len(), 5);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record["id"], format!("color-{}", i + 1));
        assert!(record["hex"].as_str().unwrap().starts_with('#'));
        assert!(record["rgb"]["r"].is_u64());
        assert!(record["hsl"]["h"].is_i64());
        assert!(record["css"].is_string());
    }
    assert_eq!(records[0]["rgb"], serde_json::json!({"r": 51, "g": 102, "b": 153}));
}

#[test]
fn test_unknown_format_is_a_hard_error() {
    assert!(matches!(
        "sketchpalette".parse::<ExportFormat>(),
        Err(ColorError::UnsupportedFormat(name)) if name == "sketchpalette"
    ));

    let body = r#"{"format": "gpl", "colors": [], "paletteName": "p"}"#;
    assert!(serde_json::from_str::<ExportRequest>(body).is_err());
}

#[test]
fn test_write_artifacts_to_disk() {
    let dir = tempfile::tempdir().unwrap();

    for format in ExportFormat::ALL {
        let request = ExportRequest::new(format, fixtures::brand_colors(), "On Disk");
        let artifact = export_colors_at(&request, fixtures::exported_at()).unwrap();

        let path = dir.path().join(&artifact.file_name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(artifact.content.as_bytes()).unwrap();
        drop(file);

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, artifact.content.as_bytes());
        assert!(artifact.file_name.starts_with("on-disk"));
    }
}

#[test]
fn test_unnamed_palette_uses_configured_name_in_every_format() {
    let config = EngineConfig::from_yaml_str(fixtures::CONFIG_YAML).unwrap();

    for format in ExportFormat::ALL {
        let request = ExportRequest::new(format, fixtures::brand_colors(), "");
        let artifact = export_colors_with(&request, &config, fixtures::exported_at()).unwrap();
        assert_eq!(artifact.file_name, format!("brand{}", format.extension()));

        match format {
            ExportFormat::Css => {
                let text = artifact.content.as_text().unwrap();
                assert!(text.contains("--brand-color-1:"));
            }
            ExportFormat::Tailwind => {
                let text = artifact.content.as_text().unwrap();
                assert!(text.contains("'brand': {"));
            }
            ExportFormat::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(artifact.content.as_text().unwrap()).unwrap();
                assert_eq!(value["name"], "brand");
            }
            ExportFormat::Ase => {
                let bytes = artifact.content.as_bytes();
                // First entry name "brand-1", 7 UTF-16 units.
                assert_eq!(&bytes[16..18], &[0x00u8, 0x07]);
            }
        }
    }
}
