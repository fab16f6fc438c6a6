//! Huecraft - color science engine
//!
//! Colors in five representations (hex, RGB, HSL, CMYK, OKLCH), conversion
//! between them, WCAG 2.1 contrast auditing, OKLCH harmony palettes and
//! palette export (CSS variables, Tailwind config, JSON, Adobe Swatch
//! Exchange).
//!
//! Everything is pure and synchronous. The crate never installs a tracing
//! subscriber; callers decide where log events go.

pub mod contrast;
pub mod conversion;
pub mod css;
pub mod error;
pub mod export;
pub mod models;
pub mod palette;
pub mod validation;

pub use contrast::{
    check_contrast, contrast_ratio, contrast_scorecard, ensure_readable, relative_luminance,
    ContrastLevel, ContrastResult, ContrastScorecard,
};
pub use conversion::convert_color;
pub use css::{color_to_css, parse_color};
pub use error::ColorError;
pub use export::{
    export_colors, export_colors_at, export_colors_with, slugify, ExportArtifact, ExportContent,
    ExportFormat, ExportRequest,
};
pub use models::{
    Cmyk, Color, ColorId, ColorSpace, ColorWithMetadata, EngineConfig, Hex, Hsl, Oklch, Rgb,
    VariationConfig, DEFAULT_PALETTE_NAME,
};
pub use palette::{
    generate_all_palettes, generate_analogous, generate_complementary, generate_palette,
    generate_tetradic, generate_triadic, generate_variations, AllPalettes, Palette, PaletteKind,
    Variations,
};
pub use validation::{
    validate_alpha, validate_cmyk, validate_hex, validate_hsl, validate_oklch, validate_rgb,
};
