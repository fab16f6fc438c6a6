pub mod color;
pub mod config;
pub mod metadata;

pub use color::{Cmyk, Color, ColorSpace, Hex, Hsl, Oklch, Rgb};
pub use config::{EngineConfig, VariationConfig, DEFAULT_PALETTE_NAME};
pub use metadata::{ColorId, ColorWithMetadata};
