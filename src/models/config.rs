use serde::Deserialize;

use crate::error::ColorError;

/// Palette name used when neither the request nor the config names one.
pub const DEFAULT_PALETTE_NAME: &str = "palette";

/// Engine defaults, usually loaded from a YAML document supplied by the
/// caller. The engine never reads files or the environment itself.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EngineConfig {
    /// Palette name used when an export request leaves it blank
    #[serde(default = "default_palette_name")]
    pub default_palette_name: String,

    /// Lighter/darker step generation
    #[serde(default)]
    pub variations: VariationConfig,

    /// Minimum contrast ratio targeted by `ensure_readable`
    #[serde(default = "default_readable_ratio")]
    pub readable_ratio: f64,
}

fn default_palette_name() -> String {
    DEFAULT_PALETTE_NAME.to_string()
}

fn default_readable_ratio() -> f64 {
    4.5 // WCAG AA, normal text
}

/// Fixed OKLCH deltas applied per step index.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct VariationConfig {
    /// Number of lighter and of darker steps
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Lightness added (lighter) or removed (darker) per step
    #[serde(default = "default_lightness_step")]
    pub lightness_step: f64,

    /// Chroma removed per step
    #[serde(default = "default_chroma_step")]
    pub chroma_step: f64,
}

fn default_steps() -> usize {
    3
}

fn default_lightness_step() -> f64 {
    0.1
}

fn default_chroma_step() -> f64 {
    0.02
}

impl Default for VariationConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            lightness_step: default_lightness_step(),
            chroma_step: default_chroma_step(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_palette_name: default_palette_name(),
            variations: VariationConfig::default(),
            readable_ratio: default_readable_ratio(),
        }
    }
}

impl EngineConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ColorError> {
        let config: Self = serde_yaml::from_str(content)?;
        tracing::info!(
            default_palette_name = %config.default_palette_name,
            variation_steps = config.variations.steps,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration, falling back to defaults on malformed input.
    pub fn from_yaml_or_default(content: &str) -> Self {
        match Self::from_yaml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }
}
