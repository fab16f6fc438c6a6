//! Palette export to CSS variables, a Tailwind config, JSON and Adobe Swatch
//! Exchange.
//!
//! Exports are pure: an [`ExportArtifact`] carries the file name, MIME type
//! and content, and the caller decides where it goes.

mod ase;
mod css_vars;
mod json;
mod tailwind;

pub use ase::encode_ase;
pub use css_vars::render_css_variables;
pub use json::render_json;
pub use tailwind::render_tailwind_config;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::models::{Color, EngineConfig, DEFAULT_PALETTE_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ExportFormat {
    Css,
    Tailwind,
    Json,
    Ase,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Css,
        ExportFormat::Tailwind,
        ExportFormat::Json,
        ExportFormat::Ase,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Json => "json",
            ExportFormat::Ase => "ase",
        }
    }

    /// File suffix including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Css => ".css",
            ExportFormat::Tailwind => ".config.js",
            ExportFormat::Json => ".json",
            ExportFormat::Ase => ".ase",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Css => "text/css",
            ExportFormat::Tailwind => "application/javascript",
            ExportFormat::Json => "application/json",
            ExportFormat::Ase => "application/octet-stream",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == lower)
            .ok_or_else(|| ColorError::UnsupportedFormat(s.to_string()))
    }
}

impl TryFrom<String> for ExportFormat {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub colors: Vec<Color>,
    pub palette_name: String,
}

impl ExportRequest {
    /// The request's palette name, or `fallback` when it is blank.
    pub fn effective_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        let name = self.palette_name.trim();
        if name.is_empty() {
            fallback
        } else {
            name
        }
    }

    pub fn new(format: ExportFormat, colors: Vec<Color>, palette_name: impl Into<String>) -> Self {
        Self {
            format,
            colors,
            palette_name: palette_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportContent {
    Text(String),
    Binary(Vec<u8>),
}

impl ExportContent {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ExportContent::Text(text) => text.as_bytes(),
            ExportContent::Binary(bytes) => bytes,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExportContent::Text(text) => Some(text),
            ExportContent::Binary(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: ExportContent,
}

/// Lowercase, collapse runs of non-alphanumerics into `-`, trim dashes.
/// Falls back to [`DEFAULT_PALETTE_NAME`] when nothing is left.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        DEFAULT_PALETTE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Export with the current time as the JSON timestamp and default config.
pub fn export_colors(request: &ExportRequest) -> Result<ExportArtifact, ColorError> {
    export_colors_at(request, Utc::now())
}

pub fn export_colors_at(
    request: &ExportRequest,
    exported_at: DateTime<Utc>,
) -> Result<ExportArtifact, ColorError> {
    export_colors_with(request, &EngineConfig::default(), exported_at)
}

/// Export using `config.default_palette_name` when the request's palette
/// name is blank. Every format and the file name use the same name.
pub fn export_colors_with(
    request: &ExportRequest,
    config: &EngineConfig,
    exported_at: DateTime<Utc>,
) -> Result<ExportArtifact, ColorError> {
    let format = request.format;
    let fallback = match config.default_palette_name.trim() {
        "" => DEFAULT_PALETTE_NAME,
        name => name,
    };
    let name = request.effective_name(fallback);
    let slug = slugify(name);

    let content = match format {
        ExportFormat::Css => ExportContent::Text(render_css_variables(&request.colors, &slug)),
        ExportFormat::Tailwind => {
            ExportContent::Text(render_tailwind_config(&request.colors, name))
        }
        ExportFormat::Json => {
            ExportContent::Text(render_json(&request.colors, name, exported_at)?)
        }
        ExportFormat::Ase => ExportContent::Binary(encode_ase(&request.colors, name)?),
    };

    tracing::debug!(
        format = %format,
        colors = request.colors.len(),
        palette = name,
        bytes = content.len(),
        "Exported palette"
    );

    Ok(ExportArtifact {
        format,
        file_name: format!("{slug}{}", format.extension()),
        mime_type: format.mime_type(),
        content,
    })
}
