use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    #[error("Invalid CSS color: {0}")]
    InvalidCss(String),

    #[error("Unknown color space: {0}")]
    UnknownSpace(String),

    #[error("Unknown palette kind: {0}")]
    UnknownPaletteKind(String),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("ASE limit exceeded: {0}")]
    AseLimit(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
