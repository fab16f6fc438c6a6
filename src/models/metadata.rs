use serde::{Deserialize, Serialize};
use std::fmt;

use super::Color;

/// Identifier for a tracked color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorId(String);

impl ColorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an ID with 48 bits of entropy (12 uppercase hex chars)
    pub fn generate() -> Self {
        use rand::Rng;
        let high = rand::thread_rng().gen::<u32>();
        let low = rand::thread_rng().gen::<u16>();
        Self(format!("{high:08X}{low:04X}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A color plus the bookkeeping a history-tracking caller needs.
///
/// The engine itself never stores these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorWithMetadata {
    pub id: ColorId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: Color,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ColorWithMetadata {
    pub fn new(color: Color) -> Self {
        Self {
            id: ColorId::generate(),
            name: None,
            color,
            created_at: chrono::Utc::now(),
        }
    }

    pub fn named(color: Color, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_hex() {
        let id = ColorId::generate();
        assert_eq!(id.as_str().len(), 12);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(ColorId::generate(), ColorId::generate());
    }

    #[test]
    fn test_named_color() {
        let before = chrono::Utc::now();
        let entry = ColorWithMetadata::named(Color::rgb(1, 2, 3), "Brand");
        assert_eq!(entry.name.as_deref(), Some("Brand"));
        assert_eq!(entry.color, Color::rgb(1, 2, 3));
        assert!(entry.created_at >= before);
    }

    #[test]
    fn test_serde_round_trip() {
        let entry = ColorWithMetadata {
            id: ColorId::new("00000000BEEF"),
            name: None,
            color: Color::oklch(0.5, 0.1, Some(200.0)),
            created_at: "2024-05-01T12:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "00000000BEEF");
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");
        assert!(json.get("name").is_none());

        let back: ColorWithMetadata = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
