//! Style configuration — colour scheme and typography applied on top of a template.
//!
//! Lives beside the document, not inside it: a template switch replaces the
//! sections but keeps these settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StyleError {
    #[error("invalid {field} color '{value}': expected #rgb or #rrggbb")]
    InvalidColor { field: &'static str, value: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Colours
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub background: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: "#1a1a1a".to_string(),
            secondary: "#4a4a4a".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

impl ColorScheme {
    pub fn validate(&self) -> Result<(), StyleError> {
        check_hex("primary", &self.primary)?;
        check_hex("secondary", &self.secondary)?;
        check_hex("background", &self.background)?;
        Ok(())
    }
}

fn check_hex(field: &'static str, value: &str) -> Result<(), StyleError> {
    let valid = value
        .strip_prefix('#')
        .map(|digits| {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        })
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(StyleError::InvalidColor {
            field,
            value: value.to_string(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Typography
// ────────────────────────────────────────────────────────────────────────────

/// Enumerated size scale. Each step maps to a fixed pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontSize {
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xl2,
    #[serde(rename = "3xl")]
    Xl3,
}

impl FontSize {
    pub const SCALE: [FontSize; 6] = [
        FontSize::Sm,
        FontSize::Base,
        FontSize::Lg,
        FontSize::Xl,
        FontSize::Xl2,
        FontSize::Xl3,
    ];

    pub fn px(&self) -> u16 {
        match self {
            FontSize::Sm => 14,
            FontSize::Base => 16,
            FontSize::Lg => 18,
            FontSize::Xl => 20,
            FontSize::Xl2 => 24,
            FontSize::Xl3 => 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSettings {
    /// CSS-style font stack, e.g. `"'Georgia', serif"`.
    pub family: String,
    pub name_size: FontSize,
    pub section_size: FontSize,
    pub body_size: FontSize,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family: "Arial, sans-serif".to_string(),
            name_size: FontSize::Xl2,
            section_size: FontSize::Lg,
            body_size: FontSize::Base,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FontFamilyOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Font stacks offered to pickers. Other stacks are still accepted verbatim.
pub static FONT_FAMILIES: [FontFamilyOption; 5] = [
    FontFamilyOption {
        value: "Arial, sans-serif",
        label: "Arial",
    },
    FontFamilyOption {
        value: "'Times New Roman', serif",
        label: "Times New Roman",
    },
    FontFamilyOption {
        value: "'Helvetica Neue', sans-serif",
        label: "Helvetica",
    },
    FontFamilyOption {
        value: "'Georgia', serif",
        label: "Georgia",
    },
    FontFamilyOption {
        value: "'Roboto', sans-serif",
        label: "Roboto",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheme_is_valid() {
        assert!(ColorScheme::default().validate().is_ok());
    }

    #[test]
    fn test_short_hex_accepted() {
        let scheme = ColorScheme {
            primary: "#abc".to_string(),
            ..Default::default()
        };
        assert!(scheme.validate().is_ok());
    }

    #[test]
    fn test_invalid_hex_names_field() {
        let scheme = ColorScheme {
            secondary: "blue".to_string(),
            ..Default::default()
        };
        assert_eq!(
            scheme.validate(),
            Err(StyleError::InvalidColor {
                field: "secondary",
                value: "blue".to_string()
            })
        );
    }

    #[test]
    fn test_size_scale_is_increasing() {
        let sizes: Vec<u16> = FontSize::SCALE.iter().map(|s| s.px()).collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_font_size_uses_scale_tokens_in_json() {
        let json = serde_json::to_value(FontSettings::default()).unwrap();
        assert_eq!(json["name_size"], "2xl");
        assert_eq!(json["body_size"], "base");
    }
}
