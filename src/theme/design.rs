// SPDX-License-Identifier: MPL-2.0
//! Design files: per-kind style entries parsed from TOML.
//!
//! ```toml
//! [success]
//! background = "#76CF67"
//! text_color = "#FFFFFF"
//! image = "success-icon"
//! ```

use crate::error::ThemeError;
use crate::message::MessageKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Style of one message kind. Every field is optional so that a custom
/// design only needs to name what it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_font_size: Option<f32>,
}

impl MessageStyle {
    /// Returns `self` with every field set in `other` replaced.
    #[must_use]
    pub fn merged_with(&self, other: &MessageStyle) -> MessageStyle {
        MessageStyle {
            background: other.background.clone().or_else(|| self.background.clone()),
            text_color: other.text_color.clone().or_else(|| self.text_color.clone()),
            subtitle_color: other
                .subtitle_color
                .clone()
                .or_else(|| self.subtitle_color.clone()),
            image: other.image.clone().or_else(|| self.image.clone()),
            font_size: other.font_size.or(self.font_size),
            subtitle_font_size: other.subtitle_font_size.or(self.subtitle_font_size),
        }
    }

    fn validate(&self, kind: MessageKind) -> Result<(), ThemeError> {
        let colors = [
            ("background", &self.background),
            ("text_color", &self.text_color),
            ("subtitle_color", &self.subtitle_color),
        ];
        for (field, value) in colors {
            if let Some(value) = value {
                if !is_hex_color(value) {
                    return Err(ThemeError::InvalidDesign(format!(
                        "{}.{field}: `{value}` is not a #RRGGBB or #RRGGBBAA color",
                        kind.design_key()
                    )));
                }
            }
        }
        let sizes = [
            ("font_size", self.font_size),
            ("subtitle_font_size", self.subtitle_font_size),
        ];
        for (field, value) in sizes {
            if let Some(value) = value {
                if !(value.is_finite() && value > 0.0) {
                    return Err(ThemeError::InvalidDesign(format!(
                        "{}.{field}: font size must be positive",
                        kind.design_key()
                    )));
                }
            }
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// A full design: one style per message kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Design {
    styles: HashMap<MessageKind, MessageStyle>,
}

impl Design {
    /// The design shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        let entry = |background: &str, image: &str| MessageStyle {
            background: Some(background.to_string()),
            text_color: Some("#FFFFFF".to_string()),
            subtitle_color: Some("#FFFFFF".to_string()),
            image: Some(image.to_string()),
            font_size: Some(14.0),
            subtitle_font_size: Some(12.0),
        };
        let styles = HashMap::from([
            (MessageKind::Default, entry("#D4DDDF", "default-icon")),
            (MessageKind::Success, entry("#76CF67", "success-icon")),
            (MessageKind::Warning, entry("#DAC43C", "warning-icon")),
            (MessageKind::Error, entry("#DD3B41", "error-icon")),
        ]);
        Self { styles }
    }

    /// Parses a design from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidDesign`] for malformed TOML or values,
    /// and [`ThemeError::UnknownKind`] for tables that name no message kind.
    pub fn parse(content: &str) -> Result<Self, ThemeError> {
        let raw: BTreeMap<String, MessageStyle> =
            toml::from_str(content).map_err(|e| ThemeError::InvalidDesign(e.to_string()))?;

        let mut styles = HashMap::with_capacity(raw.len());
        for (key, style) in raw {
            let kind =
                MessageKind::from_design_key(&key).ok_or_else(|| ThemeError::UnknownKind(key))?;
            style.validate(kind)?;
            styles.insert(kind, style);
        }
        Ok(Self { styles })
    }

    /// Overlays `other` on top of this design, field by field.
    pub fn merge(&mut self, other: &Design) {
        for (kind, style) in &other.styles {
            let merged = self
                .styles
                .get(kind)
                .map_or_else(|| style.clone(), |base| base.merged_with(style));
            self.styles.insert(*kind, merged);
        }
    }

    #[must_use]
    pub fn style(&self, kind: MessageKind) -> Option<&MessageStyle> {
        self.styles.get(&kind)
    }
}
