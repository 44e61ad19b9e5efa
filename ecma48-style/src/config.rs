use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeGroup, Weight};
use crate::color::{Color, Rgb};
use crate::error::ConfigError;

bitflags! {
    /// Colour palettes graphic rendition may select from.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct PaletteSet: u8 {
        /// Base colours 30..37 and 40..47, plus the bright colours when
        /// extra colour codes are enabled.
        const ANSI16 = 1;
        /// `38;5;n` and `48;5;n`.
        const XTERM256 = 1 << 1;
        /// `38;2;r;g;b` and `48;2;r;g;b`.
        const TRUE_COLOR = 1 << 2;
    }
}

impl Default for PaletteSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Defaults and options of the text attribute group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub default_weight: Weight,
    pub default_foreground: Color,
    pub default_background: Color,
    /// Rendering of [`Color::Default`] as a foreground.
    pub foreground: Rgb,
    /// Rendering of [`Color::Default`] as a background.
    pub background: Rgb,
    pub palettes: PaletteSet,
    /// Accept the non-standard bright colours 90..97 and 100..107.
    pub extra_color_codes: bool,
    /// Blink periods in milliseconds.
    pub slow_blink_ms: u32,
    pub rapid_blink_ms: u32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            default_weight: Weight::Normal,
            default_foreground: Color::Default,
            default_background: Color::Default,
            foreground: Rgb::new(229, 229, 229),
            background: Rgb::new(0, 0, 0),
            palettes: PaletteSet::default(),
            extra_color_codes: true,
            slow_blink_ms: 1000,
            rapid_blink_ms: 300,
        }
    }
}

/// Configuration of one attribute group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "group", rename_all = "lowercase")]
pub enum GroupConfig {
    Text(TextConfig),
}

impl GroupConfig {
    pub fn group(&self) -> AttributeGroup {
        match self {
            Self::Text(_) => AttributeGroup::Text,
        }
    }
}

/// Attribute groups known to a style resolver.
///
/// ```json
/// { "groups": [{ "group": "text", "default_weight": "bold" }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub groups: Vec<GroupConfig>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            groups: vec![GroupConfig::Text(TextConfig::default())],
        }
    }
}

impl StyleConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Fails unless at least one group is configured, each at most once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.groups.is_empty() {
            return Err(ConfigError::NoGroups);
        }

        for (index, group) in self.groups.iter().enumerate() {
            if self.groups[..index]
                .iter()
                .any(|other| other.group() == group.group())
            {
                return Err(ConfigError::DuplicateGroup(group.group()));
            }
        }

        Ok(())
    }

    pub fn text(&self) -> Option<&TextConfig> {
        self.groups.iter().find_map(|group| match group {
            GroupConfig::Text(text) => Some(text),
        })
    }
}
