//! Mutable attribute state of one terminal session.

use std::collections::HashMap;

use log::trace;

use crate::attribute::{
    Attribute, AttributeChange, AttributeGroup, AttributeValue, Font,
    Underline,
};
use crate::color::Color;
use crate::config::{StyleConfig, TextConfig};
use crate::error::{Result, StyleError};

/// Current attribute values, stored as overrides of the configured
/// defaults.
///
/// An attribute is present in the override map exactly when its current
/// value differs from its default, so the map is the difference to a blank
/// terminal and resetting a group only drops entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeContext {
    overrides: HashMap<Attribute, AttributeValue>,
    text: TextConfig,
}

impl AttributeContext {
    pub fn new(config: &StyleConfig) -> Self {
        Self {
            overrides: HashMap::new(),
            text: config.text().cloned().unwrap_or_default(),
        }
    }

    pub fn text_config(&self) -> &TextConfig {
        &self.text
    }

    pub fn default_value(&self, attribute: Attribute) -> AttributeValue {
        match attribute {
            Attribute::Weight => {
                AttributeValue::Weight(self.text.default_weight)
            },
            Attribute::Foreground => {
                AttributeValue::Foreground(self.text.default_foreground)
            },
            Attribute::Background => {
                AttributeValue::Background(self.text.default_background)
            },
            _ => attribute.initial_value(),
        }
    }

    /// Current value of `attribute`.
    pub fn attribute(&self, attribute: Attribute) -> AttributeValue {
        self.overrides
            .get(&attribute)
            .copied()
            .unwrap_or_else(|| self.default_value(attribute))
    }

    pub fn is_overridden(&self, attribute: Attribute) -> bool {
        self.overrides.contains_key(&attribute)
    }

    /// Attributes differing from their defaults.
    pub fn overrides(&self) -> &HashMap<Attribute, AttributeValue> {
        &self.overrides
    }

    /// Assign `value` to `attribute`, or its default for `None`.
    ///
    /// Returns the change, or `None` when the current value already equals
    /// the new one.
    pub fn set_attribute(
        &mut self,
        attribute: Attribute,
        value: Option<AttributeValue>,
    ) -> Result<Option<AttributeChange>> {
        let default = self.default_value(attribute);
        let new = match value {
            Some(value) if value.attribute() != attribute => {
                return Err(StyleError::MismatchedValue { attribute, value });
            },
            Some(value) => value,
            None => default,
        };

        let old = self.attribute(attribute);
        if old == new {
            return Ok(None);
        }

        if new == default {
            self.overrides.remove(&attribute);
        } else {
            self.overrides.insert(attribute, new);
        }

        trace!("{attribute}: {old:?} -> {new:?}");
        Ok(Some(AttributeChange {
            attribute,
            old,
            new,
        }))
    }

    /// Restore the defaults of every attribute of `group`.
    ///
    /// Returns one change per dropped override, in attribute order.
    pub fn reset(&mut self, group: AttributeGroup) -> Vec<AttributeChange> {
        let mut changes = Vec::new();
        for &attribute in group.attributes() {
            if let Some(old) = self.overrides.remove(&attribute) {
                changes.push(AttributeChange {
                    attribute,
                    old,
                    new: self.default_value(attribute),
                });
            }
        }

        changes
    }

    pub fn underline(&self) -> Underline {
        match self.attribute(Attribute::Underline) {
            AttributeValue::Underline(underline) => underline,
            _ => Underline::None,
        }
    }

    pub fn strikethrough(&self) -> bool {
        matches!(
            self.attribute(Attribute::Strikethrough),
            AttributeValue::Strikethrough(true)
        )
    }

    pub fn reverse(&self) -> bool {
        matches!(
            self.attribute(Attribute::Reverse),
            AttributeValue::Reverse(true)
        )
    }

    pub fn font(&self) -> Font {
        match self.attribute(Attribute::Font) {
            AttributeValue::Font(font) => font,
            _ => Font::Primary,
        }
    }

    pub fn foreground(&self) -> Color {
        match self.attribute(Attribute::Foreground) {
            AttributeValue::Foreground(color) => color,
            _ => self.text.default_foreground,
        }
    }

    pub fn background(&self) -> Color {
        match self.attribute(Attribute::Background) {
            AttributeValue::Background(color) => color,
            _ => self.text.default_background,
        }
    }
}
