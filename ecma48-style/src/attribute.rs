//! Terminal display attributes touched by graphic rendition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Groups of attributes that reset together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeGroup {
    Text,
}

impl AttributeGroup {
    pub fn attributes(self) -> &'static [Attribute] {
        match self {
            Self::Text => &Attribute::ALL,
        }
    }
}

/// Identity of a single attribute.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Weight,
    Italic,
    Underline,
    Blink,
    Reverse,
    Visibility,
    Strikethrough,
    Font,
    Foreground,
    Background,
}

impl Attribute {
    pub const ALL: [Attribute; 10] = [
        Attribute::Weight,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::Blink,
        Attribute::Reverse,
        Attribute::Visibility,
        Attribute::Strikethrough,
        Attribute::Font,
        Attribute::Foreground,
        Attribute::Background,
    ];

    pub fn group(self) -> AttributeGroup {
        AttributeGroup::Text
    }

    /// Value of a blank terminal.
    pub fn initial_value(self) -> AttributeValue {
        match self {
            Self::Weight => AttributeValue::Weight(Weight::Normal),
            Self::Italic => AttributeValue::Italic(false),
            Self::Underline => AttributeValue::Underline(Underline::None),
            Self::Blink => AttributeValue::Blink(Blink::None),
            Self::Reverse => AttributeValue::Reverse(false),
            Self::Visibility => AttributeValue::Visibility(Visibility::Visible),
            Self::Strikethrough => AttributeValue::Strikethrough(false),
            Self::Font => AttributeValue::Font(Font::Primary),
            Self::Foreground => AttributeValue::Foreground(Color::Default),
            Self::Background => AttributeValue::Background(Color::Default),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Weight => "weight",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Blink => "blink",
            Self::Reverse => "reverse",
            Self::Visibility => "visibility",
            Self::Strikethrough => "strikethrough",
            Self::Font => "font",
            Self::Foreground => "foreground",
            Self::Background => "background",
        };

        f.write_str(name)
    }
}

/// Stroke weight of the glyphs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    #[default]
    Normal,
    Bold,
    /// Decreased intensity, `lighter` in CSS.
    Faint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Blink {
    #[default]
    None,
    /// Less than 150 per minute.
    Slow,
    /// 150 per minute or more.
    Rapid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Concealed characters.
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Font {
    #[default]
    Primary,
    /// Alternative fonts 1 to 9, selected by SGR 11 to 19.
    Alternative(u8),
    /// Gothic font, SGR 20.
    Fraktur,
}

/// Value of an attribute, tagged with the attribute it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    Weight(Weight),
    Italic(bool),
    Underline(Underline),
    Blink(Blink),
    Reverse(bool),
    Visibility(Visibility),
    Strikethrough(bool),
    Font(Font),
    Foreground(Color),
    Background(Color),
}

impl AttributeValue {
    /// The attribute this value can be assigned to.
    pub fn attribute(&self) -> Attribute {
        match self {
            Self::Weight(_) => Attribute::Weight,
            Self::Italic(_) => Attribute::Italic,
            Self::Underline(_) => Attribute::Underline,
            Self::Blink(_) => Attribute::Blink,
            Self::Reverse(_) => Attribute::Reverse,
            Self::Visibility(_) => Attribute::Visibility,
            Self::Strikethrough(_) => Attribute::Strikethrough,
            Self::Font(_) => Attribute::Font,
            Self::Foreground(_) => Attribute::Foreground,
            Self::Background(_) => Attribute::Background,
        }
    }
}

/// An effective change of one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeChange {
    pub attribute: Attribute,
    pub old: AttributeValue,
    pub new: AttributeValue,
}
