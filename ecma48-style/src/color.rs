use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Colour selected by graphic rendition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// The default colour of the attribute, rendered from the
    /// configuration.
    #[default]
    Default,
    /// Entry of the 256-colour palette. The first 16 entries are the base
    /// and bright colours.
    Indexed(u8),
    Rgb(Rgb),
}

impl Color {
    /// Concrete colour, with `default` standing in for [`Color::Default`].
    pub fn to_rgb(self, default: Rgb) -> Rgb {
        match self {
            Self::Default => default,
            Self::Indexed(index) => palette_rgb(index),
            Self::Rgb(rgb) => rgb,
        }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {0:?}, expected #rrggbb or 0xrrggbb")]
pub struct InvalidColor(pub String);

impl FromStr for Rgb {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, InvalidColor> {
        let invalid = || InvalidColor(s.to_string());
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .filter(|digits| digits.len() == 6 && digits.is_ascii())
            .ok_or_else(invalid)?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// The xterm defaults of the base (0..8) and bright (8..16) colours.
const BASE_PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(205, 0, 0),
    Rgb::new(0, 205, 0),
    Rgb::new(205, 205, 0),
    Rgb::new(0, 0, 238),
    Rgb::new(205, 0, 205),
    Rgb::new(0, 205, 205),
    Rgb::new(229, 229, 229),
    Rgb::new(127, 127, 127),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(92, 92, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

/// Channel levels of the 6x6x6 colour cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Colour of a 256-colour palette entry.
///
/// * `0..16`    base and bright colours
/// * `16..232`  6x6x6 colour cube
/// * `232..256` grayscale ramp
pub fn palette_rgb(index: u8) -> Rgb {
    match index {
        0..=15 => BASE_PALETTE[index as usize],
        16..=231 => {
            let cube = index - 16;
            Rgb::new(
                CUBE_LEVELS[(cube / 36) as usize],
                CUBE_LEVELS[(cube / 6 % 6) as usize],
                CUBE_LEVELS[(cube % 6) as usize],
            )
        },
        232..=255 => {
            let gray = 8 + 10 * (index - 232);
            Rgb::new(gray, gray, gray)
        },
    }
}
