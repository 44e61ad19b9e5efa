//! Translation of SGR parameters into attribute assignments.

use ecma48_parse::{ArgumentValue, FunctionArgument};
use log::debug;

use crate::attribute::{
    AttributeGroup, AttributeValue, Blink, Font, Underline, Visibility, Weight,
};
use crate::color::{Color, Rgb};
use crate::config::{PaletteSet, TextConfig};
use crate::context::AttributeContext;

/// One effect of an SGR parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sgr {
    /// Restore the defaults of a whole group.
    Reset(AttributeGroup),
    Set(AttributeValue),
}

/// Effects of the SGR `arguments`, in parameter order.
///
/// Unknown codes, non-numeric and contextual arguments are skipped.
/// Colours from palettes disabled in the configuration are skipped after
/// consuming their parameters.
pub fn operations(
    arguments: &[FunctionArgument],
    context: &AttributeContext,
) -> Vec<Sgr> {
    let config = context.text_config();
    let mut codes = arguments
        .iter()
        .filter_map(|argument| match argument.value() {
            ArgumentValue::Int(code) => Some(*code),
            value => {
                debug!("ignoring non-numeric SGR parameter {value}");
                None
            },
        });
    let mut operations = Vec::new();

    // `23` also ends Fraktur, track the font selected so far.
    let mut fraktur = context.font() == Font::Fraktur;

    while let Some(code) = codes.next() {
        let operation = match code {
            0 => Some(Sgr::Reset(AttributeGroup::Text)),
            1 => Some(Sgr::Set(AttributeValue::Weight(Weight::Bold))),
            2 => Some(Sgr::Set(AttributeValue::Weight(Weight::Faint))),
            3 => Some(Sgr::Set(AttributeValue::Italic(true))),
            4 => Some(Sgr::Set(AttributeValue::Underline(Underline::Single))),
            5 => Some(Sgr::Set(AttributeValue::Blink(Blink::Slow))),
            6 => Some(Sgr::Set(AttributeValue::Blink(Blink::Rapid))),
            7 => Some(Sgr::Set(AttributeValue::Reverse(true))),
            8 => Some(Sgr::Set(AttributeValue::Visibility(Visibility::Hidden))),
            9 => Some(Sgr::Set(AttributeValue::Strikethrough(true))),
            10 => Some(Sgr::Set(AttributeValue::Font(Font::Primary))),
            11..=19 => Some(Sgr::Set(AttributeValue::Font(Font::Alternative(
                (code - 10) as u8,
            )))),
            20 => Some(Sgr::Set(AttributeValue::Font(Font::Fraktur))),
            21 => Some(Sgr::Set(AttributeValue::Underline(Underline::Double))),
            22 => Some(Sgr::Set(AttributeValue::Weight(Weight::Normal))),
            23 => {
                operations.push(Sgr::Set(AttributeValue::Italic(false)));
                fraktur.then_some(Sgr::Set(AttributeValue::Font(Font::Primary)))
            },
            24 => Some(Sgr::Set(AttributeValue::Underline(Underline::None))),
            25 => Some(Sgr::Set(AttributeValue::Blink(Blink::None))),
            27 => Some(Sgr::Set(AttributeValue::Reverse(false))),
            28 => {
                Some(Sgr::Set(AttributeValue::Visibility(Visibility::Visible)))
            },
            29 => Some(Sgr::Set(AttributeValue::Strikethrough(false))),
            30..=37 => base_color(code - 30, config)
                .map(|color| Sgr::Set(AttributeValue::Foreground(color))),
            38 => extended_color(&mut codes, config)
                .map(|color| Sgr::Set(AttributeValue::Foreground(color))),
            39 => Some(Sgr::Set(AttributeValue::Foreground(
                config.default_foreground,
            ))),
            40..=47 => base_color(code - 40, config)
                .map(|color| Sgr::Set(AttributeValue::Background(color))),
            48 => extended_color(&mut codes, config)
                .map(|color| Sgr::Set(AttributeValue::Background(color))),
            49 => Some(Sgr::Set(AttributeValue::Background(
                config.default_background,
            ))),
            90..=97 => bright_color(code - 90, config)
                .map(|color| Sgr::Set(AttributeValue::Foreground(color))),
            100..=107 => bright_color(code - 100, config)
                .map(|color| Sgr::Set(AttributeValue::Background(color))),
            _ => {
                debug!("ignoring unknown SGR code {code}");
                None
            },
        };

        if let Some(operation) = operation {
            match operation {
                Sgr::Reset(_) => fraktur = false,
                Sgr::Set(AttributeValue::Font(font)) => {
                    fraktur = font == Font::Fraktur;
                },
                Sgr::Set(_) => {},
            }
            operations.push(operation);
        }
    }

    operations
}

fn base_color(offset: u32, config: &TextConfig) -> Option<Color> {
    config
        .palettes
        .contains(PaletteSet::ANSI16)
        .then_some(Color::Indexed(offset as u8))
}

fn bright_color(offset: u32, config: &TextConfig) -> Option<Color> {
    if !config.extra_color_codes {
        debug!("ignoring bright color, extra color codes are disabled");
        return None;
    }

    base_color(offset + 8, config)
}

/// Parse `5;n` or `2;r;g;b` following `38` or `48`.
fn extended_color<I>(codes: &mut I, config: &TextConfig) -> Option<Color>
where
    I: Iterator<Item = u32>,
{
    let (color, palette) = match codes.next() {
        Some(5) => {
            let index = codes.next()?;
            let color = u8::try_from(index).ok().map(Color::Indexed);
            (color, PaletteSet::XTERM256)
        },
        Some(2) => {
            let r = codes.next()?;
            let g = codes.next()?;
            let b = codes.next()?;
            let channel = |value: u32| u8::try_from(value).ok();
            let color = match (channel(r), channel(g), channel(b)) {
                (Some(r), Some(g), Some(b)) => {
                    Some(Color::Rgb(Rgb::new(r, g, b)))
                },
                _ => None,
            };
            (color, PaletteSet::TRUE_COLOR)
        },
        selector => {
            debug!("ignoring extended color with selector {selector:?}");
            return None;
        },
    };

    if !config.palettes.contains(palette) {
        debug!("ignoring color from disabled palette {palette:?}");
        return None;
    }

    color
}
