//! Graphic rendition of ECMA-48 text.
//!
//! A [`StyleResolver`] applies SGR fragments produced by `ecma48-parse` to
//! an [`AttributeContext`] and renders each resulting [`AttributeChange`]
//! through the [`StyleGenerator`] registered for its attribute.

mod attribute;
mod color;
mod config;
mod context;
mod error;
pub mod generator;
mod resolver;
mod sgr;

pub use attribute::{
    Attribute, AttributeChange, AttributeGroup, AttributeValue, Blink, Font,
    Underline, Visibility, Weight,
};
pub use color::{Color, InvalidColor, Rgb, palette_rgb};
pub use config::{GroupConfig, PaletteSet, StyleConfig, TextConfig};
pub use context::AttributeContext;
pub use error::{ConfigError, Result, StyleError};
pub use generator::css::css_generators;
pub use generator::{StyleGenerator, Target};
pub use resolver::{StyleOutput, StyleResolver};
pub use sgr::{Sgr, operations as sgr_operations};
