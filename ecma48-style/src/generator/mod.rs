//! Style declarations for attribute changes.
//!
//! A [`StyleGenerator`] renders the changes of a set of attributes for one
//! [`Target`]. Generators see the whole [`AttributeContext`] after the
//! changes were applied, so attributes that render together (colours and
//! reverse video, underline and strikethrough) stay consistent.

pub mod css;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, AttributeChange};
use crate::context::AttributeContext;

/// Rendering technology of style declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// `property: value` declarations.
    Css,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css => f.write_str("css"),
        }
    }
}

pub trait StyleGenerator: Send + Sync {
    fn target(&self) -> Target;

    /// Attributes whose changes this generator renders.
    fn attributes(&self) -> &[Attribute];

    /// Append the declarations for `change` to `out`.
    fn generate(
        &self,
        change: &AttributeChange,
        context: &AttributeContext,
        out: &mut Vec<String>,
    );
}
