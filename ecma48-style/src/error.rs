use thiserror::Error;

use crate::attribute::{Attribute, AttributeGroup, AttributeValue};
use crate::generator::Target;

/// Errors raised while resolving graphic rendition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("{value:?} cannot be assigned to {attribute}")]
    MismatchedValue {
        attribute: Attribute,
        value: AttributeValue,
    },

    #[error("no {target} generator registered for {attribute}")]
    MissingGenerator { attribute: Attribute, target: Target },
}

/// Errors raised while assembling a style resolver.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no attribute group configured")]
    NoGroups,

    #[error("attribute group {0:?} configured more than once")]
    DuplicateGroup(AttributeGroup),

    #[error("no style generator registered")]
    NoGenerators,

    #[error("more than one {target} generator registered for {attribute}")]
    DuplicateGenerator { attribute: Attribute, target: Target },

    #[error("invalid style configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StyleError>;
