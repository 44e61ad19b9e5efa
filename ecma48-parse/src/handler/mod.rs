//! Strategies turning a found introducer into a fragment.
//!
//! The parser holds one [`FunctionHandler`] per [`FunctionType`] in a
//! [`HandlerTable`]. Handlers receive the whole text handed to the parser
//! together with the [`FindResult`] and produce a [`FunctionFragment`]
//! spanning the complete function, or the reason why they cannot.

mod sequence;
mod string;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

pub use sequence::ControlSequenceHandler;
pub use string::ControlStringHandler;

use crate::arguments::{ArgumentValue, FunctionArgument};
use crate::catalog::{Catalog, control};
use crate::error::{ConfigError, FailureReason, ParseError, Result};
use crate::finder::FindResult;
use crate::fragment::{FunctionFragment, TextFragment};
use crate::function::{ESC, FunctionType};

/// What handlers know about the parser calling them.
///
/// The environment only decides what the finder reports, so handlers see
/// both introducer forms regardless of it.
#[derive(Debug, Clone, Copy)]
pub struct HandlerContext<'a> {
    pub catalog: &'a Catalog,
    /// Position of the handled text in the whole stream.
    pub offset: usize,
}

impl HandlerContext<'_> {
    pub(crate) fn failure(
        &self,
        reason: FailureReason,
        index: usize,
    ) -> ParseError {
        ParseError::failure(reason, self.offset + index)
    }

    pub(crate) fn fragment(
        &self,
        text: &str,
        found: &FindResult,
        end: usize,
        arguments: Option<Vec<FunctionArgument>>,
    ) -> FunctionFragment {
        FunctionFragment {
            text: text[found.function_index..end].to_string(),
            offset: self.offset + found.function_index,
            function: found.function,
            arguments,
        }
    }
}

pub trait FunctionHandler: Send + Sync {
    /// The function type this handler is registered for.
    fn function_type(&self) -> FunctionType;

    fn handle(
        &self,
        context: &HandlerContext<'_>,
        text: &str,
        found: &FindResult,
    ) -> Result<FunctionFragment>;
}

/// Produces fragments for the text between functions.
pub trait TextHandler: Send + Sync {
    fn handle(&self, text: &str, offset: usize) -> TextFragment;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextHandler;

impl TextHandler for PlainTextHandler {
    fn handle(&self, text: &str, offset: usize) -> TextFragment {
        TextFragment {
            text: text.to_string(),
            offset,
        }
    }
}

/// Length of the introducer at `index`: `ESC` plus designator, or the
/// single 8-bit code point.
pub(crate) fn introducer_len(text: &str, index: usize) -> Option<usize> {
    let mut chars = text.get(index..)?.chars();
    match chars.next()? {
        ESC => chars.next().map(|designator| 1 + designator.len_utf8()),
        code => Some(code.len_utf8()),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct C0Handler;

impl FunctionHandler for C0Handler {
    fn function_type(&self) -> FunctionType {
        FunctionType::C0
    }

    fn handle(
        &self,
        context: &HandlerContext<'_>,
        text: &str,
        found: &FindResult,
    ) -> Result<FunctionFragment> {
        let index = found.function_index;
        let len = text
            .get(index..)
            .and_then(|rest| rest.chars().next())
            .map(char::len_utf8)
            .ok_or_else(|| {
                context.failure(FailureReason::NoEndOfFunction, index)
            })?;

        Ok(context.fragment(text, found, index + len, None))
    }
}

/// Handles C1 functions in both of their forms.
///
/// `SCI` takes the character following it as its single argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct C1Handler;

impl FunctionHandler for C1Handler {
    fn function_type(&self) -> FunctionType {
        FunctionType::C1
    }

    fn handle(
        &self,
        context: &HandlerContext<'_>,
        text: &str,
        found: &FindResult,
    ) -> Result<FunctionFragment> {
        let index = found.function_index;
        let no_end = || context.failure(FailureReason::NoEndOfFunction, index);
        let mut end = index + introducer_len(text, index).ok_or_else(no_end)?;

        if *found.function != control::SCI {
            return Ok(context.fragment(text, found, end, None));
        }

        let character = text[end..].chars().next().ok_or_else(no_end)?;
        end += character.len_utf8();
        let arguments = vec![FunctionArgument::explicit(ArgumentValue::Text(
            character.to_string(),
        ))];

        Ok(context.fragment(text, found, end, Some(arguments)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IndependentHandler;

impl FunctionHandler for IndependentHandler {
    fn function_type(&self) -> FunctionType {
        FunctionType::Independent
    }

    fn handle(
        &self,
        context: &HandlerContext<'_>,
        text: &str,
        found: &FindResult,
    ) -> Result<FunctionFragment> {
        let index = found.function_index;
        let len = introducer_len(text, index)
            .filter(|&len| len > 1)
            .ok_or_else(|| {
                context.failure(FailureReason::NoEndOfFunction, index)
            })?;

        Ok(context.fragment(text, found, index + len, None))
    }
}

/// Handlers for every function type.
pub fn standard_handlers() -> Vec<Box<dyn FunctionHandler>> {
    vec![
        Box::new(C0Handler),
        Box::new(C1Handler),
        Box::new(ControlSequenceHandler),
        Box::new(IndependentHandler),
        Box::new(ControlStringHandler),
    ]
}

/// Exactly one handler per function type.
pub struct HandlerTable {
    handlers: HashMap<FunctionType, Box<dyn FunctionHandler>>,
}

impl HandlerTable {
    pub fn new(
        handlers: Vec<Box<dyn FunctionHandler>>,
    ) -> std::result::Result<Self, ConfigError> {
        let mut table = HashMap::new();

        for handler in handlers {
            let function_type = handler.function_type();
            match table.entry(function_type) {
                Entry::Occupied(_) => {
                    return Err(ConfigError::DuplicateHandler(function_type));
                },
                Entry::Vacant(entry) => {
                    entry.insert(handler);
                },
            }
        }

        if let Some(missing) = FunctionType::ALL
            .into_iter()
            .find(|function_type| !table.contains_key(function_type))
        {
            return Err(ConfigError::MissingHandler(missing));
        }

        Ok(Self { handlers: table })
    }

    pub fn get(
        &self,
        function_type: FunctionType,
    ) -> Option<&dyn FunctionHandler> {
        self.handlers.get(&function_type).map(|handler| &**handler)
    }
}

impl fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self.handlers.keys().collect();
        types.sort();
        f.debug_struct("HandlerTable").field("types", &types).finish()
    }
}
