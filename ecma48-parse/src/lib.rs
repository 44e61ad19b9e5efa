//! Recognition of ECMA-48 control functions.
//!
//! A [`Parser`] splits text into [`Fragment`]s: runs of plain text and
//! complete control functions with their resolved arguments.

mod actor;
mod arguments;
pub mod catalog;
mod error;
mod finder;
mod fragment;
mod function;
mod handler;
mod matcher;
mod parser;

pub use actor::FragmentActor;
pub use arguments::{
    ArgumentValue, FunctionArgument, parse_arguments, split_arguments,
};
pub use catalog::{Catalog, Code, FunctionDescriptor, Placeholder};
pub use error::{ConfigError, FailureReason, ParseError, Result};
pub use finder::{FindResult, Finder};
pub use fragment::{Fragment, FunctionFragment, TextFragment};
pub use function::{DefaultValue, ESC, Environment, Function, FunctionType};
pub use handler::{
    C0Handler, C1Handler, ControlSequenceHandler, ControlStringHandler,
    FunctionHandler, HandlerContext, HandlerTable, IndependentHandler,
    PlainTextHandler, TextHandler, standard_handlers,
};
pub use matcher::{Matcher, SequenceMatch};
pub use parser::{Fragments, Parser, ParserConfig, UnmatchedPolicy};
