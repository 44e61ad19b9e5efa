//! Locates the next control function introducer in a text.

use crate::catalog::{Catalog, control};
use crate::function::{ESC, Environment, Function, FunctionType};

/// Position and classification of a found introducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindResult {
    /// Byte index of the introducer.
    pub function_index: usize,
    /// How the function has to be handled.
    pub function_type: FunctionType,
    /// The cataloged function. For control sequences this is `CSI`, for
    /// control strings the opening delimiter.
    pub function: &'static Function,
}

/// Scans text for introducers of cataloged functions.
#[derive(Debug, Clone, Copy)]
pub struct Finder<'a> {
    catalog: &'a Catalog,
    environment: Environment,
}

impl<'a> Finder<'a> {
    pub fn new(catalog: &'a Catalog, environment: Environment) -> Self {
        Self {
            catalog,
            environment,
        }
    }

    /// Next introducer at or after `from_index`.
    ///
    /// Returns `None` when there is none, including for an empty text or
    /// an index past the end or inside a code point.
    pub fn find(&self, from_index: usize, text: &str) -> Option<FindResult> {
        let rest = text.get(from_index..)?;
        let mut chars = rest.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            let next = chars.peek().map(|&(_, next)| next);
            if let Some((function_type, function)) = self.classify(c, next) {
                return Some(FindResult {
                    function_index: from_index + offset,
                    function_type,
                    function,
                });
            }
        }

        None
    }

    fn classify(
        &self,
        c: char,
        next: Option<char>,
    ) -> Option<(FunctionType, &'static Function)> {
        match c {
            ESC => self.classify_escape(next).or_else(|| {
                self.catalog.c0(ESC).map(|function| (FunctionType::C0, function))
            }),
            '\u{00}'..='\u{1f}' => {
                self.catalog.c0(c).map(|function| (FunctionType::C0, function))
            },
            '\u{80}'..='\u{9f}' if self.environment == Environment::EightBit => {
                self.classify_c1(c)
            },
            _ => None,
        }
    }

    /// Classify the function designated by the character after `ESC`.
    fn classify_escape(
        &self,
        designator: Option<char>,
    ) -> Option<(FunctionType, &'static Function)> {
        let designator = designator?;

        if self.environment == Environment::SevenBit {
            let c1 = control::from_seven_bit(designator)
                .and_then(|code| self.classify_c1(code));
            if c1.is_some() {
                return c1;
            }
        }

        self.catalog
            .independent(designator)
            .map(|function| (FunctionType::Independent, function))
    }

    fn classify_c1(
        &self,
        code: char,
    ) -> Option<(FunctionType, &'static Function)> {
        if let Some(function) = self.catalog.control_string(code) {
            return Some((FunctionType::ControlString, function));
        }

        let function = self.catalog.c1(code)?;
        if *function == control::CSI {
            Some((FunctionType::ControlSequence, function))
        } else {
            Some((FunctionType::C1, function))
        }
    }
}
