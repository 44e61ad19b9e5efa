//! Registry of the control functions known to the engine.
//!
//! The tables live in one module per function type. [`Catalog`] indexes
//! them once: C0, C1 and control string functions by their code point,
//! independent functions by their designator, and control sequences by the
//! terminator of their tokenized pattern.

pub mod control;
pub mod independent;
pub mod sequence;
pub mod string;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::ConfigError;
use crate::function::{Function, FunctionType};

/// Placeholder kinds of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{s}`
    Single,
    /// `{m}`
    Multiple,
    /// `{c}`
    Character,
    /// `{t}`
    Text,
}

/// One token of a tokenized pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    Literal(&'static str),
    Placeholder(Placeholder),
}

/// A control sequence prepared for matching.
///
/// The codes always end with the literal terminator, made of optional
/// intermediate bytes (02/00..02/15) and one final byte (04/00..07/14).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    function: &'static Function,
    placeholders: Vec<Placeholder>,
    codes: Vec<Code>,
}

impl FunctionDescriptor {
    pub fn new(function: &'static Function) -> Result<Self, ConfigError> {
        let invalid = |message| ConfigError::InvalidPattern {
            mnemonic: function.mnemonic,
            pattern: function.pattern,
            message,
        };

        let codes = tokenize(function.pattern).map_err(invalid)?;
        let terminator = match codes.last() {
            Some(Code::Literal(terminator)) => *terminator,
            _ => return Err(invalid("pattern does not end with a terminator")),
        };

        let mut chars = terminator.chars().rev();
        if !chars.next().is_some_and(is_final_byte) {
            return Err(invalid("terminator does not end with a final byte"));
        }
        if !chars.all(is_intermediate_byte) {
            return Err(invalid("terminator has a non-intermediate prefix"));
        }

        let placeholders = codes
            .iter()
            .filter_map(|code| match code {
                Code::Placeholder(placeholder) => Some(*placeholder),
                Code::Literal(_) => None,
            })
            .collect();

        Ok(Self {
            function,
            placeholders,
            codes,
        })
    }

    pub fn function(&self) -> &'static Function {
        self.function
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Intermediate bytes followed by the final byte.
    pub fn terminator(&self) -> &'static str {
        match self.codes.last() {
            Some(Code::Literal(terminator)) => terminator,
            // Rejected by `new`.
            _ => "",
        }
    }
}

/// Split a pattern into literal runs and placeholders.
fn tokenize(pattern: &'static str) -> Result<Vec<Code>, &'static str> {
    let bytes = pattern.as_bytes();
    let mut codes = Vec::new();
    let mut literal_start = 0;
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] != b'{' {
            index += 1;
            continue;
        }

        let close = pattern[index..]
            .find('}')
            .map(|offset| index + offset)
            .ok_or("unclosed placeholder")?;
        let placeholder = match &pattern[index + 1..close] {
            "s" => Placeholder::Single,
            "m" => Placeholder::Multiple,
            "c" => Placeholder::Character,
            "t" => Placeholder::Text,
            _ => return Err("unknown placeholder"),
        };

        if literal_start < index {
            codes.push(Code::Literal(&pattern[literal_start..index]));
        }
        codes.push(Code::Placeholder(placeholder));

        index = close + 1;
        literal_start = index;
    }

    if literal_start < pattern.len() {
        codes.push(Code::Literal(&pattern[literal_start..]));
    }

    Ok(codes)
}

pub(crate) fn is_parameter_byte(c: char) -> bool {
    ('\u{30}'..='\u{3f}').contains(&c)
}

pub(crate) fn is_intermediate_byte(c: char) -> bool {
    ('\u{20}'..='\u{2f}').contains(&c)
}

pub(crate) fn is_final_byte(c: char) -> bool {
    ('\u{40}'..='\u{7e}').contains(&c)
}

/// Lookup tables over a set of cataloged functions.
#[derive(Debug, Clone)]
pub struct Catalog {
    c0: HashMap<char, &'static Function>,
    c1: HashMap<char, &'static Function>,
    independent: HashMap<char, &'static Function>,
    strings: HashMap<char, &'static Function>,
    sequences: HashMap<&'static str, FunctionDescriptor>,
}

impl Catalog {
    /// Catalog of every function declared in this crate.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_functions(
            control::C0_FUNCTIONS
                .iter()
                .chain(control::C1_FUNCTIONS)
                .chain(independent::INDEPENDENT_FUNCTIONS)
                .chain(sequence::CONTROL_SEQUENCES)
                .chain(string::CONTROL_STRINGS),
        )
    }

    /// Catalog of the given functions only.
    ///
    /// Fails when a pattern is malformed or when two functions of one type
    /// share a code or a terminator.
    pub fn with_functions<I>(functions: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = &'static Function>,
    {
        let mut catalog = Self {
            c0: HashMap::new(),
            c1: HashMap::new(),
            independent: HashMap::new(),
            strings: HashMap::new(),
            sequences: HashMap::new(),
        };

        for function in functions {
            if function.function_type == FunctionType::ControlSequence {
                let descriptor = FunctionDescriptor::new(function)?;
                match catalog.sequences.entry(descriptor.terminator()) {
                    Entry::Occupied(entry) => {
                        return Err(ConfigError::ConflictingFunctions {
                            key: entry.key().to_string(),
                            first: entry.get().function.mnemonic,
                            second: function.mnemonic,
                        });
                    },
                    Entry::Vacant(entry) => {
                        entry.insert(descriptor);
                    },
                }
                continue;
            }

            let code = checked_code(function)?;
            let table = match function.function_type {
                FunctionType::C0 => &mut catalog.c0,
                FunctionType::C1 => &mut catalog.c1,
                FunctionType::Independent => &mut catalog.independent,
                FunctionType::ControlString => &mut catalog.strings,
                FunctionType::ControlSequence => continue,
            };

            if let Some(first) = table.insert(code, function) {
                return Err(ConfigError::ConflictingFunctions {
                    key: format!("{:?}", code),
                    first: first.mnemonic,
                    second: function.mnemonic,
                });
            }
        }

        Ok(catalog)
    }

    pub fn c0(&self, code: char) -> Option<&'static Function> {
        self.c0.get(&code).copied()
    }

    /// C1 function by its 8-bit code point.
    pub fn c1(&self, code: char) -> Option<&'static Function> {
        self.c1.get(&code).copied()
    }

    /// Independent function by the designator following `ESC`.
    pub fn independent(&self, designator: char) -> Option<&'static Function> {
        self.independent.get(&designator).copied()
    }

    /// Control string by the 8-bit code point of its opening delimiter.
    pub fn control_string(&self, code: char) -> Option<&'static Function> {
        self.strings.get(&code).copied()
    }

    /// Control sequence by its terminator, e.g. `"m"` or `" @"`.
    pub fn sequence(&self, terminator: &str) -> Option<&FunctionDescriptor> {
        self.sequences.get(terminator)
    }

    pub fn sequences(&self) -> impl Iterator<Item = &FunctionDescriptor> {
        self.sequences.values()
    }
}

fn checked_code(function: &'static Function) -> Result<char, ConfigError> {
    let invalid = |message| ConfigError::InvalidPattern {
        mnemonic: function.mnemonic,
        pattern: function.pattern,
        message,
    };

    let code = function.code().ok_or_else(|| invalid("missing code"))?;
    let in_range = match function.function_type {
        FunctionType::C0 => code < '\u{20}',
        FunctionType::C1 | FunctionType::ControlString => {
            ('\u{80}'..='\u{9f}').contains(&code)
        },
        FunctionType::Independent => {
            ('\u{30}'..='\u{3f}').contains(&code)
                || ('\u{60}'..='\u{7e}').contains(&code)
        },
        FunctionType::ControlSequence => false,
    };

    if in_range {
        Ok(code)
    } else {
        Err(invalid("code outside of the range of its function type"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_builds() {
        let catalog = Catalog::new().expect("catalog");

        assert_eq!(catalog.c0('\u{07}'), Some(&control::BEL));
        assert_eq!(catalog.c1('\u{9b}'), Some(&control::CSI));
        assert_eq!(catalog.independent('c'), Some(&independent::RIS));
        assert_eq!(catalog.control_string('\u{9d}'), Some(&string::OSC));
        assert_eq!(
            catalog.sequence("m").map(FunctionDescriptor::function),
            Some(&sequence::SGR)
        );
        assert_eq!(
            catalog.sequence(" @").map(FunctionDescriptor::function),
            Some(&sequence::SL)
        );
        assert_eq!(
            catalog.sequences().count(),
            sequence::CONTROL_SEQUENCES.len()
        );
    }

    #[test]
    fn tokenize_patterns() {
        let cases = vec![
            (
                "{m}m",
                vec![Code::Placeholder(Placeholder::Multiple), Code::Literal("m")],
            ),
            (
                "{s};{s}H",
                vec![
                    Code::Placeholder(Placeholder::Single),
                    Code::Literal(";"),
                    Code::Placeholder(Placeholder::Single),
                    Code::Literal("H"),
                ],
            ),
            (
                "{s} @",
                vec![Code::Placeholder(Placeholder::Single), Code::Literal(" @")],
            ),
            ("s", vec![Code::Literal("s")]),
            (
                "\u{9a}{c}",
                vec![
                    Code::Literal("\u{9a}"),
                    Code::Placeholder(Placeholder::Character),
                ],
            ),
        ];

        for (pattern, expected) in cases {
            assert_eq!(tokenize(pattern), Ok(expected), "pattern {pattern:?}");
        }
    }

    #[test]
    fn tokenize_rejects_malformed_placeholders() {
        assert_eq!(tokenize("{x}m"), Err("unknown placeholder"));
        assert_eq!(tokenize("{sm"), Err("unclosed placeholder"));
    }

    #[test]
    fn descriptor_exposes_placeholders_and_terminator() {
        let descriptor =
            FunctionDescriptor::new(&sequence::CUP).expect("descriptor");

        assert_eq!(
            descriptor.placeholders(),
            &[Placeholder::Single, Placeholder::Single]
        );
        assert_eq!(descriptor.terminator(), "H");
        assert_eq!(descriptor.codes().len(), 4);
    }

    #[test]
    fn descriptor_rejects_missing_final_byte() {
        const BROKEN: Function = Function::new(
            "BRK",
            "BROKEN",
            FunctionType::ControlSequence,
            "{s}",
            &[],
        );

        assert!(matches!(
            FunctionDescriptor::new(&BROKEN),
            Err(ConfigError::InvalidPattern { mnemonic: "BRK", .. })
        ));
    }

    #[test]
    fn conflicting_terminators_are_rejected() {
        const SHADOW: Function = Function::new(
            "SHD",
            "SHADOW",
            FunctionType::ControlSequence,
            "{m}m",
            &[],
        );

        let err = Catalog::with_functions([&sequence::SGR, &SHADOW])
            .expect_err("conflict");
        assert!(matches!(
            err,
            ConfigError::ConflictingFunctions {
                first: "SGR",
                second: "SHD",
                ..
            }
        ));
    }
}
