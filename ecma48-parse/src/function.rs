//! Identity of the control functions the engine can recognize.
//!
//! Every [`Function`] is `'static` data declared in one of the
//! [`catalog`](crate::catalog) tables. A function is identified by its
//! pattern: literal characters interleaved with placeholders.
//!
//! | placeholder | meaning                           |
//! |-------------|-----------------------------------|
//! | `{s}`       | a single numeric parameter        |
//! | `{m}`       | any number of numeric parameters  |
//! | `{c}`       | a single character                |
//! | `{t}`       | free text (command strings)       |

use std::fmt;

/// ESC, the 7-bit prefix of C1, independent and control string functions.
pub const ESC: char = '\u{1b}';

/// Family of a control function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FunctionType {
    /// C0 control codes, U+0000..U+001F.
    C0,
    /// C1 control codes, U+0080..U+009F or `ESC Fe` in a 7-bit environment.
    C1,
    /// `CSI P..P I..I F`.
    ControlSequence,
    /// `ESC Fs`, plus the private `ESC Fp` forms.
    Independent,
    /// Opening delimiter, command string and `ST`.
    ControlString,
}

impl FunctionType {
    pub const ALL: [FunctionType; 5] = [
        FunctionType::C0,
        FunctionType::C1,
        FunctionType::ControlSequence,
        FunctionType::Independent,
        FunctionType::ControlString,
    ];
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::C0 => "C0",
            Self::C1 => "C1",
            Self::ControlSequence => "control sequence",
            Self::Independent => "independent",
            Self::ControlString => "control string",
        };

        f.write_str(name)
    }
}

/// Encoding of C1 control functions in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// C1 functions are written as `ESC` followed by U+0040..U+005F.
    #[default]
    SevenBit,
    /// C1 functions occupy the single code points U+0080..U+009F.
    EightBit,
}

/// Default of one positional parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultValue {
    Int(u32),
    /// A default exists but depends on state the engine does not know,
    /// e.g. the page height for the bottom margin of `DECSTBM`.
    Contextual,
    /// The parameter has no default and must be given.
    Required,
}

/// A recognizable control function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Function {
    /// Short name, e.g. `SGR`.
    pub mnemonic: &'static str,
    /// Full name, e.g. `SELECT GRAPHIC RENDITION`.
    pub name: &'static str,
    pub function_type: FunctionType,
    /// Pattern in its 8-bit form. Control sequence patterns start after
    /// the introducer.
    pub pattern: &'static str,
    /// Defaults by parameter position; empty when the function declares
    /// none.
    pub defaults: &'static [DefaultValue],
}

impl Function {
    pub const fn new(
        mnemonic: &'static str,
        name: &'static str,
        function_type: FunctionType,
        pattern: &'static str,
        defaults: &'static [DefaultValue],
    ) -> Self {
        Self {
            mnemonic,
            name,
            function_type,
            pattern,
            defaults,
        }
    }

    /// The code point identifying the function inside its catalog.
    ///
    /// C0, C1 and control string functions are identified by their 8-bit
    /// code, independent functions by the designator following `ESC`.
    /// Control sequences are identified by their terminator instead, see
    /// [`FunctionDescriptor`](crate::FunctionDescriptor).
    pub fn code(&self) -> Option<char> {
        let mut chars = self.pattern.chars();
        match self.function_type {
            FunctionType::Independent => {
                chars.next().filter(|&c| c == ESC)?;
                chars.next()
            },
            FunctionType::ControlSequence => None,
            _ => chars.next(),
        }
    }

    /// Whether the pattern accepts any number of parameters.
    pub fn is_variadic(&self) -> bool {
        self.pattern.contains("{m}")
    }

    /// Default of the parameter at `position`.
    ///
    /// Variadic functions reuse their last default for every position past
    /// the declared ones.
    pub fn default_at(&self, position: usize) -> Option<DefaultValue> {
        match self.defaults.get(position) {
            Some(value) => Some(*value),
            None if self.is_variadic() => self.defaults.last().copied(),
            None => None,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{control, independent, sequence};

    #[test]
    fn code_of_each_family() {
        assert_eq!(control::BEL.code(), Some('\u{07}'));
        assert_eq!(control::NEL.code(), Some('\u{85}'));
        assert_eq!(independent::RIS.code(), Some('c'));
        assert_eq!(sequence::SGR.code(), None);
    }

    #[test]
    fn variadic_defaults_extend_to_later_positions() {
        assert!(sequence::SGR.is_variadic());
        assert_eq!(sequence::SGR.default_at(0), Some(DefaultValue::Int(0)));
        assert_eq!(sequence::SGR.default_at(7), Some(DefaultValue::Int(0)));

        assert!(!sequence::CUP.is_variadic());
        assert_eq!(sequence::CUP.default_at(1), Some(DefaultValue::Int(1)));
        assert_eq!(sequence::CUP.default_at(2), None);
    }

    #[test]
    fn functions_without_defaults() {
        assert_eq!(sequence::SM.default_at(0), None);
        assert_eq!(
            sequence::DECSTBM.default_at(1),
            Some(DefaultValue::Contextual)
        );
    }
}
