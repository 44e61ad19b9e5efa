//! Positional arguments of control sequences.

use std::fmt;

use crate::error::{ParseError, Result};
use crate::function::{DefaultValue, Function};

/// Value of a single argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgumentValue {
    Int(u32),
    /// Non-numeric parameter text such as the private `?25`, or the
    /// command string of a control string.
    Text(String),
    /// The default depends on state outside of the engine.
    Contextual,
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Contextual => f.write_str("<contextual>"),
        }
    }
}

/// A resolved argument of a function fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionArgument {
    value: ArgumentValue,
    is_default: bool,
}

impl FunctionArgument {
    pub fn explicit(value: ArgumentValue) -> Self {
        Self {
            value,
            is_default: false,
        }
    }

    pub fn defaulted(value: ArgumentValue) -> Self {
        Self {
            value,
            is_default: true,
        }
    }

    pub fn value(&self) -> &ArgumentValue {
        &self.value
    }

    /// Whether the value was substituted for an omitted parameter.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn as_int(&self) -> Option<u32> {
        match self.value {
            ArgumentValue::Int(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            ArgumentValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Split parameter text on `;`.
///
/// Returns `None` for an empty text. Omitted parameters are `None` entries,
/// so the result always holds one entry more than there are separators.
pub fn split_arguments(text: &str) -> Option<Vec<Option<&str>>> {
    if text.is_empty() {
        return None;
    }

    Some(
        text.split(';')
            .map(|value| (!value.is_empty()).then_some(value))
            .collect(),
    )
}

/// Resolve the parameter text of `function` into typed arguments.
///
/// Omitted parameters take the default declared at their position. An
/// omitted parameter without a usable default is a fatal
/// [`ParseError::MissingDefault`].
pub fn parse_arguments(
    function: &Function,
    text: &str,
) -> Result<Option<Vec<FunctionArgument>>> {
    let Some(values) = split_arguments(text) else {
        return Ok(first_default(function).map(|argument| vec![argument]));
    };

    values
        .into_iter()
        .enumerate()
        .map(|(position, value)| match value {
            Some(value) => Ok(FunctionArgument::explicit(parse_value(value))),
            None => default_argument(function, position),
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn first_default(function: &Function) -> Option<FunctionArgument> {
    match function.default_at(0)? {
        DefaultValue::Int(value) => {
            Some(FunctionArgument::defaulted(ArgumentValue::Int(value)))
        },
        DefaultValue::Contextual => {
            Some(FunctionArgument::defaulted(ArgumentValue::Contextual))
        },
        DefaultValue::Required => None,
    }
}

fn default_argument(
    function: &Function,
    position: usize,
) -> Result<FunctionArgument> {
    let value = match function.default_at(position) {
        Some(DefaultValue::Int(value)) => ArgumentValue::Int(value),
        Some(DefaultValue::Contextual) => ArgumentValue::Contextual,
        Some(DefaultValue::Required) | None => {
            return Err(ParseError::MissingDefault {
                mnemonic: function.mnemonic,
                position,
            });
        },
    };

    Ok(FunctionArgument::defaulted(value))
}

fn parse_value(value: &str) -> ArgumentValue {
    match parse_number(value) {
        Some(number) => ArgumentValue::Int(number),
        None => ArgumentValue::Text(value.to_string()),
    }
}

/// Decimal value of an all-digit text, saturating at `u32::MAX`.
pub(crate) fn parse_number(input: &str) -> Option<u32> {
    if input.is_empty() {
        return None;
    }

    input.bytes().try_fold(0u32, |acc, b| {
        let digit = (b as char).to_digit(10)?;
        Some(acc.saturating_mul(10).saturating_add(digit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sequence;
    use crate::function::FunctionType;

    fn int(value: u32) -> FunctionArgument {
        FunctionArgument::explicit(ArgumentValue::Int(value))
    }

    fn default_int(value: u32) -> FunctionArgument {
        FunctionArgument::defaulted(ArgumentValue::Int(value))
    }

    #[test]
    fn split_on_separators() {
        let cases = vec![
            ("", None),
            ("20", Some(vec![Some("20")])),
            ("20;30", Some(vec![Some("20"), Some("30")])),
            (";20;30", Some(vec![None, Some("20"), Some("30")])),
            ("20;;30;", Some(vec![Some("20"), None, Some("30"), None])),
            (";", Some(vec![None, None])),
            ("?25", Some(vec![Some("?25")])),
        ];

        for (text, expected) in cases {
            assert_eq!(split_arguments(text), expected, "text {text:?}");
        }
    }

    #[test]
    fn split_keeps_one_entry_per_position() {
        let cases = vec!["1", "1;2", ";;", "1;;;4", "38;5;196"];

        for text in cases {
            let separators = text.matches(';').count();
            let values = split_arguments(text).expect("values");
            assert_eq!(values.len(), separators + 1, "text {text:?}");
        }
    }

    #[test]
    fn parse_numbers() {
        assert_eq!(parse_number("0"), Some(0));
        assert_eq!(parse_number("0042"), Some(42));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("1abc"), None);
        assert_eq!(parse_number("\u{0663}"), None);
    }

    #[test]
    fn parse_number_saturates() {
        assert_eq!(parse_number("4294967295"), Some(u32::MAX));
        assert_eq!(parse_number("4294967296"), Some(u32::MAX));
        assert_eq!(parse_number("99999999999999999999"), Some(u32::MAX));
    }

    #[test]
    fn explicit_and_omitted_arguments() {
        let cases = vec![
            (&sequence::SGR, "1;31", Some(vec![int(1), int(31)])),
            (
                &sequence::SGR,
                ";31;",
                Some(vec![default_int(0), int(31), default_int(0)]),
            ),
            (&sequence::CUP, ";7", Some(vec![default_int(1), int(7)])),
            (&sequence::CUP, "3;", Some(vec![int(3), default_int(1)])),
            (
                &sequence::SM,
                "?25",
                Some(vec![FunctionArgument::explicit(ArgumentValue::Text(
                    "?25".to_string(),
                ))]),
            ),
        ];

        for (function, text, expected) in cases {
            assert_eq!(
                parse_arguments(function, text),
                Ok(expected),
                "{function} {text:?}"
            );
        }
    }

    #[test]
    fn empty_text_uses_the_first_default() {
        let cases = vec![
            (&sequence::SGR, Some(vec![default_int(0)])),
            (&sequence::CUP, Some(vec![default_int(1)])),
            (&sequence::SCOSC, None),
            (&sequence::SM, None),
            (&sequence::TCC, None),
        ];

        for (function, expected) in cases {
            assert_eq!(parse_arguments(function, ""), Ok(expected), "{function}");
        }
    }

    #[test]
    fn contextual_defaults() {
        let arguments = parse_arguments(&sequence::DECSTBM, "5;")
            .expect("arguments")
            .expect("some");

        assert_eq!(arguments[0], int(5));
        assert_eq!(
            arguments[1],
            FunctionArgument::defaulted(ArgumentValue::Contextual)
        );
        assert_eq!(arguments[1].as_int(), None);
    }

    #[test]
    fn omitted_without_default_is_fatal() {
        const NO_DEFAULTS: Function = Function::new(
            "NOD",
            "NO DEFAULTS",
            FunctionType::ControlSequence,
            "{s};{s}x",
            &[],
        );

        let cases = vec![
            (&NO_DEFAULTS, ";1", 0),
            (&sequence::CUP, "1;2;", 2),
            (&sequence::TCC, ";32", 0),
            (&sequence::SM, "4;", 1),
        ];

        for (function, text, position) in cases {
            let err = parse_arguments(function, text).expect_err("fatal");
            assert_eq!(
                err,
                ParseError::MissingDefault {
                    mnemonic: function.mnemonic,
                    position,
                }
            );
            assert!(err.is_fatal());
        }
    }
}
