use memchr::memchr3_iter;

use super::{FunctionHandler, HandlerContext, introducer_len};
use crate::arguments::{ArgumentValue, FunctionArgument};
use crate::catalog::string::OSC;
use crate::error::{FailureReason, Result};
use crate::finder::FindResult;
use crate::fragment::FunctionFragment;
use crate::function::FunctionType;

const ESC: u8 = 0x1b;
const BEL: u8 = 0x07;
/// Lead byte of U+009C (ST) in UTF-8.
const ST_LEAD: u8 = 0xc2;
const ST_TRAIL: u8 = 0x9c;

/// Handles `DCS`, `SOS`, `OSC`, `PM` and `APC`.
///
/// The command string runs up to the first `ST`, written as `ESC \` or
/// U+009C. `OSC` is also terminated by BEL. The command string is the only
/// argument of the fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlStringHandler;

impl FunctionHandler for ControlStringHandler {
    fn function_type(&self) -> FunctionType {
        FunctionType::ControlString
    }

    fn handle(
        &self,
        context: &HandlerContext<'_>,
        text: &str,
        found: &FindResult,
    ) -> Result<FunctionFragment> {
        let index = found.function_index;
        let no_end = || context.failure(FailureReason::NoEndOfFunction, index);
        let start = index + introducer_len(text, index).ok_or_else(no_end)?;
        let (command_end, terminator_len) =
            find_terminator(&text.as_bytes()[start..], *found.function == OSC)
                .map(|(position, len)| (start + position, len))
                .ok_or_else(no_end)?;

        let command = text[start..command_end].to_string();
        let arguments =
            vec![FunctionArgument::explicit(ArgumentValue::Text(command))];

        Ok(context.fragment(
            text,
            found,
            command_end + terminator_len,
            Some(arguments),
        ))
    }
}

/// Position and length of the first string terminator.
fn find_terminator(bytes: &[u8], accept_bel: bool) -> Option<(usize, usize)> {
    memchr3_iter(ESC, BEL, ST_LEAD, bytes).find_map(|position| {
        match (bytes[position], bytes.get(position + 1)) {
            (ESC, Some(&b'\\')) => Some((position, 2)),
            (ST_LEAD, Some(&ST_TRAIL)) => Some((position, 2)),
            (BEL, _) if accept_bel => Some((position, 1)),
            _ => None,
        }
    })
}
