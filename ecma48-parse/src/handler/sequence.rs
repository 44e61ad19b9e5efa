use log::trace;

use super::{FunctionHandler, HandlerContext, introducer_len};
use crate::arguments::parse_arguments;
use crate::error::{FailureReason, Result};
use crate::finder::FindResult;
use crate::fragment::FunctionFragment;
use crate::function::FunctionType;
use crate::matcher::Matcher;

/// Handles `CSI P..P I..I F`, in either introducer form.
///
/// The fragment spans the introducer through the final byte and reports the
/// matched function, not `CSI`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlSequenceHandler;

impl FunctionHandler for ControlSequenceHandler {
    fn function_type(&self) -> FunctionType {
        FunctionType::ControlSequence
    }

    fn handle(
        &self,
        context: &HandlerContext<'_>,
        text: &str,
        found: &FindResult,
    ) -> Result<FunctionFragment> {
        let index = found.function_index;
        let start = index
            + introducer_len(text, index).ok_or_else(|| {
                context.failure(FailureReason::NoEndOfFunction, index)
            })?;

        let found_match = Matcher::new(context.catalog)
            .find_match(start, text)
            .map_err(|reason| context.failure(reason, index))?;
        let function = found_match.descriptor.function();
        let arguments =
            parse_arguments(function, &text[found_match.parameters.clone()])?;

        trace!(
            "control sequence {function} at {}: {:?}",
            context.offset + index,
            &text[found_match.parameters]
        );

        Ok(FunctionFragment {
            text: text[index..found_match.end].to_string(),
            offset: context.offset + index,
            function,
            arguments,
        })
    }
}
