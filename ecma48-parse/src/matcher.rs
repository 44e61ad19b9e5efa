//! Identification of control sequences by their terminator.

use std::ops::Range;

use crate::catalog::{
    Catalog, FunctionDescriptor, is_final_byte, is_intermediate_byte,
    is_parameter_byte,
};
use crate::error::FailureReason;

/// A control sequence located in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceMatch<'a> {
    pub descriptor: &'a FunctionDescriptor,
    /// Byte range of the parameter text, without intermediate bytes.
    pub parameters: Range<usize>,
    /// Byte index right after the final byte.
    pub end: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    catalog: &'a Catalog,
}

impl<'a> Matcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Match the control sequence whose parameter bytes start at
    /// `start_index`, right after the introducer.
    pub fn find_match(
        &self,
        start_index: usize,
        text: &str,
    ) -> Result<SequenceMatch<'a>, FailureReason> {
        let rest = text
            .get(start_index..)
            .ok_or(FailureReason::NoEndOfFunction)?;

        let parameters_len =
            rest.find(|c| !is_parameter_byte(c)).unwrap_or(rest.len());
        let after_parameters = &rest[parameters_len..];
        let intermediates_len = after_parameters
            .find(|c| !is_intermediate_byte(c))
            .unwrap_or(after_parameters.len());

        let terminator_start = start_index + parameters_len;
        let final_start = terminator_start + intermediates_len;
        let final_byte = text[final_start..]
            .chars()
            .next()
            .ok_or(FailureReason::NoEndOfFunction)?;

        if !is_final_byte(final_byte) {
            return Err(FailureReason::UnknownFunction);
        }

        // Final bytes are ASCII.
        let end = final_start + 1;
        let descriptor = self
            .catalog
            .sequence(&text[terminator_start..end])
            .ok_or(FailureReason::UnknownFunction)?;

        Ok(SequenceMatch {
            descriptor,
            parameters: start_index..terminator_start,
            end,
        })
    }
}
