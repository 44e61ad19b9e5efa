//! Typed spans of a parsed text.

use std::ops::Range;

use crate::arguments::FunctionArgument;
use crate::function::Function;

/// A contiguous span of plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub text: String,
    /// Byte position of the span in the whole stream.
    pub offset: usize,
}

/// A recognized control function and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionFragment {
    pub text: String,
    /// Byte position of the span in the whole stream.
    pub offset: usize,
    pub function: &'static Function,
    /// `None` when the function takes no arguments.
    pub arguments: Option<Vec<FunctionArgument>>,
}

impl FunctionFragment {
    pub fn arguments(&self) -> &[FunctionArgument] {
        self.arguments.as_deref().unwrap_or_default()
    }

    /// Whether this fragment is an occurrence of `function`.
    pub fn is(&self, function: &Function) -> bool {
        self.function == function
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(TextFragment),
    Function(FunctionFragment),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(fragment) => &fragment.text,
            Self::Function(fragment) => &fragment.text,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            Self::Text(fragment) => fragment.offset,
            Self::Function(fragment) => fragment.offset,
        }
    }

    /// Byte range covered in the whole stream.
    pub fn span(&self) -> Range<usize> {
        let offset = self.offset();
        offset..offset + self.text().len()
    }

    pub fn as_function(&self) -> Option<&FunctionFragment> {
        match self {
            Self::Function(fragment) => Some(fragment),
            Self::Text(_) => None,
        }
    }
}

impl From<TextFragment> for Fragment {
    fn from(fragment: TextFragment) -> Self {
        Self::Text(fragment)
    }
}

impl From<FunctionFragment> for Fragment {
    fn from(fragment: FunctionFragment) -> Self {
        Self::Function(fragment)
    }
}
