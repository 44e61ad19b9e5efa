//! Consumer interface of the fragment loop.
//!
//! [`Parser::advance`](crate::Parser::advance) walks a text and relays every
//! fragment to a [`FragmentActor`]. Both methods have an empty default so
//! consumers only override what they care about.

use crate::fragment::{Fragment, FunctionFragment, TextFragment};

pub trait FragmentActor {
    /// Plain text between functions.
    fn text(&mut self, _: TextFragment) {}

    /// A complete control function.
    fn function(&mut self, _: FunctionFragment) {}
}

/// Collects fragments in stream order.
impl FragmentActor for Vec<Fragment> {
    fn text(&mut self, fragment: TextFragment) {
        self.push(Fragment::Text(fragment));
    }

    fn function(&mut self, fragment: FunctionFragment) {
        self.push(Fragment::Function(fragment));
    }
}
