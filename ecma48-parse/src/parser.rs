use std::fmt;

use log::{debug, trace};

use crate::actor::FragmentActor;
use crate::catalog::Catalog;
use crate::catalog::string::OSC;
use crate::error::{ConfigError, FailureReason, ParseError, Result};
use crate::finder::{FindResult, Finder};
use crate::fragment::{Fragment, FunctionFragment};
use crate::function::{Environment, FunctionType};
use crate::handler::{
    FunctionHandler, HandlerContext, HandlerTable, PlainTextHandler,
    TextHandler, introducer_len, standard_handlers,
};

/// What the fragment loop does with an introducer that cannot be turned
/// into a function fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmatchedPolicy {
    /// Keep the introducer as part of the surrounding text.
    #[default]
    Text,
    /// Drop the introducer. The fragments no longer cover the input.
    Skip,
    /// Stop and return the failure.
    Abort,
}

/// Construction parameters of a [`Parser`].
pub struct ParserConfig {
    pub environment: Environment,
    /// Exactly one handler per function type.
    pub handlers: Vec<Box<dyn FunctionHandler>>,
    pub text_handler: Box<dyn TextHandler>,
    pub unmatched: UnmatchedPolicy,
}

impl ParserConfig {
    /// Standard handlers for the given environment.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            handlers: standard_handlers(),
            text_handler: Box::new(PlainTextHandler),
            unmatched: UnmatchedPolicy::default(),
        }
    }

    pub fn with_unmatched(mut self, unmatched: UnmatchedPolicy) -> Self {
        self.unmatched = unmatched;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}

/// Splits text into text and function fragments.
///
/// A parser is immutable once built; scan positions live in the
/// [`Fragments`] iterator returned by [`Parser::parse`].
pub struct Parser {
    catalog: Catalog,
    environment: Environment,
    handlers: HandlerTable,
    text_handler: Box<dyn TextHandler>,
    unmatched: UnmatchedPolicy,
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("environment", &self.environment)
            .field("handlers", &self.handlers)
            .field("unmatched", &self.unmatched)
            .finish_non_exhaustive()
    }
}

impl Parser {
    pub fn new(config: ParserConfig) -> std::result::Result<Self, ConfigError> {
        Self::with_catalog(config, Catalog::new()?)
    }

    /// Parser recognizing only the functions of `catalog`.
    pub fn with_catalog(
        config: ParserConfig,
        catalog: Catalog,
    ) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            catalog,
            environment: config.environment,
            handlers: HandlerTable::new(config.handlers)?,
            text_handler: config.text_handler,
            unmatched: config.unmatched,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Next introducer at or after `from_index`.
    pub fn find(&self, from_index: usize, text: &str) -> Option<FindResult> {
        Finder::new(&self.catalog, self.environment).find(from_index, text)
    }

    /// Complete the function found in `text`, where `offset` is the position
    /// of `text` in the whole stream.
    pub fn handle(
        &self,
        text: &str,
        offset: usize,
        found: &FindResult,
    ) -> Result<FunctionFragment> {
        let context = HandlerContext {
            catalog: &self.catalog,
            offset,
        };

        match self.handlers.get(found.function_type) {
            Some(handler) => handler.handle(&context, text, found),
            None => Err(context.failure(
                FailureReason::UnknownFunction,
                found.function_index,
            )),
        }
    }

    /// Fragments of `text`, which starts the stream.
    pub fn parse<'p, 't>(&'p self, text: &'t str) -> Fragments<'p, 't> {
        self.parse_at(text, 0)
    }

    /// Fragments of `text`, which starts at `offset` in the stream.
    pub fn parse_at<'p, 't>(
        &'p self,
        text: &'t str,
        offset: usize,
    ) -> Fragments<'p, 't> {
        Fragments {
            parser: self,
            text,
            offset,
            position: 0,
            search_from: 0,
            unterminated: Unterminated::default(),
            pending: None,
            done: false,
        }
    }

    /// Relay every fragment of `text` to `actor`.
    ///
    /// Stops at the first error; fragments before it have been delivered.
    pub fn advance<A: FragmentActor>(
        &self,
        text: &str,
        actor: &mut A,
    ) -> Result<()> {
        for fragment in self.parse(text) {
            match fragment? {
                Fragment::Text(fragment) => actor.text(fragment),
                Fragment::Function(fragment) => actor.function(fragment),
            }
        }

        Ok(())
    }
}

/// Positions of control string openers whose terminator search reached the
/// end of the text.
///
/// A later opener searches a suffix of the same text for the same or fewer
/// terminators, so it fails too and is rejected without another search.
#[derive(Debug, Clone, Copy, Default)]
struct Unterminated {
    /// No `ST` follows.
    st: Option<usize>,
    /// Neither `ST` nor BEL follows.
    st_or_bel: Option<usize>,
}

impl Unterminated {
    fn cutoff(&self, found: &FindResult) -> Option<usize> {
        if *found.function == OSC {
            self.st_or_bel
        } else {
            self.st
        }
    }

    fn is_known(&self, found: &FindResult) -> bool {
        found.function_type == FunctionType::ControlString
            && self
                .cutoff(found)
                .is_some_and(|cutoff| found.function_index > cutoff)
    }

    fn record(&mut self, found: &FindResult) {
        if found.function_type != FunctionType::ControlString {
            return;
        }

        let index = Some(found.function_index);
        self.st = self.st.or(index);
        if *found.function == OSC {
            self.st_or_bel = self.st_or_bel.or(index);
        }
    }
}

/// Iterator over the fragments of one text.
///
/// Text fragments are emitted for the runs between functions; consecutive
/// fragments are contiguous unless [`UnmatchedPolicy::Skip`] dropped an
/// introducer between them. Iteration ends after the first error.
#[derive(Debug)]
pub struct Fragments<'p, 't> {
    parser: &'p Parser,
    text: &'t str,
    offset: usize,
    /// Start of the pending text run.
    position: usize,
    search_from: usize,
    unterminated: Unterminated,
    /// Delivered after the text run preceding it.
    pending: Option<Result<Fragment>>,
    done: bool,
}

impl Fragments<'_, '_> {
    /// Text fragment for `position..end`, if that run is not empty.
    fn take_text(&mut self, end: usize) -> Option<Fragment> {
        let start = std::mem::replace(&mut self.position, end);
        if start >= end {
            return None;
        }

        let fragment = self
            .parser
            .text_handler
            .handle(&self.text[start..end], self.offset + start);
        trace!("text fragment at {}", fragment.offset);
        Some(Fragment::Text(fragment))
    }

    /// End the iteration with `err`, after the text run before `index`.
    fn fail(
        &mut self,
        index: usize,
        err: ParseError,
    ) -> Option<Result<Fragment>> {
        self.done = true;
        match self.take_text(index) {
            Some(text) => {
                self.pending = Some(Err(err));
                Some(Ok(text))
            },
            None => Some(Err(err)),
        }
    }
}

impl Iterator for Fragments<'_, '_> {
    type Item = Result<Fragment>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pending) = self.pending.take() {
            return Some(pending);
        }

        while !self.done {
            let Some(found) = self.parser.find(self.search_from, self.text)
            else {
                self.done = true;
                return self.take_text(self.text.len()).map(Ok);
            };

            let index = found.function_index;
            let handled = if self.unterminated.is_known(&found) {
                Err(ParseError::failure(
                    FailureReason::NoEndOfFunction,
                    self.offset + index,
                ))
            } else {
                self.parser.handle(self.text, self.offset, &found)
            };

            let err = match handled {
                Ok(fragment) => {
                    trace!(
                        "function fragment {} at {}",
                        fragment.function, fragment.offset
                    );
                    self.search_from = index + fragment.text.len();
                    let text = self.take_text(index);
                    self.position = self.search_from;

                    let fragment = Fragment::Function(fragment);
                    return match text {
                        Some(text) => {
                            self.pending = Some(Ok(fragment));
                            Some(Ok(text))
                        },
                        None => Some(Ok(fragment)),
                    };
                },
                Err(err) if err.is_fatal() => return self.fail(index, err),
                Err(err) => err,
            };

            if err.reason() == Some(FailureReason::NoEndOfFunction) {
                self.unterminated.record(&found);
            }

            debug!("unmatched {}: {err}", found.function);
            let introducer = introducer_len(self.text, index).unwrap_or(1);

            match self.parser.unmatched {
                UnmatchedPolicy::Abort => return self.fail(index, err),
                UnmatchedPolicy::Text => {
                    // Rescan right after the first character of the
                    // introducer; the failed span stays in the text run.
                    self.search_from = index
                        + self.text[index..]
                            .chars()
                            .next()
                            .map_or(1, char::len_utf8);
                },
                UnmatchedPolicy::Skip => {
                    self.search_from = index + introducer;
                    let text = self.take_text(index);
                    self.position = self.search_from;
                    if text.is_some() {
                        return text.map(Ok);
                    }
                },
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::arguments::{ArgumentValue, FunctionArgument};
    use crate::catalog::{control, independent, sequence, string};
    use crate::handler::ControlStringHandler;
    use crate::fragment::TextFragment;
    use crate::function::Function;

    fn parser(environment: Environment, unmatched: UnmatchedPolicy) -> Parser {
        Parser::new(ParserConfig::new(environment).with_unmatched(unmatched))
            .expect("parser")
    }

    fn fragments(parser: &Parser, text: &str) -> Vec<Fragment> {
        parser
            .parse(text)
            .collect::<Result<Vec<_>>>()
            .expect("fragments")
    }

    /// Text of text fragments, mnemonic of function fragments.
    fn outline(fragments: &[Fragment]) -> Vec<String> {
        fragments
            .iter()
            .map(|fragment| match fragment {
                Fragment::Text(text) => text.text.clone(),
                Fragment::Function(function) => {
                    format!("<{}>", function.function.mnemonic)
                },
            })
            .collect()
    }

    #[test]
    fn text_without_functions_is_one_fragment() {
        let parser = Parser::new(ParserConfig::default()).expect("parser");
        let cases = vec!["plain", "caf\u{e9} [31m", "\u{85} is text in 7-bit"];

        for text in cases {
            assert_eq!(parser.find(0, text), None);
            assert_eq!(
                fragments(&parser, text),
                vec![Fragment::Text(TextFragment {
                    text: text.to_string(),
                    offset: 0,
                })]
            );
        }
    }

    #[test]
    fn empty_text_has_no_fragments() {
        let parser = Parser::new(ParserConfig::default()).expect("parser");
        assert!(fragments(&parser, "").is_empty());
    }

    #[test]
    fn split_mixed_stream() {
        let parser = Parser::new(ParserConfig::default()).expect("parser");
        let text = "\x1b[1mbold\x1b[22m\r\nnext\x1b]0;t\x07\x1bcend\x07";

        assert_eq!(
            outline(&fragments(&parser, text)),
            vec![
                "<SGR>", "bold", "<SGR>", "<CR>", "<LF>", "next", "<OSC>",
                "<RIS>", "end", "<BEL>",
            ]
        );
    }

    #[test]
    fn fragments_round_trip_to_the_source() {
        let parser = Parser::new(ParserConfig::default()).expect("parser");
        let cases = vec![
            "Some bold text \x1b[22m some normal text",
            "\u{2603}\x1b[38;5;196m\u{e9}\x1b[0m\x1bP1$r\x1b\\\x07",
            "\x1b[1y unknown \x1b[ unterminated",
            "tail\x1b",
        ];

        for text in cases {
            let fragments = fragments(&parser, text);
            let mut position = 0;
            for fragment in &fragments {
                assert_eq!(fragment.offset(), position, "text {text:?}");
                assert_eq!(&text[fragment.span()], fragment.text());
                position = fragment.span().end;
            }
            assert_eq!(position, text.len(), "text {text:?}");
        }
    }

    #[test]
    fn offsets_are_relative_to_the_stream() {
        let parser = Parser::new(ParserConfig::default()).expect("parser");
        let fragments = parser
            .parse_at("ab\x07", 40)
            .collect::<Result<Vec<_>>>()
            .expect("fragments");

        assert_eq!(fragments[0].span(), 40..42);
        assert_eq!(fragments[1].span(), 42..43);
    }

    #[test]
    fn seven_and_eight_bit_forms_are_equivalent() {
        let seven = parser(Environment::SevenBit, UnmatchedPolicy::Text);
        let eight = parser(Environment::EightBit, UnmatchedPolicy::Text);

        let functions = |parser: &Parser, text: &str| -> Vec<(
            &'static Function,
            Option<Vec<FunctionArgument>>,
        )> {
            fragments(parser, text)
                .into_iter()
                .filter_map(|fragment| match fragment {
                    Fragment::Function(function) => {
                        Some((function.function, function.arguments))
                    },
                    Fragment::Text(_) => None,
                })
                .collect()
        };

        assert_eq!(
            functions(&seven, "a\x1b[4;1Hb\x1bEc\x1b]2;x\x1b\\"),
            functions(&eight, "a\u{9b}4;1Hb\u{85}c\u{9d}2;x\u{9c}")
        );
    }

    #[test]
    fn function_fragments_carry_arguments() {
        let parser = Parser::new(ParserConfig::default()).expect("parser");
        let fragments = fragments(&parser, "\x1b[?25l\x1b[;5H\x1b[s");
        let functions: Vec<&FunctionFragment> =
            fragments.iter().filter_map(Fragment::as_function).collect();

        assert!(functions[0].is(&sequence::RM));
        assert_eq!(
            functions[0].arguments(),
            &[FunctionArgument::explicit(ArgumentValue::Text(
                "?25".to_string()
            ))]
        );
        assert!(functions[1].is(&sequence::CUP));
        assert_eq!(
            functions[1].arguments(),
            &[
                FunctionArgument::defaulted(ArgumentValue::Int(1)),
                FunctionArgument::explicit(ArgumentValue::Int(5)),
            ]
        );
        assert!(functions[2].is(&sequence::SCOSC));
        assert_eq!(functions[2].arguments, None);
    }

    #[test]
    fn unmatched_introducers_follow_the_policy() {
        let text = "a\x1b[1yb";

        let as_text = parser(Environment::SevenBit, UnmatchedPolicy::Text);
        assert_eq!(outline(&fragments(&as_text, text)), vec![text]);

        let skip = parser(Environment::SevenBit, UnmatchedPolicy::Skip);
        assert_eq!(outline(&fragments(&skip, text)), vec!["a", "1yb"]);

        let abort = parser(Environment::SevenBit, UnmatchedPolicy::Abort);
        let result: Vec<_> = abort.parse(text).collect();
        assert_eq!(
            result,
            vec![
                Ok(Fragment::Text(TextFragment {
                    text: "a".to_string(),
                    offset: 0,
                })),
                Err(ParseError::UnknownFunction { index: 1 }),
            ]
        );
    }

    #[test]
    fn unterminated_string_becomes_text() {
        let parser = Parser::new(ParserConfig::default()).expect("parser");

        assert_eq!(
            outline(&fragments(&parser, "x\x1b]0;title\x1b[1m")),
            vec!["x\x1b]0;title", "<SGR>"]
        );
    }

    /// Control string handler counting its invocations.
    struct CountingStrings(Arc<AtomicUsize>);

    impl FunctionHandler for CountingStrings {
        fn function_type(&self) -> FunctionType {
            FunctionType::ControlString
        }

        fn handle(
            &self,
            context: &HandlerContext<'_>,
            text: &str,
            found: &FindResult,
        ) -> Result<FunctionFragment> {
            self.0.fetch_add(1, Ordering::Relaxed);
            ControlStringHandler.handle(context, text, found)
        }
    }

    fn counting_parser(
        environment: Environment,
    ) -> (Parser, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut config = ParserConfig::new(environment);
        config.handlers.retain(|handler| {
            handler.function_type() != FunctionType::ControlString
        });
        config
            .handlers
            .push(Box::new(CountingStrings(Arc::clone(&calls))));

        (Parser::new(config).expect("parser"), calls)
    }

    #[test]
    fn unterminated_strings_are_searched_once() {
        let cases = vec![
            (Environment::SevenBit, "\x1bP".repeat(2_000), 1),
            (Environment::EightBit, "\u{90}x".repeat(2_000), 1),
            // A failed DCS search says nothing about BEL.
            (Environment::SevenBit, "\x1bP\x1b]".repeat(1_000), 2),
            (Environment::SevenBit, "\x1b]\x1bP\x1b_".repeat(1_000), 1),
        ];

        for (environment, text, searches) in cases {
            let (parser, calls) = counting_parser(environment);

            assert_eq!(outline(&fragments(&parser, &text)), vec![text.clone()]);
            assert_eq!(calls.load(Ordering::Relaxed), searches);
        }
    }

    #[test]
    fn osc_after_unterminated_strings_still_ends_at_bel() {
        let (parser, calls) = counting_parser(Environment::SevenBit);
        let text = format!("{}\x1b]0;t\x07x", "\x1bPq".repeat(100));

        assert_eq!(
            outline(&fragments(&parser, &text)),
            vec!["\x1bPq".repeat(100), "<OSC>".to_string(), "x".to_string()]
        );
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn missing_default_ends_the_iteration() {
        let parser = Parser::new(ParserConfig::default()).expect("parser");
        let result: Vec<_> = parser.parse("a\x1b[;32 cb\x07").collect();

        assert_eq!(result.len(), 2);
        assert!(matches!(
            result[1],
            Err(ParseError::MissingDefault { mnemonic: "TCC", .. })
        ));
    }

    #[test]
    fn advance_relays_fragments() {
        let parser = Parser::new(ParserConfig::default()).expect("parser");
        let mut collected: Vec<Fragment> = Vec::new();

        parser
            .advance("\x1b7x\x1b8", &mut collected)
            .expect("advance");

        assert_eq!(outline(&collected), vec!["<DECSC>", "x", "<DECRC>"]);
        assert!(collected[0].as_function().is_some_and(|fragment| {
            fragment.is(&independent::DECSC)
        }));
    }

    #[test]
    fn restricted_catalog_treats_the_rest_as_text() {
        let catalog = Catalog::with_functions(
            control::C0_FUNCTIONS
                .iter()
                .chain([&control::CSI, &sequence::SGR, &string::OSC]),
        )
        .expect("catalog");
        let parser = Parser::with_catalog(ParserConfig::default(), catalog)
            .expect("parser");

        assert_eq!(
            outline(&fragments(&parser, "\x1b[2Jx\x1b[m")),
            vec!["\x1b[2Jx", "<SGR>"]
        );
    }

    #[test]
    fn parser_requires_every_handler() {
        let mut config = ParserConfig::default();
        config.handlers.pop();

        assert!(matches!(
            Parser::new(config),
            Err(ConfigError::MissingHandler(_))
        ));
    }
}
