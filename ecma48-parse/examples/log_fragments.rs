//! Print every [`Fragment`] the parser produces for a sample stream.
//!
//! Run with `RUST_LOG=trace` to also see the parser's own logging.
use anyhow::Result;
use ecma48_parse::{
    Fragment, FragmentActor, FunctionFragment, Parser, ParserConfig,
    TextFragment,
};

#[derive(Default)]
struct LoggingActor {
    seq: usize,
}

impl FragmentActor for LoggingActor {
    fn text(&mut self, fragment: TextFragment) {
        self.seq += 1;
        println!(
            "{:02}: text {:?} @{}",
            self.seq, fragment.text, fragment.offset
        );
    }

    fn function(&mut self, fragment: FunctionFragment) {
        self.seq += 1;
        let arguments: Vec<String> = fragment
            .arguments()
            .iter()
            .map(|argument| argument.value().to_string())
            .collect();
        println!(
            "{:02}: {} ({}) {:?} @{}",
            self.seq,
            fragment.function,
            fragment.function.name,
            arguments,
            fragment.offset
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let parser = Parser::new(ParserConfig::default())?;
    let mut actor = LoggingActor::default();

    let text = "Hello \x1b[1mbold\x1b[0m!\r\n\
                \x1b]8;id=docs;https://example.com\x07link\x1b]8;;\x07\
                \x1b[?25l\x1b[;5H\x1b[1y";

    parser.advance(text, &mut actor)?;

    let functions = parser
        .parse(text)
        .filter_map(|fragment| fragment.ok())
        .filter(|fragment| matches!(fragment, Fragment::Function(_)))
        .count();
    println!("{functions} functions");

    Ok(())
}
