//! Render a stream with graphic rendition as HTML `<span>` elements.
//!
//! Every SGR fragment closes the current span and opens one styled with the
//! inline style accumulated so far. Run with `RUST_LOG=debug` to see the
//! codes the resolver ignores.
use std::collections::BTreeMap;

use anyhow::Result;
use ecma48_parse::{Fragment, Parser, ParserConfig};
use ecma48_style::{StyleConfig, StyleResolver, Target, css_generators};

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn main() -> Result<()> {
    env_logger::init();

    let parser = Parser::new(ParserConfig::default())?;
    let resolver =
        StyleResolver::new(StyleConfig::default(), css_generators())?;
    let mut context = resolver.new_context();

    let text = "plain \x1b[1;31mbold red\x1b[22;4m underlined\x1b[7m \
                reversed\x1b[0m and \x1b[38;5;208;3morange italic\x1b[m <done>";

    // Latest value of each property, so later declarations win.
    let mut style = BTreeMap::new();
    let mut html = String::from("<span>");
    for fragment in parser.parse(text) {
        match fragment? {
            Fragment::Text(fragment) => html.push_str(&escape(&fragment.text)),
            Fragment::Function(function) => {
                let output =
                    resolver.process(&function, &mut context, Target::Css)?;
                if output.is_empty() {
                    continue;
                }

                for declaration in output.iter_declarations() {
                    if let Some((property, value)) =
                        declaration.split_once(": ")
                    {
                        style.insert(property.to_string(), value.to_string());
                    }
                }

                let inline: Vec<String> = style
                    .iter()
                    .map(|(property, value)| format!("{property}: {value}"))
                    .collect();
                html.push_str(&format!(
                    "</span><span style=\"{}\">",
                    inline.join("; ")
                ));
            },
        }
    }
    html.push_str("</span>");

    println!("{html}");
    Ok(())
}
