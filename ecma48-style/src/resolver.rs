//! Resolution of SGR fragments into attribute changes and declarations.

use std::collections::HashMap;
use std::fmt;

use ecma48_parse::FunctionFragment;
use ecma48_parse::catalog::sequence::SGR;
use log::trace;

use crate::attribute::{Attribute, AttributeChange};
use crate::config::StyleConfig;
use crate::context::AttributeContext;
use crate::error::{ConfigError, Result, StyleError};
use crate::generator::{StyleGenerator, Target};
use crate::sgr::{self, Sgr};

/// Result of processing one fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleOutput {
    /// Attribute changes in the order they were applied.
    pub changes: Vec<AttributeChange>,
    /// Declarations of each change, parallel to `changes`.
    pub declarations: Vec<Vec<String>>,
}

impl StyleOutput {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Every declaration, in change order.
    pub fn iter_declarations(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().flatten().map(String::as_str)
    }

    /// Declarations joined into one inline style.
    pub fn to_inline_style(&self) -> String {
        self.iter_declarations().collect::<Vec<_>>().join("; ")
    }
}

/// Applies SGR fragments to an [`AttributeContext`] and renders the
/// resulting changes with the registered generators.
pub struct StyleResolver {
    config: StyleConfig,
    generators: Vec<Box<dyn StyleGenerator>>,
    routes: HashMap<(Target, Attribute), usize>,
}

impl fmt::Debug for StyleResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleResolver")
            .field("config", &self.config)
            .field("generators", &self.generators.len())
            .finish()
    }
}

impl StyleResolver {
    /// Fails on an invalid configuration, an empty generator list or two
    /// generators claiming the same attribute for the same target.
    pub fn new(
        config: StyleConfig,
        generators: Vec<Box<dyn StyleGenerator>>,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        if generators.is_empty() {
            return Err(ConfigError::NoGenerators);
        }

        let mut routes = HashMap::new();
        for (index, generator) in generators.iter().enumerate() {
            let target = generator.target();
            for &attribute in generator.attributes() {
                if routes.insert((target, attribute), index).is_some() {
                    return Err(ConfigError::DuplicateGenerator {
                        attribute,
                        target,
                    });
                }
            }
        }

        Ok(Self {
            config,
            generators,
            routes,
        })
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// A context with every attribute at its configured default.
    pub fn new_context(&self) -> AttributeContext {
        AttributeContext::new(&self.config)
    }

    /// Apply `fragment` to `context` and render the changes for `target`.
    ///
    /// Fragments of functions other than SGR leave the context untouched
    /// and produce an empty output. Declarations are generated once every
    /// change of the fragment was applied. On error `context` is left as it
    /// was.
    pub fn process(
        &self,
        fragment: &FunctionFragment,
        context: &mut AttributeContext,
        target: Target,
    ) -> Result<StyleOutput> {
        if !fragment.is(&SGR) {
            return Ok(StyleOutput::default());
        }

        let mut next = context.clone();
        let mut changes = Vec::new();
        for operation in sgr::operations(fragment.arguments(), &next) {
            match operation {
                Sgr::Reset(group) => changes.extend(next.reset(group)),
                Sgr::Set(value) => {
                    let change =
                        next.set_attribute(value.attribute(), Some(value))?;
                    changes.extend(change);
                },
            }
        }

        let mut declarations = Vec::with_capacity(changes.len());
        for change in &changes {
            let generator = self.generator(target, change.attribute).ok_or(
                StyleError::MissingGenerator {
                    attribute: change.attribute,
                    target,
                },
            )?;

            let mut out = Vec::new();
            generator.generate(change, &next, &mut out);
            trace!("{} -> {out:?}", change.attribute);
            declarations.push(out);
        }

        *context = next;
        Ok(StyleOutput {
            changes,
            declarations,
        })
    }

    fn generator(
        &self,
        target: Target,
        attribute: Attribute,
    ) -> Option<&dyn StyleGenerator> {
        self.routes
            .get(&(target, attribute))
            .and_then(|&index| self.generators.get(index))
            .map(|generator| &**generator)
    }
}

#[cfg(test)]
mod tests {
    use ecma48_parse::{ArgumentValue, FunctionArgument, Parser};

    use super::*;
    use crate::attribute::{AttributeValue, Font};
    use crate::generator::css::{FontCss, WeightCss, css_generators};

    fn sgr_fragment(text: &str) -> FunctionFragment {
        let parser = Parser::new(Default::default()).expect("parser");
        parser
            .parse(text)
            .filter_map(|fragment| fragment.ok())
            .find_map(|fragment| fragment.as_function().cloned())
            .expect("function fragment")
    }

    fn resolver() -> StyleResolver {
        StyleResolver::new(StyleConfig::default(), css_generators())
            .expect("resolver")
    }

    #[test]
    fn rejects_invalid_generator_sets() {
        assert!(matches!(
            StyleResolver::new(StyleConfig::default(), Vec::new()),
            Err(ConfigError::NoGenerators)
        ));
        assert!(matches!(
            StyleResolver::new(
                StyleConfig::default(),
                vec![Box::new(WeightCss), Box::new(WeightCss)]
            ),
            Err(ConfigError::DuplicateGenerator {
                attribute: Attribute::Weight,
                target: Target::Css,
            })
        ));
        assert!(matches!(
            StyleResolver::new(
                StyleConfig { groups: Vec::new() },
                css_generators()
            ),
            Err(ConfigError::NoGroups)
        ));
    }

    #[test]
    fn other_functions_produce_nothing() {
        let resolver = resolver();
        let mut context = resolver.new_context();

        let output = resolver
            .process(&sgr_fragment("\x1b[1A"), &mut context, Target::Css)
            .expect("process");

        assert!(output.is_empty());
        assert!(context.overrides().is_empty());
    }

    #[test]
    fn empty_sgr_resets() {
        let resolver = resolver();
        let mut context = resolver.new_context();
        resolver
            .process(&sgr_fragment("\x1b[1;3m"), &mut context, Target::Css)
            .expect("process");

        let output = resolver
            .process(&sgr_fragment("\x1b[m"), &mut context, Target::Css)
            .expect("process");

        assert_eq!(
            output.iter_declarations().collect::<Vec<_>>(),
            vec!["font-weight: normal", "font-style: normal"]
        );
        assert!(context.overrides().is_empty());
    }

    #[test]
    fn declarations_follow_change_order() {
        let resolver = resolver();
        let mut context = resolver.new_context();

        let output = resolver
            .process(&sgr_fragment("\x1b[3;1;1m"), &mut context, Target::Css)
            .expect("process");

        assert_eq!(
            output.changes.iter().map(|c| c.attribute).collect::<Vec<_>>(),
            vec![Attribute::Italic, Attribute::Weight]
        );
        assert_eq!(
            output.to_inline_style(),
            "font-style: italic; font-weight: bold"
        );
    }

    #[test]
    fn missing_generator_is_fatal() {
        let resolver =
            StyleResolver::new(StyleConfig::default(), vec![Box::new(FontCss)])
                .expect("resolver");
        let mut context = resolver.new_context();
        let fragment = FunctionFragment {
            text: "\x1b[1m".to_string(),
            offset: 0,
            function: &SGR,
            arguments: Some(vec![FunctionArgument::explicit(
                ArgumentValue::Int(1),
            )]),
        };

        assert_eq!(
            resolver.process(&fragment, &mut context, Target::Css),
            Err(StyleError::MissingGenerator {
                attribute: Attribute::Weight,
                target: Target::Css,
            })
        );
        assert!(context.overrides().is_empty());
    }

    #[test]
    fn failed_fragment_keeps_the_previous_state() {
        let resolver =
            StyleResolver::new(StyleConfig::default(), vec![Box::new(FontCss)])
                .expect("resolver");
        let mut context = resolver.new_context();
        resolver
            .process(&sgr_fragment("\x1b[12m"), &mut context, Target::Css)
            .expect("font only");
        let before = context.clone();

        let result = resolver.process(
            &sgr_fragment("\x1b[20;30m"),
            &mut context,
            Target::Css,
        );

        assert_eq!(
            result,
            Err(StyleError::MissingGenerator {
                attribute: Attribute::Foreground,
                target: Target::Css,
            })
        );
        assert_eq!(context, before);
        assert_eq!(
            context.attribute(Attribute::Font),
            AttributeValue::Font(Font::Alternative(2))
        );
    }
}
