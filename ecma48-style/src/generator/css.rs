//! CSS declarations.

use super::{StyleGenerator, Target};
use crate::attribute::{
    Attribute, AttributeChange, AttributeValue, Blink, Font, Underline,
    Visibility, Weight,
};
use crate::context::AttributeContext;

/// Generators for every text attribute.
pub fn css_generators() -> Vec<Box<dyn StyleGenerator>> {
    vec![
        Box::new(WeightCss),
        Box::new(ItalicCss),
        Box::new(DecorationCss),
        Box::new(BlinkCss),
        Box::new(VisibilityCss),
        Box::new(FontCss),
        Box::new(ColorCss),
    ]
}

/// `font-weight`
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightCss;

impl StyleGenerator for WeightCss {
    fn target(&self) -> Target {
        Target::Css
    }

    fn attributes(&self) -> &[Attribute] {
        &[Attribute::Weight]
    }

    fn generate(
        &self,
        change: &AttributeChange,
        _: &AttributeContext,
        out: &mut Vec<String>,
    ) {
        if let AttributeValue::Weight(weight) = change.new {
            let value = match weight {
                Weight::Normal => "normal",
                Weight::Bold => "bold",
                Weight::Faint => "lighter",
            };
            out.push(format!("font-weight: {value}"));
        }
    }
}

/// `font-style`
#[derive(Debug, Clone, Copy, Default)]
pub struct ItalicCss;

impl StyleGenerator for ItalicCss {
    fn target(&self) -> Target {
        Target::Css
    }

    fn attributes(&self) -> &[Attribute] {
        &[Attribute::Italic]
    }

    fn generate(
        &self,
        change: &AttributeChange,
        _: &AttributeContext,
        out: &mut Vec<String>,
    ) {
        if let AttributeValue::Italic(italic) = change.new {
            let value = if italic { "italic" } else { "normal" };
            out.push(format!("font-style: {value}"));
        }
    }
}

/// Underline and strikethrough share `text-decoration-line`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecorationCss;

impl StyleGenerator for DecorationCss {
    fn target(&self) -> Target {
        Target::Css
    }

    fn attributes(&self) -> &[Attribute] {
        &[Attribute::Underline, Attribute::Strikethrough]
    }

    fn generate(
        &self,
        change: &AttributeChange,
        context: &AttributeContext,
        out: &mut Vec<String>,
    ) {
        let underline = context.underline();
        let underlined = underline != Underline::None;
        let lines = match (underlined, context.strikethrough()) {
            (true, true) => "underline line-through",
            (true, false) => "underline",
            (false, true) => "line-through",
            (false, false) => "none",
        };
        out.push(format!("text-decoration-line: {lines}"));

        if change.attribute == Attribute::Underline {
            let style = match underline {
                Underline::Double => "double",
                Underline::None | Underline::Single => "solid",
            };
            out.push(format!("text-decoration-style: {style}"));
        }
    }
}

/// `animation`, referring to an `ansi-blink` keyframes rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlinkCss;

impl StyleGenerator for BlinkCss {
    fn target(&self) -> Target {
        Target::Css
    }

    fn attributes(&self) -> &[Attribute] {
        &[Attribute::Blink]
    }

    fn generate(
        &self,
        change: &AttributeChange,
        context: &AttributeContext,
        out: &mut Vec<String>,
    ) {
        let config = context.text_config();
        let period = match change.new {
            AttributeValue::Blink(Blink::Slow) => config.slow_blink_ms,
            AttributeValue::Blink(Blink::Rapid) => config.rapid_blink_ms,
            _ => {
                out.push("animation: none".to_string());
                return;
            },
        };

        out.push(format!("animation: ansi-blink {period}ms step-end infinite"));
    }
}

/// `visibility`
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityCss;

impl StyleGenerator for VisibilityCss {
    fn target(&self) -> Target {
        Target::Css
    }

    fn attributes(&self) -> &[Attribute] {
        &[Attribute::Visibility]
    }

    fn generate(
        &self,
        change: &AttributeChange,
        _: &AttributeContext,
        out: &mut Vec<String>,
    ) {
        if let AttributeValue::Visibility(visibility) = change.new {
            let value = match visibility {
                Visibility::Visible => "visible",
                Visibility::Hidden => "hidden",
            };
            out.push(format!("visibility: {value}"));
        }
    }
}

/// `font-family`, through the `--ansi-font-*` custom properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontCss;

impl StyleGenerator for FontCss {
    fn target(&self) -> Target {
        Target::Css
    }

    fn attributes(&self) -> &[Attribute] {
        &[Attribute::Font]
    }

    fn generate(
        &self,
        change: &AttributeChange,
        _: &AttributeContext,
        out: &mut Vec<String>,
    ) {
        if let AttributeValue::Font(font) = change.new {
            let family = match font {
                Font::Primary => "0".to_string(),
                Font::Alternative(index) => index.to_string(),
                Font::Fraktur => "fraktur".to_string(),
            };
            out.push(format!("font-family: var(--ansi-font-{family})"));
        }
    }
}

/// `color` and `background-color`.
///
/// Reverse video swaps which colour attribute drives which property, so a
/// change of either colour renders the property it currently drives and a
/// change of reverse video renders both.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorCss;

impl StyleGenerator for ColorCss {
    fn target(&self) -> Target {
        Target::Css
    }

    fn attributes(&self) -> &[Attribute] {
        &[
            Attribute::Foreground,
            Attribute::Background,
            Attribute::Reverse,
        ]
    }

    fn generate(
        &self,
        change: &AttributeChange,
        context: &AttributeContext,
        out: &mut Vec<String>,
    ) {
        let config = context.text_config();
        let foreground = context.foreground().to_rgb(config.foreground);
        let background = context.background().to_rgb(config.background);
        let (color, background_color) = if context.reverse() {
            (background, foreground)
        } else {
            (foreground, background)
        };

        let drives_color = match change.attribute {
            Attribute::Foreground => !context.reverse(),
            Attribute::Background => context.reverse(),
            _ => {
                out.push(format!("color: {color}"));
                out.push(format!("background-color: {background_color}"));
                return;
            },
        };

        if drives_color {
            out.push(format!("color: {color}"));
        } else {
            out.push(format!("background-color: {background_color}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, Rgb};
    use crate::config::StyleConfig;

    fn generate(
        generator: &dyn StyleGenerator,
        context: &mut AttributeContext,
        value: AttributeValue,
    ) -> Vec<String> {
        let change = context
            .set_attribute(value.attribute(), Some(value))
            .expect("set")
            .expect("change");
        let mut out = Vec::new();
        generator.generate(&change, context, &mut out);
        out
    }

    #[test]
    fn single_property_declarations() {
        let generators = css_generators();
        let cases = vec![
            (AttributeValue::Weight(Weight::Bold), "font-weight: bold"),
            (AttributeValue::Weight(Weight::Faint), "font-weight: lighter"),
            (AttributeValue::Italic(true), "font-style: italic"),
            (
                AttributeValue::Blink(Blink::Rapid),
                "animation: ansi-blink 300ms step-end infinite",
            ),
            (
                AttributeValue::Visibility(Visibility::Hidden),
                "visibility: hidden",
            ),
            (
                AttributeValue::Font(Font::Alternative(2)),
                "font-family: var(--ansi-font-2)",
            ),
            (
                AttributeValue::Font(Font::Fraktur),
                "font-family: var(--ansi-font-fraktur)",
            ),
        ];

        for (value, expected) in cases {
            let generator = generators
                .iter()
                .find(|generator| {
                    generator.attributes().contains(&value.attribute())
                })
                .expect("generator");
            let mut context = AttributeContext::new(&StyleConfig::default());

            assert_eq!(
                generate(generator.as_ref(), &mut context, value),
                vec![expected]
            );
        }
    }

    #[test]
    fn decoration_lines_are_combined() {
        let mut context = AttributeContext::new(&StyleConfig::default());

        assert_eq!(
            generate(
                &DecorationCss,
                &mut context,
                AttributeValue::Strikethrough(true)
            ),
            vec!["text-decoration-line: line-through"]
        );
        assert_eq!(
            generate(
                &DecorationCss,
                &mut context,
                AttributeValue::Underline(Underline::Double)
            ),
            vec![
                "text-decoration-line: underline line-through",
                "text-decoration-style: double",
            ]
        );
        assert_eq!(
            generate(
                &DecorationCss,
                &mut context,
                AttributeValue::Strikethrough(false)
            ),
            vec!["text-decoration-line: underline"]
        );
    }

    #[test]
    fn blink_off_stops_the_animation() {
        let mut context = AttributeContext::new(&StyleConfig::default());
        generate(&BlinkCss, &mut context, AttributeValue::Blink(Blink::Slow));

        assert_eq!(
            generate(&BlinkCss, &mut context, AttributeValue::Blink(Blink::None)),
            vec!["animation: none"]
        );
    }

    #[test]
    fn colors_follow_reverse_video() {
        let mut context = AttributeContext::new(&StyleConfig::default());
        let red = Color::Rgb(Rgb::new(255, 0, 0));
        let blue = Color::Rgb(Rgb::new(0, 0, 255));

        assert_eq!(
            generate(&ColorCss, &mut context, AttributeValue::Foreground(red)),
            vec!["color: #ff0000"]
        );
        assert_eq!(
            generate(&ColorCss, &mut context, AttributeValue::Reverse(true)),
            vec!["color: #000000", "background-color: #ff0000"]
        );
        assert_eq!(
            generate(&ColorCss, &mut context, AttributeValue::Background(blue)),
            vec!["color: #0000ff"]
        );
    }
}
