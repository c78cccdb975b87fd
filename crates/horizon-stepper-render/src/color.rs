//! CSS color parsing.
//!
//! Style documents describe colors the way stylesheets do: `#4aae4f`,
//! `#ffffff80`, `rgb(74, 174, 79)`, `rgba(255,255,255,0.5)` or a small set of
//! named colors. Parsing uses the `cssparser` tokenizer.

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};
use serde::de::{self, Deserialize, Deserializer};

use crate::types::Color;
use crate::{Error, Result};

impl Color {
    /// Parse a CSS color string.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_stepper_render::Color;
    ///
    /// assert_eq!(Color::parse("#ffffff").unwrap(), Color::WHITE);
    /// assert_eq!(Color::parse("rgba(0, 0, 0, 0.5)").unwrap().a, 0.5);
    /// assert!(Color::parse("not-a-color").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let mut parser_input = ParserInput::new(input);
        let mut parser = Parser::new(&mut parser_input);

        let color = parser
            .parse_entirely(parse_color)
            .map_err(|_| Error::invalid_color(input, "expected a hex, rgb(), rgba() or named color"))?;

        tracing::trace!(target: "horizon_stepper_render::color", input, ?color, "parsed color");
        Ok(color)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Color::parse(&text).map_err(de::Error::custom)
    }
}

/// Parse a color value.
fn parse_color<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Color, CssParseError<'i, ()>> {
    parser.skip_whitespace();

    let token = parser.next()?;

    match token.clone() {
        Token::Hash(hash) | Token::IDHash(hash) => {
            let hex_str = format!("#{}", hash);
            Color::from_hex(&hex_str).ok_or_else(|| parser.new_custom_error(()))
        }
        Token::Ident(name) => match name.as_ref().to_lowercase().as_str() {
            "transparent" => Ok(Color::TRANSPARENT),
            "black" => Ok(Color::BLACK),
            "white" => Ok(Color::WHITE),
            "red" => Ok(Color::RED),
            "green" => Ok(Color::GREEN),
            "blue" => Ok(Color::BLUE),
            "gray" | "grey" => Ok(Color::GRAY),
            _ => Err(parser.new_custom_error(())),
        },
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            let (r, g, b, a) = parser.parse_nested_block(|p| {
                let r = parse_color_component(p)?;
                p.expect_comma()?;
                let g = parse_color_component(p)?;
                p.expect_comma()?;
                let b = parse_color_component(p)?;
                let a = if p.try_parse(|p| p.expect_comma()).is_ok() {
                    parse_alpha_component(p)?
                } else {
                    1.0
                };
                Ok::<_, CssParseError<'_, ()>>((r, g, b, a))
            })?;
            Ok(Color::from_rgba(r, g, b, a))
        }
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_color_component<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 255.0) / 255.0),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_alpha_component<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}
