// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation, and the conversion of every accepted
//! external color shape into one.

use std::fmt::{Display, Formatter};

use crate::{PaintError, PaintResult, named_colors};

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<[u8; 3]> for RgbValue {
    fn from([red, green, blue]: [u8; 3]) -> Self { Self::from_u8(red, green, blue) }
}

impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl RgbValue {
    pub const BLACK: RgbValue = RgbValue::from_u8(0, 0, 0);
    pub const WHITE: RgbValue = RgbValue::from_u8(255, 255, 255);

    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Strict parse used by the `hex` / `bgHex` builder functions: exactly 6 hex digits
    /// after an optional leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::InvalidColorFormat`] for anything else.
    pub fn try_from_hex_color(input: &str) -> PaintResult<RgbValue> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        parse_six_digits(digits).ok_or_else(|| PaintError::InvalidColorFormat {
            input: input.to_string(),
        })
    }

    /// Lenient parse used by [`resolve_color`]: 3 digits (each one doubled, `#F80` is
    /// `#FF8800`) or 6 digits, with or without a leading `#`.
    #[must_use]
    pub fn parse_hex(input: &str) -> Option<RgbValue> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        match digits.len() {
            3 => parse_three_digits(digits),
            6 => parse_six_digits(digits),
            _ => None,
        }
    }
}

fn parse_six_digits(digits: &str) -> Option<RgbValue> {
    if digits.len() != 6 || !digits.bytes().all(|it| it.is_ascii_hexdigit()) {
        return None;
    }
    // All bytes are ASCII so the byte ranges are char boundaries.
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(RgbValue::from_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_three_digits(digits: &str) -> Option<RgbValue> {
    let mut it = digits.chars().map(|ch| ch.to_digit(16));
    let mut next = || -> Option<u8> {
        let digit = u8::try_from(it.next()??).ok()?;
        Some(digit * 17)
    };
    let rgb = RgbValue::from_u8(next()?, next()?, next()?);
    Some(rgb)
}

/// The external shapes a color can arrive in. Anything that is not text or a triple ends
/// up as [`ColorInput::Invalid`], which resolves to black.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorInput {
    /// A named color (`tomato`, `brightRed`) or a hex string (`#F80`, `ff8800`).
    Text(String),
    Rgb(RgbValue),
    Invalid,
}

mod color_input_impl {
    use super::{ColorInput, RgbValue};

    impl From<&str> for ColorInput {
        fn from(value: &str) -> Self { ColorInput::Text(value.to_string()) }
    }

    impl From<String> for ColorInput {
        fn from(value: String) -> Self { ColorInput::Text(value) }
    }

    impl From<&String> for ColorInput {
        fn from(value: &String) -> Self { ColorInput::Text(value.clone()) }
    }

    impl From<RgbValue> for ColorInput {
        fn from(value: RgbValue) -> Self { ColorInput::Rgb(value) }
    }

    impl From<(u8, u8, u8)> for ColorInput {
        fn from(value: (u8, u8, u8)) -> Self { ColorInput::Rgb(value.into()) }
    }

    impl From<[u8; 3]> for ColorInput {
        fn from(value: [u8; 3]) -> Self { ColorInput::Rgb(value.into()) }
    }

    /// Only a slice of exactly 3 channels is a color.
    impl From<&[u8]> for ColorInput {
        fn from(value: &[u8]) -> Self {
            match *value {
                [red, green, blue] => ColorInput::Rgb(RgbValue::from_u8(red, green, blue)),
                _ => ColorInput::Invalid,
            }
        }
    }

    impl From<&ColorInput> for ColorInput {
        fn from(value: &ColorInput) -> Self { value.clone() }
    }
}

/// Resolve any color input to exactly one [`RgbValue`].
///
/// 1. Text is looked up in the named color table first.
/// 2. Then it is parsed as a 3 or 6 digit hex string.
/// 3. Triples are used as-is.
///
/// Anything else resolves to black. This is a fallback, not an error.
pub fn resolve_color(input: impl Into<ColorInput>) -> RgbValue {
    match input.into() {
        ColorInput::Rgb(rgb) => rgb,
        ColorInput::Text(text) => {
            if let Some(named_color) = named_colors().lookup(&text) {
                return named_color.rgb;
            }
            if let Some(rgb) = RgbValue::parse_hex(&text) {
                return rgb;
            }
            tracing::debug!(
                message = "Unresolvable color, falling back to black",
                input = %text
            );
            RgbValue::BLACK
        }
        ColorInput::Invalid => {
            tracing::debug!(message = "Invalid color shape, falling back to black");
            RgbValue::BLACK
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_try_from_hex_color() {
        // Valid.
        {
            let value = RgbValue::try_from_hex_color("#ff0000").unwrap();
            assert_eq!((value.red, value.green, value.blue), (255, 0, 0));
            let value = RgbValue::try_from_hex_color("00FF7f").unwrap();
            assert_eq!((value.red, value.green, value.blue), (0, 255, 127));
        }

        // Invalid.
        {
            for input in ["#ff000", "#f00", "#gg0000", "", "#", "#ff00000"] {
                assert_eq!(
                    RgbValue::try_from_hex_color(input),
                    Err(PaintError::InvalidColorFormat {
                        input: input.to_string()
                    })
                );
            }
        }
    }

    #[test_case("#F80", Some((255, 136, 0)))]
    #[test_case("f80", Some((255, 136, 0)))]
    #[test_case("#FF8800", Some((255, 136, 0)))]
    #[test_case("ff8800", Some((255, 136, 0)))]
    #[test_case("#FF88", None)]
    #[test_case("#xyz", None)]
    #[test_case("🎨🎨🎨", None)]
    fn test_parse_hex(input: &str, expected: Option<(u8, u8, u8)>) {
        assert_eq!(RgbValue::parse_hex(input), expected.map(RgbValue::from));
    }

    #[test]
    fn test_display_as_hex() {
        assert_eq!(RgbValue::from_u8(205, 0, 10).to_string(), "#CD000A");
    }

    #[test]
    fn test_color_input_shapes() {
        let slice: &[u8] = &[1, 2, 3];
        assert_eq!(ColorInput::from(slice), ColorInput::Rgb(RgbValue::from_u8(1, 2, 3)));
        let slice: &[u8] = &[1, 2];
        assert_eq!(ColorInput::from(slice), ColorInput::Invalid);
        assert_eq!(ColorInput::from("red"), ColorInput::Text("red".into()));
    }

    #[test_case(ColorInput::from("red"), (205, 0, 0))]
    #[test_case(ColorInput::from("tomato"), (255, 99, 71))]
    #[test_case(ColorInput::from("#FF6347"), (255, 99, 71))]
    #[test_case(ColorInput::from("#abc"), (170, 187, 204))]
    #[test_case(ColorInput::from((1, 2, 3)), (1, 2, 3))]
    #[test_case(ColorInput::from("Red"), (0, 0, 0))]
    #[test_case(ColorInput::from("not a color"), (0, 0, 0))]
    #[test_case(ColorInput::Invalid, (0, 0, 0))]
    fn test_resolve_color(input: ColorInput, expected: (u8, u8, u8)) {
        assert_eq!(resolve_color(input), RgbValue::from(expected));
    }

    #[test]
    fn name_hex_and_triple_resolve_identically() {
        let by_name = resolve_color("cornflowerblue");
        let by_hex = resolve_color("#6495ED");
        let by_triple = resolve_color([100, 149, 237]);
        assert_eq!(by_name, by_hex);
        assert_eq!(by_hex, by_triple);
    }
}
