// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color space operations on [`RgbValue`]s: blending, per-char gradients, rainbow text,
//! shade ramps, and snapping a color to the nearest named color.

use strum_macros::{AsRefStr, Display, EnumString};

use crate::{BasicColor, ColorInput, RgbValue, Style, named_colors, resolve_color};

pub const DEFAULT_BLEND_RATIO: f64 = 0.5;

pub const RAINBOW_CYCLE: [BasicColor; 6] = [
    BasicColor::Red,
    BasicColor::Yellow,
    BasicColor::Green,
    BasicColor::Cyan,
    BasicColor::Blue,
    BasicColor::Magenta,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(EnumString, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
}

impl BlendMode {
    /// Unknown names degrade to [`BlendMode::Normal`].
    #[must_use]
    pub fn from_name(name: &str) -> Self { name.parse().unwrap_or_default() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(EnumString, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ShadeDirection {
    #[default]
    Darken,
    Lighten,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f64) -> u8 { value.round().clamp(0.0, 255.0) as u8 }

fn map_channels(a: RgbValue, b: RgbValue, op: impl Fn(f64, f64) -> f64) -> RgbValue {
    let channel = |x: u8, y: u8| to_channel(op(f64::from(x), f64::from(y)));
    RgbValue::from_u8(
        channel(a.red, b.red),
        channel(a.green, b.green),
        channel(a.blue, b.blue),
    )
}

/// Mix two colors. `ratio` only affects [`BlendMode::Normal`], where `0.0` is all `a` and
/// `1.0` is all `b`.
#[must_use]
pub fn mix(a: RgbValue, b: RgbValue, ratio: f64, mode: BlendMode) -> RgbValue {
    match mode {
        BlendMode::Normal => map_channels(a, b, |x, y| x * (1.0 - ratio) + y * ratio),
        BlendMode::Multiply => map_channels(a, b, |x, y| (x / 255.0) * (y / 255.0) * 255.0),
        BlendMode::Screen => {
            map_channels(a, b, |x, y| 255.0 - ((255.0 - x) * (255.0 - y) / 255.0).round())
        }
    }
}

/// Paint the whole of `text` with the true color mix of two colors.
#[must_use]
pub fn blend(
    text: &str,
    color_a: impl Into<ColorInput>,
    color_b: impl Into<ColorInput>,
    ratio: f64,
    mode: BlendMode,
) -> String {
    let mixed = mix(resolve_color(color_a), resolve_color(color_b), ratio, mode);
    Style::default().fg_rgb_value(mixed).paint(text)
}

/// Each char gets its own reset terminated span. Char `i` of `N` is colored at `i/N` of
/// the way from `start` to `end`, so the last char stops one step short of `end`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn gradient(
    text: &str,
    start: impl Into<ColorInput>,
    end: impl Into<ColorInput>,
) -> String {
    let start = resolve_color(start);
    let end = resolve_color(end);
    let len = text.chars().count() as f64;

    let mut acc = String::new();
    let mut buf = [0; 4];
    for (index, ch) in text.chars().enumerate() {
        let step = index as f64 / len;
        let color = map_channels(start, end, |s, e| s + (e - s) * step);
        acc.push_str(&Style::default().fg_rgb_value(color).paint(ch.encode_utf8(&mut buf)));
    }
    acc
}

/// Char `i` is painted with the `i % 6`th color of [`RAINBOW_CYCLE`].
#[must_use]
pub fn rainbow(text: &str) -> String {
    let mut acc = String::new();
    let mut buf = [0; 4];
    for (ch, basic_color) in text.chars().zip(RAINBOW_CYCLE.iter().cycle()) {
        acc.push_str(&Style::default().color(*basic_color).paint(ch.encode_utf8(&mut buf)));
    }
    acc
}

/// `count` styles starting at `base` and stepping evenly toward black (darken) or white
/// (lighten), with the last one landing on black or white.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_shades(
    base: impl Into<ColorInput>,
    count: usize,
    direction: ShadeDirection,
) -> Vec<Style> {
    let base = resolve_color(base);
    let target = match direction {
        ShadeDirection::Darken => RgbValue::BLACK,
        ShadeDirection::Lighten => RgbValue::WHITE,
    };

    (0..count)
        .map(|index| {
            let ratio = if count > 1 {
                index as f64 / (count - 1) as f64
            } else {
                0.0
            };
            Style::default().fg_rgb_value(mix(base, target, ratio, BlendMode::Normal))
        })
        .collect()
}

/// Euclidean distance in RGB space.
#[must_use]
pub fn color_distance(a: RgbValue, b: RgbValue) -> f64 {
    let delta = |x: u8, y: u8| f64::from(x) - f64::from(y);
    let (dr, dg, db) = (
        delta(a.red, b.red),
        delta(a.green, b.green),
        delta(a.blue, b.blue),
    );
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Ties go to the name that comes first in the named color table, which lists the
/// extended palette before the basic colors.
#[must_use]
pub fn nearest_named_color(input: impl Into<ColorInput>) -> &'static str {
    let target = resolve_color(input);
    let mut nearest = ("", f64::INFINITY);
    for named_color in named_colors().iter() {
        let distance = color_distance(target, named_color.rgb);
        if distance < nearest.1 {
            nearest = (named_color.name, distance);
        }
    }
    nearest.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{RESET, strip};

    fn rgb(red: u8, green: u8, blue: u8) -> RgbValue { RgbValue::from_u8(red, green, blue) }

    #[test_case(BlendMode::Normal, 0.5, (128, 64, 0))]
    #[test_case(BlendMode::Normal, 0.0, (255, 0, 0))]
    #[test_case(BlendMode::Normal, 1.0, (0, 128, 0))]
    #[test_case(BlendMode::Multiply, 0.5, (0, 0, 0))]
    #[test_case(BlendMode::Screen, 0.5, (255, 128, 0))]
    fn test_mix(mode: BlendMode, ratio: f64, expected: (u8, u8, u8)) {
        assert_eq!(
            mix(rgb(255, 0, 0), rgb(0, 128, 0), ratio, mode),
            RgbValue::from(expected)
        );
    }

    #[test_case(BlendMode::Multiply, (100, 100, 2))]
    #[test_case(BlendMode::Screen, (228, 255, 58))]
    fn test_mix_non_trivial_channels(mode: BlendMode, expected: (u8, u8, u8)) {
        assert_eq!(
            mix(rgb(200, 100, 50), rgb(128, 255, 10), DEFAULT_BLEND_RATIO, mode),
            RgbValue::from(expected)
        );
    }

    #[test]
    fn blend_paints_the_whole_span() {
        let it = blend("mix", "#FF0000", "#0000FF", DEFAULT_BLEND_RATIO, BlendMode::Normal);
        assert_eq!(it, "\x1b[38;2;128;0;128mmix\x1b[0m");
    }

    #[test_case(0.0)]
    #[test_case(0.3)]
    #[test_case(1.0)]
    fn blend_with_itself_is_identity_in_normal_mode(ratio: f64) {
        let color = rgb(12, 200, 77);
        let expected = Style::default().fg_rgb_value(color).paint("x");
        assert_eq!(blend("x", color, color, ratio, BlendMode::Normal), expected);
    }

    #[test_case(BlendMode::Multiply)]
    #[test_case(BlendMode::Screen)]
    fn blend_with_itself_fixed_points(mode: BlendMode) {
        for color in [RgbValue::BLACK, RgbValue::WHITE] {
            assert_eq!(mix(color, color, DEFAULT_BLEND_RATIO, mode), color);
        }
    }

    #[test]
    fn blend_mode_names() {
        assert_eq!(BlendMode::from_name("screen"), BlendMode::Screen);
        assert_eq!(BlendMode::from_name("overlay"), BlendMode::Normal);
        assert_eq!(BlendMode::Multiply.to_string(), "multiply");
    }

    #[test]
    fn gradient_steps_by_i_over_n() {
        let it = gradient("ab", "#000000", "#FFFFFF");
        assert_eq!(it, "\x1b[38;2;0;0;0ma\x1b[0m\x1b[38;2;128;128;128mb\x1b[0m");
        assert_eq!(strip(&it), "ab");
    }

    #[test]
    fn gradient_between_same_color_is_flat() {
        let it = gradient("héllo", "teal", "teal");
        let span = Style::default().fg_color("teal").prefix();
        assert_eq!(it.matches(span.as_str()).count(), 5);
        assert_eq!(it.matches(RESET).count(), 5);
    }

    #[test]
    fn gradient_of_empty_text() {
        assert_eq!(gradient("", "red", "blue"), "");
    }

    #[test]
    fn rainbow_cycles_six_colors() {
        let it = rainbow("abcdefg");
        assert!(it.starts_with("\x1b[31ma\x1b[0m\x1b[33mb\x1b[0m"));
        assert!(it.ends_with("\x1b[31mg\x1b[0m"));
        assert_eq!(strip(&it), "abcdefg");
    }

    #[test]
    fn shades_darken_and_lighten() {
        let it = generate_shades("#FF0000", 3, ShadeDirection::Darken);
        let prefixes = it.iter().map(Style::prefix).collect::<Vec<_>>();
        assert_eq!(
            prefixes,
            vec![
                "\x1b[38;2;255;0;0m".to_string(),
                "\x1b[38;2;128;0;0m".to_string(),
                "\x1b[38;2;0;0;0m".to_string(),
            ]
        );

        let it = generate_shades("#000000", 2, ShadeDirection::Lighten);
        assert_eq!(it[1].prefix(), "\x1b[38;2;255;255;255m");
    }

    #[test]
    fn shades_degenerate_counts() {
        assert!(generate_shades("red", 0, ShadeDirection::Darken).is_empty());
        let it = generate_shades("#102030", 1, ShadeDirection::Lighten);
        assert_eq!(it, vec![Style::default().rgb(16, 32, 48)]);
    }

    #[test]
    fn distance() {
        assert_eq!(color_distance(rgb(0, 0, 0), rgb(3, 4, 0)), 5.0);
        assert_eq!(color_distance(rgb(9, 9, 9), rgb(9, 9, 9)), 0.0);
    }

    #[test_case(ColorInput::from("red"), "red")]
    #[test_case(ColorInput::from("#FE6447"), "tomato")]
    #[test_case(ColorInput::from((1, 1, 1)), "black")]
    #[test_case(ColorInput::from("#FF00FF"), "fuchsia")]
    fn test_nearest_named_color(input: ColorInput, expected: &str) {
        assert_eq!(nearest_named_color(input), expected);
    }
}
