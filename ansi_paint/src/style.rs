// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          str::FromStr};

use smallvec::SmallVec;

use crate::{BasicColor, ColorInput, PaintError, PaintResult, RgbValue, SgrCode,
            StructuralStyle, resolve_color};

/// The main struct is `Style`. It is an immutable, ordered list of escape fragments
/// ([`SgrCode`]s). Fragments are rendered in the order they were added, and painting text
/// with a style always yields `prefix + text + RESET`, with exactly one trailing reset.
///
/// Every builder method takes `&self` and returns a new `Style`, so a style can be kept
/// around and reused as the base for other styles.
///
/// # Example usage:
///
/// ```rust
/// use ansi_paint::Style;
///
/// let warning = Style::default().bold().yellow();
/// println!("{}", warning.paint("careful"));
///
/// let tomato = Style::default().attr("tomato").unwrap().underline();
/// println!("{}", tomato.apply("tomato"));
///
/// let custom = Style::default().hex("#FF8800").unwrap().bg256(236).unwrap();
/// println!("{}", custom.paint("orange on dark grey"));
///
/// let parsed = "bold.brightCyan".parse::<Style>().unwrap();
/// assert_eq!(parsed, Style::default().bold().bright_cyan());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fragments: sizing::InlineVecSgrCodes,
}

pub mod sizing {
    use super::{SgrCode, SmallVec};

    /// Styles rarely carry more than a handful of fragments (a couple of attributes, a
    /// foreground and a background), larger ones spill to the heap.
    pub const MAX_STYLE_FRAGMENTS_SIZE: usize = 8;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_STYLE_FRAGMENTS_SIZE]>;
}

/// Generates one zero-argument builder method per registry name.
macro_rules! registry_methods {
    ($($fn_name:ident => $variant:expr),* $(,)?) => {
        $(
            #[must_use]
            pub fn $fn_name(&self) -> Self { self.with($variant.sgr_code()) }
        )*
    };
}

mod builder_impl {
    use super::{BasicColor, ColorInput, PaintError, PaintResult, RgbValue, SgrCode,
                StructuralStyle, Style, resolve_color};

    impl Style {
        #[must_use]
        pub fn new() -> Self { Self::default() }

        /// Append one fragment.
        #[must_use]
        pub fn with(&self, sgr_code: SgrCode) -> Self {
            let mut it = self.clone();
            it.fragments.push(sgr_code);
            it
        }

        #[must_use]
        pub fn structural(&self, structural_style: StructuralStyle) -> Self {
            self.with(structural_style.sgr_code())
        }

        #[must_use]
        pub fn color(&self, basic_color: BasicColor) -> Self {
            self.with(basic_color.sgr_code())
        }

        registry_methods! {
            reset         => StructuralStyle::Reset,
            bold          => StructuralStyle::Bold,
            dim           => StructuralStyle::Dim,
            italic        => StructuralStyle::Italic,
            underline     => StructuralStyle::Underline,
            inverse       => StructuralStyle::Inverse,
            hidden        => StructuralStyle::Hidden,
            strikethrough => StructuralStyle::Strikethrough,
            overline      => StructuralStyle::Overline,
        }

        registry_methods! {
            black          => BasicColor::Black,
            red            => BasicColor::Red,
            green          => BasicColor::Green,
            yellow         => BasicColor::Yellow,
            blue           => BasicColor::Blue,
            magenta        => BasicColor::Magenta,
            cyan           => BasicColor::Cyan,
            white          => BasicColor::White,
            gray           => BasicColor::Gray,
            bright_red     => BasicColor::BrightRed,
            bright_green   => BasicColor::BrightGreen,
            bright_yellow  => BasicColor::BrightYellow,
            bright_blue    => BasicColor::BrightBlue,
            bright_magenta => BasicColor::BrightMagenta,
            bright_cyan    => BasicColor::BrightCyan,
            bright_white   => BasicColor::BrightWhite,
        }

        registry_methods! {
            bg_black          => BasicColor::BgBlack,
            bg_red            => BasicColor::BgRed,
            bg_green          => BasicColor::BgGreen,
            bg_yellow         => BasicColor::BgYellow,
            bg_blue           => BasicColor::BgBlue,
            bg_magenta        => BasicColor::BgMagenta,
            bg_cyan           => BasicColor::BgCyan,
            bg_white          => BasicColor::BgWhite,
            bg_gray           => BasicColor::BgGray,
            bg_bright_red     => BasicColor::BgBrightRed,
            bg_bright_green   => BasicColor::BgBrightGreen,
            bg_bright_yellow  => BasicColor::BgBrightYellow,
            bg_bright_blue    => BasicColor::BgBrightBlue,
            bg_bright_magenta => BasicColor::BgBrightMagenta,
            bg_bright_cyan    => BasicColor::BgBrightCyan,
            bg_bright_white   => BasicColor::BgBrightWhite,
        }

        /// True color foreground.
        #[must_use]
        pub fn rgb(&self, red: u8, green: u8, blue: u8) -> Self {
            self.with(SgrCode::ForegroundRGB(red, green, blue))
        }

        /// True color background.
        #[must_use]
        pub fn bg_rgb(&self, red: u8, green: u8, blue: u8) -> Self {
            self.with(SgrCode::BackgroundRGB(red, green, blue))
        }

        #[must_use]
        pub fn fg_rgb_value(&self, RgbValue { red, green, blue }: RgbValue) -> Self {
            self.rgb(red, green, blue)
        }

        #[must_use]
        pub fn bg_rgb_value(&self, RgbValue { red, green, blue }: RgbValue) -> Self {
            self.bg_rgb(red, green, blue)
        }

        /// Resolve any color input (name, 3 or 6 digit hex, triple) into a true color
        /// foreground. Unresolvable input becomes black.
        #[must_use]
        pub fn fg_color(&self, color: impl Into<ColorInput>) -> Self {
            self.fg_rgb_value(resolve_color(color))
        }

        #[must_use]
        pub fn bg_color(&self, color: impl Into<ColorInput>) -> Self {
            self.bg_rgb_value(resolve_color(color))
        }

        /// # Errors
        ///
        /// Returns [`PaintError::InvalidColorFormat`] unless `hex` is exactly 6 hex
        /// digits after an optional `#`.
        pub fn hex(&self, hex: &str) -> PaintResult<Self> {
            RgbValue::try_from_hex_color(hex).map(|it| self.fg_rgb_value(it))
        }

        /// # Errors
        ///
        /// Same rules as [`Self::hex`].
        pub fn bg_hex(&self, hex: &str) -> PaintResult<Self> {
            RgbValue::try_from_hex_color(hex).map(|it| self.bg_rgb_value(it))
        }

        /// # Errors
        ///
        /// Returns [`PaintError::InvalidPaletteIndex`] if `index` is not in `0..=255`.
        pub fn color256(&self, index: i64) -> PaintResult<Self> {
            palette_index(index).map(|it| self.with(SgrCode::ForegroundAnsi256(it)))
        }

        /// # Errors
        ///
        /// Same rules as [`Self::color256`].
        pub fn bg256(&self, index: i64) -> PaintResult<Self> {
            palette_index(index).map(|it| self.with(SgrCode::BackgroundAnsi256(it)))
        }
    }

    fn palette_index(index: i64) -> PaintResult<u8> {
        u8::try_from(index).map_err(|_| PaintError::InvalidPaletteIndex { index })
    }
}

mod output_impl {
    use super::{Display, Formatter, Result, SgrCode, Style, StyledText};

    impl Style {
        /// All fragments concatenated, without the trailing reset.
        #[must_use]
        pub fn prefix(&self) -> String { self.to_string() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.fragments.is_empty() }

        #[must_use]
        pub fn paint(&self, text: impl AsRef<str>) -> String {
            self.apply(text.as_ref()).to_string()
        }

        /// Lazy form of [`Self::paint`], nothing is allocated until it is displayed.
        #[must_use]
        pub fn apply<'a>(&self, text: &'a str) -> StyledText<'a> {
            StyledText {
                text,
                style: self.clone(),
            }
        }
    }

    /// Renders the prefix.
    impl Display for Style {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            for sgr_code in &self.fragments {
                write!(f, "{sgr_code}")?;
            }
            Ok(())
        }
    }

    impl Display for StyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{}{}{}", self.style, self.text, SgrCode::Reset)
        }
    }
}

/// Text paired with the [Style] it will be painted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText<'a> {
    pub text: &'a str,
    pub style: Style,
}

impl StyledText<'_> {
    pub fn println(&self) {
        println!("{self}");
    }

    pub fn print(&self) {
        print!("{self}");
    }
}

/// Parses dotted attribute chains, eg: `"bold.red.bgBlue"` or `"italic.tomato"`. Each
/// segment goes through [`Style::attr`], so color functions (`rgb`, `hex`, ...) can not
/// be used here because they need arguments.
impl FromStr for Style {
    type Err = PaintError;

    fn from_str(input: &str) -> PaintResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Style::default());
        }
        input
            .split('.')
            .try_fold(Style::default(), |acc, name| acc.attr(name.trim()))
    }
}
