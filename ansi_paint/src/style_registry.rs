// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Read-only name tables for the structural styles and the 16 basic colors. Each name maps
//! to exactly one fixed [`SgrCode`].
//!
//! Names are case-sensitive and camelCase (`bold`, `brightRed`, `bgBrightRed`), and are
//! parsed with [`std::str::FromStr`] (generated by [`strum_macros::EnumString`]). A failed
//! parse is not an error for callers, it only means "not a registry name" and the
//! dispatcher in [`crate::StyleAttribute`] moves on to the next kind of name.

use strum_macros::{AsRefStr, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::SgrCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(EnumString, IntoStaticStr, AsRefStr, EnumIter, EnumCount)]
#[strum(serialize_all = "camelCase")]
pub enum StructuralStyle {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Inverse,
    Hidden,
    Strikethrough,
    Overline,
}

impl StructuralStyle {
    #[must_use]
    pub fn sgr_code(self) -> SgrCode {
        match self {
            StructuralStyle::Reset => SgrCode::Reset,
            StructuralStyle::Bold => SgrCode::Bold,
            StructuralStyle::Dim => SgrCode::Dim,
            StructuralStyle::Italic => SgrCode::Italic,
            StructuralStyle::Underline => SgrCode::Underline,
            StructuralStyle::Inverse => SgrCode::Invert,
            StructuralStyle::Hidden => SgrCode::Hidden,
            StructuralStyle::Strikethrough => SgrCode::Strikethrough,
            StructuralStyle::Overline => SgrCode::Overline,
        }
    }
}

/// The 16 basic colors, each as a foreground and a background.
///
/// More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(EnumString, IntoStaticStr, AsRefStr, EnumIter, EnumCount)]
#[strum(serialize_all = "camelCase")]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
    BgGray,
    BgBrightRed,
    BgBrightGreen,
    BgBrightYellow,
    BgBrightBlue,
    BgBrightMagenta,
    BgBrightCyan,
    BgBrightWhite,
}

impl BasicColor {
    /// The SGR parameter for this color.
    #[rustfmt::skip]
    #[must_use]
    pub fn param(self) -> u8 {
        match self {
            BasicColor::Black           => 30,
            BasicColor::Red             => 31,
            BasicColor::Green           => 32,
            BasicColor::Yellow          => 33,
            BasicColor::Blue            => 34,
            BasicColor::Magenta         => 35,
            BasicColor::Cyan            => 36,
            BasicColor::White           => 37,
            BasicColor::Gray            => 90,
            BasicColor::BrightRed       => 91,
            BasicColor::BrightGreen     => 92,
            BasicColor::BrightYellow    => 93,
            BasicColor::BrightBlue      => 94,
            BasicColor::BrightMagenta   => 95,
            BasicColor::BrightCyan      => 96,
            BasicColor::BrightWhite     => 97,
            BasicColor::BgBlack         => 40,
            BasicColor::BgRed           => 41,
            BasicColor::BgGreen         => 42,
            BasicColor::BgYellow        => 43,
            BasicColor::BgBlue          => 44,
            BasicColor::BgMagenta       => 45,
            BasicColor::BgCyan          => 46,
            BasicColor::BgWhite         => 47,
            BasicColor::BgGray          => 100,
            BasicColor::BgBrightRed     => 101,
            BasicColor::BgBrightGreen   => 102,
            BasicColor::BgBrightYellow  => 103,
            BasicColor::BgBrightBlue    => 104,
            BasicColor::BgBrightMagenta => 105,
            BasicColor::BgBrightCyan    => 106,
            BasicColor::BgBrightWhite   => 107,
        }
    }

    #[must_use]
    pub fn is_background(self) -> bool { matches!(self.param(), 40..=47 | 100..=107) }

    #[must_use]
    pub fn sgr_code(self) -> SgrCode { SgrCode::BasicColor(self.param()) }
}
