// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Access to [Style] attributes by name. A name is classified into exactly one
//! [`StyleAttribute`] by an ordered match:
//!
//! 1. `rgb` / `bgRgb`: true color function.
//! 2. `hex` / `bgHex`: hex function.
//! 3. `color256` / `bg256`: palette function.
//! 4. Structural style (`bold`) or basic color (`brightRed`, `bgCyan`).
//! 5. Extended named color (`tomato`), which becomes a true color foreground.
//! 6. Anything else is unknown.
//!
//! Functions are not applied on access; [`Style::access`] hands back a [`ColorFunction`]
//! that has to be [called](ColorFunction::call) with arguments.

use std::str::FromStr;

use crate::{BasicColor, NamedColor, PaintError, PaintResult, SgrCode, StructuralStyle,
            Style, named_colors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorLayer {
    Foreground,
    Background,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleAttribute {
    StructuralStyle(StructuralStyle),
    BasicColor(BasicColor),
    TrueColorFunction(ColorLayer),
    HexFunction(ColorLayer),
    PaletteFunction(ColorLayer),
    NamedExtendedColor(&'static NamedColor),
    Unknown(String),
}

impl StyleAttribute {
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        match name {
            "rgb" => return Self::TrueColorFunction(ColorLayer::Foreground),
            "bgRgb" => return Self::TrueColorFunction(ColorLayer::Background),
            "hex" => return Self::HexFunction(ColorLayer::Foreground),
            "bgHex" => return Self::HexFunction(ColorLayer::Background),
            "color256" => return Self::PaletteFunction(ColorLayer::Foreground),
            "bg256" => return Self::PaletteFunction(ColorLayer::Background),
            _ => {}
        }

        if let Ok(it) = StructuralStyle::from_str(name) {
            return Self::StructuralStyle(it);
        }
        if let Ok(it) = BasicColor::from_str(name) {
            return Self::BasicColor(it);
        }
        if let Some(it) = named_colors().lookup_extended(name) {
            return Self::NamedExtendedColor(it);
        }

        Self::Unknown(name.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFunctionKind {
    TrueColor,
    Hex,
    Palette,
}

/// A color function bound to the style it was accessed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFunction {
    pub base: Style,
    pub kind: ColorFunctionKind,
    pub layer: ColorLayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorArgs<'a> {
    Rgb(u8, u8, u8),
    Hex(&'a str),
    Index(i64),
}

impl ColorFunction {
    #[rustfmt::skip]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match (self.kind, self.layer) {
            (ColorFunctionKind::TrueColor, ColorLayer::Foreground) => "rgb",
            (ColorFunctionKind::TrueColor, ColorLayer::Background) => "bgRgb",
            (ColorFunctionKind::Hex,       ColorLayer::Foreground) => "hex",
            (ColorFunctionKind::Hex,       ColorLayer::Background) => "bgHex",
            (ColorFunctionKind::Palette,   ColorLayer::Foreground) => "color256",
            (ColorFunctionKind::Palette,   ColorLayer::Background) => "bg256",
        }
    }

    /// # Errors
    ///
    /// - [`PaintError::ArgumentMismatch`] if the argument shape does not fit the function.
    /// - Whatever the typed builder method returns ([`Style::hex`], [`Style::color256`]).
    pub fn call(&self, args: ColorArgs<'_>) -> PaintResult<Style> {
        let base = &self.base;
        match (self.kind, self.layer, args) {
            (ColorFunctionKind::TrueColor, ColorLayer::Foreground, ColorArgs::Rgb(r, g, b)) => {
                Ok(base.rgb(r, g, b))
            }
            (ColorFunctionKind::TrueColor, ColorLayer::Background, ColorArgs::Rgb(r, g, b)) => {
                Ok(base.bg_rgb(r, g, b))
            }
            (ColorFunctionKind::Hex, ColorLayer::Foreground, ColorArgs::Hex(hex)) => base.hex(hex),
            (ColorFunctionKind::Hex, ColorLayer::Background, ColorArgs::Hex(hex)) => {
                base.bg_hex(hex)
            }
            (ColorFunctionKind::Palette, ColorLayer::Foreground, ColorArgs::Index(index)) => {
                base.color256(index)
            }
            (ColorFunctionKind::Palette, ColorLayer::Background, ColorArgs::Index(index)) => {
                base.bg256(index)
            }
            _ => Err(PaintError::ArgumentMismatch {
                name: self.name().to_string(),
                expected: self.expected_args().to_string(),
            }),
        }
    }

    fn expected_args(&self) -> &'static str {
        match self.kind {
            ColorFunctionKind::TrueColor => "three 0-255 channels",
            ColorFunctionKind::Hex => "a hex string",
            ColorFunctionKind::Palette => "a palette index",
        }
    }
}

/// The result of accessing a name on a [Style].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    Applied(Style),
    Function(ColorFunction),
}

impl Style {
    /// Dynamic, name based access. Plain attributes are applied right away, color
    /// functions are returned unapplied.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::NoSuchStyle`] for names that are not known.
    pub fn access(&self, name: &str) -> PaintResult<Attribute> {
        let function = |kind: ColorFunctionKind, layer: ColorLayer| -> PaintResult<Attribute> {
            Ok(Attribute::Function(ColorFunction {
                base: self.clone(),
                kind,
                layer,
            }))
        };

        match StyleAttribute::resolve(name) {
            StyleAttribute::StructuralStyle(it) => Ok(Attribute::Applied(self.structural(it))),
            StyleAttribute::BasicColor(it) => Ok(Attribute::Applied(self.color(it))),
            StyleAttribute::TrueColorFunction(layer) => {
                function(ColorFunctionKind::TrueColor, layer)
            }
            StyleAttribute::HexFunction(layer) => function(ColorFunctionKind::Hex, layer),
            StyleAttribute::PaletteFunction(layer) => function(ColorFunctionKind::Palette, layer),
            StyleAttribute::NamedExtendedColor(named_color) => {
                let rgb = named_color.rgb;
                Ok(Attribute::Applied(self.with(SgrCode::ForegroundRGB(
                    rgb.red, rgb.green, rgb.blue,
                ))))
            }
            StyleAttribute::Unknown(name) => Err(PaintError::NoSuchStyle { name }),
        }
    }

    /// Like [`Self::access`], for names that do not take arguments.
    ///
    /// # Errors
    ///
    /// - [`PaintError::NoSuchStyle`] for unknown names.
    /// - [`PaintError::AttributeNeedsArguments`] for color function names.
    pub fn attr(&self, name: &str) -> PaintResult<Style> {
        match self.access(name)? {
            Attribute::Applied(style) => Ok(style),
            Attribute::Function(_) => Err(PaintError::AttributeNeedsArguments {
                name: name.to_string(),
            }),
        }
    }
}
