// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Fallible operations on the style builder return this. Everything else in the crate
/// degrades to a safe default (black, zero padding, one word per line) instead of failing.
pub type PaintResult<T> = Result<T, PaintError>;

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum PaintError {
    #[error("🎨 Invalid hex color: '{input}'")]
    #[diagnostic(
        code(ansi_paint::invalid_color_format),
        help("Use exactly 6 hex digits, with or without a leading '#', eg: '#FF8800'")
    )]
    InvalidColorFormat { input: String },

    #[error("🔢 Palette index {index} is out of range")]
    #[diagnostic(
        code(ansi_paint::invalid_palette_index),
        help("256-color palette indices must be between 0 and 255")
    )]
    InvalidPaletteIndex { index: i64 },

    #[error("❓ No such style: '{name}'")]
    #[diagnostic(
        code(ansi_paint::no_such_style),
        help("Use a style (bold), a basic color (brightRed), or an extended color (tomato)")
    )]
    NoSuchStyle { name: String },

    #[error("🧩 '{name}' is a color function and needs arguments")]
    #[diagnostic(code(ansi_paint::attribute_needs_arguments))]
    AttributeNeedsArguments { name: String },

    #[error("🧩 '{name}' was called with the wrong arguments, expected {expected}")]
    #[diagnostic(code(ansi_paint::argument_mismatch))]
    ArgumentMismatch { name: String, expected: String },
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_includes_the_offending_input() {
        let it = PaintError::InvalidColorFormat {
            input: "#12".into(),
        };
        assert_eq!(it.to_string(), "🎨 Invalid hex color: '#12'");

        let it = PaintError::InvalidPaletteIndex { index: 256 };
        assert_eq!(it.to_string(), "🔢 Palette index 256 is out of range");
    }

    #[test]
    fn diagnostic_codes() {
        let it = PaintError::NoSuchStyle {
            name: "sparkly".into(),
        };
        let code = it.code().map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("ansi_paint::no_such_style"));
        assert!(it.help().is_some());
    }
}
