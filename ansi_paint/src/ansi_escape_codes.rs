// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use std::fmt::{Display, Formatter, Result};

use const_format::formatcp;

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// Terminates every styled span. A [`crate::Style`] appends exactly one of these.
pub const RESET: &str = formatcp!("{csi}0{sgr}", csi = CSI, sgr = SGR);

pub const HIDE_CURSOR: &str = formatcp!("{csi}?25l", csi = CSI);
pub const SHOW_CURSOR: &str = formatcp!("{csi}?25h", csi = CSI);

/// A single escape fragment. The [Display] impl renders the raw bytes that are written to
/// the terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Invert,
    Hidden,
    Strikethrough,
    Overline,
    /// One of the 16 basic colors, foreground (30-37, 90-97) or background (40-47,
    /// 100-107). The payload is the SGR parameter itself.
    BasicColor(u8),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

pub mod sgr_code_impl {
    use super::{CSI, Display, Formatter, Result, SGR, SgrCode};

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://www.asciitable.com/>
        /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                    => write!(f, "{CSI}0{SGR}"),
                SgrCode::Bold                     => write!(f, "{CSI}1{SGR}"),
                SgrCode::Dim                      => write!(f, "{CSI}2{SGR}"),
                SgrCode::Italic                   => write!(f, "{CSI}3{SGR}"),
                SgrCode::Underline                => write!(f, "{CSI}4{SGR}"),
                SgrCode::Invert                   => write!(f, "{CSI}7{SGR}"),
                SgrCode::Hidden                   => write!(f, "{CSI}8{SGR}"),
                SgrCode::Strikethrough            => write!(f, "{CSI}9{SGR}"),
                SgrCode::Overline                 => write!(f, "{CSI}53{SGR}"),
                SgrCode::BasicColor(param)        => write!(f, "{CSI}{param}{SGR}"),
                SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}38;5;{index}{SGR}"),
                SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}48;5;{index}{SGR}"),
                SgrCode::ForegroundRGB(r, g, b)   => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
                SgrCode::BackgroundRGB(r, g, b)   => write!(f, "{CSI}48;2;{r};{g};{b}{SGR}"),
            }
        }
    }
}
