// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # ansi_paint
//!
//! Chainable styling of terminal text with ANSI escape sequences, plus the things you
//! end up needing right after: color math, escape aware layout, a spinner, and a styled
//! console log.
//!
//! ## Styles
//!
//! A [`Style`] is an ordered list of SGR fragments. It is a plain value: every builder
//! call returns a new [`Style`], the receiver is left alone.
//!
//! ```
//! use ansi_paint::{Style, strip};
//!
//! let warning = Style::default().bold().yellow();
//! let painted = warning.paint("careful");
//! assert_eq!(painted, "\x1b[1m\x1b[33mcareful\x1b[0m");
//! assert_eq!(strip(&painted), "careful");
//!
//! // Names, including the extended palette, resolve at runtime too.
//! let coral = "bold.coral".parse::<Style>().unwrap();
//! assert_eq!(coral.prefix(), "\x1b[1m\x1b[38;2;255;127;80m");
//! ```
//!
//! ## Layout
//!
//! All layout functions measure *visible* length, so styled input lines up.
//!
//! ```
//! use ansi_paint::{BoxOptions, draw_box, strip};
//!
//! let it = draw_box("Hi", &BoxOptions { padding: 0, ..Default::default() });
//! assert_eq!(strip(&it), "╭────╮\n│ Hi │\n╰────╯");
//! ```
//!
//! ## Logging
//!
//! [`try_initialize_logging`] installs [`StyledLogFormatter`] so that `tracing` events
//! print as `[HH:MM:SS] ⓘ message`.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod ansi_escape_codes;
pub mod ansi_text;
pub mod color_math;
pub mod layout;
pub mod log;
pub mod named_colors;
pub mod output_device;
pub mod paint_error;
pub mod rgb_value;
pub mod spinner;
pub mod style;
pub mod style_attribute;
pub mod style_registry;

// Re-export.
pub use ansi_escape_codes::*;
pub use ansi_text::*;
pub use color_math::*;
pub use layout::*;
pub use log::*;
pub use named_colors::*;
pub use output_device::*;
pub use paint_error::*;
pub use rgb_value::*;
pub use spinner::*;
pub use style::*;
pub use style_attribute::*;
pub use style_registry::*;
