// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text measurement that ignores escape sequences. A styled string has two lengths: the
//! raw length (including every escape byte) and the visible length (what the terminal
//! actually shows). Everything in [`crate::layout`] measures with the visible one.
//!
//! Visible length is the number of [`char`]s left after stripping. Wide glyphs (CJK,
//! emoji) count as one.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use strum_macros::{AsRefStr, EnumString};

/// Matches CSI and SGR style sequences, whether produced by this crate or not.
pub const ANSI_ESCAPE_PATTERN: &str =
    r"[\x1b\x{9b}][\[()#;?]*(?:[0-9]{1,4}(?:;[0-9]{0,4})*)?[0-9A-ORZcf-nqry=><]";

static ANSI_ESCAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ANSI_ESCAPE_PATTERN).expect("Invalid ANSI escape regex"));

/// Remove every escape sequence. Borrows when there was nothing to remove.
pub fn strip(text: &str) -> Cow<'_, str> { ANSI_ESCAPE_REGEX.replace_all(text, "") }

#[must_use]
pub fn contains_ansi_escape_sequence(text: &str) -> bool { ANSI_ESCAPE_REGEX.is_match(text) }

#[must_use]
pub fn visible_len(text: &str) -> usize { strip(text).chars().count() }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum PadSide {
    Left,
    #[default]
    Right,
}

/// Adds `width - visible_len` copies of `pad_char` on one side. Never truncates.
#[must_use]
pub fn pad(text: &str, width: usize, side: PadSide, pad_char: char) -> String {
    let fill = fill(width.saturating_sub(visible_len(text)), pad_char);
    match side {
        PadSide::Left => fill + text,
        PadSide::Right => format!("{text}{fill}"),
    }
}

/// Left padding only. When the slack is odd the extra column goes to the (implicit)
/// right side.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let left = width.saturating_sub(visible_len(text)) / 2;
    fill(left, ' ') + text
}

/// Greedy word packing on single spaces. The joining space counts toward `width`. A word
/// wider than `width` gets a line of its own and is not split. Empty lines are never
/// emitted, except for empty input which gives back an empty string.
#[must_use]
pub fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = vec![];
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split(' ') {
        let word_len = visible_len(word);
        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

fn fill(count: usize, pad_char: char) -> String { std::iter::repeat_n(pad_char, count).collect() }

/// A borrowed string that knows both of its lengths. Nothing is cached, the stripped form
/// is recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleText<'a> {
    pub raw: &'a str,
}

impl<'a> From<&'a str> for VisibleText<'a> {
    fn from(raw: &'a str) -> Self { Self { raw } }
}

impl VisibleText<'_> {
    #[must_use]
    pub fn raw_len(&self) -> usize { self.raw.chars().count() }

    #[must_use]
    pub fn visible_len(&self) -> usize { visible_len(self.raw) }

    #[must_use]
    pub fn stripped(&self) -> Cow<'_, str> { strip(self.raw) }
}
