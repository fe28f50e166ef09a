// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Layout composers. All of them measure with [`visible_len`], so their input may already
//! be styled and the borders, columns and rules still line up.

use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::{ColorInput, PadSide, Style, center, pad, visible_len};

#[rustfmt::skip]
pub mod glyphs {
    pub const HORIZONTAL_RULE_GLYPH: char = '─';
    pub const TABLE_COLUMN_SEPARATOR: &str = " │ ";
    pub const TABLE_RULE_CROSSING: &str = "─┼─";
    pub const BULLET_GLYPH: &str = "•";
    pub const PROGRESS_FILLED_GLYPH: char = '█';
    pub const PROGRESS_EMPTY_GLYPH: char = '░';
}

pub const ASCII_ART_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum BoxStyle {
    #[default]
    Single,
    Double,
    Triple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGlyphs {
    pub top_left: char,
    pub horizontal: char,
    pub top_right: char,
    pub vertical: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BoxStyle {
    /// Unknown names fall back to [`BoxStyle::Single`].
    #[must_use]
    pub fn from_name(name: &str) -> Self { name.parse().unwrap_or_default() }

    #[rustfmt::skip]
    #[must_use]
    pub fn glyphs(self) -> BoxGlyphs {
        let [top_left, horizontal, top_right, vertical, bottom_left, bottom_right] =
            match self {
                BoxStyle::Single => ['╭', '─', '╮', '│', '╰', '╯'],
                BoxStyle::Double => ['╔', '═', '╗', '║', '╚', '╝'],
                BoxStyle::Triple => ['╓', '─', '╖', '║', '╙', '╜'],
            };
        BoxGlyphs { top_left, horizontal, top_right, vertical, bottom_left, bottom_right }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxOptions {
    pub border_color: ColorInput,
    pub style: BoxStyle,
    pub padding: usize,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            border_color: ColorInput::from("white"),
            style: BoxStyle::Single,
            padding: 1,
        }
    }
}

fn repeat_char(ch: char, count: usize) -> String { std::iter::repeat_n(ch, count).collect() }

/// Draw a border around (possibly multi-line) text. Only the border glyphs are colored.
/// Every content line is filled to the widest line, plus one space and `padding` spaces on
/// each side.
#[must_use]
pub fn draw_box(text: &str, options: &BoxOptions) -> String {
    let BoxGlyphs {
        top_left,
        horizontal,
        top_right,
        vertical,
        bottom_left,
        bottom_right,
    } = options.style.glyphs();
    let border = Style::default().fg_color(&options.border_color);

    let lines = text.split('\n').collect::<Vec<_>>();
    let max_visible = lines.iter().map(|it| visible_len(it)).max().unwrap_or(0);
    let bar = repeat_char(horizontal, max_visible + 2 + 2 * options.padding);
    let side_padding = repeat_char(' ', options.padding);
    let vertical = border.paint(vertical.to_string());

    let mut acc = vec![border.paint(format!("{top_left}{bar}{top_right}"))];
    for line in lines {
        let fill = repeat_char(' ', max_visible - visible_len(line));
        acc.push(format!(
            "{vertical} {side_padding}{line}{fill}{side_padding} {vertical}"
        ));
    }
    acc.push(border.paint(format!("{bottom_left}{bar}{bottom_right}")));
    acc.join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Pad a cell to `width` visible columns. Center puts the odd space on the right.
    #[must_use]
    pub fn align(self, cell: &str, width: usize) -> String {
        match self {
            Alignment::Left => pad(cell, width, PadSide::Right, ' '),
            Alignment::Right => pad(cell, width, PadSide::Left, ' '),
            Alignment::Center => {
                let slack = width.saturating_sub(visible_len(cell));
                let left = slack / 2;
                format!("{}{cell}{}", repeat_char(' ', left), repeat_char(' ', slack - left))
            }
        }
    }
}

/// Per-column alignment. Columns without an entry are left aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOptions {
    pub align: Vec<Alignment>,
}

/// The first row is the header (bold), followed by a dim rule and the body rows. Rows
/// shorter than the widest row are filled with empty cells.
#[must_use]
pub fn table<S: AsRef<str>>(rows: &[Vec<S>], options: &TableOptions) -> String {
    let Some((header, body)) = rows.split_first() else {
        return String::new();
    };

    let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
    let cell = |row: &[S], index: usize| -> String {
        row.get(index).map_or("", |it| it.as_ref()).to_owned()
    };
    let widths = (0..column_count)
        .map(|index| {
            rows.iter()
                .map(|row| visible_len(&cell(row.as_slice(), index)))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    let format_row = |row: &[S]| -> String {
        widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let alignment = options.align.get(index).copied().unwrap_or_default();
                alignment.align(&cell(row, index), width)
            })
            .collect::<Vec<_>>()
            .join(glyphs::TABLE_COLUMN_SEPARATOR)
    };

    let rule = widths
        .iter()
        .map(|&width| repeat_char(glyphs::HORIZONTAL_RULE_GLYPH, width))
        .collect::<Vec<_>>()
        .join(glyphs::TABLE_RULE_CROSSING);

    let mut acc = Style::default().bold().paint(format_row(header.as_slice()));
    acc.push('\n');
    acc.push_str(&Style::default().dim().paint(rule));
    for row in body {
        acc.push('\n');
        acc.push_str(&format_row(row.as_slice()));
    }
    acc
}

/// A horizontal rule, with `text` in the middle when it is not empty.
#[must_use]
pub fn line(width: usize, text: &str) -> String {
    let text_len = visible_len(text);
    if text_len == 0 {
        return repeat_char(glyphs::HORIZONTAL_RULE_GLYPH, width);
    }

    let side = repeat_char(
        glyphs::HORIZONTAL_RULE_GLYPH,
        width.saturating_sub(text_len + 2) / 2,
    );
    let mut acc = format!("{side} {text} {side}");
    if visible_len(&acc) < width {
        acc.push(glyphs::HORIZONTAL_RULE_GLYPH);
    }
    acc
}

/// Bold centered title, and a dim centered subtitle under it if there is one.
#[must_use]
pub fn title(title: &str, subtitle: &str, width: usize) -> String {
    let mut acc = Style::default().bold().paint(center(title, width));
    if !subtitle.is_empty() {
        acc.push('\n');
        acc.push_str(&Style::default().dim().paint(center(subtitle, width)));
    }
    acc
}

/// One item per line, each prefixed with a cyan `symbol`, eg: [`glyphs::BULLET_GLYPH`].
#[must_use]
pub fn list<S: AsRef<str>>(items: &[S], symbol: &str) -> String {
    let symbol = Style::default().cyan().paint(symbol);
    items
        .iter()
        .map(|item| format!("{symbol} {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBarOptions {
    pub width: usize,
    pub filled_char: char,
    pub empty_char: char,
}

impl Default for ProgressBarOptions {
    fn default() -> Self {
        Self {
            width: 50,
            filled_char: glyphs::PROGRESS_FILLED_GLYPH,
            empty_char: glyphs::PROGRESS_EMPTY_GLYPH,
        }
    }
}

/// `value / total` clamped to `[0, 1]`; a non-positive `total` counts as no progress. The
/// filled run is red below 30%, yellow below 70%, and green from there on.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn progress_bar(value: f64, total: f64, options: &ProgressBarOptions) -> String {
    let progress = if total > 0.0 { (value / total).clamp(0.0, 1.0) } else { 0.0 };
    let progress = if progress.is_nan() { 0.0 } else { progress };

    let width = options.width;
    let filled = ((width as f64 * progress).round() as usize).min(width);
    let percentage = (progress * 100.0).round() as u8;

    let filled_style = match percentage {
        70.. => Style::default().green(),
        30.. => Style::default().yellow(),
        _ => Style::default().red(),
    };

    format!(
        "{}{} {percentage}%",
        filled_style.paint(repeat_char(options.filled_char, filled)),
        Style::default().dim().paint(repeat_char(options.empty_char, width - filled)),
    )
}

#[rustfmt::skip]
fn font_glyph(ch: char) -> Option<[&'static str; ASCII_ART_ROWS]> {
    Some(match ch {
        'A' => [" ███ ", "█   █", "█████", "█   █", "█   █"],
        'B' => ["████ ", "█   █", "████ ", "█   █", "████ "],
        'C' => [" ███ ", "█   █", "█    ", "█   █", " ███ "],
        'D' => ["████ ", "█   █", "█   █", "█   █", "████ "],
        'E' => ["█████", "█    ", "███  ", "█    ", "█████"],
        'I' => ["█████", "  █  ", "  █  ", "  █  ", "█████"],
        'L' => ["█    ", "█    ", "█    ", "█    ", "█████"],
        'M' => ["█   █", "██ ██", "█ █ █", "█   █", "█   █"],
        'O' => [" ███ ", "█   █", "█   █", "█   █", " ███ "],
        'P' => ["████ ", "█   █", "████ ", "█    ", "█    "],
        'R' => ["████ ", "█   █", "████ ", "█ █  ", "█  ██"],
        'S' => [" ████", "█    ", " ███ ", "    █", "████ "],
        'T' => ["█████", "  █  ", "  █  ", "  █  ", "  █  "],
        ' ' => ["     ", "     ", "     ", "     ", "     "],
        _ => return None,
    })
}

/// A 5 row block letter banner. Input is upper-cased; chars without a glyph render as
/// blank columns of the same width. Every glyph is followed by one space.
#[must_use]
pub fn ascii_art(text: &str) -> String {
    let chars = text.chars().flat_map(char::to_uppercase).collect::<Vec<_>>();
    (0..ASCII_ART_ROWS)
        .map(|row| {
            chars.iter().fold(String::new(), |mut acc, &ch| {
                match font_glyph(ch) {
                    Some(glyph) => acc.push_str(glyph[row]),
                    None => acc.push_str("     "),
                }
                acc.push(' ');
                acc
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::strip;

    fn stripped_lines(text: &str) -> Vec<String> {
        strip(text).split('\n').map(str::to_string).collect()
    }

    #[test]
    fn box_without_padding() {
        let options = BoxOptions {
            padding: 0,
            ..Default::default()
        };
        assert_eq!(
            stripped_lines(&draw_box("Hi", &options)),
            vec!["╭────╮", "│ Hi │", "╰────╯"]
        );
    }

    #[test]
    fn box_defaults_and_multiline() {
        let it = draw_box("a\nbcd", &BoxOptions::default());
        assert_eq!(
            stripped_lines(&it),
            vec!["╭───────╮", "│  a    │", "│  bcd  │", "╰───────╯"]
        );
        // White border.
        assert!(it.starts_with("\x1b[38;2;229;229;229m╭"));
    }

    #[test]
    fn box_measures_visible_width() {
        let styled = Style::default().bold().paint("Hi");
        let options = BoxOptions {
            style: BoxStyle::Double,
            padding: 0,
            ..Default::default()
        };
        let lines = stripped_lines(&draw_box(&format!("{styled}\nabc"), &options));
        assert_eq!(lines, vec!["╔═════╗", "║ Hi  ║", "║ abc ║", "╚═════╝"]);
    }

    #[test_case("double", BoxStyle::Double)]
    #[test_case("triple", BoxStyle::Triple)]
    #[test_case("fancy", BoxStyle::Single)]
    fn box_style_from_name(name: &str, expected: BoxStyle) {
        assert_eq!(BoxStyle::from_name(name), expected);
    }

    #[test]
    fn table_widths_header_and_rule() {
        let rows = vec![vec!["A", "BB"], vec!["1", "22"]];
        let it = table(&rows, &TableOptions::default());
        assert_eq!(
            it,
            "\x1b[1mA │ BB\x1b[0m\n\x1b[2m──┼───\x1b[0m\n1 │ 22"
        );
    }

    #[test]
    fn table_alignment_and_short_rows() {
        let rows = vec![
            vec!["name", "qty", "note"],
            vec!["x", "1"],
            vec!["yy", "100", "ok"],
        ];
        let options = TableOptions {
            align: vec![Alignment::Center, Alignment::Right],
        };
        assert_eq!(
            stripped_lines(&table(&rows, &options)),
            vec![
                "name │ qty │ note",
                "─────┼─────┼─────",
                " x   │   1 │     ",
                " yy  │ 100 │ ok  ",
            ]
        );
    }

    #[test]
    fn table_of_nothing() {
        let rows: Vec<Vec<&str>> = vec![];
        assert_eq!(table(&rows, &TableOptions::default()), "");
    }

    #[test_case(Alignment::Left, "ab   ")]
    #[test_case(Alignment::Right, "   ab")]
    #[test_case(Alignment::Center, " ab  ")]
    fn align_cell(alignment: Alignment, expected: &str) {
        assert_eq!(alignment.align("ab", 5), expected);
    }

    #[test]
    fn line_without_text() {
        assert_eq!(line(10, ""), "──────────");
        assert_eq!(line(0, ""), "");
    }

    #[test_case(11, "X", "──── X ────")]
    #[test_case(10, "X", "─── X ────")]
    #[test_case(3, "long", " long ")]
    fn line_with_text(width: usize, text: &str, expected: &str) {
        assert_eq!(line(width, text), expected);
    }

    #[test]
    fn line_with_styled_text() {
        let it = line(11, &Style::default().red().paint("X"));
        assert_eq!(visible_len(&it), 11);
    }

    #[test]
    fn title_and_subtitle() {
        assert_eq!(title("Hi", "", 6), "\x1b[1m  Hi\x1b[0m");
        assert_eq!(
            title("Hi", "sub", 6),
            "\x1b[1m  Hi\x1b[0m\n\x1b[2m sub\x1b[0m"
        );
    }

    #[test]
    fn bullet_list() {
        assert_eq!(
            list(&["one", "two"], glyphs::BULLET_GLYPH),
            "\x1b[36m•\x1b[0m one\n\x1b[36m•\x1b[0m two"
        );
        assert_eq!(list::<&str>(&[], "-"), "");
    }

    #[test_case(0.0, 10.0, "\x1b[31m\x1b[0m\x1b[2m░░░░░░░░░░\x1b[0m 0%")]
    #[test_case(5.0, 10.0, "\x1b[33m█████\x1b[0m\x1b[2m░░░░░\x1b[0m 50%")]
    #[test_case(7.0, 10.0, "\x1b[32m███████\x1b[0m\x1b[2m░░░\x1b[0m 70%")]
    #[test_case(20.0, 10.0, "\x1b[32m██████████\x1b[0m\x1b[2m\x1b[0m 100%")]
    #[test_case(5.0, 0.0, "\x1b[31m\x1b[0m\x1b[2m░░░░░░░░░░\x1b[0m 0%")]
    fn progress(value: f64, total: f64, expected: &str) {
        let options = ProgressBarOptions {
            width: 10,
            ..Default::default()
        };
        assert_eq!(progress_bar(value, total, &options), expected);
    }

    #[test]
    fn ascii_art_banner() {
        let it = ascii_art("mi?");
        let rows = it.split('\n').collect::<Vec<_>>();
        assert_eq!(rows.len(), ASCII_ART_ROWS);
        assert_eq!(rows[0], "█   █ █████       ");
        assert!(rows.iter().all(|row| row.chars().count() == 18));
    }
}
