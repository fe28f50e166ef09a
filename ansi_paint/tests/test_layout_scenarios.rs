// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use ansi_paint::{Alignment, BoxOptions, BoxStyle, TableOptions, center, draw_box, line,
                 list, strip, table, wrap};
use pretty_assertions::assert_eq;

#[test]
fn box_around_a_word() {
    let options = BoxOptions {
        padding: 0,
        ..Default::default()
    };
    assert_eq!(strip(&draw_box("Hi", &options)), "╭────╮\n│ Hi │\n╰────╯");
}

#[test]
fn double_box_around_styled_lines() {
    let options = BoxOptions {
        border_color: "gold".into(),
        style: BoxStyle::Double,
        padding: 1,
    };
    let text = format!("{}\nab", ansi_paint::Style::default().red().paint("abcd"));
    assert_eq!(
        strip(&draw_box(&text, &options)),
        "╔════════╗\n║  abcd  ║\n║  ab    ║\n╚════════╝"
    );
}

#[test]
fn header_rule_and_body() {
    let rows = vec![vec!["A", "BB"], vec!["1", "22"]];
    assert_eq!(
        table(&rows, &TableOptions::default()),
        "\x1b[1mA │ BB\x1b[0m\n\x1b[2m──┼───\x1b[0m\n1 │ 22"
    );
}

#[test]
fn aligned_columns_with_a_short_row() {
    let rows = vec![
        vec!["name".to_string(), "qty".to_string()],
        vec!["apple".to_string(), "3".to_string()],
        vec!["fig".to_string()],
    ];
    let options = TableOptions {
        align: vec![Alignment::Left, Alignment::Right],
    };
    assert_eq!(
        strip(&table(&rows, &options)),
        "name  │ qty\n──────┼────\napple │   3\nfig   │    "
    );
}

#[test]
fn rule_with_a_label() {
    assert_eq!(line(11, "X"), "──── X ────");
    assert_eq!(strip(&line(20, "")), "─".repeat(20));
}

#[test]
fn text_helpers_compose() {
    let wrapped = wrap("the quick brown fox", 10);
    assert_eq!(wrapped, "the quick\nbrown fox");

    let centered = wrapped.lines().map(|it| center(it, 11)).collect::<Vec<_>>();
    assert_eq!(centered, vec![" the quick ", " brown fox "]);

    assert_eq!(strip(&list(&["one", "two"], "-")), "- one\n- two");
}
