// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The process-wide named color table. It is built once, from two static tables, by an
//! explicit [`NamedColorTable::merge`] step:
//!
//! 1. [`EXTENDED_COLORS`] are inserted first, in declaration order.
//! 2. [`ANSI_HEX_COLORS`] are appended only when their name is not already present, so an
//!    extended name wins on collision.
//!
//! Lookups are case-sensitive. Iteration follows insertion order, which is what
//! [`crate::nearest_named_color`] relies on to break ties.

use std::{collections::HashMap, sync::LazyLock};

use crate::RgbValue;

/// Hex values of the 16 basic colors, as rendered by a typical xterm.
#[rustfmt::skip]
pub const ANSI_HEX_COLORS: &[(&str, &str)] = &[
    ("black",         "#000000"),
    ("red",           "#CD0000"),
    ("green",         "#00CD00"),
    ("yellow",        "#CDCD00"),
    ("blue",          "#0000CD"),
    ("magenta",       "#CD00CD"),
    ("cyan",          "#00CDCD"),
    ("white",         "#E5E5E5"),
    ("gray",          "#808080"),
    ("brightRed",     "#FF0000"),
    ("brightGreen",   "#00FF00"),
    ("brightYellow",  "#FFFF00"),
    ("brightBlue",    "#0000FF"),
    ("brightMagenta", "#FF00FF"),
    ("brightCyan",    "#00FFFF"),
    ("brightWhite",   "#FFFFFF"),
];

/// More info: <https://developer.mozilla.org/en-US/docs/Web/CSS/named-color>
#[rustfmt::skip]
pub const EXTENDED_COLORS: &[(&str, &str)] = &[
    ("maroon",         "#800000"),
    ("darkred",        "#8B0000"),
    ("firebrick",      "#B22222"),
    ("crimson",        "#DC143C"),
    ("tomato",         "#FF6347"),
    ("coral",          "#FF7F50"),
    ("indianred",      "#CD5C5C"),
    ("lightcoral",     "#F08080"),
    ("salmon",         "#FA8072"),
    ("darksalmon",     "#E9967A"),
    ("lightsalmon",    "#FFA07A"),
    ("orangered",      "#FF4500"),
    ("darkorange",     "#FF8C00"),
    ("orange",         "#FFA500"),
    ("gold",           "#FFD700"),
    ("yellowgreen",    "#9ACD32"),
    ("olivedrab",      "#6B8E23"),
    ("olive",          "#808000"),
    ("darkolivegreen", "#556B2F"),
    ("forestgreen",    "#228B22"),
    ("seagreen",       "#2E8B57"),
    ("mediumseagreen", "#3CB371"),
    ("darkcyan",       "#008B8B"),
    ("teal",           "#008080"),
    ("darkturquoise",  "#00CED1"),
    ("turquoise",      "#40E0D0"),
    ("lightseagreen",  "#20B2AA"),
    ("cadetblue",      "#5F9EA0"),
    ("steelblue",      "#4682B4"),
    ("cornflowerblue", "#6495ED"),
    ("royalblue",      "#4169E1"),
    ("mediumblue",     "#0000CD"),
    ("darkblue",       "#00008B"),
    ("navy",           "#000080"),
    ("midnightblue",   "#191970"),
    ("indigo",         "#4B0082"),
    ("darkmagenta",    "#8B008B"),
    ("purple",         "#800080"),
    ("mediumorchid",   "#BA55D3"),
    ("orchid",         "#DA70D6"),
    ("violet",         "#EE82EE"),
    ("plum",           "#DDA0DD"),
    ("thistle",        "#D8BFD8"),
    ("silver",         "#C0C0C0"),
    ("lightgray",      "#D3D3D3"),
    ("darkgray",       "#A9A9A9"),
    ("dimgray",        "#696969"),
    ("slategray",      "#708090"),
    ("lightslategray", "#778899"),
    ("rosybrown",      "#BC8F8F"),
    ("palevioletred",  "#D87093"),
    ("hotpink",        "#FF69B4"),
    ("deeppink",       "#FF1493"),
    ("fuchsia",        "#FF00FF"),
    ("paleturquoise",  "#AFEEEE"),
    ("lightblue",      "#ADD8E6"),
    ("skyblue",        "#87CEEB"),
    ("deepskyblue",    "#00BFFF"),
    ("dodgerblue",     "#1E90FF"),
    ("azure",          "#F0FFFF"),
    ("aliceblue",      "#F0F8FF"),
    ("ghostwhite",     "#F8F8FF"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorOrigin {
    Extended,
    AnsiHex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedColor {
    pub name: &'static str,
    pub hex: &'static str,
    pub rgb: RgbValue,
    pub origin: ColorOrigin,
}

#[derive(Debug, Clone, Default)]
pub struct NamedColorTable {
    entries: Vec<NamedColor>,
    index: HashMap<&'static str, usize>,
}

static NAMED_COLORS: LazyLock<NamedColorTable> =
    LazyLock::new(|| NamedColorTable::merge(EXTENDED_COLORS, ANSI_HEX_COLORS));

/// The combined table, initialized on first use and read-only afterwards.
pub fn named_colors() -> &'static NamedColorTable { &NAMED_COLORS }

impl NamedColorTable {
    /// Entries with a malformed hex value are skipped.
    #[must_use]
    pub fn merge(
        extended: &[(&'static str, &'static str)],
        ansi_hex: &[(&'static str, &'static str)],
    ) -> Self {
        let mut acc = Self::default();
        for &(name, hex) in extended {
            acc.insert(name, hex, ColorOrigin::Extended);
        }
        for &(name, hex) in ansi_hex {
            if !acc.index.contains_key(name) {
                acc.insert(name, hex, ColorOrigin::AnsiHex);
            }
        }
        acc
    }

    fn insert(&mut self, name: &'static str, hex: &'static str, origin: ColorOrigin) {
        let Some(rgb) = RgbValue::parse_hex(hex) else {
            tracing::warn!(message = "Skipping named color with bad hex", name, hex);
            return;
        };
        let named_color = NamedColor {
            name,
            hex,
            rgb,
            origin,
        };
        match self.index.get(name) {
            Some(&existing) => self.entries[existing] = named_color,
            None => {
                self.index.insert(name, self.entries.len());
                self.entries.push(named_color);
            }
        }
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&NamedColor> {
        self.index.get(name).map(|&it| &self.entries[it])
    }

    /// Only names that came from the extended palette. These are the ones that the style
    /// builder accepts as attributes.
    #[must_use]
    pub fn lookup_extended(&self, name: &str) -> Option<&NamedColor> {
        self.lookup(name)
            .filter(|it| it.origin == ColorOrigin::Extended)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedColor> { self.entries.iter() }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn combined_table_sizes() {
        assert_eq!(EXTENDED_COLORS.len(), 62);
        assert_eq!(ANSI_HEX_COLORS.len(), 16);
        assert_eq!(named_colors().len(), 78);
    }

    #[test]
    fn iteration_order_is_extended_then_ansi() {
        let names = named_colors().iter().map(|it| it.name).collect::<Vec<_>>();
        assert_eq!(names.first(), Some(&"maroon"));
        assert_eq!(names[61], "ghostwhite");
        assert_eq!(names[62], "black");
        assert_eq!(names.last(), Some(&"brightWhite"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let it = named_colors().lookup("tomato").unwrap();
        assert_eq!(it.rgb, RgbValue::from_u8(255, 99, 71));
        assert_eq!(it.origin, ColorOrigin::Extended);
        assert!(named_colors().lookup("Tomato").is_none());
    }

    #[test]
    fn basic_colors_are_not_extended() {
        assert!(named_colors().lookup("red").is_some());
        assert!(named_colors().lookup_extended("red").is_none());
        assert!(named_colors().lookup_extended("navy").is_some());
    }

    #[test]
    fn extended_wins_on_collision() {
        let extended = [("red", "#111111"), ("teal", "#008080")];
        let ansi_hex = [("red", "#CD0000"), ("blue", "#0000CD")];
        let table = NamedColorTable::merge(&extended, &ansi_hex);

        assert_eq!(table.len(), 3);
        let red = table.lookup("red").unwrap();
        assert_eq!(red.hex, "#111111");
        assert_eq!(red.origin, ColorOrigin::Extended);
        let names = table.iter().map(|it| it.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["red", "teal", "blue"]);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let table = NamedColorTable::merge(&[("oops", "#12345")], &[("black", "#000000")]);
        assert_eq!(table.len(), 1);
        assert!(table.lookup("oops").is_none());
    }
}
