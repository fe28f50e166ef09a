// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `cargo run --example showcase`.

use std::time::Duration;

use ansi_paint::{AnimateOptions, AnimationEffect, BlendMode, BoxOptions, BoxStyle,
                 DEFAULT_BLEND_RATIO, LogConfig, OutputDevice, ProgressBarOptions,
                 ShadeDirection, Spinner, SpinnerConfig, SpinnerFinish, Style,
                 TableOptions, animate, ascii_art, blend, draw_box, generate_shades,
                 gradient, line, list, log_success, nearest_named_color, progress_bar,
                 rainbow, table, title, try_initialize_logging};

#[tokio::main]
async fn main() -> miette::Result<()> {
    try_initialize_logging(&LogConfig::default())?;

    println!("{}", title("ansi_paint", "styles, color math and layout", 60));
    println!("{}", line(60, "styles"));

    // Builders chain, and names resolve at runtime.
    {
        Style::default().bold().italic().underline().apply("bold italic underline").println();
        Style::default().dim().apply("print keeps the line open, ").print();
        Style::default().bright_cyan().bg_blue().apply("bright cyan on blue").println();
        Style::default().hex("#FF7F50")?.apply("coral from hex").println();
        Style::default().color256(202)?.apply("palette entry 202").println();
        let parsed = "dim.strikethrough.teal".parse::<Style>()?;
        parsed.apply("dim strikethrough teal").println();
    }

    println!("{}", line(60, "color math"));
    {
        println!("{}", gradient("a gradient from tomato to gold", "tomato", "gold"));
        println!("{}", rainbow("rainbow text, six colors around"));
        println!(
            "{}",
            blend("blended purple", "red", "blue", DEFAULT_BLEND_RATIO, BlendMode::Normal)
        );
        let shades = generate_shades("#4FC3F7", 6, ShadeDirection::Darken);
        let swatch = shades.iter().map(|it| it.paint("██")).collect::<String>();
        println!("{swatch}");
        println!("nearest to #FE6447 is {}", nearest_named_color("#FE6447"));
    }

    println!("{}", line(60, "layout"));
    {
        let boxed = draw_box(
            "Boxes measure visible width,\nso styled text lines up.",
            &BoxOptions {
                border_color: "orchid".into(),
                style: BoxStyle::Double,
                padding: 1,
            },
        );
        println!("{boxed}");

        let rows = vec![
            vec!["crate", "concern"],
            vec!["tokio", "spinner timer"],
            vec!["tracing", "styled log"],
        ];
        println!("{}", table(&rows, &TableOptions::default()));
        println!("{}", list(&["pad", "center", "wrap"], "•"));
        println!(
            "{}",
            progress_bar(42.0, 100.0, &ProgressBarOptions::default())
        );
        println!("{}", ascii_art("color"));
    }

    println!("{}", line(60, "animation"));
    {
        let mut spinner = Spinner::start(
            SpinnerConfig {
                message: "Mixing colors...".to_string(),
                ..Default::default()
            },
            OutputDevice::new_stdout(),
        )?;
        tokio::time::sleep(Duration::from_millis(1500)).await;
        spinner.stop(SpinnerFinish::default()).await?;

        animate(
            "Pulsing text",
            AnimateOptions {
                effect: AnimationEffect::Pulse,
                interval: Duration::from_millis(200),
                duration: Duration::from_millis(1200),
            },
            OutputDevice::new_stdout(),
        )
        .await?;
    }

    log_success!("showcase finished");
    tracing::warn!(message = "this is a warning", code = 7);

    Ok(())
}
