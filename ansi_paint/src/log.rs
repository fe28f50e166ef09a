// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Console logging that renders `tracing` events with this crate's own styles:
//!
//! ```text
//! [14:03:27] ⓘ Fetching index
//! [14:03:29] ✔ Fetched 42 packages
//! [14:03:29] ▲ Cache is stale age_hours=49
//! [14:03:30] ✖ Could not write lock file
//! [14:03:30] 🐛 [DEBUG] retry=2
//! ```
//!
//! Register [`StyledLogFormatter`] with `tracing_subscriber`, or call
//! [`try_initialize_logging`] with a [`LogConfig`]. Success lines are regular INFO
//! events that carry `success = true`, which is what [`log_success!`](crate::log_success)
//! does.
//!
//! ## Special field handling
//!
//! - The `message` field is the text of the line.
//! - A boolean `success` field switches an INFO line to the success glyph.
//! - Any other field is appended, dim, as ` name=value`.

use std::fmt::{self, Write as _};

use chrono::Local;
use miette::{Context, IntoDiagnostic};
use tracing::{Event, Subscriber,
              field::{Field, Visit}};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer,
                         fmt::{FmtContext, FormatEvent, FormatFields, format::Writer},
                         layer::SubscriberExt,
                         registry::LookupSpan,
                         util::SubscriberInitExt};

use crate::{OutputDevice, Style};

#[rustfmt::skip]
pub mod log_constants {
    pub const TIMESTAMP_FORMAT: &str = "[%H:%M:%S]";
    pub const INFO_GLYPH: &str = "ⓘ ";
    pub const SUCCESS_GLYPH: &str = "✔ ";
    pub const WARN_GLYPH: &str = "▲ ";
    pub const ERROR_GLYPH: &str = "✖ ";
    pub const DEBUG_GLYPH: &str = "🐛 [DEBUG] ";
    pub const MESSAGE_FIELD: &str = "message";
    pub const SUCCESS_FIELD: &str = "success";
}

use log_constants::{DEBUG_GLYPH, ERROR_GLYPH, INFO_GLYPH, MESSAGE_FIELD, SUCCESS_FIELD,
                    SUCCESS_GLYPH, TIMESTAMP_FORMAT, WARN_GLYPH};

/// Log an INFO event that renders with the success glyph. Takes the same arguments as
/// [`tracing::info!`].
#[macro_export]
macro_rules! log_success {
    ($($arg:tt)+) => {
        ::tracing::info!(success = true, $($arg)+)
    };
}

/// This is the "marker" struct that is used to register this formatter with the
/// `tracing_subscriber` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct StyledLogFormatter;

/// How a level is rendered: the glyph style, and the message style (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLook {
    pub glyph: &'static str,
    pub glyph_style: Style,
    pub message_style: Option<Style>,
}

impl LevelLook {
    #[must_use]
    pub fn new(level: tracing::Level, is_success: bool) -> Self {
        let (glyph, glyph_style, message_style) = match level {
            tracing::Level::ERROR => {
                (ERROR_GLYPH, Style::default().red(), Some(Style::default().red().bold()))
            }
            tracing::Level::WARN => {
                (WARN_GLYPH, Style::default().yellow(), Some(Style::default().yellow()))
            }
            tracing::Level::INFO if is_success => {
                (SUCCESS_GLYPH, Style::default().green(), None)
            }
            tracing::Level::INFO => (INFO_GLYPH, Style::default().blue(), None),
            _ => (DEBUG_GLYPH, Style::default().dim(), Some(Style::default().dim())),
        };
        Self {
            glyph,
            glyph_style,
            message_style,
        }
    }
}

impl<S, N> FormatEvent<S, N> for StyledLogFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut f: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = VisitEventAndCollectFields::default();
        event.record(&mut fields);

        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        write!(f, "{} ", Style::default().dim().paint(timestamp))?;

        let look = LevelLook::new(*event.metadata().level(), fields.is_success);
        write!(f, "{}", look.glyph_style.paint(look.glyph))?;
        match &look.message_style {
            Some(style) => write!(f, "{}", style.paint(&fields.message))?,
            None => write!(f, "{}", fields.message)?,
        }

        if !fields.extra.is_empty() {
            let mut extra = String::new();
            for (name, value) in &fields.extra {
                write!(extra, " {name}={value}")?;
            }
            write!(f, "{}", Style::default().dim().paint(extra))?;
        }

        writeln!(f)
    }
}

/// Collects the fields of one event, keeping the order they were recorded in.
#[derive(Debug, Default)]
pub struct VisitEventAndCollectFields {
    pub message: String,
    pub is_success: bool,
    pub extra: Vec<(&'static str, String)>,
}

impl Visit for VisitEventAndCollectFields {
    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == SUCCESS_FIELD {
            self.is_success = value;
        } else {
            self.extra.push((field.name(), value.to_string()));
        }
    }

    /// Use [`std::fmt::Display`] formatting for strings, so they are not quoted.
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == MESSAGE_FIELD {
            self.message = value.to_string();
        } else {
            self.extra.push((field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let value = format!("{value:?}");
        if field.name() == MESSAGE_FIELD {
            self.message = value;
        } else {
            self.extra.push((field.name(), value));
        }
    }
}

/// Where the log lines go.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
    OutputDevice(OutputDevice),
}

#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    pub display: DisplayPreference,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            display: DisplayPreference::Stdout,
        }
    }
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// This erases the concrete type of the writer, and returns a boxed layer. This does not
/// initialize the tracing system, see [`try_initialize_logging`] for that.
#[must_use]
pub fn create_display_layer<S>(config: &LogConfig) -> Box<DynLayer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().event_format(StyledLogFormatter);
    let level_filter = config.level_filter;

    match &config.display {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
        DisplayPreference::OutputDevice(output_device) => {
            let output_device = output_device.clone();
            Box::new(
                fmt_layer
                    .with_writer(move || output_device.clone())
                    .with_filter(level_filter),
            )
        }
    }
}

/// Install the styled formatter as the global default subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn try_initialize_logging(config: &LogConfig) -> miette::Result<()> {
    tracing_subscriber::registry()
        .with(create_display_layer(config))
        .try_init()
        .into_diagnostic()
        .wrap_err("Could not initialize logging")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use regex::Regex;

    use super::*;
    use crate::StdoutMock;

    fn capture(level_filter: LevelFilter, log: impl FnOnce()) -> StdoutMock {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let config = LogConfig {
            level_filter,
            display: DisplayPreference::OutputDevice(output_device),
        };
        let subscriber = tracing_subscriber::registry().with(create_display_layer(&config));
        tracing::subscriber::with_default(subscriber, log);
        stdout_mock
    }

    #[test]
    fn info_line() {
        let stdout_mock = capture(LevelFilter::INFO, || tracing::info!("hello world"));
        let line = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
        let pattern = Regex::new(r"^\[\d{2}:\d{2}:\d{2}\] ⓘ hello world\n$").unwrap();
        assert!(pattern.is_match(&line), "{line:?}");

        let raw = stdout_mock.get_copy_of_buffer_as_string();
        assert!(raw.starts_with("\x1b[2m["));
        assert!(raw.contains("\x1b[34mⓘ \x1b[0mhello world"));
    }

    #[test]
    fn success_line() {
        let stdout_mock = capture(LevelFilter::INFO, || {
            crate::log_success!("fetched {} packages", 42);
        });
        let raw = stdout_mock.get_copy_of_buffer_as_string();
        assert!(raw.contains("\x1b[32m✔ \x1b[0mfetched 42 packages\n"));
    }

    #[test]
    fn warn_and_error_lines() {
        let stdout_mock = capture(LevelFilter::INFO, || {
            tracing::warn!("careful");
            tracing::error!(message = "boom");
        });
        let raw = stdout_mock.get_copy_of_buffer_as_string();
        assert!(raw.contains("\x1b[33m▲ \x1b[0m\x1b[33mcareful\x1b[0m\n"));
        assert!(raw.contains("\x1b[31m✖ \x1b[0m\x1b[31m\x1b[1mboom\x1b[0m\n"));
    }

    #[test]
    fn debug_line_with_fields() {
        let stdout_mock = capture(LevelFilter::DEBUG, || {
            tracing::debug!(message = "retrying", attempt = 2, host = "example.com");
        });
        let line = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
        assert!(line.ends_with("🐛 [DEBUG] retrying attempt=2 host=example.com\n"));
    }

    #[test]
    fn level_filter_drops_events() {
        let stdout_mock = capture(LevelFilter::WARN, || {
            tracing::info!("hidden");
            tracing::debug!("hidden too");
        });
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }

    #[test]
    fn level_looks() {
        let it = LevelLook::new(tracing::Level::TRACE, false);
        assert_eq!(it.glyph, DEBUG_GLYPH);
        let it = LevelLook::new(tracing::Level::INFO, true);
        assert_eq!(it.glyph, SUCCESS_GLYPH);
        assert_eq!(it.message_style, None);
    }
}
