// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal animations that run on a tokio timer and write through an [`OutputDevice`].
//!
//! - [`Spinner`] runs until it is stopped. The task is owned by the [`Spinner`] value:
//!   dropping a running spinner aborts its task and shows the cursor again, so there is no
//!   need for process-wide exit hooks.
//! - [`animate`] runs a blink or pulse effect for a fixed duration.

use std::time::Duration;

use strum_macros::{AsRefStr, EnumString};
use tokio::{sync::broadcast,
            task::JoinHandle,
            time::{Instant, interval_at, sleep, timeout}};

use crate::{HIDE_CURSOR, OutputDevice, SHOW_CURSOR, Style, visible_len};

pub mod spinner_constants {
    use std::time::Duration;

    pub const BRAILLE_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    pub const DEFAULT_TICK_DELAY: Duration = Duration::from_millis(100);
    pub const DEFAULT_MESSAGE: &str = "Loading...";
    pub const DEFAULT_FINISH_GLYPH: &str = "✔";
    pub const DEFAULT_FINISH_TEXT: &str = "Done!";
    /// Timers can not tick at a zero period.
    pub const MIN_TICK_DELAY: Duration = Duration::from_millis(1);
}

use spinner_constants::{BRAILLE_FRAMES, DEFAULT_FINISH_GLYPH, DEFAULT_FINISH_TEXT,
                        DEFAULT_MESSAGE, DEFAULT_TICK_DELAY, MIN_TICK_DELAY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerConfig {
    pub frames: Vec<String>,
    pub message: String,
    pub tick_delay: Duration,
    /// Applied to the frame only, the message is written as-is.
    pub style: Style,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            frames: BRAILLE_FRAMES.iter().map(ToString::to_string).collect(),
            message: DEFAULT_MESSAGE.to_string(),
            tick_delay: DEFAULT_TICK_DELAY,
            style: Style::default().white(),
        }
    }
}

/// The last line a spinner writes when it is stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerFinish {
    pub glyph: String,
    pub text: String,
    pub style: Style,
}

impl Default for SpinnerFinish {
    fn default() -> Self {
        Self {
            glyph: DEFAULT_FINISH_GLYPH.to_string(),
            text: DEFAULT_FINISH_TEXT.to_string(),
            style: Style::default().green(),
        }
    }
}

/// # Usage Example
///
/// ```no_run
/// # use ansi_paint::{OutputDevice, Spinner, SpinnerConfig, SpinnerFinish};
/// # async fn example() -> miette::Result<()> {
/// let mut spinner = Spinner::start(SpinnerConfig::default(), OutputDevice::default())?;
///
/// // Some work happens here...
///
/// spinner.stop(SpinnerFinish::default()).await?;
/// # Ok(())
/// # }
/// ```
#[allow(missing_debug_implementations)]
pub struct Spinner {
    output_device: OutputDevice,
    shutdown_sender: broadcast::Sender<()>,
    maybe_join_handle: Option<JoinHandle<()>>,
    /// Only cleared once `SHOW_CURSOR` has been written.
    is_cursor_hidden: bool,
}

impl Spinner {
    /// Hide the cursor and spawn the task that writes `\r<frame> <message>` on every
    /// tick.
    ///
    /// # Errors
    ///
    /// - There is no tokio runtime to spawn the task on.
    /// - The cursor could not be hidden.
    pub fn start(config: SpinnerConfig, output_device: OutputDevice) -> miette::Result<Self> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|error| {
            miette::miette!("Spinner needs a tokio runtime to start: {}", error)
        })?;

        output_device.write_text(HIDE_CURSOR)?;

        // Shutdown broadcast channel.
        let (shutdown_sender, mut shutdown_receiver) = broadcast::channel::<()>(1);

        let SpinnerConfig {
            frames,
            message,
            tick_delay,
            style,
        } = config;
        let tick_delay = tick_delay.max(MIN_TICK_DELAY);
        let output_device_clone = output_device.clone();

        tracing::trace!(message = "Spinner started", frame_count = frames.len());

        let join_handle = runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + tick_delay, tick_delay);
            let mut frame_index = 0;

            loop {
                tokio::select! {
                    // This branch is cancel safe because recv is cancel safe.
                    _ = shutdown_receiver.recv() => {
                        break;
                    }

                    // This branch is cancel safe because tick is cancel safe.
                    _ = interval.tick() => {
                        let Some(frame) = frames.get(frame_index) else {
                            continue;
                        };
                        let output = format!("\r{} {message}", style.paint(frame));
                        // We don't care about the result of this operation.
                        output_device_clone.write_text(&output).ok();
                        frame_index = (frame_index + 1) % frames.len();
                    }
                }
            }
        });

        Ok(Self {
            output_device,
            shutdown_sender,
            maybe_join_handle: Some(join_handle),
            is_cursor_hidden: true,
        })
    }

    #[must_use]
    pub fn is_running(&self) -> bool { self.maybe_join_handle.is_some() }

    /// Stop the task, wait for it to finish, then write the finish line and show the
    /// cursor. Stopping a spinner that is already stopped does nothing.
    ///
    /// If this future is dropped before it completes, the cursor is still restored when
    /// the [`Spinner`] itself is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the finish line can not be written.
    pub async fn stop(&mut self, finish: SpinnerFinish) -> miette::Result<()> {
        if let Some(join_handle) = self.maybe_join_handle.take() {
            // We don't care about the result of this operation, the task may be gone.
            self.shutdown_sender.send(()).ok();
            join_handle.await.ok();
        }

        if !self.is_cursor_hidden {
            return Ok(());
        }

        tracing::trace!(message = "Spinner stopped", text = %finish.text);

        let SpinnerFinish { glyph, text, style } = finish;
        self.output_device.write_text(&format!(
            "\r{} {}{SHOW_CURSOR}\n",
            style.paint(glyph),
            style.bold().paint(text)
        ))?;
        self.is_cursor_hidden = false;
        Ok(())
    }
}

/// Abort only lands at the task's next `.await`. On a multi threaded runtime a frame that
/// is already being written on another worker can still appear after `SHOW_CURSOR`.
impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(join_handle) = self.maybe_join_handle.take() {
            // We don't care about the result of this operation.
            self.shutdown_sender.send(()).ok();
            join_handle.abort();
            tracing::trace!(message = "Spinner dropped while running");
        }

        if self.is_cursor_hidden {
            // We don't care about the result of this operation.
            self.output_device.write_text(SHOW_CURSOR).ok();
            self.is_cursor_hidden = false;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum AnimationEffect {
    /// Alternate between the text and blanks of the same visible width.
    #[default]
    Blink,
    /// Dim text, then white text half an interval later.
    Pulse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimateOptions {
    pub effect: AnimationEffect,
    pub interval: Duration,
    pub duration: Duration,
}

impl Default for AnimateOptions {
    fn default() -> Self {
        Self {
            effect: AnimationEffect::Blink,
            interval: Duration::from_millis(500),
            duration: Duration::from_millis(3000),
        }
    }
}

/// Animate `text` in place for `options.duration`. When the time is up the effect is
/// cancelled, the plain text is written on its own line and the cursor is shown again.
///
/// # Errors
///
/// Returns an error if writing to the output device fails.
pub async fn animate(
    text: &str,
    options: AnimateOptions,
    output_device: OutputDevice,
) -> miette::Result<()> {
    output_device.write_text(HIDE_CURSOR)?;

    let outcome = timeout(
        options.duration,
        run_effect(text, options, output_device.clone()),
    )
    .await;

    output_device.write_text(&format!("\r{text}\n"))?;
    output_device.write_text(SHOW_CURSOR)?;

    match outcome {
        Ok(Err(error)) => Err(error),
        _ => Ok(()),
    }
}

async fn run_effect(
    text: &str,
    options: AnimateOptions,
    output_device: OutputDevice,
) -> miette::Result<()> {
    let period = options.interval.max(MIN_TICK_DELAY);
    let mut interval = interval_at(Instant::now() + period, period);
    let blank = " ".repeat(visible_len(text));
    let mut is_visible = true;

    loop {
        interval.tick().await;
        match options.effect {
            AnimationEffect::Blink => {
                let output = if is_visible { text } else { blank.as_str() };
                output_device.write_text(&format!("\r{output}"))?;
                is_visible = !is_visible;
            }
            AnimationEffect::Pulse => {
                output_device.write_text(&format!("\r{}", Style::default().dim().paint(text)))?;
                sleep(period / 2).await;
                output_device
                    .write_text(&format!("\r{}", Style::default().white().paint(text)))?;
            }
        }
    }
}
