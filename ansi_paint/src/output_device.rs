// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Write,
          sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError}};

use miette::{Context, IntoDiagnostic};

use crate::strip;

pub type SendRawTerminal = dyn Write + Send;
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;
pub type LockedOutputDevice<'a> = &'a mut dyn Write;

/// This struct represents an output device that can be used to write to the terminal.
/// - It is safe to clone, clones share the same underlying writer.
/// - In tests use [`OutputDevice::new_mock()`] and read back what was written from the
///   [`StdoutMock`].
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stderr())),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_mock() -> (Self, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let this = Self {
            resource: Arc::new(StdMutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        (this, stdout_mock)
    }
}

impl OutputDevice {
    /// Locks the output device for writing. Don't call this again while the guard is
    /// alive, it will deadlock. A poisoned lock is recovered, since the writer holds no
    /// invariants of its own.
    ///
    /// ```
    /// use ansi_paint::{LockedOutputDevice, OutputDevice};
    ///
    /// let device = OutputDevice::new_stdout();
    /// let mut_ref: LockedOutputDevice<'_> = &mut *device.lock();
    /// let _ = mut_ref.write_all(b"Hello, world!\n");
    /// ```
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write and flush `text` in one go.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_text(&self, text: &str) -> miette::Result<()> {
        let mut guard = self.lock();
        guard
            .write_all(text.as_bytes())
            .and_then(|()| guard.flush())
            .into_diagnostic()
            .wrap_err("Could not write to output device")
    }
}

/// Lets an [`OutputDevice`] be handed to anything that wants a writer, eg: a `tracing`
/// layer.
impl Write for OutputDevice {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.lock().write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.lock().flush() }
}

/// You can safely clone this struct, since it only contains an `Arc<StdMutex<Vec<u8>>>`.
/// The inner `buffer` will not be cloned, just the [Arc] will be cloned.
#[derive(Clone, Default, Debug)]
pub struct StdoutMock {
    pub buffer: Arc<StdMutex<Vec<u8>>>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    fn buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.buffer().clone() }

    /// Invalid UTF-8 is replaced, not rejected.
    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer()).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        strip(&self.get_copy_of_buffer_as_string()).into_owned()
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}
