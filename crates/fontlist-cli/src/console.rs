//! Console output and the final key wait
//!
//! On a Windows console the report goes out as UTF-16 through
//! `WriteConsoleW`, so any script renders regardless of the code page.
//! Redirected output, and every other platform, gets UTF-8 on stdout.

use std::io;

use fontlist_core::{
    report::{EncodedWriter, TextEncoding},
    ReportSink,
};

/// Where console lines end up
pub enum Console {
    #[cfg(windows)]
    Wide(windows::Win32::Foundation::HANDLE),
    Stdout(EncodedWriter<io::Stdout>),
}

impl Console {
    /// Picks wide output when stdout is an interactive Windows console
    pub fn new() -> io::Result<Self> {
        #[cfg(windows)]
        if let Some(handle) = win::console_output() {
            return Ok(Self::Wide(handle));
        }
        Ok(Self::Stdout(EncodedWriter::new(
            io::stdout(),
            TextEncoding::Utf8,
        )?))
    }

    /// Writes `text` as-is, without appending a newline
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        match self {
            #[cfg(windows)]
            Self::Wide(handle) => win::write_wide(*handle, text),
            Self::Stdout(writer) => writer.write_str(text),
        }
    }
}

impl ReportSink for Console {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            #[cfg(windows)]
            Self::Wide(handle) => win::write_wide(*handle, &format!("{line}\n")),
            Self::Stdout(writer) => writer.write_line(line),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            #[cfg(windows)]
            Self::Wide(_) => Ok(()),
            Self::Stdout(writer) => writer.flush(),
        }
    }
}

/// Switches the console to UTF-8 with VT processing; a no-op elsewhere
pub fn prepare() {
    #[cfg(windows)]
    win::prepare();
}

/// Blocks until a key-down event arrives on the console
#[cfg(windows)]
pub fn wait_for_key() -> io::Result<()> {
    win::wait_for_key_down()
}

/// Blocks until a line arrives on stdin
#[cfg(not(windows))]
pub fn wait_for_key() -> io::Result<()> {
    let mut line = String::new();
    io::stdin().read_line(&mut line).map(|_| ())
}

#[cfg(windows)]
#[allow(unsafe_code)]
mod win {
    use std::io;

    use windows::Win32::{
        Foundation::HANDLE,
        Globalization::CP_UTF8,
        System::Console::{
            GetConsoleMode, GetStdHandle, ReadConsoleInputW, SetConsoleCP, SetConsoleMode,
            SetConsoleOutputCP, WriteConsoleW, CONSOLE_MODE, ENABLE_PROCESSED_OUTPUT,
            ENABLE_VIRTUAL_TERMINAL_PROCESSING, INPUT_RECORD, KEY_EVENT, STD_INPUT_HANDLE,
            STD_OUTPUT_HANDLE,
        },
    };

    fn io_error(e: windows::core::Error) -> io::Error {
        io::Error::other(e.to_string())
    }

    /// The stdout handle, if it is a real console rather than a pipe or file
    pub fn console_output() -> Option<HANDLE> {
        unsafe {
            let handle = GetStdHandle(STD_OUTPUT_HANDLE).ok()?;
            if handle.is_invalid() {
                return None;
            }
            let mut mode = CONSOLE_MODE::default();
            GetConsoleMode(handle, &mut mode).ok()?;
            Some(handle)
        }
    }

    pub fn prepare() {
        unsafe {
            if let Err(e) = SetConsoleOutputCP(CP_UTF8).and_then(|_| SetConsoleCP(CP_UTF8)) {
                log::debug!("Console code page unchanged: {e}");
            }
            let Some(handle) = console_output() else {
                return;
            };
            let mut mode = CONSOLE_MODE::default();
            if GetConsoleMode(handle, &mut mode).is_ok() {
                mode |= ENABLE_PROCESSED_OUTPUT | ENABLE_VIRTUAL_TERMINAL_PROCESSING;
                if let Err(e) = SetConsoleMode(handle, mode) {
                    log::debug!("Console mode unchanged: {e}");
                }
            }
        }
    }

    pub fn write_wide(handle: HANDLE, text: &str) -> io::Result<()> {
        let wide: Vec<u16> = text.encode_utf16().collect();
        unsafe { WriteConsoleW(handle, &wide, None, None) }.map_err(io_error)
    }

    pub fn wait_for_key_down() -> io::Result<()> {
        unsafe {
            let input = GetStdHandle(STD_INPUT_HANDLE).map_err(io_error)?;
            let mut records = [INPUT_RECORD::default()];
            loop {
                let mut read = 0u32;
                ReadConsoleInputW(input, &mut records, &mut read).map_err(io_error)?;
                let record = &records[0];
                if read == 1
                    && record.EventType as u32 == KEY_EVENT as u32
                    && record.Event.KeyEvent.bKeyDown.as_bool()
                {
                    return Ok(());
                }
            }
        }
    }
}
