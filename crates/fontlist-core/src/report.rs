//! One formatter, many encoders
//!
//! [`Report`] renders families into plain lines once. Sinks only decide how
//! those lines become bytes, so the console and the log file cannot drift.

use std::io::{self, Write};

use crate::{names::bracketed_suffix, types::FontFamily};

/// UTF-8 byte-order mark written at the start of the log file
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Formatted lines, without line terminators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn from_families(families: &[FontFamily]) -> Self {
        let mut lines = vec![format!("Found {} font families", families.len()), String::new()];

        for family in families {
            let mut header = format!("FAMILY: {}", family.primary_name);
            if let Some(suffix) =
                bracketed_suffix(&family.primary_name, &family.postscript_family_name)
            {
                header.push_str(&suffix);
            }
            lines.push(header);

            let aliases: Vec<&str> = family.aliases().collect();
            if !aliases.is_empty() {
                lines.push(format!("  Aliases: {}", aliases.join(", ")));
            }

            for font in &family.fonts {
                let ps = bracketed_suffix(&font.name, &font.postscript_name).unwrap_or_default();
                let attrs = font.attributes;
                lines.push(format!(
                    "  {}{ps} (Weight: {}, Stretch: {}, Style: {})",
                    font.name, attrs.weight, attrs.stretch, attrs.style
                ));
            }

            lines.push(String::new());
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Sends every line to `sink`, then flushes it
    pub fn write_to<S: ReportSink + ?Sized>(&self, sink: &mut S) -> io::Result<()> {
        for line in &self.lines {
            sink.write_line(line)?;
        }
        sink.flush()
    }
}

/// Anything that accepts report lines
pub trait ReportSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ReportSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Byte encoding applied by an [`EncodedWriter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// UTF-8 preceded by a byte-order mark
    Utf8Bom,
    /// Little-endian UTF-16, the console's native width
    Utf16Le,
}

impl TextEncoding {
    /// Appends `text` to `buf` in this encoding
    pub fn encode_into(self, text: &str, buf: &mut Vec<u8>) {
        match self {
            Self::Utf8 | Self::Utf8Bom => buf.extend_from_slice(text.as_bytes()),
            Self::Utf16Le => buf.extend(text.encode_utf16().flat_map(u16::to_le_bytes)),
        }
    }
}

/// A [`ReportSink`] that encodes each line onto a byte writer
pub struct EncodedWriter<W: Write> {
    inner: W,
    encoding: TextEncoding,
    buf: Vec<u8>,
}

impl<W: Write> EncodedWriter<W> {
    /// Wraps `inner`, writing the BOM right away for [`TextEncoding::Utf8Bom`]
    pub fn new(mut inner: W, encoding: TextEncoding) -> io::Result<Self> {
        if encoding == TextEncoding::Utf8Bom {
            inner.write_all(UTF8_BOM)?;
        }
        Ok(Self {
            inner,
            encoding,
            buf: Vec::new(),
        })
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Encodes `text` without a line terminator
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.buf.clear();
        self.encoding.encode_into(text, &mut self.buf);
        self.inner.write_all(&self.buf)
    }
}

impl<W: Write> ReportSink for EncodedWriter<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.buf.clear();
        self.encoding.encode_into(line, &mut self.buf);
        self.encoding.encode_into("\n", &mut self.buf);
        self.inner.write_all(&self.buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Writes every line to two sinks, in order
///
/// A failing sink never starves the other one. The first error is kept and
/// returned from [`ReportSink::flush`], after both sinks got every line.
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
    error: Option<io::Error>,
}

impl<A: ReportSink, B: ReportSink> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            error: None,
        }
    }

    fn keep_first_error(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }
}

impl<A: ReportSink, B: ReportSink> ReportSink for Tee<A, B> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let first = self.first.write_line(line);
        self.keep_first_error(first);
        let second = self.second.write_line(line);
        self.keep_first_error(second);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        let first = self.first.flush();
        self.keep_first_error(first);
        let second = self.second.flush();
        self.keep_first_error(second);
        self.error.take().map_or(Ok(()), Err)
    }
}
