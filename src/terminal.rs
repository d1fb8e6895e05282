use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub const INVALID_RESPONSE: &str = "Invalid response. Try again.\n";

/// Line-oriented prompting over any reader/writer pair
///
/// The binaries wrap stdin/stdout; tests drive it with in-memory buffers.
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write `message`, then read lines until `validator` accepts one
    ///
    /// The validator sees the raw line including its terminator. The accepted
    /// line is returned with surrounding whitespace trimmed. End of input is
    /// reported as `UnexpectedEof`.
    pub fn prompt<F>(&mut self, validator: F, message: &str) -> io::Result<String>
    where
        F: Fn(&str) -> bool,
    {
        self.write(message)?;
        let mut line = self.read_line()?;
        while !validator(&line) {
            self.write(INVALID_RESPONSE)?;
            self.write(message)?;
            line = self.read_line()?;
        }
        Ok(line.trim().to_string())
    }

    /// Write a full line of output
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

/// Accepts any line with non-whitespace content
pub fn non_empty(line: &str) -> bool {
    !line.trim().is_empty()
}

/// Accepts `y` or `n`
pub fn yes_or_no(line: &str) -> bool {
    matches!(line.trim(), "y" | "n")
}
