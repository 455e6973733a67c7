//! Buffered line reader over any `BufRead`

use quiz_application::InputSource;
use std::io::{self, BufRead, BufReader, Stdin};

/// Reads newline-terminated lines from a buffered reader.
///
/// The trailing `\n` (and a preceding `\r`) is stripped. Bytes that are not
/// valid UTF-8 are replaced rather than failing the read, so a garbled line
/// is rejected as a choice instead of closing the input. End of input is
/// reported as `Ok(None)`.
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead + Send + 'static> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineReader<BufReader<Stdin>> {
    /// Reader over the process's standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead + Send + 'static> InputSource for LineReader<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
