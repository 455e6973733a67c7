//! Input source port
//!
//! The quiz reads answers from a single sequential, blocking, line-oriented
//! source (stdin in the CLI). Adapters live in the infrastructure layer.

use std::io;

/// A blocking source of text lines.
///
/// `read_line` may block indefinitely until the user acts. It is only ever
/// called from the dedicated input pump thread owned by
/// [`LineFeed`](crate::use_cases::resolve_choice::LineFeed), never from async code.
pub trait InputSource: Send + 'static {
    /// Read the next line without its trailing newline.
    ///
    /// Returns `Ok(None)` once the source is closed. An `Err` is treated
    /// the same as a closed source by the caller.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl InputSource for Box<dyn InputSource> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}
