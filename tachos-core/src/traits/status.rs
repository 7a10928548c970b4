//! Status output trait

/// Destination for complete status lines
///
/// Implementations write the line and a terminating newline. Callers
/// serialize access through [`crate::status::StatusSink`].
pub trait StatusWriter {
    fn write_line(&mut self, line: &str);
}
