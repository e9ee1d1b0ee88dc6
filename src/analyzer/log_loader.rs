//! Sequential log file reading.
//!
//! Lines are decoded lossily so that stray non-UTF-8 bytes from a serial
//! console do not abort a scan. `\n`, `\r\n` and a lone `\r` all end a line.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Buffer size for reading log files (8KB).
const BUFFER_SIZE: usize = 8 * 1024;

/// Line reader over a log source.
pub struct LogLoader<R> {
    reader: R,
    line_buffer: Vec<u8>,
    pending: VecDeque<String>,
}

impl LogLoader<BufReader<File>> {
    /// Open a log file for reading from the start.
    ///
    /// # Returns
    ///
    /// `Ok(LogLoader)` if the file opens successfully, `Err` otherwise.
    pub fn open(path: &Path) -> Result<Self, io::Error> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::with_capacity(BUFFER_SIZE, file)))
    }
}

impl<R: BufRead> LogLoader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: Vec::with_capacity(512),
            pending: VecDeque::new(),
        }
    }

    /// Read the next line with its line terminator removed.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_line(&mut self) -> Result<Option<String>, io::Error> {
        if let Some(line) = self.pending.pop_front() {
            return Ok(Some(line));
        }

        self.line_buffer.clear();
        if self.reader.read_until(b'\n', &mut self.line_buffer)? == 0 {
            return Ok(None);
        }

        let chunk = String::from_utf8_lossy(&self.line_buffer);
        let body = match chunk.strip_suffix('\n') {
            Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
            None => chunk.strip_suffix('\r').unwrap_or(&chunk[..]),
        };

        // Any carriage return left inside the chunk is a line break on its own
        self.pending.extend(body.split('\r').map(str::to_string));
        Ok(self.pending.pop_front())
    }
}
