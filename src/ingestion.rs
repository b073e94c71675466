use std::io::BufRead;

use crate::domain::{Error, InputSource};

/// Reads one answer per line from any buffered reader (stdin or a script file).
pub struct LineReader<R: BufRead> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }
}

impl<R: BufRead> InputSource for LineReader<R> {
    fn read_line(&mut self) -> Result<Option<String>, Error> {
        self.buffer.clear();

        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }

        Ok(Some(self.buffer.trim_end_matches(['\r', '\n']).to_string()))
    }
}
