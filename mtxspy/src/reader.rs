//! Buffered file-backed line source
//!
//! Reads the input in fixed 4 KiB chunks and assembles lines into a
//! fixed-capacity scratch buffer, so memory use stays constant no matter how
//! large the file is.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use mtxspy_core::{LineSource, SourceError, MAX_LINE_LEN};

const CHUNK_SIZE: usize = 4096;

// One spare slot so a line of exactly MAX_LINE_LEN bytes plus its '\r'
// still assembles before the ceiling check.
const SCRATCH_SIZE: usize = MAX_LINE_LEN + 1;

/// [`LineSource`] over any [`Read`] impl with bounded buffering
pub struct ReadSource<R> {
    reader: R,
    chunk: [u8; CHUNK_SIZE],
    chunk_len: usize,
    chunk_pos: usize,
    line: [u8; SCRATCH_SIZE],
    eof: bool,
}

impl ReadSource<File> {
    /// Open a file for streaming line access
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            chunk: [0; CHUNK_SIZE],
            chunk_len: 0,
            chunk_pos: 0,
            line: [0; SCRATCH_SIZE],
            eof: false,
        }
    }

    /// Next byte from the chunk buffer, refilling when drained
    fn next_byte(&mut self) -> Result<Option<u8>, SourceError> {
        if self.chunk_pos >= self.chunk_len {
            if self.eof {
                return Ok(None);
            }
            self.chunk_len = self.reader.read(&mut self.chunk)?;
            self.chunk_pos = 0;
            if self.chunk_len == 0 {
                self.eof = true;
                return Ok(None);
            }
        }
        let byte = self.chunk[self.chunk_pos];
        self.chunk_pos += 1;
        Ok(Some(byte))
    }
}

impl<R: Read> LineSource for ReadSource<R> {
    fn next_line(&mut self) -> Result<Option<&[u8]>, SourceError> {
        let mut len = 0;
        let mut saw_any = false;

        loop {
            match self.next_byte()? {
                None => break,
                Some(b'\n') => {
                    saw_any = true;
                    break;
                }
                Some(byte) => {
                    saw_any = true;
                    if len >= SCRATCH_SIZE {
                        return Err(SourceError::LineTooLong);
                    }
                    self.line[len] = byte;
                    len += 1;
                }
            }
        }

        if !saw_any {
            return Ok(None);
        }
        if len > 0 && self.line[len - 1] == b'\r' {
            len -= 1;
        }
        if len > MAX_LINE_LEN {
            return Err(SourceError::LineTooLong);
        }
        Ok(Some(&self.line[..len]))
    }
}
