//! Memory-mapped line source
//!
//! Maps the whole file and walks it in place, trading address space for a
//! copy-free read path. Useful on repeated runs over the same large file,
//! where the page cache makes the second pass nearly free.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use mtxspy_core::{LineSource, SourceError, MAX_LINE_LEN};

/// [`LineSource`] over a memory-mapped file
pub struct MmapSource {
    mmap: Mmap,
    pos: usize,
}

impl MmapSource {
    /// Map a file for line access
    ///
    /// # Safety note
    /// The map is read-only; mutating the file concurrently is undefined
    /// behavior, as with any file-backed mapping.
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self { mmap, pos: 0 })
    }
}

impl LineSource for MmapSource {
    fn next_line(&mut self) -> Result<Option<&[u8]>, SourceError> {
        if self.pos >= self.mmap.len() {
            return Ok(None);
        }

        let rest = &self.mmap[self.pos..];
        let (mut line, advance) = match rest.iter().position(|&b| b == b'\n') {
            Some(i) => (&rest[..i], i + 1),
            None => (rest, rest.len()),
        };
        self.pos += advance;

        if let [head @ .., b'\r'] = line {
            line = head;
        }
        if line.len() > MAX_LINE_LEN {
            return Err(SourceError::LineTooLong);
        }

        Ok(Some(line))
    }
}
