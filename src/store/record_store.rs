//! RecordStore implementation
//!
//! Open-per-operation access to one append-only record file.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record;

use super::RecordScanner;

/// Physical access to one record file
///
/// Holds only the path; every operation opens and closes the file itself.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store for the given record file (the file itself is only
    /// created by the first [`append`](Self::append))
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the record file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record line, returning the byte offset it starts at.
    ///
    /// The offset is the end-of-file position captured before the write. A
    /// trailing `\n` is added if the line does not already carry one. Creates
    /// the file on first use.
    pub fn append(&self, line: &str) -> Result<u64> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let offset = file.metadata()?.len();
        file.write_all(line.as_bytes())?;
        if !line.ends_with('\n') {
            file.write_all(b"\n")?;
        }
        Ok(offset)
    }

    /// Read the single line starting at `offset`, with its newline stripped.
    ///
    /// Returns `Ok(None)` for a tombstoned line, an offset at end-of-file, or
    /// a file that does not exist yet. Offsets that were not produced by
    /// [`append`](Self::append) land mid-line and read whatever partial
    /// content is there; higher layers never pass one.
    pub fn read_at(&self, offset: u64) -> Result<Option<String>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut reader = BufReader::new(file);
        reader.seek(SeekFrom::Start(offset))?;

        let mut line = String::new();
        reader.read_line(&mut line)?;
        record::strip_newline(&mut line);

        if line.is_empty() || record::is_tombstoned(&line) {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Overwrite the first byte of the line at `offset` with the tombstone
    /// marker.
    ///
    /// Exactly one byte changes, so the file length and every other line's
    /// offset stay intact. Prior content at the offset is not re-verified.
    pub fn tombstone(&self, offset: u64) -> Result<()> {
        let mut file = OpenOptions::new().read(true).write(true).open(&self.path)?;
        file.seek(SeekFrom::Start(offset))?;
        file.write_all(&[record::TOMBSTONE as u8])?;
        Ok(())
    }

    /// Scan the whole file from the top, yielding `(offset, line)` for every
    /// active (non-empty, non-tombstoned) line in file order.
    ///
    /// Lazy and restartable: each call opens the file fresh. A file that does
    /// not exist yet scans as empty.
    pub fn scan(&self) -> Result<RecordScanner> {
        match File::open(&self.path) {
            Ok(file) => Ok(RecordScanner::new(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(RecordScanner::empty()),
            Err(e) => Err(e.into()),
        }
    }
}
