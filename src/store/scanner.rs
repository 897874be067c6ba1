//! Record file scanner
//!
//! Lazy forward scan used both for index rebuilds and unfiltered full reads.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::Result;
use crate::record;

/// Iterator over the active lines of a record file, in file order
///
/// Yields `(offset, line)` where `offset` is the byte position of the line's
/// first character, captured before the read advances the cursor. Tombstoned
/// and empty lines are skipped but still counted into the running offset.
pub struct RecordScanner {
    reader: Option<BufReader<File>>,
    offset: u64,
}

impl RecordScanner {
    pub(crate) fn new(reader: BufReader<File>) -> Self {
        Self {
            reader: Some(reader),
            offset: 0,
        }
    }

    /// Scanner over a file that does not exist yet
    pub(crate) fn empty() -> Self {
        Self {
            reader: None,
            offset: 0,
        }
    }
}

impl Iterator for RecordScanner {
    type Item = Result<(u64, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let reader = self.reader.as_mut()?;

            // Offset of the line about to be read, before the cursor moves.
            let line_start = self.offset;

            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => {
                    self.reader = None;
                    return None;
                }
                Ok(bytes) => self.offset += bytes as u64,
                Err(e) => {
                    self.reader = None;
                    return Some(Err(e.into()));
                }
            }

            record::strip_newline(&mut line);
            if line.trim().is_empty() || record::is_tombstoned(&line) {
                continue;
            }
            return Some(Ok((line_start, line)));
        }
    }
}
