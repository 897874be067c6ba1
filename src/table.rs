//! Table Module
//!
//! The integration layer binding one index to one record file.
//!
//! ## Responsibilities
//! - Rebuild the index from the record file on open (the only recovery
//!   mechanism: restart and rescan)
//! - Keep index and file mutually consistent across insert/lookup/delete
//! - Serve full scans in file order and ordered scans in key order
//!
//! ## What a Table never does
//! Interpret record fields. Records arrive already serialized; the only field
//! the table ever reads is the leading key field, during rebuild. Entity
//! managers own serialization, deserialization, and key construction.

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::config::Config;
use crate::error::{LinedexError, Result};
use crate::index::{InOrderIter, OrderedIndex};
use crate::record;
use crate::store::{RecordScanner, RecordStore};

/// One logical table: an [`OrderedIndex`] over an append-only record file
///
/// Single-threaded by design. A table exclusively owns its index and its
/// file; two tables must never share either.
pub struct Table<K> {
    /// In-memory key → offset index (pure cache of the file)
    index: OrderedIndex<K>,

    /// Physical file access
    store: RecordStore,
}

impl<K> Table<K>
where
    K: Ord + Clone + FromStr + Display,
{
    /// Open the named table under the config's data directory.
    ///
    /// Creates the data directory if needed and rebuilds the index with one
    /// full scan of the record file. A file that does not exist yet opens as
    /// an empty table; the first insert creates it.
    pub fn open(config: &Config, name: &str) -> Result<Self> {
        if config.extension.is_empty() {
            return Err(LinedexError::Config(
                "record file extension must not be empty".to_string(),
            ));
        }
        fs::create_dir_all(&config.data_dir)?;
        Self::open_path(config.table_path(name))
    }

    /// Open a table against an explicit record file path (convenience method)
    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self> {
        let store = RecordStore::new(path);
        let mut index = OrderedIndex::new();

        // Rebuild: one linear pass, offset of each line captured before the
        // read advances the cursor. Lines whose key field does not parse are
        // corrupt or foreign records; they are skipped, never fatal.
        let mut skipped = 0usize;
        for entry in store.scan()? {
            let (offset, line) = entry?;
            match record::parse_key::<K>(&line) {
                Some(key) => index.insert(key, offset),
                None => skipped += 1,
            }
        }

        if !index.is_empty() || skipped > 0 {
            debug!(
                path = %store.path().display(),
                keys = index.len(),
                skipped,
                "index rebuilt from record file"
            );
        }

        Ok(Self { index, store })
    }

    /// Insert an already-serialized record under an explicit key.
    ///
    /// The line is appended unconditionally; if the key is already indexed the
    /// earlier mapping wins and the new line stays unreachable until a rescan
    /// finds the first copy tombstoned. I/O failure propagates.
    pub fn insert(&mut self, serialized: &str, key: K) -> Result<()> {
        let offset = self.store.append(serialized)?;
        self.index.insert(key, offset);
        Ok(())
    }

    /// Point lookup: the record line for `key`, newline stripped.
    ///
    /// `Ok(None)` when the key is not indexed or its line turns out
    /// tombstoned on disk.
    pub fn lookup(&self, key: &K) -> Result<Option<String>> {
        match self.index.get(key) {
            Some(offset) => self.store.read_at(offset),
            None => Ok(None),
        }
    }

    /// Logically delete the record for `key`.
    ///
    /// Tombstones the line on disk, then evicts the key from the index so the
    /// key can be inserted again later. `Ok(false)` when the key is not
    /// indexed; I/O failure propagates with the index untouched.
    pub fn delete(&mut self, key: &K) -> Result<bool> {
        let Some(offset) = self.index.get(key) else {
            return Ok(false);
        };
        self.store.tombstone(offset)?;
        self.index.remove(key);
        Ok(true)
    }

    /// All active record lines in file order (insertion order)
    pub fn scan_all(&self) -> Result<TableScan> {
        Ok(TableScan {
            inner: self.store.scan()?,
        })
    }

    /// All records in ascending key order, resolved through the index.
    ///
    /// Entries whose offset no longer resolves to an active line (tombstoned
    /// behind the index's back) are skipped.
    pub fn ordered_scan(&self) -> OrderedScan<'_, K> {
        OrderedScan {
            entries: self.index.in_order(),
            store: &self.store,
        }
    }

    /// Ascending `(key, offset)` pairs straight from the index, without
    /// touching the file
    pub fn ordered_keys(&self) -> InOrderIter<'_, K> {
        self.index.in_order()
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of keys currently indexed
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the table holds no indexed keys
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Path of the record file
    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

/// Iterator over active record lines in file order
pub struct TableScan {
    inner: RecordScanner,
}

impl Iterator for TableScan {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| entry.map(|(_, line)| line))
    }
}

/// Iterator over `(key, record)` pairs in ascending key order
pub struct OrderedScan<'a, K> {
    entries: InOrderIter<'a, K>,
    store: &'a RecordStore,
}

impl<'a, K: Clone> Iterator for OrderedScan<'a, K> {
    type Item = Result<(K, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (key, offset) = self.entries.next()?;
            match self.store.read_at(offset) {
                Ok(Some(line)) => return Some(Ok((key.clone(), line))),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
