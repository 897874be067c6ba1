//! RecordStore Module
//!
//! All physical access to one append-only, line-oriented record file.
//!
//! ## Responsibilities
//! - Append a record line and report the byte offset it starts at
//! - Read the single line at a given offset
//! - Overwrite a line's first byte with the tombstone marker
//! - Scan the whole file, yielding active lines with their offsets
//!
//! ## Access Discipline
//! Every operation is a self-contained open → seek/read/write → close cycle;
//! no file handle is held across calls. The file is safe to inspect
//! externally between operations, but there is no locking: single process,
//! single writer.
//!
//! ## File Format
//! ```text
//! 1|Alice|SP\n          active record, key field first
//! *|Bob|RJ\n            tombstoned (first byte overwritten, length intact)
//! 20260830_CARD|12\n    composite string key
//! ```

mod record_store;
mod scanner;

pub use record_store::RecordStore;
pub use scanner::RecordScanner;
