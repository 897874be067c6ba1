//! # linedex
//!
//! Indexed random access over append-only, line-oriented flat files:
//! - One UTF-8 text file per logical table, one record per line
//! - In-memory ordered index (key → byte offset) rebuilt on open
//! - Logical deletion via a one-byte tombstone overwrite
//! - Ordered reports without sorting, via in-order index traversal
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              Entity Managers                 │
//! │      (caller-owned serialization, keys)      │
//! └─────────────────────┬───────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────┐
//! │                   Table                      │
//! │        (rebuild on open, consistency)        │
//! └─────────┬───────────────────────┬───────────┘
//!           │                       │
//!           ▼                       ▼
//!   ┌───────────────┐       ┌───────────────┐
//!   │ OrderedIndex  │       │  RecordStore  │
//!   │ (key→offset)  │       │ (append-only  │
//!   │               │       │   text file)  │
//!   └───────────────┘       └───────────────┘
//! ```
//!
//! The index is a pure cache of the file: it is never persisted, and a full
//! rescan at [`Table`] construction is the entire recovery mechanism.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod index;
pub mod store;
pub mod table;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LinedexError, Result};
pub use config::Config;
pub use index::OrderedIndex;
pub use store::RecordStore;
pub use table::Table;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of linedex
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
