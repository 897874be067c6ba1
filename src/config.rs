//! Configuration for linedex
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Configuration shared by every [`Table`](crate::Table) opened against it
///
/// Each logical table lives in its own file under `data_dir`:
/// ```text
///   {data_dir}/
///     ├── patients.txt
///     ├── doctors.txt
///     └── ...
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all record files
    pub data_dir: PathBuf,

    /// File extension for record files (without the leading dot)
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./linedex_data"),
            extension: "txt".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolve the record file path for a named table
    pub fn table_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", name, self.extension))
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all record files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the record file extension
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.config.extension = ext.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
