//! Configuration persistence.
//!
//! The allow-list is part of the configuration file, so every allow-list
//! mutation rewrites the whole file. The router only sees the
//! [`ConfigStore`] trait; the file format lives here.

use super::Config;
use crate::error::StoreError;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Sink for full-configuration writes.
pub trait ConfigStore: Send + Sync {
    /// Write out the complete configuration.
    fn persist(&self, config: &Config) -> Result<(), StoreError>;
}

/// Writes the configuration back to the TOML file it was loaded from.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigStore for TomlFileStore {
    fn persist(&self, config: &Config) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(config)?;

        // Write beside the target, then rename over it.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), "Config persisted");
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    saved: Option<Config>,
    writes: usize,
    failing: bool,
}

/// In-memory store. Clones share state, so a test can keep a handle while
/// the router owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail with [`StoreError::Unavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().failing = failing;
    }

    /// The last configuration written successfully.
    pub fn saved(&self) -> Option<Config> {
        self.state.lock().saved.clone()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.state.lock().writes
    }
}

impl ConfigStore for MemoryStore {
    fn persist(&self, config: &Config) -> Result<(), StoreError> {
        let mut state = self.state.lock();
        if state.failing {
            return Err(StoreError::Unavailable);
        }
        state.saved = Some(config.clone());
        state.writes += 1;
        Ok(())
    }
}
