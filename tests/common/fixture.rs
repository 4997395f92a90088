//! Config fixtures on disk.

use slirc_warden::config::{Config, TomlFileStore};
use slirc_warden::router::Router;
use std::path::PathBuf;
use tempfile::TempDir;

/// A config file in a scratch directory.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    /// Write `body` to `warden.toml` in a fresh temp directory.
    pub fn write(body: &str) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("warden.toml");
        std::fs::write(&path, body)?;
        Ok(Self { _dir: dir, path })
    }

    /// The standard single-channel config pointing at `address`.
    pub fn standard(address: &str) -> anyhow::Result<Self> {
        Self::write(&format!(
            r##"
admins = ["*!*@staff.example.net"]

[identity]
nick = "warden"

[server]
address = "{address}"

[[channel]]
name = "#test"
manage_whitelist = true
whitelist_self_join = true
clean_whitelist = true
whitelist_nicks = ["alice"]
whitelist_connections = ["*@trusted.example.net"]
"##
        ))
    }

    /// Load the file as it is on disk right now.
    pub fn load(&self) -> anyhow::Result<Config> {
        Ok(Config::load(&self.path)?)
    }

    /// Build a router persisting to this file.
    pub fn router(&self) -> anyhow::Result<Router> {
        let config = self.load()?;
        let store = TomlFileStore::new(&self.path);
        Ok(Router::new(config, Box::new(store))?)
    }
}
