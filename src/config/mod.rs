//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, IdentityConfig, ServerConfig, ChannelConfig)
//! - [`validation`]: Startup checks reported all at once
//! - [`store`]: Persistence seam used by the allow-list (ConfigStore, TomlFileStore, MemoryStore)

mod store;
mod types;
mod validation;

pub use store::{ConfigStore, MemoryStore, TomlFileStore};
pub use types::{ChannelConfig, Config, ConfigError, IdentityConfig, ServerConfig};
pub use validation::{ValidationError, validate};
