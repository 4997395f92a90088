//! Core configuration types and loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Warden configuration.
///
/// Loaded once at startup. Only the allow-list fields of each
/// [`ChannelConfig`] change at runtime, and every such change is followed
/// by a full write of this structure through a [`super::ConfigStore`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Glob patterns matched against `nick!user@host` of direct-message senders.
    #[serde(default)]
    pub admins: Vec<String>,
    /// The bot's own identity and services credentials.
    pub identity: IdentityConfig,
    /// Server connection parameters.
    pub server: ServerConfig,
    /// Managed channels, in configuration order.
    #[serde(default, rename = "channel")]
    pub channels: Vec<ChannelConfig>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

/// Bot identity configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Nickname the bot registers with (e.g., "warden").
    pub nick: String,
    /// Ident/username; falls back to the nickname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Realname sent in USER.
    #[serde(default = "default_realname")]
    pub realname: String,
    /// NickServ password; when set, the bot identifies after registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_password: Option<String>,
}

impl IdentityConfig {
    /// The ident sent in USER.
    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or(&self.nick)
    }
}

fn default_realname() -> String {
    "slirc warden".to_string()
}

/// Upstream server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// `host:port` of the IRC server.
    pub address: String,
    /// Wrap the connection in TLS.
    #[serde(default)]
    pub tls: bool,
    /// Accept any server certificate (self-signed test networks only).
    #[serde(default)]
    pub tls_skip_verify: bool,
    /// Connection password sent with PASS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ServerConfig {
    /// Hostname part of `address`, used for TLS server name indication.
    pub fn hostname(&self) -> &str {
        self.address
            .rsplit_once(':')
            .map_or(self.address.as_str(), |(host, _)| host)
            .trim_start_matches('[')
            .trim_end_matches(']')
    }
}

/// Per-channel policy and allow-list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Channel name (e.g., "#lobby"). Immutable after load.
    pub name: String,
    /// Apply the allow-list state machine to this channel at all.
    #[serde(default)]
    pub manage_whitelist: bool,
    /// Let occupants exempt themselves by messaging the bot.
    #[serde(default)]
    pub whitelist_self_join: bool,
    /// Revoke the exemption mode when a user leaves, quits or renames.
    #[serde(default)]
    pub clean_whitelist: bool,
    /// Drop our own operator status instead of asking ChanServ for it.
    #[serde(default)]
    pub min_operating_mode: bool,
    /// Exempted nicknames, in registration order.
    #[serde(default)]
    pub whitelist_nicks: Vec<String>,
    /// Glob patterns matched against `user@host`.
    #[serde(default)]
    pub whitelist_connections: Vec<String>,
}

impl ChannelConfig {
    /// A managed channel with every policy flag off.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
