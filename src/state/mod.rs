//! State management module.
//!
//! Contains the [`Warden`]: the single owner of the loaded configuration,
//! the channel index, the occupancy snapshot and the persistence store.
//! The event loop is single-threaded, so the router holds it by `&mut`
//! and nothing is shared or locked.

mod allowlist;
mod channel;
mod matcher;

pub use allowlist::Change;
pub use channel::{ChannelId, ChannelIndex, Occupancy};
pub use matcher::wildcard_match;

use crate::config::{ChannelConfig, Config, ConfigStore};
use crate::error::{RouterError, StoreError};

/// Process-wide warden state.
pub struct Warden {
    config: Config,
    index: ChannelIndex,
    pub occupancy: Occupancy,
    store: Box<dyn ConfigStore>,
}

impl Warden {
    pub fn new(config: Config, store: Box<dyn ConfigStore>) -> Self {
        let index = ChannelIndex::new(config.channels.iter().map(|c| c.name.as_str()));
        let occupancy = Occupancy::new((0..config.channels.len()).map(ChannelId));
        Self {
            config,
            index,
            occupancy,
            store,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The bot's own nickname.
    pub fn nick(&self) -> &str {
        &self.config.identity.nick
    }

    /// Resolve a channel name to a managed channel.
    pub fn resolve(&self, name: &str) -> Result<ChannelId, RouterError> {
        self.index
            .get(name)
            .ok_or_else(|| RouterError::UnresolvedChannel(name.to_string()))
    }

    /// All managed channels, in configuration order.
    pub fn channel_ids(&self) -> impl Iterator<Item = ChannelId> + use<> {
        (0..self.config.channels.len()).map(ChannelId)
    }

    pub fn channel(&self, id: ChannelId) -> &ChannelConfig {
        &self.config.channels[id.0]
    }

    fn channel_mut(&mut self, id: ChannelId) -> &mut ChannelConfig {
        &mut self.config.channels[id.0]
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.persist(&self.config)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::{IdentityConfig, MemoryStore, ServerConfig};

    pub(crate) fn config_with(channels: Vec<ChannelConfig>) -> Config {
        Config {
            admins: vec!["*!*@staff.example.net".into()],
            identity: IdentityConfig {
                nick: "warden".into(),
                user: None,
                realname: "slirc warden".into(),
                nick_password: None,
            },
            server: ServerConfig {
                address: "irc.example.net:6667".into(),
                tls: false,
                tls_skip_verify: false,
                password: None,
            },
            channels,
        }
    }

    pub(crate) fn warden_with(channels: Vec<ChannelConfig>) -> (Warden, MemoryStore) {
        let store = MemoryStore::new();
        let warden = Warden::new(config_with(channels), Box::new(store.clone()));
        (warden, store)
    }

    #[test]
    fn test_every_channel_has_occupancy() {
        let (warden, _) = warden_with(vec![ChannelConfig::new("#a"), ChannelConfig::new("#b")]);
        let ids: Vec<_> = warden.channel_ids().collect();
        assert_eq!(ids.len(), 2);
        for id in ids {
            assert_eq!(warden.occupancy.len(id), 0);
        }
        assert_eq!(warden.channel(ChannelId(1)).name, "#b");
    }

    #[test]
    fn test_resolve_miss() {
        let (warden, _) = warden_with(vec![ChannelConfig::new("#a")]);
        assert!(matches!(
            warden.resolve("#elsewhere"),
            Err(RouterError::UnresolvedChannel(name)) if name == "#elsewhere"
        ));
        assert_eq!(warden.resolve("#A").unwrap(), ChannelId(0));
    }
}
