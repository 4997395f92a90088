//! Allow-list mutations.
//!
//! Every change is applied in memory first and then the whole configuration
//! is persisted. If the write fails the in-memory list is kept as is: the
//! exemption mode has usually already been requested, and the live channel
//! state wins over durability for the rest of the session.

use super::{ChannelId, Warden};
use crate::error::StoreError;
use tracing::info;

/// What a mutation did to the in-memory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Applied,
    Unchanged,
}

impl Warden {
    /// Append `nick` to the channel allow-list and persist.
    /// A nick already present is a successful no-op with no write.
    pub fn whitelist_add(&mut self, id: ChannelId, nick: &str) -> Result<Change, StoreError> {
        let channel = self.channel_mut(id);
        if channel.is_protected_nick(nick) {
            return Ok(Change::Unchanged);
        }
        channel.whitelist_nicks.push(nick.to_string());
        info!(channel = %channel.name, nick = %nick, "Allow-list add");

        self.persist()?;
        Ok(Change::Applied)
    }

    /// Remove the first exact match of `nick` and persist.
    /// An absent nick is a successful no-op with no write.
    pub fn whitelist_remove(&mut self, id: ChannelId, nick: &str) -> Result<Change, StoreError> {
        let channel = self.channel_mut(id);
        let Some(pos) = channel.whitelist_nicks.iter().position(|n| n == nick) else {
            return Ok(Change::Unchanged);
        };
        channel.whitelist_nicks.remove(pos);
        info!(channel = %channel.name, nick = %nick, "Allow-list remove");

        self.persist()?;
        Ok(Change::Applied)
    }

    /// Replace `old` with `new` as one mutation with a single write.
    ///
    /// `new` is appended even when `old` was not listed, since a user
    /// protected by a connection rule keeps protection under the new nick.
    pub fn whitelist_rename(
        &mut self,
        id: ChannelId,
        old: &str,
        new: &str,
    ) -> Result<Change, StoreError> {
        let channel = self.channel_mut(id);
        let before = channel.whitelist_nicks.len();

        if let Some(pos) = channel.whitelist_nicks.iter().position(|n| n == old) {
            channel.whitelist_nicks.remove(pos);
        }
        let removed = channel.whitelist_nicks.len() != before;
        let added = !channel.is_protected_nick(new);
        if added {
            channel.whitelist_nicks.push(new.to_string());
        }

        if !removed && !added {
            return Ok(Change::Unchanged);
        }
        info!(channel = %channel.name, old = %old, new = %new, "Allow-list rename");

        self.persist()?;
        Ok(Change::Applied)
    }
}
