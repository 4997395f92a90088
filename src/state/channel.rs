//! Channel table and occupancy snapshot.
//!
//! Channels are addressed by a small [`ChannelId`] assigned at load time,
//! and both the configuration table and the occupancy snapshot are keyed by
//! it. Occupancy is the warden's best-effort view of who is in each
//! channel, maintained from events; it is never authoritative.

use crate::proto::irc_to_lower;
use std::collections::{HashMap, HashSet};

/// Stable key of a managed channel (its position in the configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(pub(crate) usize);

/// Lookup from casemapped channel name to [`ChannelId`].
#[derive(Debug, Default)]
pub struct ChannelIndex {
    by_name: HashMap<String, ChannelId>,
}

impl ChannelIndex {
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let by_name = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| (irc_to_lower(name), ChannelId(i)))
            .collect();
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<ChannelId> {
        self.by_name.get(&irc_to_lower(name)).copied()
    }
}

/// Per-channel set of nicknames believed present.
#[derive(Debug, Default)]
pub struct Occupancy {
    members: HashMap<ChannelId, HashSet<String>>,
}

impl Occupancy {
    /// An empty snapshot with one entry per channel.
    pub fn new(channels: impl IntoIterator<Item = ChannelId>) -> Self {
        Self {
            members: channels.into_iter().map(|id| (id, HashSet::new())).collect(),
        }
    }

    pub fn insert(&mut self, id: ChannelId, nick: &str) {
        self.members.entry(id).or_default().insert(nick.to_string());
    }

    /// Returns whether the nick was tracked.
    pub fn remove(&mut self, id: ChannelId, nick: &str) -> bool {
        self.members.get_mut(&id).is_some_and(|m| m.remove(nick))
    }

    pub fn contains(&self, id: ChannelId, nick: &str) -> bool {
        self.members.get(&id).is_some_and(|m| m.contains(nick))
    }

    /// Move `old` to `new` if `old` is tracked. Returns whether it was.
    pub fn rename(&mut self, id: ChannelId, old: &str, new: &str) -> bool {
        let Some(members) = self.members.get_mut(&id) else {
            return false;
        };
        if !members.remove(old) {
            return false;
        }
        members.insert(new.to_string());
        true
    }

    pub fn len(&self, id: ChannelId) -> usize {
        self.members.get(&id).map_or(0, HashSet::len)
    }
}
