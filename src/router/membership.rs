//! JOIN, PART, KICK and QUIT.
//!
//! Occupancy is updated for every managed channel. Allow-list policy only
//! runs where `manage_whitelist` is set.
//!
//! Kick and part differ on purpose: a kick removes the nick from the
//! allow-list, so a kicked user has to be re-added, while a part (with
//! `clean_whitelist`) only revokes the live mode and the next join grants
//! it again.

use super::{Router, RouterResult};
use crate::event::Source;
use crate::proto::Command;
use tracing::debug;

impl Router {
    pub(super) fn on_join(
        &mut self,
        channel: &str,
        source: &Source,
        out: &mut Vec<Command>,
    ) -> RouterResult {
        let id = self.warden.resolve(channel)?;
        self.warden.occupancy.insert(id, &source.nick);

        // Our own join only seeds occupancy; NAMES follows.
        if source.nick == self.warden.nick() {
            return Ok(());
        }

        let config = self.warden.channel(id);
        if !config.manage_whitelist {
            return Ok(());
        }

        if config.is_protected(&source.nick, &source.identity()) {
            debug!(channel = %config.name, nick = %source.nick, "Protected user joined");
            out.push(self.grant(id, &source.nick));
        } else {
            let me = self.warden.nick();
            out.push(Command::Notice(
                source.nick.clone(),
                format!(
                    "Hello, please send a private message to <{me}> if you would like to \
                     participate in the discussion. /msg {me} hello"
                ),
            ));
        }

        Ok(())
    }

    pub(super) fn on_part(
        &mut self,
        channel: &str,
        nick: &str,
        out: &mut Vec<Command>,
    ) -> RouterResult {
        let id = self.warden.resolve(channel)?;
        self.warden.occupancy.remove(id, nick);

        let config = self.warden.channel(id);
        if config.manage_whitelist && config.clean_whitelist {
            out.push(self.revoke(id, nick));
        }

        Ok(())
    }

    pub(super) fn on_kick(
        &mut self,
        channel: &str,
        nick: &str,
        out: &mut Vec<Command>,
    ) -> RouterResult {
        let id = self.warden.resolve(channel)?;
        self.warden.occupancy.remove(id, nick);

        if self.warden.channel(id).manage_whitelist {
            let result = self.warden.whitelist_remove(id, nick);
            self.note_store(id, result);
            out.push(self.revoke(id, nick));
        }

        Ok(())
    }

    pub(super) fn on_quit(&mut self, nick: &str, out: &mut Vec<Command>) -> RouterResult {
        for id in self.warden.channel_ids() {
            if !self.warden.occupancy.remove(id, nick) {
                continue;
            }

            let config = self.warden.channel(id);
            if config.manage_whitelist && config.clean_whitelist {
                out.push(self.revoke(id, nick));
            }
        }

        Ok(())
    }
}
