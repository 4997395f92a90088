//! NICK changes.

use super::{Router, RouterResult, exempt_mask};
use crate::event::Source;
use crate::proto::Command;

impl Router {
    /// Follow a rename in every channel where the old nick is tracked.
    ///
    /// A protected user carries the exemption over: the allow-list entry
    /// moves to the new nick first, then one combined `-e+e` is sent whether
    /// or not the write succeeded.
    pub(super) fn on_nick(
        &mut self,
        source: &Source,
        new_nick: &str,
        out: &mut Vec<Command>,
    ) -> RouterResult {
        let old_nick = source.nick.as_str();
        let identity = source.identity();

        for id in self.warden.channel_ids() {
            if !self.warden.occupancy.rename(id, old_nick, new_nick) {
                continue;
            }

            let config = self.warden.channel(id);
            if !config.manage_whitelist {
                continue;
            }

            let protected = config.is_protected(old_nick, &identity);
            let clean = config.clean_whitelist;

            if protected {
                let result = self.warden.whitelist_rename(id, old_nick, new_nick);
                self.note_store(id, result);
                out.push(Command::mode(
                    &self.warden.channel(id).name,
                    "-e+e",
                    [exempt_mask(old_nick), exempt_mask(new_nick)],
                ));
            } else if clean {
                out.push(self.revoke(id, old_nick));
            }
        }

        Ok(())
    }
}
