//! Registration and channel bootstrap: RPL_WELCOME, RPL_NAMREPLY,
//! RPL_ENDOFNAMES.

use super::{Router, RouterResult};
use crate::interpreter::is_valid_nick;
use crate::proto::Command;
use tracing::{debug, info};

const NICKSERV: &str = "NickServ";
const CHANSERV: &str = "ChanServ";

/// Strip status markers (`@`, `+`, and the multi-prefix `~&%`) from a
/// NAMES token and return the nickname if what remains is well formed.
pub(crate) fn name_from_token(token: &str) -> Option<&str> {
    let nick = token.trim().trim_start_matches(['~', '&', '@', '%', '+']);
    is_valid_nick(nick).then_some(nick)
}

impl Router {
    pub(super) fn on_welcome(&mut self, out: &mut Vec<Command>) -> RouterResult {
        let config = self.warden.config();

        if let Some(password) = &config.identity.nick_password {
            out.push(Command::Privmsg(NICKSERV.into(), format!("identify {password}")));
            info!("Identifying with NickServ");
        }

        for channel in &config.channels {
            out.push(Command::Join(channel.name.clone()));
        }
        info!(channels = config.channels.len(), "Registered; joining channels");

        Ok(())
    }

    pub(super) fn on_names(&mut self, channel: &str, names: &[String]) -> RouterResult {
        let id = self.warden.resolve(channel)?;

        for token in names {
            match name_from_token(token) {
                Some(nick) => self.warden.occupancy.insert(id, nick),
                None => debug!(token = %token, "Skipping malformed NAMES token"),
            }
        }

        Ok(())
    }

    pub(super) fn on_end_of_names(
        &mut self,
        channel: &str,
        out: &mut Vec<Command>,
    ) -> RouterResult {
        let id = self.warden.resolve(channel)?;
        let name = &self.warden.channel(id).name;
        let me = self.warden.nick();

        if self.warden.channel(id).min_operating_mode {
            out.push(Command::mode(name, "-o", [me]));
        } else {
            out.push(Command::Privmsg(CHANSERV.into(), format!("op {name} {me}")));
        }

        info!(
            channel = %name,
            members = self.warden.occupancy.len(id),
            "Channel names synced"
        );
        Ok(())
    }
}
