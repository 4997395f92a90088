//! PRIVMSG handling.
//!
//! Two paths:
//! - a private message to the warden is a self-join request (and, from an
//!   admin, an admin query);
//! - a channel line starting with the warden's nick may carry an inline
//!   `add <nick>` / `remove <nick>` command.

use super::{Router, RouterResult};
use crate::event::Source;
use crate::interpreter::Directive;
use crate::proto::{Command, irc_to_lower};
use crate::state::ChannelId;
use tracing::{debug, info};

impl Router {
    pub(super) fn on_message(
        &mut self,
        target: &str,
        text: &str,
        source: &Source,
        out: &mut Vec<Command>,
    ) -> RouterResult {
        if irc_to_lower(target) == irc_to_lower(self.warden.nick()) {
            debug!(nick = %source.nick, "Direct message");
            self.self_join(&source.nick, out);

            if self.warden.config().is_admin(&source.mask()) {
                self.on_admin_query(source, text);
            }
            return Ok(());
        }

        let id = self.warden.resolve(target)?;
        if !self.interpreter.is_addressed(text) {
            return Ok(());
        }
        self.channel_command(id, text, source, out)
    }

    /// Exempt the sender in every channel that allows self-join and where
    /// the sender is currently seen. A sender missing from the snapshot
    /// (e.g. before NAMES arrives) is not eligible.
    fn self_join(&mut self, nick: &str, out: &mut Vec<Command>) {
        for id in self.warden.channel_ids() {
            let config = self.warden.channel(id);
            let eligible = config.manage_whitelist
                && config.whitelist_self_join
                && !config.is_protected_nick(nick)
                && self.warden.occupancy.contains(id, nick);
            if !eligible {
                continue;
            }

            let result = self.warden.whitelist_add(id, nick);
            self.note_store(id, result);
            out.push(self.grant(id, nick));
        }
    }

    fn channel_command(
        &mut self,
        id: ChannelId,
        text: &str,
        source: &Source,
        out: &mut Vec<Command>,
    ) -> RouterResult {
        match self.interpreter.interpret(text)? {
            Directive::Add(nick) => {
                info!(by = %source.nick, nick = %nick, "Add command");
                let result = self.warden.whitelist_add(id, &nick);
                self.note_store(id, result);
                out.push(self.grant(id, &nick));
            }
            Directive::Remove(nick) => {
                info!(by = %source.nick, nick = %nick, "Remove command");
                let result = self.warden.whitelist_remove(id, &nick);
                self.note_store(id, result);
                out.push(self.revoke(id, &nick));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{join, nicks, router_with, test_channel, user};
    use crate::config::ChannelConfig;
    use crate::event::{Event, Source};
    use crate::proto::Command;

    fn say(target: &str, text: &str, source: Source) -> Event {
        Event::Message {
            target: target.into(),
            text: text.into(),
            source,
        }
    }

    fn self_join_channel() -> ChannelConfig {
        let mut channel = test_channel();
        channel.whitelist_self_join = true;
        channel
    }

    #[test]
    fn test_channel_add_command() {
        let (mut router, store) = router_with(vec![test_channel()]);
        let out = router.handle(&say("#test", "warden: add carol", user("alice")));
        assert_eq!(out, vec![Command::mode("#test", "+e", ["carol!*@*"])]);
        assert_eq!(nicks(&router, "#test"), vec!["alice", "carol"]);
        assert_eq!(
            store.saved().unwrap().channels[0].whitelist_nicks,
            vec!["alice", "carol"]
        );
    }

    #[test]
    fn test_channel_remove_command() {
        let (mut router, store) = router_with(vec![test_channel()]);
        let out = router.handle(&say("#test", "warden, remove alice ", user("op")));
        assert_eq!(out, vec![Command::mode("#test", "-e", ["alice!*@*"])]);
        assert!(nicks(&router, "#test").is_empty());
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_add_existing_sends_mode_without_write() {
        let (mut router, store) = router_with(vec![test_channel()]);
        let out = router.handle(&say("#test", "warden: add alice", user("op")));
        assert_eq!(out, vec![Command::mode("#test", "+e", ["alice!*@*"])]);
        assert_eq!(nicks(&router, "#test"), vec!["alice"]);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_plain_chat_is_ignored() {
        let (mut router, store) = router_with(vec![test_channel()]);
        assert!(router.handle(&say("#test", "warden: how are you?", user("bob"))).is_empty());
        assert!(router.handle(&say("#test", "add carol", user("bob"))).is_empty());
        assert!(router.handle(&say("#test", "hey warden: add carol", user("bob"))).is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_command_in_unmanaged_channel_is_ignored() {
        let (mut router, _) = router_with(vec![test_channel()]);
        assert!(router.handle(&say("#else", "warden: add carol", user("bob"))).is_empty());
    }

    #[test]
    fn test_self_join_grants_occupant() {
        let (mut router, store) = router_with(vec![self_join_channel()]);
        join(&mut router, "#test", user("bob"));

        let out = router.handle(&say("warden", "hello", user("bob")));
        assert_eq!(out, vec![Command::mode("#test", "+e", ["bob!*@*"])]);
        assert_eq!(nicks(&router, "#test"), vec!["alice", "bob"]);
        assert_eq!(store.writes(), 1);

        // Already listed: nothing more to do.
        assert!(router.handle(&say("Warden", "hello again", user("bob"))).is_empty());
    }

    #[test]
    fn test_self_join_requires_occupancy() {
        let (mut router, store) = router_with(vec![self_join_channel()]);
        assert!(router.handle(&say("warden", "hello", user("bob"))).is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_self_join_respects_flags() {
        let mut no_self_join = test_channel();
        no_self_join.name = "#closed".into();
        let mut unmanaged = self_join_channel();
        unmanaged.name = "#open".into();
        unmanaged.manage_whitelist = false;
        let (mut router, _) = router_with(vec![self_join_channel(), no_self_join, unmanaged]);
        for channel in ["#test", "#closed", "#open"] {
            join(&mut router, channel, user("bob"));
        }

        let out = router.handle(&say("warden", "hello", user("bob")));
        assert_eq!(out, vec![Command::mode("#test", "+e", ["bob!*@*"])]);
        assert!(!nicks(&router, "#closed").contains(&"bob".to_string()));
    }

    #[test]
    fn test_self_join_persist_failure_still_grants() {
        let (mut router, store) = router_with(vec![self_join_channel()]);
        join(&mut router, "#test", user("bob"));
        store.set_failing(true);

        let out = router.handle(&say("warden", "hello", user("bob")));
        assert_eq!(out.len(), 1);
        assert_eq!(nicks(&router, "#test"), vec!["alice", "bob"]);
    }
}
