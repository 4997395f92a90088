//! Event router.
//!
//! The membership/allow-list state machine. Each [`Event`] is resolved to
//! the channel(s) it concerns and the policy for its kind is applied,
//! producing the outbound [`Command`]s in the order they must be sent.
//!
//! The router keeps no state between events beyond the [`Warden`]. No
//! handler aborts the loop: persistence failures are logged and the live
//! mode change still goes out, and events for unmanaged channels are
//! dropped silently.

mod admin;
mod membership;
mod messaging;
mod nick;
mod session;

use crate::config::{Config, ConfigStore};
use crate::error::{RouterError, RouterResult, StoreError};
use crate::event::Event;
use crate::interpreter::Interpreter;
use crate::proto::Command;
use crate::state::{Change, ChannelId, Warden};
use crate::telemetry::spans;
use tracing::{info, trace, warn};

/// Ban-exemption mask for a nickname.
pub fn exempt_mask(nick: &str) -> String {
    format!("{nick}!*@*")
}

/// Routes events against the warden state.
pub struct Router {
    warden: Warden,
    interpreter: Interpreter,
}

impl Router {
    pub fn new(config: Config, store: Box<dyn ConfigStore>) -> Result<Self, regex::Error> {
        let interpreter = Interpreter::new(&config.identity.nick)?;
        Ok(Self {
            warden: Warden::new(config, store),
            interpreter,
        })
    }

    pub fn warden(&self) -> &Warden {
        &self.warden
    }

    /// Apply one event and return the commands to send, in order.
    pub fn handle(&mut self, event: &Event) -> Vec<Command> {
        let span = spans::event(event.kind(), source_nick(event));
        let _enter = span.enter();

        let mut out = Vec::new();
        let result = match event {
            Event::Welcome => self.on_welcome(&mut out),
            Event::NamesReply { channel, names } => self.on_names(channel, names),
            Event::EndOfNames { channel } => self.on_end_of_names(channel, &mut out),
            Event::Join { channel, source } => self.on_join(channel, source, &mut out),
            Event::Part { channel, source } => self.on_part(channel, &source.nick, &mut out),
            Event::Kick { channel, nick, .. } => self.on_kick(channel, nick, &mut out),
            Event::Quit { source } => self.on_quit(&source.nick, &mut out),
            Event::NickChange { source, new_nick } => self.on_nick(source, new_nick, &mut out),
            Event::Message {
                target,
                text,
                source,
            } => self.on_message(target, text, source, &mut out),
        };

        match result {
            Ok(()) => {}
            Err(RouterError::UnresolvedChannel(channel)) => {
                trace!(channel = %channel, "Ignoring event for unmanaged channel");
            }
            Err(RouterError::MalformedCommandToken(text)) => {
                info!(text = %text, "Directed message is not a command");
            }
            Err(e @ RouterError::PersistenceFailure(_)) => {
                warn!(error = %e, code = e.error_code(), "Event handling failed");
            }
        }

        out
    }

    /// Log a failed allow-list write. The in-memory change stands.
    fn note_store(&self, id: ChannelId, result: Result<Change, StoreError>) {
        if let Err(e) = result {
            let e = RouterError::from(e);
            warn!(
                channel = %self.warden.channel(id).name,
                error = %e,
                code = e.error_code(),
                "Allow-list change not persisted"
            );
        }
    }

    fn grant(&self, id: ChannelId, nick: &str) -> Command {
        Command::mode(&self.warden.channel(id).name, "+e", [exempt_mask(nick)])
    }

    fn revoke(&self, id: ChannelId, nick: &str) -> Command {
        Command::mode(&self.warden.channel(id).name, "-e", [exempt_mask(nick)])
    }
}

fn source_nick(event: &Event) -> Option<&str> {
    match event {
        Event::Join { source, .. }
        | Event::Part { source, .. }
        | Event::Kick { source, .. }
        | Event::Quit { source }
        | Event::NickChange { source, .. }
        | Event::Message { source, .. } => Some(&source.nick),
        Event::Welcome | Event::NamesReply { .. } | Event::EndOfNames { .. } => None,
    }
}
