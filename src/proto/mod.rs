//! Client-side IRC protocol types.
//!
//! Just enough of the wire format for the warden: parsing server lines
//! into [`Message`] and rendering outbound [`Command`]s.

mod casemap;
mod command;
mod message;
mod prefix;

pub use casemap::irc_to_lower;
pub use command::Command;
pub use message::{Message, MessageParseError};
pub use prefix::Prefix;

/// Numeric replies the warden reacts to.
pub mod numeric {
    /// RPL_WELCOME
    pub const WELCOME: &str = "001";
    /// RPL_NAMREPLY
    pub const NAMREPLY: &str = "353";
    /// RPL_ENDOFNAMES
    pub const ENDOFNAMES: &str = "366";
}
