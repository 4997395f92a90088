//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use crate::interpreter::is_valid_nick;
use crate::proto::irc_to_lower;
use std::collections::HashSet;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("identity.nick is required")]
    MissingNick,
    #[error("identity.nick contains characters outside the nickname alphabet: '{0}'")]
    InvalidNick(String),
    #[error("server.address must be host:port, got '{0}'")]
    InvalidServerAddress(String),
    #[error("channel name must start with #, &, + or !, got '{0}'")]
    InvalidChannelName(String),
    #[error("channel '{0}' is configured more than once")]
    DuplicateChannel(String),
    #[error("channel '{0}' has an empty whitelist_connections pattern")]
    EmptyConnectionPattern(String),
    #[error("admins contains an empty pattern")]
    EmptyAdminPattern,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Identity
    let nick = &config.identity.nick;
    if nick.is_empty() {
        errors.push(ValidationError::MissingNick);
    } else if !is_valid_nick(nick) {
        errors.push(ValidationError::InvalidNick(nick.clone()));
    }

    // Server address: host and numeric port
    let address = &config.server.address;
    let valid_address = address
        .rsplit_once(':')
        .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok());
    if !valid_address {
        errors.push(ValidationError::InvalidServerAddress(address.clone()));
    }

    // Channels
    let mut seen = HashSet::new();
    for channel in &config.channels {
        if !channel.name.starts_with(['#', '&', '+', '!']) || channel.name.len() < 2 {
            errors.push(ValidationError::InvalidChannelName(channel.name.clone()));
        }
        if !seen.insert(irc_to_lower(&channel.name)) {
            errors.push(ValidationError::DuplicateChannel(channel.name.clone()));
        }
        if channel.whitelist_connections.iter().any(String::is_empty) {
            errors.push(ValidationError::EmptyConnectionPattern(channel.name.clone()));
        }
    }

    if config.admins.iter().any(String::is_empty) {
        errors.push(ValidationError::EmptyAdminPattern);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
