//! slirc-warden - Straylight channel warden.
//!
//! An IRC bot that keeps a per-channel ban-exemption allow-list in step
//! with who is actually in the channel. The [`router`] is a pure state
//! machine over typed [`event`]s; [`network`] feeds it from a live
//! connection and [`config`] persists every allow-list change.

pub mod config;
pub mod error;
pub mod event;
pub mod interpreter;
pub mod network;
pub mod proto;
pub mod router;
pub mod state;
pub mod telemetry;
