//! Integration test common infrastructure.
//!
//! Provides a fake IRC uplink for the warden to connect to, and helpers
//! for writing config fixtures to disk.

pub mod fixture;
pub mod uplink;

#[allow(unused_imports)]
pub use fixture::Fixture;
#[allow(unused_imports)]
pub use uplink::{TestPeer, TestUplink};
