//! scc-core — shared types for the state-communication channel.
//!
//! A state-communication channel (SCC) lets a follower publish its
//! lifecycle state to a master. This crate holds the pieces both sides
//! agree on: the closed set of follower states, the snapshot a master
//! reads back, the channel configuration, and the error type.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ChannelConfig, OmittedDescription};
pub use error::{SccError, SccResult};
pub use types::*;
