//! scc-channel — state-communication channel between a follower and a master.
//!
//! A follower (a worker thread, a task, a delegate) publishes its lifecycle
//! state; a master polls it. Both sides share one record but each only gets
//! the half of it they need.
//!
//! # Architecture
//!
//! ```text
//! StateChannel ── Arc<Record> ──┬── MasterView::query()    (read-only)
//!                               └── FollowerView::report() (write-only)
//! ```
//!
//! State and description sit behind a single lock, so a master never sees
//! a state paired with the description of a different report. Nothing
//! blocks waiting for a change: masters poll.
//!
//! ```
//! use scc_channel::{FollowerState, StateChannel};
//!
//! let channel = StateChannel::new();
//! let master = channel.master_interface();
//! let follower = channel.follower_interface();
//!
//! follower.report(FollowerState::Failed, Some("log file could not be found"));
//! assert_eq!(
//!     master.query(),
//!     (FollowerState::Failed, "log file could not be found".to_string()),
//! );
//! ```

pub mod channel;
pub mod follower;
pub mod master;

pub use channel::StateChannel;
pub use follower::FollowerView;
pub use master::MasterView;
pub use scc_core::*;
