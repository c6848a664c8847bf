//! Master side of the channel.

use std::sync::Arc;

use scc_core::{FollowerState, Snapshot};
use tracing::trace;

use crate::channel::Record;

/// Read-only handle onto a channel.
///
/// Cloning gives another handle onto the same record; every clone sees
/// the same reports.
#[derive(Debug, Clone)]
pub struct MasterView {
    record: Arc<Record>,
}

impl MasterView {
    pub(crate) fn new(record: Arc<Record>) -> Self {
        Self { record }
    }

    /// Ask the follower what it is up to.
    ///
    /// Returns the last reported state and its description, or
    /// `(UnableToStart, "")` if the follower has not reported yet. Both
    /// values come from the same report.
    pub fn query(&self) -> (FollowerState, String) {
        self.snapshot().into_parts()
    }

    /// Same as [`query`](Self::query), as a [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        let snapshot = self.record.read().clone();
        trace!(state = %snapshot.state, "master queried follower state");
        snapshot
    }

    /// Last reported state, without copying the description.
    pub fn state(&self) -> FollowerState {
        self.record.read().state
    }
}
