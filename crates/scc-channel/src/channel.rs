//! The shared record and the channel that mints views onto it.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use scc_core::{ChannelConfig, Snapshot};
use tracing::debug;

use crate::follower::FollowerView;
use crate::master::MasterView;

/// The follower's last report plus the policy for updating it.
///
/// Reached only through an `Arc` held by the channel and its views. It is
/// dropped with the last of them.
#[derive(Debug)]
pub(crate) struct Record {
    latest: RwLock<Snapshot>,
    config: ChannelConfig,
}

impl Record {
    fn new(config: ChannelConfig) -> Self {
        let latest = Snapshot {
            description: config.initial_description.clone(),
            ..Snapshot::default()
        };
        Self {
            latest: RwLock::new(latest),
            config,
        }
    }

    pub(crate) fn config(&self) -> &ChannelConfig {
        &self.config
    }

    // A writer panicking mid-report can only leave a complete snapshot
    // behind, so poisoning is ignored.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.latest.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.latest.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One follower/master relationship.
///
/// Create it once, hand a [`FollowerView`] to the follower and a
/// [`MasterView`] to the master. The channel itself is not `Clone`; mint
/// more views instead.
#[derive(Debug)]
pub struct StateChannel {
    record: Arc<Record>,
}

impl StateChannel {
    /// Create a channel in the `UnableToStart` state with an empty
    /// description.
    pub fn new() -> Self {
        Self::with_config(ChannelConfig::default())
    }

    /// Create a channel with the given config.
    pub fn with_config(config: ChannelConfig) -> Self {
        debug!(
            omitted_description = ?config.omitted_description,
            "state channel created"
        );
        Self {
            record: Arc::new(Record::new(config)),
        }
    }

    /// Get a read-only handle for the master.
    pub fn master_interface(&self) -> MasterView {
        MasterView::new(Arc::clone(&self.record))
    }

    /// Get a write-only handle for the follower.
    pub fn follower_interface(&self) -> FollowerView {
        FollowerView::new(Arc::clone(&self.record))
    }

    /// Config this channel was built with.
    pub fn config(&self) -> &ChannelConfig {
        self.record.config()
    }

    /// Number of live views (master and follower) onto this channel.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.record) - 1
    }
}

impl Default for StateChannel {
    fn default() -> Self {
        Self::new()
    }
}
