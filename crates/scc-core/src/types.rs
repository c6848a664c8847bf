//! Domain types shared by masters and followers.
//!
//! The numeric codes behind [`FollowerState`] exist so states can cross a
//! byte-oriented boundary. Callers should always go through the named
//! variants; the codes may change between versions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SccError;

// ── Follower state ────────────────────────────────────────────────

/// Lifecycle stage reported by a follower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowerState {
    /// The follower could not start, or has not reported yet.
    #[default]
    UnableToStart,
    /// The follower is up and doing its work.
    NowActive,
    /// The follower hit an error. The description usually says why.
    Failed,
    /// The follower has stopped.
    NowDead,
}

impl FollowerState {
    /// Every state, in code order.
    pub const ALL: [FollowerState; 4] = [
        FollowerState::UnableToStart,
        FollowerState::NowActive,
        FollowerState::Failed,
        FollowerState::NowDead,
    ];

    /// Raw code for this state.
    pub fn code(self) -> u8 {
        match self {
            FollowerState::UnableToStart => 0,
            FollowerState::NowActive => 1,
            FollowerState::Failed => 2,
            FollowerState::NowDead => 3,
        }
    }

    /// snake_case name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            FollowerState::UnableToStart => "unable_to_start",
            FollowerState::NowActive => "now_active",
            FollowerState::Failed => "failed",
            FollowerState::NowDead => "now_dead",
        }
    }

    /// Whether the follower is running.
    pub fn is_running(self) -> bool {
        self == FollowerState::NowActive
    }

    /// Whether the follower has reported it stopped working, either by
    /// failing or by dying.
    pub fn is_terminal(self) -> bool {
        matches!(self, FollowerState::Failed | FollowerState::NowDead)
    }
}

impl TryFrom<u8> for FollowerState {
    type Error = SccError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        FollowerState::ALL
            .into_iter()
            .find(|state| state.code() == code)
            .ok_or(SccError::UnknownState(code))
    }
}

impl From<FollowerState> for u8 {
    fn from(state: FollowerState) -> Self {
        state.code()
    }
}

impl fmt::Display for FollowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FollowerState {
    type Err = SccError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FollowerState::ALL
            .into_iter()
            .find(|state| state.as_str() == name)
            .ok_or_else(|| SccError::UnknownStateName(name.to_string()))
    }
}

// ── Snapshot ──────────────────────────────────────────────────────

/// The last report a follower made, as read by a master.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: FollowerState,
    /// Free-form text from the follower. May be empty.
    pub description: String,
}

impl Snapshot {
    /// Build a snapshot from a state and description.
    pub fn new(state: FollowerState, description: impl Into<String>) -> Self {
        Self {
            state,
            description: description.into(),
        }
    }

    /// Split into the `(state, description)` pair.
    pub fn into_parts(self) -> (FollowerState, String) {
        (self.state, self.description)
    }
}

impl From<Snapshot> for (FollowerState, String) {
    fn from(snapshot: Snapshot) -> Self {
        snapshot.into_parts()
    }
}
