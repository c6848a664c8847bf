//! Follower side of the channel.

use std::sync::Arc;

use scc_core::{FollowerState, OmittedDescription};
use tracing::debug;

use crate::channel::Record;

/// Write-only handle onto a channel.
#[derive(Debug, Clone)]
pub struct FollowerView {
    record: Arc<Record>,
}

impl FollowerView {
    pub(crate) fn new(record: Arc<Record>) -> Self {
        Self { record }
    }

    /// Tell the master which state the follower is in.
    ///
    /// `state` always replaces the stored state. A `Some` description
    /// replaces the stored description. With `None`, the channel's
    /// [`OmittedDescription`] policy decides: `Retain` (the default) keeps
    /// the previous description, `Clear` empties it.
    ///
    /// No ordering between states is enforced; any state may follow any
    /// other.
    pub fn report(&self, state: FollowerState, description: Option<&str>) {
        let policy = self.record.config().omitted_description;
        {
            let mut latest = self.record.write();
            latest.state = state;
            match (description, policy) {
                (Some(text), _) => {
                    latest.description.clear();
                    latest.description.push_str(text);
                }
                (None, OmittedDescription::Clear) => latest.description.clear(),
                (None, OmittedDescription::Retain) => {}
            }
        }
        debug!(%state, described = description.is_some(), "follower reported state");
    }

    /// Report a state without a description.
    pub fn report_state(&self, state: FollowerState) {
        self.report(state, None);
    }

    /// Report a state with a description.
    pub fn report_described(&self, state: FollowerState, description: &str) {
        self.report(state, Some(description));
    }

    /// Report a state, taking the description from the first item of
    /// `descriptions`.
    ///
    /// Anything after the first item is ignored. An empty iterator is the
    /// same as reporting without a description.
    pub fn report_first<I, S>(&self, state: FollowerState, descriptions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let first = descriptions.into_iter().next();
        let description: Option<&str> = first.as_ref().map(|s| s.as_ref());
        self.report(state, description);
    }
}

#[cfg(test)]
mod tests {
    use crate::StateChannel;
    use scc_core::{ChannelConfig, FollowerState, OmittedDescription};

    fn clearing_channel() -> StateChannel {
        StateChannel::with_config(
            ChannelConfig::default().with_omitted_description(OmittedDescription::Clear),
        )
    }

    #[test]
    fn report_stores_supplied_state() {
        // Regression: the stored state must be the one passed in, never a
        // hard-coded UnableToStart.
        let channel = StateChannel::new();
        let master = channel.master_interface();
        let follower = channel.follower_interface();

        for state in FollowerState::ALL {
            follower.report_state(state);
            assert_eq!(master.state(), state);
        }
    }

    #[test]
    fn report_with_description_replaces_it() {
        let channel = StateChannel::new();
        let master = channel.master_interface();
        let follower = channel.follower_interface();

        follower.report(FollowerState::NowActive, Some("started"));
        follower.report(FollowerState::Failed, Some("disk full"));
        assert_eq!(master.query(), (FollowerState::Failed, "disk full".to_string()));
    }

    #[test]
    fn empty_description_is_a_description() {
        let channel = StateChannel::new();
        let master = channel.master_interface();
        let follower = channel.follower_interface();

        follower.report(FollowerState::NowActive, Some("started"));
        follower.report(FollowerState::NowActive, Some(""));
        assert_eq!(master.query(), (FollowerState::NowActive, String::new()));
    }

    #[test]
    fn omitted_description_retained_by_default() {
        let channel = StateChannel::new();
        let master = channel.master_interface();
        let follower = channel.follower_interface();

        follower.report(FollowerState::Failed, Some("disk full"));
        follower.report_state(FollowerState::NowDead);
        assert_eq!(master.query(), (FollowerState::NowDead, "disk full".to_string()));
    }

    #[test]
    fn omitted_description_retains_empty() {
        let channel = StateChannel::new();
        let master = channel.master_interface();
        let follower = channel.follower_interface();

        follower.report_state(FollowerState::NowActive);
        follower.report_state(FollowerState::Failed);
        assert_eq!(master.query(), (FollowerState::Failed, String::new()));
    }

    #[test]
    fn omitted_description_cleared_by_policy() {
        let channel = clearing_channel();
        let master = channel.master_interface();
        let follower = channel.follower_interface();

        follower.report(FollowerState::Failed, Some("disk full"));
        follower.report_state(FollowerState::NowDead);
        assert_eq!(master.query(), (FollowerState::NowDead, String::new()));
    }

    #[test]
    fn clear_policy_with_prior_empty_description() {
        let channel = clearing_channel();
        let master = channel.master_interface();
        let follower = channel.follower_interface();

        follower.report(FollowerState::NowActive, Some(""));
        follower.report_state(FollowerState::Failed);
        assert_eq!(master.query(), (FollowerState::Failed, String::new()));
    }

    #[test]
    fn report_first_ignores_extra_descriptions() {
        let first = StateChannel::new();
        let second = StateChannel::new();

        first.follower_interface().report_first(FollowerState::Failed, ["a", "b"]);
        second.follower_interface().report(FollowerState::Failed, Some("a"));

        assert_eq!(first.master_interface().query(), second.master_interface().query());
        assert_eq!(
            first.master_interface().query(),
            (FollowerState::Failed, "a".to_string())
        );
    }

    #[test]
    fn report_first_with_nothing_is_omitted() {
        let channel = StateChannel::new();
        let master = channel.master_interface();
        let follower = channel.follower_interface();

        follower.report_described(FollowerState::NowActive, "started");
        follower.report_first(FollowerState::NowDead, Vec::<String>::new());
        assert_eq!(master.query(), (FollowerState::NowDead, "started".to_string()));
    }

    #[test]
    fn any_transition_is_accepted() {
        let channel = StateChannel::new();
        let master = channel.master_interface();
        let follower = channel.follower_interface();

        follower.report_state(FollowerState::NowDead);
        follower.report_state(FollowerState::NowActive);
        assert_eq!(master.state(), FollowerState::NowActive);
    }
}
