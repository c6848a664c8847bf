//! Follower work loop and master polling loop.
//!
//! The channel only carries state. Deciding when to report and how to react
//! to a report lives here, on either side of it.

use std::time::Duration;

use scc_channel::{FollowerState, FollowerView, MasterView, Snapshot};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// How the simulated follower behaves.
#[derive(Debug, Clone, Copy)]
pub struct FollowerPlan {
    /// Units of work before the follower stops on its own.
    pub ticks: u32,
    /// Time spent on each unit of work.
    pub tick: Duration,
    /// Tick at which the follower fails instead of finishing.
    pub fail_at: Option<u32>,
}

/// Run the follower: report active, work, then report failed or dead.
pub async fn run_follower(follower: FollowerView, plan: FollowerPlan) {
    follower.report_described(FollowerState::NowActive, "started");

    for tick in 1..=plan.ticks {
        tokio::time::sleep(plan.tick).await;
        if plan.fail_at == Some(tick) {
            let reason = format!("gave up at tick {tick}");
            warn!(tick, "follower failing");
            follower.report_described(FollowerState::Failed, &reason);
            return;
        }
        debug!(tick, "follower tick");
    }

    follower.report_state(FollowerState::NowDead);
}

/// Poll the follower until it reports a terminal state or shutdown is
/// signalled. Returns the last snapshot seen.
pub async fn poll_until_terminal(
    master: MasterView,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> Snapshot {
    let mut ticker = tokio::time::interval(interval);
    let mut last: Option<Snapshot> = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snapshot = master.snapshot();
                if last.as_ref() != Some(&snapshot) {
                    info!(
                        state = %snapshot.state,
                        description = %snapshot.description,
                        "follower state changed"
                    );
                }
                if snapshot.state.is_terminal() {
                    return snapshot;
                }
                last = Some(snapshot);
            }
            Ok(()) = shutdown.changed() => {
                info!("master polling stopped");
                return master.snapshot();
            }
        }
    }
}
