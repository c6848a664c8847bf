//! sccd — state-communication channel demo.
//!
//! Pairs a simulated follower task with a master that polls its state:
//! - Follower reports `now_active`, works for a number of ticks, then
//!   reports `now_dead` (or `failed` at `--fail-at`)
//! - Master polls every `--poll-ms` and stops at the first terminal state
//!
//! # Usage
//!
//! ```text
//! sccd run --ticks 5 --fail-at 3 --config scc.toml --json
//! sccd states
//! ```

mod supervisor;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use scc_channel::{ChannelConfig, FollowerState, StateChannel};
use tokio::sync::watch;
use tracing::info;

use crate::supervisor::{poll_until_terminal, run_follower, FollowerPlan};

#[derive(Parser)]
#[command(name = "sccd", about = "State-communication channel demo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a follower and a polling master over one channel.
    Run {
        /// Units of work the follower performs.
        #[arg(long, default_value = "5")]
        ticks: u32,

        /// Duration of each unit of work in milliseconds.
        #[arg(long, default_value = "200")]
        tick_ms: u64,

        /// Master poll interval in milliseconds.
        #[arg(long, default_value = "50")]
        poll_ms: u64,

        /// Make the follower fail at this tick.
        #[arg(long)]
        fail_at: Option<u32>,

        /// Channel config file (TOML).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the final snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the states a follower can report.
    States,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sccd=debug")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            ticks,
            tick_ms,
            poll_ms,
            fail_at,
            config,
            json,
        } => {
            let plan = FollowerPlan {
                ticks,
                tick: Duration::from_millis(tick_ms),
                fail_at,
            };
            run(plan, Duration::from_millis(poll_ms), config, json).await
        }
        Command::States => {
            for state in FollowerState::ALL {
                println!("{state}");
            }
            Ok(())
        }
    }
}

async fn run(
    plan: FollowerPlan,
    poll_interval: Duration,
    config_path: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => {
            let config = ChannelConfig::from_file(&path)?;
            info!(path = ?path, "channel config loaded");
            config
        }
        None => ChannelConfig::default(),
    };

    let channel = StateChannel::with_config(config);

    // ── Shutdown signal ────────────────────────────────────────

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    // ── Follower and master ────────────────────────────────────

    let follower = tokio::spawn(run_follower(channel.follower_interface(), plan));
    let last = poll_until_terminal(channel.master_interface(), poll_interval, shutdown_rx).await;

    follower.abort();
    let _ = follower.await;

    if json {
        println!("{}", serde_json::to_string_pretty(&last)?);
    } else {
        info!(state = %last.state, description = %last.description, "follower finished");
    }
    Ok(())
}
