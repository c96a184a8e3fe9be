//! Idlewatch Server
//!
//! Demo driver: attaches the idle watchdog to a simulated host runtime and
//! plays through a scripted occupancy scenario.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use idlewatch::host::console::handle_command;
use idlewatch::{Config, HostHandle, Participant, ReloadDirective, SessionLifecycle, VERSION};

/// Host stand-in: records reload requests and serves the participant list
/// the lifecycle recounts from.
struct SimulatedHost {
    participants: Mutex<Vec<Participant>>,
    requests: Mutex<Vec<ReloadDirective>>,
}

impl SimulatedHost {
    fn new() -> Self {
        Self {
            participants: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn join(&self, participant: Participant) {
        self.participants.lock().unwrap().push(participant);
    }

    fn leave(&self, name: &str) {
        self.participants
            .lock()
            .unwrap()
            .retain(|participant| participant.name != name);
    }

    fn requests(&self) -> Vec<ReloadDirective> {
        self.requests.lock().unwrap().clone()
    }
}

impl HostHandle for SimulatedHost {
    fn request_environment_change(&self, directive: ReloadDirective) {
        info!("host received: {directive}");
        self.requests.lock().unwrap().push(directive);
    }

    fn connected_participants(&self) -> Vec<Participant> {
        self.participants.lock().unwrap().clone()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Config from file when given, otherwise defaults tightened so the
    // demo finishes quickly.
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_json_file(path)?,
        None => Config {
            delay: 2.0,
            ..Config::default()
        },
    };

    // Initialize logging
    let level = if config.debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Idlewatch Server v{}", VERSION);
    info!("Idle delay: {}s", config.delay);
    info!("Default map: {}", config.default_map);

    demo_session(config).await;

    Ok(())
}

/// Scripted scenario: startup churn, one player passing through, then the
/// idle timeout running to completion.
async fn demo_session(config: Config) {
    info!("=== Starting Demo Session ===");

    let host = Arc::new(SimulatedHost::new());
    let lifecycle = SessionLifecycle::new(config.clone(), Arc::clone(&host));

    // Engine boots and reloads once: startup churn, nothing arms.
    lifecycle.on_environment_start(&config.default_map);
    lifecycle.on_environment_start(&config.default_map);

    // A player passes through.
    let alice = Participant::human("alice");
    host.join(alice.clone());
    lifecycle.on_player_connected(&alice);
    info!("player on, timer pending: {}", lifecycle.timer_pending());

    host.leave("alice");
    lifecycle.on_player_disconnected(&alice);
    info!("player off, timer pending: {}", lifecycle.timer_pending());

    // Third load with nobody on; the armed timeout keeps running.
    lifecycle.on_environment_start(&config.default_map);

    info!("\n{}", handle_command(&lifecycle, &["status"]));

    info!("Waiting {}s for the idle timeout...", config.delay);
    tokio::time::sleep(config.idle_delay() + Duration::from_millis(250)).await;

    let requests = host.requests();
    info!("=== Demo Results ===");
    info!("Reload requests issued: {}", requests.len());
    for directive in &requests {
        info!("  {directive}");
    }
    info!("\n{}", handle_command(&lifecycle, &["status"]));
    info!("=== Demo Complete ===");
}
