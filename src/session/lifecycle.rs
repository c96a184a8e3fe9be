//! Per-session idle-detection state machine.
//!
//! Reacts to connect, disconnect and environment-start signals from the
//! host: keeps the occupancy count, arms or cancels the idle timeout, and
//! requests a map change once the session has sat empty for the configured
//! delay. Map-start handling also covers the engine's startup
//! double-transition, where a second internal reload masquerades as a
//! fresh session.
//!
//! Player-count mutation tolerates off-thread delivery; everything else
//! assumes the host serializes its event callbacks.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::core::counter::PlayerCounter;
use crate::core::timer::IdleTimer;
use crate::host::directive::build_reload_directive;
use crate::host::participant::Participant;
use crate::host::HostHandle;
use crate::session::status::StatusReport;

/// Environment starts required before an empty-on-map-start recount may
/// arm the idle timeout. The first couple of loads are startup churn, not
/// genuine emptiness. Observed engine behavior; whether it holds across
/// engine versions is unverified.
pub const IDLE_ARM_THRESHOLD: u32 = 3;

/// Environment-start ordinal of the real session boundary when booting
/// into a workshop collection: the engine reloads a second time, so the
/// first logical load is not the one to act on. Same caveat as
/// [`IDLE_ARM_THRESHOLD`].
pub const STARTUP_BOUNDARY_WORKSHOP: u32 = 2;

/// Environment-start ordinal of the real session boundary for a plain
/// default map.
pub const STARTUP_BOUNDARY_PLAIN: u32 = 1;

/// Delay for the forced initial map change. An immediate synchronous
/// change during environment start is known to crash the host process.
pub const STARTUP_CHANGE_DELAY: Duration = Duration::from_secs(3);

/// Per-session idle watchdog.
///
/// The host instantiates one per hosted session and routes its event
/// callbacks here. All methods take `&self` and internal state carries
/// its own synchronization, so the host may share it freely.
pub struct SessionLifecycle<H: HostHandle> {
    id: Uuid,
    config: Config,
    host: Arc<H>,
    players: PlayerCounter,
    map_changes: AtomicU32,
    timer: IdleTimer,
}

impl<H: HostHandle> SessionLifecycle<H> {
    /// Attach a watchdog to one hosted session.
    pub fn new(config: Config, host: Arc<H>) -> Self {
        let lifecycle = Self {
            id: Uuid::new_v4(),
            config,
            host,
            players: PlayerCounter::new(),
            map_changes: AtomicU32::new(0),
            timer: IdleTimer::new(),
        };

        info!(
            session = %lifecycle.id,
            delay = %lifecycle.config.delay,
            default_map = %lifecycle.config.default_map,
            "idle watchdog attached"
        );

        lifecycle
    }

    /// Session identifier, for log correlation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Configuration snapshot in effect.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Host notification: a participant finished connecting.
    ///
    /// An arriving player cancels any pending idle timeout, including the
    /// speculative one armed at startup. Non-human participants are
    /// ignored entirely.
    pub fn on_player_connected(&self, participant: &Participant) {
        if !participant.is_human() {
            return;
        }

        let count = self.players.increment();
        debug!(session = %self.id, player = %participant.name, count, "player connected");

        self.stop_idle_timeout();
    }

    /// Host notification: a participant disconnected.
    ///
    /// The only path that arms the real idle timeout: a disconnect that
    /// leaves the session empty.
    pub fn on_player_disconnected(&self, participant: &Participant) {
        if !participant.is_human() {
            return;
        }

        let count = self.players.decrement();
        debug!(session = %self.id, player = %participant.name, count, "player disconnected");

        if self.players.is_empty() {
            self.start_idle_timeout(self.config.idle_delay());
        }
    }

    /// Host notification: a new map/session load started.
    pub fn on_environment_start(&self, map_name: &str) {
        let map_changes = self.map_changes.fetch_add(1, Ordering::SeqCst) + 1;

        if self.config.change_initial && self.schedule_initial_change(map_changes) {
            return;
        }

        // Authoritative recount: incremental tracking restarts from what
        // the host actually reports.
        let humans = self
            .host
            .connected_participants()
            .iter()
            .filter(|participant| participant.is_human())
            .count() as u32;
        self.players.reset(humans);

        if self.players.is_empty() && map_changes >= IDLE_ARM_THRESHOLD {
            debug!(session = %self.id, "no players connected, arming idle timeout");
            self.start_idle_timeout(self.config.idle_delay());
        }

        debug!(session = %self.id, map = map_name, map_changes, "environment started");
    }

    /// Startup double-transition handling for a forced initial change.
    ///
    /// Booting into a workshop collection reloads a second time, so the
    /// real boundary sits one environment start later than for a plain
    /// default map. At the boundary a short timer is scheduled instead of
    /// changing synchronously, and the caller skips the rest of its
    /// map-start handling. Returns whether the change was scheduled.
    fn schedule_initial_change(&self, map_changes: u32) -> bool {
        let boundary = if self.config.workshop_collection {
            STARTUP_BOUNDARY_WORKSHOP
        } else {
            STARTUP_BOUNDARY_PLAIN
        };

        if map_changes != boundary {
            return false;
        }

        info!(
            session = %self.id,
            map = %self.config.default_map,
            "scheduling initial map change"
        );
        self.start_idle_timeout(STARTUP_CHANGE_DELAY);
        true
    }

    /// Arm the idle timeout. No-op while one is already pending.
    ///
    /// On expiry the timer clears its own handle before the action runs,
    /// so a later emptiness can arm a fresh timeout.
    fn start_idle_timeout(&self, delay: Duration) {
        let id = self.id;
        let host = Arc::clone(&self.host);
        let map = self.config.default_map.clone();

        let started = self.timer.start(delay, async move {
            info!(session = %id, map = %map, "idle timeout elapsed, requesting map change");
            host.request_environment_change(build_reload_directive(&map));
        });

        if started {
            debug!(session = %self.id, ?delay, "starting idle timeout");
        }
    }

    fn stop_idle_timeout(&self) {
        if self.timer.stop() {
            debug!(session = %self.id, "stopping idle timeout");
        }
    }

    /// Whether an idle timeout is currently pending.
    pub fn timer_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Currently tracked human participant count.
    pub fn player_count(&self) -> u32 {
        self.players.current()
    }

    /// Environment starts observed since process start.
    pub fn map_change_count(&self) -> u32 {
        self.map_changes.load(Ordering::SeqCst)
    }

    /// Point-in-time snapshot for the operator console.
    pub fn status(&self) -> StatusReport {
        StatusReport {
            map_changes: self.map_change_count(),
            player_count: self.players.current(),
            delay_secs: self.config.delay,
            default_map: self.config.default_map.clone(),
            workshop_collection: self.config.workshop_collection,
            debug: self.config.debug,
            timer_pending: self.timer_pending(),
        }
    }
}
