//! Host runtime boundary.
//!
//! The watchdog never talks to the game engine directly. The host runtime
//! delivers connect/disconnect/environment-start events into the lifecycle
//! and receives reload directives back through [`HostHandle`]. Executing a
//! reload, and any failure doing so, stays on the host side and is not
//! observable here.

pub mod console;
pub mod directive;
pub mod participant;

pub use directive::{build_reload_directive, ReloadDirective, WORKSHOP_PREFIX};
pub use participant::{Participant, ParticipantKind};

/// Capabilities the host runtime provides to the watchdog.
pub trait HostHandle: Send + Sync + 'static {
    /// Ask the host to perform an environment change.
    ///
    /// Fire-and-forget: rejection or failure on the host side is not
    /// reported back, and no retry is attempted.
    fn request_environment_change(&self, directive: ReloadDirective);

    /// Enumerate everything currently connected, bots and broadcast
    /// relays included. The caller applies the occupancy filter.
    fn connected_participants(&self) -> Vec<Participant>;
}
