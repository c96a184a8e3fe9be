//! # Idlewatch Server
//!
//! Idle-session watchdog for hosted game servers. Watches live player
//! occupancy and requests an environment change (a map reload) once the
//! session has sat empty for a configured delay.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    IDLEWATCH SERVER                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/             - Occupancy primitives                    │
//! │  ├── counter.rs    - Clamped, lock-guarded player counter    │
//! │  └── timer.rs      - Single-shot cancellable idle timer      │
//! │                                                              │
//! │  session/          - Idle-detection state machine            │
//! │  ├── lifecycle.rs  - Connect/disconnect/map-start handling   │
//! │  └── status.rs     - Operator-facing status snapshot         │
//! │                                                              │
//! │  host/             - Host runtime boundary                   │
//! │  ├── participant.rs- Human/bot/relay occupancy filter        │
//! │  ├── directive.rs  - Map reload directive translation        │
//! │  └── console.rs    - Operator console commands               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Event flow
//!
//! The host runtime delivers connect, disconnect and environment-start
//! events into a [`SessionLifecycle`]. The lifecycle adjusts the occupancy
//! counter, arms or cancels the idle timer, and on expiry hands a
//! [`ReloadDirective`] back through [`HostHandle`]. Executing the reload
//! (and any failure of it) stays on the host side; the request is
//! fire-and-forget.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod host;
pub mod session;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::core::counter::PlayerCounter;
pub use crate::core::timer::IdleTimer;
pub use crate::host::directive::{build_reload_directive, ReloadDirective};
pub use crate::host::participant::{Participant, ParticipantKind};
pub use crate::host::HostHandle;
pub use crate::session::lifecycle::SessionLifecycle;
pub use crate::session::status::StatusReport;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
