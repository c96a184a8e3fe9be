//! Idle-detection state machine.
//!
//! One [`SessionLifecycle`] per hosted session. The host owns it and
//! calls in from its event callbacks; the lifecycle owns the occupancy
//! counter, the idle timer and the map-start sequencing.

pub mod lifecycle;
pub mod status;

pub use lifecycle::{
    SessionLifecycle, IDLE_ARM_THRESHOLD, STARTUP_BOUNDARY_PLAIN, STARTUP_BOUNDARY_WORKSHOP,
    STARTUP_CHANGE_DELAY,
};
pub use status::StatusReport;
