//! Occupancy primitives.
//!
//! The two pieces with real state-transition hazards, kept free of host
//! concerns: the clamped player counter and the single-shot idle timer.
//! Everything above them assumes these invariants hold.

pub mod counter;
pub mod timer;

// Re-export core types
pub use counter::PlayerCounter;
pub use timer::IdleTimer;
