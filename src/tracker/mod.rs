//! The timing state machine driven by the two pipeline hooks.
//!
//! [`TrackerState`] is request-scoped and host-owned; [`QueryStopwatch`] is
//! the stateless service that drives it. The machine has two states, idle
//! (no open interval) and timing (interval start recorded), with at most one
//! interval open at a time.

mod executed_key;
mod state;
mod stopwatch;

pub use executed_key::*;
pub use state::*;
pub use stopwatch::*;
