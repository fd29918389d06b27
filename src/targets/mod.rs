//! Target selection: which query identities are worth timing.
//!
//! Hosts plug in a [`TargetSelector`] at stopwatch construction time. The
//! selector is consulted at both hook sites, so a host can change its answer
//! between the start and the end of an interval.

mod selector;
pub use selector::*;

#[cfg(test)]
mod selector_test;
