use std::time::Instant;

#[cfg(test)]
use mockall::automock;

/// Monotonic time source for interval measurement
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Process clock backed by [`Instant::now`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
