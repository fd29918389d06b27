use std::sync::Arc;

use tracing::debug;
use tracing::trace;

use crate::config::StopwatchConfig;
use crate::query::QueryDescriptor;
use crate::reporter::ConsoleReporter;
use crate::reporter::Reporter;
use crate::resolver::IdentityResolver;
use crate::targets::DefaultTargets;
use crate::targets::TargetSelector;
use crate::targets::TargetSet;
use crate::tracker::ExecutedKey;
use crate::tracker::TrackerState;
use crate::utils::time::Clock;
use crate::utils::time::SystemClock;

/// Stateless hook service timing targeted query executions.
///
/// One stopwatch can serve many sequential requests; everything mutable
/// lives in the [`TrackerState`] passed into the hooks. The host guarantees
/// that the two hooks are invoked sequentially within one request, so the
/// hooks take `&mut` state and need no locking.
pub struct QueryStopwatch {
    resolver: IdentityResolver,
    selector: Arc<dyn TargetSelector>,
    reporter: Arc<dyn Reporter>,
    clock: Arc<dyn Clock>,
}

impl Default for QueryStopwatch {
    fn default() -> Self {
        Self::new(Arc::new(DefaultTargets), Arc::new(ConsoleReporter::default()))
    }
}

impl QueryStopwatch {
    pub fn new(selector: Arc<dyn TargetSelector>, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            resolver: IdentityResolver::new(),
            selector,
            reporter,
            clock: Arc::new(SystemClock),
        }
    }

    /// Builds a stopwatch whose targets and identity parameter come from a
    /// static configuration instead of a runtime selector hook.
    pub fn from_config(config: &StopwatchConfig, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            resolver: IdentityResolver::with_identity_param(config.identity_param.clone()),
            selector: Arc::new(config.clone().into_selector()),
            reporter,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_resolver(mut self, resolver: IdentityResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Start hook, invoked by the host right before a query runs.
    ///
    /// Eligible executions open the timing interval and append their key to
    /// the executed log. Ineligible executions leave the state untouched. A
    /// second eligible start while an interval is open overwrites the start
    /// timestamp (last start wins; nested intervals are not stacked).
    pub fn on_query_start(&self, state: &mut TrackerState, query: &dyn QueryDescriptor) {
        let targets = TargetSet::normalize(self.selector.resolve_targets());

        if !self.resolver.should_track(query, &targets, state.executed()) {
            trace!("query not tracked, state unchanged");
            return;
        }

        let identity = self.resolver.resolve_identity(query);
        let key = ExecutedKey::new(identity, state.executed().len());

        // Re-entrant start guard: the same instance never opens twice
        if state.executed().contains(&key) {
            trace!("executed key {} already recorded", key);
            return;
        }

        debug!("opening timing interval for {}", key);
        state.open_interval(self.clock.now());
        state.executed_mut().push(key);
    }

    /// End hook, invoked by the host after the query loop finishes.
    ///
    /// Closes the open interval, emits one report line per target identifier
    /// that has a recorded execution, and returns the state to idle. With no
    /// open interval this is a silent no-op.
    pub fn on_query_end(&self, state: &mut TrackerState) {
        let Some(started) = state.take_interval() else {
            trace!("end hook with no open interval");
            return;
        };

        let elapsed_secs = self
            .clock
            .now()
            .saturating_duration_since(started)
            .as_secs_f64();

        // Targets are re-resolved at end time, not cached from the start
        let targets = TargetSet::normalize(self.selector.resolve_targets());

        for identifier in targets.iter() {
            // First recorded execution wins; one line per identifier
            if state.executed().first_match(identifier).is_some() {
                self.reporter.report(identifier, elapsed_secs);
            }
        }

        debug!("closed timing interval after {:.4}s", elapsed_secs);
    }
}
