//! Query identity resolution and tracking eligibility.

use crate::constants::IDENTITY_PARAM;
use crate::constants::MAIN_QUERY_IDENTITY;
use crate::query::QueryDescriptor;
use crate::targets::TargetSet;
use crate::tracker::ExecutedLog;


/// Decides which query executions are worth timing.
///
/// Pure predicate over the query, the current target set and the executed
/// log; resolution never mutates tracker state.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    identity_param: String,
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self {
            identity_param: IDENTITY_PARAM.to_string(),
        }
    }
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the identity tag from a differently named query parameter.
    pub fn with_identity_param(identity_param: impl Into<String>) -> Self {
        Self {
            identity_param: identity_param.into(),
        }
    }

    /// Identity tag of a query, empty when the parameter is unset.
    pub fn resolve_identity(&self, query: &dyn QueryDescriptor) -> String {
        query.param(&self.identity_param).unwrap_or_default()
    }

    /// Whether this execution should open a timing interval.
    ///
    /// A main query is skipped outright until a `main_query` identity shows
    /// up in the executed log; the start hook only records target-matched
    /// identities, so in practice main-query executions are never timed.
    /// Everything else is eligible iff its identity is in `targets`.
    pub fn should_track(
        &self,
        query: &dyn QueryDescriptor,
        targets: &TargetSet,
        executed: &ExecutedLog,
    ) -> bool {
        if query.is_primary() && !executed.contains_identity(MAIN_QUERY_IDENTITY) {
            return false;
        }

        targets.contains(&self.resolve_identity(query))
    }
}
