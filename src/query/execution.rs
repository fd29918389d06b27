use std::collections::HashMap;

#[cfg(test)]
use mockall::automock;

use crate::constants::IDENTITY_PARAM;

/// Host-side view of one query about to run.
///
/// The start hook only needs two things from the host's query object: a
/// named-parameter accessor and the main-query predicate.
#[cfg_attr(test, automock)]
pub trait QueryDescriptor {
    /// Value of a named query parameter, `None` when unset
    fn param(&self, name: &str) -> Option<String>;

    /// Whether this is the pipeline's main/default query
    fn is_primary(&self) -> bool;
}

/// Owned descriptor for hosts that build query metadata directly instead of
/// wrapping a framework object.
#[derive(Debug, Clone, Default)]
pub struct QueryExecution {
    params: HashMap<String, String>,
    primary: bool,
}

impl QueryExecution {
    /// The pipeline's main query; carries no identity tag.
    pub fn main_query() -> Self {
        Self {
            params: HashMap::new(),
            primary: true,
        }
    }

    /// A named sub-query tagged with `identity`.
    pub fn sub_query(identity: impl Into<String>) -> Self {
        Self {
            params: HashMap::from([(IDENTITY_PARAM.to_string(), identity.into())]),
            primary: false,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

impl QueryDescriptor for QueryExecution {
    fn param(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }

    fn is_primary(&self) -> bool {
        self.primary
    }
}
