use std::fmt;

use crate::constants::KEY_SEPARATOR;

/// One recorded execution of a tracked query identity.
///
/// `sequence` is the executed-log length at insertion time, so repeated runs
/// of the same identity within a request stay distinguishable. Lookups match
/// on the `identity` field; the rendered `identity_sequence` form is kept
/// for log output only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedKey {
    identity: String,
    sequence: usize,
}

impl ExecutedKey {
    pub(crate) fn new(identity: impl Into<String>, sequence: usize) -> Self {
        Self {
            identity: identity.into(),
            sequence,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn matches_identity(&self, identity: &str) -> bool {
        self.identity == identity
    }
}

impl fmt::Display for ExecutedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.identity, KEY_SEPARATOR, self.sequence)
    }
}
