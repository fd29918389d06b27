#[cfg(test)]
use mockall::automock;

/// Raw value handed back by a target-selection hook.
///
/// Hosts may answer with a single identifier or a whole set; both shapes
/// normalize into a [`TargetSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for TargetSpec {
    fn from(identifier: &str) -> Self {
        TargetSpec::One(identifier.to_string())
    }
}

impl From<String> for TargetSpec {
    fn from(identifier: String) -> Self {
        TargetSpec::One(identifier)
    }
}

impl From<Vec<String>> for TargetSpec {
    fn from(identifiers: Vec<String>) -> Self {
        TargetSpec::Many(identifiers)
    }
}

/// Normalized collection of target identifiers.
///
/// Declaration order is meaningful (report lines are emitted in this order)
/// and duplicates are kept as declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSet {
    identifiers: Vec<String>,
}

impl TargetSet {
    pub fn normalize(spec: TargetSpec) -> Self {
        let identifiers = match spec {
            TargetSpec::One(identifier) => vec![identifier],
            TargetSpec::Many(identifiers) => identifiers,
        };
        Self { identifiers }
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.identifiers.iter().any(|id| id == identity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

/// Strategy deciding which query identities get timed.
///
/// Re-evaluated on every hook invocation, never cached across the interval.
#[cfg_attr(test, automock)]
pub trait TargetSelector: Send + Sync {
    fn resolve_targets(&self) -> TargetSpec;
}

/// Stock selection: a single empty identifier, i.e. the pipeline's default
/// query.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTargets;

impl TargetSelector for DefaultTargets {
    fn resolve_targets(&self) -> TargetSpec {
        TargetSpec::One(String::new())
    }
}

/// Fixed identifier list, typically built from [`StopwatchConfig`].
///
/// [`StopwatchConfig`]: crate::StopwatchConfig
#[derive(Debug, Clone)]
pub struct StaticTargets {
    identifiers: Vec<String>,
}

impl StaticTargets {
    pub fn new(identifiers: Vec<String>) -> Self {
        Self { identifiers }
    }
}

impl TargetSelector for StaticTargets {
    fn resolve_targets(&self) -> TargetSpec {
        TargetSpec::Many(self.identifiers.clone())
    }
}
