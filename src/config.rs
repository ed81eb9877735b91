/// Decides when a diagonal step may pass between its two orthogonal corner cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CornerRule {
    /// A diagonal step is forbidden only when both corners are blocked, so a path can never
    /// squeeze through a diagonal gap between two walls.
    #[default]
    BothBlocked,
    /// A diagonal step is forbidden as soon as either corner is blocked; paths never clip the
    /// corner of a wall.
    AnyBlocked,
}

/// Tunables for [PathSearch](crate::PathSearch).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub corner_rule: CornerRule,
    /// Maximum number of nodes to expand before giving up. [None] searches until the open set is
    /// exhausted.
    pub expansion_limit: Option<usize>,
    /// Checks connected components before searching so disconnected endpoints are rejected
    /// without flood-filling the start's region.
    pub use_components: bool,
}

impl SearchConfig {
    pub fn with_corner_rule(mut self, corner_rule: CornerRule) -> SearchConfig {
        self.corner_rule = corner_rule;
        self
    }
    pub fn with_expansion_limit(mut self, limit: usize) -> SearchConfig {
        self.expansion_limit = Some(limit);
        self
    }
    pub fn with_components(mut self, use_components: bool) -> SearchConfig {
        self.use_components = use_components;
        self
    }
}
