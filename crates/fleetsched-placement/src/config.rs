//! Tuning surface for implementation-defined placement behavior.

/// Knobs the placement engine exposes for the handful of behaviors
/// left unspecified by the core model (best-node tie-breaking order,
/// candidate traversal order). Constructed by the embedding
/// placement-group controller — this crate never loads it from a
/// file or environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementConfig {
    /// When `true`, candidate node ids are sorted before iteration so
    /// tie-breaks and PACK/SPREAD traversal are reproducible across
    /// runs. When `false`, iteration follows the manager's snapshot
    /// order, which may vary.
    pub deterministic_candidate_order: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self { deterministic_candidate_order: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_deterministic() {
        assert!(PlacementConfig::default().deterministic_candidate_order);
    }
}
