//! STRICT_PACK: the whole bundle lands on a single node, or the call fails.
//!
//! Does not mutate the resource manager and does not reorder the
//! bundle — the aggregate demand makes per-demand traversal order
//! irrelevant.

use fleetsched_core::{Bundle, ClusterView, NodeId, ResourceVector};

use crate::selector::best;

/// Outcome of the STRICT_PACK feasibility gate and node pick.
pub enum StrictPackOutcome {
    /// No node's *total* capacity (anywhere in the cluster, not just
    /// among filtered candidates — see the module-level note) covers
    /// the aggregate demand. Structurally impossible.
    Infeasible,
    /// Feasible in principle, but no filtered candidate currently has
    /// enough *available* capacity.
    Failed,
    /// The aggregate fits on this node.
    Success(NodeId),
}

/// Aggregate `bundle` into a single demand and find it a single node.
///
/// The feasibility gate deliberately scans `full_view` — every node
/// the manager knows about — rather than `candidates`: this is a
/// preserved asymmetry, not an oversight. It means STRICT_PACK can
/// report INFEASIBLE even when a filtered-out node would have fit the
/// aggregate, and conversely can proceed past the gate on the
/// strength of a node the filter later excludes from the actual pick.
pub fn strict_pack(bundle: &Bundle, candidates: &[NodeId], full_view: &ClusterView) -> StrictPackOutcome {
    let aggregate = bundle.iter().cloned().fold(ResourceVector::zero(), |acc, demand| acc + demand);

    let feasible_anywhere = full_view.values().any(|node| node.total.covers(&aggregate));
    if !feasible_anywhere {
        return StrictPackOutcome::Infeasible;
    }

    match best(&aggregate, candidates, full_view) {
        Some(node) => StrictPackOutcome::Success(node),
        None => StrictPackOutcome::Failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetsched_core::{FixedPoint, NodeResources, PredefinedResource};

    fn cpu_node(total: u64, available: u64) -> NodeResources {
        let total_v = ResourceVector::zero().with(PredefinedResource::Cpu, FixedPoint::from_units(total));
        let available_v = ResourceVector::zero().with(PredefinedResource::Cpu, FixedPoint::from_units(available));
        NodeResources::new(total_v, available_v)
    }

    fn cpu_demand(units: u64) -> ResourceVector {
        ResourceVector::zero().with(PredefinedResource::Cpu, FixedPoint::from_units(units))
    }

    #[test]
    fn s3_aggregate_fits_only_the_larger_node() {
        let view: ClusterView =
            [(NodeId::new(1), cpu_node(8, 8)), (NodeId::new(2), cpu_node(2, 2))].into_iter().collect();
        let candidates = vec![NodeId::new(1), NodeId::new(2)];
        let bundle = vec![cpu_demand(3), cpu_demand(3)];

        match strict_pack(&bundle, &candidates, &view) {
            StrictPackOutcome::Success(node) => assert_eq!(node, NodeId::new(1)),
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn s4_aggregate_exceeds_every_node_total() {
        let view: ClusterView =
            [(NodeId::new(1), cpu_node(4, 4)), (NodeId::new(2), cpu_node(4, 4))].into_iter().collect();
        let candidates = vec![NodeId::new(1), NodeId::new(2)];
        let bundle = vec![cpu_demand(3), cpu_demand(3)];

        assert!(matches!(strict_pack(&bundle, &candidates, &view), StrictPackOutcome::Infeasible));
    }

    #[test]
    fn feasible_total_but_unavailable_now_is_failed_not_infeasible() {
        let view: ClusterView = [(NodeId::new(1), cpu_node(8, 1))].into_iter().collect();
        let candidates = vec![NodeId::new(1)];
        let bundle = vec![cpu_demand(3), cpu_demand(3)];

        assert!(matches!(strict_pack(&bundle, &candidates, &view), StrictPackOutcome::Failed));
    }

    #[test]
    fn gate_scans_full_view_even_when_filtered_out() {
        // Only node 1 is total-feasible, but it's excluded from the
        // candidate set; the gate still passes because it scans the
        // whole cluster, then the pick among candidates fails.
        let view: ClusterView =
            [(NodeId::new(1), cpu_node(8, 8)), (NodeId::new(2), cpu_node(1, 1))].into_iter().collect();
        let candidates = vec![NodeId::new(2)];
        let bundle = vec![cpu_demand(3), cpu_demand(3)];

        assert!(matches!(strict_pack(&bundle, &candidates, &view), StrictPackOutcome::Failed));
    }
}
