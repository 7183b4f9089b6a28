//! The sole public entry point: `schedule`.
//!
//! Owns the prelude shared by all four policies — snapshot the
//! cluster, filter candidates, (for non-STRICT_PACK) reorder the
//! bundle by scarcity — and the epilogue common to all of them:
//! restoring the caller's original demand order on the way out.

use fleetsched_core::{
    candidate_nodes, Bundle, NodeId, Policy, ResourceManager, ResourceVector, SchedulingResult,
};
use tracing::{info, warn};

use crate::config::PlacementConfig;
use crate::ordering::{invert, order};
use crate::policy::pack::pack;
use crate::policy::spread::spread;
use crate::policy::strict_pack::{strict_pack, StrictPackOutcome};
use crate::policy::strict_spread::strict_spread;

/// Place `bundle` onto the cluster `manager` knows about, under
/// `policy`, restricted to nodes passing `node_filter` (`None` means
/// every node is a candidate).
///
/// Synchronous and single-threaded: this call runs to completion with
/// no suspension points, and returns only once a terminal status is
/// known.
pub fn schedule<M: ResourceManager>(
    manager: &M,
    bundle: &Bundle,
    policy: Policy,
    node_filter: Option<&dyn Fn(NodeId) -> bool>,
    config: &PlacementConfig,
) -> SchedulingResult {
    let mut view = manager.cluster_resources();
    let mut candidates = candidate_nodes(&view, node_filter);
    if config.deterministic_candidate_order {
        candidates.sort_unstable();
    }

    if candidates.is_empty() {
        warn!(?policy, "no candidate nodes survive the filter");
        return SchedulingResult::infeasible();
    }

    let result = match policy {
        Policy::StrictPack => schedule_strict_pack(bundle, &candidates, &view),
        Policy::StrictSpread => schedule_strict_spread(bundle, &candidates, &view),
        Policy::Spread => schedule_spread(bundle, &candidates, &mut view, manager),
        Policy::Pack => schedule_pack(bundle, &candidates, &mut view, manager),
    };

    info!(?policy, status = ?result.status, bundle_len = bundle.len(), "schedule call complete");
    result
}

fn schedule_strict_pack(bundle: &Bundle, candidates: &[NodeId], view: &fleetsched_core::ClusterView) -> SchedulingResult {
    match strict_pack(bundle, candidates, view) {
        StrictPackOutcome::Infeasible => SchedulingResult::infeasible(),
        StrictPackOutcome::Failed => SchedulingResult::failed(),
        StrictPackOutcome::Success(node) => SchedulingResult::success(vec![node; bundle.len()]),
    }
}

fn schedule_strict_spread(bundle: &Bundle, candidates: &[NodeId], view: &fleetsched_core::ClusterView) -> SchedulingResult {
    if bundle.len() > candidates.len() {
        return SchedulingResult::infeasible();
    }

    let permutation = order(bundle);
    let traversal_demands = reorder(bundle, &permutation);

    match strict_spread(&traversal_demands, candidates, view) {
        Some(traversal_assignments) => SchedulingResult::success(restore_order(&permutation, traversal_assignments)),
        None => SchedulingResult::failed(),
    }
}

fn schedule_spread<M: ResourceManager>(
    bundle: &Bundle,
    candidates: &[NodeId],
    view: &mut fleetsched_core::ClusterView,
    manager: &M,
) -> SchedulingResult {
    let permutation = order(bundle);
    let traversal_demands = reorder(bundle, &permutation);

    match spread(&traversal_demands, candidates, view, manager) {
        Some(traversal_assignments) => SchedulingResult::success(restore_order(&permutation, traversal_assignments)),
        None => SchedulingResult::failed(),
    }
}

fn schedule_pack<M: ResourceManager>(
    bundle: &Bundle,
    candidates: &[NodeId],
    view: &mut fleetsched_core::ClusterView,
    manager: &M,
) -> SchedulingResult {
    let permutation = order(bundle);
    let traversal_demands = reorder(bundle, &permutation);

    match pack(&traversal_demands, candidates, view, manager) {
        Some(traversal_assignments) => SchedulingResult::success(restore_order(&permutation, traversal_assignments)),
        None => SchedulingResult::failed(),
    }
}

fn reorder(bundle: &Bundle, permutation: &[usize]) -> Vec<ResourceVector> {
    permutation.iter().map(|&i| bundle[i].clone()).collect()
}

/// Undo a traversal permutation: `result[original_i]` becomes the
/// node assigned to `bundle[original_i]`.
fn restore_order(permutation: &[usize], traversal_assignments: Vec<NodeId>) -> Vec<NodeId> {
    let inverse = invert(permutation);
    (0..traversal_assignments.len()).map(|original_i| traversal_assignments[inverse[original_i]]).collect()
}
