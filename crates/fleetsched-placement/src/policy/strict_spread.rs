//! STRICT_SPREAD: every demand lands on a distinct node.
//!
//! Does not mutate the resource manager — scoring is done entirely
//! against the snapshot taken at the start of the call, since no
//! demand's placement can affect another's feasibility (distinct
//! nodes, no shared capacity).

use fleetsched_core::{ClusterView, NodeId, ResourceVector};

use crate::selector::best;

/// Place each demand (already in traversal order) on its own node.
///
/// The caller is responsible for the `|bundle| > |candidates|`
/// INFEASIBLE check — by the time this runs, that structural
/// impossibility has already been ruled out, so any remaining
/// placement failure here is a `FAILED` (`None`), not `INFEASIBLE`.
pub fn strict_spread(demands: &[ResourceVector], candidates: &[NodeId], view: &ClusterView) -> Option<Vec<NodeId>> {
    let mut remaining: Vec<NodeId> = candidates.to_vec();
    let mut assignments = Vec::with_capacity(demands.len());

    for demand in demands {
        let chosen = best(demand, &remaining, view)?;
        remaining.retain(|&id| id != chosen);
        assignments.push(chosen);
    }

    Some(assignments)
}
