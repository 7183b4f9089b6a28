//! Best-node selection: pick the highest-scoring feasible node from a
//! candidate set.

use fleetsched_core::{ClusterView, NodeId, ResourceVector};

use crate::scorer::score;

/// Pick the highest-scoring feasible node for `demand` among
/// `candidates`, reading each candidate's availability from `view`.
///
/// Returns `None` if no candidate scores `>= 0.0`. On ties, returns
/// the first maximal node encountered in `candidates`' iteration
/// order — deterministic iff the caller passes a deterministically
/// ordered slice (see `PlacementConfig::deterministic_candidate_order`).
pub fn best(demand: &ResourceVector, candidates: &[NodeId], view: &ClusterView) -> Option<NodeId> {
    let mut winner: Option<(NodeId, f64)> = None;

    for &id in candidates {
        let node = view
            .get(&id)
            .unwrap_or_else(|| fleetsched_core::fatal(&format!("candidate {id} missing from cluster view")));

        let candidate_score = score(demand, &node.available);
        if candidate_score < 0.0 {
            continue;
        }

        let is_new_best = match winner {
            Some((_, best_score)) => candidate_score > best_score,
            None => true,
        };
        if is_new_best {
            winner = Some((id, candidate_score));
        }
    }

    winner.map(|(id, _)| id)
}
