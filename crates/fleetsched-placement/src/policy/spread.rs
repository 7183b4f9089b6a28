//! SPREAD: each demand prefers a fresh node, falling back to reuse.

use fleetsched_core::{fatal, ClusterView, NodeId, ResourceManager, ResourceVector};

use crate::coordinator::Coordinator;
use crate::selector::best;

/// Place each demand (already in traversal order), preferring an
/// unused node and falling back to a previously selected one.
///
/// Tentatively acquires every placement through `manager` so later
/// demands in the same call see reduced availability on already-used
/// nodes, then releases everything — successful or not — before
/// returning.
pub fn spread<M: ResourceManager>(
    demands: &[ResourceVector],
    candidates: &[NodeId],
    view: &mut ClusterView,
    manager: &M,
) -> Option<Vec<NodeId>> {
    let mut unused: Vec<NodeId> = candidates.to_vec();
    let mut selected: Vec<NodeId> = Vec::new();
    let mut assignments = Vec::with_capacity(demands.len());
    let mut coordinator = Coordinator::new(manager);
    let mut ok = true;

    for demand in demands {
        let chosen = if let Some(node) = best(demand, &unused, view) {
            unused.retain(|&id| id != node);
            selected.push(node);
            Some(node)
        } else {
            best(demand, &selected, view)
        };

        let Some(node) = chosen else {
            ok = false;
            break;
        };

        if !coordinator.try_acquire(node, demand, view) {
            fatal(&format!("node {node} selected by best() as feasible but manager rejected the acquire"));
        }
        assignments.push(node);
    }

    coordinator.release_all();
    ok.then_some(assignments)
}
