//! PACK: greedy co-location — fill one node, then the next.

use fleetsched_core::{fatal, ClusterView, NodeId, ResourceManager, ResourceVector};

use crate::coordinator::Coordinator;
use crate::selector::best;

/// Place each demand (already in traversal order) by repeatedly
/// picking a node for the first unplaced demand, then packing as many
/// of the remaining demands onto that same node as will fit, before
/// moving to the next node.
pub fn pack<M: ResourceManager>(
    demands: &[ResourceVector],
    candidates: &[NodeId],
    view: &mut ClusterView,
    manager: &M,
) -> Option<Vec<NodeId>> {
    let mut work: Vec<(usize, ResourceVector)> = demands.iter().cloned().enumerate().collect();
    let mut assignments: Vec<Option<NodeId>> = vec![None; demands.len()];
    let mut remaining_candidates: Vec<NodeId> = candidates.to_vec();
    let mut coordinator = Coordinator::new(manager);
    let mut ok = true;

    while !work.is_empty() {
        let (head_index, head_demand) = work[0].clone();

        let Some(node) = best(&head_demand, &remaining_candidates, view) else {
            ok = false;
            break;
        };

        if !coordinator.try_acquire(node, &head_demand, view) {
            fatal(&format!("node {node} selected by best() as feasible but manager rejected the acquire"));
        }
        assignments[head_index] = Some(node);
        work.remove(0);

        let mut i = 0;
        while i < work.len() {
            let (other_index, other_demand) = work[i].clone();
            if coordinator.try_acquire(node, &other_demand, view) {
                assignments[other_index] = Some(node);
                work.remove(i);
            } else {
                i += 1;
            }
        }

        remaining_candidates.retain(|&id| id != node);
    }

    coordinator.release_all();

    if !ok {
        return None;
    }
    Some(
        assignments
            .into_iter()
            .map(|a| a.expect("work list empties only once every index is assigned"))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::InMemoryResourceManager;
    use fleetsched_core::{FixedPoint, NodeResources, PredefinedResource};

    fn cpu_node(units: u64) -> NodeResources {
        let v = ResourceVector::zero().with(PredefinedResource::Cpu, FixedPoint::from_units(units));
        NodeResources::new(v.clone(), v)
    }

    fn cpu_demand(units: u64) -> ResourceVector {
        ResourceVector::zero().with(PredefinedResource::Cpu, FixedPoint::from_units(units))
    }

    #[test]
    fn s5_packs_two_onto_one_node_and_spills_to_another() {
        let manager = InMemoryResourceManager::new([(NodeId::new(1), cpu_node(4)), (NodeId::new(2), cpu_node(4))]);
        let mut view = manager.cluster_resources();
        let candidates = vec![NodeId::new(1), NodeId::new(2)];
        let demands = vec![cpu_demand(3), cpu_demand(3), cpu_demand(1)];

        let result = pack(&demands, &candidates, &mut view, &manager).unwrap();
        assert_eq!(result.len(), 3);
        // Exactly one pair of demands shares a node.
        let shares_a_node = result[0] == result[1] || result[0] == result[2] || result[1] == result[2];
        assert!(shares_a_node);
        assert!(!(result[0] == result[1] && result[1] == result[2]));
    }

    #[test]
    fn fails_when_capacity_is_exhausted() {
        let manager = InMemoryResourceManager::new([(NodeId::new(1), cpu_node(2))]);
        let mut view = manager.cluster_resources();
        let candidates = vec![NodeId::new(1)];
        let demands = vec![cpu_demand(2), cpu_demand(2)];

        assert!(pack(&demands, &candidates, &mut view, &manager).is_none());
    }

    #[test]
    fn manager_state_restored_on_any_outcome() {
        let manager = InMemoryResourceManager::new([(NodeId::new(1), cpu_node(4))]);
        let before = manager.cluster_resources();
        let mut view = manager.cluster_resources();
        let candidates = vec![NodeId::new(1)];
        let demands = vec![cpu_demand(1), cpu_demand(1)];

        pack(&demands, &candidates, &mut view, &manager).unwrap();
        assert_eq!(manager.cluster_resources(), before);
    }

    #[test]
    fn empty_bundle_succeeds_trivially() {
        let manager = InMemoryResourceManager::new(Vec::<(NodeId, NodeResources)>::new());
        let mut view = manager.cluster_resources();
        let result = pack(&[], &[], &mut view, &manager).unwrap();
        assert!(result.is_empty());
    }
}
