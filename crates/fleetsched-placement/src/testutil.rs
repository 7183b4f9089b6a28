//! In-memory [`ResourceManager`] for exercising the policy engine
//! without a real cluster. Test tooling only — not part of the
//! crate's public API.

use std::collections::HashMap;
use std::sync::Mutex;

use fleetsched_core::{ClusterView, NodeId, NodeResources, PredefinedResource, ResourceManager, ResourceVector};

/// A `HashMap`-backed [`ResourceManager`], guarded by a mutex so
/// `try_acquire`/`release` can mutate through a shared `&self` —
/// mirroring how a real manager is shared across concurrent callers,
/// even though a single `Schedule` call never contends with itself.
pub struct InMemoryResourceManager {
    nodes: Mutex<HashMap<NodeId, NodeResources>>,
}

impl InMemoryResourceManager {
    pub fn new(nodes: impl IntoIterator<Item = (NodeId, NodeResources)>) -> Self {
        Self { nodes: Mutex::new(nodes.into_iter().collect()) }
    }
}

impl ResourceManager for InMemoryResourceManager {
    fn cluster_resources(&self) -> ClusterView {
        self.nodes.lock().unwrap().clone()
    }

    fn try_acquire(&self, node: NodeId, demand: &ResourceVector) -> bool {
        let mut nodes = self.nodes.lock().unwrap();
        let Some(entry) = nodes.get_mut(&node) else { return false };
        if !entry.available.covers(demand) {
            return false;
        }
        entry.available = entry.available.clone() - demand.clone();
        true
    }

    fn release(&self, node: NodeId, demand: &ResourceVector) -> bool {
        let mut nodes = self.nodes.lock().unwrap();
        let Some(entry) = nodes.get_mut(&node) else { return false };
        let candidate = entry.available.clone() + demand.clone();
        for dim in PredefinedResource::ALL {
            if candidate.get(dim) > entry.total.get(dim) {
                return false;
            }
        }
        entry.available = candidate;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetsched_core::FixedPoint;

    fn node(units: u64) -> NodeResources {
        let v = ResourceVector::zero().with(PredefinedResource::Cpu, FixedPoint::from_units(units));
        NodeResources::new(v.clone(), v)
    }

    #[test]
    fn try_acquire_rejects_when_insufficient() {
        let manager = InMemoryResourceManager::new([(NodeId::new(1), node(1))]);
        let demand = ResourceVector::zero().with(PredefinedResource::Cpu, FixedPoint::from_units(5));
        assert!(!manager.try_acquire(NodeId::new(1), &demand));
    }

    #[test]
    fn release_rejects_when_it_would_exceed_total() {
        let manager = InMemoryResourceManager::new([(NodeId::new(1), node(4))]);
        let demand = ResourceVector::zero().with(PredefinedResource::Cpu, FixedPoint::from_units(1));
        assert!(!manager.release(NodeId::new(1), &demand));
    }

    #[test]
    fn acquire_then_release_round_trips() {
        let manager = InMemoryResourceManager::new([(NodeId::new(1), node(4))]);
        let demand = ResourceVector::zero().with(PredefinedResource::Cpu, FixedPoint::from_units(2));
        assert!(manager.try_acquire(NodeId::new(1), &demand));
        assert!(manager.release(NodeId::new(1), &demand));
        assert_eq!(
            manager.cluster_resources()[&NodeId::new(1)].available.get(PredefinedResource::Cpu),
            FixedPoint::from_units(4)
        );
    }
}
