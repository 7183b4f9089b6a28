//! Tentative allocation coordinator.
//!
//! PACK and SPREAD consult per-node *available* capacity while
//! iterating a bundle, and need to see the effect of demands already
//! placed earlier in the same call. The coordinator drives
//! `try_acquire`/`release` against the external [`ResourceManager`]
//! and keeps a local working copy of the cluster view in lockstep, so
//! the scorer always sees capacity net of in-flight placements.
//!
//! Every successful `try_acquire` is released on every exit path —
//! success, `FAILED`, or an internal abort — via an explicit
//! [`Coordinator::release_all`] call at each return site. A
//! `Drop`-based guard was considered and rejected: `release` can
//! itself fail, and reporting a fatal invariant violation from inside
//! `Drop` during unwinding is surprising; an explicit call keeps the
//! fatal path visible at the call site.

use fleetsched_core::{fatal, ClusterView, NodeId, ResourceManager, ResourceVector};
use tracing::debug;

/// Accumulates tentative acquisitions for a single `Schedule` call.
pub struct Coordinator<'m, M: ResourceManager> {
    manager: &'m M,
    acquired: Vec<(NodeId, ResourceVector)>,
}

impl<'m, M: ResourceManager> Coordinator<'m, M> {
    pub fn new(manager: &'m M) -> Self {
        Self { manager, acquired: Vec::new() }
    }

    /// Tentatively acquire `demand` on `node`, updating `view`'s
    /// available resources in lockstep on success so subsequent
    /// scoring in this call sees the reduced capacity.
    ///
    /// `node` must not be nil — the coordinator's release-before-return
    /// contract only makes sense for a real, manager-known node.
    pub fn try_acquire(&mut self, node: NodeId, demand: &ResourceVector, view: &mut ClusterView) -> bool {
        debug_assert!(!node.is_nil(), "tentative acquire on nil node");

        if !self.manager.try_acquire(node, demand) {
            debug!(%node, "tentative acquire rejected by manager");
            return false;
        }

        let entry = view
            .get_mut(&node)
            .unwrap_or_else(|| fatal(&format!("acquired node {node} missing from working view")));
        entry.available = entry.available.clone() - demand.clone();

        self.acquired.push((node, demand.clone()));
        debug!(%node, "tentative acquire committed");
        true
    }

    /// Release every tentative acquisition made through this
    /// coordinator. Called on every exit path of the owning policy
    /// function, success or failure.
    ///
    /// A `release` the manager refuses is a fatal invariant violation:
    /// it granted the acquire and now disagrees about undoing it.
    pub fn release_all(self) {
        for (node, demand) in self.acquired {
            if !self.manager.release(node, &demand) {
                fatal(&format!("manager refused to release a tentative acquire on {node}"));
            }
            debug!(%node, "tentative acquire released");
        }
    }
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

    #[test]
    fn acquire_updates_working_view() {
        let manager = InMemoryResourceManager::new([(NodeId::new(1), cpu_node(4))]);
        let mut view = manager.cluster_resources();
        let demand = ResourceVector::zero().with(PredefinedResource::Cpu, FixedPoint::from_units(1));

        let mut coordinator = Coordinator::new(&manager);
        assert!(coordinator.try_acquire(NodeId::new(1), &demand, &mut view));
        assert_eq!(view[&NodeId::new(1)].available.get(PredefinedResource::Cpu), FixedPoint::from_units(3));

        coordinator.release_all();
    }

    #[test]
    fn release_all_restores_manager_state() {
        let manager = InMemoryResourceManager::new([(NodeId::new(1), cpu_node(4))]);
        let mut view = manager.cluster_resources();
        let demand = ResourceVector::zero().with(PredefinedResource::Cpu, FixedPoint::from_units(2));

        let mut coordinator = Coordinator::new(&manager);
        coordinator.try_acquire(NodeId::new(1), &demand, &mut view);
        coordinator.release_all();

        let after = manager.cluster_resources();
        assert_eq!(after[&NodeId::new(1)].available.get(PredefinedResource::Cpu), FixedPoint::from_units(4));
    }

    #[test]
    fn failed_acquire_does_not_mutate_view() {
        let manager = InMemoryResourceManager::new([(NodeId::new(1), cpu_node(1))]);
        let mut view = manager.cluster_resources();
        let demand = ResourceVector::zero().with(PredefinedResource::Cpu, FixedPoint::from_units(5));

        let mut coordinator = Coordinator::new(&manager);
        assert!(!coordinator.try_acquire(NodeId::new(1), &demand, &mut view));
        assert_eq!(view[&NodeId::new(1)].available.get(PredefinedResource::Cpu), FixedPoint::from_units(1));
        coordinator.release_all();
    }
}
