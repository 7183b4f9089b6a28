//! The external resource manager contract consumed by the core.
//!
//! The manager is an external collaborator (see the crate's module
//! documentation): it holds the authoritative per-node resource view.
//! The core only ever reads a snapshot of it and, for PACK/SPREAD,
//! drives tentative acquire/release through this trait.

use crate::cluster::ClusterView;
use crate::ids::NodeId;
use crate::resource::ResourceVector;

/// Operations the placement core needs from the cluster resource
/// manager. Implemented in production by a thin client over the real
/// cluster manager; implemented in tests by an in-memory map.
pub trait ResourceManager {
    /// A snapshot (or live view, if the manager guarantees read
    /// stability for the duration of a call) of every node's
    /// resources.
    fn cluster_resources(&self) -> ClusterView;

    /// Attempt to decrement `node`'s available resources by `demand`.
    /// Returns whether the decrement succeeded.
    fn try_acquire(&self, node: NodeId, demand: &ResourceVector) -> bool;

    /// Increment `node`'s available resources by `demand`, undoing a
    /// prior successful [`Self::try_acquire`]. Returns whether the
    /// increment was valid — `false` here (the manager refusing to
    /// release what it granted) is a fatal invariant violation in the
    /// caller, not a retryable condition.
    fn release(&self, node: NodeId, demand: &ResourceVector) -> bool;
}
