//! The cluster-wide view of per-node resources.

use std::collections::HashMap;

use crate::ids::NodeId;
use crate::node::NodeResources;

/// A snapshot of `NodeId → NodeResources` as observed by the core for
/// the duration of a single `Schedule` call.
///
/// Owned by the external resource manager; the core only ever holds a
/// borrowed reference to one of these, never a copy that could drift
/// from the manager's authoritative state mid-call.
pub type ClusterView = HashMap<NodeId, NodeResources>;

/// Node ids surviving an optional caller-provided filter.
///
/// `filter` of `None` means every node in `view` is a candidate.
/// Iteration order follows the map's own (unspecified) order;
/// callers that need reproducible traversal should sort the result —
/// see `PlacementConfig::deterministic_candidate_order` in
/// `fleetsched-placement`.
pub fn candidate_nodes(view: &ClusterView, filter: Option<&dyn Fn(NodeId) -> bool>) -> Vec<NodeId> {
    view.keys().copied().filter(|id| filter.is_none_or(|f| f(*id))).collect()
}
