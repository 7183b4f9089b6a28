//! Bundles, placement policies, and the scheduling result.

use serde::{Deserialize, Serialize};

use crate::ids::NodeId;
use crate::resource::ResourceVector;

/// An ordered list of resource demands to place atomically.
///
/// Ordering is caller-significant: [`SchedulingResult::assignments`] is
/// always aligned positionally with this, the *original* input order,
/// regardless of any internal traversal reordering the policy applies.
pub type Bundle = Vec<ResourceVector>;

/// Placement strategy for a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Greedy co-location: fill one node, then the next.
    Pack,
    /// All demands must land on a single node, or the call fails.
    StrictPack,
    /// Each demand prefers a fresh node, falling back to reuse.
    Spread,
    /// Each demand must land on a distinct node, or the call fails.
    StrictSpread,
}

/// Terminal outcome of a `Schedule` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulingStatus {
    /// A full assignment was produced.
    Success,
    /// Feasibility was plausible but current availability did not
    /// permit placement. Transient — the caller may retry.
    Failed,
    /// Structurally impossible regardless of current load.
    Infeasible,
}

/// The result of a `Schedule` call.
///
/// On [`SchedulingStatus::Success`], `assignments[i]` is the node
/// assigned to `bundle[i]` in the original input order. Otherwise
/// `assignments` is empty, regardless of any partial progress made
/// internally before the call settled on a non-success status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    pub status: SchedulingStatus,
    pub assignments: Vec<NodeId>,
}

impl SchedulingResult {
    pub fn success(assignments: Vec<NodeId>) -> Self {
        Self { status: SchedulingStatus::Success, assignments }
    }

    pub fn failed() -> Self {
        Self { status: SchedulingStatus::Failed, assignments: Vec::new() }
    }

    pub fn infeasible() -> Self {
        Self { status: SchedulingStatus::Infeasible, assignments: Vec::new() }
    }

    pub fn is_success(&self) -> bool {
        self.status == SchedulingStatus::Success
    }
}
