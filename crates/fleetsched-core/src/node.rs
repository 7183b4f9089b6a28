//! Per-node resource view: total capacity and currently available capacity.

use serde::{Deserialize, Serialize};

use crate::resource::{PredefinedResource, ResourceVector};

/// A node's total and currently available resource capacity.
///
/// Invariant: `0 ≤ available ≤ total`, componentwise. The lower bound
/// is enforced by [`FixedPoint`](crate::FixedPoint) itself — it cannot
/// represent a negative quantity — so the only invariant this type
/// must actually check is the upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeResources {
    pub total: ResourceVector,
    pub available: ResourceVector,
}

impl NodeResources {
    /// Construct a node view, asserting `available ≤ total`.
    ///
    /// A violation here means the resource manager handed the
    /// scheduler a corrupt snapshot — fatal, not a `FAILED` result.
    pub fn new(total: ResourceVector, available: ResourceVector) -> Self {
        for dim in PredefinedResource::ALL {
            if available.get(dim) > total.get(dim) {
                crate::error::fatal(&format!(
                    "node available exceeds total at {dim:?}: {} > {}",
                    available.get(dim),
                    total.get(dim)
                ));
            }
        }
        Self { total, available }
    }

    /// Whether `available` covers `demand` in every dimension the
    /// demand names.
    pub fn covers(&self, demand: &ResourceVector) -> bool {
        self.available.covers(demand)
    }
}
