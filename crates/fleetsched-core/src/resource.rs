//! Resource vectors: the predefined + custom dimension model shared by
//! demands, node totals, and node availability.

use std::collections::HashMap;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::fixed_point::FixedPoint;

/// Number of canonically-ordered predefined resource dimensions.
///
/// A compile-time constant: every [`ResourceVector`] carries exactly
/// this many predefined entries, which is what lets the scorer treat
/// "predefined length mismatch" as an assertion rather than a runtime
/// branch (see [`crate::resource::PredefinedResource`]).
pub const PREDEFINED_MAX: usize = 4;

/// The canonically-ordered predefined resource dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredefinedResource {
    Cpu,
    Mem,
    ObjectStoreMem,
    Gpu,
}

impl PredefinedResource {
    /// All predefined dimensions, in canonical order.
    pub const ALL: [PredefinedResource; PREDEFINED_MAX] = [
        PredefinedResource::Cpu,
        PredefinedResource::Mem,
        PredefinedResource::ObjectStoreMem,
        PredefinedResource::Gpu,
    ];

    /// This dimension's fixed slot in the predefined array.
    pub const fn index(self) -> usize {
        match self {
            PredefinedResource::Cpu => 0,
            PredefinedResource::Mem => 1,
            PredefinedResource::ObjectStoreMem => 2,
            PredefinedResource::Gpu => 3,
        }
    }
}

/// Opaque identifier for a custom (non-predefined) resource dimension.
pub type CustomResourceId = u32;

/// A vector of resource quantities over predefined and custom dimensions.
///
/// Used both as a node's total/available capacity and as a bundle
/// demand — the type is shared because the arithmetic (addition,
/// componentwise comparison) is identical in both roles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceVector {
    predefined: [FixedPoint; PREDEFINED_MAX],
    custom: HashMap<CustomResourceId, FixedPoint>,
}

impl ResourceVector {
    /// The zero vector: no predefined or custom demand.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build a vector from an explicit predefined array and custom map.
    pub fn new(predefined: [FixedPoint; PREDEFINED_MAX], custom: HashMap<CustomResourceId, FixedPoint>) -> Self {
        Self { predefined, custom }
    }

    /// Set a predefined dimension, builder-style.
    pub fn with(mut self, dim: PredefinedResource, amount: FixedPoint) -> Self {
        self.predefined[dim.index()] = amount;
        self
    }

    /// Set a custom dimension, builder-style.
    pub fn with_custom(mut self, id: CustomResourceId, amount: FixedPoint) -> Self {
        self.custom.insert(id, amount);
        self
    }

    /// The quantity at a predefined dimension.
    pub fn get(&self, dim: PredefinedResource) -> FixedPoint {
        self.predefined[dim.index()]
    }

    /// The quantity at a custom dimension; missing key is zero.
    pub fn get_custom(&self, id: CustomResourceId) -> FixedPoint {
        self.custom.get(&id).copied().unwrap_or(FixedPoint::ZERO)
    }

    /// The full predefined slice, in canonical order.
    pub fn predefined(&self) -> &[FixedPoint; PREDEFINED_MAX] {
        &self.predefined
    }

    /// Custom dimension ids present in this vector, in ascending
    /// numeric order — the order the demand orderer and the scorer's
    /// comparator must both use so their decisions are deterministic.
    pub fn custom_keys_sorted(&self) -> Vec<CustomResourceId> {
        let mut keys: Vec<CustomResourceId> = self.custom.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Whether `self` (read as an *available* vector) covers `demand`:
    /// every predefined dimension and every custom key present in
    /// `demand` is available in at least the demanded amount.
    pub fn covers(&self, demand: &ResourceVector) -> bool {
        for dim in PredefinedResource::ALL {
            if self.get(dim) < demand.get(dim) {
                return false;
            }
        }
        for key in demand.custom.keys() {
            if self.get_custom(*key) < demand.get_custom(*key) {
                return false;
            }
        }
        true
    }
}

impl Add for ResourceVector {
    type Output = ResourceVector;

    fn add(self, rhs: ResourceVector) -> ResourceVector {
        let mut predefined = self.predefined;
        for (i, rhs_val) in rhs.predefined.into_iter().enumerate() {
            predefined[i] = predefined[i] + rhs_val;
        }
        let mut custom = self.custom;
        for (k, v) in rhs.custom {
            custom.entry(k).and_modify(|e| *e = *e + v).or_insert(v);
        }
        ResourceVector { predefined, custom }
    }
}

impl Sub for ResourceVector {
    type Output = ResourceVector;

    /// Componentwise subtraction, used when a tentative acquire
    /// commits a demand against a node's available resources. Fatal
    /// (via [`FixedPoint`]'s subtraction) if any dimension would go
    /// negative — the caller is expected to have already checked
    /// `self.covers(&rhs)`.
    fn sub(self, rhs: ResourceVector) -> ResourceVector {
        let mut predefined = self.predefined;
        for (i, rhs_val) in rhs.predefined.into_iter().enumerate() {
            predefined[i] = predefined[i] - rhs_val;
        }
        let mut custom = self.custom;
        for (k, v) in rhs.custom {
            let current = custom.get(&k).copied().unwrap_or(FixedPoint::ZERO);
            custom.insert(k, current - v);
        }
        ResourceVector { predefined, custom }
    }
}
