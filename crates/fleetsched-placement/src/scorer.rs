//! Node scoring for a single demand.
//!
//! Evaluates a demand against a node's *available* resources and
//! returns the fractional remaining capacity after allocation, summed
//! across dimensions — a negative score means the node cannot fit the
//! demand at all.

use fleetsched_core::{PredefinedResource, ResourceVector};

/// Sentinel returned for a node that cannot fit the demand.
pub const INFEASIBLE: f64 = -1.0;

/// Score `demand` against `node_avail`.
///
/// Higher is better: the score is the sum, across every dimension the
/// demand names, of `(available - demand) / available` — the
/// fraction of that dimension's capacity left over after placement.
/// A dimension with zero available capacity contributes `0.0` rather
/// than dividing by zero (the demand must then be `0` there too, or
/// this function has already returned [`INFEASIBLE`]).
///
/// `FixedPoint` cannot represent a negative quantity, so "every
/// available is non-negative" holds by construction here; nothing
/// further to check.
pub fn score(demand: &ResourceVector, node_avail: &ResourceVector) -> f64 {
    debug_assert_eq!(
        demand.predefined().len(),
        node_avail.predefined().len(),
        "predefined slices must share PREDEFINED_MAX length by construction"
    );

    let mut total = 0.0;

    for dim in PredefinedResource::ALL {
        match dimension_contribution(demand.get(dim), node_avail.get(dim)) {
            Some(contribution) => total += contribution,
            None => return INFEASIBLE,
        }
    }

    for key in demand.custom_keys_sorted() {
        match dimension_contribution(demand.get_custom(key), node_avail.get_custom(key)) {
            Some(contribution) => total += contribution,
            None => return INFEASIBLE,
        }
    }

    total
}

/// `None` means infeasible; `Some(ratio)` is this dimension's
/// contribution to the total score.
fn dimension_contribution(
    required: fleetsched_core::FixedPoint,
    available: fleetsched_core::FixedPoint,
) -> Option<f64> {
    if required > available {
        return None;
    }
    if available.is_zero() {
        return Some(0.0);
    }
    let remaining = available.checked_sub(required).expect("required <= available checked above");
    Some(remaining.raw() as f64 / available.raw() as f64)
}
