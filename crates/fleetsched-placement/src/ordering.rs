//! Demand ordering: reorder a bundle by scarcity priority before
//! placement, then invert the permutation to restore the caller's
//! original order on the way out.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use fleetsched_core::{Bundle, CustomResourceId, PredefinedResource, ResourceVector};

/// Traversal order for `bundle`: a permutation of `0..bundle.len()`
/// such that `bundle[permutation[0]]` should be placed first.
///
/// Demands are compared lexicographically: GPU demand, then custom
/// resources (by ascending numeric key, over the union of keys either
/// demand names), then `OBJECT_STORE_MEM`, then `MEM`, then `CPU` —
/// at each level, the demand wanting *more* of that resource ranks
/// first. Ties at every level keep the demands' original relative
/// order, since [`slice::sort_by`] is a stable sort.
pub fn order(bundle: &Bundle) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..bundle.len()).collect();
    indices.sort_by(|&i, &j| compare_priority(&bundle[i], &bundle[j]));
    indices
}

/// Invert a permutation produced by [`order`].
///
/// If `permutation[traversal_pos] == original_index`, then
/// `invert(permutation)[original_index] == traversal_pos` — the
/// position to look up in traversal-ordered results to recover the
/// value for `original_index`.
pub fn invert(permutation: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0usize; permutation.len()];
    for (traversal_pos, &original_index) in permutation.iter().enumerate() {
        inverse[original_index] = traversal_pos;
    }
    inverse
}

fn compare_priority(a: &ResourceVector, b: &ResourceVector) -> Ordering {
    // Descending "who wants more" at every level: reverse operand order
    // so sort_by's ascending sort yields highest-priority-first.
    let ord = b.get(PredefinedResource::Gpu).cmp(&a.get(PredefinedResource::Gpu));
    if ord != Ordering::Equal {
        return ord;
    }

    let keys: BTreeSet<CustomResourceId> = a.custom_keys_sorted().into_iter().chain(b.custom_keys_sorted()).collect();
    for key in keys {
        let ord = b.get_custom(key).cmp(&a.get_custom(key));
        if ord != Ordering::Equal {
            return ord;
        }
    }

    for dim in [PredefinedResource::ObjectStoreMem, PredefinedResource::Mem, PredefinedResource::Cpu] {
        let ord = b.get(dim).cmp(&a.get(dim));
        if ord != Ordering::Equal {
            return ord;
        }
    }

    Ordering::Equal
}
