//! Utility algorithms shared by sets and relations.

use crate::prelude::*;
use bitvec::prelude::*;

/// Every subset of a slice, each listed in the slice's order.
///
/// The first element is peeled off, and each subset of the remaining tail is output twice: once
/// as is, once with the element put back in front. Each subset thus appears exactly once.
pub(crate) fn powergen<T: Clone>(slice: &[T]) -> Vec<Vec<T>> {
    let Some((head, rest)) = slice.split_first() else {
        return vec![Vec::new()];
    };

    let tail = powergen(rest);
    let mut subsets = Vec::with_capacity(2 * tail.len());
    for subset in tail {
        let mut with_head = Vec::with_capacity(subset.len() + 1);
        with_head.push(head.clone());
        with_head.extend_from_slice(&subset);

        subsets.push(subset);
        subsets.push(with_head);
    }

    subsets
}

/// A relation on its carrier, stored as an n × n bit matrix over the carrier's canonical indices.
///
/// ## Invariants
///
/// `bits` has exactly `len * len` entries.
pub(crate) struct Matrix {
    /// Cardinality of the carrier.
    len: usize,
    /// The entry at `i * len + j` is set iff the i-th element relates to the j-th.
    bits: BitVec,
}

impl Matrix {
    /// Builds the matrix for a relation.
    pub fn new<T: Element>(relation: &Relation<T>) -> Self {
        let carrier = relation.carrier();
        let len = carrier.card();
        let mut bits = bitvec![0; len * len];

        for (a, b) in relation {
            // Both components always lie in the carrier.
            if let (Some(i), Some(j)) = (carrier.position(a), carrier.position(b)) {
                bits.set(i * len + j, true);
            }
        }

        Self { len, bits }
    }

    /// Whether the i-th element relates to the j-th.
    pub fn get(&self, i: usize, j: usize) -> bool {
        debug_assert!(i < self.len && j < self.len);
        self.bits[i * self.len + j]
    }

    /// Whether every two elements relate one way or the other.
    pub fn connex(&self) -> bool {
        (0..self.len).all(|i| (i..self.len).all(|j| self.get(i, j) || self.get(j, i)))
    }
}
