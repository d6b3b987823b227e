//! Partitions [`Partition`] and their equivalence relations.

use crate::prelude::*;

/// A set of blocks, meant to be pairwise disjoint and to cover some carrier.
///
/// Partitions of a carrier correspond exactly to equivalence relations on it. The blocks are
/// the classes of the relation, and the relation holds each block crossed with itself.
///
/// ## Invariants
///
/// The blocks are only checked to actually partition the carrier when taking a
/// [quotient](Partition::quotient).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct Partition<T>(Set<Set<T>>);

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self(Set::empty())
    }
}

impl<T: Debug> Debug for Partition<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.0)
    }
}

impl<T: Display> Display for Partition<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl<T> IntoIterator for Partition<T> {
    type Item = Set<T>;
    type IntoIter = std::vec::IntoIter<Set<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Partition<T> {
    type Item = &'a Set<T>;
    type IntoIter = std::slice::Iter<'a, Set<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> FromIterator<Set<T>> for Partition<T> {
    fn from_iter<I: IntoIterator<Item = Set<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: PartialEq> PartialEq<Set<Set<T>>> for Partition<T> {
    fn eq(&self, other: &Set<Set<T>>) -> bool {
        self.0 == *other
    }
}

/// Only equivalence relations have a partition.
impl<T: Element> TryFrom<&Relation<T>> for Partition<T> {
    type Error = Error;

    fn try_from(relation: &Relation<T>) -> Result<Self> {
        Self::from_relation(relation)
    }
}

impl<T> Partition<T> {
    /// The blocks of the partition.
    #[must_use]
    pub const fn blocks(&self) -> &Set<Set<T>> {
        &self.0
    }

    /// Number of blocks.
    #[must_use]
    pub fn card(&self) -> usize {
        self.0.card()
    }

    /// Iterate over the blocks in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, Set<T>> {
        self.0.iter()
    }
}

impl<T: Element> Partition<T> {
    /// Builds a partition out of any sequence of blocks. Nothing is checked.
    pub fn new<I: IntoIterator<Item = Set<T>>>(blocks: I) -> Self {
        Self(Set::new(blocks))
    }

    /// The partition given by the classes of an equivalence relation.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::NotEquivalence`] if the relation is not reflexive, symmetric and
    /// transitive.
    pub fn from_relation(relation: &Relation<T>) -> Result<Self> {
        if relation.is_equivalence() {
            Ok(Self(relation.equivalence_classes()))
        } else {
            debug!(pairs = relation.len(), "relation is not an equivalence");
            Err(Error::NotEquivalence)
        }
    }

    /// The union of the blocks.
    #[must_use]
    pub fn carrier(&self) -> Set<T> {
        Set::empty().union_all(&self.0)
    }

    /// Whether the blocks are nonempty, pairwise disjoint, and cover exactly the given carrier.
    #[must_use]
    pub fn partitions(&self, carrier: &Set<T>) -> bool {
        let total: usize = self.iter().map(Set::card).sum();
        self.iter().all(|block| !block.is_empty())
            && total == carrier.card()
            && self.carrier() == *carrier
    }

    /// The equivalence relation whose classes are the blocks, i.e. the union of every B × B.
    #[must_use]
    pub fn equivalence_relation(&self) -> Relation<T> {
        self.iter()
            .flat_map(|block| block.product(block))
            .collect()
    }

    /// The quotient of a carrier by this partition, that is, its equivalence relation.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::InvalidPartition`] unless the blocks partition the carrier.
    pub fn quotient(&self, carrier: &Set<T>) -> Result<Relation<T>> {
        if self.partitions(carrier) {
            Ok(self.equivalence_relation())
        } else {
            debug!(
                blocks = self.card(),
                card = carrier.card(),
                "blocks do not partition the carrier"
            );
            Err(Error::InvalidPartition)
        }
    }
}
