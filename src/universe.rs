//! Co-finite sets [`Universe`].

use crate::prelude::*;

/// The complement of a finite set within an implicit, unbounded universal set.
///
/// A [`Universe`] stores only the finite set of elements it excludes, its *diff*. Every operation
/// is computed on the diff alone, so the cost of "everything except…" algebra is proportional to
/// what was excluded, never to the universe.
///
/// Operations mixing a universe with a finite [`Set`] and operations between two universes are
/// exposed as separately named methods, since their results differ in kind: some are co-finite,
/// others finite.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Universe<T> {
    /// The elements excluded from the universe.
    diff: Set<T>,
}

impl<T> Default for Universe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Universe<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.diff.is_empty() {
            f.write_str("Universe")
        } else {
            write!(f, "Universe - {:?}", self.diff)
        }
    }
}

impl<T: Display> Display for Universe<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.diff.is_empty() {
            f.write_str("Universe")
        } else {
            write!(f, "Universe - {}", self.diff)
        }
    }
}

/// A co-finite set is never equal to a finite one.
impl<T> PartialEq<Set<T>> for Universe<T> {
    fn eq(&self, _: &Set<T>) -> bool {
        false
    }
}

impl<T> Universe<T> {
    /// The whole universe.
    #[must_use]
    pub const fn new() -> Self {
        Self { diff: Set::empty() }
    }

    /// The universe minus a finite set.
    #[must_use]
    pub const fn from_diff(diff: Set<T>) -> Self {
        Self { diff }
    }

    /// The finite set of excluded elements.
    #[must_use]
    pub const fn diff(&self) -> &Set<T> {
        &self.diff
    }

    /// The complement of the universe, as a finite set.
    #[must_use]
    pub fn into_complement(self) -> Set<T> {
        self.diff
    }
}

impl<T: Element> Universe<T> {
    /// Membership relation ∈.
    pub fn contains<Q: Ord + ?Sized>(&self, x: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        !self.diff.contains(x)
    }

    /// Widens the universe to include an element. Returns whether it was previously excluded.
    pub fn add<Q: Ord + ?Sized>(&mut self, x: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.diff.remove(x)
    }

    /// In-place union with a finite set.
    pub fn update(&mut self, set: &Set<T>) {
        self.diff = self.diff.difference(set);
    }

    /// The complement of the universe, as a finite set.
    #[must_use]
    pub fn complement(&self) -> Set<T> {
        self.diff.clone()
    }

    /// Difference with a finite set, which is excluded on top of the diff.
    #[must_use]
    pub fn difference(&self, set: &Set<T>) -> Self {
        Self::from_diff(self.diff.union(set))
    }

    /// Difference between universes. What survives is what the other one excludes and this one
    /// does not.
    #[must_use]
    pub fn difference_universe(&self, other: &Self) -> Set<T> {
        other.diff.difference(&self.diff)
    }

    /// Intersection with a finite set.
    #[must_use]
    pub fn intersect(&self, set: &Set<T>) -> Set<T> {
        set.difference(&self.diff)
    }

    /// Intersection between universes.
    #[must_use]
    pub fn intersect_universe(&self, other: &Self) -> Self {
        Self::from_diff(self.diff.union(&other.diff))
    }

    /// Union with a finite set.
    #[must_use]
    pub fn union(&self, set: &Set<T>) -> Self {
        Self::from_diff(self.diff.difference(set))
    }

    /// Union between universes. Only what both exclude stays excluded.
    #[must_use]
    pub fn union_universe(&self, other: &Self) -> Self {
        Self::from_diff(self.diff.intersect(&other.diff))
    }

    /// Symmetric difference with a finite set.
    #[must_use]
    pub fn symmetric_difference(&self, set: &Set<T>) -> Self {
        self.difference(set).union(&set.difference_universe(self))
    }

    /// Symmetric difference between universes.
    #[must_use]
    pub fn symmetric_difference_universe(&self, other: &Self) -> Set<T> {
        self.difference_universe(other)
            .union(&other.difference_universe(self))
    }

    /// Subset relation ⊆ between universes.
    #[must_use]
    pub fn issubset(&self, other: &Self) -> bool {
        self.diff.issuperset(&other.diff, false)
    }

    /// Superset relation ⊇ between universes.
    #[must_use]
    pub fn issuperset(&self, other: &Self) -> bool {
        self.diff.issubset(&other.diff, false)
    }

    /// A universe is never contained in a finite set.
    #[must_use]
    pub fn issubset_set(&self, _: &Set<T>) -> bool {
        false
    }

    /// Whether a finite set lies within the universe.
    #[must_use]
    pub fn issuperset_set(&self, set: &Set<T>) -> bool {
        self.diff.isdisjoint([set])
    }
}
