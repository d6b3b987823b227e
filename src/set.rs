//! Finite sets [`Set`].

use crate::{prelude::*, utils};

/// A finite set of elements.
///
/// Elements are kept in their canonical order, the one given by [`Ord`], no matter the order they
/// were inserted in. Two sets compare equal exactly when they contain the same elements.
///
/// The derived [`PartialOrd`] and [`Ord`] are the lexicographic order on the sorted elements. This
/// is what makes a set of sets canonical, and it has nothing to do with inclusion: use
/// [`Set::issubset`] and [`Set::issuperset`] for that.
///
/// ## Invariants
///
/// The elements are stored in strictly increasing order. In particular, no two of them are equal.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Set<T>(Vec<T>);

// -------------------- Basic traits -------------------- //

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> AsRef<[T]> for Set<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Set<T>> for Vec<T> {
    fn from(set: Set<T>) -> Self {
        set.0
    }
}

impl<T: Element> From<Vec<T>> for Set<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::new(vec)
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Set<T> {
    fn from(array: [T; N]) -> Self {
        Self::new(array)
    }
}

impl<T: Element> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Element> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Displays a set in roster notation.
impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
            for x in iter {
                write!(f, ", {x}")?;
            }
        }
        f.write_char('}')
    }
}

/// Mutual containment between two listings of elements.
fn same_elements<T: PartialEq<U>, U>(fst: &[T], snd: &[U]) -> bool {
    fst.iter().all(|x| snd.iter().any(|y| x == y)) && snd.iter().all(|y| fst.iter().any(|x| x == y))
}

/// A set equals any listing holding the same elements, regardless of order or repetitions.
impl<T: PartialEq<U>, U> PartialEq<[U]> for Set<T> {
    fn eq(&self, other: &[U]) -> bool {
        same_elements(&self.0, other)
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Set<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        same_elements(&self.0, other)
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for Set<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        same_elements(&self.0, other)
    }
}

// -------------------- Basic methods -------------------- //

impl<T> Set<T> {
    /// The empty set Ø.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Wraps a vector into a [`Set`] without sorting or deduplicating it.
    ///
    /// ## Safety
    ///
    /// You must guarantee that `vec` is strictly increasing. Doing otherwise breaks the type
    /// invariant for [`Set`].
    #[must_use]
    pub unsafe fn from_vec_unchecked(vec: Vec<T>) -> Self {
        Self(vec)
    }

    /// Set cardinality.
    #[must_use]
    pub fn card(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The set as a slice, in canonical order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Iterate over the elements of the set in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// The least element in canonical order.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.first()
    }

    /// Keeps only the elements satisfying a predicate.
    pub fn select_mut<P: FnMut(&T) -> bool>(&mut self, pred: P) {
        self.0.retain(pred);
    }

    /// Set-builder notation {x ∈ X : P(x)}.
    #[must_use]
    pub fn select<P: FnMut(&T) -> bool>(mut self, pred: P) -> Self {
        self.select_mut(pred);
        self
    }
}

impl<T: Element> Set<T> {
    /// Builds a set out of any sequence of elements. Repeated elements are dropped.
    pub fn new<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec: Vec<T> = iter.into_iter().collect();
        vec.sort_unstable();
        vec.dedup();
        Self(vec)
    }

    /// Singleton set {x}.
    #[must_use]
    pub fn singleton(x: T) -> Self {
        Self(vec![x])
    }

    /// Binary search for an element.
    fn search<Q: Ord + ?Sized>(&self, x: &Q) -> std::result::Result<usize, usize>
    where
        T: Borrow<Q>,
    {
        self.0.binary_search_by(|el| <T as Borrow<Q>>::borrow(el).cmp(x))
    }

    /// The index of an element in canonical order.
    pub fn position<Q: Ord + ?Sized>(&self, x: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
    {
        self.search(x).ok()
    }

    /// Membership relation ∈.
    pub fn contains<Q: Ord + ?Sized>(&self, x: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.search(x).is_ok()
    }

    /// Gets the stored element equal to `x`.
    pub fn get<Q: Ord + ?Sized>(&self, x: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
    {
        self.search(x).ok().map(|i| &self.0[i])
    }

    /// In-place set insertion x ∪ {y}. Returns whether the element was new.
    pub fn add(&mut self, x: T) -> bool {
        match self.search(&x) {
            Ok(_) => false,
            Err(i) => {
                self.0.insert(i, x);
                true
            }
        }
    }

    /// In-place removal x − {y}. Returns whether the element was present.
    pub fn remove<Q: Ord + ?Sized>(&mut self, x: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        match self.search(x) {
            Ok(i) => {
                self.0.remove(i);
                true
            }
            Err(_) => false,
        }
    }

    // -------------------- Algebra -------------------- //

    /// Union x ∪ y.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.union_all([other])
    }

    /// Union of this set with every set in an iterator.
    pub fn union_all<'a, I: IntoIterator<Item = &'a Self>>(&self, sets: I) -> Self
    where
        T: 'a,
    {
        Self::new(
            self.iter()
                .cloned()
                .chain(sets.into_iter().flat_map(|set| set.iter().cloned())),
        )
    }

    /// In-place union.
    pub fn update(&mut self, other: &Self) {
        *self = self.union(other);
    }

    /// Intersection x ∩ y.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        self.intersect_all([other])
    }

    /// Intersection of this set with every set in an iterator. An empty iterator leaves the set
    /// unchanged.
    pub fn intersect_all<'a, I: IntoIterator<Item = &'a Self>>(&self, sets: I) -> Self
    where
        T: 'a,
    {
        let sets: SmallVec<&Self> = sets.into_iter().collect();
        self.clone()
            .select(|x| sets.iter().all(|set| set.contains(x)))
    }

    /// Difference x − y.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.clone().select(|x| !other.contains(x))
    }

    /// Symmetric difference x △ y = (x − y) ∪ (y − x).
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }

    /// Cartesian product x × y, as the relation of all pairs.
    #[must_use]
    pub fn product<U: Element>(&self, other: &Set<U>) -> Relation<T, U> {
        let pairs = self
            .iter()
            .flat_map(|x| other.iter().map(move |y| (x.clone(), y.clone())))
            .collect();

        // Safety: iterating two sorted sets in nested order yields lexicographically increasing
        // pairs.
        Relation::from_set(unsafe { Set::from_vec_unchecked(pairs) })
    }

    /// The complement of the set, as a [`Universe`].
    #[must_use]
    pub fn complement(&self) -> Universe<T> {
        Universe::from_diff(self.clone())
    }

    /// Difference with a co-finite set. Only the elements excluded from the universe survive.
    #[must_use]
    pub fn difference_universe(&self, universe: &Universe<T>) -> Self {
        self.intersect(universe.diff())
    }

    // -------------------- Relations -------------------- //

    /// Subset relation ⊆, or strict subset ⊂ when `proper` is set.
    #[must_use]
    pub fn issubset(&self, other: &Self, proper: bool) -> bool {
        other.issuperset(self, proper)
    }

    /// Superset relation ⊇, or strict superset ⊃ when `proper` is set.
    ///
    /// Cardinalities are compared first, so that most failing checks return without scanning.
    #[must_use]
    pub fn issuperset(&self, other: &Self, proper: bool) -> bool {
        let fits = if proper {
            self.card() > other.card()
        } else {
            self.card() >= other.card()
        };

        fits && other.iter().all(|x| self.contains(x))
    }

    /// Whether the set shares no element with the intersection of every given set.
    pub fn isdisjoint<'a, I: IntoIterator<Item = &'a Self>>(&self, sets: I) -> bool
    where
        T: 'a,
    {
        self.intersect_all(sets).is_empty()
    }

    /// Set equality, as equal cardinality plus containment.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.card() == other.card() && self.intersect(other) == *self
    }

    // -------------------- Constructions -------------------- //

    /// Powerset P(x), with 2ⁿ elements.
    #[must_use]
    pub fn powerset(&self) -> Set<Self> {
        let subsets = utils::powergen(self.as_slice());
        trace!(card = self.card(), subsets = subsets.len(), "built powerset");

        // Safety: every subset is built by prepending the least element to a sorted tail.
        Set::new(
            subsets
                .into_iter()
                .map(|vec| unsafe { Self::from_vec_unchecked(vec) }),
        )
    }

    /// The relation {(a, b) ∈ x × x : cond(a, b)}.
    ///
    /// The predicate is evaluated on every ordered pair, so this takes n² calls.
    pub fn relation<F: FnMut(&T, &T) -> bool>(&self, mut cond: F) -> Relation<T> {
        let mut pairs = Vec::new();
        for a in self {
            for b in self {
                if cond(a, b) {
                    pairs.push((a.clone(), b.clone()));
                }
            }
        }
        trace!(card = self.card(), pairs = pairs.len(), "built relation");

        // Safety: pairs were pushed in lexicographically increasing order.
        Relation::from_set(unsafe { Set::from_vec_unchecked(pairs) })
    }
}
