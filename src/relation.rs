//! Binary relations [`Relation`].

use crate::{prelude::*, utils::Matrix};
use std::cell::OnceCell;

/// A binary relation, i.e. a set of ordered pairs.
///
/// Relations between two different types are allowed, as produced by [`Set::product`]. The
/// order-theoretic API is only available when both components share a type, in which case the
/// relation lives on a *carrier*: the union of its domain and range.
///
/// The carrier is computed once and cached. Adding a pair through [`Relation::add`] clears the
/// cache. Since every [`OrderedElement`] borrows the relation it was built from, no element can
/// outlive such a mutation.
#[derive(Clone)]
pub struct Relation<T, U = T> {
    /// The pairs in the relation.
    pairs: Set<(T, U)>,
    /// Cached union of domain and range.
    carrier: OnceCell<Set<T>>,
}

// -------------------- Basic traits -------------------- //

impl<T, U> Default for Relation<T, U> {
    fn default() -> Self {
        Self::from_set(Set::empty())
    }
}

impl<T: PartialEq, U: PartialEq> PartialEq for Relation<T, U> {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl<T: Eq, U: Eq> Eq for Relation<T, U> {}

impl<T: PartialOrd, U: PartialOrd> PartialOrd for Relation<T, U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.pairs.partial_cmp(&other.pairs)
    }
}

impl<T: Ord, U: Ord> Ord for Relation<T, U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pairs.cmp(&other.pairs)
    }
}

impl<T, U, V, const N: usize> PartialEq<[V; N]> for Relation<T, U>
where
    (T, U): PartialEq<V>,
{
    fn eq(&self, other: &[V; N]) -> bool {
        self.pairs == *other
    }
}

impl<T, U, V> PartialEq<Vec<V>> for Relation<T, U>
where
    (T, U): PartialEq<V>,
{
    fn eq(&self, other: &Vec<V>) -> bool {
        self.pairs == *other
    }
}

impl<T: Debug, U: Debug> Debug for Relation<T, U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.pairs)
    }
}

/// Displays a relation in roster notation.
impl<T: Display, U: Display> Display for Relation<T, U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.iter();
        if let Some((a, b)) = iter.next() {
            write!(f, "({a}, {b})")?;
            for (a, b) in iter {
                write!(f, ", ({a}, {b})")?;
            }
        }
        f.write_char('}')
    }
}

impl<T, U> From<Set<(T, U)>> for Relation<T, U> {
    fn from(pairs: Set<(T, U)>) -> Self {
        Self::from_set(pairs)
    }
}

impl<T, U> From<Relation<T, U>> for Set<(T, U)> {
    fn from(relation: Relation<T, U>) -> Self {
        relation.pairs
    }
}

impl<T: Element, U: Element> FromIterator<(T, U)> for Relation<T, U> {
    fn from_iter<I: IntoIterator<Item = (T, U)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T, U> IntoIterator for Relation<T, U> {
    type Item = (T, U);
    type IntoIter = std::vec::IntoIter<(T, U)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a, T, U> IntoIterator for &'a Relation<T, U> {
    type Item = &'a (T, U);
    type IntoIter = std::slice::Iter<'a, (T, U)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Rows of any length are accepted, but only pairs make a relation.
impl<T: Element> TryFrom<Vec<Vec<T>>> for Relation<T> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::try_from_rows(rows)
    }
}

// -------------------- Basic methods -------------------- //

impl<T, U> Relation<T, U> {
    /// Wraps a set of pairs.
    #[must_use]
    pub const fn from_set(pairs: Set<(T, U)>) -> Self {
        Self {
            pairs,
            carrier: OnceCell::new(),
        }
    }

    /// The pairs in the relation.
    #[must_use]
    pub const fn as_set(&self) -> &Set<(T, U)> {
        &self.pairs
    }

    /// Number of pairs in the relation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.card()
    }

    /// Whether the relation holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, (T, U)> {
        self.pairs.iter()
    }
}

impl<T: Element, U: Element> Relation<T, U> {
    /// Builds a relation out of any sequence of pairs. Repeated pairs are dropped.
    pub fn new<I: IntoIterator<Item = (T, U)>>(pairs: I) -> Self {
        Self::from_set(Set::new(pairs))
    }

    /// Whether a pair belongs to the relation.
    #[must_use]
    pub fn contains(&self, pair: &(T, U)) -> bool {
        self.pairs.contains(pair)
    }

    /// Whether `a` relates to `b`.
    #[must_use]
    pub fn relates(&self, a: &T, b: &U) -> bool {
        self.pairs
            .as_slice()
            .binary_search_by(|(x, y)| x.cmp(a).then_with(|| y.cmp(b)))
            .is_ok()
    }

    /// Adds a pair to the relation, clearing any cached data. Returns whether the pair was new.
    pub fn add(&mut self, a: T, b: U) -> bool {
        self.carrier.take();
        self.pairs.add((a, b))
    }

    /// The first components of the pairs.
    #[must_use]
    pub fn domain(&self) -> Set<T> {
        self.iter().map(|(a, _)| a.clone()).collect()
    }

    /// The second components of the pairs.
    #[must_use]
    pub fn range(&self) -> Set<U> {
        self.iter().map(|(_, b)| b.clone()).collect()
    }

    /// The inverse relation, with every pair swapped.
    #[must_use]
    pub fn inverse(&self) -> Relation<U, T> {
        self.iter().map(|(a, b)| (b.clone(), a.clone())).collect()
    }
}

impl<T: Element> Relation<T> {
    /// Builds a relation from rows of arbitrary length.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::InvalidElement`] if some row does not have exactly two entries.
    pub fn try_from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut pairs = Vec::new();
        for row in rows {
            let row: SmallVec<T> = row.into_iter().collect();
            if let [a, b] = row.as_slice() {
                pairs.push((a.clone(), b.clone()));
            } else {
                debug!(arity = row.len(), "rejected relation row");
                return Err(Error::InvalidElement { arity: row.len() });
            }
        }

        Ok(Self::new(pairs))
    }

    /// The union of domain and range. Computed once and cached.
    pub fn carrier(&self) -> &Set<T> {
        self.carrier
            .get_or_init(|| self.domain().union(&self.range()))
    }

    /// Every element of the carrier, bound to this relation.
    ///
    /// Only the carrier is cached. The elements borrow the relation, so the set is rebuilt on
    /// every call, at the cost of one pass over the cached carrier.
    #[must_use]
    pub fn elements(&self) -> Set<OrderedElement<'_, T>> {
        let elements = self
            .carrier()
            .iter()
            .map(|x| OrderedElement::new(x, self))
            .collect();

        // Safety: elements are ordered by their values, and the carrier is sorted.
        unsafe { Set::from_vec_unchecked(elements) }
    }

    /// The element of the carrier equal to `x`, bound to this relation.
    pub fn element<Q: Ord + ?Sized>(&self, x: &Q) -> Option<OrderedElement<'_, T>>
    where
        T: Borrow<Q>,
    {
        self.carrier()
            .get(x)
            .map(|x| OrderedElement::new(x, self))
    }

    /// The set {m : m R c}. Strictness excludes `c` itself.
    #[must_use]
    pub fn predecessors(&self, c: &T, strict: bool) -> Set<T> {
        self.iter()
            .filter(|(m, n)| n == c && !(strict && m == c))
            .map(|(m, _)| m.clone())
            .collect()
    }

    /// The set {n : c R n}. Strictness excludes `c` itself.
    #[must_use]
    pub fn successors(&self, c: &T, strict: bool) -> Set<T> {
        self.iter()
            .filter(|(m, n)| m == c && !(strict && n == c))
            .map(|(_, n)| n.clone())
            .collect()
    }

    /// Elements of the domain without strict predecessors.
    #[must_use]
    pub fn minimals(&self) -> Set<T> {
        self.domain()
            .select(|x| self.predecessors(x, true).is_empty())
    }

    /// Elements of the range without strict successors.
    #[must_use]
    pub fn maximals(&self) -> Set<T> {
        self.range()
            .select(|x| self.successors(x, true).is_empty())
    }

    /// The least element, below every element of the carrier, if it exists.
    #[must_use]
    pub fn first(&self) -> Option<OrderedElement<'_, T>> {
        let carrier = self.carrier();
        carrier
            .iter()
            .find(|x| carrier.iter().all(|y| self.relates(x, y)))
            .map(|x| OrderedElement::new(x, self))
    }

    /// The greatest element, above every element of the carrier, if it exists.
    #[must_use]
    pub fn last(&self) -> Option<OrderedElement<'_, T>> {
        let carrier = self.carrier();
        carrier
            .iter()
            .find(|x| carrier.iter().all(|y| self.relates(y, x)))
            .map(|x| OrderedElement::new(x, self))
    }

    // -------------------- Equivalence -------------------- //

    /// The set {y : x R y}, which is the class of `x` when the relation is an equivalence.
    #[must_use]
    pub fn equivalence_class(&self, x: &T) -> Set<T> {
        self.successors(x, false)
    }

    /// The class of every element in the domain.
    #[must_use]
    pub fn equivalence_classes(&self) -> Set<Set<T>> {
        self.domain()
            .iter()
            .map(|x| self.equivalence_class(x))
            .collect()
    }

    /// The quotient of a carrier by this relation, that is, its equivalence classes.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::InvalidQuotient`] if the carrier is not the domain of the relation.
    pub fn quotient(&self, carrier: &Set<T>) -> Result<Partition<T>> {
        if *carrier == self.domain() {
            Ok(Partition::from(self.equivalence_classes()))
        } else {
            debug!(card = carrier.card(), "carrier is not the relation domain");
            Err(Error::InvalidQuotient)
        }
    }

    // -------------------- Properties -------------------- //

    /// Whether every element involved in a pair relates to itself.
    #[must_use]
    pub fn is_reflexive(&self) -> bool {
        self.iter()
            .all(|(m, n)| self.relates(m, m) && self.relates(n, n))
    }

    /// Whether every pair appears swapped as well.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.iter().all(|(m, n)| self.relates(n, m))
    }

    /// Whether no pair of distinct elements appears swapped.
    #[must_use]
    pub fn is_antisymmetric(&self) -> bool {
        self.iter().all(|(m, n)| m == n || !self.relates(n, m))
    }

    /// Whether x R y and y R z imply x R z. Matches every two pairs against each other.
    #[must_use]
    pub fn is_transitive(&self) -> bool {
        self.iter().all(|(x, y)| {
            self.iter()
                .filter(|(y_, _)| y == y_)
                .all(|(_, z)| self.relates(x, z))
        })
    }

    /// Whether every two elements of the carrier relate one way or the other.
    #[must_use]
    pub fn is_comparable(&self) -> bool {
        Matrix::new(self).connex()
    }

    /// Reflexive, transitive and antisymmetric.
    #[must_use]
    pub fn is_partial_order(&self) -> bool {
        self.is_reflexive() && self.is_transitive() && self.is_antisymmetric()
    }

    /// A partial order where every two elements are comparable.
    #[must_use]
    pub fn is_total_order(&self) -> bool {
        self.is_partial_order() && self.is_comparable()
    }

    /// Reflexive, symmetric and transitive.
    #[must_use]
    pub fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }
}

/// Tests for [`Relation`].
#[cfg(test)]
mod relation {
    use super::*;

    /// Two classes {a, b, c} and {d, e}.
    fn two_classes() -> Relation<&'static str> {
        Relation::new([
            ("a", "a"),
            ("b", "b"),
            ("c", "c"),
            ("a", "b"),
            ("b", "c"),
            ("a", "c"),
            ("b", "a"),
            ("c", "b"),
            ("c", "a"),
            ("d", "d"),
            ("e", "e"),
            ("d", "e"),
            ("e", "d"),
        ])
    }

    /// The chain a < b < c.
    fn chain() -> Relation<&'static str> {
        Relation::new([
            ("a", "a"),
            ("b", "b"),
            ("c", "c"),
            ("a", "b"),
            ("b", "c"),
            ("a", "c"),
        ])
    }

    /// Test [`Relation::try_from_rows`].
    #[test]
    fn rows() {
        let r = Relation::try_from_rows([vec![1, 2], vec![2, 3]]).unwrap();
        assert_eq!(r, [(1, 2), (2, 3)]);

        assert_eq!(
            Relation::<i32>::try_from(vec![vec![1, 2], vec![1, 2, 3]]),
            Err(Error::InvalidElement { arity: 3 })
        );
        assert_eq!(
            Relation::try_from_rows([vec![1]]),
            Err(Error::InvalidElement { arity: 1 })
        );
    }

    /// Test domain, range and inverse.
    #[test]
    fn projections() {
        let x = Set::from(["a", "b", "c", "d", "e"]);
        let r = two_classes();
        assert_eq!(r.domain(), x);
        assert_eq!(r.range(), x);
        assert_eq!(r.carrier(), &x);

        let a = Relation::new([("a", "a"), ("b", "b"), ("c", "c"), ("b", "c"), ("a", "c")]);
        let a_inv = Relation::new([("a", "a"), ("b", "b"), ("c", "c"), ("c", "b"), ("c", "a")]);
        assert_eq!(a.inverse(), a_inv);
        assert_eq!(a_inv.inverse(), a);

        let p = Set::from([1, 2]).product(&Set::from(['x', 'y']));
        assert_eq!(p.domain(), [1, 2]);
        assert_eq!(p.range(), ['x', 'y']);
        assert!(p.inverse().relates(&'y', &1));
    }

    /// Test the properties of an equivalence relation.
    #[test]
    fn equivalence() {
        let r = two_classes();
        assert!(r.is_reflexive());
        assert!(r.is_symmetric());
        assert!(r.is_transitive());
        assert!(!r.is_antisymmetric());
        assert!(!r.is_partial_order());
        assert!(r.is_equivalence());
    }

    /// Test the properties of several orders.
    #[test]
    fn orders() {
        let b = chain();
        assert!(b.is_comparable());
        assert!(b.is_reflexive());
        assert!(!b.is_symmetric());
        assert!(b.is_antisymmetric());
        assert!(b.is_transitive());
        assert!(b.is_partial_order());
        assert!(b.is_total_order());
        assert_eq!(b.maximals(), ["c"]);
        assert_eq!(b.minimals(), ["a"]);

        // Missing (c, c).
        let c = Relation::new([("a", "a"), ("b", "b"), ("a", "b"), ("b", "c"), ("a", "c")]);
        assert!(!c.is_comparable());
        assert!(!c.is_reflexive());
        assert!(!c.is_symmetric());
        assert!(c.is_antisymmetric());
        assert!(c.is_transitive());
        assert!(!c.is_partial_order());
        assert!(!c.is_total_order());

        // The chain plus an isolated d.
        let mut d = chain();
        d.add("d", "d");
        assert!(d.is_reflexive());
        assert!(d.is_antisymmetric());
        assert!(d.is_transitive());
        assert!(d.is_partial_order());
        assert!(!d.is_total_order());
        assert_eq!(d.maximals(), ["c", "d"]);
        assert_eq!(d.minimals(), ["a", "d"]);
    }

    /// Test [`Relation::is_transitive`] on a missing shortcut.
    #[test]
    fn transitive() {
        let r = Relation::new([("a", "b"), ("b", "c")]);
        assert!(!r.is_transitive());

        let mut r = r;
        r.add("a", "c");
        assert!(r.is_transitive());
    }

    /// Test orders built from predicates.
    #[test]
    fn from_predicate() {
        let r = Set::from([1, 2, 3]).relation(|m, n| m <= n);
        assert!(r.is_reflexive());
        assert!(r.is_antisymmetric());
        assert!(r.is_transitive());
        assert!(r.is_partial_order());
        assert!(r.is_total_order());

        // Inclusion on a powerset.
        let r = Set::from(["a", "b"])
            .powerset()
            .relation(|x, y| x.issubset(y, false));
        assert!(r.is_reflexive());
        assert!(r.is_antisymmetric());
        assert!(r.is_transitive());
        assert!(r.is_partial_order());
        assert!(!r.is_total_order());

        // The dyadic rationals (2x + 1) / 2ʸ are all distinct, so their order is total.
        let z = |&(x, y): &(i32, i32)| f64::from(2 * x + 1) / 2f64.powi(y);
        let grid: Set<_> = (-2..2).flat_map(|x| (-2..2).map(move |y| (x, y))).collect();
        let r = grid.relation(|a, b| z(a) <= z(b));
        assert_eq!(r.len(), 136);
        assert!(r.is_reflexive());
        assert!(!r.is_symmetric());
        assert!(r.is_transitive());
        assert!(r.is_antisymmetric());
        assert!(r.is_total_order());
    }

    /// Test predecessors and successors.
    #[test]
    fn neighbors() {
        let mut d = chain();
        d.add("d", "d");
        assert_eq!(d.predecessors(&"a", false), ["a"]);
        assert_eq!(d.predecessors(&"b", false), ["a", "b"]);
        assert_eq!(d.predecessors(&"c", false), ["a", "b", "c"]);
        assert!(d.predecessors(&"a", true).is_empty());
        assert_eq!(d.predecessors(&"b", true), ["a"]);
        assert_eq!(d.predecessors(&"c", true), ["a", "b"]);
        assert!(d
            .predecessors(&"a", false)
            .issubset(&d.predecessors(&"b", false), true));
        assert_eq!(d.successors(&"a", true), ["b", "c"]);
        assert_eq!(d.successors(&"d", false), ["d"]);
    }

    /// Test [`Relation::first`] and [`Relation::last`].
    #[test]
    fn extremes() {
        let a = Relation::new([("a", "a"), ("b", "b"), ("c", "c"), ("b", "c"), ("a", "c")]);
        assert!(a.first().is_none());
        assert_eq!(a.last(), a.element("c"));
        assert_eq!(a.last().map(|e| *e.value()), Some("c"));

        let a_inv = a.inverse();
        assert_eq!(a_inv.first().map(|e| *e.value()), Some("c"));
        assert!(a_inv.last().is_none());

        let b = chain();
        assert_eq!(b.first(), b.element("a"));
        assert_eq!(b.last(), b.element("c"));
        assert!(Relation::<u8>::default().first().is_none());
    }

    /// Test equivalence classes and quotients.
    #[test]
    fn classes() {
        let r = two_classes();
        let x = Set::from(["a", "b", "c", "d", "e"]);
        assert_eq!(
            r.equivalence_classes(),
            [Set::from(["a", "b", "c"]), Set::from(["d", "e"])]
        );
        assert_eq!(r.equivalence_class(&"a"), ["a", "b", "c"]);
        assert_eq!(r.equivalence_class(&"d"), ["d", "e"]);
        assert_eq!(x.product(&x).equivalence_class(&"a"), x);

        assert_eq!(
            r.quotient(&x).unwrap(),
            Partition::new([Set::from(["a", "b", "c"]), Set::from(["d", "e"])])
        );
        assert_eq!(
            r.quotient(&Set::from(["a", "b"])),
            Err(Error::InvalidQuotient)
        );
    }

    /// Test that mutation refreshes the cached carrier.
    #[test]
    fn cache() {
        let mut r = chain();
        assert_eq!(r.carrier(), &Set::from(["a", "b", "c"]));
        assert!(r.add("c", "d"));
        assert!(!r.add("c", "d"));
        assert_eq!(r.carrier(), &Set::from(["a", "b", "c", "d"]));
        assert_eq!(r.elements().card(), 4);
    }

    /// Test [`Display`] for relations.
    #[test]
    fn display() {
        let r = Relation::new([(2, 1), (1, 2)]);
        assert_eq!(r.to_string(), "{(1, 2), (2, 1)}");
        assert_eq!(Relation::<u8>::default().to_string(), "{}");
    }
}
