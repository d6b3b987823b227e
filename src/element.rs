//! Elements of a poset [`OrderedElement`].

use crate::prelude::*;

/// A value seen through a relation on its carrier, typically a partial order.
///
/// The element borrows both its value and its relation, so it never keeps the relation alive nor
/// modifies it. Equality and the derived traits only look at the value, which lets a set of
/// elements share the canonical order of the values. Order comparisons go through the relation
/// instead, and are exposed as named methods such as [`OrderedElement::below`].
///
/// Every comparison accepts either another element or a bare value.
pub struct OrderedElement<'r, T> {
    /// The underlying value.
    value: &'r T,
    /// The relation giving the order.
    relation: &'r Relation<T>,
}

// -------------------- Basic traits -------------------- //

impl<T> Clone for OrderedElement<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OrderedElement<'_, T> {}

impl<T: PartialEq> PartialEq for OrderedElement<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for OrderedElement<'_, T> {}

impl<T: PartialOrd> PartialOrd for OrderedElement<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(other.value)
    }
}

impl<T: Ord> Ord for OrderedElement<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(other.value)
    }
}

impl<T: std::hash::Hash> std::hash::Hash for OrderedElement<'_, T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Borrow<T> for OrderedElement<'_, T> {
    fn borrow(&self) -> &T {
        self.value
    }
}

impl<T: Debug> Debug for OrderedElement<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.value)
    }
}

impl<T: Display> Display for OrderedElement<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.value)
    }
}

// -------------------- Order -------------------- //

impl<'r, T: Element> OrderedElement<'r, T> {
    /// Binds a value to a relation.
    #[must_use]
    pub const fn new(value: &'r T, relation: &'r Relation<T>) -> Self {
        Self { value, relation }
    }

    /// The underlying value.
    #[must_use]
    pub const fn value(&self) -> &'r T {
        self.value
    }

    /// The relation giving the order.
    #[must_use]
    pub const fn relation(&self) -> &'r Relation<T> {
        self.relation
    }

    /// Strict comparison x < y.
    pub fn below<Y: Borrow<T>>(&self, other: &Y) -> bool {
        let other: &T = other.borrow();
        self.value != other && self.relation.relates(self.value, other)
    }

    /// Comparison x ≤ y.
    pub fn below_eq<Y: Borrow<T>>(&self, other: &Y) -> bool {
        let other: &T = other.borrow();
        self.relation.relates(self.value, other)
    }

    /// Strict comparison x > y.
    pub fn above<Y: Borrow<T>>(&self, other: &Y) -> bool {
        let other: &T = other.borrow();
        self.value != other && self.relation.relates(other, self.value)
    }

    /// Comparison x ≥ y.
    pub fn above_eq<Y: Borrow<T>>(&self, other: &Y) -> bool {
        let other: &T = other.borrow();
        self.relation.relates(other, self.value)
    }

    /// Whether m ≤ x ≤ n, or m < x < n when `strict` is set.
    pub fn between<M: Borrow<T>, N: Borrow<T>>(&self, m: &M, n: &N, strict: bool) -> bool {
        if strict {
            self.above(m) && self.below(n)
        } else {
            self.above_eq(m) && self.below_eq(n)
        }
    }

    // -------------------- Navigation -------------------- //

    /// Every element of the carrier below this one.
    #[must_use]
    pub fn predecessors(&self, strict: bool) -> Set<Self> {
        self.relation.elements().select(|e| {
            if strict {
                e.below(self)
            } else {
                e.below_eq(self)
            }
        })
    }

    /// Every element of the carrier above this one.
    #[must_use]
    pub fn successors(&self, strict: bool) -> Set<Self> {
        self.relation.elements().select(|e| {
            if strict {
                e.above(self)
            } else {
                e.above_eq(self)
            }
        })
    }

    /// The elements this one covers, i.e. its in-edges in the Hasse diagram.
    #[must_use]
    pub fn immediate_predecessors(&self) -> Set<Self> {
        let preds = self.predecessors(true);
        preds
            .clone()
            .select(|p| !preds.iter().any(|q| p.below(q) && q.below(self)))
    }

    /// The elements covering this one, i.e. its out-edges in the Hasse diagram.
    #[must_use]
    pub fn immediate_successors(&self) -> Set<Self> {
        let succs = self.successors(true);
        succs
            .clone()
            .select(|s| !succs.iter().any(|q| s.above(q) && q.above(self)))
    }

    /// An immediate predecessor. When there are several, the least in canonical order is chosen.
    #[must_use]
    pub fn prev(&self) -> Option<Self> {
        self.immediate_predecessors().first().copied()
    }

    /// An immediate successor. When there are several, the least in canonical order is chosen.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.immediate_successors().first().copied()
    }
}

/// Tests for [`OrderedElement`].
#[cfg(test)]
mod element {
    use super::*;

    /// The chain a < b < c plus an isolated d.
    fn chain() -> Relation<&'static str> {
        Relation::new([
            ("a", "a"),
            ("b", "b"),
            ("c", "c"),
            ("d", "d"),
            ("a", "b"),
            ("b", "c"),
            ("a", "c"),
        ])
    }

    /// Test comparisons.
    #[test]
    fn compare() {
        let d = chain();
        let a = d.element("a").unwrap();
        let b = d.element("b").unwrap();
        let c = d.element("c").unwrap();
        assert_eq!(a, OrderedElement::new(&"a", &d));
        assert_eq!(*b.value(), "b");

        assert!(a.below(&b));
        assert!(a.below(&c));
        assert!(a.below(&b) && b.below(&c));
        assert!(!a.above(&b));
        assert!(!b.above(&c));
        assert!(a.below_eq(&b));
        assert!(a.below_eq(&a));
        assert!(!a.below(&a));
        assert!(!a.above_eq(&b));
        assert!(c.above_eq(&"a"));
        assert_ne!(a, b);

        assert!(b.between(&a, &c, false));
        assert!(b.between(&a, &b, false));
        assert!(!b.between(&a, &b, true));
        assert!(b.between(&"a", &"c", true));
    }

    /// Test predecessors and successors.
    #[test]
    fn neighbors() {
        let d = chain();
        let a = d.element("a").unwrap();
        let b = d.element("b").unwrap();
        let c = d.element("c").unwrap();

        assert!(a.predecessors(true).is_empty());
        assert_eq!(b.predecessors(true), [a]);
        assert_eq!(c.predecessors(true), [a, b]);
        assert_eq!(c.predecessors(false), [a, b, c]);

        assert_eq!(a.successors(true), [b, c]);
        assert_eq!(b.successors(true), [c]);
        assert!(c.successors(true).is_empty());
        assert!(c.successors(false).contains(&"c"));
    }

    /// Test Hasse diagram navigation on a chain.
    #[test]
    fn chain_steps() {
        let d = chain();
        let a = d.element("a").unwrap();
        let b = d.element("b").unwrap();
        let c = d.element("c").unwrap();

        assert_eq!(c.immediate_predecessors(), [b]);
        assert_eq!(a.immediate_successors(), [b]);
        assert_eq!(c.prev(), Some(b));
        assert_eq!(b.prev(), Some(a));
        assert_eq!(a.prev(), None);
        assert_eq!(a.next(), Some(b));
        assert_eq!(b.next(), Some(c));
        assert_eq!(c.next(), None);
    }

    /// Test Hasse diagram navigation with several covers.
    #[test]
    fn branching() {
        let r = Relation::new([("a", "a"), ("b", "b"), ("c", "c"), ("b", "c"), ("a", "c")]);
        let a = r.element("a").unwrap();
        let b = r.element("b").unwrap();
        let c = r.element("c").unwrap();
        assert_eq!(c.immediate_predecessors(), [a, b]);
        assert_eq!(c.prev(), Some(a));
        assert_eq!(a.next(), Some(c));

        // Inclusion on the powerset of {1, 2, 3}.
        let p = Set::from([1, 2, 3]).powerset();
        let r = p.relation(|x, y| x.issubset(y, false));
        let top = r.element(&Set::from([1, 2, 3])).unwrap();
        assert_eq!(top.immediate_predecessors().card(), 3);
        assert_eq!(top.predecessors(true).card(), 7);
        assert_eq!(top.prev().map(|e| e.value().clone()), Some(Set::from([1, 2])));

        let bottom = r.element(&Set::empty()).unwrap();
        assert_eq!(bottom.immediate_successors().card(), 3);
        assert_eq!(bottom.next().map(|e| e.value().clone()), Some(Set::from([1])));
        assert_eq!(r.first(), Some(bottom));
        assert_eq!(r.last(), Some(top));
    }
}
