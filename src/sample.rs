//! Finite probability [`SampleSpace`].

use crate::prelude::*;

/// A finite sample space with the uniform counting measure.
///
/// The space is the union of the sets it is built from, and the probability of an event is the
/// fraction of the space it takes up.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSpace<T> {
    /// The union of every event the space was built from.
    space: Set<T>,
    /// Cardinality of the space.
    size: f64,
}

impl<T: Element> SampleSpace<T> {
    /// Builds the sample space spanned by some events.
    #[allow(clippy::cast_precision_loss)]
    pub fn new<'a, I: IntoIterator<Item = &'a Set<T>>>(events: I) -> Self
    where
        T: 'a,
    {
        let space = Set::empty().union_all(events);
        let size = space.card() as f64;
        Self { space, size }
    }

    /// The union of the events.
    #[must_use]
    pub const fn space(&self) -> &Set<T> {
        &self.space
    }

    /// Cardinality of the space.
    #[must_use]
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// The probability P(A) = |A| / |Ω|.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::DivisionUndefined`] if the space is empty.
    pub fn probability(&self, event: &Set<T>) -> Result<f64> {
        ratio(event.card(), self.space.card())
    }

    /// The conditional probability P(A | B) = |A ∩ B| / |B|.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::DivisionUndefined`] if `given` is empty.
    pub fn probability_given(&self, event: &Set<T>, given: &Set<T>) -> Result<f64> {
        ratio(event.intersect(given).card(), given.card())
    }
}

/// Divides two counts as reals.
#[allow(clippy::cast_precision_loss)]
fn ratio(num: usize, den: usize) -> Result<f64> {
    if den == 0 {
        debug!(num, "probability relative to an empty set");
        Err(Error::DivisionUndefined)
    } else {
        Ok(num as f64 / den as f64)
    }
}
