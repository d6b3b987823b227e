//! Errors raised by fallible conversions.

use thiserror::Error;

/// Everything that can go wrong when building or converting the structures in this crate.
///
/// The absence of an answer, such as a poset without a least element, is never an error. Those
/// cases return [`None`] instead.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A relation row is not a pair.
    #[error("relation element has {arity} components, expected a pair")]
    InvalidElement {
        /// Number of components found in the row.
        arity: usize,
    },

    /// The blocks of a partition overlap, or their union is not the carrier.
    #[error("partition blocks do not partition the carrier")]
    InvalidPartition,

    /// A quotient was taken over a carrier other than the domain of the relation.
    #[error("carrier is not the domain of the relation")]
    InvalidQuotient,

    /// The relation is not reflexive, symmetric and transitive.
    #[error("relation is not an equivalence relation")]
    NotEquivalence,

    /// A probability was requested relative to an empty set.
    #[error("probability relative to an empty set is undefined")]
    DivisionUndefined,
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
