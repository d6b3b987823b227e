//! # Finite sets, relations and partial orders
//!
//! A small algebra of finite [`Sets`](Set), their complements within an unbounded
//! [`Universe`], binary [`Relations`](Relation) with their order-theoretic properties, elements
//! [bound to a relation](OrderedElement), [`Partitions`](Partition) and a counting
//! [`SampleSpace`].
//!
//! Every algorithm here is exhaustive. The crate is meant for exploring constructions such as
//! posets, Hasse diagrams and quotients on small carriers, not for processing large data.

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::missing_safety_doc)]

pub mod element;
pub mod error;
pub mod partition;
pub mod prelude;
pub mod relation;
pub mod sample;
pub mod set;
pub mod universe;
mod utils;


use prelude::*;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 4]>;

/// The contract every member of a [`Set`] satisfies.
///
/// Equality and the canonical iteration order both come from [`Ord`]. Composite elements such as
/// tuples or nested sets compare structurally, so a set of sets is just another set.
pub trait Element: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Element for T {}
