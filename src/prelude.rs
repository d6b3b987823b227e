//! Crate prelude.

// The actual prelude.
pub use crate::{
    element::OrderedElement,
    error::{Error, Result},
    partition::Partition,
    relation::Relation,
    sample::SampleSpace,
    set::Set,
    universe::Universe,
    Element,
};

// Convenient imports within the crate.
pub(crate) use crate::SmallVec;
pub(crate) use derive_more::{From, Into};
pub(crate) use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
};
pub(crate) use tracing::{debug, trace};
