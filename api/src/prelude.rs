//! Prelude for the rdfhash API.
pub use crate::graph::{Graph, MutableGraph, Pattern};
pub use crate::quad::{Quad, Spog};
pub use crate::term::{Term, TermKind};
pub use crate::triple::Triple;
