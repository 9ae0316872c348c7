//! This crate is part of rdfhash,
//! a tool giving content-derived identifiers to RDF subjects.
//!
//! This crate provides a function to check if two graphs are [isomorphic],
//! i.e. identical up to a renaming of their blank nodes
//! (graph names included).
//!
//! [isomorphic]: https://www.w3.org/TR/rdf12-concepts/#graph-isomorphism
#![deny(missing_docs)]

use std::error::Error;

use thiserror::Error;

mod graph;
mod hash;

pub use graph::isomorphic_graphs;

/// An error raised while reading one of the two compared graphs.
#[derive(Debug, Error)]
pub enum IsoError<E1, E2>
where
    E1: Error + Send + Sync + 'static,
    E2: Error + Send + Sync + 'static,
{
    /// Error while reading the first graph.
    #[error("error in first graph: {0}")]
    Left(#[source] E1),
    /// Error while reading the second graph.
    #[error("error in second graph: {0}")]
    Right(#[source] E2),
}

#[cfg(test)]
mod test;
