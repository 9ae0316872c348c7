//! This crate is part of [rdfhash],
//! a toolkit replacing [RDF] blank nodes with content-derived identifiers.
//!
//! It provides in-memory implementations of graphs,
//! where terms are interned in a [`TermIndex`](index::TermIndex)
//! and quads are stored as arrays of short integers.
//!
//! [rdfhash]: https://docs.rs/rdfhash/latest/rdfhash/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/

pub mod graph;
pub mod index;

pub use graph::{FastGraph, LightGraph};
