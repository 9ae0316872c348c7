//! This crate is part of [rdfhash],
//! a toolkit replacing [RDF] blank nodes with content-derived identifiers.
//!
//! It defines the data model shared by all the other crates:
//! * [terms](term::Term), a closed enum over IRIs, blank nodes, literals and variables;
//! * [triples](triple::Triple) and [quads](quad::Quad), as plain arrays and tuples of terms;
//! * the [`Graph`](graph::Graph) and [`MutableGraph`](graph::MutableGraph) traits,
//!   which is all the hashing engine requires from a graph store.
//!
//! # Generalized RDF
//!
//! Graphs are allowed to contain *generalized* triples,
//! e.g. with a blank node in predicate position.
//! Checking that the data is strict RDF is left to the code consuming it
//! (the hashing engine, for instance, refuses blank predicates).
//!
//! [rdfhash]: https://docs.rs/rdfhash/latest/rdfhash/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
#![deny(missing_docs)]

pub mod graph;
pub mod ns;
pub mod prelude;
pub mod quad;
pub mod term;
pub mod triple;
