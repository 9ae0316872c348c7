//! rdfhash gives content-derived identifiers to [RDF] subjects.
//!
//! Each selected subject (by default, every blank node used as subject)
//! is replaced by an IRI computed from a digest of its description:
//! one `{predicate} {object}.` line per quad, sorted and concatenated.
//! Subjects with the same description thus get the same IRI,
//! whatever the graph they come from.
//! Hashed IRIs can later be [turned back](unhash_subjects) into blank nodes.
//!
//! This crate gathers the other crates of the project
//! (re-exported as [`api`], [`c14n`], [`inmem`], [`isomorphism`], [`rio`], [`turtle`] and [`xml`]),
//! and provides the `rdfhash` command line tool.
//!
//! # Getting Started
//!
//! ```
//! use rdfhash::c14n::{HashOptions, Selection};
//! use rdfhash::inmem::FastGraph;
//! use rdfhash::turtle::parser::{turtle::TurtleParser, GraphParser};
//! use rdfhash::turtle::serializer::nt::to_ntriples;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = FastGraph::new();
//! TurtleParser::default().parse_str(
//!     r#"[ <http://example.org/name> "Alice" ] ."#,
//!     &mut graph,
//! )?;
//! let hashed = rdfhash::hash_subjects(&mut graph, &Selection::new(), &HashOptions::new())?;
//! assert_eq!(hashed.len(), 1);
//! assert!(to_ntriples(&graph)?.starts_with("<sha256:"));
//! # Ok(())
//! # }
//! ```
//!
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
#![deny(missing_docs)]

use std::collections::BTreeMap;

pub use rdfhash_api as api;
pub use rdfhash_c14n as c14n;
pub use rdfhash_inmem as inmem;
pub use rdfhash_isomorphism as isomorphism;
pub use rdfhash_rio as rio;
pub use rdfhash_turtle as turtle;
pub use rdfhash_xml as xml;

pub mod format;

use api::graph::MutableGraph;
use api::term::Term;
use c14n::{HashError, HashOptions, HashedSubjects, Method, Selection};

/// Replace the subjects of `graph` picked by `selection`
/// with IRIs derived from their description.
///
/// See [`c14n::hash_subjects`] for details.
pub fn hash_subjects<G: MutableGraph>(
    graph: &mut G,
    selection: &Selection,
    options: &HashOptions,
) -> Result<HashedSubjects, HashError<G::Error>> {
    let candidates = selection.select(graph).map_err(HashError::Graph)?;
    c14n::hash_subjects(graph, &candidates, options)
}

/// Replace every IRI of `graph` rendered by the template of `options`
/// (with any known method) with a fresh blank node.
///
/// See [`c14n::unhash_subjects`] for details.
pub fn unhash_subjects<G: MutableGraph>(
    graph: &mut G,
    options: &HashOptions,
) -> Result<BTreeMap<Term, Term>, HashError<G::Error>> {
    let matcher = options.template().matcher(&Method::ALL)?;
    c14n::unhash_subjects(graph, &matcher, options)
}
