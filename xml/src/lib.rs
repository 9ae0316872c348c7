//! This crate is part of rdfhash,
//! a tool giving content-derived identifiers to RDF subjects.
//!
//! Parser and serializer for the [RDF/XML] concrete syntax,
//! based on [`rio_xml`].
//!
//! [RDF/XML]: https://www.w3.org/TR/rdf11-xml/
#![deny(missing_docs)]

pub mod parser;
pub mod serializer;
