//! Standard namespaces.
//!
//! This module provides the [`namespace`] macro,
//! and modules corresponding to the namespaces needed by rdfhash
//! (generated via that macro).
//!
//! Every generated constant is the full IRI, as a `&'static str`:
//! ```
//! use rdfhash_api::ns::{rdf, xsd};
//! use rdfhash_api::term::Term;
//!
//! assert_eq!(xsd::string, "http://www.w3.org/2001/XMLSchema#string");
//! let a = Term::new_iri_unchecked(rdf::type_);
//! assert!(a.is_iri());
//! ```

#[macro_use]
mod _macro;

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        Property,
        langString,
        first,
        rest,
        nil;
        type_, "type"
    );
}

/// The standard `xsd:` namespace, restricted to the datatypes
/// most commonly found in hashed descriptions.
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        boolean,
        date,
        dateTime,
        decimal,
        double,
        integer,
        string
    );
}

/// The standard `rdfs:` namespace.
pub mod rdfs {
    namespace!(
        "http://www.w3.org/2000/01/rdf-schema#",
        Class,
        comment,
        label,
        subClassOf
    );
}
