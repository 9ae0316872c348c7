//! This crate is part of rdfhash,
//! a tool giving content-derived identifiers to RDF subjects.
//!
//! This crate replaces selected subjects of a graph (typically blank nodes)
//! with IRIs derived from a digest of their description,
//! and reverts such IRIs to blank nodes.
//!
//! * [`digest`] is the registry of digest methods;
//! * [`template`] renders digests as IRIs, and recognizes them;
//! * [`select`] chooses the subjects to hash;
//! * [`subjects`] is the hashing engine;
//! * [`reverse`] turns hashed IRIs back into blank nodes.
#![deny(missing_docs)]

mod _stage;

pub mod digest;
pub mod options;
pub mod reverse;
pub mod select;
pub mod subjects;
pub mod template;

pub use digest::{DigestError, Method, MethodSpec};
pub use options::HashOptions;
pub use reverse::unhash_subjects;
pub use select::Selection;
pub use subjects::{hash_subjects, HashedSubjects};
pub use template::{Template, TemplateError, TemplateMatcher};

use rdfhash_api::term::{InvalidBnodeId, Term};
use thiserror::Error;

/// Hashing error.
#[derive(Debug, Error)]
pub enum HashError<E: std::error::Error + Send + Sync + 'static> {
    /// The graph raised an error during hashing
    #[error("error from graph: {0}")]
    Graph(#[source] E),
    /// The digest method failed
    #[error(transparent)]
    Digest(#[from] DigestError),
    /// The template could not be turned into a matcher
    #[error(transparent)]
    Template(#[from] TemplateError),
    /// A subject to hash is described with a blank predicate
    #[error("invalid structure: {subject} has the blank predicate {predicate}")]
    InvalidStructure {
        /// The subject being hashed
        subject: Term,
        /// The offending predicate
        predicate: Term,
    },
    /// Subjects to hash refer to each other
    #[error("circular dependency between {subject} and {object}")]
    CircularDependency {
        /// The subject being hashed
        subject: Term,
        /// The subject it refers to, and which is already being hashed
        object: Term,
    },
    /// The method is randomized, and this was not explicitly allowed
    #[error("method {0} is not deterministic")]
    NonDeterministicMethod(String),
    /// The configured blank node prefix does not produce valid blank node identifiers
    #[error(transparent)]
    InvalidBnodePrefix(#[from] InvalidBnodeId),
}

#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
