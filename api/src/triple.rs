//! A triple expresses a single fact.
//!
//! In rdfhash, triples are plain arrays `[Term; 3]`;
//! the [`Triple`] trait gives their components meaningful names.
use crate::quad::Spog;
use crate::term::Term;

/// This trait represents an RDF triple,
/// and provides convenient methods for working with triples.
pub trait Triple {
    /// The subject of this triple.
    fn s(&self) -> &Term;
    /// The predicate of this triple.
    fn p(&self) -> &Term;
    /// The object of this triple.
    fn o(&self) -> &Term;

    /// Convert this triple into a quad in the given graph
    /// (`None` meaning the default graph).
    fn into_quad(self, graph_name: Option<Term>) -> Spog;
}

impl Triple for [Term; 3] {
    #[inline]
    fn s(&self) -> &Term {
        &self[0]
    }
    #[inline]
    fn p(&self) -> &Term {
        &self[1]
    }
    #[inline]
    fn o(&self) -> &Term {
        &self[2]
    }
    fn into_quad(self, graph_name: Option<Term>) -> Spog {
        (self, graph_name)
    }
}
