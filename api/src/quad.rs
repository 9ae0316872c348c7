//! A quad expresses a single fact within a context.
//! Quads are like RDF [`triple`](crate::triple)s
//! augmented with an optional graph name.
use crate::term::Term;
use crate::triple::Triple;

/// Type alias for a quad as its triple and its optional graph name.
/// `None` stands for the default graph.
pub type Spog = ([Term; 3], Option<Term>);

/// This trait represents an RDF quad,
/// and provides convenient methods for working with quads.
pub trait Quad {
    /// The subject of this quad.
    fn s(&self) -> &Term;
    /// The predicate of this quad.
    fn p(&self) -> &Term;
    /// The object of this quad.
    fn o(&self) -> &Term;
    /// The (optional) graph name
    fn g(&self) -> Option<&Term>;

    /// Build a quad with the same graph name as this one,
    /// and the given triple.
    fn with_spo(&self, spo: [Term; 3]) -> Spog {
        (spo, self.g().cloned())
    }
}

impl Quad for Spog {
    #[inline]
    fn s(&self) -> &Term {
        self.0.s()
    }
    #[inline]
    fn p(&self) -> &Term {
        self.0.p()
    }
    #[inline]
    fn o(&self) -> &Term {
        self.0.o()
    }
    #[inline]
    fn g(&self) -> Option<&Term> {
        self.1.as_ref()
    }
}
