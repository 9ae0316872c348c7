//! An RDF graph, the central notion of the RDF data model,
//! is a collection of triples.
//!
//! rdfhash works on *quads*, i.e. triples with an optional graph name,
//! so that hashing a dataset preserves the context of each statement.
//! The [`Graph`] and [`MutableGraph`] traits are all that the hashing engine
//! requires from a store.
//!
//! Implementations are provided for `BTreeSet<Spog>` and `HashSet<Spog>`;
//! see also the `rdfhash_inmem` crate.
use std::collections::BTreeSet;
use std::error::Error;

use crate::quad::{Quad, Spog};
use crate::term::Term;


mod _foreign_impl;

/// A constraint on one position of a quad.
///
/// For the graph-name position, the pattern is over `Option<Term>`,
/// and `Pattern::Is(None)` only matches the default graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern<T = Term> {
    /// Matches any value.
    Any,
    /// Matches exactly the given value.
    Is(T),
}

impl<T: PartialEq> Pattern<T> {
    /// Whether `value` satisfies this pattern.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Is(expected) => expected == value,
        }
    }

    /// The constant value of this pattern, if any.
    pub fn constant(&self) -> Option<&T> {
        match self {
            Pattern::Any => None,
            Pattern::Is(expected) => Some(expected),
        }
    }
}

impl Pattern<Option<Term>> {
    /// Whether the graph name `g` satisfies this pattern.
    pub fn matches_graph_name(&self, g: Option<&Term>) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Is(expected) => expected.as_ref() == g,
        }
    }
}

impl<T> From<T> for Pattern<T> {
    fn from(value: T) -> Self {
        Pattern::Is(value)
    }
}

/// Check whether `quad` matches the four given patterns.
pub fn quad_matches(
    quad: &Spog,
    s: &Pattern,
    p: &Pattern,
    o: &Pattern,
    g: &Pattern<Option<Term>>,
) -> bool {
    s.matches(quad.s()) && p.matches(quad.p()) && o.matches(quad.o()) && g.matches_graph_name(quad.g())
}

/// Generic trait for RDF graphs (more precisely, sets of quads).
///
/// Retrieval methods yield owned quads:
/// terms are reference-counted, so this only costs a few counter increments,
/// and leaves callers free to mutate the graph afterwards.
pub trait Graph {
    /// The error type that this graph may raise.
    type Error: Error + Send + Sync + 'static;

    /// An iterator visiting all quads of this graph in arbitrary order.
    fn quads(&self) -> impl Iterator<Item = Result<Spog, Self::Error>> + '_;

    /// An iterator visiting all quads matching the given patterns, in arbitrary order.
    ///
    /// The default implementation filters [`Graph::quads`];
    /// indexed stores should override it.
    fn quads_matching(
        &self,
        s: Pattern,
        p: Pattern,
        o: Pattern,
        g: Pattern<Option<Term>>,
    ) -> impl Iterator<Item = Result<Spog, Self::Error>> + '_ {
        self.quads().filter(move |res| match res {
            Ok(quad) => quad_matches(quad, &s, &p, &o, &g),
            Err(_) => true,
        })
    }

    /// Return `true` if this graph contains the given quad.
    fn contains(&self, quad: &Spog) -> Result<bool, Self::Error> {
        let [s, p, o] = &quad.0;
        self.quads_matching(
            Pattern::Is(s.clone()),
            Pattern::Is(p.clone()),
            Pattern::Is(o.clone()),
            Pattern::Is(quad.1.clone()),
        )
        .next()
        .transpose()
        .map(|found| found.is_some())
    }

    /// The set of all terms used as subject in this graph.
    fn subjects(&self) -> Result<BTreeSet<Term>, Self::Error> {
        self.quads().map(|res| res.map(|q| q.0[0].clone())).collect()
    }

    /// The number of quads in this graph.
    fn len(&self) -> Result<usize, Self::Error> {
        let mut n = 0;
        for res in self.quads() {
            res?;
            n += 1;
        }
        Ok(n)
    }

    /// Return `true` if this graph contains no quad.
    fn is_empty(&self) -> Result<bool, Self::Error> {
        self.quads().next().transpose().map(|q| q.is_none())
    }
}

/// Generic trait for mutable RDF graphs.
///
/// Mutations fail with the same error type as retrieval.
pub trait MutableGraph: Graph {
    /// Insert the given quad in this graph.
    ///
    /// Return `true` iff the quad was actually inserted
    /// (i.e. it was not already present).
    fn insert(&mut self, quad: Spog) -> Result<bool, Self::Error>;

    /// Remove the given quad from this graph.
    ///
    /// Return `true` iff the quad was actually removed.
    fn remove(&mut self, quad: &Spog) -> Result<bool, Self::Error>;

    /// Insert all the given quads, and return the number of quads actually inserted.
    fn insert_all<I>(&mut self, quads: I) -> Result<usize, Self::Error>
    where
        I: IntoIterator<Item = Spog>,
    {
        let mut count = 0;
        for quad in quads {
            if self.insert(quad)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Remove all quads matching the given patterns,
    /// and return the number of quads removed.
    fn remove_matching(
        &mut self,
        s: Pattern,
        p: Pattern,
        o: Pattern,
        g: Pattern<Option<Term>>,
    ) -> Result<usize, Self::Error> {
        let matching: Vec<Spog> = self.quads_matching(s, p, o, g).collect::<Result<_, _>>()?;
        let mut count = 0;
        for quad in &matching {
            if self.remove(quad)? {
                count += 1;
            }
        }
        Ok(count)
    }
}
