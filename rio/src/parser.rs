//! Common implementations for adapting
//! [RIO](https://docs.rs/rio_api/) parsers.
//!
//! Rio parsers call a handler for each parsed triple or quad;
//! the functions of this module convert them and insert them into a [`MutableGraph`].
//!
//! Blank node labels are scoped to the parsed document:
//! a label already used in the target graph is renamed,
//! so that loading several documents into the same graph never merges their blank nodes.
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::io::BufRead;

use rdfhash_api::graph::{Graph, MutableGraph};
use rdfhash_api::quad::Spog;
use rdfhash_api::term::Term;
use rio_api::parser::{QuadsParser, TriplesParser};
use thiserror::Error;

use crate::model::{self, QuotedTripleError};

/// An error raised while loading RDF data into a graph.
#[derive(Debug, Error)]
pub enum ParseError<E>
where
    E: Error + Send + Sync + 'static,
{
    /// The data is not valid in the given syntax
    /// (the message is the one produced by Rio).
    #[error("syntax error: {0}")]
    Syntax(#[source] Box<dyn Error + Send + Sync + 'static>),
    /// The data contains RDF-star quoted triples.
    #[error(transparent)]
    QuotedTriple(#[from] QuotedTripleError),
    /// The target graph failed to insert a quad.
    #[error("error while inserting into graph: {0}")]
    Graph(#[source] E),
}

/// A parser for a given concrete syntax,
/// loading its results into any [`MutableGraph`].
pub trait GraphParser {
    /// Parse `data` into `graph`, and return the number of quads actually inserted.
    fn parse_bufread<B, G>(&self, data: B, graph: &mut G) -> Result<usize, ParseError<G::Error>>
    where
        B: BufRead,
        G: MutableGraph;

    /// Parse the string `data` into `graph`, and return the number of quads actually inserted.
    fn parse_str<G>(&self, data: &str, graph: &mut G) -> Result<usize, ParseError<G::Error>>
    where
        G: MutableGraph,
    {
        self.parse_bufread(data.as_bytes(), graph)
    }
}

/// Parse all the triples of `parser` into the default graph of `graph`.
///
/// Return the number of quads actually inserted.
pub fn load_triples<P, G>(mut parser: P, graph: &mut G) -> Result<usize, ParseError<G::Error>>
where
    P: TriplesParser,
    P::Error: Error + Send + Sync + 'static,
    G: MutableGraph,
{
    let mut scope = BnodeScope::new(graph).map_err(ParseError::Graph)?;
    let mut count = 0;
    parser
        .parse_all(&mut |t| -> Result<(), RioStreamError<P::Error, G::Error>> {
            let mut quad = model::triple(t).map_err(|e| RioStreamError::Sink(e.into()))?;
            scope.relabel(&mut quad);
            if graph
                .insert(quad)
                .map_err(|e| RioStreamError::Sink(ParseError::Graph(e)))?
            {
                count += 1;
            }
            Ok(())
        })
        .map_err(ParseError::from)?;
    Ok(count)
}

/// Parse all the quads of `parser` into `graph`.
///
/// Return the number of quads actually inserted.
pub fn load_quads<P, G>(mut parser: P, graph: &mut G) -> Result<usize, ParseError<G::Error>>
where
    P: QuadsParser,
    P::Error: Error + Send + Sync + 'static,
    G: MutableGraph,
{
    let mut scope = BnodeScope::new(graph).map_err(ParseError::Graph)?;
    let mut count = 0;
    parser
        .parse_all(&mut |q| -> Result<(), RioStreamError<P::Error, G::Error>> {
            let mut quad = model::quad(q).map_err(|e| RioStreamError::Sink(e.into()))?;
            scope.relabel(&mut quad);
            if graph
                .insert(quad)
                .map_err(|e| RioStreamError::Sink(ParseError::Graph(e)))?
            {
                count += 1;
            }
            Ok(())
        })
        .map_err(ParseError::from)?;
    Ok(count)
}

/// Maps the blank node labels of one document to labels
/// that were not in use in the target graph before parsing it.
///
/// A label is kept as is when possible,
/// otherwise it gets a numeric suffix (`x` becomes `x_1`).
struct BnodeScope {
    taken: HashSet<String>,
    labels: HashMap<String, Term>,
}

impl BnodeScope {
    fn new<G: Graph>(graph: &G) -> Result<Self, G::Error> {
        let mut taken = HashSet::new();
        for quad in graph.quads() {
            let (spo, g) = quad?;
            for t in spo.iter().chain(g.iter()) {
                if let Some(id) = t.bnode_id() {
                    taken.insert(id.to_string());
                }
            }
        }
        Ok(BnodeScope {
            taken,
            labels: HashMap::new(),
        })
    }

    fn relabel(&mut self, quad: &mut Spog) {
        let (spo, g) = quad;
        for term in spo.iter_mut().chain(g.iter_mut()) {
            if let Some(id) = term.bnode_id() {
                let renamed = self.term_for(id.as_str());
                *term = renamed;
            }
        }
    }

    fn term_for(&mut self, label: &str) -> Term {
        if let Some(t) = self.labels.get(label) {
            return t.clone();
        }
        let mut fresh = label.to_string();
        let mut n = 0;
        while self.taken.contains(&fresh) {
            n += 1;
            fresh = format!("{label}_{n}");
        }
        if n > 0 {
            log::debug!("blank node _:{label} renamed to _:{fresh}");
        }
        let t = Term::new_bnode_unchecked(fresh.as_str());
        self.taken.insert(fresh);
        self.labels.insert(label.to_string(), t.clone());
        t
    }
}

/// This intermediate type is required,
/// because Rio requires that the error type of triple_handler/quad_handler
/// implement From<TurtleError> (or whatever Rio-specific error returned by the parser).
enum RioStreamError<E1, E2>
where
    E2: Error + Send + Sync + 'static,
{
    /// Raised by the parser
    Source(E1),
    /// Raised by the handler
    Sink(ParseError<E2>),
}

impl<E1, E2> From<E1> for RioStreamError<E1, E2>
where
    E1: Error,
    E2: Error + Send + Sync + 'static,
{
    fn from(other: E1) -> Self {
        RioStreamError::Source(other)
    }
}

impl<E1, E2> From<RioStreamError<E1, E2>> for ParseError<E2>
where
    E1: Error + Send + Sync + 'static,
    E2: Error + Send + Sync + 'static,
{
    fn from(other: RioStreamError<E1, E2>) -> Self {
        match other {
            RioStreamError::Source(err) => ParseError::Syntax(Box::new(err)),
            RioStreamError::Sink(err) => err,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfhash_api::graph::Graph;
    use rdfhash_api::quad::Spog;
    use rdfhash_api::term::Term;
    use rio_turtle::{NQuadsParser, TurtleParser};
    use std::collections::BTreeSet;

    #[test]
    fn load_turtle() -> Result<(), Box<dyn std::error::Error>> {
        let ttl = r#"
            @prefix : <http://example.org/> .
            [ :name "Alice" ; :knows :bob ] .
            :bob :name "Bob"@en .
        "#;
        let mut g = BTreeSet::<Spog>::new();
        let n = load_triples(TurtleParser::new(ttl.as_bytes(), None), &mut g)?;
        assert_eq!(n, 3);
        assert_eq!(Graph::len(&g)?, 3);
        let bnodes = g.iter().filter(|q| q.0[0].is_blank_node()).count();
        assert_eq!(bnodes, 2);
        assert!(g.iter().all(|q| q.1.is_none()));
        Ok(())
    }

    #[test]
    fn load_nquads_with_duplicates() -> Result<(), Box<dyn std::error::Error>> {
        let nq = "<http://ex.org/s> <http://ex.org/p> \"o\" <http://ex.org/g> .\n\
                  <http://ex.org/s> <http://ex.org/p> \"o\" <http://ex.org/g> .\n\
                  <http://ex.org/s> <http://ex.org/p> \"o\" .\n";
        let mut g = BTreeSet::<Spog>::new();
        let n = load_quads(NQuadsParser::new(nq.as_bytes()), &mut g)?;
        assert_eq!(n, 2);
        let named: Vec<_> = g.iter().filter_map(|q| q.1.as_ref()).collect();
        assert_eq!(named, vec![&Term::new_iri_unchecked("http://ex.org/g")]);
        Ok(())
    }

    #[test]
    fn documents_do_not_share_blank_nodes() -> Result<(), Box<dyn std::error::Error>> {
        let mut g = BTreeSet::<Spog>::new();
        load_triples(TurtleParser::new(r#"_:x <http://ex.org/n> "a" ."#.as_bytes(), None), &mut g)?;
        load_triples(
            TurtleParser::new(
                r#"_:x <http://ex.org/n> "b" ; <http://ex.org/m> _:x . _:x_1 <http://ex.org/n> "c" ."#
                    .as_bytes(),
                None,
            ),
            &mut g,
        )?;
        assert_eq!(g.len(), 4);
        let subjects: BTreeSet<_> = g.iter().map(|q| q.0[0].clone()).collect();
        assert_eq!(
            subjects,
            ["x", "x_1", "x_1_1"]
                .into_iter()
                .map(Term::new_bnode_unchecked)
                .collect()
        );
        // a label is renamed consistently within a document
        let x1 = Term::new_bnode_unchecked("x_1");
        assert!(g.contains(&([x1.clone(), Term::new_iri_unchecked("http://ex.org/m"), x1], None)));
        Ok(())
    }

    #[test]
    fn anonymous_nodes_are_kept_apart() -> Result<(), Box<dyn std::error::Error>> {
        let mut g = BTreeSet::<Spog>::new();
        for name in ["Alice", "Bob"] {
            let ttl = format!("[ <http://ex.org/n> {name:?} ] .");
            load_triples(TurtleParser::new(ttl.as_bytes(), None), &mut g)?;
        }
        let subjects: BTreeSet<_> = g.iter().map(|q| q.0[0].clone()).collect();
        assert_eq!(subjects.len(), 2);
        Ok(())
    }

    #[test]
    fn syntax_error() {
        let mut g = BTreeSet::<Spog>::new();
        let res = load_triples(TurtleParser::new("<a> <b> .".as_bytes(), None), &mut g);
        assert!(matches!(res, Err(ParseError::Syntax(_))));
    }

    #[test]
    fn quoted_triple_error() {
        let ttl = "<< <http://ex.org/a> <http://ex.org/b> <http://ex.org/c> >> <http://ex.org/d> <http://ex.org/e> .";
        let mut g = BTreeSet::<Spog>::new();
        let res = load_triples(TurtleParser::new(ttl.as_bytes(), None), &mut g);
        assert!(matches!(res, Err(ParseError::QuotedTriple(_))));
    }
}
