//! Convert types defined in Rio into rdfhash [terms](Term) and [quads](Spog).
//!
//! NB: since [`rio_api::model`] types have public fields,
//! they can not in general be trusted to contain valid data
//! (e.g. a valid IRI in [`NamedNode`]).
//!
//! However, their typical use-case is to be produced by a parser,
//! which ensures the validity of the underlying data,
//! so terms are built with the unchecked constructors
//! (validity is only asserted in debug builds).
use rio_api::model::{Quad as RioQuad, Term as RioTerm, Triple as RioTriple, *};
use rdfhash_api::quad::Spog;
use rdfhash_api::term::{BnodeId, Iri, LanguageTag, Term};
use thiserror::Error;

/// This error is raised when the parsed data contains
/// [RDF-star](https://www.w3.org/2021/12/rdf-star.html) quoted triples,
/// which rdfhash does not support.
#[derive(Debug, Error)]
#[error("quoted triples are not supported")]
pub struct QuotedTripleError;

/// Convert a Rio IRI.
pub fn named_node(n: NamedNode) -> Term {
    debug_assert!(Iri::new(n.iri).is_ok());
    Term::new_iri_unchecked(n.iri)
}

/// Convert a Rio blank node.
pub fn blank_node(b: BlankNode) -> Term {
    debug_assert!(BnodeId::new(b.id).is_ok());
    Term::new_bnode_unchecked(b.id)
}

/// Convert a Rio literal.
pub fn literal(l: Literal) -> Term {
    match l {
        Literal::Simple { value } => Term::new_literal(value),
        Literal::LanguageTaggedString { value, language } => {
            debug_assert!(LanguageTag::new(language).is_ok());
            Term::new_literal_lang(value, LanguageTag::new_unchecked(language))
        }
        Literal::Typed { value, datatype } => {
            debug_assert!(Iri::new(datatype.iri).is_ok());
            Term::new_literal_dt(value, Iri::new_unchecked(datatype.iri))
        }
    }
}

/// Convert a Rio subject.
pub fn subject(s: Subject) -> Result<Term, QuotedTripleError> {
    match s {
        Subject::NamedNode(n) => Ok(named_node(n)),
        Subject::BlankNode(b) => Ok(blank_node(b)),
        Subject::Triple(_) => Err(QuotedTripleError),
    }
}

/// Convert a Rio term.
pub fn term(t: RioTerm) -> Result<Term, QuotedTripleError> {
    match t {
        RioTerm::NamedNode(n) => Ok(named_node(n)),
        RioTerm::BlankNode(b) => Ok(blank_node(b)),
        RioTerm::Literal(l) => Ok(literal(l)),
        RioTerm::Triple(_) => Err(QuotedTripleError),
    }
}

/// Convert a Rio graph name.
pub fn graph_name(g: GraphName) -> Term {
    match g {
        GraphName::NamedNode(n) => named_node(n),
        GraphName::BlankNode(b) => blank_node(b),
    }
}

/// Convert a Rio triple into a quad in the default graph.
pub fn triple(t: RioTriple) -> Result<Spog, QuotedTripleError> {
    Ok((
        [subject(t.subject)?, named_node(t.predicate), term(t.object)?],
        None,
    ))
}

/// Convert a Rio quad.
pub fn quad(q: RioQuad) -> Result<Spog, QuotedTripleError> {
    Ok((
        [subject(q.subject)?, named_node(q.predicate), term(q.object)?],
        q.graph_name.map(graph_name),
    ))
}
