//! Common implementations for adapting
//! [RIO](https://docs.rs/rio_api/) serializers.
//!
//! Quads are handed to the formatter in the order of the given slice.
//! Rio formatters only group consecutive quads sharing a subject (or graph name),
//! so they are usually collected with [`sorted_triples`] or [`sorted_quads`] first,
//! which also makes the output reproducible.
use std::error::Error;
use std::io;

use rdfhash_api::graph::Graph;
use rdfhash_api::ns::xsd;
use rdfhash_api::quad::Spog;
use rdfhash_api::term::Term;
use rio_api::formatter::{QuadsFormatter, TriplesFormatter};
use rio_api::model::{
    BlankNode, GraphName, Literal, NamedNode, Quad as RioQuad, Term as RioTerm,
    Triple as RioTriple,
};
use thiserror::Error;

/// An error raised while serializing a graph.
#[derive(Debug, Error)]
pub enum SerializeError<E>
where
    E: Error + Send + Sync + 'static,
{
    /// The output could not be written.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The graph could not be read.
    #[error("error while reading graph: {0}")]
    Graph(#[source] E),
}

/// Convert the output of a Rio formatter into a `String`.
pub fn into_string<E>(buffer: Vec<u8>) -> Result<String, SerializeError<E>>
where
    E: Error + Send + Sync + 'static,
{
    String::from_utf8(buffer)
        .map_err(|e| SerializeError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Collect the triples of `graph` (as quads in the default graph),
/// sorted by subject, predicate and object.
///
/// Graph names are dropped, and the resulting duplicates removed.
pub fn sorted_triples<G: Graph>(graph: &G) -> Result<Vec<Spog>, G::Error> {
    let mut quads = graph
        .quads()
        .map(|res| res.map(|(spo, _)| (spo, None)))
        .collect::<Result<Vec<Spog>, _>>()?;
    quads.sort_unstable();
    quads.dedup();
    Ok(quads)
}

/// Collect the quads of `graph`, sorted by graph name
/// (default graph first), then subject, predicate and object.
pub fn sorted_quads<G: Graph>(graph: &G) -> Result<Vec<Spog>, G::Error> {
    let mut quads = graph.quads().collect::<Result<Vec<Spog>, _>>()?;
    quads.sort_unstable_by(|a, b| (&a.1, &a.0).cmp(&(&b.1, &b.0)));
    quads.dedup();
    Ok(quads)
}

/// Format the subject, predicate and object of each of `quads` using `tf`,
/// ignoring graph names.
///
/// NB: generalized quads (e.g. with a literal subject) are silently skipped.
pub fn format_triples<TF: TriplesFormatter>(tf: &mut TF, quads: &[Spog]) -> Result<(), TF::Error> {
    for (spo, _) in quads {
        let Some(rt) = rio_triple(spo) else {
            log::debug!("skipping generalized triple {} {} {}", spo[0], spo[1], spo[2]);
            continue;
        };
        tf.format(&rt)?;
    }
    Ok(())
}

/// Format each of `quads` using `qf`.
///
/// NB: generalized quads (e.g. with a literal subject) are silently skipped.
pub fn format_quads<QF: QuadsFormatter>(qf: &mut QF, quads: &[Spog]) -> Result<(), QF::Error> {
    for (spo, g) in quads {
        let graph_name = match g {
            None => None,
            Some(g) => match graph_name(g) {
                Some(gn) => Some(gn),
                None => continue,
            },
        };
        let Some(rt) = rio_triple(spo) else {
            continue;
        };
        qf.format(&RioQuad {
            subject: rt.subject,
            predicate: rt.predicate,
            object: rt.object,
            graph_name,
        })?;
    }
    Ok(())
}

fn rio_triple(spo: &[Term; 3]) -> Option<RioTriple<'_>> {
    let subject = match &spo[0] {
        Term::Iri(iri) => NamedNode { iri: iri.as_str() }.into(),
        Term::BlankNode(id) => BlankNode { id: id.as_str() }.into(),
        _ => return None,
    };
    let predicate = match &spo[1] {
        Term::Iri(iri) => NamedNode { iri: iri.as_str() },
        _ => return None,
    };
    Some(RioTriple {
        subject,
        predicate,
        object: object(&spo[2])?,
    })
}

fn object(t: &Term) -> Option<RioTerm<'_>> {
    Some(match t {
        Term::Iri(iri) => NamedNode { iri: iri.as_str() }.into(),
        Term::BlankNode(id) => BlankNode { id: id.as_str() }.into(),
        Term::LiteralDatatype(value, dt) if *dt == xsd::string => Literal::Simple { value: &**value }.into(),
        Term::LiteralDatatype(value, dt) => Literal::Typed {
            value: &**value,
            datatype: NamedNode { iri: dt.as_str() },
        }
        .into(),
        Term::LiteralLanguage(value, tag) => Literal::LanguageTaggedString {
            value: &**value,
            language: tag.as_str(),
        }
        .into(),
        Term::Variable(_) => return None,
    })
}

fn graph_name(t: &Term) -> Option<GraphName<'_>> {
    match t {
        Term::Iri(iri) => Some(NamedNode { iri: iri.as_str() }.into()),
        Term::BlankNode(id) => Some(BlankNode { id: id.as_str() }.into()),
        _ => None,
    }
}
