//! Serializer for the [RDF/XML] concrete syntax of RDF,
//! based on [`rio_xml`].
//!
//! Triples are sorted before being written,
//! so that the same graph always produces the same document.
//!
//! [RDF/XML]: https://www.w3.org/TR/rdf-syntax-grammar/
use std::io;

use rdfhash_api::graph::Graph;
use rdfhash_rio::serializer::{format_triples, into_string, sorted_triples};
use rio_xml::RdfXmlFormatter;

pub use rdfhash_rio::serializer::SerializeError;

/// RDF/XML serializer configuration.
#[derive(Clone, Debug, Default)]
pub struct RdfXmlConfig {
    indentation: usize,
}

impl RdfXmlConfig {
    /// Size of the indentation to use in the serialization.
    /// (defaults to 0, meaning no indentation nor linebreaks)
    pub fn indentation(&self) -> usize {
        self.indentation
    }

    /// Build a new default [`RdfXmlConfig`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Transform an [`RdfXmlConfig`] by setting the [`indentation`](RdfXmlConfig::indentation).
    pub fn with_indentation(mut self, i: usize) -> Self {
        self.indentation = i;
        self
    }
}

/// RDF/XML serializer.
///
/// Graph names are dropped.
pub struct RdfXmlSerializer<W> {
    config: RdfXmlConfig,
    write: W,
}

impl<W> RdfXmlSerializer<W>
where
    W: io::Write,
{
    /// Build a new RDF/XML serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> Self {
        Self::new_with_config(write, RdfXmlConfig::default())
    }

    /// Build a new RDF/XML serializer writing to `write`, with the given config.
    pub fn new_with_config(write: W, config: RdfXmlConfig) -> Self {
        RdfXmlSerializer { config, write }
    }

    /// Borrow this serializer's configuration.
    pub fn config(&self) -> &RdfXmlConfig {
        &self.config
    }

    /// Serialize all quads of `graph` as triples.
    ///
    /// Fails if a predicate can not be split into a namespace and a local name.
    pub fn serialize_graph<G: Graph>(&mut self, graph: &G) -> Result<&mut Self, SerializeError<G::Error>> {
        let triples = sorted_triples(graph).map_err(SerializeError::Graph)?;
        let mut tf = if self.config.indentation > 0 {
            RdfXmlFormatter::with_indentation(&mut self.write, self.config.indentation)?
        } else {
            RdfXmlFormatter::new(&mut self.write)?
        };
        format_triples(&mut tf, &triples)?;
        tf.finish()?;
        Ok(self)
    }

    /// Consume this serializer and return the underlying write.
    pub fn into_inner(self) -> W {
        self.write
    }
}

/// Serialize `graph` in RDF/XML (indented with 2 spaces) into a `String`.
pub fn to_rdfxml<G: Graph>(graph: &G) -> Result<String, SerializeError<G::Error>> {
    let config = RdfXmlConfig::new().with_indentation(2);
    let mut ser = RdfXmlSerializer::new_with_config(Vec::new(), config);
    ser.serialize_graph(graph)?;
    into_string(ser.into_inner())
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::{GraphParser, RdfXmlParser};
    use rdfhash_api::graph::MutableGraph;
    use rdfhash_api::quad::Spog;
    use rdfhash_api::term::{Iri, LanguageTag, Term};
    use rdfhash_inmem::LightGraph;
    use rdfhash_isomorphism::isomorphic_graphs;

    fn graph() -> Result<LightGraph, Box<dyn std::error::Error>> {
        let p = Term::new_iri("http://example.org/ns/p")?;
        let q = Term::new_iri("http://example.org/ns/q")?;
        let a = Term::new_bnode("a")?;
        let quads: [Spog; 4] = [
            ([Term::new_iri("http://example.org/s")?, p.clone(), a.clone()], None),
            ([a.clone(), q.clone(), Term::new_literal("x")], None),
            (
                [
                    a.clone(),
                    q.clone(),
                    Term::new_literal_lang("y", LanguageTag::new("en")?),
                ],
                Some(Term::new_iri("http://example.org/g")?),
            ),
            (
                [
                    a,
                    p,
                    Term::new_literal_dt("1", Iri::new("http://www.w3.org/2001/XMLSchema#integer")?),
                ],
                None,
            ),
        ];
        let mut g = LightGraph::new();
        g.insert_all(quads)?;
        Ok(g)
    }

    #[test]
    fn roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let g1 = graph()?;
        for config in [RdfXmlConfig::new(), RdfXmlConfig::new().with_indentation(4)] {
            let mut ser = RdfXmlSerializer::new_with_config(Vec::new(), config);
            ser.serialize_graph(&g1)?;
            let out = String::from_utf8(ser.into_inner())?;
            let mut g2 = LightGraph::new();
            RdfXmlParser::default().parse_str(&out, &mut g2)?;
            // graph names are dropped
            let mut expected = LightGraph::new();
            for quad in g1.quads() {
                let (spo, _) = quad?;
                expected.insert((spo, None))?;
            }
            assert!(isomorphic_graphs(&expected, &g2)?, "{out}");
        }
        Ok(())
    }

    #[test]
    fn stringified_output_is_stable() -> Result<(), Box<dyn std::error::Error>> {
        let g = graph()?;
        let out = to_rdfxml(&g)?;
        assert!(out.starts_with("<?xml"));
        assert_eq!(out, to_rdfxml(&g)?);
        Ok(())
    }
}
