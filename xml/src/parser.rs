//! Parser for the [RDF/XML] concrete syntax of RDF,
//! based on [`rio_xml`].
//!
//! [RDF/XML]: https://www.w3.org/TR/rdf-syntax-grammar/
use std::io::BufRead;

use oxiri::Iri;
use rdfhash_api::graph::MutableGraph;
use rdfhash_rio::parser::*;
use rio_xml::RdfXmlParser as RioRdfXmlParser;

pub use rdfhash_rio::parser::{GraphParser, ParseError};

/// RDF/XML parser based on RIO.
///
/// All triples are inserted in the default graph.
#[derive(Clone, Debug, Default)]
pub struct RdfXmlParser {
    /// The base IRI used by this parser to resolve relative IRI-references.
    pub base: Option<Iri<String>>,
}

impl GraphParser for RdfXmlParser {
    fn parse_bufread<B, G>(&self, data: B, graph: &mut G) -> Result<usize, ParseError<G::Error>>
    where
        B: BufRead,
        G: MutableGraph,
    {
        load_triples(RioRdfXmlParser::new(data, self.base.clone()), graph)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rdfhash_api::graph::{Graph, Pattern};
    use rdfhash_api::ns::rdf;
    use rdfhash_api::term::Term;
    use rdfhash_inmem::LightGraph;

    #[test]
    fn simple_xml_string() -> Result<(), Box<dyn std::error::Error>> {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
        <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
                 xmlns="http://example.org/ns/">
          <rdf:Description rdf:about="http://localhost/ex#me">
            <knows>
              <Person>
                <name>Alice</name>
              </Person>
            </knows>
          </rdf:Description>
        </rdf:RDF>
        "#;

        let mut g = LightGraph::new();
        let p = RdfXmlParser {
            base: Some(Iri::parse("http://localhost/ex".to_string())?),
        };
        let c = p.parse_str(xml, &mut g)?;
        assert_eq!(c, 3);
        let knows: Vec<_> = g
            .quads_matching(
                Pattern::Is(Term::new_iri("http://localhost/ex#me")?),
                Pattern::Is(Term::new_iri("http://example.org/ns/knows")?),
                Pattern::Any,
                Pattern::Any,
            )
            .collect::<Result<_, _>>()?;
        assert_eq!(knows.len(), 1);
        let person = knows[0].0[2].clone();
        assert!(person.is_blank_node());
        assert!(g.contains(&(
            [
                person.clone(),
                Term::new_iri_unchecked(rdf::type_),
                Term::new_iri("http://example.org/ns/Person")?
            ],
            None
        ))?);
        assert!(g.contains(&(
            [
                person,
                Term::new_iri("http://example.org/ns/name")?,
                Term::new_literal("Alice")
            ],
            None
        ))?);
        Ok(())
    }

    #[test]
    fn malformed_xml() {
        let mut g = LightGraph::new();
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
          <rdf:Description>
        </rdf:RDF>"#;
        let res = RdfXmlParser::default().parse_str(xml, &mut g);
        assert!(matches!(res, Err(ParseError::Syntax(_))));
    }
}
