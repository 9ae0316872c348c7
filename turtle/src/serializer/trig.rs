//! Serializer for the [TriG] concrete syntax of RDF,
//! based on the formatter of [`rio_turtle`].
//!
//! Quads are sorted by graph name before being written,
//! so that each graph is written as a single block.
//!
//! [TriG]: https://www.w3.org/TR/trig/
use std::io;

use rdfhash_api::graph::Graph;
use rdfhash_rio::serializer::{format_quads, into_string, sorted_quads};
use rio_turtle::TriGFormatter;

use super::*;

/// TriG serializer.
pub struct TriGSerializer<W> {
    write: W,
}

impl<W> TriGSerializer<W>
where
    W: io::Write,
{
    /// Build a new TriG serializer writing to `write`.
    #[inline]
    pub fn new(write: W) -> Self {
        Self { write }
    }

    /// Serialize all quads of `graph`.
    pub fn serialize_graph<G: Graph>(&mut self, graph: &G) -> Result<&mut Self, SerializeError<G::Error>> {
        let quads = sorted_quads(graph).map_err(SerializeError::Graph)?;
        let mut qf = TriGFormatter::new(&mut self.write);
        format_quads(&mut qf, &quads)?;
        qf.finish()?;
        Ok(self)
    }

    /// Consume this serializer and return the underlying write.
    pub fn into_inner(self) -> W {
        self.write
    }
}

/// Serialize `graph` in TriG into a `String`.
pub fn to_trig<G: Graph>(graph: &G) -> Result<String, SerializeError<G::Error>> {
    let mut ser = TriGSerializer::new(Vec::new());
    ser.serialize_graph(graph)?;
    into_string(ser.into_inner())
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::trig::TriGParser;
    use crate::parser::GraphParser;
    use crate::serializer::turtle::test::TESTS;
    use rdfhash_api::graph::Pattern;
    use rdfhash_inmem::FastGraph;
    use rdfhash_isomorphism::isomorphic_graphs;

    #[test]
    fn roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let named = r#"
            PREFIX : <http://example.org/ns/>
            :alice :knows [ :name "Bob" ].
            :g1 { :alice :name "Alice". _:x :p :alice. }
            _:g2 { _:x :p [ :q 1 ]. }
            :g1 { :bob :name "Bob". }
        "#;
        for trig in TESTS.iter().chain([&named]) {
            let mut g1 = FastGraph::new();
            TriGParser::default().parse_str(trig, &mut g1)?;
            let out = to_trig(&g1)?;
            let mut g2 = FastGraph::new();
            TriGParser::default().parse_str(&out, &mut g2)?;
            assert!(isomorphic_graphs(&g1, &g2)?, "{trig}\n----\n{out}");
        }
        Ok(())
    }

    #[test]
    fn one_block_per_graph() -> Result<(), Box<dyn std::error::Error>> {
        let mut g = FastGraph::new();
        TriGParser::default().parse_str(
            "<tag:g> { <tag:a> <tag:p> <tag:b> } <tag:s> <tag:p> <tag:o> . <tag:g> { <tag:c> <tag:p> <tag:d> }",
            &mut g,
        )?;
        let out = to_trig(&g)?;
        assert_eq!(out.matches("<tag:g>").count(), 1);
        assert!(out.starts_with("<tag:s> <tag:p> <tag:o>"), "default graph first");
        let mut g2 = FastGraph::new();
        TriGParser::default().parse_str(&out, &mut g2)?;
        let in_g = g2
            .quads_matching(
                Pattern::Any,
                Pattern::Any,
                Pattern::Any,
                Pattern::Is(Some(rdfhash_api::term::Term::new_iri("tag:g")?)),
            )
            .count();
        assert_eq!(in_g, 2);
        Ok(())
    }
}
