//! Adapter for the Turtle parser from [RIO](https://github.com/Tpt/rio/blob/master/turtle/src/turtle.rs)
use std::io::BufRead;

use oxiri::Iri;
use rdfhash_api::graph::MutableGraph;
use rdfhash_rio::parser::*;
use rio_turtle::TurtleParser as RioTurtleParser;

/// Turtle parser based on RIO.
///
/// All triples are inserted in the default graph.
#[derive(Clone, Debug, Default)]
pub struct TurtleParser {
    /// The base IRI used by this parser to resolve relative IRI-references.
    pub base: Option<Iri<String>>,
}

impl GraphParser for TurtleParser {
    fn parse_bufread<B, G>(&self, data: B, graph: &mut G) -> Result<usize, ParseError<G::Error>>
    where
        B: BufRead,
        G: MutableGraph,
    {
        load_triples(RioTurtleParser::new(data, self.base.clone()), graph)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
