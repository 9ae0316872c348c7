//! Adapter for the TriG parser from [RIO](https://github.com/Tpt/rio/blob/master/turtle/src/trig.rs)
use std::io::BufRead;

use oxiri::Iri;
use rdfhash_api::graph::MutableGraph;
use rdfhash_rio::parser::*;
use rio_turtle::TriGParser as RioTriGParser;

/// TriG parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct TriGParser {
    /// The base IRI used by this parser to resolve relative IRI-references.
    pub base: Option<Iri<String>>,
}

impl GraphParser for TriGParser {
    fn parse_bufread<B, G>(&self, data: B, graph: &mut G) -> Result<usize, ParseError<G::Error>>
    where
        B: BufRead,
        G: MutableGraph,
    {
        load_quads(RioTriGParser::new(data, self.base.clone()), graph)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
