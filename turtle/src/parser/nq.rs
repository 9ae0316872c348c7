//! Adapter for the [N-Quads] parser from [RIO](https://github.com/Tpt/rio/blob/master/turtle/src/ntriples.rs)
//!
//! [N-Quads]: https://www.w3.org/TR/n-quads/
use std::io::BufRead;

use rdfhash_api::graph::MutableGraph;
use rdfhash_rio::parser::*;
use rio_turtle::NQuadsParser as RioNQParser;

/// N-Quads parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct NQuadsParser {}

impl GraphParser for NQuadsParser {
    fn parse_bufread<B, G>(&self, data: B, graph: &mut G) -> Result<usize, ParseError<G::Error>>
    where
        B: BufRead,
        G: MutableGraph,
    {
        load_quads(RioNQParser::new(data), graph)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
