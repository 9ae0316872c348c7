//! Adapter for the [N-Triples] parser from [RIO](https://github.com/Tpt/rio/blob/master/turtle/src/ntriples.rs)
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/
use std::io::BufRead;

use rdfhash_api::graph::MutableGraph;
use rdfhash_rio::parser::*;
use rio_turtle::NTriplesParser as RioNTParser;

/// N-Triples parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct NTriplesParser {}

impl GraphParser for NTriplesParser {
    fn parse_bufread<B, G>(&self, data: B, graph: &mut G) -> Result<usize, ParseError<G::Error>>
    where
        B: BufRead,
        G: MutableGraph,
    {
        load_triples(RioNTParser::new(data), graph)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
