//! Serializer for the [Turtle] concrete syntax of RDF,
//! based on the formatter of [`rio_turtle`].
//!
//! Triples are sorted before being written,
//! so that the triples of a subject are grouped in a single statement,
//! and the same graph always produces the same text.
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
use std::io;

use rdfhash_api::graph::Graph;
use rdfhash_rio::serializer::{format_triples, into_string, sorted_triples};
use rio_turtle::TurtleFormatter;

use super::*;

/// Turtle serializer.
///
/// Graph names are dropped.
pub struct TurtleSerializer<W> {
    write: W,
}

impl<W> TurtleSerializer<W>
where
    W: io::Write,
{
    /// Build a new Turtle serializer writing to `write`.
    #[inline]
    pub fn new(write: W) -> Self {
        Self { write }
    }

    /// Serialize all quads of `graph` as triples.
    pub fn serialize_graph<G: Graph>(&mut self, graph: &G) -> Result<&mut Self, SerializeError<G::Error>> {
        let triples = sorted_triples(graph).map_err(SerializeError::Graph)?;
        let mut tf = TurtleFormatter::new(&mut self.write);
        format_triples(&mut tf, &triples)?;
        tf.finish()?;
        Ok(self)
    }

    /// Consume this serializer and return the underlying write.
    pub fn into_inner(self) -> W {
        self.write
    }
}

/// Serialize `graph` in Turtle into a `String`.
pub fn to_turtle<G: Graph>(graph: &G) -> Result<String, SerializeError<G::Error>> {
    let mut ser = TurtleSerializer::new(Vec::new());
    ser.serialize_graph(graph)?;
    into_string(ser.into_inner())
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
