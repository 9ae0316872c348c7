//! Serializer for the [N-Quads] concrete syntax of RDF.
//!
//! **Important**:
//! the methods in this module accepting a [`Write`]
//! make no effort to minimize the number of write operations.
//! Hence, in most cased, they should be passed a [`BufWriter`].
//!
//! [N-Quads]: https://www.w3.org/TR/n-quads/
//! [`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
//! [`BufWriter`]: https://doc.rust-lang.org/std/io/struct.BufWriter.html
use std::io;

use rdfhash_api::graph::Graph;
use rdfhash_api::quad::{Quad, Spog};
use rdfhash_api::term::write_canonical;

use super::*;

/// N-Quads serializer.
pub struct NqSerializer<W> {
    config: LineConfig,
    write: W,
}

impl<W> NqSerializer<W>
where
    W: io::Write,
{
    /// Build a new N-Quads serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> Self {
        Self::new_with_config(write, LineConfig::default())
    }

    /// Build a new N-Quads serializer writing to `write`, with the given config.
    pub const fn new_with_config(write: W, config: LineConfig) -> Self {
        Self { config, write }
    }

    /// Borrow this serializer's configuration.
    pub const fn config(&self) -> &LineConfig {
        &self.config
    }

    /// Serialize all quads of `graph`.
    pub fn serialize_graph<G: Graph>(&mut self, graph: &G) -> Result<&mut Self, SerializeError<G::Error>> {
        let lines = lines(graph, &self.config, write_line).map_err(SerializeError::Graph)?;
        write_lines(&mut self.write, &lines)?;
        Ok(self)
    }

    /// Consume this serializer and return the underlying write.
    pub fn into_inner(self) -> W {
        self.write
    }
}

/// Serialize `graph` in N-Quads (with sorted lines) into a `String`.
pub fn to_nquads<G: Graph>(graph: &G) -> Result<String, G::Error> {
    Ok(lines(graph, &LineConfig::default(), write_line)?.concat())
}

fn write_line(quad: &Spog, buffer: &mut String) {
    write_spo(quad, buffer);
    if let Some(g) = quad.g() {
        buffer.push(' ');
        write_canonical(g, false, buffer);
    }
    buffer.push_str(" .\n");
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
