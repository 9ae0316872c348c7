//! Serializers for the Turtle-family of syntaxes
//! ([N-Triples], [N-Quads], [Turtle] and [TriG]).
//!
//! Output is sorted by default, so that serializing the same graph
//! always produces the same text, whatever the store.
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [N-Quads]: https://www.w3.org/TR/n-quads/
//! [Turtle]: https://www.w3.org/TR/turtle/
//! [TriG]: https://www.w3.org/TR/trig/
use std::io;

use rdfhash_api::graph::Graph;
use rdfhash_api::quad::{Quad, Spog};
use rdfhash_api::term::write_canonical;

pub use rdfhash_rio::serializer::SerializeError;

pub mod nq;
pub mod nt;
pub mod trig;
pub mod turtle;

/// Line-based serializer configuration.
#[derive(Clone, Debug)]
pub struct LineConfig {
    pub(super) sorted: bool,
}

impl LineConfig {
    /// Transform a [`LineConfig`] by setting the [`sorted`](LineConfig::sorted) flag.
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Whether output lines are sorted.
    pub fn sorted(&self) -> bool {
        self.sorted
    }
}

impl Default for LineConfig {
    fn default() -> Self {
        LineConfig { sorted: true }
    }
}

/// Render every quad of `graph` as one line, using `line` to render each quad.
pub(crate) fn lines<G, F>(graph: &G, config: &LineConfig, line: F) -> Result<Vec<String>, G::Error>
where
    G: Graph,
    F: Fn(&Spog, &mut String),
{
    let mut lines = graph
        .quads()
        .map(|res| {
            res.map(|q| {
                let mut buffer = String::new();
                line(&q, &mut buffer);
                buffer
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if config.sorted {
        lines.sort_unstable();
        lines.dedup();
    }
    Ok(lines)
}

/// Write the subject, predicate and object of `quad`, separated by spaces.
pub(crate) fn write_spo(quad: &Spog, buffer: &mut String) {
    write_canonical(quad.s(), false, buffer);
    buffer.push(' ');
    write_canonical(quad.p(), false, buffer);
    buffer.push(' ');
    write_canonical(quad.o(), false, buffer);
}

/// Write all `lines` to `write`.
pub(crate) fn write_lines<W: io::Write>(write: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        write.write_all(line.as_bytes())?;
    }
    Ok(())
}

