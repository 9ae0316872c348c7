//! I define [`Format`], the RDF syntaxes rdfhash can read and write.
use std::fmt;
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use oxiri::Iri;
use rdfhash_api::graph::{Graph, MutableGraph};
use rdfhash_rio::parser::{GraphParser, ParseError};
use rdfhash_turtle::parser::{
    nq::NQuadsParser, nt::NTriplesParser, trig::TriGParser, turtle::TurtleParser,
};
use rdfhash_turtle::serializer::nq::{to_nquads, NqSerializer};
use rdfhash_turtle::serializer::nt::{to_ntriples, NtSerializer};
use rdfhash_turtle::serializer::trig::{to_trig, TriGSerializer};
use rdfhash_turtle::serializer::turtle::{to_turtle, TurtleSerializer};
use rdfhash_turtle::serializer::SerializeError;
use rdfhash_xml::parser::RdfXmlParser;
use rdfhash_xml::serializer::{to_rdfxml, RdfXmlConfig, RdfXmlSerializer};
use thiserror::Error;

/// This error is raised when a format name is not recognized.
#[derive(Debug, Error)]
#[error("unknown RDF format: {0}")]
pub struct UnknownFormat(pub String);

/// An RDF syntax that can be parsed and serialized.
///
/// Serializers sort their output, so that it is reproducible.
/// Syntaxes without graph names (Turtle, N-Triples, RDF/XML) drop them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// [Turtle](https://www.w3.org/TR/turtle/)
    #[default]
    Turtle,
    /// [TriG](https://www.w3.org/TR/trig/)
    TriG,
    /// [N-Triples](https://www.w3.org/TR/n-triples/)
    NTriples,
    /// [N-Quads](https://www.w3.org/TR/n-quads/)
    NQuads,
    /// [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/)
    RdfXml,
}

impl Format {
    /// Every supported input format.
    pub const ALL: [Format; 5] = [
        Format::Turtle,
        Format::TriG,
        Format::NTriples,
        Format::NQuads,
        Format::RdfXml,
    ];

    /// The name of this format.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Turtle => "turtle",
            Format::TriG => "trig",
            Format::NTriples => "ntriples",
            Format::NQuads => "nquads",
            Format::RdfXml => "rdfxml",
        }
    }

    /// The media type of this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Format::Turtle => "text/turtle",
            Format::TriG => "application/trig",
            Format::NTriples => "application/n-triples",
            Format::NQuads => "application/n-quads",
            Format::RdfXml => "application/rdf+xml",
        }
    }

    /// The format usually associated with file extension `ext`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ttl" | "turtle" => Some(Format::Turtle),
            "trig" => Some(Format::TriG),
            "nt" => Some(Format::NTriples),
            "nq" => Some(Format::NQuads),
            "rdf" | "xml" | "owl" => Some(Format::RdfXml),
            _ => None,
        }
    }

    /// Guess the format of a file from its name.
    pub fn guess(path: &Path) -> Option<Self> {
        Self::from_extension(path.extension()?.to_str()?)
    }

    /// Parse `data` into `graph`, resolving relative IRIs against `base`.
    ///
    /// Return the number of quads actually inserted.
    pub fn parse_bufread<B, G>(
        &self,
        data: B,
        base: Option<Iri<String>>,
        graph: &mut G,
    ) -> Result<usize, ParseError<G::Error>>
    where
        B: BufRead,
        G: MutableGraph,
    {
        match self {
            Format::Turtle => TurtleParser { base }.parse_bufread(data, graph),
            Format::TriG => TriGParser { base }.parse_bufread(data, graph),
            Format::NTriples => NTriplesParser {}.parse_bufread(data, graph),
            Format::NQuads => NQuadsParser {}.parse_bufread(data, graph),
            Format::RdfXml => RdfXmlParser { base }.parse_bufread(data, graph),
        }
    }

    /// Parse the string `data` into `graph`, resolving relative IRIs against `base`.
    ///
    /// Return the number of quads actually inserted.
    pub fn parse_str<G: MutableGraph>(
        &self,
        data: &str,
        base: Option<Iri<String>>,
        graph: &mut G,
    ) -> Result<usize, ParseError<G::Error>> {
        self.parse_bufread(data.as_bytes(), base, graph)
    }

    /// Write `graph` into `write`.
    pub fn serialize<G: Graph, W: Write>(
        &self,
        graph: &G,
        write: W,
    ) -> Result<(), SerializeError<G::Error>> {
        match self {
            Format::Turtle => {
                TurtleSerializer::new(write).serialize_graph(graph)?;
            }
            Format::TriG => {
                TriGSerializer::new(write).serialize_graph(graph)?;
            }
            Format::NTriples => {
                NtSerializer::new(write).serialize_graph(graph)?;
            }
            Format::NQuads => {
                NqSerializer::new(write).serialize_graph(graph)?;
            }
            Format::RdfXml => {
                let config = RdfXmlConfig::new().with_indentation(2);
                RdfXmlSerializer::new_with_config(write, config).serialize_graph(graph)?;
            }
        }
        Ok(())
    }

    /// Serialize `graph` into a string.
    pub fn stringify<G: Graph>(&self, graph: &G) -> Result<String, SerializeError<G::Error>> {
        match self {
            Format::Turtle => to_turtle(graph),
            Format::TriG => to_trig(graph),
            Format::NTriples => to_ntriples(graph).map_err(SerializeError::Graph),
            Format::NQuads => to_nquads(graph).map_err(SerializeError::Graph),
            Format::RdfXml => to_rdfxml(graph),
        }
    }
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" | "text/turtle" => Ok(Format::Turtle),
            "trig" | "application/trig" => Ok(Format::TriG),
            "ntriples" | "nt" | "n-triples" | "application/n-triples" => Ok(Format::NTriples),
            "nquads" | "nq" | "n-quads" | "application/n-quads" => Ok(Format::NQuads),
            "rdfxml" | "rdf/xml" | "rdf" | "xml" | "application/rdf+xml" => Ok(Format::RdfXml),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
