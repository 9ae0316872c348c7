//! Parsers and serializers for the Turtle-family of RDF concrete syntaxes,
//! based on [`rio_turtle`](https://docs.rs/rio_turtle/).

pub mod parser;

pub mod serializer;
