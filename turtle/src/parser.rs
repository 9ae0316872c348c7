//! Parsers for the Turtle-family of RDF concrete syntaxes,
//! based on [`rio_turtle`](https://docs.rs/rio_turtle/).
//!
//! All parsers implement [`GraphParser`](rdfhash_rio::parser::GraphParser).

pub mod nq;
pub mod nt;
pub mod trig;
pub mod turtle;

pub use rdfhash_rio::parser::{GraphParser, ParseError};
