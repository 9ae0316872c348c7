//! This crate is not usable alone,
//! but contains common code required by
//! [`rdfhash_turtle`](https://docs.rs/rdfhash_turtle/)
//! and
//! [`rdfhash_xml`](https://docs.rs/rdfhash_xml/).

pub mod model;
pub mod parser;
pub mod serializer;
