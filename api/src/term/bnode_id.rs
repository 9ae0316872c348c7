//! I define the [`BnodeId`] wrapper type,
//! which guarantees that the underlying `str`
//! satisfies the `BLANK_NODE_LABEL` rule in [Turtle](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL)
//! (without the leading `_:`).
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::_grammar::{pn_chars, pn_chars_u};

lazy_static! {
    /// `BLANK_NODE_LABEL ::= '_:' (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`,
    /// minus the leading `_:`.
    static ref BNODE_ID: Regex = Regex::new(&format!(
        r"^[{u}0-9](?:[{c}.]*[{c}])?$",
        u = pn_chars_u(),
        c = pn_chars(),
    ))
    .unwrap();
}

wrap! {
    /// This wrapper guarantees that the underlying `str`
    /// satisfies the `BLANK_NODE_LABEL` rule in [Turtle](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL)
    /// (without the leading `_:`).
    ///
    /// Labels are kept as parsed: two graphs using different labels
    /// for the same structure are only equal up to [isomorphism].
    ///
    /// [isomorphism]: https://www.w3.org/TR/rdf11-concepts/#graph-isomorphism
    BnodeId, InvalidBnodeId, |txt| BNODE_ID.is_match(txt)
}

/// This error is raised when trying to build an invalid blank node identifier,
/// e.g. from a badly chosen label prefix.
#[derive(Debug, Error)]
#[error("invalid blank node identifier {0:?}")]
pub struct InvalidBnodeId(pub String);
