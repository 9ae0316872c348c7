//! I define the [`VarName`] wrapper type,
//! which guarantees that the underlying `str`
//! satisfies the `VARNAME` rule in [SPARQL](https://www.w3.org/TR/sparql11-query/#rVARNAME).
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::_grammar::{pn_chars_u, PN_CHARS_COMBINING};

lazy_static! {
    /// `VARNAME ::= (PN_CHARS_U | [0-9]) (PN_CHARS_U | [0-9] | #x00B7 | [#x0300-#x036F] | [#x203F-#x2040])*`
    static ref VARNAME: Regex = Regex::new(&format!(
        r"^[{u}0-9][{u}0-9{PN_CHARS_COMBINING}]*$",
        u = pn_chars_u(),
    ))
    .unwrap();
}

wrap! {
    /// This wrapper guarantees that the underlying `str`
    /// satisfies the `VARNAME` rule in [SPARQL](https://www.w3.org/TR/sparql11-query/#rVARNAME).
    ///
    /// Variables only appear in patterns; they are never hashed.
    VarName, InvalidVarName, |txt| VARNAME.is_match(txt)
}

/// This error is raised when trying to build an invalid variable name.
#[derive(Debug, Error)]
#[error("invalid variable name {0:?}")]
pub struct InvalidVarName(pub String);
