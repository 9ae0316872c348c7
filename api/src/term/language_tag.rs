//! I define the [`LanguageTag`] wrapper type,
//! which guarantees that the underlying `str`
//! satisfies the `LANGTAG` rule of [N-Triples](https://www.w3.org/TR/n-triples/#grammar-production-LANGTAG)
//! (without the leading `@`).
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// `LANGTAG ::= '@' [a-zA-Z]+ ('-' [a-zA-Z0-9]+)*`, minus the leading `@`.
    static ref LANG_TAG: Regex = Regex::new(r"^[a-zA-Z]+(?:-[a-zA-Z0-9]+)*$").unwrap();
}

wrap! {
    /// This wrapper guarantees that the underlying `str`
    /// satisfies the `LANGTAG` rule of [N-Triples](https://www.w3.org/TR/n-triples/#grammar-production-LANGTAG).
    ///
    /// This is more permissive than [BCP47](https://tools.ietf.org/search/bcp47)
    /// (subtags are not checked against the registry),
    /// but it is exactly what the line-based syntaxes can write back.
    ///
    /// Tags are compared as written; parsers keep the case found in the source.
    LanguageTag, InvalidLanguageTag, |txt| LANG_TAG.is_match(txt)
}

/// This error is raised when trying to build an invalid language tag.
#[derive(Debug, Error)]
#[error("invalid language tag {0:?}")]
pub struct InvalidLanguageTag(pub String);
