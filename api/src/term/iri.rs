//! I define the [`Iri`] wrapper type,
//! which guarantees that the underlying `str` is a valid absolute IRI.
use thiserror::Error;

wrap! {
    /// This wrapper guarantees that the underlying `str`
    /// is a valid absolute [IRI](https://www.ietf.org/rfc/rfc3987.txt).
    ///
    /// Content-derived identifiers such as `sha3_256:ab12...` are not valid IRIs
    /// according to RFC 3987 (the scheme contains an underscore);
    /// they are built with [`Iri::new_unchecked`].
    Iri, InvalidIri, |txt| oxiri::Iri::parse(txt).is_ok()
}

/// This error is raised when trying to parse an invalid IRI.
#[derive(Debug, Error)]
#[error("The given IRI '{0}' is not valid")]
pub struct InvalidIri(pub String);
