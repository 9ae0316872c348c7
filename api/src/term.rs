//! I define how RDF terms
//! (such as [IRIs](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! and [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal))
//! are represented in rdfhash.
//!
//! [`Term`] is a closed enum: every crate of rdfhash matches on it exhaustively.
//! Its text components are reference-counted,
//! so cloning a term (which the hashing engine does a lot) is cheap.
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::ns::{rdf, xsd};

#[macro_use]
mod _macro;

mod _display;
pub use _display::*;
mod _grammar;
mod bnode_id;
pub use bnode_id::*;
mod iri;
pub use iri::*;
mod language_tag;
pub use language_tag::*;
mod var_name;
pub use var_name::*;

#[cfg(test)]
mod test;

lazy_static! {
    static ref XSD_STRING: Iri = Iri::new_unchecked(xsd::string);
    static ref RDF_LANG_STRING: Iri = Iri::new_unchecked(rdf::langString);
}

/// An RDF term.
///
/// Terms are totally ordered (by kind first, in the order of the variants,
/// then by content) and hashable.
///
/// Literals without an explicit datatype or language tag
/// are stored with the datatype `xsd:string`,
/// so `"a"` and `"a"^^xsd:string` are the same term.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    #[allow(missing_docs)]
    Iri(Iri),
    #[allow(missing_docs)]
    BlankNode(BnodeId),
    /// A literal with a datatype (lexical form, datatype)
    LiteralDatatype(Arc<str>, Iri),
    /// A language-tagged string (lexical form, language tag)
    LiteralLanguage(Arc<str>, LanguageTag),
    #[allow(missing_docs)]
    Variable(VarName),
}

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
    /// A [SPARQL](https://www.w3.org/TR/sparql11-query/#sparqlQueryVariables) variable
    Variable,
}

impl Term {
    /// Build an IRI term, checking that `iri` is a valid absolute IRI.
    pub fn new_iri<T: Into<Arc<str>>>(iri: T) -> Result<Self, InvalidIri> {
        Iri::new(iri).map(Term::Iri)
    }

    /// Build an IRI term without checking `iri`.
    pub fn new_iri_unchecked<T: Into<Arc<str>>>(iri: T) -> Self {
        Term::Iri(Iri::new_unchecked(iri))
    }

    /// Build a blank node, checking that `id` is a valid blank node label.
    pub fn new_bnode<T: Into<Arc<str>>>(id: T) -> Result<Self, InvalidBnodeId> {
        BnodeId::new(id).map(Term::BlankNode)
    }

    /// Build a blank node without checking `id`.
    pub fn new_bnode_unchecked<T: Into<Arc<str>>>(id: T) -> Self {
        Term::BlankNode(BnodeId::new_unchecked(id))
    }

    /// Build a plain literal (with datatype `xsd:string`).
    pub fn new_literal<T: Into<Arc<str>>>(lex: T) -> Self {
        Term::LiteralDatatype(lex.into(), XSD_STRING.clone())
    }

    /// Build a typed literal.
    pub fn new_literal_dt<T: Into<Arc<str>>>(lex: T, datatype: Iri) -> Self {
        Term::LiteralDatatype(lex.into(), datatype)
    }

    /// Build a language-tagged string.
    pub fn new_literal_lang<T: Into<Arc<str>>>(lex: T, tag: LanguageTag) -> Self {
        Term::LiteralLanguage(lex.into(), tag)
    }

    /// Build a variable, checking that `name` is a valid variable name.
    pub fn new_variable<T: Into<Arc<str>>>(name: T) -> Result<Self, InvalidVarName> {
        VarName::new(name).map(Term::Variable)
    }

    /// Return the kind of RDF term that this [`Term`] represents.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Iri(_) => TermKind::Iri,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::LiteralDatatype(..) | Term::LiteralLanguage(..) => TermKind::Literal,
            Term::Variable(_) => TermKind::Variable,
        }
    }

    /// Return true if this [`Term`] is an IRI.
    #[inline]
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Return true if this [`Term`] is a blank node.
    #[inline]
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Return true if this [`Term`] is a literal.
    #[inline]
    pub fn is_literal(&self) -> bool {
        self.kind() == TermKind::Literal
    }

    /// Return true if this [`Term`] is a variable.
    #[inline]
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// If this [`Term`] is an IRI, return it.
    pub fn iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// If this [`Term`] is a blank node, return its label.
    pub fn bnode_id(&self) -> Option<&BnodeId> {
        match self {
            Term::BlankNode(id) => Some(id),
            _ => None,
        }
    }

    /// If this [`Term`] is a literal, return its lexical form.
    pub fn lexical_form(&self) -> Option<&str> {
        match self {
            Term::LiteralDatatype(lex, _) | Term::LiteralLanguage(lex, _) => Some(&**lex),
            _ => None,
        }
    }

    /// If this [`Term`] is a literal, return its datatype.
    ///
    /// Language-tagged strings have the datatype `rdf:langString`.
    pub fn datatype(&self) -> Option<&Iri> {
        match self {
            Term::LiteralDatatype(_, dt) => Some(dt),
            Term::LiteralLanguage(..) => Some(&*RDF_LANG_STRING),
            _ => None,
        }
    }

    /// If this [`Term`] is a language-tagged string, return its language tag.
    pub fn language_tag(&self) -> Option<&LanguageTag> {
        match self {
            Term::LiteralLanguage(_, tag) => Some(tag),
            _ => None,
        }
    }

    /// If this [`Term`] is a variable, return its name.
    pub fn variable(&self) -> Option<&VarName> {
        match self {
            Term::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Check whether this [`Term`] is the IRI `iri`.
    pub fn is_iri_eq(&self, iri: &str) -> bool {
        self.iri().is_some_and(|i| i.as_str() == iri)
    }

    /// Render this term in its canonical textual form.
    ///
    /// See [`write_canonical`] for the details.
    pub fn to_canonical(&self, expand_literals: bool) -> String {
        let mut buffer = String::new();
        write_canonical(self, expand_literals, &mut buffer);
        buffer
    }
}

impl From<Iri> for Term {
    fn from(value: Iri) -> Self {
        Term::Iri(value)
    }
}

impl From<BnodeId> for Term {
    fn from(value: BnodeId) -> Self {
        Term::BlankNode(value)
    }
}

impl From<VarName> for Term {
    fn from(value: VarName) -> Self {
        Term::Variable(value)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buffer = String::new();
        write_canonical(self, false, &mut buffer);
        f.write_str(&buffer)
    }
}
