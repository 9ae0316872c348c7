//! A [`TermIndex`] is a bidirectional association of [terms](`Term`) with short numeric [indices](`Index`).
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::error::Error;

use rdfhash_api::term::Term;
use thiserror::Error;

/// Abstraction of the short numeric indices representing [terms](`Term`) in a [`TermIndex`].
///
/// The value [`Index::MAX`] is never allocated to a term:
/// graphs use it to represent the default graph.
pub trait Index: Copy + std::fmt::Debug + Ord + std::hash::Hash {
    /// The smallest index
    const ZERO: Self;
    /// The greatest index, reserved for the default graph
    const MAX: Self;
    /// Convert `other` into an index, if it fits and is not reserved.
    fn from_usize(other: usize) -> Option<Self>;
    /// Convert this index into a `usize`.
    fn into_usize(self) -> usize;
}

impl Index for u32 {
    const ZERO: Self = 0;
    const MAX: Self = u32::MAX;
    fn from_usize(other: usize) -> Option<Self> {
        other.try_into().ok().filter(|i| *i != Self::MAX)
    }
    fn into_usize(self) -> usize {
        self as usize
    }
}

impl Index for u16 {
    const ZERO: Self = 0;
    const MAX: Self = u16::MAX;
    fn from_usize(other: usize) -> Option<Self> {
        other.try_into().ok().filter(|i| *i != Self::MAX)
    }
    fn into_usize(self) -> usize {
        self as usize
    }
}

/// A [`TermIndex`] is a bidirectional association of [terms](`Term`) with short numeric [indices](`Index`).
pub trait TermIndex {
    /// The type of indices used by this term-index.
    type Index: Index;
    /// The error raised when a term can not be added.
    type Error: Error + Send + Sync + 'static;

    /// Get the index corresponding to term `t`, if it exists.
    ///
    /// Return `None` if this term-index does not contain `t`.
    fn get_index(&self, t: &Term) -> Option<Self::Index>;
    /// Get the index corresponding to term `t`, adding it in the term-index if necessary.
    ///
    /// Returns an error if `t` can not be added in this term-index.
    fn ensure_index(&mut self, t: &Term) -> Result<Self::Index, Self::Error>;
    /// Get the term corresponding to index `i`.
    ///
    /// # Precondition
    /// `i` must have been returned previously by [`get_index`](TermIndex::get_index) or [`ensure_index`](TermIndex::ensure_index),
    /// otherwise this method may panic.
    fn get_term(&self, i: Self::Index) -> &Term;
}

/// A generic implementation of [`TermIndex`].
#[derive(Clone, Debug)]
pub struct SimpleTermIndex<I: Index> {
    t2i: HashMap<Term, I>,
    i2t: Vec<Term>,
}

impl<I: Index> SimpleTermIndex<I> {
    /// Build an empty term-index.
    pub fn new() -> Self {
        SimpleTermIndex {
            t2i: HashMap::new(),
            i2t: vec![],
        }
    }

    /// The number of terms in this term-index.
    pub fn len(&self) -> usize {
        self.i2t.len()
    }

    /// Whether this term-index contains no term.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<I: Index> Default for SimpleTermIndex<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Index> TermIndex for SimpleTermIndex<I> {
    type Index = I;
    type Error = TermIndexFullError;

    fn get_index(&self, t: &Term) -> Option<Self::Index> {
        self.t2i.get(t).copied()
    }

    fn ensure_index(&mut self, t: &Term) -> Result<Self::Index, Self::Error> {
        if let Some(i) = self.t2i.get(t) {
            return Ok(*i);
        }
        match self.t2i.entry(t.clone()) {
            Entry::Vacant(e) => {
                let i = I::from_usize(self.i2t.len())
                    .ok_or(TermIndexFullError(self.i2t.len()))?;
                self.i2t.push(e.key().clone());
                e.insert(i);
                Ok(i)
            }
            Entry::Occupied(e) => Ok(*e.get()),
        }
    }

    fn get_term(&self, i: Self::Index) -> &Term {
        &self.i2t[i.into_usize()]
    }
}

/// This error is raised when a [`SimpleTermIndex`] has no more room for new terms.
#[derive(Debug, Error)]
#[error("term index is full ({0} terms)")]
pub struct TermIndexFullError(pub usize);

#[cfg(test)]
mod test {
    use super::*;
    use rdfhash_api::term::LanguageTag;

    #[test]
    fn simple_term_index() -> Result<(), Box<dyn std::error::Error>> {
        let exa = Term::new_iri("https://example.com/ns/a")?;
        let exb = Term::new_iri("https://example.com/ns/b")?;
        let bn1 = Term::new_bnode("bn1")?;
        let hello = Term::new_literal("hello world");
        let hello_en = Term::new_literal_lang("hello world", LanguageTag::new("en")?);

        let mut sti = SimpleTermIndex::<u32>::new();
        assert!(sti.is_empty());
        assert_eq!(sti.len(), 0);

        assert_eq!(sti.get_index(&exa), None);
        assert_eq!(sti.get_index(&bn1), None);

        assert_eq!(sti.ensure_index(&exa)?, 0);
        assert!(!sti.is_empty());
        assert_eq!(sti.len(), 1);
        assert_eq!(sti.get_index(&exa), Some(0));
        assert_eq!(sti.get_index(&exb), None);

        assert_eq!(sti.ensure_index(&exb)?, 1);
        assert_eq!(sti.ensure_index(&bn1)?, 2);
        assert_eq!(sti.ensure_index(&hello)?, 3);
        assert_eq!(sti.ensure_index(&hello_en)?, 4);
        assert_eq!(sti.len(), 5);

        assert_eq!(sti.ensure_index(&exa)?, 0);
        assert_eq!(sti.ensure_index(&hello)?, 3);
        assert_eq!(sti.len(), 5);

        assert_eq!(sti.get_term(0), &exa);
        assert_eq!(sti.get_term(1), &exb);
        assert_eq!(sti.get_term(2), &bn1);
        assert_eq!(sti.get_term(3), &hello);
        assert_eq!(sti.get_term(4), &hello_en);
        Ok(())
    }

    #[test]
    fn max_is_reserved() {
        assert_eq!(<u16 as Index>::from_usize(65534), Some(65534));
        assert_eq!(<u16 as Index>::from_usize(65535), None);
        assert_eq!(<u16 as Index>::from_usize(70000), None);
    }

    #[cfg(feature = "all_tests")]
    #[test]
    fn full_small_term_index() {
        let mut sti = SimpleTermIndex::<u16>::new();
        for i in 0..u16::MAX {
            let t = Term::new_literal(i.to_string());
            assert_eq!(sti.ensure_index(&t).unwrap(), i);
        }
        assert!(sti.ensure_index(&Term::new_literal("one too many")).is_err());
    }
}
