//! In-memory implementations of [`Graph`] and [`MutableGraph`].
//!
//! Quads are stored as arrays of four [indices](Index);
//! the graph-name position uses [`Index::MAX`] for the default graph.
use std::collections::BTreeSet;
use std::iter::empty;

use rdfhash_api::graph::{Graph, MutableGraph, Pattern};
use rdfhash_api::quad::Spog;
use rdfhash_api::term::Term;

use crate::index::*;

type Quad<TI> = [<TI as TermIndex>::Index; 4];
type IndexPattern<I> = [Option<I>; 4];

/// A graph with a single quad index (SPOG).
/// Fast to load but slow to query, with a relatively low memory footprint.
#[derive(Clone, Debug, Default)]
pub struct GenericLightGraph<TI: TermIndex> {
    terms: TI,
    quads: BTreeSet<Quad<TI>>,
}

impl<TI: TermIndex + Default> GenericLightGraph<TI> {
    /// Build an empty graph.
    pub fn new() -> Self {
        Self {
            terms: TI::default(),
            quads: BTreeSet::new(),
        }
    }
}

impl<TI: TermIndex> Graph for GenericLightGraph<TI> {
    type Error = TI::Error;

    fn quads(&self) -> impl Iterator<Item = Result<Spog, Self::Error>> + '_ {
        self.quads.iter().map(|q| Ok(make_quad(&self.terms, q)))
    }

    fn quads_matching(
        &self,
        s: Pattern,
        p: Pattern,
        o: Pattern,
        g: Pattern<Option<Term>>,
    ) -> impl Iterator<Item = Result<Spog, Self::Error>> + '_ {
        let it: Box<dyn Iterator<Item = Result<Spog, Self::Error>> + '_> =
            match index_pattern(&self.terms, &s, &p, &o, &g) {
                None => Box::new(empty()),
                Some(pat) => {
                    let candidates: Box<dyn Iterator<Item = &Quad<TI>> + '_> = match pat[0] {
                        Some(si) => Box::new(scan(&self.quads, &[si])),
                        None => Box::new(self.quads.iter()),
                    };
                    Box::new(
                        candidates
                            .filter(move |q| matches_indices(q, &pat))
                            .map(|q| Ok(make_quad(&self.terms, q))),
                    )
                }
            };
        it
    }

    fn contains(&self, quad: &Spog) -> Result<bool, Self::Error> {
        Ok(get_indices(&self.terms, quad).is_some_and(|q| self.quads.contains(&q)))
    }

    fn len(&self) -> Result<usize, Self::Error> {
        Ok(self.quads.len())
    }

    fn is_empty(&self) -> Result<bool, Self::Error> {
        Ok(self.quads.is_empty())
    }
}

impl<TI: TermIndex> MutableGraph for GenericLightGraph<TI> {
    fn insert(&mut self, quad: Spog) -> Result<bool, Self::Error> {
        let q = ensure_indices(&mut self.terms, &quad)?;
        Ok(self.quads.insert(q))
    }

    fn remove(&mut self, quad: &Spog) -> Result<bool, Self::Error> {
        let Some(q) = get_indices(&self.terms, quad) else {
            return Ok(false);
        };
        Ok(self.quads.remove(&q))
    }
}

//

/// A heavily indexed graph (SPOG, POSG and OSPG).
/// Fast to query but slow to load, with a relatively high memory footprint.
#[derive(Clone, Debug, Default)]
pub struct GenericFastGraph<TI: TermIndex> {
    terms: TI,
    spog: BTreeSet<Quad<TI>>,
    posg: BTreeSet<Quad<TI>>,
    ospg: BTreeSet<Quad<TI>>,
}

impl<TI: TermIndex + Default> GenericFastGraph<TI> {
    /// Build an empty graph.
    pub fn new() -> Self {
        Self {
            terms: TI::default(),
            spog: BTreeSet::new(),
            posg: BTreeSet::new(),
            ospg: BTreeSet::new(),
        }
    }
}

impl<TI: TermIndex> Graph for GenericFastGraph<TI> {
    type Error = TI::Error;

    fn quads(&self) -> impl Iterator<Item = Result<Spog, Self::Error>> + '_ {
        self.spog.iter().map(|q| Ok(make_quad(&self.terms, q)))
    }

    fn quads_matching(
        &self,
        s: Pattern,
        p: Pattern,
        o: Pattern,
        g: Pattern<Option<Term>>,
    ) -> impl Iterator<Item = Result<Spog, Self::Error>> + '_ {
        let it: Box<dyn Iterator<Item = Result<Spog, Self::Error>> + '_> =
            match index_pattern(&self.terms, &s, &p, &o, &g) {
                None => Box::new(empty()),
                Some(pat) => {
                    let candidates: Box<dyn Iterator<Item = Quad<TI>> + '_> = match (pat[0], pat[1], pat[2]) {
                        (Some(si), Some(pi), _) => Box::new(scan(&self.spog, &[si, pi]).copied()),
                        (Some(si), None, Some(oi)) => Box::new(
                            scan(&self.ospg, &[oi, si]).map(|&[o, s, p, g]| [s, p, o, g]),
                        ),
                        (Some(si), None, None) => Box::new(scan(&self.spog, &[si]).copied()),
                        (None, Some(pi), Some(oi)) => Box::new(
                            scan(&self.posg, &[pi, oi]).map(|&[p, o, s, g]| [s, p, o, g]),
                        ),
                        (None, Some(pi), None) => Box::new(
                            scan(&self.posg, &[pi]).map(|&[p, o, s, g]| [s, p, o, g]),
                        ),
                        (None, None, Some(oi)) => Box::new(
                            scan(&self.ospg, &[oi]).map(|&[o, s, p, g]| [s, p, o, g]),
                        ),
                        (None, None, None) => Box::new(self.spog.iter().copied()),
                    };
                    Box::new(
                        candidates
                            .filter(move |q| matches_indices(q, &pat))
                            .map(|q| Ok(make_quad(&self.terms, &q))),
                    )
                }
            };
        it
    }

    fn contains(&self, quad: &Spog) -> Result<bool, Self::Error> {
        Ok(get_indices(&self.terms, quad).is_some_and(|q| self.spog.contains(&q)))
    }

    fn len(&self) -> Result<usize, Self::Error> {
        Ok(self.spog.len())
    }

    fn is_empty(&self) -> Result<bool, Self::Error> {
        Ok(self.spog.is_empty())
    }
}

impl<TI: TermIndex> MutableGraph for GenericFastGraph<TI> {
    fn insert(&mut self, quad: Spog) -> Result<bool, Self::Error> {
        let [is, ip, io, ig] = ensure_indices(&mut self.terms, &quad)?;
        if self.spog.insert([is, ip, io, ig]) {
            let i = self.posg.insert([ip, io, is, ig]);
            debug_assert!(i);
            let i = self.ospg.insert([io, is, ip, ig]);
            debug_assert!(i);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn remove(&mut self, quad: &Spog) -> Result<bool, Self::Error> {
        let Some([is, ip, io, ig]) = get_indices(&self.terms, quad) else {
            return Ok(false);
        };
        if self.spog.remove(&[is, ip, io, ig]) {
            let i = self.posg.remove(&[ip, io, is, ig]);
            debug_assert!(i);
            let i = self.ospg.remove(&[io, is, ip, ig]);
            debug_assert!(i);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// A graph with a single quad index, using `u32` indices.
pub type LightGraph = GenericLightGraph<SimpleTermIndex<u32>>;
/// A heavily indexed graph, using `u32` indices.
pub type FastGraph = GenericFastGraph<SimpleTermIndex<u32>>;

/// Flavors of Graph implementations with a smaller memory-footprint.
///
/// The trade-off is that these implementations can only contain a small number (2^16 - 1) of terms.
pub mod small {
    use crate::index::SimpleTermIndex;

    /// A graph with a single quad index.
    /// Fast to load but slow to query, with a relatively low memory footprint.
    pub type LightGraph = super::GenericLightGraph<SimpleTermIndex<u16>>;
    /// A heavily indexed graph.
    /// Fast to query but slow to load, with a relatively high memory footprint.
    pub type FastGraph = super::GenericFastGraph<SimpleTermIndex<u16>>;

}

fn make_quad<TI: TermIndex>(terms: &TI, q: &Quad<TI>) -> Spog {
    let [s, p, o, g] = *q;
    let g = (g != TI::Index::MAX).then(|| terms.get_term(g).clone());
    (
        [
            terms.get_term(s).clone(),
            terms.get_term(p).clone(),
            terms.get_term(o).clone(),
        ],
        g,
    )
}

fn get_indices<TI: TermIndex>(terms: &TI, quad: &Spog) -> Option<Quad<TI>> {
    let [s, p, o] = &quad.0;
    let g = match &quad.1 {
        None => TI::Index::MAX,
        Some(g) => terms.get_index(g)?,
    };
    Some([terms.get_index(s)?, terms.get_index(p)?, terms.get_index(o)?, g])
}

fn ensure_indices<TI: TermIndex>(terms: &mut TI, quad: &Spog) -> Result<Quad<TI>, TI::Error> {
    let [s, p, o] = &quad.0;
    let g = match &quad.1 {
        None => TI::Index::MAX,
        Some(g) => terms.ensure_index(g)?,
    };
    Ok([
        terms.ensure_index(s)?,
        terms.ensure_index(p)?,
        terms.ensure_index(o)?,
        g,
    ])
}

/// Translate term patterns into index patterns.
///
/// Return `None` if a constant is not in the term-index (so nothing can match).
fn index_pattern<TI: TermIndex>(
    terms: &TI,
    s: &Pattern,
    p: &Pattern,
    o: &Pattern,
    g: &Pattern<Option<Term>>,
) -> Option<IndexPattern<TI::Index>> {
    let mut pat = [None; 4];
    for (i, pi) in [s, p, o].into_iter().enumerate() {
        if let Pattern::Is(t) = pi {
            pat[i] = Some(terms.get_index(t)?);
        }
    }
    pat[3] = match g {
        Pattern::Any => None,
        Pattern::Is(None) => Some(TI::Index::MAX),
        Pattern::Is(Some(t)) => Some(terms.get_index(t)?),
    };
    Some(pat)
}

fn matches_indices<I: Index>(q: &[I; 4], pat: &IndexPattern<I>) -> bool {
    q.iter()
        .zip(pat.iter())
        .all(|(i, p)| p.map_or(true, |p| p == *i))
}

/// Iterate over the quads of `index` starting with `prefix`.
fn scan<'a, I: Index>(
    index: &'a BTreeSet<[I; 4]>,
    prefix: &[I],
) -> std::collections::btree_set::Range<'a, [I; 4]> {
    let mut lo = [I::ZERO; 4];
    let mut hi = [I::MAX; 4];
    lo[..prefix.len()].copy_from_slice(prefix);
    hi[..prefix.len()].copy_from_slice(prefix);
    index.range(lo..=hi)
}
