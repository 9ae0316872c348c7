//! I provide [`StagedGraph`], a view of a graph through a delta of pending changes.
use std::collections::{BTreeMap, BTreeSet};

use rdfhash_api::graph::{quad_matches, Graph, MutableGraph, Pattern};
use rdfhash_api::quad::Spog;
use rdfhash_api::term::Term;

/// A graph seen through a set of removed quads and a set of added quads.
///
/// The underlying graph is only modified by [`StagedGraph::commit`].
///
/// Invariants: `removed` is a subset of the underlying graph,
/// and `added` is disjoint from it.
pub(crate) struct StagedGraph<'a, G> {
    base: &'a mut G,
    removed: BTreeSet<Spog>,
    added: BTreeSet<Spog>,
    added_by_subject: BTreeMap<Term, BTreeSet<Spog>>,
    added_by_object: BTreeMap<Term, BTreeSet<Spog>>,
}

impl<'a, G: Graph> StagedGraph<'a, G> {
    pub fn new(base: &'a mut G) -> Self {
        StagedGraph {
            base,
            removed: BTreeSet::new(),
            added: BTreeSet::new(),
            added_by_subject: BTreeMap::new(),
            added_by_object: BTreeMap::new(),
        }
    }

    fn stage_insert(&mut self, quad: Spog) {
        self.added_by_subject
            .entry(quad.0[0].clone())
            .or_default()
            .insert(quad.clone());
        self.added_by_object
            .entry(quad.0[2].clone())
            .or_default()
            .insert(quad.clone());
        self.added.insert(quad);
    }

    fn unstage_insert(&mut self, quad: &Spog) -> bool {
        if !self.added.remove(quad) {
            return false;
        }
        if let Some(set) = self.added_by_subject.get_mut(&quad.0[0]) {
            set.remove(quad);
        }
        if let Some(set) = self.added_by_object.get_mut(&quad.0[2]) {
            set.remove(quad);
        }
        true
    }
}

impl<G: MutableGraph> StagedGraph<'_, G> {
    /// Apply the delta to the underlying graph: removals first, then insertions.
    pub fn commit(self) -> Result<(), G::Error> {
        log::debug!(
            "committing {} removal(s) and {} insertion(s)",
            self.removed.len(),
            self.added.len()
        );
        for quad in &self.removed {
            self.base.remove(quad)?;
        }
        for quad in self.added {
            self.base.insert(quad)?;
        }
        Ok(())
    }
}

impl<G: Graph> Graph for StagedGraph<'_, G> {
    type Error = G::Error;

    fn quads(&self) -> impl Iterator<Item = Result<Spog, Self::Error>> + '_ {
        self.base
            .quads()
            .filter(move |res| match res {
                Ok(quad) => !self.removed.contains(quad),
                Err(_) => true,
            })
            .chain(self.added.iter().cloned().map(Ok))
    }

    fn quads_matching(
        &self,
        s: Pattern,
        p: Pattern,
        o: Pattern,
        g: Pattern<Option<Term>>,
    ) -> impl Iterator<Item = Result<Spog, Self::Error>> + '_ {
        let candidates: Box<dyn Iterator<Item = &Spog> + '_> = match (&s, &o) {
            (Pattern::Is(st), _) => Box::new(self.added_by_subject.get(st).into_iter().flatten()),
            (_, Pattern::Is(ot)) => Box::new(self.added_by_object.get(ot).into_iter().flatten()),
            _ => Box::new(self.added.iter()),
        };
        let added: Vec<Spog> = candidates
            .filter(|quad| quad_matches(quad, &s, &p, &o, &g))
            .cloned()
            .collect();
        self.base
            .quads_matching(s, p, o, g)
            .filter(move |res| match res {
                Ok(quad) => !self.removed.contains(quad),
                Err(_) => true,
            })
            .chain(added.into_iter().map(Ok))
    }

    fn contains(&self, quad: &Spog) -> Result<bool, Self::Error> {
        if self.added.contains(quad) {
            return Ok(true);
        }
        if self.removed.contains(quad) {
            return Ok(false);
        }
        self.base.contains(quad)
    }

    fn len(&self) -> Result<usize, Self::Error> {
        Ok(self.base.len()? - self.removed.len() + self.added.len())
    }
}

impl<G: Graph> MutableGraph for StagedGraph<'_, G> {
    fn insert(&mut self, quad: Spog) -> Result<bool, Self::Error> {
        if self.removed.remove(&quad) {
            return Ok(true);
        }
        if self.added.contains(&quad) || self.base.contains(&quad)? {
            return Ok(false);
        }
        self.stage_insert(quad);
        Ok(true)
    }

    fn remove(&mut self, quad: &Spog) -> Result<bool, Self::Error> {
        if self.unstage_insert(quad) {
            return Ok(true);
        }
        if self.removed.contains(quad) || !self.base.contains(quad)? {
            return Ok(false);
        }
        self.removed.insert(quad.clone());
        Ok(true)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfhash_api::graph::test::*;

    fn base() -> BTreeSet<Spog> {
        some_quads().into_iter().collect()
    }

    #[test]
    fn base_is_untouched_until_commit() -> Result<(), Box<dyn std::error::Error>> {
        let mut g = base();
        let mut staged = StagedGraph::new(&mut g);
        let q_old = dq(ex("alice"), ex("name"), lit("Alice"));
        let q_new = dq(ex("alice"), ex("name"), lit("Alicia"));
        assert!(MutableGraph::remove(&mut staged, &q_old)?);
        assert!(!MutableGraph::remove(&mut staged, &q_old)?);
        assert!(MutableGraph::insert(&mut staged, q_new.clone())?);
        assert!(!MutableGraph::insert(&mut staged, q_new.clone())?);
        assert!(!Graph::contains(&staged, &q_old)?);
        assert!(Graph::contains(&staged, &q_new)?);
        assert_eq!(Graph::len(&staged)?, 12);
        let names: Vec<Spog> = staged
            .quads_matching(
                Pattern::Is(ex("alice")),
                Pattern::Is(ex("name")),
                Pattern::Any,
                Pattern::Is(None),
            )
            .collect::<Result<_, _>>()?;
        assert_eq!(names, vec![q_new.clone()]);
        drop(staged);
        assert_eq!(g, base());
        Ok(())
    }

    #[test]
    fn commit() -> Result<(), Box<dyn std::error::Error>> {
        let mut g = base();
        let mut staged = StagedGraph::new(&mut g);
        let removed = staged.remove_matching(Pattern::Is(bn("b1")), Pattern::Any, Pattern::Any, Pattern::Any)?;
        assert_eq!(removed, 4);
        let q = dq(ex("b"), ex("name"), lit("Bob"));
        MutableGraph::insert(&mut staged, q.clone())?;
        let by_object: Vec<Spog> = staged
            .quads_matching(Pattern::Any, Pattern::Any, Pattern::Is(lit("Bob")), Pattern::Any)
            .collect::<Result<_, _>>()?;
        assert_eq!(by_object, vec![q.clone()]);
        staged.commit()?;
        assert_eq!(g.len(), 9);
        assert!(g.contains(&q));
        assert!(!g.iter().any(|q| q.0[0] == bn("b1")));
        Ok(())
    }

    #[test]
    fn reinsert_removed() -> Result<(), Box<dyn std::error::Error>> {
        let mut g = base();
        let mut staged = StagedGraph::new(&mut g);
        let q = dq(bn("b2"), ex("city"), lit("Paris"));
        assert!(MutableGraph::remove(&mut staged, &q)?);
        assert!(MutableGraph::insert(&mut staged, q.clone())?);
        assert_eq!(staged.quads().count(), 12);
        staged.commit()?;
        assert_eq!(g, base());
        Ok(())
    }
}
