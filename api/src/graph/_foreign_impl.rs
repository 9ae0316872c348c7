use std::collections::{BTreeSet, HashSet};
use std::convert::Infallible;
use std::hash::BuildHasher;

use super::*;

impl Graph for BTreeSet<Spog> {
    type Error = Infallible;

    fn quads(&self) -> impl Iterator<Item = Result<Spog, Self::Error>> + '_ {
        self.iter().cloned().map(Ok)
    }

    fn contains(&self, quad: &Spog) -> Result<bool, Self::Error> {
        Ok(BTreeSet::contains(self, quad))
    }

    fn len(&self) -> Result<usize, Self::Error> {
        Ok(BTreeSet::len(self))
    }

    fn is_empty(&self) -> Result<bool, Self::Error> {
        Ok(BTreeSet::is_empty(self))
    }
}

impl MutableGraph for BTreeSet<Spog> {
    fn insert(&mut self, quad: Spog) -> Result<bool, Self::Error> {
        Ok(BTreeSet::insert(self, quad))
    }

    fn remove(&mut self, quad: &Spog) -> Result<bool, Self::Error> {
        Ok(BTreeSet::remove(self, quad))
    }
}

impl<S: BuildHasher> Graph for HashSet<Spog, S> {
    type Error = Infallible;

    fn quads(&self) -> impl Iterator<Item = Result<Spog, Self::Error>> + '_ {
        self.iter().cloned().map(Ok)
    }

    fn contains(&self, quad: &Spog) -> Result<bool, Self::Error> {
        Ok(HashSet::contains(self, quad))
    }

    fn len(&self) -> Result<usize, Self::Error> {
        Ok(HashSet::len(self))
    }

    fn is_empty(&self) -> Result<bool, Self::Error> {
        Ok(HashSet::is_empty(self))
    }
}

impl<S: BuildHasher> MutableGraph for HashSet<Spog, S> {
    fn insert(&mut self, quad: Spog) -> Result<bool, Self::Error> {
        Ok(HashSet::insert(self, quad))
    }

    fn remove(&mut self, quad: &Spog) -> Result<bool, Self::Error> {
        Ok(HashSet::remove(self, quad))
    }
}
