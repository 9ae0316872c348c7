//! I provide [`Selection`], which computes the set of subjects to hash.
use std::collections::BTreeSet;

use rdfhash_api::graph::{Graph, Pattern};
use rdfhash_api::ns::rdf;
use rdfhash_api::term::Term;

/// A selection of subjects, as the union of
/// * every blank node subject (unless disabled),
/// * explicitly listed subjects,
/// * every instance of the listed classes.
#[derive(Clone, Debug)]
pub struct Selection {
    blank_nodes: bool,
    subjects: BTreeSet<Term>,
    classes: BTreeSet<Term>,
}

impl Selection {
    /// A selection of every blank node subject.
    pub fn new() -> Self {
        Selection {
            blank_nodes: true,
            subjects: BTreeSet::new(),
            classes: BTreeSet::new(),
        }
    }

    /// Whether every blank node subject is selected.
    pub fn blank_nodes(&self) -> bool {
        self.blank_nodes
    }

    /// Set whether every blank node subject is selected.
    pub fn with_blank_nodes(mut self, b: bool) -> Self {
        self.blank_nodes = b;
        self
    }

    /// Add explicit subjects to this selection.
    pub fn with_subjects<I: IntoIterator<Item = Term>>(mut self, subjects: I) -> Self {
        self.subjects.extend(subjects);
        self
    }

    /// Add the instances of the given classes to this selection.
    pub fn with_instances_of<I: IntoIterator<Item = Term>>(mut self, classes: I) -> Self {
        self.classes.extend(classes);
        self
    }

    /// Compute the selected subjects of `graph`.
    ///
    /// Explicit subjects that are not used as subject in `graph` are left out.
    pub fn select<G: Graph>(&self, graph: &G) -> Result<BTreeSet<Term>, G::Error> {
        let subjects = graph.subjects()?;
        let mut selected = BTreeSet::new();
        if self.blank_nodes {
            selected.extend(subjects.iter().filter(|s| s.is_blank_node()).cloned());
        }
        for s in &self.subjects {
            if subjects.contains(s) {
                selected.insert(s.clone());
            } else {
                log::warn!("Selected subject not found in graph: {s}");
            }
        }
        let type_ = Term::new_iri_unchecked(rdf::type_);
        for c in &self.classes {
            for quad in graph.quads_matching(
                Pattern::Any,
                Pattern::Is(type_.clone()),
                Pattern::Is(c.clone()),
                Pattern::Any,
            ) {
                selected.insert(quad?.0[0].clone());
            }
        }
        log::debug!("selected {} subject(s)", selected.len());
        Ok(selected)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfhash_api::graph::test::*;
    use rdfhash_api::quad::Spog;

    fn graph() -> BTreeSet<Spog> {
        some_quads().into_iter().collect()
    }

    #[test]
    fn default_selects_blank_nodes() -> Result<(), Box<dyn std::error::Error>> {
        let selected = Selection::default().select(&graph())?;
        assert_eq!(selected, BTreeSet::from([bn("b1"), bn("b2")]));
        Ok(())
    }

    #[test]
    fn explicit_subjects() -> Result<(), Box<dyn std::error::Error>> {
        let selected = Selection::new()
            .with_blank_nodes(false)
            .with_subjects([ex("alice"), ex("nobody")])
            .select(&graph())?;
        assert_eq!(selected, BTreeSet::from([ex("alice")]));
        Ok(())
    }

    #[test]
    fn instances_of() -> Result<(), Box<dyn std::error::Error>> {
        let selection = Selection::new()
            .with_blank_nodes(false)
            .with_instances_of([ex("Person")]);
        assert!(!selection.blank_nodes());
        let selected = selection.select(&graph())?;
        assert_eq!(selected, BTreeSet::from([ex("alice"), bn("b1")]));
        Ok(())
    }

    #[test]
    fn union() -> Result<(), Box<dyn std::error::Error>> {
        let selected = Selection::new()
            .with_subjects([ex("name")])
            .with_instances_of([ex("Person")])
            .select(&graph())?;
        assert_eq!(
            selected,
            BTreeSet::from([ex("alice"), ex("name"), bn("b1"), bn("b2")])
        );
        Ok(())
    }
}
