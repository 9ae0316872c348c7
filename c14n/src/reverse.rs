//! I provide [`unhash_subjects`], which replaces hashed IRIs with fresh blank nodes.
use std::collections::{BTreeMap, BTreeSet};

use rdfhash_api::graph::MutableGraph;
use rdfhash_api::quad::Spog;
use rdfhash_api::term::{BnodeId, Term};

use crate::options::HashOptions;
use crate::template::TemplateMatcher;
use crate::HashError;

/// Replace every IRI recognized by `matcher` (in subject, predicate or object position)
/// with a fresh blank node, and return the association of each IRI with its blank node.
///
/// Blank nodes are labelled with the [prefix](HashOptions::bnode_prefix) of `options`
/// followed by an increasing counter, skipping labels already used in `graph`.
/// Quads are visited in the order of the store,
/// and an IRI occurring several times always gets the same blank node.
/// Graph names are never changed.
pub fn unhash_subjects<G: MutableGraph>(
    graph: &mut G,
    matcher: &TemplateMatcher,
    options: &HashOptions,
) -> Result<BTreeMap<Term, Term>, HashError<G::Error>> {
    let quads: Vec<Spog> = graph
        .quads()
        .collect::<Result<_, _>>()
        .map_err(HashError::Graph)?;
    let mut labels = Labels::new(options.bnode_prefix(), &quads);
    let mut mapping = BTreeMap::new();
    let mut rewritten = vec![];
    for quad in quads {
        let mut new = quad.clone();
        let mut changed = false;
        for term in new.0.iter_mut() {
            if !matcher.matches_term(term) {
                continue;
            }
            let bnode = match mapping.get(term) {
                Some(bnode) => Term::clone(bnode),
                None => {
                    let bnode = labels.fresh()?;
                    mapping.insert(term.clone(), bnode.clone());
                    bnode
                }
            };
            *term = bnode;
            changed = true;
        }
        if changed {
            rewritten.push((quad, new));
        }
    }
    for (old, _) in &rewritten {
        graph.remove(old).map_err(HashError::Graph)?;
    }
    for (_, new) in rewritten {
        graph.insert(new).map_err(HashError::Graph)?;
    }
    log::info!("replaced {} hashed IRI(s) with blank nodes", mapping.len());
    Ok(mapping)
}

/// Allocator of fresh blank node labels.
struct Labels<'a> {
    prefix: &'a str,
    counter: usize,
    used: BTreeSet<String>,
}

impl<'a> Labels<'a> {
    fn new(prefix: &'a str, quads: &[Spog]) -> Self {
        let used = quads
            .iter()
            .flat_map(|q| q.0.iter().chain(q.1.iter()))
            .filter_map(|t| t.bnode_id())
            .map(|id| id.to_string())
            .collect();
        Labels {
            prefix,
            counter: 0,
            used,
        }
    }

    fn fresh<E>(&mut self) -> Result<Term, HashError<E>>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        loop {
            let label = format!("{}{}", self.prefix, self.counter);
            self.counter += 1;
            if !self.used.contains(&label) {
                return Ok(BnodeId::new(label)?.into());
            }
        }
    }
}
