use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use rdfhash_api::graph::Graph;
use rdfhash_api::quad::Spog;
use rdfhash_api::term::Term;

use crate::hash::{refine_colour, Colours};
use crate::IsoError;

/// Computes whether two graphs are isomorphic.
///
/// Ground quads (without blank nodes) are compared directly.
/// The blank nodes of both graphs are then coloured by iterative refinement,
/// and a bijection respecting colours is searched by backtracking,
/// so the answer is exact even for graphs that refinement alone can not distinguish.
///
/// # Error
/// If an error occurs while traversing `g1` (resp. `g2`),
/// [`IsoError::Left`] (resp. [`IsoError::Right`]) is returned.
pub fn isomorphic_graphs<G1, G2>(g1: &G1, g2: &G2) -> Result<bool, IsoError<G1::Error, G2::Error>>
where
    G1: Graph,
    G2: Graph,
{
    let q1: BTreeSet<Spog> = g1.quads().collect::<Result<_, _>>().map_err(IsoError::Left)?;
    let q2: BTreeSet<Spog> = g2.quads().collect::<Result<_, _>>().map_err(IsoError::Right)?;

    // Graphs must have the same size
    if q1.len() != q2.len() {
        return Ok(false);
    }

    // both sides are sorted, so ground quads can be compared as vectors
    let (ground1, rest1): (Vec<&Spog>, Vec<&Spog>) = q1.iter().partition(|q| bnodes(q).is_empty());
    let (ground2, rest2): (Vec<&Spog>, Vec<&Spog>) = q2.iter().partition(|q| bnodes(q).is_empty());
    if ground1 != ground2 {
        return Ok(false);
    }
    if rest1.is_empty() {
        return Ok(true);
    }

    let occ1 = occurrences(&rest1);
    let occ2 = occurrences(&rest2);
    if occ1.len() != occ2.len() {
        return Ok(false);
    }
    let Some((c1, c2)) = refine(&rest1, &occ1, &rest2, &occ2) else {
        return Ok(false);
    };
    let targets: HashSet<&Spog> = rest2.iter().copied().collect();
    Ok(search(&rest1, &occ1, &c1, &c2, &targets))
}

/// The distinct blank nodes of `q`, in SPOG order.
fn bnodes(q: &Spog) -> Vec<&Term> {
    let mut v: Vec<&Term> = q.0.iter().chain(q.1.iter()).filter(|t| t.is_blank_node()).collect();
    v.dedup();
    v
}

/// Map each blank node to the indices of the quads where it occurs.
fn occurrences<'a>(quads: &[&'a Spog]) -> BTreeMap<&'a Term, Vec<usize>> {
    let mut occ: BTreeMap<&Term, Vec<usize>> = BTreeMap::new();
    for (i, q) in quads.iter().copied().enumerate() {
        for b in bnodes(q) {
            let v = occ.entry(b).or_default();
            if v.last() != Some(&i) {
                v.push(i);
            }
        }
    }
    occ
}

/// Refine the colours of blank nodes in both graphs in lockstep,
/// until the number of distinct colours is stable.
///
/// Return `None` as soon as the colour distributions of the two graphs differ.
fn refine<'a>(
    quads1: &[&Spog],
    occ1: &BTreeMap<&'a Term, Vec<usize>>,
    quads2: &[&Spog],
    occ2: &BTreeMap<&'a Term, Vec<usize>>,
) -> Option<(Colours<'a>, Colours<'a>)> {
    let mut c1: Colours = occ1.keys().map(|b| (*b, 0)).collect();
    let mut c2: Colours = occ2.keys().map(|b| (*b, 0)).collect();
    let mut distinct = 1;
    loop {
        let n1 = refine_step(quads1, occ1, &c1);
        let n2 = refine_step(quads2, occ2, &c2);
        if histogram(&n1) != histogram(&n2) {
            return None;
        }
        let d = n1.values().collect::<HashSet<_>>().len();
        c1 = n1;
        c2 = n2;
        if d <= distinct {
            return Some((c1, c2));
        }
        distinct = d;
    }
}

fn refine_step<'a>(quads: &[&Spog], occ: &BTreeMap<&'a Term, Vec<usize>>, colours: &Colours) -> Colours<'a> {
    occ.iter()
        .map(|(b, indices)| {
            let colour = refine_colour(b, indices.iter().map(|i| quads[*i]), colours);
            (*b, colour)
        })
        .collect()
}

fn histogram(colours: &Colours) -> BTreeMap<u64, usize> {
    let mut h = BTreeMap::new();
    for c in colours.values() {
        *h.entry(*c).or_insert(0) += 1;
    }
    h
}

/// Search a colour-preserving bijection from the blank nodes of `quads1`
/// to those of the second graph, mapping every quad of `quads1` into `targets`.
///
/// Blank nodes with the rarest colours are assigned first.
/// The search uses an explicit stack, one level per blank node.
fn search(
    quads1: &[&Spog],
    occ1: &BTreeMap<&Term, Vec<usize>>,
    c1: &Colours,
    c2: &Colours,
    targets: &HashSet<&Spog>,
) -> bool {
    let h2 = histogram(c2);
    let mut order: Vec<&Term> = occ1.keys().copied().collect();
    order.sort_by_key(|b| {
        let c = c1.get(b).copied().unwrap_or_default();
        (h2.get(&c).copied().unwrap_or_default(), c)
    });
    let candidates: Vec<Vec<&Term>> = order
        .iter()
        .map(|b| {
            let c = c1.get(b);
            let mut v: Vec<&Term> = c2.iter().filter(|(_, c2)| Some(*c2) == c).map(|(b2, _)| *b2).collect();
            v.sort();
            v
        })
        .collect();

    let n = order.len();
    let mut next = vec![0_usize; n];
    let mut assigned: Vec<Option<&Term>> = vec![None; n];
    let mut mapping: HashMap<&Term, &Term> = HashMap::new();
    let mut used: HashSet<&Term> = HashSet::new();
    let mut level = 0;
    loop {
        if level == n {
            return true;
        }
        let b = order[level];
        if let Some(prev) = assigned[level].take() {
            mapping.remove(b);
            used.remove(prev);
        }
        let mut advanced = false;
        while next[level] < candidates[level].len() {
            let c = candidates[level][next[level]];
            next[level] += 1;
            if used.contains(c) {
                continue;
            }
            mapping.insert(b, c);
            if consistent(b, quads1, occ1, &mapping, targets) {
                used.insert(c);
                assigned[level] = Some(c);
                level += 1;
                advanced = true;
                break;
            }
            mapping.remove(b);
        }
        if !advanced {
            if level == 0 {
                return false;
            }
            next[level] = 0;
            level -= 1;
        }
    }
}

/// Check that every quad involving `b` whose blank nodes are all mapped
/// is mapped to a quad of `targets`.
fn consistent(
    b: &Term,
    quads1: &[&Spog],
    occ1: &BTreeMap<&Term, Vec<usize>>,
    mapping: &HashMap<&Term, &Term>,
    targets: &HashSet<&Spog>,
) -> bool {
    let Some(indices) = occ1.get(b) else {
        return true;
    };
    indices.iter().all(|i| match map_quad(quads1[*i], mapping) {
        Some(mapped) => targets.contains(&mapped),
        None => true,
    })
}

fn map_quad(q: &Spog, mapping: &HashMap<&Term, &Term>) -> Option<Spog> {
    let map_term = |t: &Term| -> Option<Term> {
        if t.is_blank_node() {
            mapping.get(t).map(|m| (*m).clone())
        } else {
            Some(t.clone())
        }
    };
    let [s, p, o] = &q.0;
    let g = match &q.1 {
        None => None,
        Some(g) => Some(map_term(g)?),
    };
    Some(([map_term(s)?, map_term(p)?, map_term(o)?], g))
}
