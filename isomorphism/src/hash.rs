//! I define parameterized hashing functions,
//! where blank nodes are hashed according to a given colouring.
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use rdfhash_api::quad::Spog;
use rdfhash_api::term::Term;

/// The colour of each blank node.
pub type Colours<'a> = HashMap<&'a Term, u64>;

/// Hash this term, using `colours` for hashing blank nodes.
///
/// The blank node `context.0` is additionally marked with the position `context.1`,
/// so that a node's own occurrences are told apart from its neighbours'.
pub fn hash_term_with<H: Hasher>(t: &Term, colours: &Colours, context: (&Term, char), state: &mut H) {
    if t.is_blank_node() {
        '_'.hash(state);
        if t == context.0 {
            context.1.hash(state);
        }
        colours.get(t).hash(state);
    } else {
        t.hash(state);
    }
}

/// Hash a quad, from the point of view of the blank node `context`.
pub fn hash_quad_with(q: &Spog, colours: &Colours, context: &Term) -> u64 {
    let ([s, p, o], g) = q;
    let mut state = DefaultHasher::new();
    hash_term_with(s, colours, (context, 's'), &mut state);
    hash_term_with(p, colours, (context, 'p'), &mut state);
    hash_term_with(o, colours, (context, 'o'), &mut state);
    match g {
        None => (None as Option<i32>).hash(&mut state),
        Some(g) => hash_term_with(g, colours, (context, 'g'), &mut state),
    }
    state.finish()
}

/// Compute the next colour of `bnode`, from its current colour
/// and the hashes of the quads in which it occurs.
pub fn refine_colour<'a>(bnode: &Term, quads: impl Iterator<Item = &'a Spog>, colours: &Colours) -> u64 {
    let mut hashes: Vec<u64> = quads.map(|q| hash_quad_with(q, colours, bnode)).collect();
    hashes.sort_unstable();
    let mut state = DefaultHasher::new();
    colours.get(bnode).hash(&mut state);
    hashes.hash(&mut state);
    state.finish()
}
