use super::*;
use rdfhash_api::quad::Spog;
use rdfhash_api::term::Term;
use std::collections::BTreeSet;
use std::error::Error;

type MyGraph = BTreeSet<Spog>;

fn iri(i: &str) -> Term {
    Term::new_iri_unchecked(i)
}

fn bn(id: &str) -> Term {
    Term::new_bnode_unchecked(id)
}

fn foaf(suffix: &str) -> Term {
    iri(&format!("http://xmlns.com/foaf/0.1/{suffix}"))
}

fn make_graph(quads: Vec<[Term; 4]>) -> MyGraph {
    quads.into_iter().map(|[s, p, o, g]| ([s, p, o], Some(g))).collect()
}

fn alice_knows_bob(alice: Term, bob: Term) -> MyGraph {
    [
        ([alice.clone(), foaf("name"), Term::new_literal("alice")], None),
        ([alice.clone(), foaf("mbox"), iri("mailto:alice@work.example")], None),
        ([alice.clone(), foaf("knows"), bob.clone()], None),
        ([bob, foaf("name"), Term::new_literal("bob")], Some(alice)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn no_bnode() -> Result<(), Box<dyn Error>> {
    let g1 = alice_knows_bob(iri("tag:alice"), iri("tag:bob"));
    assert!(isomorphic_graphs(&g1, &g1)?);

    let g2 = alice_knows_bob(iri("tag:a"), iri("tag:b"));
    assert!(!isomorphic_graphs(&g1, &g2)?);
    assert!(!isomorphic_graphs(&g2, &g1)?);

    let mut g3 = g1.clone();
    g3.pop_first();
    assert!(!isomorphic_graphs(&g1, &g3)?);
    assert!(!isomorphic_graphs(&g3, &g1)?);
    Ok(())
}

#[test]
fn simple() -> Result<(), Box<dyn Error>> {
    let g1 = alice_knows_bob(bn("alice"), bn("bob"));
    assert!(isomorphic_graphs(&g1, &g1)?);

    let g2 = alice_knows_bob(bn("a"), bn("b"));
    assert!(isomorphic_graphs(&g1, &g2)?);
    assert!(isomorphic_graphs(&g2, &g1)?);

    // same shape, but bob's name is in the default graph
    let mut g3 = g2.clone();
    let named = ([bn("b"), foaf("name"), Term::new_literal("bob")], Some(bn("a")));
    assert!(g3.remove(&named));
    g3.insert((named.0.clone(), None));
    assert!(!isomorphic_graphs(&g1, &g3)?);
    assert!(!isomorphic_graphs(&g3, &g1)?);

    // graph name is the wrong blank node
    let mut g4 = g2.clone();
    g4.remove(&named);
    g4.insert((named.0.clone(), Some(bn("b"))));
    assert!(!isomorphic_graphs(&g1, &g4)?);
    Ok(())
}

#[test]
fn different_literal() -> Result<(), Box<dyn Error>> {
    let g1 = alice_knows_bob(bn("alice"), bn("bob"));
    let mut g2 = g1.clone();
    g2.remove(&([bn("alice"), foaf("name"), Term::new_literal("alice")], None));
    g2.insert(([bn("alice"), foaf("name"), Term::new_literal("Alice")], None));
    assert!(!isomorphic_graphs(&g1, &g2)?);
    Ok(())
}

fn make_chain(ids: &'static str) -> Vec<[Term; 4]> {
    let rel = iri("tag:rel");
    let nodes: Vec<_> = (0..ids.len()).map(|i| bn(&ids[i..i + 1])).collect();
    let mut quads = Vec::with_capacity(ids.len() - 1);
    for i in 1..nodes.len() {
        quads.push([
            nodes[i - 1].clone(),
            rel.clone(),
            nodes[i].clone(),
            nodes[i - 1].clone(),
        ]);
    }
    quads
}

#[test]
fn chain() -> Result<(), Box<dyn Error>> {
    let g1 = make_graph(make_chain("abcdefghij"));
    assert!(isomorphic_graphs(&g1, &g1)?);
    let g2 = make_graph(make_chain("EDCBAJIHGF"));
    assert!(isomorphic_graphs(&g1, &g2)?);
    assert!(isomorphic_graphs(&g2, &g1)?);

    let g3 = make_graph(make_chain("abcdefghijk"));
    assert!(!isomorphic_graphs(&g1, &g3)?);
    Ok(())
}

#[test]
fn cycle2() -> Result<(), Box<dyn Error>> {
    let g1 = make_graph(make_chain("aba"));
    assert!(isomorphic_graphs(&g1, &g1)?);
    let g2 = make_graph(make_chain("BAB"));
    assert!(isomorphic_graphs(&g1, &g2)?);
    assert!(isomorphic_graphs(&g2, &g1)?);
    Ok(())
}

#[test]
fn cycle_long() -> Result<(), Box<dyn Error>> {
    let g1 = make_graph(make_chain("abcdefghia"));
    assert!(isomorphic_graphs(&g1, &g1)?);
    let g2 = make_graph(make_chain("EBCDAIGHFE"));
    assert!(isomorphic_graphs(&g1, &g2)?);
    assert!(isomorphic_graphs(&g2, &g1)?);

    let g3 = make_graph(make_chain("abcdefghija"));
    assert!(!isomorphic_graphs(&g1, &g3)?);
    Ok(())
}

#[test]
fn cycle_pathological() -> Result<(), Box<dyn Error>> {
    // Colour refinement alone can not tell a 7-cycle from a 3-cycle plus a 4-cycle:
    // every blank node has one incoming and one outgoing arc.
    let mut q1 = make_chain("abca");
    q1.append(&mut make_chain("defgd"));
    let g1 = make_graph(q1);

    let g2 = make_graph(make_chain("abcdefga"));
    assert!(!isomorphic_graphs(&g1, &g2)?);
    assert!(!isomorphic_graphs(&g2, &g1)?);

    let mut q3 = make_chain("ABCA");
    q3.append(&mut make_chain("GFEDG"));
    let g3 = make_graph(q3);
    assert!(isomorphic_graphs(&g1, &g3)?);
    Ok(())
}

fn make_clique(ids: &'static str) -> Vec<[Term; 4]> {
    let rel = iri("tag:rel");
    let nodes: Vec<_> = (0..ids.len()).map(|i| bn(&ids[i..i + 1])).collect();
    let mut quads = Vec::with_capacity(ids.len() * ids.len());
    for n1 in nodes.iter() {
        for n2 in nodes.iter() {
            quads.push([n1.clone(), rel.clone(), n2.clone(), n1.clone()]);
        }
    }
    quads
}

#[test]
fn clique() -> Result<(), Box<dyn Error>> {
    let g1 = make_graph(make_clique("abcde"));
    assert!(isomorphic_graphs(&g1, &g1)?);

    let g2 = make_graph(make_clique("ABCDE"));
    assert!(isomorphic_graphs(&g1, &g2)?);
    assert!(isomorphic_graphs(&g2, &g1)?);

    let g3 = make_graph(make_clique("abcd"));
    assert!(!isomorphic_graphs(&g1, &g3)?);
    Ok(())
}

fn make_tree(ids: &'static str) -> Vec<[Term; 4]> {
    let rel = iri("tag:rel");
    let nodes: Vec<_> = (0..ids.len()).map(|i| bn(&ids[i..i + 1])).collect();
    let mut quads = Vec::with_capacity(ids.len());
    let mut i = 0;
    while 2 * i < nodes.len() {
        quads.push([nodes[i].clone(), rel.clone(), nodes[2 * i].clone(), nodes[i].clone()]);
        if 2 * i + 1 < nodes.len() {
            quads.push([nodes[i].clone(), rel.clone(), nodes[2 * i + 1].clone(), nodes[i].clone()]);
        }
        i += 1;
    }
    quads
}

#[test]
fn tree() -> Result<(), Box<dyn Error>> {
    let g1 = make_graph(make_tree("abcdefghij"));
    assert!(isomorphic_graphs(&g1, &g1)?);

    let g2 = make_graph(make_tree("ABCDEFGHIJ"));
    assert!(isomorphic_graphs(&g1, &g2)?);
    assert!(isomorphic_graphs(&g2, &g1)?);

    let g3 = make_graph(make_tree("abcdefghijk"));
    assert!(!isomorphic_graphs(&g1, &g3)?);
    Ok(())
}

#[test]
fn predicate_and_gname() -> Result<(), Box<dyn Error>> {
    let rel = iri("tag:rel");
    let [b1, b2, b3, b4] = ["b1", "b2", "b3", "b4"].map(bn);

    let g1 = make_graph(vec![
        [b1.clone(), rel.clone(), b2.clone(), b3.clone()],
        [b2.clone(), rel.clone(), b3.clone(), b4.clone()],
        [rel.clone(), b1.clone(), b4.clone(), b3.clone()],
    ]);
    assert!(isomorphic_graphs(&g1, &g1)?);

    let g2 = make_graph(vec![
        [b2.clone(), rel.clone(), b3.clone(), b4.clone()],
        [b3.clone(), rel.clone(), b4.clone(), b1.clone()],
        [rel.clone(), b2.clone(), b1.clone(), b4.clone()],
    ]);
    assert!(isomorphic_graphs(&g1, &g2)?);
    assert!(isomorphic_graphs(&g2, &g1)?);

    let g3 = make_graph(vec![
        [b1.clone(), rel.clone(), b2.clone(), b3.clone()],
        [b2.clone(), rel.clone(), b3.clone(), b4.clone()],
        [rel.clone(), b2.clone(), b4.clone(), b3.clone()],
    ]);
    assert!(!isomorphic_graphs(&g2, &g3)?);
    assert!(!isomorphic_graphs(&g1, &g3)?);

    let g4 = make_graph(vec![
        [b1.clone(), rel.clone(), b2.clone(), b3.clone()],
        [b2.clone(), rel.clone(), b3.clone(), b4.clone()],
        [rel, b1, b4, b2],
    ]);
    assert!(!isomorphic_graphs(&g2, &g4)?);
    assert!(!isomorphic_graphs(&g1, &g4)?);
    Ok(())
}
