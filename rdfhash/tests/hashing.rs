use std::collections::BTreeSet;

use rdfhash::api::prelude::*;
use rdfhash::c14n::{HashOptions, Method, Selection, Template};
use rdfhash::format::Format;
use rdfhash::inmem::FastGraph;
use rdfhash::isomorphism::isomorphic_graphs;
use test_case::test_case;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const JOHN: &str = "sha256:127da72af03d4e0e76de5518b65d9ae1d4ea859d71ebe0a5ec815104a6bf1836";

fn load(format: Format, data: &str) -> Result<FastGraph, Box<dyn std::error::Error>> {
    let mut g = FastGraph::new();
    format.parse_str(data, None, &mut g)?;
    Ok(g)
}

#[test_case(Format::Turtle, r#"[ <p:name> "John" ; <p:age> "24" ] ."# ; "turtle")]
#[test_case(Format::NTriples, "_:x <p:name> \"John\" .\n_:x <p:age> \"24\" .\n" ; "ntriples")]
#[test_case(Format::TriG, r#"{ _:someone <p:age> "24" ; <p:name> "John" . }"# ; "trig")]
fn same_description_same_iri(format: Format, data: &str) -> TestResult {
    let mut g = load(format, data)?;
    let hashed = rdfhash::hash_subjects(&mut g, &Selection::new(), &HashOptions::new())?;
    assert_eq!(hashed.values().collect::<Vec<_>>(), vec![&Term::new_iri(JOHN)?]);
    assert_eq!(
        Format::NTriples.stringify(&g)?,
        format!("<{JOHN}> <p:age> \"24\" .\n<{JOHN}> <p:name> \"John\" .\n"),
    );
    Ok(())
}

#[test]
fn rdfxml_and_turtle_agree() -> TestResult {
    let xml = r#"<?xml version="1.0"?>
        <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
                 xmlns:ex="http://example.org/">
          <rdf:Description>
            <ex:name>John</ex:name>
            <ex:knows rdf:resource="http://example.org/alice"/>
          </rdf:Description>
        </rdf:RDF>"#;
    let ttl = r#"
        @prefix ex: <http://example.org/> .
        [ ex:knows ex:alice ; ex:name "John" ] .
    "#;
    let mut g1 = load(Format::RdfXml, xml)?;
    let mut g2 = load(Format::Turtle, ttl)?;
    let h1 = rdfhash::hash_subjects(&mut g1, &Selection::new(), &HashOptions::new())?;
    let h2 = rdfhash::hash_subjects(&mut g2, &Selection::new(), &HashOptions::new())?;
    assert_eq!(
        h1.values().collect::<BTreeSet<_>>(),
        h2.values().collect::<BTreeSet<_>>()
    );
    assert_eq!(Format::NQuads.stringify(&g1)?, Format::NQuads.stringify(&g2)?);
    Ok(())
}

#[test]
fn instances_of_class() -> TestResult {
    let ttl = r#"
        @prefix : <http://example.org/> .
        :alice a :Person ; :name "Alice" .
        :acme a :Company ; :name "ACME" .
        [ :name "Anonymous" ] .
    "#;
    let mut g = load(Format::Turtle, ttl)?;
    let selection = Selection::new()
        .with_blank_nodes(false)
        .with_instances_of([Term::new_iri("http://example.org/Person")?]);
    let hashed = rdfhash::hash_subjects(&mut g, &selection, &HashOptions::new())?;
    assert_eq!(hashed.keys().collect::<Vec<_>>(), vec![&Term::new_iri("http://example.org/alice")?]);
    let subjects = g.subjects()?;
    assert!(subjects.contains(&Term::new_iri("http://example.org/acme")?));
    assert!(!subjects.contains(&Term::new_iri("http://example.org/alice")?));
    assert_eq!(subjects.iter().filter(|s| s.is_blank_node()).count(), 1);
    assert_eq!(g.len()?, 5);
    Ok(())
}

#[test]
fn hash_serialize_parse_unhash() -> TestResult {
    let trig = r#"
        @prefix : <http://example.org/> .
        :alice :knows [ :name "Bob" ; :address [ :city "Paris" ] ] .
        :g { [ :name "Carol"@en ; :knows :alice ] . }
    "#;
    let original = load(Format::TriG, trig)?;
    let mut g = original.clone();
    let options = HashOptions::new()
        .with_method(Method::Shake256)
        .with_length(Some(12))
        .with_template(Template::new("urn:hash:{method}:{value}")?);
    let hashed = rdfhash::hash_subjects(&mut g, &Selection::new(), &options)?;
    assert_eq!(hashed.len(), 3);
    assert!(hashed.values().all(|iri| iri.iri().is_some_and(|iri| {
        iri.as_str().starts_with("urn:hash:shake_256:") && iri.as_str().len() == 19 + 24
    })));

    let nquads = Format::NQuads.stringify(&g)?;
    let mut reloaded = load(Format::NQuads, &nquads)?;
    let unhashed = rdfhash::unhash_subjects(&mut reloaded, &options)?;
    assert_eq!(unhashed.len(), 3);
    assert!(isomorphic_graphs(&reloaded, &original)?);
    Ok(())
}

#[test]
fn unknown_template_placeholder() {
    assert!(Template::new("urn:{hash}").is_err());
}

#[test]
fn separate_documents_keep_separate_blank_nodes() -> TestResult {
    let alice = r#"_:x <p:name> "Alice" ."#;
    let bob = r#"_:x <p:name> "Bob" ."#;
    let mut g = FastGraph::new();
    Format::Turtle.parse_str(alice, None, &mut g)?;
    Format::Turtle.parse_str(bob, None, &mut g)?;
    let hashed = rdfhash::hash_subjects(&mut g, &Selection::new(), &HashOptions::new())?;
    assert_eq!(hashed.len(), 2);

    let mut expected = BTreeSet::new();
    for data in [alice, bob] {
        let mut single = load(Format::Turtle, data)?;
        let h = rdfhash::hash_subjects(&mut single, &Selection::new(), &HashOptions::new())?;
        expected.extend(h.into_values());
    }
    assert_eq!(hashed.into_values().collect::<BTreeSet<_>>(), expected);
    Ok(())
}

#[test_case(Format::Turtle)]
#[test_case(Format::TriG)]
#[test_case(Format::RdfXml)]
fn hashed_graph_survives_serialization(format: Format) -> TestResult {
    let ttl = r#"
        @prefix : <http://example.org/> .
        :alice :knows [ :name "Bob" ; :address [ :city "Paris" ] ] , [ :name "Carol"@en ] .
    "#;
    let mut g = load(Format::Turtle, ttl)?;
    rdfhash::hash_subjects(&mut g, &Selection::new(), &HashOptions::new())?;
    let out = format.stringify(&g)?;
    let reloaded = load(format, &out)?;
    assert!(isomorphic_graphs(&g, &reloaded)?, "{out}");
    assert_eq!(Format::NQuads.stringify(&g)?, Format::NQuads.stringify(&reloaded)?);
    Ok(())
}
