use super::*;
use std::collections::BTreeSet;
use test_case::test_case;

fn en() -> LanguageTag {
    LanguageTag::new("en").unwrap()
}

#[test]
fn plain_literal_is_xsd_string() {
    let t1 = Term::new_literal("a");
    let t2 = Term::new_literal_dt("a", Iri::new(xsd::string).unwrap());
    assert_eq!(t1, t2);
    assert_eq!(t1.datatype().unwrap(), xsd::string);
}

#[test]
fn language_string_datatype() {
    let t = Term::new_literal_lang("chat", LanguageTag::new("fr").unwrap());
    assert!(t.is_literal());
    assert_eq!(t.lexical_form(), Some("chat"));
    assert_eq!(t.datatype().unwrap(), rdf::langString);
    assert_eq!(t.language_tag().unwrap(), "fr");
}

#[test]
fn kinds() {
    assert_eq!(Term::new_iri("http://ex.org/").unwrap().kind(), TermKind::Iri);
    assert_eq!(Term::new_bnode("b1").unwrap().kind(), TermKind::BlankNode);
    assert_eq!(Term::new_literal("x").kind(), TermKind::Literal);
    assert_eq!(Term::new_variable("v").unwrap().kind(), TermKind::Variable);
}

#[test]
fn order_is_kind_first() {
    let set: BTreeSet<Term> = [
        Term::new_literal("a"),
        Term::new_bnode("a").unwrap(),
        Term::new_iri("http://z.org/").unwrap(),
    ]
    .into_iter()
    .collect();
    let kinds: Vec<_> = set.iter().map(Term::kind).collect();
    assert_eq!(
        kinds,
        vec![TermKind::Iri, TermKind::BlankNode, TermKind::Literal]
    );
}

#[test_case(Term::new_iri_unchecked("http://ex.org/a"), false, "<http://ex.org/a>"; "iri")]
#[test_case(Term::new_bnode_unchecked("b0"), false, "_:b0"; "bnode")]
#[test_case(Term::new_literal("hello"), false, "\"hello\""; "plain")]
#[test_case(Term::new_literal("hello"), true, "\"hello\"^^<http://www.w3.org/2001/XMLSchema#string>"; "plain expanded")]
#[test_case(Term::new_literal_dt("42", Iri::new_unchecked(xsd::integer)), false, "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"; "typed")]
#[test_case(Term::new_literal_lang("hi", en()), false, "\"hi\"@en"; "lang")]
#[test_case(Term::new_literal_lang("hi", en()), true, "\"hi\"^^<http://www.w3.org/1999/02/22-rdf-syntax-ns#langString>@en"; "lang expanded")]
#[test_case(Term::new_variable("x").unwrap(), false, "?x"; "variable")]
fn canonical(term: Term, expand: bool, expected: &str) {
    assert_eq!(term.to_canonical(expand), expected);
}

#[test_case("a\"b", "\"a\\\"b\""; "quote")]
#[test_case("a\\b", "\"a\\\\b\""; "backslash")]
#[test_case("a\nb\tc", "\"a\\nb\\tc\""; "newline and tab")]
#[test_case("\u{1}", "\"\\u0001\""; "control")]
#[test_case("\u{7f}", "\"\\u007F\""; "delete")]
#[test_case("é", "\"é\""; "non ascii")]
fn escaping(lex: &str, expected: &str) {
    assert_eq!(Term::new_literal(lex).to_canonical(false), expected);
}

#[test]
fn display_is_ntriples() {
    let t = Term::new_literal_lang("hi", en());
    assert_eq!(format!("{t}"), "\"hi\"@en");
}
