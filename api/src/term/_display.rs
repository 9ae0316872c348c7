use crate::ns::xsd;

use super::Term;

/// Write `term` in its canonical textual form into `buffer`.
///
/// Without `expand_literals`, this is the N-Triples form of the term
/// (`xsd:string` datatypes are omitted).
/// With `expand_literals`, every literal carries its datatype:
/// * `"v"` becomes `"v"^^<http://www.w3.org/2001/XMLSchema#string>`,
/// * `"v"@en` becomes `"v"^^<http://www.w3.org/1999/02/22-rdf-syntax-ns#langString>@en`.
///
/// Variables are rendered as `?name`.
pub fn write_canonical(term: &Term, expand_literals: bool, buffer: &mut String) {
    match term {
        Term::Iri(iri) => {
            buffer.push('<');
            buffer.push_str(iri);
            buffer.push('>');
        }
        Term::BlankNode(id) => {
            buffer.push_str("_:");
            buffer.push_str(id);
        }
        Term::LiteralDatatype(lex, dt) => {
            write_lexical_form(lex, buffer);
            if expand_literals || dt.as_str() != xsd::string {
                buffer.push_str("^^<");
                buffer.push_str(dt);
                buffer.push('>');
            }
        }
        Term::LiteralLanguage(lex, tag) => {
            write_lexical_form(lex, buffer);
            if expand_literals {
                buffer.push_str("^^<");
                buffer.push_str(crate::ns::rdf::langString);
                buffer.push('>');
            }
            buffer.push('@');
            buffer.push_str(tag);
        }
        Term::Variable(name) => {
            buffer.push('?');
            buffer.push_str(name);
        }
    }
}

/// Write the lexical form `lex` between double quotes, escaped as in N-Triples.
pub fn write_lexical_form(lex: &str, buffer: &mut String) {
    buffer.push('"');
    for c in lex.chars() {
        match c {
            '"' => buffer.push_str("\\\""),
            '\\' => buffer.push_str("\\\\"),
            '\n' => buffer.push_str("\\n"),
            '\r' => buffer.push_str("\\r"),
            '\t' => buffer.push_str("\\t"),
            '\x08' => buffer.push_str("\\b"),
            '\x0c' => buffer.push_str("\\f"),
            '\x7f' => buffer.push_str("\\u007F"),
            c if c <= '\x1f' => buffer.push_str(&format!("\\u{:04X}", c as u8)),
            _ => buffer.push(c),
        }
    }
    buffer.push('"');
}
