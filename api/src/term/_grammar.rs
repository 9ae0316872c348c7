//! Character classes shared by the Turtle and SPARQL grammars,
//! used to validate blank node identifiers and variable names.

/// `PN_CHARS_BASE` without the ASCII letters.
const PN_CHARS_BASE: &str = r"\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}";

/// Combining characters, allowed anywhere but in first position.
pub(super) const PN_CHARS_COMBINING: &str = r"\u{B7}\u{300}-\u{36F}\u{203F}-\u{2040}";

/// The body of a character class matching `PN_CHARS_U`.
pub(super) fn pn_chars_u() -> String {
    format!("A-Za-z_{PN_CHARS_BASE}")
}

/// The body of a character class matching `PN_CHARS`.
pub(super) fn pn_chars() -> String {
    format!(r"{}\-0-9{PN_CHARS_COMBINING}", pn_chars_u())
}
