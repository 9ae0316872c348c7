//! Identifier templates render a digest into an IRI,
//! and recognize IRIs that were rendered that way.
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use rdfhash_api::term::Term;
use regex::Regex;
use thiserror::Error;

use crate::digest::Method;

/// The template used when none is given.
pub const DEFAULT_TEMPLATE: &str = "{method}:{value}";

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{(method|value)\}").unwrap();
}

/// Error raised when building a [`Template`] or a [`TemplateMatcher`].
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template is not usable.
    #[error("invalid template {0:?}: it must contain {{value}}")]
    InvalidTemplate(String),
    /// The template contains a character that is not allowed in IRIs.
    #[error("invalid template {0:?}: {1:?} is not allowed in IRIs")]
    InvalidCharacter(String, char),
    /// The recognition regex could not be built.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

/// A pattern with the placeholders `{method}` and `{value}`,
/// such as `urn:{method}:{value}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pattern: String,
}

impl Template {
    /// Build a template from `pattern`, which must contain `{value}`.
    ///
    /// Outside of placeholders, `pattern` may not contain spaces or control characters,
    /// nor any of the characters that N-Triples forbids in IRIs
    /// (`<`, `>`, `"`, `{`, `}`, `|`, `^`, backtick and backslash).
    pub fn new<T: Into<String>>(pattern: T) -> Result<Self, TemplateError> {
        let pattern = pattern.into();
        if !pattern.contains("{value}") {
            return Err(TemplateError::InvalidTemplate(pattern));
        }
        let bad = PLACEHOLDER
            .split(&pattern)
            .flat_map(str::chars)
            .find(|c| *c <= ' ' || "<>\"{}|^`\\".contains(*c));
        if let Some(c) = bad {
            return Err(TemplateError::InvalidCharacter(pattern, c));
        }
        Ok(Template { pattern })
    }

    /// The pattern of this template.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Substitute `method` and `value` in this template.
    pub fn render(&self, method: Method, value: &str) -> String {
        PLACEHOLDER
            .replace_all(&self.pattern, |c: &regex::Captures| match &c[1] {
                "method" => method.name().to_string(),
                _ => value.to_string(),
            })
            .into_owned()
    }

    /// Build a matcher recognizing the IRIs rendered by this template
    /// with any of the `methods`.
    pub fn matcher(&self, methods: &[Method]) -> Result<TemplateMatcher, TemplateError> {
        let mut names: Vec<&str> = methods.iter().map(Method::name).collect();
        // longest first, so that no name shadows another one it is a prefix of
        names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let alternation = names.iter().map(|n| regex::escape(n)).collect::<Vec<_>>().join("|");

        let mut src = String::from("^");
        let mut seen_method = false;
        let mut seen_value = false;
        let mut last = 0;
        for m in PLACEHOLDER.find_iter(&self.pattern) {
            src.push_str(&regex::escape(&self.pattern[last..m.start()]));
            if m.as_str() == "{method}" {
                if seen_method {
                    src.push_str(&format!("(?:{alternation})"));
                } else {
                    src.push_str(&format!("(?P<method>{alternation})"));
                    seen_method = true;
                }
            } else if seen_value {
                src.push_str("(?:[0-9a-fA-F]+)");
            } else {
                src.push_str("(?P<value>[0-9a-fA-F]+)");
                seen_value = true;
            }
            last = m.end();
        }
        src.push_str(&regex::escape(&self.pattern[last..]));
        src.push('$');
        log::trace!("template {:?} matched by {}", self.pattern, src);
        Ok(TemplateMatcher {
            regex: Regex::new(&src)?,
        })
    }
}

impl Default for Template {
    fn default() -> Self {
        Template {
            pattern: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Template::new(pattern)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Recognizes the IRIs rendered by a [`Template`].
#[derive(Clone, Debug)]
pub struct TemplateMatcher {
    regex: Regex,
}

/// The parts of an identifier recognized by a [`TemplateMatcher`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captured {
    /// The method, if the template contains `{method}`.
    pub method: Option<Method>,
    /// The hexadecimal value.
    pub value: String,
}

impl TemplateMatcher {
    /// Whether `txt` was rendered by the template.
    pub fn is_match(&self, txt: &str) -> bool {
        self.regex.is_match(txt)
    }

    /// Extract the method and value from `txt`, if it was rendered by the template.
    pub fn captures(&self, txt: &str) -> Option<Captured> {
        let c = self.regex.captures(txt)?;
        Some(Captured {
            method: c.name("method").and_then(|m| m.as_str().parse().ok()),
            value: c.name("value")?.as_str().to_string(),
        })
    }

    /// Whether `term` is an IRI rendered by the template.
    ///
    /// Literals and blank nodes never match.
    pub fn matches_term(&self, term: &Term) -> bool {
        term.iri().is_some_and(|iri| self.is_match(iri))
    }
}
