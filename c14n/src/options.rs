//! Configuration of [`hash_subjects`](crate::subjects::hash_subjects)
//! and [`unhash_subjects`](crate::reverse::unhash_subjects).
use crate::digest::{Method, MethodSpec};
use crate::template::Template;

/// The prefix of the blank nodes created by the reverse mapping, unless configured otherwise.
pub const DEFAULT_BNODE_PREFIX: &str = "b";

/// Options for hashing subjects, and for reverting their hashing.
#[derive(Clone, Debug)]
pub struct HashOptions {
    method: Method,
    length: Option<usize>,
    template: Template,
    atomic: bool,
    allow_nondeterministic: bool,
    bnode_prefix: String,
}

impl HashOptions {
    /// The digest method (default: `sha256`).
    pub fn method(&self) -> Method {
        self.method
    }

    /// The digest length, in bytes, for variable-length methods.
    pub fn length(&self) -> Option<usize> {
        self.length
    }

    /// The template rendering digests into IRIs (default: `{method}:{value}`).
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Whether the graph is only modified once the whole hashing succeeded (default: `true`).
    pub fn atomic(&self) -> bool {
        self.atomic
    }

    /// Whether randomized methods are accepted (default: `false`).
    pub fn allow_nondeterministic(&self) -> bool {
        self.allow_nondeterministic
    }

    /// The prefix of blank nodes created by the reverse mapping (default: `b`).
    pub fn bnode_prefix(&self) -> &str {
        &self.bnode_prefix
    }

    /// Build the default options.
    pub fn new() -> Self {
        HashOptions {
            method: Method::Sha256,
            length: None,
            template: Template::default(),
            atomic: true,
            allow_nondeterministic: false,
            bnode_prefix: DEFAULT_BNODE_PREFIX.to_string(),
        }
    }

    /// Set the digest method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the digest method and length from a [`MethodSpec`].
    ///
    /// A length already set on these options takes precedence.
    pub fn with_method_spec(mut self, spec: MethodSpec) -> Self {
        self.method = spec.method;
        self.length = self.length.or(spec.length);
        self
    }

    /// Set the digest length.
    pub fn with_length(mut self, length: Option<usize>) -> Self {
        self.length = length;
        self
    }

    /// Set the template.
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    /// Set whether the graph is modified only once hashing succeeded.
    pub fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Set whether randomized methods are accepted.
    pub fn with_allow_nondeterministic(mut self, allow: bool) -> Self {
        self.allow_nondeterministic = allow;
        self
    }

    /// Set the prefix of blank nodes created by the reverse mapping.
    pub fn with_bnode_prefix<T: Into<String>>(mut self, prefix: T) -> Self {
        self.bnode_prefix = prefix.into();
        self
    }

    /// Digest `input` with the configured method and length.
    pub(crate) fn digest(&self, input: &str) -> Result<String, crate::digest::DigestError> {
        self.method.hash_str(input, self.length)
    }
}

impl Default for HashOptions {
    fn default() -> Self {
        Self::new()
    }
}
