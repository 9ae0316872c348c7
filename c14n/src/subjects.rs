//! I provide [`hash_subjects`], which replaces subjects of a graph
//! with IRIs derived from a digest of their description.
//!
//! The canonical text of a subject is made of one line per quad describing it,
//! of the form `<predicate> object.\n`, where literals always carry their datatype.
//! Lines are sorted (in codepoint order) and concatenated before being digested.
//! When the predicate or object of such a quad is itself a subject to hash,
//! it is hashed first, and its IRI is used in the canonical text.
use std::collections::{BTreeMap, BTreeSet};

use rdfhash_api::graph::{MutableGraph, Pattern};
use rdfhash_api::quad::Spog;
use rdfhash_api::term::{write_canonical, Term};

use crate::_stage::StagedGraph;
use crate::options::HashOptions;
use crate::HashError;

/// Map each hashed subject to the IRI that replaced it.
pub type HashedSubjects = BTreeMap<Term, Term>;

/// Replace every subject of `candidates` in `graph` with an IRI
/// derived from its description, as configured by `options`.
///
/// Candidates are processed in term order.
/// Candidates that are not used as subject in `graph` are skipped (with a warning).
///
/// # Errors
/// * [`HashError::CircularDependency`] if candidates refer to each other in a cycle
///   (including a candidate referring to itself);
/// * [`HashError::InvalidStructure`] if a candidate is described with a blank predicate;
/// * [`HashError::NonDeterministicMethod`] if the method is randomized,
///   unless [allowed](HashOptions::with_allow_nondeterministic);
/// * [`HashError::Digest`] if the method is misconfigured;
/// * [`HashError::Graph`] if `graph` fails.
///
/// If `options` are [atomic](HashOptions::atomic), `graph` is left untouched on error;
/// otherwise it may be partially rewritten.
pub fn hash_subjects<G: MutableGraph>(
    graph: &mut G,
    candidates: &BTreeSet<Term>,
    options: &HashOptions,
) -> Result<HashedSubjects, HashError<G::Error>> {
    check_method::<G::Error>(options)?;
    log::info!(
        "hashing {} candidate subject(s) with {}",
        candidates.len(),
        options.method()
    );
    let before = graph.len().map_err(HashError::Graph)?;
    let hashed = if options.atomic() {
        let mut staged = StagedGraph::new(graph);
        let hashed = Engine::new(&mut staged, candidates, options).run()?;
        staged.commit().map_err(HashError::Graph)?;
        hashed
    } else {
        Engine::new(graph, candidates, options).run()?
    };
    let after = graph.len().map_err(HashError::Graph)?;
    for (subject, iri) in &hashed {
        log::info!("{subject} => {iri}");
    }
    log::info!(
        "hashed {} subject(s), graph size {} -> {}",
        hashed.len(),
        before,
        after
    );
    Ok(hashed)
}

fn check_method<E>(options: &HashOptions) -> Result<(), HashError<E>>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let method = options.method();
    method.check_length(options.length())?;
    if !method.is_deterministic() {
        if !options.allow_nondeterministic() {
            return Err(HashError::NonDeterministicMethod(method.name().to_string()));
        }
        log::warn!("method {method} is not deterministic, hashing the same graph twice will give different IRIs");
    }
    Ok(())
}

/// A subject being hashed.
struct Frame {
    subject: Term,
    /// The quads describing the subject, already removed from the graph.
    quads: Vec<Spog>,
    /// Index in `quads` of the next quad to process.
    next: usize,
    lines: Vec<String>,
}

enum Resolution {
    Unchanged,
    Replaced(Term),
    /// A nested candidate was pushed on the stack, and must be hashed first.
    Deferred,
}

struct Engine<'a, G> {
    graph: &'a mut G,
    candidates: &'a BTreeSet<Term>,
    options: &'a HashOptions,
    hashed: HashedSubjects,
    /// Candidates without any quad.
    missing: BTreeSet<Term>,
    /// Subjects of the frames in `stack`.
    ancestors: BTreeSet<Term>,
    stack: Vec<Frame>,
}

impl<'a, G: MutableGraph> Engine<'a, G> {
    fn new(graph: &'a mut G, candidates: &'a BTreeSet<Term>, options: &'a HashOptions) -> Self {
        Engine {
            graph,
            candidates,
            options,
            hashed: BTreeMap::new(),
            missing: BTreeSet::new(),
            ancestors: BTreeSet::new(),
            stack: vec![],
        }
    }

    fn run(mut self) -> Result<HashedSubjects, HashError<G::Error>> {
        let candidates = self.candidates;
        for candidate in candidates {
            if self.hashed.contains_key(candidate) || self.missing.contains(candidate) {
                continue;
            }
            if self.open(candidate)? {
                self.drain()?;
            }
        }
        Ok(self.hashed)
    }

    /// Push a frame for `subject`, removing its quads from the graph.
    ///
    /// Return `false` if `subject` has no quad.
    fn open(&mut self, subject: &Term) -> Result<bool, HashError<G::Error>> {
        let quads: Vec<Spog> = self
            .graph
            .quads_matching(Pattern::Is(subject.clone()), Pattern::Any, Pattern::Any, Pattern::Any)
            .collect::<Result<_, _>>()
            .map_err(HashError::Graph)?;
        if quads.is_empty() {
            log::warn!("Selected subject not found in graph: {subject}");
            self.missing.insert(subject.clone());
            return Ok(false);
        }
        for quad in &quads {
            self.graph.remove(quad).map_err(HashError::Graph)?;
        }
        log::trace!("opening {subject} ({} quads)", quads.len());
        self.ancestors.insert(subject.clone());
        self.stack.push(Frame {
            subject: subject.clone(),
            quads,
            next: 0,
            lines: vec![],
        });
        Ok(true)
    }

    /// Process frames until the stack is empty.
    fn drain(&mut self) -> Result<(), HashError<G::Error>> {
        'frames: while let Some(top) = self.stack.len().checked_sub(1) {
            loop {
                let frame = &self.stack[top];
                let Some(quad) = frame.quads.get(frame.next) else {
                    break;
                };
                let subject = frame.subject.clone();
                let [_, predicate, object] = quad.0.clone();
                if predicate.is_blank_node() {
                    return Err(HashError::InvalidStructure { subject, predicate });
                }
                let mut terms = [predicate, object];
                for term in terms.iter_mut() {
                    match self.resolve(&subject, term)? {
                        Resolution::Unchanged => {}
                        Resolution::Replaced(iri) => *term = iri,
                        Resolution::Deferred => continue 'frames,
                    }
                }
                let line = canonical_line(&terms[0], &terms[1]);
                let frame = &mut self.stack[top];
                let [predicate, object] = terms;
                frame.quads[frame.next].0[1] = predicate;
                frame.quads[frame.next].0[2] = object;
                frame.lines.push(line);
                frame.next += 1;
            }
            self.close()?;
        }
        Ok(())
    }

    /// Decide what to do with `term`, found in the description of `subject`.
    fn resolve(&mut self, subject: &Term, term: &Term) -> Result<Resolution, HashError<G::Error>> {
        if !self.candidates.contains(term) || self.missing.contains(term) {
            return Ok(Resolution::Unchanged);
        }
        if self.ancestors.contains(term) {
            return Err(HashError::CircularDependency {
                subject: subject.clone(),
                object: term.clone(),
            });
        }
        if let Some(iri) = self.hashed.get(term) {
            return Ok(Resolution::Replaced(iri.clone()));
        }
        if self.open(term)? {
            Ok(Resolution::Deferred)
        } else {
            Ok(Resolution::Unchanged)
        }
    }

    /// Pop the top frame, digest its canonical text,
    /// and rewrite the graph with the resulting IRI.
    fn close(&mut self) -> Result<(), HashError<G::Error>> {
        let Some(Frame {
            subject,
            quads,
            mut lines,
            ..
        }) = self.stack.pop()
        else {
            return Ok(());
        };
        lines.sort_unstable();
        let text = lines.concat();
        let value = self.options.digest(&text)?;
        let iri = Term::new_iri_unchecked(
            self.options
                .template()
                .render(self.options.method(), &value),
        );
        log::debug!("canonical text of {subject}:\n{text}=> {iri}");

        for ([_, p, o], g) in quads {
            self.graph
                .insert(([iri.clone(), p, o], g))
                .map_err(HashError::Graph)?;
        }
        let references: Vec<Spog> = self
            .graph
            .quads_matching(Pattern::Any, Pattern::Any, Pattern::Is(subject.clone()), Pattern::Any)
            .collect::<Result<_, _>>()
            .map_err(HashError::Graph)?;
        for quad in references {
            self.graph.remove(&quad).map_err(HashError::Graph)?;
            let ([s, p, _], g) = quad;
            self.graph
                .insert(([s, p, iri.clone()], g))
                .map_err(HashError::Graph)?;
        }
        self.ancestors.remove(&subject);
        self.hashed.insert(subject, iri);
        Ok(())
    }
}

/// The line of canonical text for an edge with predicate `p` and object `o`.
pub fn canonical_line(p: &Term, o: &Term) -> String {
    let mut line = String::new();
    write_canonical(p, true, &mut line);
    line.push(' ');
    write_canonical(o, true, &mut line);
    line.push_str(".\n");
    line
}
