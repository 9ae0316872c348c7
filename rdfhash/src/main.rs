//! Replace the subjects of RDF data with IRIs derived from their description,
//! and write the result in [Turtle] (or another syntax) to the standard output.
//!
//! Each DATA argument is either a file path, `-` for the standard input,
//! or RDF data given inline.
//! Each of them has its own blank nodes, even when they use the same labels.
//! Input formats are guessed from file extensions, and default to Turtle.
//!
//! Usage:
//!   rdfhash data.ttl
//!   rdfhash -m shake_256 -l 16 -c http://xmlns.com/foaf/0.1/Person data.trig
//!   rdfhash --reverse -a ntriples hashed.nq
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
use std::error::Error;
use std::fs::File;
use std::io::{stdin, stdout, BufReader, BufWriter};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use oxiri::Iri;
use rdfhash::api::graph::Graph;
use rdfhash::api::term::Term;
use rdfhash::c14n::template::DEFAULT_TEMPLATE;
use rdfhash::c14n::{HashOptions, MethodSpec, Selection, Template};
use rdfhash::format::Format;
use rdfhash::inmem::FastGraph;

#[derive(Parser, Debug)]
#[command(name = "rdfhash", version)]
#[command(about = "Replace RDF subjects with IRIs derived from a digest of their description")]
struct Args {
    /// RDF files, `-` for the standard input, or inline RDF data
    #[arg(required = true, value_name = "DATA")]
    data: Vec<String>,

    /// Input format (default: guessed from the file extension, else turtle)
    #[arg(short, long)]
    format: Option<Format>,

    /// Output format
    #[arg(short, long, default_value = "turtle")]
    accept: Format,

    /// Digest method, optionally followed by `:length` for variable-length methods
    #[arg(short, long, default_value = "sha256", env = "RDFHASH_METHOD")]
    method: MethodSpec,

    /// Digest length, for variable-length methods
    #[arg(short, long)]
    length: Option<usize>,

    /// Template of hashed IRIs
    #[arg(short, long, default_value = DEFAULT_TEMPLATE, env = "RDFHASH_TEMPLATE")]
    template: Template,

    /// Hash this subject (repeatable)
    #[arg(short = 's', long = "subject", value_name = "IRI")]
    subjects: Vec<String>,

    /// Hash every instance of this class (repeatable)
    #[arg(short = 'c', long = "class", value_name = "IRI")]
    classes: Vec<String>,

    /// Do not hash blank node subjects, unless explicitly selected
    #[arg(long)]
    no_blank_nodes: bool,

    /// After hashing, replace every hashed IRI with a blank node
    #[arg(short, long)]
    reverse: bool,

    /// Rewrite the graph while hashing, rather than all at once at the end
    #[arg(long)]
    incremental: bool,

    /// Accept randomized methods (uuid4, uuid7)
    #[arg(long)]
    allow_nondeterministic: bool,

    /// Log progress information
    #[arg(short, long)]
    verbose: bool,

    /// Log debugging information
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.debug {
        LevelFilter::Debug
    } else if args.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rdfhash: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut graph = FastGraph::new();
    for data in &args.data {
        let n = load(data, args.format, &mut graph)?;
        log::debug!("loaded {n} quad(s)");
    }
    log::info!("{} quad(s) loaded", graph.len()?);

    let options = HashOptions::new()
        .with_method_spec(args.method.with_length(args.length))
        .with_template(args.template)
        .with_atomic(!args.incremental)
        .with_allow_nondeterministic(args.allow_nondeterministic);

    let selection = Selection::new()
        .with_blank_nodes(!args.no_blank_nodes)
        .with_subjects(iris(&args.subjects)?)
        .with_instances_of(iris(&args.classes)?);
    let hashed = rdfhash::hash_subjects(&mut graph, &selection, &options)?;
    for (subject, iri) in &hashed {
        log::debug!("{subject} -> {iri}");
    }

    // subjects with the same description now share an IRI, hence a blank node
    if args.reverse {
        let mapping = rdfhash::unhash_subjects(&mut graph, &options)?;
        for (iri, bnode) in &mapping {
            log::debug!("{iri} -> {bnode}");
        }
    }

    let output = BufWriter::new(stdout().lock());
    args.accept.serialize(&graph, output)?;
    Ok(())
}

/// Load one DATA argument into `graph`.
fn load(data: &str, format: Option<Format>, graph: &mut FastGraph) -> Result<usize, Box<dyn Error>> {
    if data == "-" {
        let format = format.unwrap_or(Format::Turtle);
        log::debug!("loading standard input as {format}");
        return Ok(format.parse_bufread(stdin().lock(), None, graph)?);
    }
    let path = Path::new(data);
    if path.is_file() {
        let format = format.or_else(|| Format::guess(path)).unwrap_or(Format::Turtle);
        log::debug!("loading {} as {format}", path.display());
        let input = BufReader::new(File::open(path)?);
        Ok(format.parse_bufread(input, file_iri(path), graph)?)
    } else {
        let format = format.unwrap_or(Format::Turtle);
        log::debug!("loading inline data as {format}");
        Ok(format.parse_str(data, None, graph)?)
    }
}

/// The `file:` IRI of `path`, used as base IRI when parsing it.
fn file_iri(path: &Path) -> Option<Iri<String>> {
    let absolute = std::fs::canonicalize(path).ok()?;
    let iri = format!("file://{}", absolute.display());
    match Iri::parse(iri) {
        Ok(iri) => Some(iri),
        Err(err) => {
            log::debug!("no base IRI for {}: {err}", path.display());
            None
        }
    }
}

fn iris(txts: &[String]) -> Result<Vec<Term>, Box<dyn Error>> {
    Ok(txts
        .iter()
        .map(|txt| Term::new_iri(txt.as_str()))
        .collect::<Result<_, _>>()?)
}
