use anyhow::Result;

use std::path::Path;

use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::model::graph::Graph as OxigraphGraph;
use oxigraph::model::{NamedNode, Triple};

use std::io::BufReader;

use log::debug;

/// Initializes logging for ontodoc.
///
/// `ONTODOC_LOG` takes precedence over `RUST_LOG`; if neither is set, `default_level`
/// is used. Safe to call more than once.
pub fn init_logging(default_level: &str) {
    if let Ok(log_level) = std::env::var("ONTODOC_LOG") {
        std::env::set_var("RUST_LOG", log_level);
    } else if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", default_level);
    }
    let _ = env_logger::try_init();
}

fn format_for(file: &Path) -> RdfFormat {
    let ext = file.extension().and_then(|ext| ext.to_str());
    match ext {
        Some("ttl") | Some("n3") => RdfFormat::Turtle,
        Some("nt") => RdfFormat::NTriples,
        Some("xml") | Some("rdf") | Some("owl") => RdfFormat::RdfXml,
        _ => RdfFormat::Turtle,
    }
}

/// Reads an RDF file into an in-memory graph. The format is chosen from the extension
/// and defaults to Turtle.
pub fn read_graph(file: &Path) -> Result<OxigraphGraph> {
    debug!("Reading file: {}", file.display());
    let format = format_for(file);
    let content = BufReader::new(std::fs::File::open(file)?);
    read_graph_from(content, format)
}

pub fn read_graph_from(content: impl std::io::Read, format: RdfFormat) -> Result<OxigraphGraph> {
    let mut graph = OxigraphGraph::new();
    for quad in RdfParser::from_format(format).for_reader(content) {
        let quad = quad?;
        let triple = Triple::new(quad.subject, quad.predicate, quad.object);
        graph.insert(&triple);
    }
    Ok(graph)
}

// schemes with a URL handler; anything else with a colon is a plain name
const URL_SCHEMES: [&str; 6] = ["http", "https", "ftp", "file", "mailto", "jar"];

/// A value is a URL iff it parses as an absolute URL with a known scheme and is also a
/// valid IRI. Values passing only one of the two checks are plain names.
pub fn is_url(value: &str) -> bool {
    let known_scheme = url::Url::parse(value)
        .map_or(false, |u| URL_SCHEMES.contains(&u.scheme()));
    known_scheme && NamedNode::new(value).is_ok()
}

/// The local part of an IRI: whatever follows the last `#`, else the last `/`,
/// else the last `:`.
pub fn local_name(iri: &str) -> &str {
    let cut = iri
        .rfind('#')
        .or_else(|| iri.rfind('/'))
        .or_else(|| iri.rfind(':'));
    match cut {
        Some(idx) => &iri[idx + 1..],
        None => iri,
    }
}
