//! Defines constant NamedNodeRefs for the RDF terms used to locate the documented ontology,
//! and the literal defaults written into a configuration when a metadata source is silent.

use oxigraph::model::NamedNodeRef;

pub const ONTOLOGY: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
pub const TYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");

// record keys
pub const KEY_TITLE: &str = "title";
pub const KEY_RELEASE_DATE: &str = "dateOfRelease";
pub const KEY_PREVIOUS_VERSION: &str = "previousVersion";
pub const KEY_THIS_VERSION: &str = "thisVersion";
pub const KEY_LATEST_VERSION: &str = "latestVersion";
pub const KEY_REVISION: &str = "revision";
pub const KEY_NAME: &str = "name";
pub const KEY_PREFIX: &str = "ontologyPrefix";
pub const KEY_NAMESPACE_URI: &str = "ontologyNamespaceURI";
pub const KEY_AUTHORS: &str = "authors";
pub const KEY_AUTHOR_URL: &str = "authorURL";
pub const KEY_AUTHOR_INSTITUTION: &str = "authorInstitution";
pub const KEY_CONTRIBUTORS: &str = "contributors";
pub const KEY_CONTRIBUTORS_URL: &str = "contributorsURL";
pub const KEY_CONTRIBUTORS_INSTITUTION: &str = "contributorsInstitution";
pub const KEY_IMPORTS_NAMES: &str = "importsNames";
pub const KEY_IMPORTS_URLS: &str = "importsURLs";
pub const KEY_EXTENDS_NAMES: &str = "extendsNames";
// the historical record format spells this one with a capital S
pub const KEY_EXTENDS_URLS: &str = "extendsURLS";
pub const KEY_LICENSE: &str = "license";
pub const KEY_LICENSE_URL: &str = "licenseURL";
pub const KEY_LICENSE_ICON: &str = "licenseIconURL";
pub const KEY_DOCUMENTATION_URI: &str = "documentationURI";
pub const KEY_PROVENANCE_URI: &str = "provenanceURI";
pub const KEY_LANGUAGE: &str = "language";
pub const KEY_ONTOLOGY_PATH: &str = "ontologyPath";

/// Separator between the items of a multi-value record field.
pub const MULTI_VALUE_DELIMITER: char = ';';

// fallbacks
pub const DEFAULT_TITLE: &str = "Title goes here";
pub const DEFAULT_RELEASE_DATE: &str = "Date of release";
pub const UNTITLED: &str = "Untitled ontology";

// placeholders for half-known agents and imports found in a graph
pub const PLACEHOLDER_AGENT_NAME: &str = "name goes here";
pub const PLACEHOLDER_AGENT_URL: &str = "url goes here";
pub const PLACEHOLDER_IMPORT_NAME: &str = "imported ontology name goes here";
pub const PLACEHOLDER_IMPORT_URI: &str = "namespace URI goes here";

/// Directory (next to the executable) and file name of the record loaded by `Configuration::new`.
pub const DEFAULT_RECORD_DIR: &str = "config";
pub const DEFAULT_RECORD_FILE: &str = "config.properties";
