//! Folds the statements attached to an ontology's descriptive node into a `Configuration`.
//!
//! Predicates are recognized by their local name only, so `dc:title` and `dcterms:title`
//! both set the title. Scalar predicates overwrite in iteration order; `creator`,
//! `contributor` and `imports` accumulate. `created` only fills an empty release date,
//! while `modified` always wins.

use crate::configuration::Configuration;
use crate::consts::*;
use crate::entities::{Agent, License, OntologyReference};
use crate::graph::ObjectValue;
use crate::util::{is_url, local_name};
use log::{debug, trace};
use oxigraph::model::NamedNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataPredicate {
    Title,
    /// `replaces` or `wasRevisionOf`
    PreviousVersion,
    VersionInfo,
    PreferredNamespacePrefix,
    PreferredNamespaceUri,
    License,
    Creator,
    Contributor,
    Created,
    Modified,
    Imports,
}

impl MetadataPredicate {
    pub fn from_local_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(MetadataPredicate::Title),
            "replaces" | "wasRevisionOf" => Some(MetadataPredicate::PreviousVersion),
            "versionInfo" => Some(MetadataPredicate::VersionInfo),
            "preferredNamespacePrefix" => Some(MetadataPredicate::PreferredNamespacePrefix),
            "preferredNamespaceUri" => Some(MetadataPredicate::PreferredNamespaceUri),
            "license" => Some(MetadataPredicate::License),
            "creator" => Some(MetadataPredicate::Creator),
            "contributor" => Some(MetadataPredicate::Contributor),
            "created" => Some(MetadataPredicate::Created),
            "modified" => Some(MetadataPredicate::Modified),
            "imports" => Some(MetadataPredicate::Imports),
            _ => None,
        }
    }

    pub fn from_iri(iri: &str) -> Option<Self> {
        Self::from_local_name(local_name(iri))
    }

    /// Applies one statement's value to the configuration.
    pub fn apply(self, value: ObjectValue, config: &mut Configuration) {
        let value = value.into_string();
        match self {
            MetadataPredicate::Title => config.set_title(Some(value)),
            MetadataPredicate::PreviousVersion => config.set_previous_version(value),
            MetadataPredicate::VersionInfo => config.set_revision(value),
            MetadataPredicate::PreferredNamespacePrefix => {
                config.main_ontology_mut().namespace_prefix = Some(value)
            }
            MetadataPredicate::PreferredNamespaceUri => config.set_ontology_uri(value),
            MetadataPredicate::License => config.set_license(license_from(value)),
            MetadataPredicate::Creator => config.creators_mut().push(agent_from(value)),
            MetadataPredicate::Contributor => config.contributors_mut().push(agent_from(value)),
            MetadataPredicate::Created => {
                if config.release_date().is_empty() {
                    config.set_release_date(value);
                } else {
                    trace!("Ignoring created date {}; release date already set", value);
                }
            }
            MetadataPredicate::Modified => config.set_release_date(value),
            MetadataPredicate::Imports => config.imported_ontologies_mut().push(import_from(value)),
        }
    }
}

fn license_from(value: String) -> License {
    if is_url(&value) {
        License::at_url(value)
    } else {
        License::named(value)
    }
}

fn agent_from(value: String) -> Agent {
    if is_url(&value) {
        Agent::new(PLACEHOLDER_AGENT_NAME).with_url(value)
    } else {
        Agent::new(value).with_url(PLACEHOLDER_AGENT_URL)
    }
}

fn import_from(value: String) -> OntologyReference {
    if is_url(&value) {
        OntologyReference::new(PLACEHOLDER_IMPORT_NAME).with_namespace_uri(value)
    } else {
        OntologyReference::new(value).with_namespace_uri(PLACEHOLDER_IMPORT_URI)
    }
}

/// Applies every recognized statement, in order, and returns how many were used.
pub fn import_statements<I>(config: &mut Configuration, statements: I) -> usize
where
    I: IntoIterator<Item = (NamedNode, ObjectValue)>,
{
    let mut applied = 0;
    for (predicate, value) in statements {
        match MetadataPredicate::from_iri(predicate.as_str()) {
            Some(p) => {
                debug!("{} -> {:?}", predicate, value);
                p.apply(value, config);
                applied += 1;
            }
            None => trace!("Ignoring predicate {}", predicate),
        }
    }
    applied
}
