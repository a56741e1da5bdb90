//! Splits `;`-separated record fields into aligned lists of agents or ontology references.
//!
//! The names field decides how many entities are produced. An auxiliary field (URLs,
//! institutions) is only distributed over the entities when it has exactly as many items
//! as the names field; a ragged auxiliary field is dropped for every entity rather than
//! padded or truncated, so a URL is never credited to the wrong person.

use crate::consts::MULTI_VALUE_DELIMITER;
use crate::entities::{Agent, OntologyReference};
use crate::errors::MetadataError;
use log::debug;

/// Splits a multi-value field. A field without any `;` is a single item, even when it is
/// empty. Otherwise trailing empty items are dropped, so `";;"` has none.
pub fn split_field(value: &str) -> Vec<&str> {
    if !value.contains(MULTI_VALUE_DELIMITER) {
        return vec![value];
    }
    let mut items: Vec<&str> = value.split(MULTI_VALUE_DELIMITER).collect();
    while items.last().map_or(false, |s| s.is_empty()) {
        items.pop();
    }
    items
}

/// Returns the items of an auxiliary field if, and only if, there are exactly `n` of them.
pub fn align(field: Option<&str>, n: usize) -> Option<Vec<&str>> {
    let items = split_field(field?);
    if items.len() == n {
        Some(items)
    } else {
        debug!(
            "Dropping auxiliary field with {} items; expected {}",
            items.len(),
            n
        );
        None
    }
}

fn split_names<'a>(key: &str, field: Option<&'a str>) -> Result<Vec<&'a str>, MetadataError> {
    field
        .map(split_field)
        .ok_or_else(|| MetadataError::missing_field(key))
}

/// Builds the agents described by a names field and its optional URL and institution
/// fields. `names_key` is only used to report a missing names field.
pub fn parse_agents(
    names_key: &str,
    names_field: Option<&str>,
    urls: Option<&str>,
    institutions: Option<&str>,
) -> Result<Vec<Agent>, MetadataError> {
    let names = split_names(names_key, names_field)?;
    let n = names.len();
    let urls = align(urls, n);
    let institutions = align(institutions, n);

    Ok(names
        .iter()
        .enumerate()
        .map(|(i, name)| Agent {
            name: name.to_string(),
            url: urls.as_ref().map(|u| u[i].to_string()),
            institution_name: institutions.as_ref().map(|inst| inst[i].to_string()),
        })
        .collect())
}

/// Builds ontology references from a names field and an optional namespace URI field.
pub fn parse_references(
    names_key: &str,
    names_field: Option<&str>,
    urls: Option<&str>,
) -> Result<Vec<OntologyReference>, MetadataError> {
    let names = split_names(names_key, names_field)?;
    let urls = align(urls, names.len());

    Ok(names
        .iter()
        .enumerate()
        .map(|(i, name)| OntologyReference {
            name: name.to_string(),
            namespace_prefix: None,
            namespace_uri: urls.as_ref().map(|u| u[i].to_string()),
        })
        .collect())
}
