//! Collects the descriptive metadata of an ontology (title, authors, license, versions,
//! imports) from a persisted record, from the ontology's own statements, and from wizard
//! overrides, and merges it into the single `Configuration` consumed by documentation
//! rendering.

extern crate derive_builder;

pub mod configuration;
pub mod consts;
pub mod entities;
pub mod errors;
pub mod graph;
pub mod importer;
pub mod multivalue;
pub mod properties;
pub mod util;

pub use configuration::{Configuration, Overrides, OverridesBuilder};
pub use entities::{Agent, License, OntologyReference};
pub use errors::MetadataError;
pub use graph::{MetadataGraph, ObjectValue};
