//! Defines the leaf records credited or referenced by an ontology's documentation:
//! `Agent`, `OntologyReference` and `License`.

use serde::{Deserialize, Serialize};

/// A person or organization credited as creator or contributor.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug, Default)]
pub struct Agent {
    pub name: String,
    pub url: Option<String>,
    pub institution_name: Option<String>,
}

impl Agent {
    pub fn new(name: impl Into<String>) -> Self {
        Agent {
            name: name.into(),
            url: None,
            institution_name: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution_name = Some(institution.into());
        self
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(url) = &self.url {
            write!(f, " <{}>", url)?;
        }
        if let Some(inst) = &self.institution_name {
            write!(f, " ({})", inst)?;
        }
        Ok(())
    }
}

/// The documented ontology, or one it imports or extends.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug, Default)]
pub struct OntologyReference {
    pub name: String,
    pub namespace_prefix: Option<String>,
    pub namespace_uri: Option<String>,
}

impl OntologyReference {
    pub fn new(name: impl Into<String>) -> Self {
        OntologyReference {
            name: name.into(),
            namespace_prefix: None,
            namespace_uri: None,
        }
    }

    /// The primary reference in its reset state: every field present and empty, so
    /// renderers never see a missing name, prefix or namespace.
    pub fn blank() -> Self {
        OntologyReference {
            name: String::new(),
            namespace_prefix: Some(String::new()),
            namespace_uri: Some(String::new()),
        }
    }

    pub fn with_namespace_uri(mut self, uri: impl Into<String>) -> Self {
        self.namespace_uri = Some(uri.into());
        self
    }

    pub fn with_namespace_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.namespace_prefix = Some(prefix.into());
        self
    }

    pub fn namespace_uri(&self) -> &str {
        self.namespace_uri.as_deref().unwrap_or_default()
    }

    pub fn namespace_prefix(&self) -> &str {
        self.namespace_prefix.as_deref().unwrap_or_default()
    }
}

impl std::fmt::Display for OntologyReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.namespace_prefix(), self.namespace_uri()) {
            ("", "") => write!(f, "{}", self.name),
            ("", uri) => write!(f, "{} <{}>", self.name, uri),
            (prefix, uri) => write!(f, "{} ({}: <{}>)", self.name, prefix, uri),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug, Default)]
pub struct License {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
}

impl License {
    pub fn named(name: impl Into<String>) -> Self {
        License {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn at_url(url: impl Into<String>) -> Self {
        License {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// A license is usable once it has either a textual identifier or a URL.
    pub fn is_resolved(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().map_or(false, |s| !s.is_empty());
        filled(&self.name) || filled(&self.url)
    }
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.name.as_deref(), self.url.as_deref()) {
            (Some(name), Some(url)) => write!(f, "{} <{}>", name, url),
            (Some(name), None) => write!(f, "{}", name),
            (None, Some(url)) => write!(f, "<{}>", url),
            (None, None) => write!(f, "<unresolved>"),
        }
    }
}
