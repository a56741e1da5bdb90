//! Defines `Configuration`, the merged metadata state handed to documentation rendering,
//! and the two pathways that rebuild it: loading a persisted record and importing the
//! ontology's own statements. Wizard edits arrive afterwards as an `Overrides` record.

use crate::consts::*;
use crate::entities::{Agent, License, OntologyReference};
use crate::errors::MetadataError;
use crate::graph::MetadataGraph;
use crate::importer;
use crate::multivalue::{parse_agents, parse_references};
use crate::properties::PropertyRecord;
use crate::util::read_graph;
use anyhow::Result;
use derive_builder::Builder;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

macro_rules! string_accessors {
    ($($field:ident => $setter:ident),* $(,)?) => {
        $(
            pub fn $field(&self) -> &str {
                &self.$field
            }

            pub fn $setter(&mut self, value: impl Into<String>) {
                self.$field = value.into();
            }
        )*
    };
}

macro_rules! flag_accessors {
    ($($field:ident => $setter:ident),* $(,)?) => {
        $(
            pub fn $field(&self) -> bool {
                self.$field
            }

            pub fn $setter(&mut self, value: bool) {
                self.$field = value;
            }
        )*
    };
}

macro_rules! path_accessors {
    ($($field:ident => $setter:ident),* $(,)?) => {
        $(
            pub fn $field(&self) -> Option<&Path> {
                self.$field.as_deref()
            }

            pub fn $setter(&mut self, value: Option<PathBuf>) {
                self.$field = value;
            }
        )*
    };
}

macro_rules! list_accessors {
    ($($field:ident: $ty:ty => $mut_getter:ident, $setter:ident),* $(,)?) => {
        $(
            pub fn $field(&self) -> &[$ty] {
                &self.$field
            }

            pub fn $mut_getter(&mut self) -> &mut Vec<$ty> {
                &mut self.$field
            }

            pub fn $setter(&mut self, value: Vec<$ty>) {
                self.$field = value;
            }
        )*
    };
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    title: String,
    release_date: String,
    previous_version: String,
    this_version: String,
    latest_version: String,
    revision: String,
    documentation_uri: String,
    provenance_uri: String,
    ontology_path: String,
    language: String,

    // html fragments picked for the optional sections
    abstract_path: Option<PathBuf>,
    introduction_path: Option<PathBuf>,
    overview_path: Option<PathBuf>,
    description_path: Option<PathBuf>,
    references_path: Option<PathBuf>,

    publish_provenance: bool,
    include_abstract: bool,
    include_introduction: bool,
    include_overview: bool,
    include_description: bool,
    include_references: bool,
    include_cross_reference_section: bool,
    include_diagram: bool,
    // true when the ontology was read from a local file rather than a URI
    from_file: bool,
    use_owl_api: bool,
    use_imported: bool,
    use_reasoner: bool,

    creators: Vec<Agent>,
    contributors: Vec<Agent>,
    imported_ontologies: Vec<OntologyReference>,
    extended_ontologies: Vec<OntologyReference>,
    main_ontology: OntologyReference,
    license: License,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            title: String::new(),
            release_date: String::new(),
            previous_version: String::new(),
            this_version: String::new(),
            latest_version: String::new(),
            revision: String::new(),
            documentation_uri: String::new(),
            provenance_uri: String::new(),
            ontology_path: String::new(),
            language: String::new(),
            abstract_path: None,
            introduction_path: None,
            overview_path: None,
            description_path: None,
            references_path: None,
            publish_provenance: true,
            include_abstract: true,
            include_introduction: true,
            include_overview: true,
            include_description: true,
            include_references: true,
            include_cross_reference_section: true,
            include_diagram: true,
            from_file: false,
            use_owl_api: false,
            use_imported: false,
            use_reasoner: false,
            creators: vec![],
            contributors: vec![],
            imported_ontologies: vec![],
            extended_ontologies: vec![],
            main_ontology: OntologyReference::blank(),
            license: License::default(),
        }
    }
}

/// The record location inside `dir`: `config/config.properties`.
pub fn record_path_in(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_RECORD_DIR).join(DEFAULT_RECORD_FILE)
}

impl Configuration {
    /// Creates a configuration and loads the default record, if there is one. Any failure
    /// is logged and leaves the defaults in place.
    pub fn new() -> Self {
        let mut config = Configuration::default();
        match std::env::current_exe() {
            Ok(exe) => match exe.parent() {
                Some(dir) => config.load_default_record(dir),
                None => warn!("Executable {} has no parent directory", exe.display()),
            },
            Err(e) => warn!("Could not determine the location of the default record: {}", e),
        }
        config
    }

    /// Resets, then loads `config/config.properties` under `dir` if it exists. A missing
    /// record or a failed load is logged and leaves the defaults.
    pub fn load_default_record(&mut self, dir: &Path) {
        self.reset();
        let path = record_path_in(dir);
        if !path.exists() {
            debug!("No default record at {}", path.display());
            return;
        }
        if let Err(e) = self.load_record(&path) {
            warn!("Error while loading the default record {}: {}", path.display(), e);
        }
    }

    /// Builds a configuration from a parsed record, starting from defaults.
    pub fn from_record(record: &PropertyRecord) -> Result<Self, MetadataError> {
        let mut config = Configuration::default();

        config.title = record.get_or(KEY_TITLE, DEFAULT_TITLE).to_string();
        config.release_date = record.get_or(KEY_RELEASE_DATE, DEFAULT_RELEASE_DATE).to_string();
        config.previous_version = record.get_or(KEY_PREVIOUS_VERSION, "").to_string();
        config.this_version = record.get_or(KEY_THIS_VERSION, "").to_string();
        config.latest_version = record.get_or(KEY_LATEST_VERSION, "").to_string();
        config.revision = record.get_or(KEY_REVISION, "").to_string();
        config.main_ontology = OntologyReference::new(record.get_or(KEY_NAME, ""))
            .with_namespace_prefix(record.get_or(KEY_PREFIX, ""))
            .with_namespace_uri(record.get_or(KEY_NAMESPACE_URI, ""));
        config.documentation_uri = record.get_or(KEY_DOCUMENTATION_URI, "").to_string();
        config.provenance_uri = record.get_or(KEY_PROVENANCE_URI, "").to_string();
        config.language = record.get_or(KEY_LANGUAGE, "").to_string();
        config.ontology_path = record.get_or(KEY_ONTOLOGY_PATH, "").to_string();

        config.creators = parse_agents(
            KEY_AUTHORS,
            record.get(KEY_AUTHORS),
            record.get(KEY_AUTHOR_URL),
            record.get(KEY_AUTHOR_INSTITUTION),
        )?;
        config.contributors = parse_agents(
            KEY_CONTRIBUTORS,
            record.get(KEY_CONTRIBUTORS),
            record.get(KEY_CONTRIBUTORS_URL),
            record.get(KEY_CONTRIBUTORS_INSTITUTION),
        )?;
        config.imported_ontologies = parse_references(
            KEY_IMPORTS_NAMES,
            record.get(KEY_IMPORTS_NAMES),
            record.get(KEY_IMPORTS_URLS),
        )?;
        config.extended_ontologies = parse_references(
            KEY_EXTENDS_NAMES,
            record.get(KEY_EXTENDS_NAMES),
            record.get(KEY_EXTENDS_URLS),
        )?;

        config.license = License {
            name: record.get(KEY_LICENSE).map(str::to_string),
            url: record.get(KEY_LICENSE_URL).map(str::to_string),
            icon: record.get(KEY_LICENSE_ICON).map(str::to_string),
        };
        Ok(config)
    }

    /// Returns every field to its default. Collections are replaced, not cleared in place.
    pub fn reset(&mut self) {
        *self = Configuration::default();
    }

    /// Resets, then loads the record at `path`.
    ///
    /// An unreadable record is logged and leaves the defaults. A record missing one of the
    /// mandatory names fields is reported as `MetadataError::MissingField`, also leaving the
    /// defaults.
    pub fn load_record(&mut self, path: &Path) -> Result<(), MetadataError> {
        self.reset();
        let record = match PropertyRecord::from_file(path) {
            Ok(record) => record,
            Err(e) if e.is_recoverable() => {
                error!("Error while reading configuration properties: {}", e);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        *self = Configuration::from_record(&record)?;
        info!(
            "Loaded record {} ({} creators, {} contributors)",
            path.display(),
            self.creators.len(),
            self.contributors.len()
        );
        Ok(())
    }

    /// Same as `load_record`; used when the user picks a different record.
    pub fn reload_record(&mut self, path: &Path) -> Result<(), MetadataError> {
        self.load_record(path)
    }

    /// Resets, then folds in the statements of the graph's descriptive node. When no graph
    /// is given the configuration is left untouched.
    pub fn import_graph<G>(&mut self, graph: Option<&G>) -> Result<(), MetadataError>
    where
        G: MetadataGraph + ?Sized,
    {
        let graph = match graph {
            Some(graph) => graph,
            None => {
                error!("The ontology could not be read; keeping the current configuration");
                return Ok(());
            }
        };
        self.reset();
        let node = graph.descriptive_node()?;
        let applied = importer::import_statements(self, graph.statements(node.as_ref()));
        info!("Loaded {} properties from ontology {}", applied, node);
        Ok(())
    }

    /// Reads an RDF file and imports it. A file that cannot be read or parsed is logged and
    /// leaves the configuration untouched.
    pub fn import_file(&mut self, path: &Path) -> Result<(), MetadataError> {
        let graph = match read_graph(path) {
            Ok(graph) => graph,
            Err(e) => {
                error!("Failed to read ontology {}: {}", path.display(), e);
                return Ok(());
            }
        };
        self.import_graph(Some(&graph))?;
        self.from_file = true;
        self.ontology_path = path.display().to_string();
        Ok(())
    }

    /// Applies the fields carried by a wizard override record.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        macro_rules! apply {
            ($this:ident; $($field:ident => $setter:ident),* $(,)?) => {
                $(
                    if let Some(value) = &overrides.$field {
                        $this.$setter(value.clone());
                    }
                )*
            };
        }
        macro_rules! apply_path {
            ($this:ident; $($field:ident => $setter:ident),* $(,)?) => {
                $(
                    if let Some(path) = &overrides.$field {
                        $this.$setter(Some(path.clone()));
                    }
                )*
            };
        }
        if let Some(title) = &overrides.title {
            self.set_title(Some(title.clone()));
        }
        apply!(self;
            release_date => set_release_date,
            previous_version => set_previous_version,
            this_version => set_this_version,
            latest_version => set_latest_version,
            revision => set_revision,
            documentation_uri => set_documentation_uri,
            provenance_uri => set_provenance_uri,
            ontology_path => set_ontology_path,
            language => set_language,
            publish_provenance => set_publish_provenance,
            include_abstract => set_include_abstract,
            include_introduction => set_include_introduction,
            include_overview => set_include_overview,
            include_description => set_include_description,
            include_references => set_include_references,
            include_cross_reference_section => set_include_cross_reference_section,
            include_diagram => set_include_diagram,
            from_file => set_from_file,
            use_owl_api => set_use_owl_api,
            use_imported => set_use_imported,
            use_reasoner => set_use_reasoner,
            creators => set_creators,
            contributors => set_contributors,
            imported_ontologies => set_imported_ontologies,
            extended_ontologies => set_extended_ontologies,
            main_ontology => set_main_ontology,
            license => set_license,
        );
        apply_path!(self;
            abstract_path => set_abstract_path,
            introduction_path => set_introduction_path,
            overview_path => set_overview_path,
            description_path => set_description_path,
            references_path => set_references_path,
        );
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the title; clearing it stores "Untitled ontology".
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title.unwrap_or_else(|| UNTITLED.to_string());
    }

    string_accessors!(
        release_date => set_release_date,
        previous_version => set_previous_version,
        this_version => set_this_version,
        latest_version => set_latest_version,
        revision => set_revision,
        documentation_uri => set_documentation_uri,
        provenance_uri => set_provenance_uri,
        ontology_path => set_ontology_path,
        language => set_language,
    );

    flag_accessors!(
        publish_provenance => set_publish_provenance,
        include_abstract => set_include_abstract,
        include_introduction => set_include_introduction,
        include_overview => set_include_overview,
        include_description => set_include_description,
        include_references => set_include_references,
        include_cross_reference_section => set_include_cross_reference_section,
        include_diagram => set_include_diagram,
        from_file => set_from_file,
        use_owl_api => set_use_owl_api,
        use_imported => set_use_imported,
        use_reasoner => set_use_reasoner,
    );

    path_accessors!(
        abstract_path => set_abstract_path,
        introduction_path => set_introduction_path,
        overview_path => set_overview_path,
        description_path => set_description_path,
        references_path => set_references_path,
    );

    list_accessors!(
        creators: Agent => creators_mut, set_creators,
        contributors: Agent => contributors_mut, set_contributors,
        imported_ontologies: OntologyReference => imported_ontologies_mut, set_imported_ontologies,
        extended_ontologies: OntologyReference => extended_ontologies_mut, set_extended_ontologies,
    );

    pub fn main_ontology(&self) -> &OntologyReference {
        &self.main_ontology
    }

    pub fn main_ontology_mut(&mut self) -> &mut OntologyReference {
        &mut self.main_ontology
    }

    pub fn set_main_ontology(&mut self, main_ontology: OntologyReference) {
        self.main_ontology = main_ontology;
    }

    /// The namespace URI of the documented ontology.
    pub fn ontology_uri(&self) -> &str {
        self.main_ontology.namespace_uri()
    }

    pub fn set_ontology_uri(&mut self, uri: impl Into<String>) {
        self.main_ontology.namespace_uri = Some(uri.into());
    }

    pub fn license(&self) -> &License {
        &self.license
    }

    pub fn set_license(&mut self, license: License) {
        self.license = license;
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Prints the configuration in a readable way for command line output.
    pub fn print(&self) {
        let or_none = |s: &str| if s.is_empty() { "<none>".to_string() } else { s.to_string() };
        println!("Configuration:");
        println!("  Title: {}", or_none(&self.title));
        println!("  Ontology: {}", self.main_ontology);
        println!("  Release Date: {}", or_none(&self.release_date));
        println!("  This Version: {}", or_none(&self.this_version));
        println!("  Latest Version: {}", or_none(&self.latest_version));
        println!("  Previous Version: {}", or_none(&self.previous_version));
        println!("  Revision: {}", or_none(&self.revision));
        println!("  License: {}", self.license);
        for (label, agents) in [("Creators", &self.creators), ("Contributors", &self.contributors)] {
            if !agents.is_empty() {
                println!("  {}:", label);
                for agent in agents {
                    println!("    - {}", agent);
                }
            }
        }
        for (label, refs) in [
            ("Imported Ontologies", &self.imported_ontologies),
            ("Extended Ontologies", &self.extended_ontologies),
        ] {
            if !refs.is_empty() {
                println!("  {}:", label);
                for r in refs {
                    println!("    - {}", r);
                }
            }
        }
        println!("  Sections:");
        println!("    Abstract: {}", self.include_abstract);
        println!("    Introduction: {}", self.include_introduction);
        println!("    Overview: {}", self.include_overview);
        println!("    Description: {}", self.include_description);
        println!("    References: {}", self.include_references);
        println!("    Cross Reference: {}", self.include_cross_reference_section);
        println!("  Publish Provenance: {}", self.publish_provenance);
        if !self.ontology_path.is_empty() {
            println!("  Ontology Path: {}", self.ontology_path);
        }
    }
}

/// The finished set of edits made in the documentation wizard. Every field left as `None`
/// keeps the configuration's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct Overrides {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub previous_version: Option<String>,
    pub this_version: Option<String>,
    pub latest_version: Option<String>,
    pub revision: Option<String>,
    pub documentation_uri: Option<String>,
    pub provenance_uri: Option<String>,
    pub ontology_path: Option<String>,
    pub language: Option<String>,

    pub abstract_path: Option<PathBuf>,
    pub introduction_path: Option<PathBuf>,
    pub overview_path: Option<PathBuf>,
    pub description_path: Option<PathBuf>,
    pub references_path: Option<PathBuf>,

    pub publish_provenance: Option<bool>,
    pub include_abstract: Option<bool>,
    pub include_introduction: Option<bool>,
    pub include_overview: Option<bool>,
    pub include_description: Option<bool>,
    pub include_references: Option<bool>,
    pub include_cross_reference_section: Option<bool>,
    pub include_diagram: Option<bool>,
    pub from_file: Option<bool>,
    pub use_owl_api: Option<bool>,
    pub use_imported: Option<bool>,
    pub use_reasoner: Option<bool>,

    pub creators: Option<Vec<Agent>>,
    pub contributors: Option<Vec<Agent>>,
    pub imported_ontologies: Option<Vec<OntologyReference>>,
    pub extended_ontologies: Option<Vec<OntologyReference>>,
    pub main_ontology: Option<OntologyReference>,
    pub license: Option<License>,
}

impl Overrides {
    pub fn builder() -> OverridesBuilder {
        OverridesBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Overrides::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_default_state(config: &Configuration) {
        for s in [
            config.title(),
            config.release_date(),
            config.previous_version(),
            config.this_version(),
            config.latest_version(),
            config.revision(),
            config.documentation_uri(),
            config.provenance_uri(),
            config.ontology_path(),
            config.language(),
        ] {
            assert_eq!(s, "");
        }
        assert_eq!(config.main_ontology(), &OntologyReference::blank());
        assert!(config.include_abstract());
        assert!(config.include_introduction());
        assert!(config.include_overview());
        assert!(config.include_description());
        assert!(config.include_references());
        assert!(config.include_cross_reference_section());
        assert!(config.include_diagram());
        assert!(config.publish_provenance());
        assert!(config.creators().is_empty());
        assert!(config.contributors().is_empty());
        assert!(config.imported_ontologies().is_empty());
        assert!(config.extended_ontologies().is_empty());
        assert_eq!(config.license(), &License::default());
        assert_eq!(config.abstract_path(), None);
    }

    #[test]
    fn test_default_state() {
        assert_default_state(&Configuration::default());
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut config = Configuration::default();
        config.set_title(Some("Something".to_string()));
        config.set_include_overview(false);
        config.set_use_reasoner(true);
        config.creators_mut().push(Agent::new("Alice"));
        config.set_ontology_uri("http://example.org/");
        config.set_references_path(Some(PathBuf::from("refs.html")));
        config.reset();
        assert_default_state(&config);
        assert!(!config.use_reasoner());
    }

    #[test]
    fn test_set_title() {
        let mut config = Configuration::default();
        config.set_title(None);
        assert_eq!(config.title(), UNTITLED);
        config.set_title(Some("  My Ontology ".to_string()));
        assert_eq!(config.title(), "  My Ontology ");
    }

    #[test]
    fn test_record_fallbacks() {
        let record = PropertyRecord::parse(
            "authors=\ncontributors=\nimportsNames=\nextendsNames=\n",
        )
        .unwrap();
        let config = Configuration::from_record(&record).unwrap();
        assert_eq!(config.title(), DEFAULT_TITLE);
        assert_eq!(config.release_date(), DEFAULT_RELEASE_DATE);
        assert_eq!(config.revision(), "");
        assert_eq!(config.main_ontology(), &OntologyReference::blank());
        // a blank names field still describes one nameless entity
        assert_eq!(config.creators(), &[Agent::new("")]);
        assert_eq!(config.extended_ontologies(), &[OntologyReference::new("")]);
        assert!(!config.license().is_resolved());
    }

    #[test]
    fn test_record_missing_names() {
        let record = PropertyRecord::parse("authors=Alice\ncontributors=\nimportsNames=\n").unwrap();
        match Configuration::from_record(&record) {
            Err(MetadataError::MissingField { key }) => assert_eq!(key, KEY_EXTENDS_NAMES),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_overrides() {
        let mut config = Configuration::default();
        config.set_revision("0.1");
        let overrides = Overrides::builder()
            .title("Wizard title")
            .include_abstract(false)
            .publish_provenance(false)
            .abstract_path("sections/abstract.html")
            .creators(vec![Agent::new("Alice")])
            .license(License::named("CC-BY"))
            .build()
            .unwrap();
        config.apply_overrides(&overrides);
        assert_eq!(config.title(), "Wizard title");
        assert_eq!(config.revision(), "0.1");
        assert!(!config.include_abstract());
        assert!(config.include_introduction());
        assert!(!config.publish_provenance());
        assert_eq!(config.abstract_path(), Some(Path::new("sections/abstract.html")));
        assert_eq!(config.introduction_path(), None);
        assert_eq!(config.creators(), &[Agent::new("Alice")]);
        assert_eq!(config.license(), &License::named("CC-BY"));
        assert!(Overrides::default().is_empty());
        assert!(!overrides.is_empty());
    }

    #[test]
    fn test_import_without_graph_keeps_state() {
        let mut config = Configuration::default();
        config.set_title(Some("Kept".to_string()));
        config
            .import_graph::<oxigraph::model::Graph>(None)
            .unwrap();
        assert_eq!(config.title(), "Kept");
    }

    #[test]
    fn test_json_dump() {
        let mut config = Configuration::default();
        config.set_title(Some("Dumped".to_string()));
        let json = config.to_json().unwrap();
        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
