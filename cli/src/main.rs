use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use ontodoc::util::{init_logging, is_url};
use ontodoc::{Configuration, Overrides};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ontodoc")]
#[command(about = "Inspect the metadata used to document an ontology")]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Verbose mode - sets the RUST_LOG level to info, defaults to warning level
    #[clap(long, short, action, default_value = "false", global = true)]
    verbose: bool,
    /// Debug mode - sets the RUST_LOG level to debug, defaults to warning level
    #[clap(long, action, default_value = "false", global = true)]
    debug: bool,
}

/// Values typed into the documentation wizard, applied after the record and the ontology.
#[derive(Debug, Args)]
struct OverrideArgs {
    #[clap(long)]
    title: Option<String>,
    #[clap(long)]
    release_date: Option<String>,
    #[clap(long)]
    this_version: Option<String>,
    #[clap(long)]
    latest_version: Option<String>,
    #[clap(long)]
    previous_version: Option<String>,
    #[clap(long)]
    revision: Option<String>,
    #[clap(long)]
    language: Option<String>,
    #[clap(long)]
    documentation_uri: Option<String>,
    /// Leave the abstract section out
    #[clap(long, action)]
    no_abstract: bool,
    /// Leave the introduction section out
    #[clap(long, action)]
    no_introduction: bool,
    /// Leave the overview section out
    #[clap(long, action)]
    no_overview: bool,
    /// Leave the description section out
    #[clap(long, action)]
    no_description: bool,
    /// Leave the references section out
    #[clap(long, action)]
    no_references: bool,
    /// Do not publish provenance
    #[clap(long, action)]
    no_provenance: bool,
}

impl OverrideArgs {
    fn to_overrides(&self) -> Overrides {
        let off = |flag: bool| flag.then_some(false);
        Overrides {
            title: self.title.clone(),
            release_date: self.release_date.clone(),
            this_version: self.this_version.clone(),
            latest_version: self.latest_version.clone(),
            previous_version: self.previous_version.clone(),
            revision: self.revision.clone(),
            language: self.language.clone(),
            documentation_uri: self.documentation_uri.clone(),
            include_abstract: off(self.no_abstract),
            include_introduction: off(self.no_introduction),
            include_overview: off(self.no_overview),
            include_description: off(self.no_description),
            include_references: off(self.no_references),
            publish_provenance: off(self.no_provenance),
            ..Default::default()
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the documentation metadata and print it
    Show {
        /// Property record to load, defaults to config/config.properties next to the binary
        #[clap(long, short)]
        record: Option<PathBuf>,
        /// Ontology file to import metadata from; replaces whatever the record provided
        #[clap(long, short)]
        ontology: Option<PathBuf>,
        /// Print the configuration as JSON
        #[clap(long, action, default_value = "false")]
        json: bool,
        #[command(flatten)]
        overrides: OverrideArgs,
    },
    /// Report whether each value would be treated as a URL or as a plain name
    CheckUrl {
        #[clap(required = true)]
        values: Vec<String>,
    },
    /// Prints the version of the ontodoc binary
    Version,
}

fn main() -> Result<()> {
    let cmd = Cli::parse();

    let log_level = if cmd.verbose { "info" } else { "warn" };
    let log_level = if cmd.debug { "debug" } else { log_level };
    init_logging(log_level);

    match cmd.command {
        Commands::Show {
            record,
            ontology,
            json,
            overrides,
        } => {
            let mut config = match record {
                Some(path) => {
                    let mut config = Configuration::default();
                    config.load_record(&path)?;
                    config
                }
                None => Configuration::new(),
            };
            if let Some(path) = ontology {
                info!("Importing metadata from {}", path.display());
                config.import_file(&path)?;
            }
            let overrides = overrides.to_overrides();
            if !overrides.is_empty() {
                debug!("Applying overrides: {:?}", overrides);
                config.apply_overrides(&overrides);
            }
            if json {
                println!("{}", config.to_json()?);
            } else {
                config.print();
            }
        }
        Commands::CheckUrl { values } => {
            for value in values {
                let kind = if is_url(&value) { "url" } else { "name" };
                println!("{}\t{}", value, kind);
            }
        }
        Commands::Version => {
            println!("ontodoc {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
