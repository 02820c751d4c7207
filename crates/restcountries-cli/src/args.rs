use clap::{ArgAction, Parser, Subcommand};
use restcountries_core::CountryQuery;
use std::path::PathBuf;

/// CLI arguments for restcountries
#[derive(Debug, Parser)]
#[command(
    name = "restcountries",
    version,
    about = "Query the restcountries-core country catalogue and print JSON"
)]
pub struct CliArgs {
    /// Dataset file (.json, or .json.gz with the `compact` feature). Defaults
    /// to the dataset bundled with restcountries-core.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Comma or semicolon separated field names to keep (e.g. name,cca3)
    #[arg(short = 'f', long = "fields", global = true)]
    pub fields: Option<String>,

    /// Never read or write the binary cache next to --input
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalogue
    Stats,

    /// List all countries, ordered by cca3
    All,

    /// Search countries by name (substring unless --full-text)
    Name {
        name: String,
        /// Require the whole common or official name to match
        #[arg(long = "full-text")]
        full_text: bool,
        /// Return only the best match (implies --full-text)
        #[arg(long)]
        first: bool,
    },

    /// Lookup one country by cca2, cca3, ccn3 or cioc code
    Alpha {
        /// e.g. DE, DEU, 276 or GER
        code: String,
    },

    /// Lookup several countries by a code list
    Codes {
        /// e.g. "us,FRA;840"
        codes: String,
    },

    /// Countries in a region (e.g. Europe)
    Region { region: String },

    /// Countries in a subregion (e.g. "Western Europe")
    Subregion { subregion: String },

    /// Countries whose capital contains the text
    Capital { capital: String },

    /// Countries using a currency (code or name)
    Currency { currency: String },

    /// Countries speaking a language (code or name)
    Lang { lang: String },

    /// Countries by demonym (e.g. German)
    Demonym { demonym: String },

    /// Countries by translated name
    Translation { translation: String },

    /// Countries by independence status
    Independent {
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        status: bool,
    },
}

impl Commands {
    /// The attribute query behind this command, if it is one.
    pub fn query(&self) -> Option<CountryQuery> {
        let query = match self {
            Commands::Region { region } => CountryQuery::Region(region.clone()),
            Commands::Subregion { subregion } => CountryQuery::Subregion(subregion.clone()),
            Commands::Capital { capital } => CountryQuery::Capital(capital.clone()),
            Commands::Currency { currency } => CountryQuery::Currency(currency.clone()),
            Commands::Lang { lang } => CountryQuery::Language(lang.clone()),
            Commands::Demonym { demonym } => CountryQuery::Demonym(demonym.clone()),
            Commands::Translation { translation } => CountryQuery::Translation(translation.clone()),
            Commands::Independent { status } => CountryQuery::Independent(*status),
            _ => return None,
        };
        Some(query)
    }
}
