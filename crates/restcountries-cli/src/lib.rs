//! restcountries-cli
//! =================
//!
//! Command-line interface for the `restcountries-core` catalogue.
//!
//! The binary is the composition root: it loads one [`DefaultCatalog`],
//! runs a single query against it and prints the projected result as JSON.
//! A single-record query that finds nothing prints the
//! `{"status":404,"message":"Not Found"}` body and exits non-zero;
//! collection queries always print an array, possibly empty.
//!
//! ```text
//! restcountries stats
//! restcountries alpha usa --fields name,cca3
//! restcountries codes "us,FRA;840"
//! restcountries name "united states" --full-text
//! restcountries region europe --pretty
//! restcountries --input countries.json.gz independent --status false
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use restcountries_core::{
    project_with, CacheMode, CountryIndex, CountrySearch, DefaultBackend, DefaultCatalog,
    FieldSelection, ResultSet,
};
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;
use tracing::debug;

/// Body printed when a single-record lookup finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: &'static str,
}

impl ErrorBody {
    pub const NOT_FOUND: ErrorBody = ErrorBody {
        status: 404,
        message: "Not Found",
    };
}

/// How a query ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    NotFound,
}

/// Load the catalogue named by `--input`, or the bundled one.
pub fn open_catalog(args: &CliArgs) -> anyhow::Result<Cow<'static, DefaultCatalog>> {
    match &args.input {
        Some(path) => {
            let mode = if args.no_cache {
                CacheMode::Disabled
            } else {
                CacheMode::ReadWrite
            };
            let index = DefaultCatalog::load_from_path(path, mode)
                .with_context(|| format!("loading dataset from {}", path.display()))?;
            Ok(Cow::Owned(index))
        }
        None => {
            let index = CountryIndex::bundled().context("loading bundled dataset")?;
            Ok(Cow::Borrowed(index))
        }
    }
}

/// Run one command against `index`, writing JSON to `out`.
pub fn run<W: Write>(
    args: &CliArgs,
    index: &DefaultCatalog,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    debug!(command = ?args.command, fields = ?args.fields, "running query");

    let selection = args
        .fields
        .as_deref()
        .map(FieldSelection::parse)
        .unwrap_or_default();

    let result: Option<ResultSet<'_, DefaultBackend>> = match &args.command {
        Commands::Stats => {
            write_json(out, &index.stats(), args.pretty)?;
            return Ok(Outcome::Found);
        }
        Commands::All => Some(index.get_all().iter().collect::<Vec<_>>().into()),
        Commands::Name { name, first: true, .. } => index.get_by_name(name).map(ResultSet::from),
        Commands::Name { name, full_text: true, .. } => Some(index.get_by_full_name(name).into()),
        Commands::Name { name, .. } => Some(index.search_by_name_part(name).into()),
        Commands::Alpha { code } => index.get_by_code(code)?.map(ResultSet::from),
        Commands::Codes { codes } => Some(index.get_by_codes(codes).into()),
        other => other.query().map(|q| index.search_query(&q).into()),
    };

    match result {
        Some(result) => {
            write_json(out, &project_with(result, &selection), args.pretty)?;
            Ok(Outcome::Found)
        }
        None => {
            write_json(out, &ErrorBody::NOT_FOUND, args.pretty)?;
            Ok(Outcome::NotFound)
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    pretty: bool,
) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
