// crates/restcountries-core/src/index.rs

//! # Dataset Index
//!
//! Turns the loaded record sequence into the master list (stable-sorted by
//! `cca3`) plus lookup views keyed by normalized codes and names. The index
//! is never mutated after [`CountryIndex::build`] returns.

use crate::common::DefaultBackend;
use crate::error::{CatalogError, Result};
use crate::model::Country;
use crate::text::{normalize_code, normalize_name};
use crate::traits::CountryBackend;
use std::collections::HashMap;
use tracing::{info, warn};

/// Positions into the master list, in master order.
pub(crate) type Postings = Vec<usize>;

/// Pre-normalized name forms of one record, parallel to the master list.
#[derive(Clone, Debug)]
pub(crate) struct NameKeys {
    pub common: String,
    pub official: String,
    /// (common, official) per native-name locale, in locale order.
    pub native: Vec<(String, String)>,
}

impl NameKeys {
    fn of<B: CountryBackend>(country: &Country<B>) -> Self {
        NameKeys {
            common: normalize_name(country.common_name()),
            official: normalize_name(country.official_name()),
            native: country
                .name
                .native_names()
                .map(|(_, n)| {
                    (
                        normalize_name(n.common.as_ref()),
                        normalize_name(n.official.as_ref()),
                    )
                })
                .collect(),
        }
    }
}

/// The read-only catalogue.
///
/// Collection-returning queries always produce records in master order; the
/// code maps below are only shortcuts to the same positions a linear scan
/// would find.
#[derive(Clone, Debug)]
pub struct CountryIndex<B: CountryBackend> {
    pub(crate) countries: Vec<Country<B>>,
    pub(crate) names: Vec<NameKeys>,
    pub(crate) by_cca2: HashMap<String, Postings>,
    pub(crate) by_cca3: HashMap<String, Postings>,
    /// Keyed by the exact stored value; numeric codes are never case-folded.
    pub(crate) by_ccn3: HashMap<String, Postings>,
    pub(crate) by_cioc: HashMap<String, Postings>,
}

/// Convenient alias for the default backend.
pub type DefaultCatalog = CountryIndex<DefaultBackend>;

impl<B: CountryBackend> CountryIndex<B> {
    /// Build the index from an unordered record sequence.
    ///
    /// Fails with [`CatalogError::DataIntegrity`] if any record lacks a
    /// non-empty `cca3`. Records are ordered by ordinal `cca3` comparison;
    /// the sort is stable, so duplicates keep their input order.
    pub fn build(records: Vec<Country<B>>) -> Result<Self> {
        if let Some((position, country)) = records
            .iter()
            .enumerate()
            .find(|(_, c)| c.cca3().trim().is_empty())
        {
            return Err(CatalogError::DataIntegrity {
                position,
                name: country.common_name().to_string(),
            });
        }

        let mut countries = records;
        countries.sort_by(|a, b| a.cca3().cmp(b.cca3()));

        let mut by_cca2: HashMap<String, Postings> = HashMap::new();
        let mut by_cca3: HashMap<String, Postings> = HashMap::new();
        let mut by_ccn3: HashMap<String, Postings> = HashMap::new();
        let mut by_cioc: HashMap<String, Postings> = HashMap::new();

        for (pos, c) in countries.iter().enumerate() {
            if !c.cca2().is_empty() {
                by_cca2.entry(normalize_code(c.cca2())).or_default().push(pos);
            }
            by_cca3.entry(normalize_code(c.cca3())).or_default().push(pos);
            if let Some(ccn3) = c.ccn3().filter(|s| !s.is_empty()) {
                by_ccn3.entry(ccn3.to_string()).or_default().push(pos);
            }
            if let Some(cioc) = c.cioc().filter(|s| !s.is_empty()) {
                by_cioc.entry(normalize_code(cioc)).or_default().push(pos);
            }
        }

        for (space, map) in [
            ("cca2", &by_cca2),
            ("cca3", &by_cca3),
            ("ccn3", &by_ccn3),
            ("cioc", &by_cioc),
        ] {
            for (code, postings) in map.iter().filter(|(_, p)| p.len() > 1) {
                warn!(
                    space,
                    code = %code,
                    count = postings.len(),
                    "duplicate country code in dataset"
                );
            }
        }

        let names = countries.iter().map(NameKeys::of).collect();

        info!(countries = countries.len(), "country index built");

        Ok(CountryIndex {
            countries,
            names,
            by_cca2,
            by_cca3,
            by_ccn3,
            by_cioc,
        })
    }

    /// Number of records in the catalogue.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Records at the given master positions.
    pub(crate) fn at(&self, postings: &[usize]) -> Vec<&Country<B>> {
        postings.iter().map(|&pos| &self.countries[pos]).collect()
    }
}
