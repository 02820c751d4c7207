// crates/restcountries-core/src/model/mod.rs

//! The immutable value shape of one country record.

pub mod parts;

use crate::traits::CountryBackend;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use parts::{
    CapitalInfo, Car, CoatOfArms, CountryName, Currency, Demonym, Flags, Idd, LocalizedName,
    Maps, PostalCode,
};

/// One sovereign state or territory.
///
/// Field names follow the REST Countries v3.1 wire format (camelCase on the
/// wire). Codes that may be missing in the dataset (`cca2`, `ccn3`, `cioc`)
/// are optional; `cca3` is optional only so that a record without it can be
/// rejected with [`crate::CatalogError::DataIntegrity`] instead of a parse
/// error.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country<B: CountryBackend> {
    pub name: CountryName<B>,
    #[serde(default)]
    pub tld: Vec<B::Str>,
    pub cca2: Option<B::Str>,
    pub ccn3: Option<B::Str>,
    pub cca3: Option<B::Str>,
    pub cioc: Option<B::Str>,
    /// Tri-state: `None` when the dataset does not know.
    pub independent: Option<bool>,
    pub status: Option<B::Str>,
    #[serde(default)]
    pub un_member: bool,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency<B>>,
    pub idd: Option<Idd<B>>,
    #[serde(default)]
    pub capital: Vec<B::Str>,
    #[serde(default)]
    pub alt_spellings: Vec<B::Str>,
    pub region: Option<B::Str>,
    pub subregion: Option<B::Str>,
    #[serde(default)]
    pub languages: BTreeMap<String, B::Str>,
    #[serde(default)]
    pub translations: BTreeMap<String, LocalizedName<B>>,
    #[serde(default)]
    pub latlng: Vec<B::Float>,
    #[serde(default)]
    pub landlocked: bool,
    /// Neighbours as `cca3` codes.
    #[serde(default)]
    pub borders: Vec<B::Str>,
    pub area: Option<B::Float>,
    #[serde(default)]
    pub demonyms: BTreeMap<String, Demonym<B>>,
    /// Flag emoji.
    pub flag: Option<B::Str>,
    pub maps: Option<Maps<B>>,
    pub population: Option<u64>,
    /// Gini coefficient keyed by survey year.
    #[serde(default)]
    pub gini: BTreeMap<String, B::Float>,
    pub fifa: Option<B::Str>,
    pub car: Option<Car<B>>,
    #[serde(default)]
    pub timezones: Vec<B::Str>,
    #[serde(default)]
    pub continents: Vec<B::Str>,
    pub flags: Option<Flags<B>>,
    pub coat_of_arms: Option<CoatOfArms<B>>,
    pub start_of_week: Option<B::Str>,
    pub capital_info: Option<CapitalInfo<B>>,
    pub postal_code: Option<PostalCode<B>>,
}

impl<B: CountryBackend> Country<B> {
    /// Common display name (e.g. "Germany").
    pub fn common_name(&self) -> &str {
        self.name.common.as_ref()
    }

    /// Official name (e.g. "Federal Republic of Germany").
    pub fn official_name(&self) -> &str {
        self.name.official.as_ref()
    }

    /// ISO 3166-1 alpha-2 code, or an empty string when absent.
    pub fn cca2(&self) -> &str {
        self.cca2.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// ISO 3166-1 alpha-3 code. Never empty once the record is indexed.
    pub fn cca3(&self) -> &str {
        self.cca3.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// ISO 3166-1 numeric code, if the dataset assigns one.
    pub fn ccn3(&self) -> Option<&str> {
        self.ccn3.as_ref().map(|s| s.as_ref())
    }

    /// International Olympic Committee code, if any.
    pub fn cioc(&self) -> Option<&str> {
        self.cioc.as_ref().map(|s| s.as_ref())
    }

    /// Region label (e.g. "Europe") or empty string if unknown.
    pub fn region(&self) -> &str {
        self.region.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// Subregion label (e.g. "Western Europe") or empty string if unknown.
    pub fn subregion(&self) -> &str {
        self.subregion.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// First listed capital, if any.
    pub fn capital(&self) -> Option<&str> {
        self.capital.first().map(|s| s.as_ref())
    }

    pub fn capitals(&self) -> impl Iterator<Item = &str> {
        self.capital.iter().map(|s| s.as_ref())
    }

    pub fn population(&self) -> Option<u64> {
        self.population
    }

    /// Area in km².
    pub fn area(&self) -> Option<f64> {
        self.area.map(B::float_to_f64)
    }
}
