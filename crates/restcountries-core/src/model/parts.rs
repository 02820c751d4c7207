// crates/restcountries-core/src/model/parts.rs

//! Nested value shapes carried by a [`super::Country`].

use crate::traits::{CountryBackend, NameMatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The name group of a country: common and official forms plus native names
/// keyed by locale tag (ISO 639-3, e.g. `"deu"`).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryName<B: CountryBackend> {
    pub common: B::Str,
    pub official: B::Str,
    #[serde(default)]
    pub native_name: BTreeMap<String, LocalizedName<B>>,
}

/// A (common, official) pair in one locale. Used for native names and
/// translations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalizedName<B: CountryBackend> {
    pub common: B::Str,
    pub official: B::Str,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Currency<B: CountryBackend> {
    pub name: Option<B::Str>,
    pub symbol: Option<B::Str>,
}

/// International direct dialling: root (`"+4"`) and suffixes (`["9"]`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Idd<B: CountryBackend> {
    pub root: Option<B::Str>,
    #[serde(default)]
    pub suffixes: Vec<B::Str>,
}

/// Feminine and masculine demonym in one locale.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Demonym<B: CountryBackend> {
    pub f: Option<B::Str>,
    pub m: Option<B::Str>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maps<B: CountryBackend> {
    pub google_maps: Option<B::Str>,
    pub open_street_maps: Option<B::Str>,
}

/// Vehicle registration signs and driving side.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Car<B: CountryBackend> {
    #[serde(default)]
    pub signs: Vec<B::Str>,
    pub side: Option<B::Str>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Flags<B: CountryBackend> {
    pub png: Option<B::Str>,
    pub svg: Option<B::Str>,
    pub alt: Option<B::Str>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoatOfArms<B: CountryBackend> {
    pub png: Option<B::Str>,
    pub svg: Option<B::Str>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapitalInfo<B: CountryBackend> {
    #[serde(default)]
    pub latlng: Vec<B::Float>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PostalCode<B: CountryBackend> {
    pub format: Option<B::Str>,
    pub regex: Option<B::Str>,
}

impl<B: CountryBackend> NameMatch for LocalizedName<B> {
    #[inline]
    fn common_str(&self) -> &str {
        self.common.as_ref()
    }

    #[inline]
    fn official_str(&self) -> &str {
        self.official.as_ref()
    }
}

impl<B: CountryBackend> CountryName<B> {
    /// Native names in locale order.
    pub fn native_names(&self) -> impl Iterator<Item = (&str, &LocalizedName<B>)> {
        self.native_name.iter().map(|(locale, name)| (locale.as_str(), name))
    }
}
