// crates/restcountries-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression, the binary cache) and
//! hands parsed records to [`CountryIndex::build`].

use crate::common::DefaultBackend;
use crate::error::Result;
use crate::index::{CountryIndex, DefaultCatalog};
use crate::model::Country;
use crate::traits::CountryBackend;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod common_io;

pub use common_io::open_stream;

/// Suffix appended to a dataset file name to form its binary cache.
pub const CACHE_SUFFIX: &str = "restcountries.bin";

/// The dataset shipped inside the library.
const BUNDLED_JSON: &str = include_str!("../../data/countries.json");

static BUNDLED: OnceCell<DefaultCatalog> = OnceCell::new();

/// Whether [`CountryIndex::load_from_path`] may use a binary cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Read a fresh cache if present; otherwise parse and rewrite it.
    #[default]
    ReadWrite,
    /// Always parse the source; never touch the cache.
    Disabled,
}

/// Parse a JSON array of country records.
pub fn read_records<B, R>(reader: R) -> Result<Vec<Country<B>>>
where
    B: CountryBackend + DeserializeOwned,
    R: Read,
{
    Ok(serde_json::from_reader(reader)?)
}

impl<B> CountryIndex<B>
where
    B: CountryBackend + DeserializeOwned,
{
    /// Build an index from a JSON document held in memory.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<Country<B>> = serde_json::from_str(json)?;
        Self::build(records)
    }

    /// Build an index from any JSON reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Self::build(read_records(reader)?)
    }
}

impl CountryIndex<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.json"
    }

    /// The dataset compiled into the library, parsed on first use.
    ///
    /// The index is read-only, so every caller in the process shares the
    /// same instance.
    pub fn bundled() -> Result<&'static Self> {
        BUNDLED.get_or_try_init(|| {
            debug!(bytes = BUNDLED_JSON.len(), "parsing bundled dataset");
            Self::from_json_str(BUNDLED_JSON)
        })
    }

    /// Load a dataset file (`.json`, or `.json.gz` with the `compact`
    /// feature).
    ///
    /// With [`CacheMode::ReadWrite`] a bincode copy of the sorted records is
    /// kept next to the source and reused while it is newer than the source.
    /// Failing to write the cache is logged and otherwise ignored.
    pub fn load_from_path(path: impl AsRef<Path>, cache: CacheMode) -> Result<Self> {
        let path = path.as_ref();

        if cache == CacheMode::Disabled {
            return Self::from_json_reader(open_stream(path)?);
        }

        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);
        if common_io::is_cache_fresh(path, &cache_path) {
            match read_cache(&cache_path) {
                Ok(records) => {
                    debug!(cache = %cache_path.display(), "binary cache hit");
                    return Self::build(records);
                }
                Err(e) => {
                    debug!(cache = %cache_path.display(), error = %e, "binary cache unreadable")
                }
            }
        } else {
            debug!(cache = %cache_path.display(), "binary cache missing or stale");
        }

        let index = Self::from_json_reader(open_stream(path)?)?;

        if let Err(e) = write_cache(&cache_path, &index.countries) {
            warn!(cache = %cache_path.display(), error = %e, "could not write binary cache");
        }

        Ok(index)
    }
}

fn read_cache(path: &Path) -> Result<Vec<Country<DefaultBackend>>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(bincode::deserialize_from(reader)?)
}

fn write_cache(path: &Path, records: &[Country<DefaultBackend>]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::traits::CountrySearch;

    #[test]
    fn bundled_dataset_parses_once() {
        let first = CountryIndex::bundled().unwrap();
        let second = CountryIndex::bundled().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(!first.is_empty());
    }

    #[test]
    fn bundled_file_is_where_the_locator_says() {
        let path =
            DefaultCatalog::default_data_dir().join(DefaultCatalog::default_dataset_filename());
        let index = DefaultCatalog::load_from_path(&path, CacheMode::Disabled).unwrap();
        assert_eq!(index.len(), CountryIndex::bundled().unwrap().len());
    }

    #[test]
    fn json_must_be_an_array_of_records() {
        let err = DefaultCatalog::from_json_str(r#"{"cca3": "AUT"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn empty_dataset_is_valid() {
        let index = DefaultCatalog::from_json_str("[]").unwrap();
        assert!(index.get_all().is_empty());
    }

    const SPARSE: &str = r#"[
        { "name": { "common": "Atlantis", "official": "Kingdom of Atlantis" }, "cca3": "ATL" }
    ]"#;

    fn parse_any<B: CountryBackend + DeserializeOwned>(json: &str) -> Result<CountryIndex<B>> {
        let records: Vec<Country<B>> = read_records(json.as_bytes())?;
        assert_eq!(records.len(), 1);
        CountryIndex::<B>::from_json_str(json)
    }

    #[test]
    fn absent_attributes_take_their_empty_defaults() {
        let index: DefaultCatalog = parse_any(SPARSE).unwrap();
        let atlantis = &index.get_all()[0];
        assert_eq!(atlantis.cca3(), "ATL");
        assert_eq!(atlantis.cca2(), "");
        assert!(atlantis.capital().is_none());
        assert!(atlantis.name.native_names().next().is_none());
        assert!(atlantis.tld.is_empty() && atlantis.borders.is_empty());
        assert!(!atlantis.landlocked && !atlantis.un_member);
        assert_eq!(atlantis.area(), None);
    }

    #[test]
    fn cache_round_trips_the_master_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.restcountries.bin");

        let bundled = CountryIndex::bundled().unwrap();
        write_cache(&path, bundled.get_all()).unwrap();
        let back = read_cache(&path).unwrap();

        let codes = |list: &[Country<DefaultBackend>]| {
            list.iter().map(|c| c.cca3().to_string()).collect::<Vec<_>>()
        };
        assert_eq!(codes(&back), codes(bundled.get_all()));
        let usa = back.iter().find(|c| c.cca3() == "USA").unwrap();
        assert_eq!(usa.area(), Some(9_372_610.0));

        // Sparse records survive too.
        let sparse: DefaultCatalog = parse_any(SPARSE).unwrap();
        write_cache(&path, sparse.get_all()).unwrap();
        let back = read_cache(&path).unwrap();
        assert_eq!(back.len(), 1);
        assert!(back[0].capitals().next().is_none());
    }
}
