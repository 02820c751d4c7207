// crates/restcountries-core/src/lib.rs

//! # restcountries-core
//!
//! A read-only catalogue of country reference data: ISO 3166 codes, names in
//! many locales, currencies, languages, geography and presentation assets.
//!
//! The dataset is loaded once into a [`CountryIndex`]. Every query afterwards
//! is a pure read, so the index can be shared between threads behind an `Arc`
//! (or a `&'static` from [`CountryIndex::bundled`]) without locking.
//!
//! ```rust
//! use restcountries_core::{CountryIndex, CountrySearch, FieldSelection};
//!
//! let index = CountryIndex::bundled()?;
//!
//! let usa = index.get_by_code("usa")?.expect("bundled dataset contains USA");
//! assert_eq!(usa.common_name(), "United States");
//!
//! // Reduce the record to the attributes a client asked for.
//! let view = restcountries_core::project_one(usa, &FieldSelection::parse("name,cca3"));
//! assert!(view.cca3.is_some());
//! assert!(view.capital.is_none());
//! # Ok::<(), restcountries_core::CatalogError>(())
//! ```

pub mod common;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod projection;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{CatalogStats, DefaultBackend};
pub use crate::error::{CatalogError, Result};
pub use crate::index::{CountryIndex, DefaultCatalog};
pub use crate::loader::CacheMode;
pub use crate::model::Country;
pub use crate::projection::{
    project, project_many, project_one, project_with, CountryView, FieldSelection, Projected,
    ResultSet,
};
pub use crate::search::CountryQuery;
pub use crate::traits::{CountryBackend, CountrySearch, NameMatch};
