// crates/restcountries-core/src/common.rs
use crate::traits::CountryBackend;
use serde::{Deserialize, Serialize};

/// Default backend: plain `String` + `f64`.
///
/// Used by [`crate::DefaultCatalog`], the bundled dataset and the file
/// loader.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DefaultBackend;

impl CountryBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

/// Simple aggregate statistics for the catalogue.
///
/// Returned by [`crate::CountrySearch::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub countries: usize,
    pub independent: usize,
    pub un_members: usize,
    pub regions: usize,
}
