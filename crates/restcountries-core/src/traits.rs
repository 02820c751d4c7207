// crates/restcountries-core/src/traits.rs
use crate::common::CatalogStats;
use crate::error::Result;
use crate::model::Country;
use crate::search::CountryQuery;
use crate::text::normalize_name;
use serde::{Deserialize, Serialize};

/// How a catalogue stores the text and numbers inside its records.
///
/// [`crate::Country`] and every nested value are generic over the backend, so
/// the same model parses from JSON, round-trips through the bincode cache
/// and is viewed through `&str`/`f64` accessors whatever the storage type.
/// `Default` is required because absent list and map attributes deserialize
/// to their empty value.
pub trait CountryBackend: Clone + Default + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    /// Read a stored float as `f64` (used by accessors such as
    /// [`crate::Country::area`]).
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Substring matching over a (common, official) name pair.
///
/// Comparisons run on [`normalize_name`] forms, so they are case-insensitive
/// and treat blanks and hyphens as the same character. A query that is empty
/// after trimming matches nothing.
///
/// # Examples
/// ```rust
/// use restcountries_core::traits::NameMatch;
///
/// struct Pair(&'static str, &'static str);
/// impl NameMatch for Pair {
///     fn common_str(&self) -> &str { self.0 }
///     fn official_str(&self) -> &str { self.1 }
/// }
///
/// let pair = Pair("United States", "United States of America");
/// assert!(pair.name_contains("STATES OF"));
/// assert!(pair.name_contains("united-states"));
/// assert!(!pair.name_contains("  "));
/// ```
pub trait NameMatch {
    /// The common (short) form of the name.
    fn common_str(&self) -> &str;

    /// The official (long) form of the name.
    fn official_str(&self) -> &str;

    /// Returns `true` if the normalized common or official form contains the
    /// normalized `q`.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        if q.trim().is_empty() {
            return false;
        }
        let q = normalize_name(q);
        normalize_name(self.common_str()).contains(&q)
            || normalize_name(self.official_str()).contains(&q)
    }
}

/// The query surface of the catalogue.
///
/// Every operation is a pure read: repeated calls return the same records in
/// the same (master, ascending `cca3`) order. Empty input yields `None` or an
/// empty collection, never an error.
pub trait CountrySearch<B: CountryBackend> {
    fn stats(&self) -> CatalogStats;

    /// All countries, ordered ascending by `cca3`.
    ///
    /// ```rust
    /// use restcountries_core::{CountryIndex, CountrySearch};
    ///
    /// let index = CountryIndex::bundled()?;
    /// let codes: Vec<&str> = index.get_all().iter().map(|c| c.cca3()).collect();
    /// let mut sorted = codes.clone();
    /// sorted.sort();
    /// assert_eq!(codes, sorted);
    /// # Ok::<(), restcountries_core::CatalogError>(())
    /// ```
    fn get_all(&self) -> &[Country<B>];

    /// The first country whose common or official name equals `name`, falling
    /// back to native-name forms when no primary name matches.
    fn get_by_name(&self, name: &str) -> Option<&Country<B>> {
        self.get_by_full_name(name).into_iter().next()
    }

    /// All countries whose common or official name equals `name`; if there are
    /// none, all countries with an equal native-name form.
    fn get_by_full_name(&self, name: &str) -> Vec<&Country<B>>;

    /// All countries whose common or official name contains `fragment`; if
    /// there are none, all countries with a native-name form containing it.
    fn search_by_name_part(&self, fragment: &str) -> Vec<&Country<B>>;

    /// Resolve a 2-letter, 3-letter or 3-digit code to a single country.
    ///
    /// Returns [`crate::CatalogError::AmbiguousResult`] when the dataset holds
    /// the same code more than once.
    ///
    /// ```rust
    /// use restcountries_core::{CountryIndex, CountrySearch};
    ///
    /// let index = CountryIndex::bundled()?;
    /// let by_alpha = index.get_by_code("USA")?.map(|c| c.cca3());
    /// let by_numeric = index.get_by_code("840")?.map(|c| c.cca3());
    /// assert_eq!(by_alpha, Some("USA"));
    /// assert_eq!(by_alpha, by_numeric);
    /// assert!(index.get_by_code("ZZ1")?.is_none());
    /// # Ok::<(), restcountries_core::CatalogError>(())
    /// ```
    fn get_by_code(&self, code: &str) -> Result<Option<&Country<B>>>;

    /// All countries matching any code in a `,`/`;` separated list.
    fn get_by_codes(&self, codes: &str) -> Vec<&Country<B>>;

    /// All countries for which `predicate` holds, in master order.
    fn search<P>(&self, predicate: P) -> Vec<&Country<B>>
    where
        P: Fn(&Country<B>) -> bool;

    /// Evaluate one of the named attribute queries.
    fn search_query(&self, query: &CountryQuery) -> Vec<&Country<B>> {
        if query.is_empty() {
            return Vec::new();
        }
        self.search(|c| query.matches(c))
    }
}
