// crates/restcountries-core/src/search.rs

//! # Lookup/Search Engine
//!
//! Every query strategy over a [`CountryIndex`]: codes (with the
//! `cca3` → `cioc` fallback), exact and partial names (with the native-name
//! fallback), code lists, arbitrary predicates and the closed set of named
//! attribute queries in [`CountryQuery`].

use crate::common::CatalogStats;
use crate::error::{CatalogError, Result};
use crate::index::{CountryIndex, Postings};
use crate::model::Country;
use crate::text::{
    equals_ignore_case, is_numeric_code, normalize_code, normalize_name, split_codes,
};
use crate::traits::{CountryBackend, CountrySearch, NameMatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// A named attribute query.
///
/// This is the portable form of "filter the master list by a field test": it
/// serializes, so it can cross a process or wire boundary where a closure
/// cannot.
///
/// ```rust
/// use restcountries_core::{CountryIndex, CountryQuery, CountrySearch};
///
/// let index = CountryIndex::bundled()?;
/// let europe = index.search_query(&CountryQuery::Region("europe".into()));
/// assert!(europe.iter().all(|c| c.region() == "Europe"));
/// # Ok::<(), restcountries_core::CatalogError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "lowercase")]
pub enum CountryQuery {
    /// `region` equals the value, ignoring case.
    Region(String),
    /// `subregion` equals the value, ignoring case.
    Subregion(String),
    /// Some capital contains the value (name-normalized).
    Capital(String),
    /// A currency code equals the value (ignoring case) or a currency name
    /// contains it.
    Currency(String),
    /// `independent` is known and equals the flag.
    Independent(bool),
    /// A language code or language name equals the value, ignoring case.
    Language(String),
    /// Some demonym form equals the value, ignoring case.
    Demonym(String),
    /// Some translated common/official name contains the value.
    Translation(String),
}

impl CountryQuery {
    /// True when the query carries no search text (empty or only blanks) and
    /// can match nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            CountryQuery::Independent(_) => false,
            CountryQuery::Region(v)
            | CountryQuery::Subregion(v)
            | CountryQuery::Capital(v)
            | CountryQuery::Currency(v)
            | CountryQuery::Language(v)
            | CountryQuery::Demonym(v)
            | CountryQuery::Translation(v) => v.trim().is_empty(),
        }
    }

    /// Evaluate the query against one record.
    pub fn matches<B: CountryBackend>(&self, c: &Country<B>) -> bool {
        if self.is_empty() {
            return false;
        }
        match self {
            CountryQuery::Region(r) => equals_ignore_case(c.region(), r),
            CountryQuery::Subregion(s) => equals_ignore_case(c.subregion(), s),
            CountryQuery::Capital(q) => {
                let q = normalize_name(q);
                c.capitals().any(|cap| normalize_name(cap).contains(&q))
            }
            CountryQuery::Currency(q) => {
                let folded = normalize_name(q);
                c.currencies.iter().any(|(code, cur)| {
                    code.eq_ignore_ascii_case(q)
                        || cur
                            .name
                            .as_ref()
                            .is_some_and(|n| normalize_name(n.as_ref()).contains(&folded))
                })
            }
            CountryQuery::Independent(flag) => c.independent == Some(*flag),
            CountryQuery::Language(q) => c.languages.iter().any(|(code, name)| {
                equals_ignore_case(code, q) || equals_ignore_case(name.as_ref(), q)
            }),
            CountryQuery::Demonym(q) => c.demonyms.values().any(|d| {
                [d.f.as_ref(), d.m.as_ref()]
                    .into_iter()
                    .flatten()
                    .any(|form| equals_ignore_case(form.as_ref(), q))
            }),
            CountryQuery::Translation(q) => {
                c.translations.values().any(|t| t.name_contains(q))
            }
        }
    }
}

impl<B: CountryBackend> CountryIndex<B> {
    /// Linear scan over the pre-normalized names.
    ///
    /// Primary (common/official) matches win; native names are only consulted
    /// when no primary name matched anywhere.
    fn scan_names<F>(&self, matches: F) -> Vec<&Country<B>>
    where
        F: Fn(&str) -> bool,
    {
        let primary: Vec<&Country<B>> = self
            .names
            .iter()
            .zip(&self.countries)
            .filter(|(keys, _)| {
                matches(keys.common.as_str()) || matches(keys.official.as_str())
            })
            .map(|(_, c)| c)
            .collect();
        if !primary.is_empty() {
            return primary;
        }

        self.names
            .iter()
            .zip(&self.countries)
            .filter(|(keys, _)| {
                keys.native.iter().any(|(common, official)| {
                    matches(common.as_str()) || matches(official.as_str())
                })
            })
            .map(|(_, c)| c)
            .collect()
    }

    /// Resolve postings for a code that must identify at most one record.
    fn single(&self, code: &str, postings: Option<&Postings>) -> Result<Option<&Country<B>>> {
        match postings.map(Vec::as_slice) {
            None | Some([]) => Ok(None),
            Some([pos]) => Ok(Some(&self.countries[*pos])),
            Some(many) => {
                warn!(code, count = many.len(), "ambiguous code lookup");
                Err(CatalogError::AmbiguousResult {
                    code: code.to_string(),
                    count: many.len(),
                })
            }
        }
    }
}

impl<B: CountryBackend> CountrySearch<B> for CountryIndex<B> {
    fn stats(&self) -> CatalogStats {
        let regions: BTreeSet<&str> = self
            .countries
            .iter()
            .map(|c| c.region())
            .filter(|r| !r.is_empty())
            .collect();

        CatalogStats {
            countries: self.countries.len(),
            independent: self
                .countries
                .iter()
                .filter(|c| c.independent == Some(true))
                .count(),
            un_members: self.countries.iter().filter(|c| c.un_member).count(),
            regions: regions.len(),
        }
    }

    fn get_all(&self) -> &[Country<B>] {
        &self.countries
    }

    fn get_by_full_name(&self, name: &str) -> Vec<&Country<B>> {
        if name.trim().is_empty() {
            return Vec::new();
        }
        let q = normalize_name(name);
        self.scan_names(|key| key == q)
    }

    fn search_by_name_part(&self, fragment: &str) -> Vec<&Country<B>> {
        if fragment.trim().is_empty() {
            return Vec::new();
        }
        let q = normalize_name(fragment);
        self.scan_names(|key| key.contains(q.as_str()))
    }

    fn get_by_code(&self, code: &str) -> Result<Option<&Country<B>>> {
        let code = normalize_code(code);
        let postings = match code.chars().count() {
            2 => self.by_cca2.get(&code),
            3 if is_numeric_code(&code) => self.by_ccn3.get(&code),
            // cca3 is authoritative; cioc is only a fallback identifier space.
            3 => self.by_cca3.get(&code).or_else(|| self.by_cioc.get(&code)),
            _ => None,
        };
        self.single(&code, postings)
    }

    fn get_by_codes(&self, codes: &str) -> Vec<&Country<B>> {
        let tokens = split_codes(codes);
        if tokens.is_empty() {
            return Vec::new();
        }

        // A set of master positions: no duplicates, master order on the way out.
        let mut hits: BTreeSet<usize> = BTreeSet::new();
        for token in &tokens {
            for map in [&self.by_cca2, &self.by_cca3, &self.by_ccn3, &self.by_cioc] {
                if let Some(postings) = map.get(token) {
                    hits.extend(postings.iter().copied());
                }
            }
        }
        debug!(tokens = tokens.len(), hits = hits.len(), "code list lookup");

        let positions: Vec<usize> = hits.into_iter().collect();
        self.at(&positions)
    }

    fn search<P>(&self, predicate: P) -> Vec<&Country<B>>
    where
        P: Fn(&Country<B>) -> bool,
    {
        self.countries.iter().filter(|c| predicate(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::testing::{country, record};
    use crate::DefaultCatalog;
    use serde_json::json;

    fn cca3s<B: CountryBackend>(found: &[&Country<B>]) -> Vec<String> {
        found.iter().map(|c| c.cca3().to_string()).collect()
    }

    fn small_index() -> DefaultCatalog {
        let mut swiss = record(
            "CH",
            "CHE",
            Some("756"),
            Some("SUI"),
            "Switzerland",
            "Swiss Confederation",
        );
        swiss["name"]["nativeName"] = json!({
            "fra": { "common": "Suisse", "official": "Confédération suisse" },
            "gsw": { "common": "Schweiz", "official": "Schweizerische Eidgenossenschaft" }
        });
        let records = vec![
            country(record(
                "US",
                "USA",
                Some("840"),
                Some("USA"),
                "United States",
                "United States of America",
            )),
            country(swiss),
            country(record(
                "DE",
                "DEU",
                Some("276"),
                Some("GER"),
                "Germany",
                "Federal Republic of Germany",
            )),
            country(record(
                "UM",
                "UMI",
                Some("581"),
                None,
                "United States Minor Outlying Islands",
                "United States Minor Outlying Islands",
            )),
        ];
        DefaultCatalog::build(records).unwrap()
    }

    #[test]
    fn code_length_selects_identifier_space() {
        let index = small_index();
        assert_eq!(index.get_by_code("ch").unwrap().map(|c| c.cca3()), Some("CHE"));
        assert_eq!(index.get_by_code("che").unwrap().map(|c| c.cca3()), Some("CHE"));
        assert_eq!(index.get_by_code("756").unwrap().map(|c| c.cca3()), Some("CHE"));
        assert!(index.get_by_code("C").unwrap().is_none());
        assert!(index.get_by_code("CHEE").unwrap().is_none());
        assert!(index.get_by_code("").unwrap().is_none());
    }

    #[test]
    fn cioc_is_a_fallback_only() {
        let index = small_index();
        assert_eq!(index.get_by_code("ger").unwrap().map(|c| c.cca3()), Some("DEU"));

        // One record's cioc collides with another record's cca3: cca3 wins.
        let records = vec![
            country(record("AA", "XYZ", None, None, "Alpha", "Alpha")),
            country(record("BB", "BBB", None, Some("XYZ"), "Beta", "Beta")),
        ];
        let index = DefaultCatalog::build(records).unwrap();
        assert_eq!(index.get_by_code("xyz").unwrap().map(|c| c.cca3()), Some("XYZ"));
        assert_eq!(index.get_by_code("bbb").unwrap().map(|c| c.cca3()), Some("BBB"));
    }

    #[test]
    fn numeric_codes_never_reach_alpha_spaces() {
        let records = vec![
            country(record("AA", "123", None, None, "Digits", "Digits")),
            country(record("BB", "BBB", Some("007"), None, "Beta", "Beta")),
        ];
        let index = DefaultCatalog::build(records).unwrap();
        assert!(index.get_by_code("123").unwrap().is_none());
        assert_eq!(index.get_by_code("007").unwrap().map(|c| c.cca3()), Some("BBB"));
        assert!(index.get_by_code("7").unwrap().is_none());
    }

    #[test]
    fn duplicate_codes_surface_as_ambiguity() {
        let records = vec![
            country(record("XX", "AAA", None, None, "One", "One")),
            country(record("xx", "BBB", None, None, "Two", "Two")),
        ];
        let index = DefaultCatalog::build(records).unwrap();
        match index.get_by_code("Xx") {
            Err(CatalogError::AmbiguousResult { code, count }) => {
                assert_eq!(code, "XX");
                assert_eq!(count, 2);
            }
            other => panic!("expected AmbiguousResult, got {other:?}"),
        }
        // The list lookup is a collection query and simply returns both.
        assert_eq!(cca3s(&index.get_by_codes("xx")), vec!["AAA", "BBB"]);
    }

    fn assert_ambiguous<B: CountryBackend + std::fmt::Debug>(index: &CountryIndex<B>, code: &str, expected: &str) {
        match index.get_by_code(code) {
            Err(CatalogError::AmbiguousResult { code, count }) => {
                assert_eq!(code, expected);
                assert_eq!(count, 2);
            }
            other => panic!("expected AmbiguousResult for {code:?}, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_alpha3_codes_surface_as_ambiguity() {
        let records = vec![
            country(record("AA", "aaa", None, None, "One", "One")),
            country(record("BB", "AAA", None, None, "Two", "Two")),
        ];
        let index = DefaultCatalog::build(records).unwrap();
        assert_ambiguous(&index, "aaa", "AAA");
        // Each record is still reachable through its own unique alpha-2 code.
        assert_eq!(index.get_by_code("bb").unwrap().map(|c| c.cca2()), Some("BB"));
    }

    #[test]
    fn duplicate_numeric_codes_surface_as_ambiguity() {
        let records = vec![
            country(record("AA", "AAA", Some("001"), None, "One", "One")),
            country(record("BB", "BBB", Some("001"), None, "Two", "Two")),
        ];
        let index = DefaultCatalog::build(records).unwrap();
        assert_ambiguous(&index, "001", "001");
        assert!(index.get_by_code("002").unwrap().is_none());
    }

    #[test]
    fn duplicate_olympic_codes_surface_as_ambiguity_through_the_fallback() {
        let records = vec![
            country(record("AA", "AAA", None, Some("ZZZ"), "One", "One")),
            country(record("BB", "BBB", None, Some("zzz"), "Two", "Two")),
        ];
        let index = DefaultCatalog::build(records).unwrap();
        assert_ambiguous(&index, "zzz", "ZZZ");
        // The alpha-3 space is unaffected.
        assert_eq!(index.get_by_code("aaa").unwrap().map(|c| c.cca3()), Some("AAA"));
    }

    #[test]
    fn code_list_is_deduplicated_and_in_master_order() {
        let index = small_index();
        let found = index.get_by_codes("usa;us,840 ,ger,che");
        assert_eq!(cca3s(&found), vec!["CHE", "DEU", "USA"]);
        assert!(index.get_by_codes("").is_empty());
        assert!(index.get_by_codes("x,toolong").is_empty());
    }

    #[test]
    fn full_name_prefers_primary_names() {
        let index = small_index();
        assert_eq!(cca3s(&index.get_by_full_name("united states")), vec!["USA"]);
        assert_eq!(
            cca3s(&index.get_by_full_name("SWISS-CONFEDERATION")),
            vec!["CHE"]
        );
        assert!(index.get_by_full_name("united").is_empty());
        assert!(index.get_by_full_name("").is_empty());
    }

    #[test]
    fn full_name_falls_back_to_native_names() {
        let index = small_index();
        assert_eq!(cca3s(&index.get_by_full_name("schweiz")), vec!["CHE"]);
        assert_eq!(
            cca3s(&index.get_by_full_name("confédération suisse")),
            vec!["CHE"]
        );
    }

    #[test]
    fn name_part_matches_substrings() {
        let index = small_index();
        assert_eq!(
            cca3s(&index.search_by_name_part("united states")),
            vec!["UMI", "USA"]
        );
        assert_eq!(cca3s(&index.search_by_name_part("erman")), vec!["DEU"]);
        assert_eq!(cca3s(&index.search_by_name_part("eidgenossen")), vec!["CHE"]);
        assert!(index.search_by_name_part("").is_empty());
    }

    #[test]
    fn best_name_is_the_head_of_the_full_name_search() {
        let index = small_index();
        assert_eq!(index.get_by_name("Germany").map(|c| c.cca3()), Some("DEU"));
        assert_eq!(index.get_by_name("suisse").map(|c| c.cca3()), Some("CHE"));
        assert!(index.get_by_name("Atlantis").is_none());
        assert!(index.get_by_name("").is_none());
    }

    #[test]
    fn empty_queries_match_nothing() {
        let index = small_index();
        assert!(index.search_query(&CountryQuery::Region(String::new())).is_empty());
        assert!(index.search_query(&CountryQuery::Capital(String::new())).is_empty());
        assert_eq!(index.search_query(&CountryQuery::Region("europe".into())).len(), 4);
    }

    #[test]
    fn blank_names_match_nothing() {
        let index = small_index();
        for blank in [" ", "  ", "\t"] {
            assert!(index.search_by_name_part(blank).is_empty(), "{blank:?}");
            assert!(index.get_by_full_name(blank).is_empty(), "{blank:?}");
            assert!(index.get_by_name(blank).is_none(), "{blank:?}");
        }
    }

    #[test]
    fn blank_query_values_match_nothing() {
        let mut value = record("SM", "SMR", Some("674"), Some("SMR"), "San Marino", "San Marino");
        value["capital"] = json!(["City of San Marino"]);
        value["currencies"] = json!({ "EUR": { "name": "Euro cent coins", "symbol": "€" } });
        value["translations"] = json!({
            "ita": { "common": "San Marino", "official": "Serenissima Repubblica" }
        });
        let sm = country(value);

        // Multi-word values contain a blank, so a blank query must not reach them.
        assert!(CountryQuery::Capital("of san".into()).matches(&sm));
        for blank in [
            CountryQuery::Capital(" ".into()),
            CountryQuery::Currency(" ".into()),
            CountryQuery::Translation(" ".into()),
            CountryQuery::Region("  ".into()),
        ] {
            assert!(blank.is_empty(), "{blank:?}");
            assert!(!blank.matches(&sm), "{blank:?}");
        }

        let index = DefaultCatalog::build(vec![sm]).unwrap();
        assert!(index.search_query(&CountryQuery::Capital(" ".into())).is_empty());
        assert!(index.search_query(&CountryQuery::Translation("\t".into())).is_empty());
        assert!(!CountryQuery::Independent(false).is_empty());
    }

    #[test]
    fn query_round_trips_through_json() {
        let q = CountryQuery::Independent(true);
        let wire = serde_json::to_string(&q).unwrap();
        assert_eq!(wire, r#"{"by":"independent","value":true}"#);
        let back: CountryQuery = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, q);
    }
}
