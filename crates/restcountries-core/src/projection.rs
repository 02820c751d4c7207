// crates/restcountries-core/src/projection.rs

//! # Field Projection Filter
//!
//! Reduces query results to the attributes a client asked for.
//!
//! Projection never touches the stored records: a [`CountryView`] is a
//! private working copy made of borrowed slots, one per attribute, and
//! clearing a slot only drops the borrow. Two concurrent projections of the
//! same record with different selections therefore cannot observe each other.
//!
//! Attributes are listed once, in the table returned by
//! [`CountryView::fields`]; the filter logic only iterates that table.

use crate::model::{
    CapitalInfo, Car, CoatOfArms, Country, CountryName, Currency, Demonym, Flags, Idd,
    LocalizedName, Maps, PostalCode,
};
use crate::traits::CountryBackend;
use serde::Serialize;
use std::collections::BTreeMap;

/// Fields cleared when the client does not name any.
const DERIVED_NAME_FIELDS: [&str; 2] = ["common", "official"];

/// Which attributes survive projection.
///
/// Tokens are stored lower-cased. A field matches a selection when any token
/// is a substring of the lower-cased field name, so `"cap"` matches both
/// `capital` and `capitalInfo` while `"car"` matches only `car`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldSelection {
    /// Keep matching fields, clear the rest.
    Include(Vec<String>),
    /// Clear matching fields, keep the rest.
    Exclude(Vec<String>),
}

impl Default for FieldSelection {
    /// Hide the derived `common`/`official` duplicates of `name`.
    fn default() -> Self {
        FieldSelection::Exclude(DERIVED_NAME_FIELDS.iter().map(|s| s.to_string()).collect())
    }
}

impl FieldSelection {
    /// Parse a `fields` request parameter (`"name,cca3;capital"`).
    ///
    /// ```rust
    /// use restcountries_core::FieldSelection;
    ///
    /// assert_eq!(
    ///     FieldSelection::parse(" Name ;cca3,,"),
    ///     FieldSelection::Include(vec!["name".into(), "cca3".into()])
    /// );
    /// assert_eq!(FieldSelection::parse(" , "), FieldSelection::default());
    /// ```
    pub fn parse(param: &str) -> Self {
        Self::from_tokens(param.split(&[',', ';'][..]))
    }

    /// Build a selection from an already split list of field names.
    pub fn from_requested<S: AsRef<str>>(requested: &[S]) -> Self {
        Self::from_tokens(requested.iter().map(|s| s.as_ref()))
    }

    fn from_tokens<'t, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'t str>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();

        if tokens.is_empty() {
            Self::default()
        } else {
            FieldSelection::Include(tokens)
        }
    }

    fn tokens(&self) -> &[String] {
        match self {
            FieldSelection::Include(t) | FieldSelection::Exclude(t) => t,
        }
    }

    /// Does any token occur inside `field`?
    pub fn matches(&self, field: &str) -> bool {
        let field = field.to_lowercase();
        self.tokens().iter().any(|t| field.contains(t.as_str()))
    }

    /// Should `field` survive projection?
    pub fn keeps(&self, field: &str) -> bool {
        match self {
            FieldSelection::Include(_) => self.matches(field),
            FieldSelection::Exclude(_) => !self.matches(field),
        }
    }
}

/// A projected record: every populated slot borrows from the stored
/// [`Country`]; cleared slots are `None` and are omitted when serialized.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryView<'a, B: CountryBackend> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a CountryName<B>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tld: Option<&'a Vec<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cca2: Option<&'a Option<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ccn3: Option<&'a Option<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cca3: Option<&'a Option<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cioc: Option<&'a Option<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub independent: Option<&'a Option<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'a Option<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub un_member: Option<&'a bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currencies: Option<&'a BTreeMap<String, Currency<B>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idd: Option<&'a Option<Idd<B>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital: Option<&'a Vec<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_spellings: Option<&'a Vec<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'a Option<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subregion: Option<&'a Option<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<&'a BTreeMap<String, B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<&'a BTreeMap<String, LocalizedName<B>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latlng: Option<&'a Vec<B::Float>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landlocked: Option<&'a bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borders: Option<&'a Vec<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<&'a Option<B::Float>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demonyms: Option<&'a BTreeMap<String, Demonym<B>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<&'a Option<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps: Option<&'a Option<Maps<B>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<&'a Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gini: Option<&'a BTreeMap<String, B::Float>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifa: Option<&'a Option<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car: Option<&'a Option<Car<B>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezones: Option<&'a Vec<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continents: Option<&'a Vec<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<&'a Option<Flags<B>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coat_of_arms: Option<&'a Option<CoatOfArms<B>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_of_week: Option<&'a Option<B::Str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital_info: Option<&'a Option<CapitalInfo<B>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<&'a Option<PostalCode<B>>>,

    /// Derived copy of `name.common`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common: Option<&'a str>,
    /// Derived copy of `name.official`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official: Option<&'a str>,
}

/// One row of the projection table: wire name, presence test, clear action.
pub struct ViewField<B: CountryBackend> {
    pub name: &'static str,
    present: fn(&CountryView<'_, B>) -> bool,
    clear: fn(&mut CountryView<'_, B>),
}

impl<B: CountryBackend> ViewField<B> {
    pub fn is_present(&self, view: &CountryView<'_, B>) -> bool {
        (self.present)(view)
    }

    pub fn clear(&self, view: &mut CountryView<'_, B>) {
        (self.clear)(view)
    }
}

macro_rules! field {
    ($wire:literal, $slot:ident) => {
        ViewField {
            name: $wire,
            present: |view| view.$slot.is_some(),
            clear: |view| view.$slot = None,
        }
    };
}

impl<'a, B: CountryBackend> CountryView<'a, B> {
    /// Every projectable attribute, in wire order. A new attribute needs one
    /// slot on the view and one row here.
    const FIELDS: &'static [ViewField<B>] = &[
        field!("name", name),
        field!("tld", tld),
        field!("cca2", cca2),
        field!("ccn3", ccn3),
        field!("cca3", cca3),
        field!("cioc", cioc),
        field!("independent", independent),
        field!("status", status),
        field!("unMember", un_member),
        field!("currencies", currencies),
        field!("idd", idd),
        field!("capital", capital),
        field!("altSpellings", alt_spellings),
        field!("region", region),
        field!("subregion", subregion),
        field!("languages", languages),
        field!("translations", translations),
        field!("latlng", latlng),
        field!("landlocked", landlocked),
        field!("borders", borders),
        field!("area", area),
        field!("demonyms", demonyms),
        field!("flag", flag),
        field!("maps", maps),
        field!("population", population),
        field!("gini", gini),
        field!("fifa", fifa),
        field!("car", car),
        field!("timezones", timezones),
        field!("continents", continents),
        field!("flags", flags),
        field!("coatOfArms", coat_of_arms),
        field!("startOfWeek", start_of_week),
        field!("capitalInfo", capital_info),
        field!("postalCode", postal_code),
        field!("common", common),
        field!("official", official),
    ];

    /// The projection table.
    pub fn fields() -> &'static [ViewField<B>] {
        Self::FIELDS
    }

    /// A full view of `country`, derived name fields included.
    pub fn of(country: &'a Country<B>) -> Self {
        CountryView {
            name: Some(&country.name),
            tld: Some(&country.tld),
            cca2: Some(&country.cca2),
            ccn3: Some(&country.ccn3),
            cca3: Some(&country.cca3),
            cioc: Some(&country.cioc),
            independent: Some(&country.independent),
            status: Some(&country.status),
            un_member: Some(&country.un_member),
            currencies: Some(&country.currencies),
            idd: Some(&country.idd),
            capital: Some(&country.capital),
            alt_spellings: Some(&country.alt_spellings),
            region: Some(&country.region),
            subregion: Some(&country.subregion),
            languages: Some(&country.languages),
            translations: Some(&country.translations),
            latlng: Some(&country.latlng),
            landlocked: Some(&country.landlocked),
            borders: Some(&country.borders),
            area: Some(&country.area),
            demonyms: Some(&country.demonyms),
            flag: Some(&country.flag),
            maps: Some(&country.maps),
            population: Some(&country.population),
            gini: Some(&country.gini),
            fifa: Some(&country.fifa),
            car: Some(&country.car),
            timezones: Some(&country.timezones),
            continents: Some(&country.continents),
            flags: Some(&country.flags),
            coat_of_arms: Some(&country.coat_of_arms),
            start_of_week: Some(&country.start_of_week),
            capital_info: Some(&country.capital_info),
            postal_code: Some(&country.postal_code),
            common: Some(country.common_name()),
            official: Some(country.official_name()),
        }
    }

    /// Clear every slot the selection does not keep.
    pub fn apply(&mut self, selection: &FieldSelection) {
        for field in Self::fields() {
            if !selection.keeps(field.name) {
                field.clear(self);
            }
        }
    }

    /// Wire names of the slots still populated, in table order.
    pub fn retained(&self) -> Vec<&'static str> {
        Self::fields()
            .iter()
            .filter(|field| field.is_present(self))
            .map(|field| field.name)
            .collect()
    }
}

/// What a query returned: one record or a collection.
#[derive(Clone, Debug)]
pub enum ResultSet<'a, B: CountryBackend> {
    Single(&'a Country<B>),
    Collection(Vec<&'a Country<B>>),
}

impl<'a, B: CountryBackend> From<&'a Country<B>> for ResultSet<'a, B> {
    fn from(country: &'a Country<B>) -> Self {
        ResultSet::Single(country)
    }
}

impl<'a, B: CountryBackend> From<Vec<&'a Country<B>>> for ResultSet<'a, B> {
    fn from(countries: Vec<&'a Country<B>>) -> Self {
        ResultSet::Collection(countries)
    }
}

/// The projected shape of a [`ResultSet`]: an object or an array on the wire.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Projected<'a, B: CountryBackend> {
    One(CountryView<'a, B>),
    Many(Vec<CountryView<'a, B>>),
}

impl<'a, B: CountryBackend> Projected<'a, B> {
    pub fn len(&self) -> usize {
        match self {
            Projected::One(_) => 1,
            Projected::Many(views) => views.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Project a result against the client's requested field names.
///
/// A non-empty `requested` list selects include mode; an empty one hides only
/// the derived `common`/`official` fields.
///
/// ```rust
/// use restcountries_core::{project, CountryIndex, CountrySearch, DefaultBackend, Projected};
///
/// let index = CountryIndex::bundled()?;
/// let europe = index.search(|c| c.region() == "Europe");
/// let projected: Projected<'_, DefaultBackend> = project(europe, &["cca3"]);
/// match projected {
///     Projected::Many(views) => assert!(views.iter().all(|v| v.retained() == ["cca3"])),
///     Projected::One(_) => unreachable!(),
/// }
/// # Ok::<(), restcountries_core::CatalogError>(())
/// ```
pub fn project<'a, B, R, S>(result: R, requested: &[S]) -> Projected<'a, B>
where
    B: CountryBackend,
    R: Into<ResultSet<'a, B>>,
    S: AsRef<str>,
{
    project_with(result, &FieldSelection::from_requested(requested))
}

/// Project a result against a parsed selection.
pub fn project_with<'a, B, R>(result: R, selection: &FieldSelection) -> Projected<'a, B>
where
    B: CountryBackend,
    R: Into<ResultSet<'a, B>>,
{
    match result.into() {
        ResultSet::Single(country) => Projected::One(project_one(country, selection)),
        ResultSet::Collection(countries) => Projected::Many(project_many(countries, selection)),
    }
}

pub fn project_one<'a, B: CountryBackend>(
    country: &'a Country<B>,
    selection: &FieldSelection,
) -> CountryView<'a, B> {
    let mut view = CountryView::of(country);
    view.apply(selection);
    view
}

pub fn project_many<'a, B, I>(countries: I, selection: &FieldSelection) -> Vec<CountryView<'a, B>>
where
    B: CountryBackend,
    I: IntoIterator<Item = &'a Country<B>>,
{
    countries
        .into_iter()
        .map(|country| project_one(country, selection))
        .collect()
}
