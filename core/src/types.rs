//! Record type definitions for the geographic reference datasets.
//!
//! These are passive, read-only snapshots of the input documents. Every
//! string field is optional so that JSON `null` and missing keys both
//! deserialize cleanly; absent values render as empty strings downstream.
//! Serde field names are lower-case — the loader lowercases incoming object
//! keys so that field-name matching is case-insensitive.

use serde::{Deserialize, Serialize};

/// A country record.
///
/// The identity key for downstream lookups is [`iso2`](Country::iso2): the
/// generated state and city scripts resolve their foreign keys by matching
/// it against `HR.Country.ShortName`.
///
/// # Examples
///
/// ```
/// use geoseed_core::Country;
///
/// let canada: Country = serde_json::from_str(
///     r#"{"id": 39, "name": "Canada", "iso2": "CA", "phonecode": "1"}"#,
/// ).unwrap();
/// assert_eq!(canada.iso2.as_deref(), Some("CA"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Country {
    /// Numeric identifier from the source dataset (0 when absent).
    #[serde(default)]
    pub id: i64,
    /// Country name (e.g. "Canada").
    pub name: Option<String>,
    /// Two-letter ISO 3166-1 code; the join key for dependent records.
    pub iso2: Option<String>,
    /// International dialing prefix, kept as text (e.g. "1", "44").
    pub phonecode: Option<String>,
}

/// A state or province record, belonging to exactly one country.
///
/// The link to the country is carried by
/// [`country_code`](State::country_code), which must match a country's
/// `iso2` for the generated lookup subquery to resolve at insert time. The
/// generator only checks that the code is present, never that it matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    /// Numeric identifier from the source dataset (0 when absent).
    #[serde(default)]
    pub id: i64,
    /// State/province name (e.g. "Ontario").
    pub name: Option<String>,
    /// Two-letter state code within its country.
    pub iso2: Option<String>,
    /// Full ISO 3166-2 subdivision code (e.g. "CA-ON").
    pub iso3166_2: Option<String>,
    /// Numeric id of the owning country in the source dataset.
    #[serde(default)]
    pub country_id: i64,
    /// ISO2 code of the owning country; the lookup key.
    pub country_code: Option<String>,
    /// Name of the owning country, used for group banners.
    pub country_name: Option<String>,
}

impl State {
    /// Returns `true` when the record carries a country code usable for
    /// the `ShortName` lookup. Blank and whitespace-only values count as
    /// absent, and such records are skipped with an explanatory comment.
    ///
    /// # Examples
    ///
    /// ```
    /// use geoseed_core::State;
    ///
    /// let mut state = State::default();
    /// assert!(!state.has_country_code());
    ///
    /// state.country_code = Some("  ".into());
    /// assert!(!state.has_country_code());
    ///
    /// state.country_code = Some("CA".into());
    /// assert!(state.has_country_code());
    /// ```
    pub fn has_country_code(&self) -> bool {
        !is_blank(self.country_code.as_deref())
    }
}

/// A city record.
///
/// A city conceptually belongs to one state within one country, but the
/// record carries no identifiers for either: the generated SQL resolves the
/// relation with nested lookup subqueries on
/// [`country_code`](City::country_code) and [`state_name`](City::state_name).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct City {
    /// Numeric identifier from the source dataset (0 when absent).
    #[serde(default)]
    pub id: i64,
    /// City name, emitted as a unicode SQL literal.
    pub name: Option<String>,
    /// ISO2 code of the owning country; first lookup key.
    pub country_code: Option<String>,
    /// Name of the owning country (informational only).
    pub country_name: Option<String>,
    /// Name of the owning state; second lookup key.
    pub state_name: Option<String>,
    /// Code of the owning state (informational only).
    pub state_code: Option<String>,
}

impl City {
    /// Returns `true` when the record carries a non-blank country code.
    pub fn has_country_code(&self) -> bool {
        !is_blank(self.country_code.as_deref())
    }

    /// Returns `true` when the record carries a non-blank state name.
    ///
    /// Both this and [`has_country_code`](City::has_country_code) must hold
    /// for a city row to be emitted; otherwise the record is skipped with
    /// an explanatory comment.
    pub fn has_state_name(&self) -> bool {
        !is_blank(self.state_name.as_deref())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
