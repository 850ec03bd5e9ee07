//! JSON dataset loading with case-insensitive field-name matching.
//!
//! Each dataset is a JSON array of flat objects. Producers of these files
//! are inconsistent about key casing (`name`, `Name`, `COUNTRY_CODE` all
//! occur in the wild), so every object's top-level keys are lowercased
//! before deserialization into the lower-case serde names of the
//! [`geoseed_core`] models.
//!
//! Loading is all-or-nothing per dataset: a missing file or malformed JSON
//! fails the whole load, while records with missing lookup fields load fine
//! and are dealt with later by the generators.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use geoseed_core::{City, Country, State};

use crate::error::{DatasetError, Result};

/// Fixed file name of the countries dataset.
pub const COUNTRIES_FILE: &str = "Countries.json";
/// Fixed file name of the states dataset.
pub const STATES_FILE: &str = "States.json";
/// Fixed file name of the cities dataset.
pub const CITIES_FILE: &str = "Cities.json";

/// Loads the countries dataset from a JSON file.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be opened,
/// [`DatasetError::NotAnArray`] if the document is not a JSON array, or
/// [`DatasetError::Json`] if any record fails to deserialize.
pub fn load_countries(path: impl AsRef<Path>) -> Result<Vec<Country>> {
    read_records(path.as_ref())
}

/// Loads the states dataset from a JSON file.
///
/// # Errors
///
/// Same failure modes as [`load_countries`].
pub fn load_states(path: impl AsRef<Path>) -> Result<Vec<State>> {
    read_records(path.as_ref())
}

/// Loads the cities dataset from a JSON file.
///
/// # Errors
///
/// Same failure modes as [`load_countries`].
pub fn load_cities(path: impl AsRef<Path>) -> Result<Vec<City>> {
    read_records(path.as_ref())
}

/// All three reference datasets, loaded from one base directory.
///
/// Record order is the input file order; nothing is resorted or filtered at
/// this stage.
///
/// # Examples
///
/// ```no_run
/// use geoseed_db::GeoDataset;
///
/// let dataset = GeoDataset::load_dir("seed-data/").unwrap();
/// println!(
///     "{} countries, {} states, {} cities",
///     dataset.countries.len(),
///     dataset.states.len(),
///     dataset.cities.len(),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeoDataset {
    /// Countries in input file order.
    pub countries: Vec<Country>,
    /// States in input file order.
    pub states: Vec<State>,
    /// Cities in input file order.
    pub cities: Vec<City>,
}

impl GeoDataset {
    /// Loads [`COUNTRIES_FILE`], [`STATES_FILE`], and [`CITIES_FILE`] from
    /// `base`.
    ///
    /// # Errors
    ///
    /// Fails with the first dataset that cannot be read or parsed; no
    /// partial dataset is returned.
    pub fn load_dir(base: impl AsRef<Path>) -> Result<Self> {
        let base = base.as_ref();

        let countries = load_countries(base.join(COUNTRIES_FILE))?;
        debug!(count = countries.len(), "loaded countries dataset");

        let states = load_states(base.join(STATES_FILE))?;
        debug!(count = states.len(), "loaded states dataset");

        let cities = load_cities(base.join(CITIES_FILE))?;
        debug!(count = cities.len(), "loaded cities dataset");

        Ok(Self {
            countries,
            states,
            cities,
        })
    }
}

/// Reads a JSON array of records, lowercasing top-level object keys so that
/// field-name matching is case-insensitive.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let document: Value = serde_json::from_reader(reader)?;

    let Value::Array(items) = document else {
        return Err(DatasetError::NotAnArray(path.display().to_string()));
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(lowercase_keys(item)).map_err(DatasetError::from))
        .collect()
}

/// Lowercases the keys of a JSON object; non-objects pass through untouched
/// and fail later with an ordinary deserialization error.
fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_dataset(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_countries_mixed_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(
            dir.path(),
            "Countries.json",
            r#"[
                {"Id": 39, "Name": "Canada", "Iso2": "CA", "Phonecode": "1"},
                {"id": 233, "name": "United States", "ISO2": "US", "phonecode": "1"}
            ]"#,
        );

        let countries = load_countries(&path).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].name.as_deref(), Some("Canada"));
        assert_eq!(countries[0].iso2.as_deref(), Some("CA"));
        assert_eq!(countries[1].iso2.as_deref(), Some("US"));
    }

    #[test]
    fn test_load_states_preserves_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(
            dir.path(),
            "States.json",
            r#"[
                {"name": "Ontario", "Country_Code": "CA", "Country_Name": "Canada"},
                {"name": "Missouri", "country_code": "US", "country_name": "United States"},
                {"name": "Quebec", "country_code": "CA", "country_name": "Canada"}
            ]"#,
        );

        let states = load_states(&path).unwrap();
        let names: Vec<_> = states.iter().filter_map(|s| s.name.as_deref()).collect();
        assert_eq!(names, vec!["Ontario", "Missouri", "Quebec"]);
        assert_eq!(states[0].country_code.as_deref(), Some("CA"));
    }

    #[test]
    fn test_load_cities_tolerates_null_and_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(
            dir.path(),
            "Cities.json",
            r#"[
                {"name": "O'Fallon", "country_code": "US", "state_name": "Missouri"},
                {"name": "Nowhere", "country_code": null}
            ]"#,
        );

        let cities = load_cities(&path).unwrap();
        assert_eq!(cities.len(), 2);
        assert!(cities[0].has_country_code());
        assert!(!cities[1].has_country_code());
        assert!(cities[1].state_name.is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_countries("/nonexistent/Countries.json").unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn test_non_array_document_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(dir.path(), "Countries.json", r#"{"name": "Canada"}"#);

        let err = load_countries(&path).unwrap_err();
        assert!(matches!(err, DatasetError::NotAnArray(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(dir.path(), "Countries.json", "[{not json");

        let err = load_countries(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[test]
    fn test_load_dir_reads_all_three_datasets() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(
            dir.path(),
            COUNTRIES_FILE,
            r#"[{"name": "Canada", "iso2": "CA", "phonecode": "1"}]"#,
        );
        write_dataset(
            dir.path(),
            STATES_FILE,
            r#"[{"name": "Ontario", "country_code": "CA", "country_name": "Canada"}]"#,
        );
        write_dataset(
            dir.path(),
            CITIES_FILE,
            r#"[{"name": "Toronto", "country_code": "CA", "state_name": "Ontario"}]"#,
        );

        let dataset = GeoDataset::load_dir(dir.path()).unwrap();
        assert_eq!(dataset.countries.len(), 1);
        assert_eq!(dataset.states.len(), 1);
        assert_eq!(dataset.cities.len(), 1);
    }

    #[test]
    fn test_load_dir_fails_when_one_dataset_missing() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), COUNTRIES_FILE, "[]");
        // States.json and Cities.json are absent.

        assert!(GeoDataset::load_dir(dir.path()).is_err());
    }
}
