//! Dataset loading for geographic seed data.
//!
//! This crate reads the three reference datasets — countries, states, and
//! cities — from JSON documents into the [`geoseed_core`] record models.
//! Field-name matching is case-insensitive: object keys are lowercased
//! before deserialization, so `Name`, `name`, and `NAME` all populate the
//! same field.
//!
//! # Quick start
//!
//! ```no_run
//! use geoseed_db::{GeoDataset, load_countries};
//!
//! // Load one dataset from an explicit path
//! let countries = load_countries("seed-data/Countries.json").unwrap();
//!
//! // Or all three from a base directory using the fixed file names
//! let dataset = GeoDataset::load_dir("seed-data/").unwrap();
//! assert_eq!(dataset.countries.len(), countries.len());
//! ```

mod error;
mod loader;

pub use error::{DatasetError, Result};
pub use loader::{
    CITIES_FILE, COUNTRIES_FILE, GeoDataset, STATES_FILE, load_cities, load_countries, load_states,
};
