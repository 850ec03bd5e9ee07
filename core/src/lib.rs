//! Core record models for geographic seed data.
//!
//! This crate defines the three record kinds the generator pipeline works
//! with:
//!
//! - [`Country`] — a country with its two-letter ISO code and dialing
//!   prefix. The ISO code is the join key everything else hangs off.
//! - [`State`] — a state/province linked to its country by
//!   [`country_code`](State::country_code).
//! - [`City`] — a city whose state and country are resolved at SQL
//!   execution time via lookup subqueries, not by ids in the record.
//!
//! Records are immutable snapshots of the source documents: they are
//! deserialized once, consulted by the generators, and never persisted.
//!
//! # Example
//!
//! ```
//! use geoseed_core::{City, State};
//!
//! let state: State = serde_json::from_str(
//!     r#"{"id": 866, "name": "Ontario", "country_code": "CA", "country_name": "Canada"}"#,
//! ).unwrap();
//! assert!(state.has_country_code());
//!
//! let city = City::default();
//! assert!(!city.has_state_name());
//! ```

mod types;

pub use types::{City, Country, State};
