//! SQL seed-script generation for geographic reference data.
//!
//! Three generators turn in-memory record slices into SQL text targeting an
//! `HR.*` schema, with all foreign-key-like relations resolved by lookup
//! subqueries at script-execution time:
//!
//! - [`generate_country_sql`] — one INSERT per country, wrapped in a
//!   TRY/TRANSACTION envelope; nothing is ever skipped.
//! - [`generate_state_sql`] — states grouped by country code in first-seen
//!   order with banner comments, records without a code skipped with an
//!   inline comment, same envelope.
//! - [`generate_city_sql`] — raw sequential INSERTs (no envelope) with
//!   nested country/state lookups and a `GO` batch separator after every
//!   [`BATCH_SIZE`] emitted rows.
//!
//! Every interpolated value passes through [`escape`], the single place the
//! single-quote-doubling rule is enforced. Generators are pure functions:
//! the same records in the same order always yield byte-identical scripts.
//!
//! # Example
//!
//! ```
//! use geoseed_core::State;
//! use geoseed_sql::generate_state_sql;
//!
//! let ontario = State {
//!     name: Some("Ontario".into()),
//!     country_code: Some("CA".into()),
//!     country_name: Some("Canada".into()),
//!     ..State::default()
//! };
//!
//! let script = generate_state_sql(&[ontario]);
//! assert_eq!(script.inserted, 1);
//! assert!(script.sql.contains("SELECT CountryCode FROM HR.Country WHERE ShortName='CA'"));
//! ```

mod city;
mod country;
mod escape;
mod script;
mod state;

pub use city::{BATCH_SIZE, generate_city_sql};
pub use country::generate_country_sql;
pub use escape::escape;
pub use script::SqlScript;
pub use state::generate_state_sql;
