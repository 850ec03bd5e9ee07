//! City script generation with periodic batch separators.

use tracing::warn;

use geoseed_core::City;

use crate::escape::escape;
use crate::script::SqlScript;

/// Rows per batch before a `GO` separator is appended, so tooling never has
/// to parse one arbitrarily large batch.
pub const BATCH_SIZE: usize = 1000;

/// Generates the `HR.City` insert script.
///
/// Records are processed in input order. A record missing either its
/// `country_code` or its `state_name` is replaced by a skip comment; all
/// others become an INSERT whose `CountryCode` and `StateCode` are resolved
/// by nested `SELECT TOP 1` lookups, with the city name emitted as a
/// unicode (`N'...'`) literal. After every [`BATCH_SIZE`]th emitted row a
/// `GO` separator is appended; skipped records never advance the batch
/// counter.
///
/// Unlike the country and state scripts, the city script carries no
/// TRY/TRANSACTION envelope — it is raw sequential INSERTs. That asymmetry
/// is part of the output contract and is preserved here.
pub fn generate_city_sql(cities: &[City]) -> SqlScript {
    let mut sql = String::new();
    let mut inserted = 0;
    let mut skipped = 0;

    for city in cities {
        if !city.has_country_code() || !city.has_state_name() {
            warn!(city = ?city.name, "skipping city without lookup keys");
            sql.push_str(&format!(
                "-- Skipped city '{}' (Missing CountryCode or StateName)\n",
                escape(city.name.as_deref()),
            ));
            skipped += 1;
            continue;
        }

        let country_code = escape(city.country_code.as_deref());
        let state_name = escape(city.state_name.as_deref());

        sql.push_str(&format!(
            "INSERT INTO HR.City (CountryCode, StateCode, CityName, IsActive, CreatedBy, CreatedOn)
VALUES (
    (SELECT TOP 1 CountryCode FROM HR.Country WHERE ShortName = '{country_code}'),
    (SELECT TOP 1 StateCode FROM HR.State
        WHERE StateName = '{state_name}'
          AND CountryCode = (SELECT TOP 1 CountryCode FROM HR.Country WHERE ShortName = '{country_code}')),
    N'{name}', 1, 25, GETDATE());
",
            name = escape(city.name.as_deref()),
        ));
        inserted += 1;

        if inserted % BATCH_SIZE == 0 {
            sql.push_str("GO\n\n");
        }
    }

    SqlScript {
        sql,
        inserted,
        skipped,
    }
}
