//! Country script generation.

use geoseed_core::Country;

use crate::escape::escape;
use crate::script::{SqlScript, TRANSACTION_PROLOGUE, transaction_epilogue};

/// Generates the `HR.Country` insert script.
///
/// Emits exactly one INSERT per input record in input order — country
/// records are never skipped, there is no validation at this stage. The
/// whole script is wrapped in a TRY/TRANSACTION envelope that rolls back
/// and prints a diagnostic on failure.
///
/// # Examples
///
/// ```
/// use geoseed_core::Country;
/// use geoseed_sql::generate_country_sql;
///
/// let canada = Country {
///     name: Some("Canada".into()),
///     iso2: Some("CA".into()),
///     phonecode: Some("1".into()),
///     ..Country::default()
/// };
///
/// let script = generate_country_sql(&[canada]);
/// assert_eq!(script.inserted, 1);
/// assert!(script.sql.contains("'Canada', 'CA', '1', 1, 25, GETDATE()"));
/// ```
pub fn generate_country_sql(countries: &[Country]) -> SqlScript {
    let mut sql = String::from(TRANSACTION_PROLOGUE);

    for country in countries {
        sql.push_str(&format!(
            "INSERT INTO HR.Country (CountryName, ShortName, CountryMobileCode, IsActive, CreatedBy, CreatedOn) VALUES ('{}', '{}', '{}', 1, 25, GETDATE());\n",
            escape(country.name.as_deref()),
            escape(country.iso2.as_deref()),
            escape(country.phonecode.as_deref()),
        ));
    }

    sql.push_str(&transaction_epilogue("HR.Country"));

    SqlScript {
        sql,
        inserted: countries.len(),
        skipped: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, iso2: &str, phonecode: &str) -> Country {
        Country {
            name: Some(name.into()),
            iso2: Some(iso2.into()),
            phonecode: Some(phonecode.into()),
            ..Country::default()
        }
    }

    #[test]
    fn test_one_insert_per_record() {
        let countries = vec![
            country("Canada", "CA", "1"),
            country("United Kingdom", "GB", "44"),
            country("Afghanistan", "AF", "93"),
        ];

        let script = generate_country_sql(&countries);
        assert_eq!(script.inserted, 3);
        assert_eq!(script.skipped, 0);
        assert_eq!(script.sql.matches("INSERT INTO HR.Country").count(), 3);
    }

    #[test]
    fn test_envelope_wraps_the_script() {
        let script = generate_country_sql(&[country("Canada", "CA", "1")]);
        assert!(script.sql.starts_with("BEGIN TRY\nBEGIN TRANSACTION;\n"));
        assert!(script.sql.ends_with("END CATCH;\n"));
        assert!(
            script
                .sql
                .contains("PRINT 'Error inserting HR.Country records.';")
        );
    }

    #[test]
    fn test_names_are_escaped() {
        let script = generate_country_sql(&[country("Côte d'Ivoire", "CI", "225")]);
        assert!(script.sql.contains("'Côte d''Ivoire'"));
    }

    #[test]
    fn test_absent_fields_render_empty() {
        let script = generate_country_sql(&[Country::default()]);
        assert!(script.sql.contains("VALUES ('', '', '', 1, 25, GETDATE());"));
    }

    #[test]
    fn test_empty_input_is_just_the_envelope() {
        let script = generate_country_sql(&[]);
        assert_eq!(script.inserted, 0);
        assert!(!script.sql.contains("INSERT"));
        assert!(script.sql.contains("BEGIN TRY"));
    }

    #[test]
    fn test_records_keep_input_order() {
        let script = generate_country_sql(&[country("Zimbabwe", "ZW", "263"), country("Albania", "AL", "355")]);
        let zw = script.sql.find("'Zimbabwe'").unwrap();
        let al = script.sql.find("'Albania'").unwrap();
        assert!(zw < al, "input order must be preserved, not resorted");
    }
}
