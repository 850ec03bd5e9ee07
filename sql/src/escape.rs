//! SQL string-literal escaping.
//!
//! The single place the quoting rule lives: every value interpolated into a
//! generated script goes through [`escape`]. The rule is the T-SQL one —
//! double each single quote — and nothing else is transformed.

/// Returns the SQL-literal-safe form of an optional text value.
///
/// Every `'` is doubled so the value can sit inside a quoted literal;
/// absent values become the empty string. Always succeeds.
///
/// # Examples
///
/// ```
/// use geoseed_sql::escape;
///
/// assert_eq!(escape(Some("O'Fallon")), "O''Fallon");
/// assert_eq!(escape(Some("Canada")), "Canada");
/// assert_eq!(escape(None), "");
/// ```
pub fn escape(value: Option<&str>) -> String {
    value.map(|v| v.replace('\'', "''")).unwrap_or_default()
}
