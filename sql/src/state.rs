//! State script generation with stable grouping by country code.

use std::collections::HashMap;

use tracing::warn;

use geoseed_core::State;

use crate::escape::escape;
use crate::script::{SqlScript, TRANSACTION_PROLOGUE, transaction_epilogue};

/// Generates the `HR.State` insert script.
///
/// Records are grouped by `country_code` in the order each code first
/// appears, and every group opens with a banner comment naming the group's
/// country. Within a group, members keep their original order: records with
/// a blank `country_code` are replaced by a skip comment, all others become
/// an INSERT whose `CountryCode` is resolved by a lookup subquery against
/// `HR.Country.ShortName`. The script is wrapped in the same
/// TRY/TRANSACTION envelope as the country script.
///
/// A group keyed by the empty (or absent) code is still a valid group: its
/// banner is emitted and every member is then skipped individually — the
/// group level never short-circuits.
///
/// Whether a code actually matches a known country is not verified here;
/// an unknown code yields a lookup that resolves to NULL when the script
/// runs.
pub fn generate_state_sql(states: &[State]) -> SqlScript {
    let mut sql = String::from(TRANSACTION_PROLOGUE);
    let mut inserted = 0;
    let mut skipped = 0;

    for group in group_by_country_code(states) {
        let first = group[0];
        sql.push_str(&format!(
            "\n-- ===================== {} ({}) =====================\n\n",
            first.country_name.as_deref().unwrap_or(""),
            first.country_code.as_deref().unwrap_or(""),
        ));

        for state in group {
            if !state.has_country_code() {
                warn!(state = ?state.name, "skipping state without country code");
                sql.push_str(&format!(
                    "-- Skipped state '{}' (Missing CountryCode)\n",
                    escape(state.name.as_deref()),
                ));
                skipped += 1;
                continue;
            }

            sql.push_str(&format!(
                "INSERT INTO HR.State (CountryCode, StateName, IsActive, CreatedBy, CreatedOn) VALUES ((SELECT CountryCode FROM HR.Country WHERE ShortName='{}'), '{}', 1, 25, GETDATE());\n",
                escape(state.country_code.as_deref()),
                escape(state.name.as_deref()),
            ));
            inserted += 1;
        }
    }

    sql.push_str(&transaction_epilogue("HR.State"));

    SqlScript {
        sql,
        inserted,
        skipped,
    }
}

/// Stable multi-map construction: partitions `states` by `country_code`,
/// preserving the order in which each key first appears and the original
/// order of members inside each group. `None` and `""` are distinct keys.
fn group_by_country_code(states: &[State]) -> Vec<Vec<&State>> {
    let mut groups: Vec<Vec<&State>> = Vec::new();
    let mut slots: HashMap<Option<&str>, usize> = HashMap::new();

    for state in states {
        let key = state.country_code.as_deref();
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(state);
    }

    groups
}
