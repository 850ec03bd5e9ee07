//! Shared script-building pieces: the output type and the transaction
//! envelope.

/// A generated SQL script together with its emit/skip accounting.
///
/// Generators are pure functions from record slices to text; the counts let
/// callers report per-script summaries and let tests assert the
/// conservation law (inserted + skipped = input length).
#[derive(Debug, Clone)]
pub struct SqlScript {
    /// The full script text, ready to be written out.
    pub sql: String,
    /// Number of INSERT statements emitted.
    pub inserted: usize,
    /// Number of records skipped with an explanatory comment.
    pub skipped: usize,
}

impl SqlScript {
    /// Total number of input records accounted for.
    pub fn total(&self) -> usize {
        self.inserted + self.skipped
    }
}

/// Opening of the TRY/TRANSACTION envelope used by the country and state
/// scripts. The city script deliberately carries no envelope.
pub(crate) const TRANSACTION_PROLOGUE: &str = "BEGIN TRY\nBEGIN TRANSACTION;\n";

/// Closing of the envelope: commit on success, rollback plus a fixed
/// diagnostic inside the catch block.
pub(crate) fn transaction_epilogue(table: &str) -> String {
    format!(
        "COMMIT TRANSACTION;\nEND TRY\nBEGIN CATCH\nROLLBACK TRANSACTION;\nPRINT 'Error inserting {table} records.';\nEND CATCH;\n"
    )
}
