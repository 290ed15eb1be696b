//! Helpers for classifying database errors.

/// Returns true if the error is a unique-key violation reported by the database.
///
/// The storage engine's constraint is the authoritative signal that a code is
/// taken; application-level existence checks only shortcut the common case.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
