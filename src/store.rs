//! Opening connections to the SQLite database that holds the transactions.
//!
//! Neither function will create a database file. The store is owned by
//! whatever records the transactions, so a missing file is an error rather
//! than an empty database.

use std::path::Path;

use rusqlite::{Connection, ErrorCode, OpenFlags};

use crate::Error;

/// Open the database at `db_path` for reading only.
///
/// # Errors
/// Returns [Error::Connection] if the file does not exist, cannot be opened or
/// is not a SQLite database.
pub fn open_read_only(db_path: &Path) -> Result<Connection, Error> {
    open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
}

/// Open the database at `db_path` for reading and writing.
///
/// # Errors
/// Returns [Error::Connection] if the file does not exist, cannot be opened or
/// is not a SQLite database.
pub fn open_read_write(db_path: &Path) -> Result<Connection, Error> {
    open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
}

fn open_with_flags(db_path: &Path, flags: OpenFlags) -> Result<Connection, Error> {
    if !db_path.is_file() {
        return Err(connection_error(db_path, "file does not exist"));
    }

    tracing::debug!("Opening database at {db_path:?} with flags {flags:?}");

    let connection = Connection::open_with_flags(db_path, flags)
        .map_err(|error| connection_error(db_path, error))?;

    // SQLite only reads the file header on first use, so check it now to
    // report a non-database file as a connection problem.
    connection
        .query_row("PRAGMA schema_version;", [], |row| row.get::<_, i64>(0))
        .map_err(|error| match error.sqlite_error_code() {
            Some(ErrorCode::NotADatabase) => connection_error(db_path, "file is not a database"),
            _ => connection_error(db_path, error),
        })?;

    Ok(connection)
}

fn connection_error(db_path: &Path, reason: impl ToString) -> Error {
    Error::Connection {
        path: db_path.to_path_buf(),
        reason: reason.to_string(),
    }
}
