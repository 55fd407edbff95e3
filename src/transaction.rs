//! Loading transactions from the database.

use std::path::Path;

use rusqlite::{Connection, Row, types::ValueRef};

use crate::{Error, store::open_read_only};

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Only the fields needed for a spending summary are loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The label for the kind of spending, e.g. "Food" or "Rent".
    pub category: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction.
    pub fn new(category: &str, amount: f64) -> Self {
        Self {
            category: category.to_owned(),
            amount,
        }
    }
}

/// Load every transaction from the database at `db_path`.
///
/// The connection is opened read-only and is closed before this function
/// returns, whether or not the transactions could be loaded.
///
/// # Errors
/// - [Error::Connection] if the database cannot be opened.
/// - [Error::Query] if the `transactions` table or its `category` or `amount`
///   columns do not exist.
/// - [Error::Data] if a row has a missing category or a missing,
///   non-numeric or infinite amount.
pub fn load_transactions(db_path: &Path) -> Result<Vec<Transaction>, Error> {
    let connection = open_read_only(db_path)?;
    let transactions = get_all_transactions(&connection)?;

    tracing::debug!(
        "Loaded {} transactions from {db_path:?}",
        transactions.len()
    );

    Ok(transactions)
}

/// Retrieve all transactions in the order the database returns them.
///
/// # Errors
/// See [load_transactions], excluding [Error::Connection].
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    let mut statement = connection
        .prepare("SELECT category, amount FROM transactions;")
        .map_err(query_error)?;
    let mut rows = statement.query([]).map_err(query_error)?;

    let mut transactions = Vec::new();

    while let Some(row) = rows.next().map_err(query_error)? {
        let transaction = map_row(row, transactions.len() + 1)?;
        transactions.push(transaction);
    }

    Ok(transactions)
}

fn map_row(row: &Row, row_number: usize) -> Result<Transaction, Error> {
    let category = match row.get_ref(0).map_err(query_error)? {
        ValueRef::Text(bytes) => String::from_utf8(bytes.to_vec())
            .map_err(|_| data_error(row_number, "category", "text is not valid UTF-8"))?,
        ValueRef::Null => return Err(data_error(row_number, "category", "value is missing")),
        other => {
            return Err(data_error(
                row_number,
                "category",
                format!("expected text, found {}", other.data_type()),
            ));
        }
    };

    let amount = match row.get_ref(1).map_err(query_error)? {
        ValueRef::Real(amount) if amount.is_finite() => amount,
        ValueRef::Real(_) => {
            return Err(data_error(row_number, "amount", "value is not a finite number"));
        }
        ValueRef::Integer(amount) => amount as f64,
        ValueRef::Null => return Err(data_error(row_number, "amount", "value is missing")),
        other => {
            return Err(data_error(
                row_number,
                "amount",
                format!("expected a number, found {}", other.data_type()),
            ));
        }
    };

    Ok(Transaction { category, amount })
}

fn query_error(error: rusqlite::Error) -> Error {
    tracing::error!("Could not query transactions: {error}");
    Error::Query(error)
}

fn data_error(row: usize, column: &'static str, reason: impl ToString) -> Error {
    Error::Data {
        row,
        column,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::tempdir;

    use crate::{Error, transaction::Transaction};

    use super::{get_all_transactions, load_transactions};

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute_batch(
                "CREATE TABLE transactions (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    description TEXT,
                    amount REAL,
                    category TEXT,
                    date TEXT,
                    userId INTEGER
                );",
            )
            .expect("Could not create transactions table");
        connection
    }

    fn insert(connection: &Connection, category: Option<&str>, amount: Option<f64>) {
        connection
            .execute(
                "INSERT INTO transactions (description, category, amount) VALUES ('test', ?1, ?2)",
                (category, amount),
            )
            .expect("Could not insert transaction");
    }

    #[test]
    fn get_all_transactions_returns_every_row() {
        let connection = get_test_db_connection();
        insert(&connection, Some("food"), Some(12.5));
        insert(&connection, Some("food"), Some(7.25));
        insert(&connection, Some("rent"), Some(900.0));

        let transactions = get_all_transactions(&connection).expect("Could not get transactions");

        assert_eq!(
            transactions,
            vec![
                Transaction::new("food", 12.5),
                Transaction::new("food", 7.25),
                Transaction::new("rent", 900.0),
            ]
        );
    }

    #[test]
    fn get_all_transactions_handles_empty_table() {
        let connection = get_test_db_connection();

        let transactions = get_all_transactions(&connection);

        assert_eq!(transactions, Ok(vec![]));
    }

    #[test]
    fn get_all_transactions_reads_integer_amounts() {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute_batch(
                "CREATE TABLE transactions (category TEXT, amount INTEGER);
                INSERT INTO transactions (category, amount) VALUES ('rent', 900);",
            )
            .unwrap();

        let transactions = get_all_transactions(&connection);

        assert_eq!(transactions, Ok(vec![Transaction::new("rent", 900.0)]));
    }

    #[test]
    fn get_all_transactions_fails_on_missing_amount() {
        let connection = get_test_db_connection();
        insert(&connection, Some("food"), Some(12.5));
        insert(&connection, Some("food"), None);

        let result = get_all_transactions(&connection);

        assert_eq!(
            result,
            Err(Error::Data {
                row: 2,
                column: "amount",
                reason: "value is missing".to_owned()
            })
        );
    }

    #[test]
    fn get_all_transactions_fails_on_missing_category() {
        let connection = get_test_db_connection();
        insert(&connection, None, Some(12.5));

        let result = get_all_transactions(&connection);

        assert!(matches!(
            result,
            Err(Error::Data {
                row: 1,
                column: "category",
                ..
            })
        ));
    }

    #[test]
    fn get_all_transactions_fails_on_text_amount() {
        let connection = get_test_db_connection();
        connection
            .execute(
                "INSERT INTO transactions (category, amount) VALUES ('food', 'twelve dollars')",
                (),
            )
            .unwrap();

        let result = get_all_transactions(&connection);

        assert!(matches!(
            result,
            Err(Error::Data {
                row: 1,
                column: "amount",
                ..
            })
        ));
    }

    #[test]
    fn get_all_transactions_fails_on_infinite_amount() {
        let connection = get_test_db_connection();
        insert(&connection, Some("rent"), Some(5.0));
        // SQLite reads a literal that overflows a double as infinity.
        connection
            .execute(
                "INSERT INTO transactions (category, amount) VALUES ('food', -1e999)",
                (),
            )
            .unwrap();

        let result = get_all_transactions(&connection);

        assert_eq!(
            result,
            Err(Error::Data {
                row: 2,
                column: "amount",
                reason: "value is not a finite number".to_owned()
            })
        );
    }

    #[test]
    fn get_all_transactions_fails_without_transactions_table() {
        let connection = Connection::open_in_memory().unwrap();

        let result = get_all_transactions(&connection);

        assert!(matches!(result, Err(Error::Query(_))));
    }

    #[test]
    fn get_all_transactions_fails_without_amount_column() {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute("CREATE TABLE transactions (category TEXT)", ())
            .unwrap();

        let result = get_all_transactions(&connection);

        assert!(matches!(result, Err(Error::Query(_))));
    }

    #[test]
    fn load_transactions_reads_from_file() {
        let temp = tempdir().unwrap();
        let db_path = temp.path().join("finance.db");
        let connection = Connection::open(&db_path).unwrap();
        connection
            .execute_batch(
                "CREATE TABLE transactions (category TEXT, amount REAL);
                INSERT INTO transactions (category, amount) VALUES ('Food', -4.5);",
            )
            .unwrap();
        drop(connection);

        let transactions = load_transactions(&db_path);

        assert_eq!(transactions, Ok(vec![Transaction::new("Food", -4.5)]));
    }

    #[test]
    fn load_transactions_fails_on_missing_file() {
        let temp = tempdir().unwrap();
        let db_path = temp.path().join("missing.db");

        let result = load_transactions(&db_path);

        assert!(matches!(result, Err(Error::Connection { .. })));
    }
}
