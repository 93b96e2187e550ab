//! SQL text for each supported dialect.
//!
//! Column lists are derived from `core_types::COMMENT_FIELDS` so the row
//! mapping and the table definition cannot drift apart.

use configuration::Dialect;
use core_types::{default_for, COMMENT_FIELDS, COMMENTS_TABLE, NAME_MAX_LEN, TEXT_MAX_LEN};

/// The prepared SQL used by `DbRepository` for one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statements {
    pub create_table: String,
    pub find_by_id: String,
    pub list_recent: String,
    pub insert: String,
}

impl Statements {
    pub fn for_dialect(dialect: Dialect) -> Self {
        let columns = select_columns();
        let insert_columns = insert_columns();
        let values = (1..=insert_columns.len())
            .map(|n| placeholder(dialect, n))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            create_table: create_table(dialect),
            find_by_id: format!(
                "SELECT {columns} FROM {COMMENTS_TABLE} WHERE id = {}",
                placeholder(dialect, 1)
            ),
            list_recent: format!(
                "SELECT {columns} FROM {COMMENTS_TABLE} ORDER BY created DESC, id DESC LIMIT {}",
                placeholder(dialect, 1)
            ),
            insert: format!(
                "INSERT INTO {COMMENTS_TABLE} ({}) VALUES ({values}) RETURNING id",
                insert_columns.join(", ")
            ),
        }
    }
}

fn placeholder(dialect: Dialect, n: usize) -> String {
    match dialect {
        Dialect::Postgres => format!("${n}"),
        Dialect::Sqlite => format!("?{n}"),
    }
}

fn select_columns() -> String {
    COMMENT_FIELDS
        .iter()
        .map(|spec| spec.column)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every column except the generated key, in the order `insert` binds them.
fn insert_columns() -> Vec<&'static str> {
    COMMENT_FIELDS
        .iter()
        .map(|spec| spec.column)
        .filter(|column| *column != "id")
        .collect()
}

/// ` DEFAULT '<value>'` for columns whose field declares a default, else empty.
fn default_clause(field: &str) -> String {
    default_for(field)
        .map(|value| format!(" DEFAULT '{}'", value.replace('\'', "''")))
        .unwrap_or_default()
}

fn create_table(dialect: Dialect) -> String {
    let name_default = default_clause("name");
    match dialect {
        Dialect::Postgres => format!(
            r#"
            CREATE TABLE IF NOT EXISTS {COMMENTS_TABLE} (
                id BIGSERIAL PRIMARY KEY,
                name VARCHAR({NAME_MAX_LEN}) NOT NULL{name_default},
                text VARCHAR({TEXT_MAX_LEN}) NOT NULL,
                created TIMESTAMPTZ NOT NULL,
                updated TIMESTAMPTZ NOT NULL,
                CHECK (created <= updated)
            )
            "#
        ),
        // AUTOINCREMENT keeps SQLite from handing out the id of a deleted row again.
        Dialect::Sqlite => format!(
            r#"
            CREATE TABLE IF NOT EXISTS {COMMENTS_TABLE} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL{name_default} CHECK (length(name) <= {NAME_MAX_LEN}),
                text TEXT NOT NULL CHECK (length(text) <= {TEXT_MAX_LEN}),
                created TEXT NOT NULL,
                updated TEXT NOT NULL,
                CHECK (created <= updated)
            )
            "#
        ),
    }
}
