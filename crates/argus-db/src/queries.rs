use crate::Database;
use crate::models::{NewReport, ReportRow, UserRow};
use anyhow::Result;
use rusqlite::Connection;
use thiserror::Error;

/// Unique-constraint violation on `users.username`. The store is the sole
/// arbiter of uniqueness; there is no separate existence check, so two
/// concurrent inserts of the same name cannot both succeed. Callers downcast
/// this out of `anyhow::Error` to produce a conflict response.
#[derive(Debug, Error)]
#[error("Username already exists")]
pub struct DuplicateUsername;

impl Database {
    // -- Users --

    /// Insert a user and return the id the store assigned.
    pub fn insert_user(&self, username: &str, password_hash: &str) -> Result<i64> {
        self.with_conn(|conn| insert_user_row(conn, username, password_hash, "user"))
    }

    /// Full table, id order.
    pub fn list_users(&self) -> Result<Vec<UserRow>> {
        self.with_conn(query_users)
    }

    pub fn count_users(&self) -> Result<i64> {
        self.with_conn(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?)
        })
    }

    // -- Reports --

    pub fn list_reports(&self) -> Result<Vec<ReportRow>> {
        self.with_conn(query_reports)
    }

    pub fn count_reports(&self) -> Result<i64> {
        self.with_conn(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))?)
        })
    }
}

pub(crate) fn insert_user_row(
    conn: &Connection,
    username: &str,
    password_hash: &str,
    role: &str,
) -> Result<i64> {
    let res = conn.execute(
        "INSERT INTO users (username, password, role) VALUES (?1, ?2, ?3)",
        (username, password_hash, role),
    );
    match res {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Err(anyhow::Error::new(DuplicateUsername))
        }
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn insert_report_row(conn: &Connection, report: &NewReport<'_>) -> Result<i64> {
    conn.execute(
        "INSERT INTO reports (title, description, latitude, longitude, severity, reporter)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![
            report.title,
            report.description,
            report.latitude,
            report.longitude,
            report.severity,
            report.reporter,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn query_users(conn: &Connection) -> Result<Vec<UserRow>> {
    let mut stmt =
        conn.prepare("SELECT id, username, password, role FROM users ORDER BY id")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
                role: row.get(3)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_reports(conn: &Connection) -> Result<Vec<ReportRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, latitude, longitude, severity, reporter
         FROM reports
         ORDER BY id",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(ReportRow {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                latitude: row.get(3)?,
                longitude: row.get(4)?,
                severity: row.get(5)?,
                reporter: row.get(6)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_sequential_ids() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.insert_user("alice", "h1").unwrap(), 1);
        assert_eq!(db.insert_user("bob", "h2").unwrap(), 2);

        let users = db.list_users().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[1].id, 2);
        assert_eq!(users[1].role, "user");
    }

    #[test]
    fn duplicate_username_is_a_typed_error() {
        let db = Database::open_in_memory().unwrap();
        db.insert_user("alice", "h1").unwrap();

        let err = db.insert_user("alice", "h2").unwrap_err();
        assert!(err.downcast_ref::<DuplicateUsername>().is_some());
        assert_eq!(err.to_string(), "Username already exists");
        assert_eq!(db.count_users().unwrap(), 1);
    }

    #[test]
    fn empty_store_counts_zero() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.count_users().unwrap(), 0);
        assert_eq!(db.count_reports().unwrap(), 0);
        assert!(db.list_users().unwrap().is_empty());
    }
}
