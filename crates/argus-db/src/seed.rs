use anyhow::Result;
use tracing::info;

use crate::Database;
use crate::models::NewReport;
use crate::password;
use crate::queries::{insert_report_row, insert_user_row};

/// username, plaintext password (hashed before insert), role.
const DEMO_USERS: &[(&str, &str, &str)] = &[
    ("admin", "admin123", "admin"),
    ("alice", "alicepwd", "user"),
    ("bob", "bobpwd", "user"),
];

const DEMO_REPORTS: &[NewReport<'static>] = &[
    NewReport {
        title: "High waves at Marina",
        description: "Big waves near the shore",
        latitude: 13.0827,
        longitude: 80.2707,
        severity: "high",
        reporter: "alice",
    },
    NewReport {
        title: "Coastal flooding in ECR",
        description: "Water entering low-lying areas",
        latitude: 12.9659,
        longitude: 80.2380,
        severity: "medium",
        reporter: "bob",
    },
];

/// Idempotent demo-data bootstrap. Each table is seeded only if empty, in a
/// single transaction, so a rerun changes nothing and a mid-run fault rolls
/// back the batch in flight without touching the other.
pub fn run(db: &Database) -> Result<()> {
    if db.count_users()? == 0 {
        let users = DEMO_USERS
            .iter()
            .map(|(username, plain, role)| Ok((*username, password::hash(plain)?, *role)))
            .collect::<Result<Vec<_>>>()?;

        db.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            for (username, hash, role) in &users {
                insert_user_row(&tx, username, hash, role)?;
            }
            tx.commit()?;
            Ok(())
        })?;
        info!("Seeded {} demo users", DEMO_USERS.len());
    }

    if db.count_reports()? == 0 {
        db.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            for report in DEMO_REPORTS {
                insert_report_row(&tx, report)?;
            }
            tx.commit()?;
            Ok(())
        })?;
        info!("Seeded {} demo reports", DEMO_REPORTS.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_populates_empty_store() {
        let db = Database::open_in_memory().unwrap();
        run(&db).unwrap();

        let users = db.list_users().unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].username, "admin");
        assert_eq!(users[0].role, "admin");
        assert_eq!(users[1].username, "alice");
        assert_eq!(users[2].username, "bob");
        // Stored passwords are Argon2 hashes, never the plaintext
        assert!(users[0].password.starts_with("$argon2"));

        let reports = db.list_reports().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].title, "High waves at Marina");
        assert_eq!(reports[0].reporter, "alice");
        assert_eq!(reports[1].severity, "medium");
    }

    #[test]
    fn seed_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        run(&db).unwrap();
        run(&db).unwrap();

        assert_eq!(db.count_users().unwrap(), 3);
        assert_eq!(db.count_reports().unwrap(), 2);
    }

    #[test]
    fn seed_skips_users_already_present() {
        let db = Database::open_in_memory().unwrap();
        db.insert_user("carol", "hash").unwrap();

        run(&db).unwrap();

        // users table was non-empty, so only reports were seeded
        assert_eq!(db.count_users().unwrap(), 1);
        assert_eq!(db.count_reports().unwrap(), 2);
    }
}
