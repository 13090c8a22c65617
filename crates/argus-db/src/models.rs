/// Database row types — these map directly to SQLite rows.
/// Distinct from the argus-types wire shapes to keep the DB layer independent.

pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password: String,
    /// Written at seed time, never read by any handler. Kept inert until
    /// access control is actually in scope.
    pub role: String,
}

pub struct ReportRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub severity: String,
    /// Free-form username reference, not a foreign key.
    pub reporter: String,
}

/// A report to insert, before the store assigns its id.
pub struct NewReport<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub severity: &'a str,
    pub reporter: &'a str,
}
