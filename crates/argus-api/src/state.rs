use std::sync::Arc;

use argus_db::Database;

pub type AppState = Arc<AppStateInner>;

/// One shared store handle for the whole process; handlers never touch
/// globals. Constructed in main (or a test) and cloned into the router.
pub struct AppStateInner {
    pub db: Database,
}
