pub mod error;
pub mod routes;
pub mod state;
pub mod system;
pub mod users;
