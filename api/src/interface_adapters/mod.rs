pub mod cors;
pub mod handlers;
pub mod reporter;
pub mod routes;
pub mod state;
