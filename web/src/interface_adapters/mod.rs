pub mod clients;
pub mod handlers;
pub mod reporter;
pub mod routes;
pub mod state;
pub mod views;
