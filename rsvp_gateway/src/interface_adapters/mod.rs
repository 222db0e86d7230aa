pub mod clients;
pub mod extract;
pub mod handlers;
pub mod http;
pub mod protocol;
pub mod routes;
pub mod state;
