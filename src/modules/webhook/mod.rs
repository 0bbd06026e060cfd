pub mod event;
pub mod routes;
pub mod signature;
