// Library exports for integration tests and the server binary

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
