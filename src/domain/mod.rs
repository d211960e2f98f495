pub mod host;
pub mod models;
pub mod services;
