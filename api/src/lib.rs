pub mod config;
pub mod search;
pub mod server;

pub use config::AppConfig;
pub use server::{app, cors_layer, serve, AppState};
