pub mod models;
pub mod rag_service;

pub use models::*;
pub use rag_service::RagClient;
