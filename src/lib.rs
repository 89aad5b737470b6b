pub mod api;
pub mod error;
pub mod export;
pub mod models;
pub mod normalize;
pub mod session;
pub mod sources;
pub mod summary;
