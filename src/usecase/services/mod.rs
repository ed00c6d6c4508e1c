pub mod board;
pub mod column_service;
pub mod filter_engine;
pub mod pagination;
pub mod record_store;
