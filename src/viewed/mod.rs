pub mod persistence;
pub mod store;
pub mod viewed_model;
pub mod writer;
