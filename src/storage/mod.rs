pub mod error;
pub mod kv;
