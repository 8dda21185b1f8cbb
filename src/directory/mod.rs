pub mod loader;
pub mod record_model;
pub mod search;
pub mod source;
