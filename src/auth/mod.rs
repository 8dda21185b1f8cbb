pub mod credentials;
pub mod error;
pub mod flow;
pub mod validation;
