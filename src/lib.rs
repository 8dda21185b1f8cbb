//! Hospital directory: a one-shot list loader with search, and a
//! session-scoped record of which hospitals the user has viewed.

pub mod auth;
pub mod cli;
pub mod directory;
pub mod navigation;
pub mod report;
pub mod screen;
pub mod storage;
pub mod trace;
pub mod viewed;
