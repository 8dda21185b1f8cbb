pub mod home;
pub mod screen_model;
