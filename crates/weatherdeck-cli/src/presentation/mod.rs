pub mod view_models;
pub mod views;
