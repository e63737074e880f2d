pub mod readings;
pub mod settings;
