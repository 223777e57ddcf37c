pub mod languages;
pub mod models;
pub mod names;
pub mod release;
