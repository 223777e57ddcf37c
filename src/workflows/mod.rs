pub mod download;
pub mod identify;
pub mod prompt;
pub mod search;
