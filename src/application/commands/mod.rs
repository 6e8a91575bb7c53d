pub mod articles;
pub mod subscribers;
