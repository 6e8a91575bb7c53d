pub mod commands;
pub mod dto;
pub mod editor;
pub mod error;
pub mod identity;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
