// src/infrastructure/security/mod.rs
pub mod identity;
pub mod password;
