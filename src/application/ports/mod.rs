// src/application/ports/mod.rs
pub mod identity;
pub mod renderer;
pub mod security;
pub mod storage;
pub mod time;
pub mod util;

