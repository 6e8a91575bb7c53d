// tests/support/mocks/mod.rs
//! Test doubles re-exported for the integration tests.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod identity;
pub mod security;
pub mod storage;
pub mod time;

pub use identity::{SCRIPTED_TOKEN, ScriptedProvider};
pub use security::PlainPasswordHasher;
pub use storage::{FailingStore, FlakyStore};
pub use time::{FixedClock, SteppingClock, fixed_now};
