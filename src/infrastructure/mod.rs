//! Infrastructure layer - Storage, hashing and process concerns

pub mod database;
pub mod logging;
pub mod user;
