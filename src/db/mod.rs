//! Database client.
//!
//! A single relational store backs the whole service:
//! - **SQLite** (via libsql): users and teams, local file or in-memory.

/// SQLite-backed relational store.
pub mod sqlite;

pub use sqlite::{SqliteClient, User};
