//! Persistence helpers for text games.
//!
//! Three small, independent surfaces: JSON save files for whole game
//! values, a parameterized SQLite passthrough for callers that bring
//! their own statements, and a timestamped append-only activity log.
//! Nothing here owns a schema or long-lived state; every call opens,
//! works, and closes.

pub mod error;
pub mod json;
pub mod log;
pub mod sql;

pub use error::{StoreError, StoreResult};
pub use json::{load_json, load_json_or_default, save_json};
pub use log::EventLog;
pub use sql::SqlValue;
