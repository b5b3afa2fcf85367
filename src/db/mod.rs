//! Persistence module split across logical submodules.

mod connection;
mod notes;

pub use connection::{Store, DB_FILE_NAME};
