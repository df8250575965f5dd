//! Domain types shared by the persons service crates.
//!
//! Nothing in here performs I/O: storage lives in `persons-db` and the
//! HTTP surface in `persons-api`.

pub mod error;
pub mod patch;
pub mod person;
pub mod types;
