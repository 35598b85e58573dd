//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` row struct matching the database columns
//! - A `Serialize` entity struct handed to the HTTP layer
//! - A create DTO for inserts

pub mod game;
