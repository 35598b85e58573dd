//! Domain types and helpers shared by the GameVault crates.
//!
//! Has no internal dependencies so the repository and HTTP layers can both
//! build on it.

pub mod error;
pub mod html;
pub mod image;
pub mod search;
pub mod types;
