//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env override file)
//!     → resolver.rs (defaults & type coercion)
//!     → Settings (immutable record)
//!     → validation.rs (fail-fast required-field check)
//!     → shared read-only with the server
//! ```
//!
//! # Design Decisions
//! - Settings are immutable once resolved; there is no reload path
//! - Resolution is total: every field degrades to a usable value
//! - The resolver takes an explicit lookup function instead of touching
//!   `std::env` directly, so tests never mutate the real environment

pub mod resolver;
pub mod schema;
pub mod validation;

pub use schema::Settings;
pub use validation::{validate, ConfigError};
