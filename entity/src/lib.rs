//! SeaORM entity models for the Group Up database schema.
//!
//! Mirrors the tables created by the `migration` crate. Application code should go
//! through the repositories in the main crate rather than using these directly.

pub mod prelude;

pub mod command_count;
pub mod guild_settings;
