//! Group Up Test Utils
//!
//! Provides shared testing utilities for the Group Up bot. This crate offers a builder
//! for creating test contexts with in-memory SQLite databases, factories for inserting
//! settings rows, and factories for Serenity objects (messages, embeds) that would
//! normally come from Discord.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildSettings;
//!
//! #[tokio::test]
//! async fn test_settings() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildSettings)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
