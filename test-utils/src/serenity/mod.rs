//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, embed_json};
//!
//! let embed = embed_json("Raid", &[("Members [1/6]:", "<@1>")], Some("Created by: a | 1"));
//! let message = create_test_message(10, 20, vec![embed]);
//! ```
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects
//! - `embed::create_test_embed` - Create Serenity Embed objects

pub mod embed;
pub mod message;

pub use embed::{create_test_embed, embed_json};
pub use message::create_test_message;
