//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the
//! fields they care about.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults (no manager role)
//! let settings = factory::create_guild_settings(&db).await?;
//!
//! // Customize
//! let managed = factory::guild_settings::GuildSettingsFactory::new(&db)
//!     .guild_id(1)
//!     .channel_id(2)
//!     .manager_role_id(3)
//!     .log_channel_id(4)
//!     .build()
//!     .await?;
//! ```

pub mod command_count;
pub mod guild_settings;
pub mod helpers;

pub use command_count::create_command_count;
pub use guild_settings::create_guild_settings;
