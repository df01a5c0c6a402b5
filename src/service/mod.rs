//! Business logic between the bot handlers and the data layer.
//!
//! Services take their collaborators by reference (database, Discord channel
//! operations, settings cache) and return domain outcomes or flow-specific errors.
//! Converting those into interaction responses is left to the bot layer.

pub mod analytics;
pub mod delete;
pub mod event;
pub mod keyed_lock;
pub mod settings_cache;
pub mod setup;
pub mod wizard;

#[cfg(test)]
mod test;
