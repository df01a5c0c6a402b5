//! Database repository layer.
//!
//! Repositories wrap SeaORM entity models and return domain models so the service
//! layer never touches entities directly. Every query is parameterized by SeaORM.

pub mod command_count;
pub mod guild_settings;

#[cfg(test)]
mod test;
