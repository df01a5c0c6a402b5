//! Domain models shared by the bot, service, and data layers.

pub mod activity;
pub mod event;
pub mod message;
pub mod notice;
pub mod setting;
pub mod setup;
pub mod wizard;
