//! Discord gateway integration.
//!
//! The bot registers the `/setup` and `/delete` slash commands on ready and
//! dispatches every interaction to a handler that sends exactly one response:
//! - slash commands by command name (`handler::command`)
//! - buttons and select menus by custom ID prefix (`handler::component`)
//! - modal submissions by custom ID prefix (`handler::modal`)
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is required. Interactions arrive regardless of intents and message
//! contents are fetched over HTTP, so no privileged intent is needed.

pub mod command;
pub mod handler;
pub mod router;
pub mod start;
