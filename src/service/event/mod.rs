//! Event posts: rendering, parsing, and roster button handling.

pub mod embed;
pub mod roster;
