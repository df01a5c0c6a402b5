use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Occurs when a snowflake stored in the database is not a valid `u64`.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored guild or channel id is `0`, which Discord never issues.
    #[error("Stored snowflake is zero")]
    ZeroSnowflake,

    /// Two interaction routes were registered under the same custom ID prefix.
    #[error("Custom ID '{0}' is registered more than once")]
    DuplicateRoute(&'static str),
}
