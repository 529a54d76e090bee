//! Error types for route building.
//!
//! A [`RouteError`] is never raised as control flow: the first one produced
//! along a builder chain is captured inside the [`RouteBuilder`] value and
//! returned when the chain is resolved.
//!
//! [`RouteBuilder`]: crate::RouteBuilder

/// A validation or construction failure captured while building a route.
///
/// Each variant carries the offending input so the resolved error identifies
/// exactly which chained value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A raw segment contained a `/`, which would split it into sub-paths.
    #[error("{0:?} contains slashes")]
    SegmentContainsSlashes(String),

    /// The value is not a valid server-generated identifier.
    #[error("{0:?} is not a valid ID")]
    InvalidId(String),

    /// The value is not a valid username.
    #[error("{0:?} is not a valid username")]
    InvalidUsername(String),

    /// The value is not a valid team name.
    #[error("{0:?} is not a valid team name")]
    InvalidTeamName(String),

    /// The value is not a valid channel name.
    #[error("{0:?} is not a valid channel name")]
    InvalidChannelName(String),

    /// The value is not a valid email address.
    #[error("{0:?} is not a valid email")]
    InvalidEmail(String),

    /// The value is not a valid emoji name; wraps the validator's detail.
    #[error("{name:?} is not a valid emoji name: {source}")]
    InvalidEmojiName {
        name: String,
        #[source]
        source: EmojiNameError,
    },
}

/// Detail reported by the emoji-name validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmojiNameError {
    #[error("name is empty")]
    Empty,

    #[error("name exceeds {max} characters")]
    TooLong { max: usize },

    #[error("name may only contain lowercase letters, numbers, '+', '-' and '_'")]
    InvalidCharacters,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RouteError>;
