//! Validated, chainable building of API route paths.
//!
//! [`RouteBuilder`] assembles a URL path from typed segments — IDs,
//! usernames, team names, channel names, emails, emoji names — escaping each
//! one as an opaque token and rejecting values that would corrupt the path
//! (for example an identifier containing `/`). Failures are not surfaced
//! immediately: the first one is captured inside the builder, every later
//! step becomes a no-op, and the caller checks a single result at the end.
//!
//! ```
//! use apiroute::{RouteBuilder, RouteError};
//!
//! let path = RouteBuilder::from_segment("api")
//!     .join_segments(["v4", "users"])
//!     .join_username("john.doe")
//!     .to_path()?;
//! assert_eq!(path, "/api/v4/users/john.doe");
//!
//! let err = RouteBuilder::from_segment("api")
//!     .join_segment("v4/users")
//!     .to_path()
//!     .unwrap_err();
//! assert_eq!(err, RouteError::SegmentContainsSlashes("v4/users".into()));
//! # Ok::<(), RouteError>(())
//! ```

pub mod error;
pub mod escape;
pub mod route;
pub mod validators;

// Re-export public API at crate root for ergonomic imports.
pub use error::{EmojiNameError, Result, RouteError};
pub use route::RouteBuilder;
