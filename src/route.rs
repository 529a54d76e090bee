//! The chainable route builder.

use tracing::debug;
use url::Url;

use crate::error::{Result, RouteError};
use crate::escape::{escape_segment, join_path};
use crate::validators;

/// An incrementally built, validated API route path.
///
/// A `RouteBuilder` wraps an ordered list of already-escaped path segments
/// and tracks any error encountered while building it. The `join_*` methods
/// validate the entity passed (an ID, a channel name, an email...) and can
/// be chained to build routes; the first validation failure is stored inside
/// the value and every later step leaves it untouched.
///
/// The captured error is only surfaced when calling [`to_path`] or
/// [`to_url`], which return the assembled path (as a string, or grafted onto
/// a base [`Url`]) only if the whole chain was valid.
///
/// Every method takes `self` by value and returns a new value; nothing is
/// mutated in place, so a builder can be cloned and forked freely, including
/// across threads.
///
/// ```
/// use apiroute::RouteBuilder;
///
/// let path = RouteBuilder::from_segment("api")
///     .join_segment("v4")
///     .join_segment("users")
///     .join_username("john.doe")
///     .to_path()?;
/// assert_eq!(path, "/api/v4/users/john.doe");
/// # Ok::<(), apiroute::RouteError>(())
/// ```
///
/// [`to_path`]: RouteBuilder::to_path
/// [`to_url`]: RouteBuilder::to_url
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteBuilder {
    /// Escaped segments, in insertion order.
    segments: Vec<String>,
    /// First failure along the chain, if any. Write-once.
    err: Option<RouteError>,
}

impl RouteBuilder {
    /// An empty route. Resolves to `/` if nothing is joined.
    pub fn new() -> Self {
        Self::default()
    }

    /// A route holding the single segment `v`, percent-escaped. Total:
    /// escaping never fails, and `""` is an allowed (invisible) segment.
    pub fn from_segment(v: &str) -> Self {
        Self {
            segments: vec![escape_segment(v)],
            err: None,
        }
    }

    /// Enter the failed state, unless a previous step already did: the first
    /// error along a chain is the one reported, later failures are dropped.
    fn fail(mut self, err: RouteError) -> Self {
        if self.err.is_none() {
            debug!(error = %err, "route building failed");
            self.err = Some(err);
        }
        self
    }

    /// Append every segment of `other` after this route's segments.
    ///
    /// If this route already failed, it is returned unchanged and `other` is
    /// not inspected at all; otherwise `other`'s own error (if any) is
    /// adopted while this route's path is kept as-is.
    pub fn join_route(mut self, other: RouteBuilder) -> Self {
        if self.err.is_some() {
            return self;
        }

        if let Some(err) = other.err {
            self.err = Some(err);
            return self;
        }

        self.segments.extend(other.segments);
        self
    }

    /// Append one raw segment. A `v` containing `/` is rejected rather than
    /// silently split into sub-paths.
    pub fn join_segment(self, v: &str) -> Self {
        if v.contains('/') {
            return self.fail(RouteError::SegmentContainsSlashes(v.to_owned()));
        }

        self.join_route(Self::from_segment(v))
    }

    /// Append each value as a segment, left to right. An empty iterator is a
    /// no-op; the first invalid value fails the chain exactly as a direct
    /// [`join_segment`](Self::join_segment) call would.
    pub fn join_segments<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .fold(self, |route, v| route.join_segment(v.as_ref()))
    }

    /// Append a server-generated identifier, validating it first.
    pub fn join_id(self, v: &str) -> Self {
        if !validators::is_valid_id(v) {
            return self.fail(RouteError::InvalidId(v.to_owned()));
        }

        self.join_segment(v)
    }

    /// Append a username, validating it first.
    pub fn join_username(self, v: &str) -> Self {
        if !validators::is_valid_username(v) {
            return self.fail(RouteError::InvalidUsername(v.to_owned()));
        }

        self.join_segment(v)
    }

    /// Append a team name, validating it first.
    pub fn join_team_name(self, v: &str) -> Self {
        if !validators::is_valid_team_name(v) {
            return self.fail(RouteError::InvalidTeamName(v.to_owned()));
        }

        self.join_segment(v)
    }

    /// Append a channel name, validating it first.
    pub fn join_channel_name(self, v: &str) -> Self {
        if !validators::is_valid_channel_name(v) {
            return self.fail(RouteError::InvalidChannelName(v.to_owned()));
        }

        self.join_segment(v)
    }

    /// Append an email address, validating it first.
    pub fn join_email(self, v: &str) -> Self {
        if !validators::is_valid_email(v) {
            return self.fail(RouteError::InvalidEmail(v.to_owned()));
        }

        self.join_segment(v)
    }

    /// Append an emoji name, validating it first. The validator's detail is
    /// kept as the error source.
    pub fn join_emoji_name(self, v: &str) -> Self {
        if let Err(source) = validators::validate_emoji_name(v) {
            return self.fail(RouteError::InvalidEmojiName {
                name: v.to_owned(),
                source,
            });
        }

        self.join_segment(v)
    }

    /// Resolve the chain to its path string.
    ///
    /// Returns the first error captured while building, or the escaped
    /// segments joined by `/` with a guaranteed leading slash (an empty
    /// route resolves to `/`).
    pub fn to_path(&self) -> Result<String> {
        match &self.err {
            Some(err) => Err(err.clone()),
            None => Ok(join_path(&self.segments)),
        }
    }

    /// Resolve the chain onto `base`, replacing its path.
    ///
    /// Same gate as [`to_path`](Self::to_path); on success the returned URL
    /// is `base` with its path set to exactly the resolved path string.
    pub fn to_url(&self, base: &Url) -> Result<Url> {
        let path = self.to_path()?;
        let mut url = base.clone();
        url.set_path(&path);
        Ok(url)
    }
}
