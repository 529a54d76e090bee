//! Percent-escaping of individual path segments.
//!
//! Segments are escaped as opaque tokens: `/` itself is escaped, so a
//! segment can never be reinterpreted as a sub-path once it is in the route.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped inside a single path segment.
///
/// Everything except ASCII alphanumerics, the RFC 3986 unreserved marks
/// (`-_.~`) and the pchar extras `$&+:=@` is escaped. Space becomes `%20`
/// and `/` becomes `%2F`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Escape `v` so it is safe as one opaque path segment. Total: any input,
/// including the empty string, produces a valid (possibly empty) token.
pub fn escape_segment(v: &str) -> String {
    utf8_percent_encode(v, PATH_SEGMENT).to_string()
}

/// Join already-escaped segments under a leading `/`.
///
/// Empty segments contribute no visible text: they are dropped rather than
/// producing `//`. An empty list resolves to just `/`.
pub fn join_path(segments: &[String]) -> String {
    let mut path = String::new();
    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        path.push('/');
        path.push_str(segment);
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}
