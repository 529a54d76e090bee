//! Validators for the entity names that may appear in routes.
//!
//! These are pure predicates over the wire form of each entity kind. They
//! are deliberately strict: a value that fails here would either 404 on the
//! server or, worse, land in the wrong route entirely.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::EmojiNameError;

/// Length of server-generated identifiers.
pub const ID_LENGTH: usize = 26;

/// Maximum length of a username.
pub const USERNAME_MAX_LENGTH: usize = 64;

/// Team-name length bounds (the URL slug, not the display name).
pub const TEAM_NAME_MIN_LENGTH: usize = 2;
pub const TEAM_NAME_MAX_LENGTH: usize = 64;

/// Maximum length of a channel name.
pub const CHANNEL_NAME_MAX_LENGTH: usize = 64;

/// Maximum length of an emoji name.
pub const EMOJI_NAME_MAX_LENGTH: usize = 64;

/// Mention keywords that can never be real usernames.
const RESERVED_USERNAMES: &[&str] = &["all", "channel", "system"];

// ---------------------------------------------------------------------------
// Patterns (compiled once)
// ---------------------------------------------------------------------------

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9._-]+$").expect("valid regex"));

/// Lowercase alphanumeric with interior hyphens only.
static TEAM_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").expect("valid regex"));

static CHANNEL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("valid regex"));

/// Pragmatic email shape: RFC 5322 atext local part, `@`, dotted domain.
/// Note atext includes `/`, so the segment-level slash check downstream is
/// still reachable for emails.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)+$")
        .expect("valid regex")
});

static EMOJI_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9+_-]+$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Whether `v` is a valid server-generated identifier: exactly
/// [`ID_LENGTH`] lowercase-alphanumeric ASCII characters.
pub fn is_valid_id(v: &str) -> bool {
    v.len() == ID_LENGTH
        && v.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Whether `v` is a valid username: 1..=[`USERNAME_MAX_LENGTH`] characters
/// from `[a-z0-9._-]`, and not a reserved mention keyword.
pub fn is_valid_username(v: &str) -> bool {
    !v.is_empty()
        && v.len() <= USERNAME_MAX_LENGTH
        && !RESERVED_USERNAMES.contains(&v)
        && USERNAME_RE.is_match(v)
}

/// Whether `v` is a valid team name (URL slug): lowercase alphanumeric with
/// interior hyphens, [`TEAM_NAME_MIN_LENGTH`]..=[`TEAM_NAME_MAX_LENGTH`]
/// characters.
pub fn is_valid_team_name(v: &str) -> bool {
    v.len() >= TEAM_NAME_MIN_LENGTH && v.len() <= TEAM_NAME_MAX_LENGTH && TEAM_NAME_RE.is_match(v)
}

/// Whether `v` is a valid channel name: 1..=[`CHANNEL_NAME_MAX_LENGTH`]
/// characters from `[a-z0-9_-]`.
pub fn is_valid_channel_name(v: &str) -> bool {
    !v.is_empty() && v.len() <= CHANNEL_NAME_MAX_LENGTH && CHANNEL_NAME_RE.is_match(v)
}

/// Whether `v` looks like a deliverable email address.
pub fn is_valid_email(v: &str) -> bool {
    EMAIL_RE.is_match(v)
}

/// Validate an emoji name, reporting which rule was broken.
pub fn validate_emoji_name(v: &str) -> Result<(), EmojiNameError> {
    if v.is_empty() {
        return Err(EmojiNameError::Empty);
    }
    if v.len() > EMOJI_NAME_MAX_LENGTH {
        return Err(EmojiNameError::TooLong {
            max: EMOJI_NAME_MAX_LENGTH,
        });
    }
    if !EMOJI_NAME_RE.is_match(v) {
        return Err(EmojiNameError::InvalidCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ids() {
        assert!(is_valid_id("abcdefghijklmnopqrstuvwxyz"));
        assert!(is_valid_id("a1b2c3d4e5f6g7h8i9j0k1l2m3"));
    }

    #[test]
    fn invalid_ids() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("short"));
        // Right length, wrong characters
        assert!(!is_valid_id("ABCDEFGHIJKLMNOPQRSTUVWXYZ"));
        assert!(!is_valid_id("abcdefghijklmnopqrstuvwxy!"));
        // One character off on either side
        assert!(!is_valid_id("abcdefghijklmnopqrstuvwxy"));
        assert!(!is_valid_id("abcdefghijklmnopqrstuvwxyza"));
    }

    #[test]
    fn valid_usernames() {
        assert!(is_valid_username("john.doe"));
        assert!(is_valid_username("user123"));
        assert!(is_valid_username("a"));
        assert!(is_valid_username("first_last-2"));
    }

    #[test]
    fn invalid_usernames() {
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("user@name"));
        assert!(!is_valid_username("User"));
        assert!(!is_valid_username(&"a".repeat(USERNAME_MAX_LENGTH + 1)));
    }

    #[test]
    fn reserved_usernames_are_rejected() {
        for name in RESERVED_USERNAMES {
            assert!(!is_valid_username(name), "{name} should be reserved");
        }
    }

    #[test]
    fn valid_team_names() {
        assert!(is_valid_team_name("myteam"));
        assert!(is_valid_team_name("my-team"));
        assert!(is_valid_team_name("ab"));
    }

    #[test]
    fn invalid_team_names() {
        assert!(!is_valid_team_name(""));
        assert!(!is_valid_team_name("a"));
        assert!(!is_valid_team_name("team@name"));
        assert!(!is_valid_team_name("-team"));
        assert!(!is_valid_team_name("team-"));
        assert!(!is_valid_team_name(&"t".repeat(TEAM_NAME_MAX_LENGTH + 1)));
    }

    #[test]
    fn valid_channel_names() {
        assert!(is_valid_channel_name("mychannel"));
        assert!(is_valid_channel_name("my-channel"));
        assert!(is_valid_channel_name("town_square"));
        // A raw ID is also addressable as a channel
        assert!(is_valid_channel_name("abcdefghijklmnopqrstuvwxyz"));
    }

    #[test]
    fn invalid_channel_names() {
        assert!(!is_valid_channel_name(""));
        assert!(!is_valid_channel_name("channel@name"));
        assert!(!is_valid_channel_name("My-Channel"));
    }

    #[test]
    fn valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.com"));
        assert!(is_valid_email("user+tag@sub.example.co"));
    }

    #[test]
    fn invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn valid_emoji_names() {
        assert!(validate_emoji_name("custom_test_emoji").is_ok());
        assert!(validate_emoji_name("my_custom_emoji").is_ok());
        assert!(validate_emoji_name("+1").is_ok());
    }

    #[test]
    fn invalid_emoji_names_report_the_broken_rule() {
        assert_eq!(validate_emoji_name(""), Err(EmojiNameError::Empty));
        assert_eq!(
            validate_emoji_name("smile!"),
            Err(EmojiNameError::InvalidCharacters)
        );
        assert_eq!(
            validate_emoji_name(&"e".repeat(EMOJI_NAME_MAX_LENGTH + 1)),
            Err(EmojiNameError::TooLong {
                max: EMOJI_NAME_MAX_LENGTH
            })
        );
    }
}
