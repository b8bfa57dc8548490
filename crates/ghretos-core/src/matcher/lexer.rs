//! Token parsers and validators for URL components.
//!
//! Path segments and fragments are matched with small nom parsers; owner,
//! repository and ref names go through plain character validators.

use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt, rest, verify},
    sequence::{preceded, terminated},
};

use crate::resource::LineRange;

/// Maximum length of a GitHub login.
pub const MAX_LOGIN_LEN: usize = 39;

/// Maximum length of a repository name.
pub const MAX_REPO_NAME_LEN: usize = 100;

/// Substrings git refuses anywhere in a ref name.
const FORBIDDEN_REF_SEQUENCES: &[&str] = &[
    "..", "~", "^", ":", "?", "*", "[", "\\", "@{", "//", "/.", ".lock/",
];

fn is_login_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_repo_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_')
}

/// Returns true if `name` is a valid GitHub user or organization login.
pub fn validate_user(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_LOGIN_LEN
        && name.chars().all(is_login_char)
        && !name.starts_with('-')
        && !name.ends_with('-')
}

/// Returns true if `name` is a valid repository name.
pub fn validate_repository(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_REPO_NAME_LEN
        && name.chars().all(is_repo_name_char)
        && name != "."
        && name != ".."
}

/// Returns true if `name` is a valid git ref name.
///
/// Follows the rules of `git check-ref-format`.
pub fn validate_ref(name: &str) -> bool {
    if name.is_empty() || name == "@" {
        return false;
    }
    if name.starts_with('.') || name.starts_with('/') || name.ends_with('/') {
        return false;
    }
    if FORBIDDEN_REF_SEQUENCES.iter().any(|seq| name.contains(seq)) {
        return false;
    }
    if name
        .chars()
        .any(|c| c.is_whitespace() || c.is_ascii_control())
    {
        return false;
    }
    !name
        .split('/')
        .any(|component| component.starts_with('.') || component.ends_with('.') || component.ends_with(".lock"))
}

/// Returns true if `text` is a non-empty run of hex digits.
pub fn is_hex(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_hexdigit())
}

/// Returns true if `text` can be a gist id.
///
/// Gist ids are hex; legacy numeric ids are a subset of that.
pub fn is_gist_id(text: &str) -> bool {
    is_hex(text)
}

/// Parses a run of decimal digits into a `u64`.
pub fn number(input: &str) -> IResult<&str, u64> {
    map_res(digit1, |digits: &str| digits.parse::<u64>()).parse(input)
}

/// Parses a decimal number greater than zero.
pub fn positive_number(input: &str) -> IResult<&str, u64> {
    verify(number, |n: &u64| *n > 0).parse(input)
}

/// Parses a whole path segment as a positive number.
pub fn parse_number_segment(segment: &str) -> Option<u64> {
    all_consuming(positive_number)
        .parse(segment)
        .ok()
        .map(|(_, n)| n)
}

/// Parses a fragment of the form `{prefix}{id}` and returns the id.
pub fn prefixed_id(fragment: &str, prefix: &str) -> Option<u64> {
    all_consuming(preceded(tag(prefix), positive_number))
        .parse(fragment)
        .ok()
        .map(|(_, id)| id)
}

/// Parses `L{line}` with an optional `C{column}` suffix and returns the line.
fn line_ref(input: &str) -> IResult<&str, u64> {
    terminated(
        preceded(char('L'), positive_number),
        opt(preceded(char('C'), positive_number)),
    )
    .parse(input)
}

/// Parses a line highlight: `L10`, `L10-L20` or `L10C5-L20C8`.
///
/// Column selections are accepted but only the lines are kept.
pub fn line_range(input: &str) -> IResult<&str, LineRange> {
    (line_ref, opt(preceded(char('-'), line_ref)))
        .map(|(start, end)| LineRange { start, end })
        .parse(input)
}

/// Parses a whole fragment as a line highlight.
///
/// Ranges that end before they start are rejected.
pub fn parse_line_fragment(fragment: &str) -> Option<LineRange> {
    all_consuming(verify(line_range, |range: &LineRange| {
        range.end.is_none_or(|end| end >= range.start)
    }))
    .parse(fragment)
    .ok()
    .map(|(_, range)| range)
}

fn gist_anchor(input: &str) -> IResult<&str, &str> {
    preceded(tag("file-"), verify(rest, |name: &str| !name.is_empty())).parse(input)
}

/// Parses a gist file anchor (`file-{name}`) and returns the name.
pub fn gist_file(fragment: &str) -> Option<&str> {
    gist_anchor(fragment).ok().map(|(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_users() {
        assert!(validate_user("octocat"));
        assert!(validate_user("a"));
        assert!(validate_user("my-org-2"));
        assert!(validate_user(&"a".repeat(39)));
    }

    #[test]
    fn invalid_users() {
        assert!(!validate_user(""));
        assert!(!validate_user("-leading"));
        assert!(!validate_user("trailing-"));
        assert!(!validate_user("has_underscore"));
        assert!(!validate_user("has.dot"));
        assert!(!validate_user(&"a".repeat(40)));
    }

    #[test]
    fn valid_repositories() {
        assert!(validate_repository("repo"));
        assert!(validate_repository("my.repo_name-2"));
        assert!(validate_repository(".github"));
        assert!(validate_repository("..."));
        assert!(validate_repository(&"r".repeat(100)));
    }

    #[test]
    fn invalid_repositories() {
        assert!(!validate_repository(""));
        assert!(!validate_repository("."));
        assert!(!validate_repository(".."));
        assert!(!validate_repository("has space"));
        assert!(!validate_repository("slash/name"));
        assert!(!validate_repository(&"r".repeat(101)));
    }

    #[test]
    fn valid_refs() {
        assert!(validate_ref("main"));
        assert!(validate_ref("feature/login-page"));
        assert!(validate_ref("v1.2.3"));
        assert!(validate_ref("abc123def"));
        assert!(validate_ref("release_2024"));
    }

    #[test]
    fn invalid_refs() {
        for name in [
            "",
            "@",
            ".hidden",
            "/leading",
            "trailing/",
            "double..dot",
            "tilde~1",
            "caret^",
            "colon:",
            "question?",
            "star*",
            "bracket[",
            "back\\slash",
            "at@{brace",
            "double//slash",
            "dir/.hidden",
            "branch.lock",
            "dir.lock/file",
            "ends.",
            "with space",
            "tab\there",
        ] {
            assert!(!validate_ref(name), "{name:?} should be rejected");
        }
    }

    #[test]
    fn hex_and_gist_ids() {
        assert!(is_hex("deadBEEF0123"));
        assert!(!is_hex(""));
        assert!(!is_hex("xyz"));
        assert!(is_gist_id("aa5a315d61ae9438b18d"));
        assert!(is_gist_id("1234567"));
        assert!(!is_gist_id("octocat"));
        assert!(!is_gist_id("discover"));
        assert!(!is_gist_id("with-dash"));
        assert!(!is_gist_id(""));
    }

    #[test]
    fn number_segments() {
        assert_eq!(parse_number_segment("42"), Some(42));
        assert_eq!(parse_number_segment("007"), Some(7));
        assert_eq!(parse_number_segment("0"), None);
        assert_eq!(parse_number_segment("-1"), None);
        assert_eq!(parse_number_segment("+1"), None);
        assert_eq!(parse_number_segment("12abc"), None);
        assert_eq!(parse_number_segment(""), None);
        assert_eq!(parse_number_segment("99999999999999999999999"), None);
    }

    #[test]
    fn prefixed_ids() {
        assert_eq!(prefixed_id("issuecomment-123", "issuecomment-"), Some(123));
        assert_eq!(prefixed_id("discussion_r9", "discussion_r"), Some(9));
        assert_eq!(prefixed_id("r77", "r"), Some(77));
        assert_eq!(prefixed_id("issuecomment-", "issuecomment-"), None);
        assert_eq!(prefixed_id("issuecomment-0", "issuecomment-"), None);
        assert_eq!(prefixed_id("issuecomment-12x", "issuecomment-"), None);
        assert_eq!(prefixed_id("event-5", "issuecomment-"), None);
    }

    #[test]
    fn line_fragments() {
        assert_eq!(parse_line_fragment("L10"), Some(LineRange::line(10)));
        assert_eq!(parse_line_fragment("L10-L20"), Some(LineRange::span(10, 20)));
        assert_eq!(parse_line_fragment("L5-L5"), Some(LineRange::span(5, 5)));
        assert_eq!(parse_line_fragment("L20-L10"), None);
        assert_eq!(parse_line_fragment("L0"), None);
        assert_eq!(parse_line_fragment("L10-"), None);
        assert_eq!(parse_line_fragment("L10-20"), None);
        assert_eq!(parse_line_fragment("readme"), None);
    }

    #[test]
    fn line_fragments_with_columns() {
        assert_eq!(parse_line_fragment("L10C5-L12C8"), Some(LineRange::span(10, 12)));
        assert_eq!(parse_line_fragment("L10C5"), Some(LineRange::line(10)));
        assert_eq!(parse_line_fragment("L10-L12C3"), Some(LineRange::span(10, 12)));
        assert_eq!(parse_line_fragment("L10C"), None);
        assert_eq!(parse_line_fragment("L10C0"), None);
    }

    #[test]
    fn gist_file_anchor() {
        assert_eq!(gist_file("file-hello-rs"), Some("hello-rs"));
        assert_eq!(gist_file("file-"), None);
        assert_eq!(gist_file("comment-1"), None);
        assert_eq!(gist_file("file"), None);
    }
}
