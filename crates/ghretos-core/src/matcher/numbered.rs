//! Rules for numbered threads: issues, pull requests and discussions.
//!
//! All of these live under `/{owner}/{repo}/{section}/{number}` and are told
//! apart by the section segment and the fragment. In strict mode a fragment
//! is only accepted under the section it belongs to; in loose mode each rule
//! lists the sections it will also accept.

use super::{Target, lexer, repo_from};
use crate::resource::{Repo, Resource, ReviewCommentLocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Issues,
    Pull,
    Discussions,
}

impl Section {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "issues" => Some(Section::Issues),
            "pull" => Some(Section::Pull),
            "discussions" => Some(Section::Discussions),
            _ => None,
        }
    }
}

const ANY_SECTION: &[Section] = &[Section::Issues, Section::Pull, Section::Discussions];
const ISSUE_LIKE: &[Section] = &[Section::Issues, Section::Discussions];
const PULL_ONLY: &[Section] = &[Section::Pull];

/// The common head of a numbered URL.
struct Numbered<'s> {
    repo: Repo,
    section: Section,
    number: u64,
    /// Segments after the number.
    tail: &'s [&'s str],
}

fn numbered<'s>(segments: &'s [&'s str]) -> Option<Numbered<'s>> {
    match segments {
        [owner, name, section, number, tail @ ..] => Some(Numbered {
            section: Section::from_segment(section)?,
            repo: repo_from(owner, name)?,
            number: lexer::parse_number_segment(number)?,
            tail,
        }),
        _ => None,
    }
}

/// Checks whether `section` may carry a fragment whose own section is `home`.
fn admits(target: &Target<'_>, section: Section, home: Section, loose: &[Section]) -> bool {
    if target.strict {
        section == home
    } else {
        loose.contains(&section)
    }
}

/// Matches the thread page itself, bare or with its `#{anchor}…` fragment.
fn thread(
    target: &Target<'_>,
    home: Section,
    anchor: &str,
    loose: &[Section],
) -> Option<(Repo, u64)> {
    let n = numbered(&target.segments)?;
    if !n.tail.is_empty() {
        return None;
    }
    let admitted = match target.fragment {
        None => n.section == home,
        Some(fragment) if fragment.starts_with(anchor) => admits(target, n.section, home, loose),
        Some(_) => false,
    };
    admitted.then_some((n.repo, n.number))
}

/// Matches `#{prefix}{id}` on the thread page.
fn anchored_id(
    target: &Target<'_>,
    prefix: &str,
    home: Section,
    loose: &[Section],
) -> Option<(Repo, u64, u64)> {
    let n = numbered(&target.segments)?;
    if !n.tail.is_empty() {
        return None;
    }
    let id = lexer::prefixed_id(target.fragment?, prefix)?;
    admits(target, n.section, home, loose).then_some((n.repo, n.number, id))
}

pub(super) fn issue(target: &Target<'_>) -> Option<Resource> {
    let (repo, number) = thread(target, Section::Issues, "issue-", ISSUE_LIKE)?;
    Some(Resource::Issue { repo, number })
}

pub(super) fn pull_request(target: &Target<'_>) -> Option<Resource> {
    let (repo, number) = thread(target, Section::Pull, "issue-", PULL_ONLY)?;
    Some(Resource::PullRequest { repo, number })
}

pub(super) fn discussion(target: &Target<'_>) -> Option<Resource> {
    let (repo, number) = thread(target, Section::Discussions, "discussion-", ANY_SECTION)?;
    Some(Resource::Discussion { repo, number })
}

pub(super) fn issue_comment(target: &Target<'_>) -> Option<Resource> {
    let (repo, number, comment_id) =
        anchored_id(target, "issuecomment-", Section::Issues, ISSUE_LIKE)?;
    Some(Resource::IssueComment {
        repo,
        number,
        comment_id,
    })
}

pub(super) fn issue_event(target: &Target<'_>) -> Option<Resource> {
    let (repo, number, event_id) = anchored_id(target, "event-", Section::Issues, ISSUE_LIKE)?;
    Some(Resource::IssueEvent {
        repo,
        number,
        event_id,
    })
}

pub(super) fn pull_request_comment(target: &Target<'_>) -> Option<Resource> {
    let (repo, number, comment_id) =
        anchored_id(target, "issuecomment-", Section::Pull, PULL_ONLY)?;
    Some(Resource::PullRequestComment {
        repo,
        number,
        comment_id,
    })
}

pub(super) fn pull_request_event(target: &Target<'_>) -> Option<Resource> {
    let (repo, number, event_id) = anchored_id(target, "event-", Section::Pull, PULL_ONLY)?;
    Some(Resource::PullRequestEvent {
        repo,
        number,
        event_id,
    })
}

pub(super) fn pull_request_review(target: &Target<'_>) -> Option<Resource> {
    let (repo, number, review_id) =
        anchored_id(target, "pullrequestreview-", Section::Pull, ANY_SECTION)?;
    Some(Resource::PullRequestReview {
        repo,
        number,
        review_id,
    })
}

pub(super) fn discussion_comment(target: &Target<'_>) -> Option<Resource> {
    let (repo, number, comment_id) = anchored_id(
        target,
        "discussioncomment-",
        Section::Discussions,
        ANY_SECTION,
    )?;
    Some(Resource::DiscussionComment {
        repo,
        number,
        comment_id,
    })
}

/// Review comments come in three shapes: the conversation anchor, the files
/// tab and a single commit of the pull request. The last two only exist
/// under `pull`, whatever the mode.
pub(super) fn pull_request_review_comment(target: &Target<'_>) -> Option<Resource> {
    let n = numbered(&target.segments)?;
    let fragment = target.fragment?;
    let (comment_id, location) = match n.tail {
        [] => {
            let id = lexer::prefixed_id(fragment, "discussion_r")?;
            if !admits(target, n.section, Section::Pull, ANY_SECTION) {
                return None;
            }
            (id, ReviewCommentLocation::Conversation)
        }
        ["files"] if n.section == Section::Pull => {
            (lexer::prefixed_id(fragment, "r")?, ReviewCommentLocation::Files)
        }
        ["commits", sha] if n.section == Section::Pull && lexer::is_hex(sha) => (
            lexer::prefixed_id(fragment, "r")?,
            ReviewCommentLocation::Commit {
                sha: sha.to_string(),
            },
        ),
        _ => return None,
    };
    Some(Resource::PullRequestReviewComment {
        repo: n.repo,
        number: n.number,
        comment_id,
        location,
    })
}
