//! Resource types produced by the URL matcher and the shorthand parser.
//!
//! Every URL shape ghretos understands maps to exactly one [`Resource`]
//! variant. Resources are plain values: they can be compared, hashed, sorted
//! and serialized, and each one can render the canonical `html_url` GitHub
//! would report for it.

use serde::Serialize;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ParseKindError;

/// Base URL for every github.com resource.
pub const GITHUB_BASE_URL: &str = "https://github.com";

/// Base URL for gists.
pub const GIST_BASE_URL: &str = "https://gist.github.com";

/// A repository, identified by its owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Repo {
    /// The login of the user or organization owning the repository.
    pub owner: String,
    /// The name of the repository.
    pub name: String,
}

impl Repo {
    /// Creates a new repository reference.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Returns the full name in `owner/name` form.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Returns the github.com URL of the repository.
    pub fn html_url(&self) -> String {
        format!("{}/{}/{}", GITHUB_BASE_URL, self.owner, self.name)
    }
}

impl Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A highlighted line range on a file page (`#L10` or `#L10-L20`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LineRange {
    /// First highlighted line (1-based).
    pub start: u64,
    /// Last highlighted line, if a range was selected.
    pub end: Option<u64>,
}

impl LineRange {
    /// A single highlighted line.
    pub fn line(line: u64) -> Self {
        Self {
            start: line,
            end: None,
        }
    }

    /// A range of highlighted lines.
    pub fn span(start: u64, end: u64) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }
}

impl Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "L{}-L{}", self.start, end),
            None => write!(f, "L{}", self.start),
        }
    }
}

/// The page a pull request review comment link points at.
///
/// Review comments can be linked from three places, and GitHub renders a
/// different URL for each of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum ReviewCommentLocation {
    /// The conversation tab: `/pull/{n}#discussion_r{id}`.
    Conversation,
    /// The files tab: `/pull/{n}/files#r{id}`.
    Files,
    /// A single commit of the pull request: `/pull/{n}/commits/{sha}#r{id}`.
    Commit {
        /// The commit the comment was made on.
        sha: String,
    },
}

/// A GitHub resource identified from a URL or shorthand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resource {
    /// A user or organization profile.
    User { login: String },
    /// A repository.
    Repo { repo: Repo },
    /// An issue.
    Issue { repo: Repo, number: u64 },
    /// A comment on an issue.
    IssueComment {
        repo: Repo,
        number: u64,
        comment_id: u64,
    },
    /// A timeline event on an issue.
    IssueEvent {
        repo: Repo,
        number: u64,
        event_id: u64,
    },
    /// A pull request.
    ///
    /// Pull requests are issues in GitHub's data model; the distinction here
    /// only reflects the URL. Do not assume the number really is a pull request.
    PullRequest { repo: Repo, number: u64 },
    /// A conversation comment on a pull request.
    PullRequestComment {
        repo: Repo,
        number: u64,
        comment_id: u64,
    },
    /// A review on a pull request.
    PullRequestReview {
        repo: Repo,
        number: u64,
        review_id: u64,
    },
    /// A review comment on a pull request.
    PullRequestReviewComment {
        repo: Repo,
        number: u64,
        comment_id: u64,
        location: ReviewCommentLocation,
    },
    /// A timeline event on a pull request.
    PullRequestEvent {
        repo: Repo,
        number: u64,
        event_id: u64,
    },
    /// A discussion.
    Discussion { repo: Repo, number: u64 },
    /// A comment on a discussion.
    DiscussionComment {
        repo: Repo,
        number: u64,
        comment_id: u64,
    },
    /// A commit.
    Commit { repo: Repo, sha: String },
    /// A comment on a commit.
    CommitComment {
        repo: Repo,
        sha: String,
        comment_id: u64,
    },
    /// The release published for a tag.
    ReleaseTag { repo: Repo, tag: String },
    /// A directory listing at a ref. An empty `path` is the repository root.
    FileTree {
        repo: Repo,
        git_ref: String,
        path: String,
    },
    /// A file at a ref, optionally with highlighted lines.
    FileBlob {
        repo: Repo,
        git_ref: String,
        path: String,
        lines: Option<LineRange>,
    },
    /// A gist, optionally pointing at one of its files.
    Gist {
        owner: Option<String>,
        id: String,
        file: Option<String>,
    },
    /// `owner/repo#number` shorthand: an issue, pull request or discussion.
    NumberedResource { repo: Repo, number: u64 },
    /// `owner/repo@ref` shorthand: a branch, tag or commit.
    Ref { repo: Repo, git_ref: String },
}

impl Resource {
    /// Returns the kind of this resource.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::User { .. } => ResourceKind::User,
            Resource::Repo { .. } => ResourceKind::Repo,
            Resource::Issue { .. } => ResourceKind::Issue,
            Resource::IssueComment { .. } => ResourceKind::IssueComment,
            Resource::IssueEvent { .. } => ResourceKind::IssueEvent,
            Resource::PullRequest { .. } => ResourceKind::PullRequest,
            Resource::PullRequestComment { .. } => ResourceKind::PullRequestComment,
            Resource::PullRequestReview { .. } => ResourceKind::PullRequestReview,
            Resource::PullRequestReviewComment { .. } => ResourceKind::PullRequestReviewComment,
            Resource::PullRequestEvent { .. } => ResourceKind::PullRequestEvent,
            Resource::Discussion { .. } => ResourceKind::Discussion,
            Resource::DiscussionComment { .. } => ResourceKind::DiscussionComment,
            Resource::Commit { .. } => ResourceKind::Commit,
            Resource::CommitComment { .. } => ResourceKind::CommitComment,
            Resource::ReleaseTag { .. } => ResourceKind::ReleaseTag,
            Resource::FileTree { .. } => ResourceKind::FileTree,
            Resource::FileBlob { .. } => ResourceKind::FileBlob,
            Resource::Gist { .. } => ResourceKind::Gist,
            Resource::NumberedResource { .. } => ResourceKind::NumberedResource,
            Resource::Ref { .. } => ResourceKind::Ref,
        }
    }

    /// Returns the repository this resource belongs to, if any.
    pub fn repo(&self) -> Option<&Repo> {
        match self {
            Resource::User { .. } | Resource::Gist { .. } => None,
            Resource::Repo { repo }
            | Resource::Issue { repo, .. }
            | Resource::IssueComment { repo, .. }
            | Resource::IssueEvent { repo, .. }
            | Resource::PullRequest { repo, .. }
            | Resource::PullRequestComment { repo, .. }
            | Resource::PullRequestReview { repo, .. }
            | Resource::PullRequestReviewComment { repo, .. }
            | Resource::PullRequestEvent { repo, .. }
            | Resource::Discussion { repo, .. }
            | Resource::DiscussionComment { repo, .. }
            | Resource::Commit { repo, .. }
            | Resource::CommitComment { repo, .. }
            | Resource::ReleaseTag { repo, .. }
            | Resource::FileTree { repo, .. }
            | Resource::FileBlob { repo, .. }
            | Resource::NumberedResource { repo, .. }
            | Resource::Ref { repo, .. } => Some(repo),
        }
    }

    /// Returns the issue, pull request or discussion number, if any.
    pub fn number(&self) -> Option<u64> {
        match self {
            Resource::Issue { number, .. }
            | Resource::IssueComment { number, .. }
            | Resource::IssueEvent { number, .. }
            | Resource::PullRequest { number, .. }
            | Resource::PullRequestComment { number, .. }
            | Resource::PullRequestReview { number, .. }
            | Resource::PullRequestReviewComment { number, .. }
            | Resource::PullRequestEvent { number, .. }
            | Resource::Discussion { number, .. }
            | Resource::DiscussionComment { number, .. }
            | Resource::NumberedResource { number, .. } => Some(*number),
            _ => None,
        }
    }

    /// Returns the canonical URL GitHub reports for this resource.
    ///
    /// Shorthand resources have no page of their own: numbered resources
    /// render as an issue URL (GitHub redirects it to the pull request or
    /// discussion) and refs render as a tree URL.
    pub fn html_url(&self) -> String {
        match self {
            Resource::User { login } => format!("{}/{}", GITHUB_BASE_URL, login),
            Resource::Repo { repo } => repo.html_url(),
            Resource::Issue { repo, number } | Resource::NumberedResource { repo, number } => {
                format!("{}/issues/{}", repo.html_url(), number)
            }
            Resource::IssueComment {
                repo,
                number,
                comment_id,
            } => format!(
                "{}/issues/{}#issuecomment-{}",
                repo.html_url(),
                number,
                comment_id
            ),
            Resource::IssueEvent {
                repo,
                number,
                event_id,
            } => format!("{}/issues/{}#event-{}", repo.html_url(), number, event_id),
            Resource::PullRequest { repo, number } => {
                format!("{}/pull/{}", repo.html_url(), number)
            }
            Resource::PullRequestComment {
                repo,
                number,
                comment_id,
            } => format!(
                "{}/pull/{}#issuecomment-{}",
                repo.html_url(),
                number,
                comment_id
            ),
            Resource::PullRequestReview {
                repo,
                number,
                review_id,
            } => format!(
                "{}/pull/{}#pullrequestreview-{}",
                repo.html_url(),
                number,
                review_id
            ),
            Resource::PullRequestReviewComment {
                repo,
                number,
                comment_id,
                location,
            } => match location {
                ReviewCommentLocation::Conversation => format!(
                    "{}/pull/{}#discussion_r{}",
                    repo.html_url(),
                    number,
                    comment_id
                ),
                ReviewCommentLocation::Files => {
                    format!("{}/pull/{}/files#r{}", repo.html_url(), number, comment_id)
                }
                ReviewCommentLocation::Commit { sha } => format!(
                    "{}/pull/{}/commits/{}#r{}",
                    repo.html_url(),
                    number,
                    sha,
                    comment_id
                ),
            },
            Resource::PullRequestEvent {
                repo,
                number,
                event_id,
            } => format!("{}/pull/{}#event-{}", repo.html_url(), number, event_id),
            Resource::Discussion { repo, number } => {
                format!("{}/discussions/{}", repo.html_url(), number)
            }
            Resource::DiscussionComment {
                repo,
                number,
                comment_id,
            } => format!(
                "{}/discussions/{}#discussioncomment-{}",
                repo.html_url(),
                number,
                comment_id
            ),
            Resource::Commit { repo, sha } => format!("{}/commit/{}", repo.html_url(), sha),
            Resource::CommitComment {
                repo,
                sha,
                comment_id,
            } => format!(
                "{}/commit/{}#commitcomment-{}",
                repo.html_url(),
                sha,
                comment_id
            ),
            Resource::ReleaseTag { repo, tag } => {
                format!("{}/releases/tag/{}", repo.html_url(), tag)
            }
            Resource::FileTree {
                repo,
                git_ref,
                path,
            } => {
                if path.is_empty() {
                    format!("{}/tree/{}", repo.html_url(), git_ref)
                } else {
                    format!("{}/tree/{}/{}", repo.html_url(), git_ref, path)
                }
            }
            Resource::FileBlob {
                repo,
                git_ref,
                path,
                lines,
            } => {
                let url = format!("{}/blob/{}/{}", repo.html_url(), git_ref, path);
                match lines {
                    Some(lines) => format!("{}#{}", url, lines),
                    None => url,
                }
            }
            Resource::Gist { owner, id, file } => {
                let mut url = match owner {
                    Some(owner) => format!("{}/{}/{}", GIST_BASE_URL, owner, id),
                    None => format!("{}/{}", GIST_BASE_URL, id),
                };
                if let Some(file) = file {
                    url.push_str("#file-");
                    url.push_str(file);
                }
                url
            }
            Resource::Ref { repo, git_ref } => format!("{}/tree/{}", repo.html_url(), git_ref),
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html_url())
    }
}

/// The kind of a [`Resource`], without its data.
///
/// Kinds key the per-variant switches in
/// [`MatcherSettings`](crate::MatcherSettings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    User,
    Repo,
    Issue,
    IssueComment,
    IssueEvent,
    PullRequest,
    PullRequestComment,
    PullRequestReview,
    PullRequestReviewComment,
    PullRequestEvent,
    Discussion,
    DiscussionComment,
    Commit,
    CommitComment,
    ReleaseTag,
    FileTree,
    FileBlob,
    Gist,
    NumberedResource,
    Ref,
}

impl ResourceKind {
    /// Every kind, in declaration order.
    pub const ALL: [ResourceKind; 20] = [
        ResourceKind::User,
        ResourceKind::Repo,
        ResourceKind::Issue,
        ResourceKind::IssueComment,
        ResourceKind::IssueEvent,
        ResourceKind::PullRequest,
        ResourceKind::PullRequestComment,
        ResourceKind::PullRequestReview,
        ResourceKind::PullRequestReviewComment,
        ResourceKind::PullRequestEvent,
        ResourceKind::Discussion,
        ResourceKind::DiscussionComment,
        ResourceKind::Commit,
        ResourceKind::CommitComment,
        ResourceKind::ReleaseTag,
        ResourceKind::FileTree,
        ResourceKind::FileBlob,
        ResourceKind::Gist,
        ResourceKind::NumberedResource,
        ResourceKind::Ref,
    ];

    /// Returns the snake_case name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::User => "user",
            ResourceKind::Repo => "repo",
            ResourceKind::Issue => "issue",
            ResourceKind::IssueComment => "issue_comment",
            ResourceKind::IssueEvent => "issue_event",
            ResourceKind::PullRequest => "pull_request",
            ResourceKind::PullRequestComment => "pull_request_comment",
            ResourceKind::PullRequestReview => "pull_request_review",
            ResourceKind::PullRequestReviewComment => "pull_request_review_comment",
            ResourceKind::PullRequestEvent => "pull_request_event",
            ResourceKind::Discussion => "discussion",
            ResourceKind::DiscussionComment => "discussion_comment",
            ResourceKind::Commit => "commit",
            ResourceKind::CommitComment => "commit_comment",
            ResourceKind::ReleaseTag => "release_tag",
            ResourceKind::FileTree => "file_tree",
            ResourceKind::FileBlob => "file_blob",
            ResourceKind::Gist => "gist",
            ResourceKind::NumberedResource => "numbered_resource",
            ResourceKind::Ref => "ref",
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ParseKindError;

    /// Parses a kind name. Dashes are accepted in place of underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParseKindError::unknown(s))
    }
}
