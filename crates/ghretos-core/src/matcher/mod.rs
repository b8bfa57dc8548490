//! URL matching.
//!
//! A URL is split into path segments and a fragment, then run through a
//! ranked list of rules, most specific first. The first rule whose kind is
//! enabled and whose shape fits produces the [`Resource`].
//!
//! Matching never fails loudly: a URL that is malformed, points at another
//! host or has an unknown shape simply yields `None`.
//!
//! # Example
//!
//! ```rust
//! use ghretos_core::{MatcherSettings, Resource, ResourceKind, parse_url, parse_url_with_settings};
//!
//! let resource = parse_url("https://github.com/rust-lang/rust/issues/1").unwrap();
//! assert!(matches!(resource, Resource::Issue { number: 1, .. }));
//!
//! let settings = MatcherSettings::new().with_kind(ResourceKind::Issue, false);
//! assert!(parse_url_with_settings("https://github.com/rust-lang/rust/issues/1", &settings).is_none());
//! ```

pub mod lexer;

mod gist;
mod numbered;
mod repository;

use std::sync::LazyLock;

use log::{debug, trace};
use url::Url;

use crate::resource::{Repo, Resource, ResourceKind};
use crate::settings::MatcherSettings;

static DEFAULT_SETTINGS: LazyLock<MatcherSettings> = LazyLock::new(MatcherSettings::default);

/// A URL reduced to what the rules look at.
#[derive(Debug, Clone)]
pub(crate) struct Target<'a> {
    /// Path segments, without the leading slash.
    pub segments: Vec<&'a str>,
    /// The fragment, if present and non-empty.
    pub fragment: Option<&'a str>,
    /// Whether fragments must belong to their path type.
    pub strict: bool,
}

impl<'a> Target<'a> {
    fn from_url(url: &'a Url, strict: bool) -> Option<Self> {
        let segments: Vec<&str> = url.path_segments()?.collect();
        if segments.is_empty() || segments == [""] {
            return None;
        }
        Some(Self {
            segments,
            fragment: url.fragment().filter(|f| !f.is_empty()),
            strict,
        })
    }
}

/// A single matching rule.
#[derive(Clone, Copy)]
pub(crate) struct Rule {
    /// The kind this rule produces; the rule only runs if it is enabled.
    pub kind: ResourceKind,
    /// Returns the resource if the target has this rule's shape.
    pub matcher: fn(&Target<'_>) -> Option<Resource>,
}

impl Rule {
    const fn new(kind: ResourceKind, matcher: fn(&Target<'_>) -> Option<Resource>) -> Self {
        Self { kind, matcher }
    }
}

/// Rules for GitHub hosts, most specific first.
static GITHUB_RULES: &[Rule] = &[
    Rule::new(
        ResourceKind::PullRequestReviewComment,
        numbered::pull_request_review_comment,
    ),
    Rule::new(ResourceKind::PullRequestReview, numbered::pull_request_review),
    Rule::new(ResourceKind::PullRequestComment, numbered::pull_request_comment),
    Rule::new(ResourceKind::PullRequestEvent, numbered::pull_request_event),
    Rule::new(ResourceKind::IssueComment, numbered::issue_comment),
    Rule::new(ResourceKind::IssueEvent, numbered::issue_event),
    Rule::new(ResourceKind::DiscussionComment, numbered::discussion_comment),
    Rule::new(ResourceKind::PullRequest, numbered::pull_request),
    Rule::new(ResourceKind::Issue, numbered::issue),
    Rule::new(ResourceKind::Discussion, numbered::discussion),
    Rule::new(ResourceKind::CommitComment, repository::commit_comment),
    Rule::new(ResourceKind::Commit, repository::commit),
    Rule::new(ResourceKind::ReleaseTag, repository::release_tag),
    Rule::new(ResourceKind::FileBlob, repository::file_blob),
    Rule::new(ResourceKind::FileTree, repository::file_tree),
    Rule::new(ResourceKind::Repo, repository::repository),
    Rule::new(ResourceKind::User, repository::user),
];

/// Rules for gist hosts.
static GIST_RULES: &[Rule] = &[Rule::new(ResourceKind::Gist, gist::gist)];

/// Builds a repository from path segments, validating both names.
fn repo_from(owner: &str, name: &str) -> Option<Repo> {
    (lexer::validate_user(owner) && lexer::validate_repository(name)).then(|| Repo::new(owner, name))
}

/// Returns `host` or `host:port` when the port is not the scheme default.
fn host_key(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Matches an already parsed URL.
pub fn match_url(url: &Url, settings: &MatcherSettings) -> Option<Resource> {
    if !matches!(url.scheme(), "http" | "https") {
        trace!("ignoring {} URL", url.scheme());
        return None;
    }
    let host = host_key(url)?;
    let rules = if settings.is_gist_host(&host) {
        GIST_RULES
    } else if settings.is_github_host(&host) {
        GITHUB_RULES
    } else {
        trace!("host {} is not configured", host);
        return None;
    };

    let target = Target::from_url(url, settings.require_strict_type)?;

    for rule in rules {
        if !settings.is_enabled(rule.kind) {
            trace!("skipping disabled rule {}", rule.kind);
            continue;
        }
        if let Some(resource) = (rule.matcher)(&target) {
            debug!("{} matched as {}", url, rule.kind);
            return Some(resource);
        }
    }

    trace!("no rule matched {}", url);
    None
}

/// Parses a URL with the given settings.
///
/// Returns `None` if the text is not an absolute URL or no enabled rule
/// matches it.
pub fn parse_url_with_settings(url: &str, settings: &MatcherSettings) -> Option<Resource> {
    match Url::parse(url.trim()) {
        Ok(parsed) => match_url(&parsed, settings),
        Err(e) => {
            trace!("not a URL: {}", e);
            None
        }
    }
}

/// Parses a URL with the default settings.
pub fn parse_url(url: &str) -> Option<Resource> {
    parse_url_with_settings(url, &DEFAULT_SETTINGS)
}
