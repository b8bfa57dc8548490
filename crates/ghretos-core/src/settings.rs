//! Configuration for the URL matcher and the shorthand parser.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceKind;

/// Hosts recognized as GitHub by default.
pub const DEFAULT_DOMAINS: &[&str] = &["github.com"];

/// Hosts recognized as the gist service by default.
pub const DEFAULT_GIST_DOMAINS: &[&str] = &["gist.github.com"];

/// Selects which resources the matcher may return.
///
/// Every resource kind has its own switch and the switches are independent:
/// turning off `issues` leaves `issue_comments` untouched. All switches are on
/// by default.
///
/// Settings deserialize from a partial object; missing fields keep their
/// default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherSettings {
    /// Hosts treated as GitHub, including `:port` for non-default ports.
    pub domains: Vec<String>,
    /// Hosts treated as the gist service.
    pub gist_domains: Vec<String>,

    pub users: bool,
    pub repositories: bool,
    pub issues: bool,
    pub issue_comments: bool,
    pub issue_events: bool,
    pub pull_requests: bool,
    pub pull_request_comments: bool,
    pub pull_request_reviews: bool,
    pub pull_request_review_comments: bool,
    pub pull_request_events: bool,
    pub discussions: bool,
    pub discussion_comments: bool,
    pub commits: bool,
    pub commit_comments: bool,
    pub releases: bool,
    pub file_trees: bool,
    pub file_blobs: bool,
    pub gists: bool,

    /// Master switch for the shorthand parser.
    pub shorthand: bool,
    /// `owner/repo` shorthand.
    pub short_repo: bool,
    /// `owner/repo#123` shorthand.
    pub short_numberables: bool,
    /// `owner/repo@ref` shorthand.
    pub short_refs: bool,

    /// If true, a fragment is only accepted under the path type it belongs
    /// to (`#issuecomment-` under `issues` or `pull`, `#discussioncomment-`
    /// under `discussions`, and so on).
    /// If false, the fragment alone decides the resource type.
    pub require_strict_type: bool,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            domains: DEFAULT_DOMAINS.iter().map(|d| d.to_string()).collect(),
            gist_domains: DEFAULT_GIST_DOMAINS.iter().map(|d| d.to_string()).collect(),
            users: true,
            repositories: true,
            issues: true,
            issue_comments: true,
            issue_events: true,
            pull_requests: true,
            pull_request_comments: true,
            pull_request_reviews: true,
            pull_request_review_comments: true,
            pull_request_events: true,
            discussions: true,
            discussion_comments: true,
            commits: true,
            commit_comments: true,
            releases: true,
            file_trees: true,
            file_blobs: true,
            gists: true,
            shorthand: true,
            short_repo: true,
            short_numberables: true,
            short_refs: true,
            require_strict_type: true,
        }
    }
}

impl MatcherSettings {
    /// Creates settings with every resource enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates settings with every resource and shorthand switch turned off.
    ///
    /// Domains and strict fragment typing keep their defaults. Combine with [`with_kind`](Self::with_kind)
    /// to match only a handful of resources.
    pub fn none() -> Self {
        Self {
            users: false,
            repositories: false,
            issues: false,
            issue_comments: false,
            issue_events: false,
            pull_requests: false,
            pull_request_comments: false,
            pull_request_reviews: false,
            pull_request_review_comments: false,
            pull_request_events: false,
            discussions: false,
            discussion_comments: false,
            commits: false,
            commit_comments: false,
            releases: false,
            file_trees: false,
            file_blobs: false,
            gists: false,
            shorthand: false,
            short_repo: false,
            short_numberables: false,
            short_refs: false,
            ..Default::default()
        }
    }

    /// Sets the hosts treated as GitHub.
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the hosts treated as the gist service.
    pub fn with_gist_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gist_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether fragments must match their path type.
    pub fn with_require_strict_type(mut self, value: bool) -> Self {
        self.require_strict_type = value;
        self
    }

    /// Sets whether shorthand parsing is enabled at all.
    pub fn with_shorthand(mut self, value: bool) -> Self {
        self.shorthand = value;
        self
    }

    /// Sets whether `owner/repo` shorthand is recognized.
    pub fn with_short_repo(mut self, value: bool) -> Self {
        self.short_repo = value;
        self
    }

    /// Enables or disables a single resource kind.
    pub fn with_kind(mut self, kind: ResourceKind, enabled: bool) -> Self {
        self.set_enabled(kind, enabled);
        self
    }

    /// Enables or disables a single resource kind in place.
    pub fn set_enabled(&mut self, kind: ResourceKind, enabled: bool) {
        *self.switch_mut(kind) = enabled;
    }

    /// Returns true if the matcher may return resources of this kind.
    pub fn is_enabled(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::User => self.users,
            ResourceKind::Repo => self.repositories,
            ResourceKind::Issue => self.issues,
            ResourceKind::IssueComment => self.issue_comments,
            ResourceKind::IssueEvent => self.issue_events,
            ResourceKind::PullRequest => self.pull_requests,
            ResourceKind::PullRequestComment => self.pull_request_comments,
            ResourceKind::PullRequestReview => self.pull_request_reviews,
            ResourceKind::PullRequestReviewComment => self.pull_request_review_comments,
            ResourceKind::PullRequestEvent => self.pull_request_events,
            ResourceKind::Discussion => self.discussions,
            ResourceKind::DiscussionComment => self.discussion_comments,
            ResourceKind::Commit => self.commits,
            ResourceKind::CommitComment => self.commit_comments,
            ResourceKind::ReleaseTag => self.releases,
            ResourceKind::FileTree => self.file_trees,
            ResourceKind::FileBlob => self.file_blobs,
            ResourceKind::Gist => self.gists,
            ResourceKind::NumberedResource => self.short_numberables,
            ResourceKind::Ref => self.short_refs,
        }
    }

    /// Returns the kinds currently enabled, in declaration order.
    pub fn enabled_kinds(&self) -> impl Iterator<Item = ResourceKind> + '_ {
        ResourceKind::ALL
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
    }

    fn switch_mut(&mut self, kind: ResourceKind) -> &mut bool {
        match kind {
            ResourceKind::User => &mut self.users,
            ResourceKind::Repo => &mut self.repositories,
            ResourceKind::Issue => &mut self.issues,
            ResourceKind::IssueComment => &mut self.issue_comments,
            ResourceKind::IssueEvent => &mut self.issue_events,
            ResourceKind::PullRequest => &mut self.pull_requests,
            ResourceKind::PullRequestComment => &mut self.pull_request_comments,
            ResourceKind::PullRequestReview => &mut self.pull_request_reviews,
            ResourceKind::PullRequestReviewComment => &mut self.pull_request_review_comments,
            ResourceKind::PullRequestEvent => &mut self.pull_request_events,
            ResourceKind::Discussion => &mut self.discussions,
            ResourceKind::DiscussionComment => &mut self.discussion_comments,
            ResourceKind::Commit => &mut self.commits,
            ResourceKind::CommitComment => &mut self.commit_comments,
            ResourceKind::ReleaseTag => &mut self.releases,
            ResourceKind::FileTree => &mut self.file_trees,
            ResourceKind::FileBlob => &mut self.file_blobs,
            ResourceKind::Gist => &mut self.gists,
            ResourceKind::NumberedResource => &mut self.short_numberables,
            ResourceKind::Ref => &mut self.short_refs,
        }
    }

    /// Returns true if `host` (with `:port` when non-default) is a GitHub host.
    pub(crate) fn is_github_host(&self, host: &str) -> bool {
        self.domains.iter().any(|d| d.eq_ignore_ascii_case(host))
    }

    /// Returns true if `host` is a gist host.
    pub(crate) fn is_gist_host(&self, host: &str) -> bool {
        self.gist_domains.iter().any(|d| d.eq_ignore_ascii_case(host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_everything() {
        let settings = MatcherSettings::default();
        for kind in ResourceKind::ALL {
            assert!(settings.is_enabled(kind), "{kind} should be enabled");
        }
        assert!(settings.shorthand);
        assert!(settings.short_repo);
        assert!(settings.require_strict_type);
        assert_eq!(settings.domains, vec!["github.com".to_string()]);
        assert_eq!(settings.gist_domains, vec!["gist.github.com".to_string()]);
    }

    #[test]
    fn none_disables_every_switch_but_strict_typing() {
        let settings = MatcherSettings::none();
        assert_eq!(settings.enabled_kinds().count(), 0);
        assert!(!settings.shorthand);
        assert!(!settings.short_repo);
        assert!(settings.require_strict_type);
        assert_eq!(settings.domains, vec!["github.com".to_string()]);
    }

    #[test]
    fn with_kind_is_independent() {
        let settings = MatcherSettings::new().with_kind(ResourceKind::Issue, false);
        assert!(!settings.is_enabled(ResourceKind::Issue));
        assert!(settings.is_enabled(ResourceKind::IssueComment));
        assert!(settings.is_enabled(ResourceKind::PullRequest));
    }

    #[test]
    fn none_then_enable_one() {
        let settings = MatcherSettings::none().with_kind(ResourceKind::Commit, true);
        let enabled: Vec<_> = settings.enabled_kinds().collect();
        assert_eq!(enabled, vec![ResourceKind::Commit]);
    }

    #[test]
    fn every_kind_has_its_own_switch() {
        for kind in ResourceKind::ALL {
            let settings = MatcherSettings::none().with_kind(kind, true);
            assert_eq!(settings.enabled_kinds().collect::<Vec<_>>(), vec![kind]);
        }
    }

    #[test]
    fn builder_setters() {
        let settings = MatcherSettings::new()
            .with_domains(["github.example.com", "localhost:8080"])
            .with_gist_domains(Vec::<String>::new())
            .with_require_strict_type(false)
            .with_shorthand(false)
            .with_short_repo(false);

        assert!(settings.is_github_host("github.example.com"));
        assert!(settings.is_github_host("localhost:8080"));
        assert!(!settings.is_github_host("github.com"));
        assert!(!settings.is_gist_host("gist.github.com"));
        assert!(!settings.require_strict_type);
        assert!(!settings.shorthand);
        assert!(!settings.short_repo);
    }

    #[test]
    fn host_comparison_ignores_case() {
        let settings = MatcherSettings::new().with_domains(["GitHub.com"]);
        assert!(settings.is_github_host("github.com"));
    }

    #[test]
    fn deserialize_partial() {
        let settings: MatcherSettings =
            serde_json::from_str(r#"{"issues": false, "domains": ["git.corp"]}"#).unwrap();
        assert!(!settings.issues);
        assert!(settings.issue_comments);
        assert_eq!(settings.domains, vec!["git.corp".to_string()]);
        assert_eq!(settings.gist_domains, vec!["gist.github.com".to_string()]);
    }

    #[test]
    fn deserialize_rejects_unknown_fields() {
        let result = serde_json::from_str::<MatcherSettings>(r#"{"wikis": true}"#);
        assert!(result.is_err());
    }
}
