//! Ghretos Core
//!
//! A library for turning GitHub links into typed resources.
//!
//! # Features
//!
//! - **URL matching**: Classify issue, pull request, discussion, commit,
//!   release, file, gist and profile URLs, mirroring the `html_url` fields of
//!   GitHub's API
//! - **Shorthand**: Parse `owner/repo#123` and `owner/repo@ref` references
//! - **Settings**: Enable or disable each resource kind, accept extra hosts
//!   and choose strict or loose fragment handling
//! - **Round trips**: Every resource renders back to its canonical URL
//!
//! # Quick Start
//!
//! ```rust
//! use ghretos_core::{MatcherSettings, Resource, parse_shorthand, parse_url};
//!
//! let url = "https://github.com/octocat/hello-world/pull/42#discussion_r1337";
//! match parse_url(url) {
//!     Some(Resource::PullRequestReviewComment { repo, number, comment_id, .. }) => {
//!         println!("review comment {} on {}#{}", comment_id, repo.full_name(), number);
//!     }
//!     Some(other) => println!("some other resource: {}", other.kind()),
//!     None => eprintln!("not a GitHub link"),
//! }
//!
//! let settings = MatcherSettings::default();
//! let resource = parse_shorthand("hello-world#7", Some("octocat"), &settings).unwrap();
//! assert_eq!(resource.html_url(), "https://github.com/octocat/hello-world/issues/7");
//! ```
//!
//! # Modules
//!
//! - [`resource`]: The resource model
//! - [`settings`]: Matcher configuration
//! - [`matcher`]: URL matching rules
//! - [`shorthand`]: Shorthand references

pub mod error;
#[cfg(feature = "generate")]
pub mod generate;
pub mod matcher;
pub mod resource;
pub mod settings;
pub mod shorthand;

// Re-export commonly used types at the crate root
pub use error::ParseKindError;
pub use matcher::lexer::validate_ref;
pub use matcher::{match_url, parse_url, parse_url_with_settings};
pub use resource::{LineRange, Repo, Resource, ResourceKind, ReviewCommentLocation};
pub use settings::MatcherSettings;
pub use shorthand::parse_shorthand;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_thread_safe() {
        assert_send_sync::<Resource>();
        assert_send_sync::<MatcherSettings>();
    }

    #[test]
    fn parse_from_many_threads() {
        let handles: Vec<_> = (1..=8u64)
            .map(|n| {
                std::thread::spawn(move || {
                    parse_url(&format!("https://github.com/owner/repo/issues/{}", n))
                })
            })
            .collect();
        for (n, handle) in (1..=8u64).zip(handles) {
            assert_eq!(
                handle.join().unwrap(),
                Some(Resource::Issue {
                    repo: Repo::new("owner", "repo"),
                    number: n
                })
            );
        }
    }
}
