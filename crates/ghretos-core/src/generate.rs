//! Random GitHub URL generation for benchmarking and testing.
//!
//! URLs are produced by building [`Resource`] values and rendering their
//! `html_url`, so every generated link is one the matcher recognizes.
//! A configurable share of "noise" URLs that must not match can be mixed in.

use crate::resource::{LineRange, Repo, Resource, ReviewCommentLocation};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Configuration for generating URL batches.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of URLs to generate.
    pub num_urls: usize,
    /// Percentage (0-100) of URLs that should not match anything.
    pub noise_percent: u32,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_urls: 100,
            noise_percent: 10,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config generating `num_urls` URLs.
    pub fn new(num_urls: usize) -> Self {
        Self {
            num_urls,
            ..Default::default()
        }
    }

    /// Small batch (~10 URLs).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium batch (~1k URLs).
    pub fn medium() -> Self {
        Self::new(1_000)
    }

    /// Large batch (~100k URLs).
    pub fn large() -> Self {
        Self::new(100_000)
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the share of non-matching URLs, capped at 100.
    pub fn with_noise_percent(mut self, percent: u32) -> Self {
        self.noise_percent = percent.min(100);
        self
    }
}

mod vocabulary {
    pub const OWNERS: &[&str] = &["octocat", "rust-lang", "acme", "dev42", "my-org"];
    pub const REPOS: &[&str] = &["hello-world", "rust", "api", "docs.site", "core_lib", ".github"];
    pub const REFS: &[&str] = &["main", "master", "develop", "v1.2.0", "release-2024"];
    pub const DIRECTORIES: &[&str] = &["src", "lib", "tests", "docs", "crates/core"];
    pub const FILES: &[&str] = &["lib.rs", "main.py", "README.md", "index.ts", "Cargo.toml"];
    pub const TAGS: &[&str] = &["v1.0.0", "v2.3.1", "2024.01", "nightly"];
    pub const GIST_FILES: &[&str] = &["hello-rs", "notes-md", "script-sh"];
    pub const NOISE: &[&str] = &[
        "https://gitlab.com/{owner}/{repo}/-/issues/{n}",
        "https://github.com/{owner}/{repo}/wiki",
        "https://github.com/{owner}/{repo}/issues/{n}#unknown-{n}",
        "https://github.com/{owner}/{repo}/issues/0",
        "https://example.com/{owner}/{repo}",
        "{owner}/{repo}#{n}",
    ];
}

/// Number of distinct resource shapes the generator can produce.
const SHAPES: u32 = 20;

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn random_repo(rng: &mut StdRng) -> Repo {
    use vocabulary::*;
    Repo::new(pick(rng, OWNERS), pick(rng, REPOS))
}

fn random_sha(rng: &mut StdRng) -> String {
    const HEX: &[u8] = b"0123456789abcdef";
    let len = if rng.random_bool(0.5) { 7 } else { 40 };
    (0..len)
        .map(|_| HEX[rng.random_range(0..HEX.len())] as char)
        .collect()
}

fn random_id(rng: &mut StdRng) -> u64 {
    rng.random_range(1..=2_000_000_000)
}

fn random_number(rng: &mut StdRng) -> u64 {
    rng.random_range(1..=50_000)
}

/// Generates a single random resource.
pub fn generate_resource(rng: &mut StdRng) -> Resource {
    use vocabulary::*;

    let repo = random_repo(rng);
    let number = random_number(rng);

    match rng.random_range(0..SHAPES) {
        0 => Resource::User {
            login: pick(rng, OWNERS).to_string(),
        },
        1 => Resource::Repo { repo },
        2 => Resource::Issue { repo, number },
        3 => Resource::IssueComment {
            repo,
            number,
            comment_id: random_id(rng),
        },
        4 => Resource::IssueEvent {
            repo,
            number,
            event_id: random_id(rng),
        },
        5 => Resource::PullRequest { repo, number },
        6 => Resource::PullRequestComment {
            repo,
            number,
            comment_id: random_id(rng),
        },
        7 => Resource::PullRequestReview {
            repo,
            number,
            review_id: random_id(rng),
        },
        8 => {
            let location = match rng.random_range(0..3) {
                0 => ReviewCommentLocation::Conversation,
                1 => ReviewCommentLocation::Files,
                _ => ReviewCommentLocation::Commit {
                    sha: random_sha(rng),
                },
            };
            Resource::PullRequestReviewComment {
                repo,
                number,
                comment_id: random_id(rng),
                location,
            }
        }
        9 => Resource::PullRequestEvent {
            repo,
            number,
            event_id: random_id(rng),
        },
        10 => Resource::Discussion { repo, number },
        11 => Resource::DiscussionComment {
            repo,
            number,
            comment_id: random_id(rng),
        },
        12 => Resource::Commit {
            repo,
            sha: random_sha(rng),
        },
        13 => Resource::CommitComment {
            repo,
            sha: random_sha(rng),
            comment_id: random_id(rng),
        },
        14 => Resource::ReleaseTag {
            repo,
            tag: pick(rng, TAGS).to_string(),
        },
        15 => Resource::FileTree {
            repo,
            git_ref: pick(rng, REFS).to_string(),
            path: if rng.random_bool(0.3) {
                String::new()
            } else {
                pick(rng, DIRECTORIES).to_string()
            },
        },
        16 | 17 => {
            let start = rng.random_range(1..500);
            let lines = match rng.random_range(0..3) {
                0 => None,
                1 => Some(LineRange::line(start)),
                _ => Some(LineRange::span(start, start + rng.random_range(0..50))),
            };
            Resource::FileBlob {
                repo,
                git_ref: pick(rng, REFS).to_string(),
                path: format!("{}/{}", pick(rng, DIRECTORIES), pick(rng, FILES)),
                lines,
            }
        }
        _ => Resource::Gist {
            owner: rng
                .random_bool(0.5)
                .then(|| pick(rng, OWNERS).to_string()),
            id: random_sha(rng),
            file: rng
                .random_bool(0.5)
                .then(|| pick(rng, GIST_FILES).to_string()),
        },
    }
}

/// Generates a URL no default matcher rule accepts.
fn generate_noise(rng: &mut StdRng) -> String {
    use vocabulary::*;

    let template = pick(rng, NOISE);
    template
        .replace("{owner}", pick(rng, OWNERS))
        .replace("{repo}", pick(rng, REPOS))
        .replace("{n}", &random_number(rng).to_string())
}

/// Generates a batch of resources.
pub fn generate_resources(config: &GeneratorConfig) -> Vec<Resource> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.num_urls)
        .map(|_| generate_resource(&mut rng))
        .collect()
}

/// Generates a batch of URLs, mixing in noise per the configuration.
pub fn generate_urls(config: &GeneratorConfig) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.num_urls)
        .map(|_| {
            if rng.random_ratio(config.noise_percent, 100) {
                generate_noise(&mut rng)
            } else {
                generate_resource(&mut rng).html_url()
            }
        })
        .collect()
}
