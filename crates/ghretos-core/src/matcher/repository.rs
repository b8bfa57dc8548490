//! Rules for users, repositories and the git objects they hold.

use super::{Target, lexer, repo_from};
use crate::resource::Resource;

/// Joins path segments, rejecting empty ones (`a//b`, trailing slash).
fn join_path(segments: &[&str]) -> Option<String> {
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    Some(segments.join("/"))
}

pub(super) fn user(target: &Target<'_>) -> Option<Resource> {
    match (target.segments.as_slice(), target.fragment) {
        ([login], None) if lexer::validate_user(login) => Some(Resource::User {
            login: login.to_string(),
        }),
        _ => None,
    }
}

pub(super) fn repository(target: &Target<'_>) -> Option<Resource> {
    match (target.segments.as_slice(), target.fragment) {
        ([owner, name], None) => Some(Resource::Repo {
            repo: repo_from(owner, name)?,
        }),
        _ => None,
    }
}

pub(super) fn commit(target: &Target<'_>) -> Option<Resource> {
    match (target.segments.as_slice(), target.fragment) {
        ([owner, name, "commit", sha], None) if !sha.is_empty() => Some(Resource::Commit {
            repo: repo_from(owner, name)?,
            sha: sha.to_string(),
        }),
        _ => None,
    }
}

pub(super) fn commit_comment(target: &Target<'_>) -> Option<Resource> {
    match (target.segments.as_slice(), target.fragment) {
        ([owner, name, "commit", sha], Some(fragment)) if !sha.is_empty() => {
            Some(Resource::CommitComment {
                repo: repo_from(owner, name)?,
                sha: sha.to_string(),
                comment_id: lexer::prefixed_id(fragment, "commitcomment-")?,
            })
        }
        _ => None,
    }
}

/// Tag names may contain slashes, so everything after `tag/` is the tag.
pub(super) fn release_tag(target: &Target<'_>) -> Option<Resource> {
    match (target.segments.as_slice(), target.fragment) {
        ([owner, name, "releases", "tag", tag @ ..], None) if !tag.is_empty() => {
            Some(Resource::ReleaseTag {
                repo: repo_from(owner, name)?,
                tag: join_path(tag)?,
            })
        }
        _ => None,
    }
}

/// The first segment after `tree` is the ref; the rest, if any, is the path.
pub(super) fn file_tree(target: &Target<'_>) -> Option<Resource> {
    match (target.segments.as_slice(), target.fragment) {
        ([owner, name, "tree", git_ref, path @ ..], None) if lexer::validate_ref(git_ref) => {
            Some(Resource::FileTree {
                repo: repo_from(owner, name)?,
                git_ref: git_ref.to_string(),
                path: join_path(path)?,
            })
        }
        _ => None,
    }
}

/// A blob needs a ref and at least one path segment. Fragments that are not
/// line highlights (rendered heading anchors) leave `lines` empty.
pub(super) fn file_blob(target: &Target<'_>) -> Option<Resource> {
    match target.segments.as_slice() {
        [owner, name, "blob", git_ref, path @ ..]
            if lexer::validate_ref(git_ref) && !path.is_empty() =>
        {
            Some(Resource::FileBlob {
                repo: repo_from(owner, name)?,
                git_ref: git_ref.to_string(),
                path: join_path(path)?,
                lines: target.fragment.and_then(lexer::parse_line_fragment),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{LineRange, Repo};

    fn target<'a>(segments: &[&'a str], fragment: Option<&'a str>) -> Target<'a> {
        Target {
            segments: segments.to_vec(),
            fragment,
            strict: true,
        }
    }

    #[test]
    fn join_path_rejects_empty_segments() {
        assert_eq!(join_path(&[]), Some(String::new()));
        assert_eq!(join_path(&["src", "lib.rs"]), Some("src/lib.rs".to_string()));
        assert_eq!(join_path(&["src", ""]), None);
        assert_eq!(join_path(&["", "lib.rs"]), None);
    }

    #[test]
    fn user_requires_valid_login() {
        assert!(user(&target(&["octocat"], None)).is_some());
        assert!(user(&target(&["octo_cat"], None)).is_none());
        assert!(user(&target(&["octocat"], Some("top"))).is_none());
    }

    #[test]
    fn repository_with_fragment_is_rejected() {
        assert!(repository(&target(&["o", "r"], None)).is_some());
        assert!(repository(&target(&["o", "r"], Some("readme"))).is_none());
    }

    #[test]
    fn commit_comment_requires_id() {
        let t = target(&["o", "r", "commit", "abc"], Some("commitcomment-4"));
        assert!(matches!(
            commit_comment(&t),
            Some(Resource::CommitComment { comment_id: 4, .. })
        ));
        assert!(commit(&t).is_none());

        let t = target(&["o", "r", "commit", "abc"], Some("diff-123"));
        assert!(commit_comment(&t).is_none());
    }

    #[test]
    fn release_tag_with_slash() {
        let t = target(&["o", "r", "releases", "tag", "release", "1.0"], None);
        assert_eq!(
            release_tag(&t),
            Some(Resource::ReleaseTag {
                repo: Repo::new("o", "r"),
                tag: "release/1.0".to_string(),
            })
        );
        assert!(release_tag(&target(&["o", "r", "releases", "tag"], None)).is_none());
    }

    #[test]
    fn tree_root_has_empty_path() {
        let t = target(&["o", "r", "tree", "main"], None);
        assert_eq!(
            file_tree(&t),
            Some(Resource::FileTree {
                repo: Repo::new("o", "r"),
                git_ref: "main".to_string(),
                path: String::new(),
            })
        );
    }

    #[test]
    fn tree_rejects_invalid_ref() {
        assert!(file_tree(&target(&["o", "r", "tree", "a..b"], None)).is_none());
        assert!(file_tree(&target(&["o", "r", "tree", "main", ""], None)).is_none());
    }

    #[test]
    fn blob_with_lines() {
        let t = target(&["o", "r", "blob", "main", "src", "lib.rs"], Some("L1-L3"));
        assert!(matches!(
            file_blob(&t),
            Some(Resource::FileBlob {
                lines: Some(LineRange {
                    start: 1,
                    end: Some(3)
                }),
                ..
            })
        ));
    }

    #[test]
    fn blob_with_column_selection() {
        let t = target(&["o", "r", "blob", "main", "src", "lib.rs"], Some("L10C5-L12C8"));
        assert!(matches!(
            file_blob(&t),
            Some(Resource::FileBlob {
                lines: Some(LineRange {
                    start: 10,
                    end: Some(12)
                }),
                ..
            })
        ));
    }

    #[test]
    fn blob_heading_anchor_has_no_lines() {
        let t = target(&["o", "r", "blob", "main", "README.md"], Some("installation"));
        assert_eq!(
            file_blob(&t),
            Some(Resource::FileBlob {
                repo: Repo::new("o", "r"),
                git_ref: "main".to_string(),
                path: "README.md".to_string(),
                lines: None,
            })
        );
    }

    #[test]
    fn blob_requires_path() {
        assert!(file_blob(&target(&["o", "r", "blob", "main"], None)).is_none());
    }
}
