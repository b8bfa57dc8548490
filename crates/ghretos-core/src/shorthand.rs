//! Shorthand references: `owner/repo`, `owner/repo#123` and `owner/repo@ref`.
//!
//! Shorthands are purely syntactic. The owner may be left out (`repo#123`)
//! when a default user is supplied.

use log::trace;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{all_consuming, eof, rest, value},
    sequence::preceded,
};

use crate::matcher::lexer;
use crate::resource::{Repo, Resource};
use crate::settings::MatcherSettings;

/// What follows the repository name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suffix<'a> {
    None,
    Number(&'a str),
    Ref(&'a str),
}

fn is_shorthand_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_')
}

fn suffix(input: &str) -> IResult<&str, Suffix<'_>> {
    alt((
        preceded(char('#'), rest).map(Suffix::Number),
        preceded(char('@'), rest).map(Suffix::Ref),
        value(Suffix::None, eof),
    ))
    .parse(input)
}

/// Parses `name[#number|@ref]`.
fn repo_and_suffix(input: &str) -> IResult<&str, (&str, Suffix<'_>)> {
    all_consuming((take_while1(is_shorthand_char), suffix)).parse(input)
}

/// Parses a shorthand reference.
///
/// Without a `/`, `default_user` supplies the owner; if there is none the
/// text does not match. Returns `None` when shorthand parsing, or the
/// specific form, is disabled in `settings`.
pub fn parse_shorthand(
    text: &str,
    default_user: Option<&str>,
    settings: &MatcherSettings,
) -> Option<Resource> {
    if !settings.shorthand {
        return None;
    }
    let text = text.trim();
    let (owner, remainder) = match text.split_once('/') {
        Some((owner, remainder)) => (owner, remainder),
        None => (default_user?, text),
    };
    if owner.is_empty() || !owner.chars().all(is_shorthand_char) {
        trace!("invalid shorthand owner in {:?}", text);
        return None;
    }

    let (_, (name, tail)) = repo_and_suffix(remainder).ok()?;
    let repo = Repo::new(owner, name);

    match tail {
        Suffix::None => settings.short_repo.then_some(Resource::Repo { repo }),
        Suffix::Number(number) => {
            let number = lexer::parse_number_segment(number)?;
            settings
                .short_numberables
                .then_some(Resource::NumberedResource { repo, number })
        }
        Suffix::Ref(git_ref) => {
            if !lexer::validate_ref(git_ref) {
                return None;
            }
            settings.short_refs.then(|| Resource::Ref {
                repo,
                git_ref: git_ref.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<Resource> {
        parse_shorthand(text, None, &MatcherSettings::default())
    }

    fn repo() -> Repo {
        Repo::new("owner", "repo")
    }

    #[test]
    fn suffix_forms() {
        assert_eq!(suffix("#12"), Ok(("", Suffix::Number("12"))));
        assert_eq!(suffix("@main"), Ok(("", Suffix::Ref("main"))));
        assert_eq!(suffix(""), Ok(("", Suffix::None)));
        assert!(suffix("!x").is_err());
    }

    #[test]
    fn repo_shorthand() {
        assert_eq!(parse("owner/repo"), Some(Resource::Repo { repo: repo() }));
        assert_eq!(
            parse("my.org/some_repo-2"),
            Some(Resource::Repo {
                repo: Repo::new("my.org", "some_repo-2")
            })
        );
    }

    #[test]
    fn numbered_shorthand() {
        assert_eq!(
            parse("owner/repo#123"),
            Some(Resource::NumberedResource {
                repo: repo(),
                number: 123
            })
        );
        assert!(parse("owner/repo#0").is_none());
        assert!(parse("owner/repo#").is_none());
        assert!(parse("owner/repo#12a").is_none());
        assert!(parse("owner/repo#-1").is_none());
    }

    #[test]
    fn ref_shorthand() {
        assert_eq!(
            parse("owner/repo@feature/x"),
            Some(Resource::Ref {
                repo: repo(),
                git_ref: "feature/x".to_string()
            })
        );
        assert!(parse("owner/repo@").is_none());
        assert!(parse("owner/repo@bad..ref").is_none());
    }

    #[test]
    fn default_user_fills_owner() {
        let settings = MatcherSettings::default();
        assert_eq!(
            parse_shorthand("repo#5", Some("owner"), &settings),
            Some(Resource::NumberedResource {
                repo: repo(),
                number: 5
            })
        );
        assert_eq!(
            parse_shorthand("repo", Some("owner"), &settings),
            Some(Resource::Repo { repo: repo() })
        );
        assert_eq!(
            parse_shorthand("other/repo", Some("owner"), &settings),
            Some(Resource::Repo {
                repo: Repo::new("other", "repo")
            })
        );
    }

    #[test]
    fn no_owner_without_default() {
        assert!(parse("ownerrepo#123").is_none());
        assert!(parse("repo@main").is_none());
    }

    #[test]
    fn invalid_characters() {
        assert!(parse("/repo").is_none());
        assert!(parse("owner/").is_none());
        assert!(parse("ow ner/repo").is_none());
        assert!(parse("owner/re/po").is_none());
        assert!(parse("owner/repo!").is_none());
        assert!(parse("https://github.com/owner/repo").is_none());
    }

    #[test]
    fn settings_gate_each_form() {
        let off = MatcherSettings::default().with_shorthand(false);
        assert!(parse_shorthand("owner/repo", None, &off).is_none());

        let no_repo = MatcherSettings::default().with_short_repo(false);
        assert!(parse_shorthand("owner/repo", None, &no_repo).is_none());
        assert!(parse_shorthand("owner/repo#1", None, &no_repo).is_some());

        let no_numbers = MatcherSettings::default()
            .with_kind(crate::ResourceKind::NumberedResource, false);
        assert!(parse_shorthand("owner/repo#1", None, &no_numbers).is_none());

        let no_refs = MatcherSettings::default().with_kind(crate::ResourceKind::Ref, false);
        assert!(parse_shorthand("owner/repo@main", None, &no_refs).is_none());
    }

    #[test]
    fn none_settings_disable_shorthand() {
        assert!(parse_shorthand("owner/repo#1", None, &MatcherSettings::none()).is_none());
    }
}
