//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into the library's `MatcherSettings`
//! and reads inputs.

use crate::cli::Args;
use ghretos_core::{
    MatcherSettings, ParseKindError, Resource, ResourceKind, parse_shorthand,
    parse_url_with_settings,
};
use std::io::BufRead;
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// A resource kind given on the command line does not exist.
    #[error("{0}")]
    UnknownKind(#[from] ParseKindError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every input was recognized.
    Success = 0,
    /// Application startup failed (wrong configuration or unreadable input).
    StartupFailure = 1,
    /// At least one input was not recognized.
    NoMatch = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Validated and processed configuration for classifying inputs.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Settings for the URL matcher and shorthand parser.
    pub settings: MatcherSettings,
    /// Owner used for shorthand references without one.
    pub default_user: Option<String>,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mut settings = MatcherSettings::new()
            .with_require_strict_type(!args.loose)
            .with_shorthand(args.wants_shorthand());

        if let Some(ref domains) = args.domains {
            settings = settings.with_domains(clean_hosts("domains", domains)?);
        }

        if let Some(ref domains) = args.gist_domains {
            settings = settings.with_gist_domains(clean_hosts("gist domains", domains)?);
        }

        if let Some(ref only) = args.only {
            let kinds = parse_kinds(only)?;
            for kind in ResourceKind::ALL {
                settings.set_enabled(kind, kinds.contains(&kind));
            }
        }

        if let Some(ref disable) = args.disable {
            for kind in parse_kinds(disable)? {
                settings.set_enabled(kind, false);
            }
        }

        let default_user = match args.default_user.as_deref().map(str::trim) {
            Some("") => {
                return Err(ConfigError::Invalid(
                    "default user must not be empty".to_string(),
                ));
            }
            other => other.map(str::to_string),
        };

        Ok(Self {
            settings,
            default_user,
            json_output: args.json,
        })
    }

    /// Classifies a single input, trying it as a URL first.
    pub fn classify(&self, input: &str) -> Option<Resource> {
        parse_url_with_settings(input, &self.settings).or_else(|| {
            parse_shorthand(input, self.default_user.as_deref(), &self.settings)
        })
    }

    /// Determines the exit code based on how many inputs went unmatched.
    pub fn exit_code_for_results(&self, unmatched: usize) -> ExitCode {
        if unmatched > 0 {
            ExitCode::NoMatch
        } else {
            ExitCode::Success
        }
    }
}

/// Trims host names and rejects empty entries.
fn clean_hosts(what: &str, hosts: &[String]) -> Result<Vec<String>, ConfigError> {
    let cleaned: Vec<String> = hosts.iter().map(|h| h.trim().to_string()).collect();
    if cleaned.is_empty() || cleaned.iter().any(String::is_empty) {
        return Err(ConfigError::Invalid(format!(
            "{} must be a comma-separated list of host names",
            what
        )));
    }
    Ok(cleaned)
}

/// Parses a list of resource kind names.
pub fn parse_kinds(names: &[String]) -> Result<Vec<ResourceKind>, ConfigError> {
    names
        .iter()
        .map(|name| name.parse::<ResourceKind>().map_err(ConfigError::from))
        .collect()
}

/// Reads newline-separated inputs, skipping blank lines.
pub fn read_inputs<R: BufRead>(reader: R) -> Result<Vec<String>, ConfigError> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use ghretos_core::Repo;

    fn config(argv: &[&str]) -> Result<ValidatedConfig, ConfigError> {
        let mut full = vec!["ghretos"];
        full.extend_from_slice(argv);
        ValidatedConfig::from_args(&Args::parse_from(full))
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::StartupFailure), 1);
        assert_eq!(i32::from(ExitCode::NoMatch), 3);
    }

    #[test]
    fn test_default_config() {
        let config = config(&[]).unwrap();
        assert!(config.settings.require_strict_type);
        assert!(!config.settings.shorthand);
        assert!(config.default_user.is_none());
        assert!(!config.json_output);
        assert_eq!(config.settings.domains, vec!["github.com".to_string()]);
    }

    #[test]
    fn test_loose_config() {
        let config = config(&["--loose"]).unwrap();
        assert!(!config.settings.require_strict_type);
    }

    #[test]
    fn test_disable_kinds() {
        let config = config(&["--disable", "issue,pull-request"]).unwrap();
        assert!(!config.settings.is_enabled(ResourceKind::Issue));
        assert!(!config.settings.is_enabled(ResourceKind::PullRequest));
        assert!(config.settings.is_enabled(ResourceKind::IssueComment));
    }

    #[test]
    fn test_only_kinds() {
        let config = config(&["--only", "commit"]).unwrap();
        let enabled: Vec<_> = config.settings.enabled_kinds().collect();
        assert_eq!(enabled, vec![ResourceKind::Commit]);
    }

    #[test]
    fn test_unknown_kind() {
        let result = config(&["--disable", "wiki"]);
        assert!(matches!(result, Err(ConfigError::UnknownKind(_))));
        assert!(result.unwrap_err().to_string().contains("wiki"));
    }

    #[test]
    fn test_empty_domain_rejected() {
        let result = config(&["--domains", "github.com, "]);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_custom_domains() {
        let config = config(&["--domains", " git.example.com "]).unwrap();
        assert_eq!(config.settings.domains, vec!["git.example.com".to_string()]);
    }

    #[test]
    fn test_empty_default_user_rejected() {
        let result = config(&["--default-user", "  "]);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_classify_url_then_shorthand() {
        let config = config(&["--default-user", "owner"]).unwrap();
        assert_eq!(
            config.classify("https://github.com/owner/repo/pull/3"),
            Some(Resource::PullRequest {
                repo: Repo::new("owner", "repo"),
                number: 3
            })
        );
        assert_eq!(
            config.classify("repo#3"),
            Some(Resource::NumberedResource {
                repo: Repo::new("owner", "repo"),
                number: 3
            })
        );
        assert_eq!(config.classify("not a thing"), None);
    }

    #[test]
    fn test_classify_without_shorthand() {
        let config = config(&[]).unwrap();
        assert_eq!(config.classify("owner/repo#3"), None);
    }

    #[test]
    fn test_exit_code_for_results() {
        let config = config(&[]).unwrap();
        assert_eq!(config.exit_code_for_results(0), ExitCode::Success);
        assert_eq!(config.exit_code_for_results(2), ExitCode::NoMatch);
    }

    #[test]
    fn test_read_inputs_skips_blank_lines() {
        let input = "https://github.com/a/b\n\n   \n  owner/repo#1  \n";
        let inputs = read_inputs(input.as_bytes()).unwrap();
        assert_eq!(inputs, vec!["https://github.com/a/b", "owner/repo#1"]);
    }
}
