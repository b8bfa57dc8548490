//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for
//! classification results.

use colored::Colorize;
use ghretos_core::Resource;
use serde::Serialize;
use std::io::Write;

/// One classified input.
#[derive(Debug, Clone, Serialize)]
pub struct MatchEntry {
    /// The input as given.
    pub input: String,
    /// The resource it was recognized as, or `null`.
    pub resource: Option<Resource>,
}

/// JSON output document.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Every input, in order.
    pub results: &'a [MatchEntry],
    /// Number of recognized inputs.
    pub matched: usize,
    /// Number of unrecognized inputs.
    pub unmatched: usize,
}

impl JsonOutput<'_> {
    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes a single classified input.
    pub fn write_entry(&mut self, entry: &MatchEntry) -> std::io::Result<()> {
        match &entry.resource {
            Some(resource) => {
                let label = format!("[{}]", resource.kind());
                if self.use_colors {
                    writeln!(self.writer, "{} {}", label.green().bold(), entry.input)?;
                    writeln!(self.writer, "    {} {}", "->".dimmed(), resource.html_url())?;
                } else {
                    writeln!(self.writer, "{} {}", label, entry.input)?;
                    writeln!(self.writer, "    -> {}", resource.html_url())?;
                }
                if let Some(repo) = resource.repo() {
                    writeln!(self.writer, "    repository: {}", repo.full_name())?;
                }
            }
            None => {
                if self.use_colors {
                    writeln!(self.writer, "{} {}", "[no match]".yellow().bold(), entry.input)?;
                } else {
                    writeln!(self.writer, "[no match] {}", entry.input)?;
                }
            }
        }
        Ok(())
    }

    /// Writes a summary line.
    pub fn write_summary(&mut self, matched: usize, unmatched: usize) -> std::io::Result<()> {
        writeln!(self.writer)?;

        if unmatched == 0 {
            let message = format!("✓ {} input(s) recognized", matched);
            if self.use_colors {
                writeln!(self.writer, "{}", message.green().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        } else {
            let message = format!(
                "✗ {} of {} input(s) not recognized",
                unmatched,
                matched + unmatched
            );
            if self.use_colors {
                writeln!(self.writer, "{}", message.red().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        }

        Ok(())
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}

/// Collects classification results in input order.
#[derive(Debug, Default)]
pub struct MatchResults {
    entries: Vec<MatchEntry>,
}

impl MatchResults {
    /// Creates a new empty results collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the result for one input.
    pub fn add(&mut self, input: impl Into<String>, resource: Option<Resource>) {
        self.entries.push(MatchEntry {
            input: input.into(),
            resource,
        });
    }

    /// Returns the number of recognized inputs.
    pub fn matched(&self) -> usize {
        self.entries.iter().filter(|e| e.resource.is_some()).count()
    }

    /// Returns the number of unrecognized inputs.
    pub fn unmatched(&self) -> usize {
        self.entries.len() - self.matched()
    }

    /// Iterates over results in order.
    pub fn iter(&self) -> impl Iterator<Item = &MatchEntry> {
        self.entries.iter()
    }

    /// Writes results in human-readable format.
    pub fn write_human<W: Write>(&self, writer: &mut W, use_colors: bool) -> std::io::Result<()> {
        let mut output = HumanOutput::new(writer, use_colors);

        for entry in self.iter() {
            output.write_entry(entry)?;
        }

        output.write_summary(self.matched(), self.unmatched())?;

        Ok(())
    }

    /// Writes results in JSON format.
    pub fn write_json<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        JsonOutput {
            results: &self.entries,
            matched: self.matched(),
            unmatched: self.unmatched(),
        }
        .write(writer)
    }
}
