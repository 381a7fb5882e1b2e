use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use sweeper_core::RuleSet;
use sweeper_engine::WebDriverSettings;
use thiserror::Error;

use crate::logging::LogDestination;

/// Removes job listings matching exclusion patterns from a live search page.
///
/// While running, type a line to add a pattern: `l<text>` location,
/// `c<text>` company, `t<text>` title. `q` quits.
#[derive(Debug, Parser)]
#[command(name = "listing-sweeper", version)]
pub struct Cli {
    /// Company to remove from results (repeatable)
    #[arg(long = "company", value_name = "PATTERN")]
    pub companies: Vec<String>,

    /// Job title to remove from results (repeatable)
    #[arg(long = "title", value_name = "PATTERN")]
    pub titles: Vec<String>,

    /// Job location to remove from results (repeatable)
    #[arg(long = "location", value_name = "PATTERN")]
    pub locations: Vec<String>,

    /// Remove listings already marked as dismissed
    #[arg(long)]
    pub remove_disabled: bool,

    /// RON file with initial patterns, applied before the flags above
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// WebDriver server hosting the browser session
    #[arg(long, default_value = "http://localhost:4444")]
    pub webdriver_url: String,

    /// Id of the open WebDriver session showing the search results
    #[arg(long)]
    pub session_id: String,

    #[arg(long, default_value_t = 200)]
    pub scan_interval_ms: u64,

    #[arg(long, default_value_t = 10)]
    pub request_timeout_secs: u64,

    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log: LogDestination,

    /// Also log lookup misses and control lines
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read rules file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse rules file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Initial patterns as stored in a rules file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuleFile {
    pub companies: Vec<String>,
    pub titles: Vec<String>,
    pub locations: Vec<String>,
    pub remove_disabled: bool,
}

impl RuleFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Cli {
    /// Seed rules: file entries first, then command-line entries.
    pub fn rule_set(&self) -> Result<RuleSet, ConfigError> {
        let mut seed = match &self.rules {
            Some(path) => RuleFile::load(path)?,
            None => RuleFile::default(),
        };
        seed.companies.extend(self.companies.iter().cloned());
        seed.titles.extend(self.titles.iter().cloned());
        seed.locations.extend(self.locations.iter().cloned());

        Ok(RuleSet::new(
            seed.companies,
            seed.titles,
            seed.locations,
            seed.remove_disabled || self.remove_disabled,
        ))
    }

    pub fn webdriver_settings(&self) -> WebDriverSettings {
        let mut settings = WebDriverSettings::new(&self.webdriver_url, &self.session_id);
        settings.request_timeout = Duration::from_secs(self.request_timeout_secs);
        settings
    }

    pub fn scan_interval(&self) -> Duration {
        Duration::from_millis(self.scan_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["listing-sweeper", "--session-id", "abc"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("valid arguments")
    }

    fn rules_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn repeated_flags_seed_rules() {
        let cli = parse(&[
            "--company", "Acme", "--company", "Globex", "--title", "Intern", "--location",
            "Remote",
        ]);
        let rules = cli.rule_set().unwrap();

        assert_eq!(rules.companies(), ["Acme", "Globex"]);
        assert_eq!(rules.titles(), ["Intern"]);
        assert_eq!(rules.locations(), ["Remote"]);
        assert!(!rules.remove_disabled());
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);

        assert_eq!(cli.scan_interval(), Duration::from_millis(200));
        assert_eq!(cli.webdriver_url, "http://localhost:4444");
        assert_eq!(cli.log, LogDestination::Terminal);
        assert_eq!(
            cli.webdriver_settings().request_timeout,
            Duration::from_secs(10)
        );
    }

    #[test]
    fn session_id_is_required() {
        assert!(Cli::try_parse_from(["listing-sweeper"]).is_err());
    }

    #[test]
    fn file_rules_come_before_flags() {
        let file = rules_file(
            r#"(
                companies: ["Initech"],
                locations: ["Remote"],
                remove_disabled: true,
            )"#,
        );
        let path = file.path().to_str().unwrap();
        let cli = parse(&["--rules", path, "--company", "Acme"]);
        let rules = cli.rule_set().unwrap();

        assert_eq!(rules.companies(), ["Initech", "Acme"]);
        assert!(rules.titles().is_empty());
        assert_eq!(rules.locations(), ["Remote"]);
        assert!(rules.remove_disabled());
    }

    #[test]
    fn malformed_rules_file_is_reported() {
        let file = rules_file("(companies: [\"unterminated)");
        let path = file.path().to_str().unwrap();
        let cli = parse(&["--rules", path]);

        assert!(matches!(cli.rule_set(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_rules_file_is_reported() {
        let cli = parse(&["--rules", "/nonexistent/sweeper-rules.ron"]);

        assert!(matches!(cli.rule_set(), Err(ConfigError::Read { .. })));
    }
}
