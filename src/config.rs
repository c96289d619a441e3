//! Settings file for the `render` command.
//!
//! ```yaml
//! repo_url: https://github.com/example/project.git
//! output_file: graph.puml
//! commit_date: 2024-11-15
//! output_format: plantuml   # optional, default plantuml
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::context::ServiceContext;
use crate::error::ConfigError;
use crate::render::OutputFormat;

/// Expected `commit_date` layout.
pub const COMMIT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct RawSettings {
    repo_url: String,
    output_file: PathBuf,
    commit_date: String,
    #[serde(default)]
    output_format: OutputFormat,
}

/// Validated settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Repository to clone.
    pub repo_url: String,
    /// Destination of the rendered diagram, relative to the working directory.
    pub output_file: PathBuf,
    /// Only commits since this date are drawn.
    pub commit_date: NaiveDate,
    /// Diagram format written to `output_file`.
    pub output_format: OutputFormat,
}

impl Settings {
    /// Parse settings from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML or missing keys and
    /// [`ConfigError::InvalidDate`] when `commit_date` is not `YYYY-MM-DD`.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let raw: RawSettings = serde_yaml::from_str(text)?;
        let commit_date = NaiveDate::parse_from_str(raw.commit_date.trim(), COMMIT_DATE_FORMAT)
            .map_err(|_| ConfigError::InvalidDate(raw.commit_date.clone()))?;

        Ok(Self {
            repo_url: raw.repo_url,
            output_file: raw.output_file,
            commit_date,
            output_format: raw.output_format,
        })
    }

    /// Load settings from `path` through the context's filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file is missing, or any error
    /// from [`Settings::from_yaml`].
    pub fn load(ctx: &ServiceContext, path: &Path) -> Result<Self, ConfigError> {
        if !ctx.fs.exists(path) {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = ctx.fs.read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&text)
    }

    /// `--since` argument for the log query.
    #[must_use]
    pub fn since(&self) -> String {
        self.commit_date.format(COMMIT_DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "repo_url: https://github.com/see12357/ConfigDZ-2.git\n\
                          output_file: test.puml\n\
                          commit_date: 2024-11-15\n";

    #[test]
    fn parses_minimal_settings() {
        let settings = Settings::from_yaml(SAMPLE).unwrap();
        assert_eq!(settings.repo_url, "https://github.com/see12357/ConfigDZ-2.git");
        assert_eq!(settings.output_file, PathBuf::from("test.puml"));
        assert_eq!(settings.commit_date, NaiveDate::from_ymd_opt(2024, 11, 15).unwrap());
        assert_eq!(settings.output_format, OutputFormat::PlantUml);
        assert_eq!(settings.since(), "2024-11-15");
    }

    #[test]
    fn accepts_quoted_date_and_format() {
        let yaml = "repo_url: r\noutput_file: out.json\n\
                    commit_date: \"2023-01-02\"\noutput_format: json\n";
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.output_format, OutputFormat::Json);
        assert_eq!(settings.since(), "2023-01-02");
    }

    #[test]
    fn rejects_bad_date() {
        let yaml = "repo_url: r\noutput_file: o\ncommit_date: 15.11.2024\n";
        let err = Settings::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDate(ref d) if d == "15.11.2024"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn rejects_missing_key() {
        let err = Settings::from_yaml("repo_url: r\ncommit_date: 2024-01-01\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
