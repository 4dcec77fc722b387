//! Error types for language loading and highlighting

use std::io;
use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Errors raised while resolving a language definition
#[derive(Error, Debug)]
pub enum LanguageError {
    #[error("no language definition found for `{0}`")]
    NotFound(String),

    #[error("failed to read language file {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid language definition in {origin}: {error}")]
    Parse {
        origin: String,
        text: String,
        error: toml::de::Error,
    },

    #[error("language {language} uses unsupported delimiter `{delimiter}`")]
    UnsupportedDelimiter { language: String, delimiter: String },
}

impl LanguageError {
    /// Format the error, with source context for TOML errors, using ariadne
    pub fn format(&self) -> String {
        let LanguageError::Parse {
            origin,
            text,
            error,
        } = self
        else {
            return self.to_string();
        };
        let Some(span) = error.span() else {
            return self.to_string();
        };

        let filename = origin.as_str();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid language definition")
            .with_label(
                Label::new((filename, span))
                    .with_message(error.message())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(text.as_str())), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Errors recorded on a highlighter; rendering still succeeds as plain text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    #[error("no such language: {0}")]
    NoSuchLanguage(String),

    #[error("language {language} could not be loaded: {reason}")]
    InvalidLanguage { language: String, reason: String },
}

impl HighlightError {
    pub(crate) fn from_language_error(language: &str, err: &LanguageError) -> Self {
        match err {
            LanguageError::NotFound(name) => HighlightError::NoSuchLanguage(name.clone()),
            other => HighlightError::InvalidLanguage {
                language: language.to_string(),
                reason: other.to_string(),
            },
        }
    }
}
