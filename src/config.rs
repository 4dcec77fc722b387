//! Helper configuration
//!
//! Mirrors the settings a host application hands the helper: the default
//! language, the resource path for language definitions, and optionally a
//! set of templates to declare up front.
//!
//! ```toml
//! language = "php"
//! path = "languages"
//!
//! [templates.Imp]
//! language = "php"
//! line_numbers = "normal"
//! overall_style = "background: #eefcfc;"
//! line_style = "background: #eefcfc;"
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::highlighter::Highlighter;
use crate::renderer::{HeaderType, LineNumbers};

/// Language used when a call does not name one
pub const DEFAULT_LANGUAGE: &str = "php";

/// Directory searched for `<language>.toml` definitions
pub const DEFAULT_RESOURCE_PATH: &str = "languages";

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings applied to a template when it is declared from configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Language the template is created with; the helper default otherwise
    pub language: Option<String>,
    pub line_numbers: Option<LineNumbers>,
    pub start: Option<usize>,
    pub header_type: Option<HeaderType>,
    pub overall_style: Option<String>,
    pub line_style: Option<String>,
    pub fancy_line_style: Option<String>,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub classes: Option<bool>,
    pub tab_width: Option<usize>,
}

impl TemplateConfig {
    /// Apply the configured options to `highlighter`, leaving unset ones alone
    pub fn apply(&self, highlighter: &mut Highlighter) {
        if let Some(line_numbers) = self.line_numbers {
            highlighter.enable_line_numbers(line_numbers);
        }
        if let Some(start) = self.start {
            highlighter.start_line_numbers_at(start);
        }
        if let Some(header_type) = self.header_type {
            highlighter.set_header_type(header_type);
        }
        if let Some(style) = &self.overall_style {
            highlighter.set_overall_style(style);
        }
        if self.line_style.is_some() || self.fancy_line_style.is_some() {
            let current = highlighter.options();
            let normal = self.line_style.clone().unwrap_or_else(|| current.line_style.clone());
            let fancy = self
                .fancy_line_style
                .clone()
                .unwrap_or_else(|| current.fancy_line_style.clone());
            highlighter.set_line_style(&normal, &fancy);
        }
        if let Some(header) = &self.header {
            highlighter.set_header_content(header);
        }
        if let Some(footer) = &self.footer {
            highlighter.set_footer_content(footer);
        }
        if let Some(classes) = self.classes {
            highlighter.enable_classes(classes);
        }
        if let Some(width) = self.tab_width {
            highlighter.set_tab_width(width);
        }
    }
}

/// Configuration for a helper instance
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelperConfig {
    /// Default language
    pub language: String,
    /// Resource path for language definitions
    pub path: PathBuf,
    /// Templates declared up front, in declaration order
    pub templates: IndexMap<String, TemplateConfig>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            path: PathBuf::from(DEFAULT_RESOURCE_PATH),
            templates: IndexMap::new(),
        }
    }
}

impl HelperConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the default language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the resource path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Declare a template
    pub fn with_template(mut self, name: impl Into<String>, template: TemplateConfig) -> Self {
        self.templates.insert(name.into(), template);
        self
    }
}
