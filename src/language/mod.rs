//! Language definitions for the bundled highlighter
//!
//! A language is described by a small TOML file naming its comment and quote
//! delimiters and its keyword groups. Definitions are resolved from the
//! highlighter's resource path first (`<path>/<name>.toml`), falling back to
//! the definitions compiled into the crate.
//!
//! ```toml
//! name = "PHP"
//! case_sensitive = false
//! variables = true
//! quotes = ["\"", "'"]
//!
//! [comments]
//! single = ["//", "#"]
//! multi = [["/*", "*/"]]
//!
//! [keywords]
//! groups = [["if", "else"], ["echo", "print"]]
//! ```

mod builtin;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::LanguageError;
use crate::scanner::is_single_token;

pub use builtin::{builtin, builtin_names};

/// Comment delimiters of a language
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommentDelimiters {
    /// Markers that comment out the rest of the line
    #[serde(default)]
    pub single: Vec<String>,
    /// Opening and closing marker pairs
    #[serde(default)]
    pub multi: Vec<(String, String)>,
}

/// Keyword groups, numbered from 1 in the order given
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Keywords {
    #[serde(default)]
    pub groups: Vec<Vec<String>>,
}

fn enabled() -> bool {
    true
}

/// A loaded language definition
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageDefinition {
    /// Display name, used for `{LANGUAGE}` in headers and footers
    pub name: String,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub comments: CommentDelimiters,
    #[serde(default)]
    pub quotes: Vec<String>,
    /// Whether backslash escapes are recognised inside strings
    #[serde(default = "enabled")]
    pub escape: bool,
    /// Whether `$name` tokens are variables
    #[serde(default)]
    pub variables: bool,
    #[serde(default = "enabled")]
    pub numbers: bool,
    /// Whether symbols and brackets are highlighted
    #[serde(default = "enabled")]
    pub symbols: bool,
    #[serde(default)]
    pub keywords: Keywords,
    #[serde(skip)]
    keyword_index: HashMap<String, usize>,
}

impl LanguageDefinition {
    /// Parse a definition from TOML. `origin` names the source in errors.
    pub fn from_str(content: &str, origin: &str) -> Result<Self, LanguageError> {
        let mut definition: LanguageDefinition =
            toml::from_str(content).map_err(|error| LanguageError::Parse {
                origin: origin.to_string(),
                text: content.to_string(),
                error,
            })?;
        definition.validate()?;
        definition.index_keywords();
        Ok(definition)
    }

    fn validate(&self) -> Result<(), LanguageError> {
        let delimiters = self
            .comments
            .single
            .iter()
            .chain(self.comments.multi.iter().flat_map(|(open, close)| [open, close]))
            .chain(self.quotes.iter());
        for delimiter in delimiters {
            if !is_single_token(delimiter) {
                return Err(LanguageError::UnsupportedDelimiter {
                    language: self.name.clone(),
                    delimiter: delimiter.clone(),
                });
            }
        }
        Ok(())
    }

    fn index_keywords(&mut self) {
        let case_sensitive = self.case_sensitive;
        self.keyword_index = self
            .keywords
            .groups
            .iter()
            .enumerate()
            .flat_map(|(group, words)| words.iter().map(move |word| (word, group + 1)))
            .map(|(word, group)| {
                let key = if case_sensitive {
                    word.clone()
                } else {
                    word.to_lowercase()
                };
                (key, group)
            })
            .rev()
            .collect();
    }

    /// Keyword group (1-based) of `word`, if it is a keyword.
    ///
    /// A word listed in several groups belongs to the first of them.
    pub fn keyword_group(&self, word: &str) -> Option<usize> {
        if self.case_sensitive {
            self.keyword_index.get(word).copied()
        } else {
            self.keyword_index.get(&word.to_lowercase()).copied()
        }
    }

    pub fn is_line_comment(&self, text: &str) -> bool {
        self.comments.single.iter().any(|marker| marker == text)
    }

    /// Closing marker for a block comment opened by `text`
    pub fn block_comment_close(&self, text: &str) -> Option<&str> {
        self.comments
            .multi
            .iter()
            .find(|(open, _)| open == text)
            .map(|(_, close)| close.as_str())
    }

    pub fn is_quote(&self, text: &str) -> bool {
        self.quotes.iter().any(|quote| quote == text)
    }
}

/// Normalise a language name: lowercase, keeping only `[a-z0-9_-]`
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_')
        .collect()
}

/// Resolve the definition for `name`, preferring `<path>/<name>.toml` over
/// the built-in definitions.
pub fn load(path: &Path, name: &str) -> Result<LanguageDefinition, LanguageError> {
    let id = normalize_name(name);
    if id.is_empty() {
        return Err(LanguageError::NotFound(name.to_string()));
    }

    let file = path.join(format!("{}.toml", id));
    if file.is_file() {
        debug!(path = %file.display(), "loading language definition");
        let content = fs::read_to_string(&file).map_err(|source| LanguageError::Io {
            path: file.clone(),
            source,
        })?;
        return LanguageDefinition::from_str(&content, &file.display().to_string());
    }

    match builtin::source(&id) {
        Some(content) => LanguageDefinition::from_str(content, &format!("builtin:{}", id)),
        None => Err(LanguageError::NotFound(id)),
    }
}

/// Guess a language from a file extension
pub fn from_extension(extension: &str) -> Option<&'static str> {
    let language = match extension.to_lowercase().as_str() {
        "php" | "php3" | "php4" | "php5" | "phtml" => "php",
        "js" | "mjs" | "cjs" => "javascript",
        "html" | "htm" | "xhtml" => "html5",
        "rs" => "rust",
        "go" => "go",
        "py" | "pyw" => "python",
        "lisp" | "lsp" | "cl" | "el" => "lisp",
        "txt" | "text" => "text",
        _ => return None,
    };
    Some(language)
}
