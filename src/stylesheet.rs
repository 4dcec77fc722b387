//! Stylesheets mapping highlight classes to CSS
//!
//! Each highlight class (`kw1`, `co1`, `st0`, ...) maps to a CSS declaration
//! block. Highlighters use it for inline `style` attributes, or emit it as a
//! stylesheet when class mode is enabled.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping highlight classes to CSS declarations
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Style mappings: class name -> CSS declarations
    pub styles: BTreeMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    styles: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default styles, the classic GeSHi palette
const DEFAULT_STYLES: &str = r##"
[styles]
# Keyword groups
kw1 = "color: #b1b100;"
kw2 = "color: #000000; font-weight: bold;"
kw3 = "color: #990000;"
kw4 = "color: #009900; font-weight: bold;"

# Comments
co1 = "color: #666666; font-style: italic;"
coMULTI = "color: #666666; font-style: italic;"

# Literals
st0 = "color: #0000ff;"
es0 = "color: #000099; font-weight: bold;"
nu0 = "color: #cc66cc;"

# Punctuation
br0 = "color: #009900;"
sy0 = "color: #339933;"

# Variables
re0 = "color: #000088;"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string.
    ///
    /// Classes the file leaves out keep their default style.
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;
        let mut stylesheet = Self::default();
        stylesheet.name = parsed.metadata.as_ref().and_then(|m| m.name.clone());
        stylesheet.description = parsed.metadata.as_ref().and_then(|m| m.description.clone());
        stylesheet.styles.extend(parsed.styles);
        Ok(stylesheet)
    }

    /// Resolve a class to its CSS declarations
    ///
    /// Returns None if the class has no style, including an empty one.
    pub fn resolve(&self, class: &str) -> Option<&str> {
        self.styles
            .get(class)
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Render CSS rules scoped to `.{language}`
    pub fn to_css(&self, language: &str) -> String {
        let mut css = String::new();
        for (class, style) in &self.styles {
            if style.is_empty() {
                continue;
            }
            css.push_str(&format!(".{} .{} {{{}}}\n", language, class, style));
        }
        css
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        let parsed: TomlStylesheet =
            toml::from_str(DEFAULT_STYLES).expect("Default styles should be valid TOML");
        Stylesheet {
            name: None,
            description: None,
            styles: parsed.styles,
        }
    }
}
