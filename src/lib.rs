//! GeSHi helper - named syntax highlighter templates
//!
//! This library provides a small syntax highlighter and a registry of named,
//! pre-configured highlighter templates that can be cloned with new source.
//!
//! # Example
//!
//! ```rust
//! use geshi_helper::highlight;
//!
//! let html = highlight("$myArray = [1, 2, 3, 4];", "php");
//! assert!(html.starts_with(r#"<pre class="php""#));
//! ```

pub mod config;
pub mod error;
pub mod highlighter;
pub mod language;
pub mod renderer;
pub mod scanner;
pub mod stylesheet;
pub mod template;

pub use config::{ConfigError, HelperConfig, TemplateConfig};
pub use error::{HighlightError, LanguageError};
pub use highlighter::{Highlight, Highlighter};
pub use renderer::{HeaderType, LineNumbers, RenderOptions};
pub use stylesheet::Stylesheet;
pub use template::{DispatchError, Operation, Outcome, TemplateRegistry};

/// The template registry over the bundled highlighter
pub type GeshiHelper = TemplateRegistry<Highlighter>;

/// Highlight `source` as `language` with default settings
///
/// # Example
///
/// ```rust
/// use geshi_helper::highlight;
///
/// let html = highlight("var myArray = [1, 2, 3, 4];", "javascript");
/// assert!(html.contains("myArray"));
/// assert!(html.ends_with("</pre>"));
/// ```
pub fn highlight(source: &str, language: &str) -> String {
    GeshiHelper::default().parse(source, Some(language))
}
