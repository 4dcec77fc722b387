//! The highlighter capability and the bundled engine
//!
//! The template registry only ever constructs, configures the language and
//! source of, clones, and renders highlighters. That surface is the
//! [`Highlight`] trait. Everything else (line numbers, styles, header and
//! footer text) is configured by callers directly on the concrete type,
//! which for this crate is [`Highlighter`].

mod engine;

use std::path::Path;

pub use engine::Highlighter;

/// What the template registry needs from a highlighter.
///
/// `Clone` must produce a deep copy: mutating the copy never affects the
/// original.
pub trait Highlight: Clone {
    /// Create a highlighter resolving language definitions from `path`,
    /// with no language and empty source
    fn with_language_path(path: &Path) -> Self;

    fn set_language_path(&mut self, path: &Path);

    /// Select a language. Unknown languages are not an error here; they are
    /// reported by the implementation however it sees fit.
    fn set_language(&mut self, language: &str);

    fn set_source(&mut self, source: &str);

    /// The configured (normalised) language
    fn language(&self) -> &str;

    fn source(&self) -> &str;

    /// Render the source with the current configuration
    fn parse_code(&self) -> String;
}
