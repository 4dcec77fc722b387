//! The bundled highlighter

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use super::Highlight;
use crate::error::{HighlightError, LanguageError};
use crate::language::{self, normalize_name, LanguageDefinition};
use crate::renderer::{
    escape_html, render_html, HeaderType, LineNumbers, RenderContext, RenderOptions,
};
use crate::scanner::{classify, Fragment};
use crate::stylesheet::Stylesheet;

/// One configured highlighting job: a language, some source text and the
/// options used to render it.
///
/// Cloning is cheap for the language definition, which is shared, and deep
/// for everything a caller can change.
#[derive(Debug, Clone)]
pub struct Highlighter {
    language: String,
    definition: Option<Arc<LanguageDefinition>>,
    language_path: PathBuf,
    source: String,
    options: RenderOptions,
    stylesheet: Stylesheet,
    error: Option<HighlightError>,
}

impl Highlighter {
    /// Create a highlighter with source and language in one step
    pub fn new(source: &str, language: &str, path: &Path) -> Self {
        let mut highlighter = Self::with_language_path(path);
        highlighter.set_language(language);
        highlighter.set_source(source);
        highlighter
    }

    fn load_definition(&mut self) {
        match language::load(&self.language_path, &self.language) {
            Ok(definition) => {
                debug!(language = %self.language, "language definition loaded");
                self.definition = Some(Arc::new(definition));
                self.error = None;
            }
            Err(err) => {
                match &err {
                    LanguageError::NotFound(_) => {
                        warn!(language = %self.language, "no such language, rendering as plain text")
                    }
                    other => warn!("{}", other.format()),
                }
                self.definition = None;
                self.error = Some(HighlightError::from_language_error(&self.language, &err));
            }
        }
    }

    /// Display name of the language, or its id when no definition is loaded
    pub fn language_name(&self) -> &str {
        self.definition
            .as_deref()
            .map_or(self.language.as_str(), |definition| definition.name.as_str())
    }

    pub fn language_path(&self) -> &Path {
        &self.language_path
    }

    /// The error from the last language selection, if any
    pub fn error(&self) -> Option<&HighlightError> {
        self.error.as_ref()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    pub fn enable_line_numbers(&mut self, line_numbers: LineNumbers) {
        self.options.line_numbers = line_numbers;
    }

    pub fn start_line_numbers_at(&mut self, number: usize) {
        self.options.start_line = number;
    }

    /// Set styles for normal lines and for every nth line in fancy mode
    pub fn set_line_style(&mut self, normal: &str, fancy: &str) {
        self.options.line_style = normal.to_string();
        self.options.fancy_line_style = fancy.to_string();
    }

    pub fn set_overall_style(&mut self, style: &str) {
        self.options.overall_style = style.to_string();
    }

    pub fn set_header_type(&mut self, header_type: HeaderType) {
        self.options.header_type = header_type;
    }

    pub fn set_header_content(&mut self, content: &str) {
        self.options.header_content = Some(content.to_string());
    }

    pub fn set_footer_content(&mut self, content: &str) {
        self.options.footer_content = Some(content.to_string());
    }

    pub fn enable_classes(&mut self, enabled: bool) {
        self.options.use_classes = enabled;
    }

    pub fn set_tab_width(&mut self, width: usize) {
        self.options.tab_width = width;
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    pub fn set_stylesheet(&mut self, stylesheet: Stylesheet) {
        self.stylesheet = stylesheet;
    }

    /// CSS for class mode, scoped to this highlighter's language
    pub fn get_stylesheet(&self) -> String {
        let language = &self.language;
        let mut css = String::new();
        if !self.options.overall_style.is_empty() {
            css.push_str(&format!(".{} {{{}}}\n", language, self.options.overall_style));
        }
        if !self.options.line_style.is_empty() {
            css.push_str(&format!(".{} .li1 {{{}}}\n", language, self.options.line_style));
        }
        if !self.options.fancy_line_style.is_empty() {
            css.push_str(&format!(
                ".{} .li2 {{{}}}\n",
                language, self.options.fancy_line_style
            ));
        }
        css.push_str(&self.stylesheet.to_css(language));
        css
    }

    fn fragments(&self, source: &str) -> Vec<Fragment> {
        match &self.definition {
            Some(definition) => classify(source, definition),
            None => vec![Fragment {
                class: None,
                range: 0..source.len(),
            }],
        }
    }
}

impl Highlight for Highlighter {
    fn with_language_path(path: &Path) -> Self {
        Self {
            language: String::new(),
            definition: None,
            language_path: path.to_path_buf(),
            source: String::new(),
            options: RenderOptions::default(),
            stylesheet: Stylesheet::default(),
            error: None,
        }
    }

    /// Changing the path reloads the current language from it
    fn set_language_path(&mut self, path: &Path) {
        self.language_path = path.to_path_buf();
        if !self.language.is_empty() {
            self.load_definition();
        }
    }

    fn set_language(&mut self, language: &str) {
        self.language = normalize_name(language);
        self.load_definition();
    }

    fn set_source(&mut self, source: &str) {
        self.source = source.to_string();
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn parse_code(&self) -> String {
        let source = self.source.replace("\r\n", "\n").replace('\r', "\n");
        let fragments = self.fragments(&source);
        let language_id = escape_html(&self.language);
        let context = RenderContext {
            language_id: &language_id,
            language_name: self.language_name(),
        };
        render_html(&source, &fragments, context, &self.options, &self.stylesheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn builtin_only() -> PathBuf {
        PathBuf::from("/nonexistent/geshi-languages")
    }

    #[test]
    fn test_new_configures_everything() {
        let highlighter = Highlighter::new("echo 1;", "PHP", &builtin_only());
        assert_eq!(highlighter.language(), "php");
        assert_eq!(highlighter.language_name(), "PHP");
        assert_eq!(highlighter.source(), "echo 1;");
        assert!(highlighter.error().is_none());
    }

    #[test]
    fn test_unknown_language_renders_plain_escaped_text() {
        let highlighter = Highlighter::new("if a < b", "cobol", &builtin_only());
        assert_eq!(
            highlighter.error(),
            Some(&HighlightError::NoSuchLanguage("cobol".to_string()))
        );
        assert_eq!(
            highlighter.parse_code(),
            r#"<pre class="cobol" style="font-family:monospace;">if a &lt; b</pre>"#
        );
    }

    #[test]
    fn test_error_clears_on_valid_language() {
        let mut highlighter = Highlighter::new("", "cobol", &builtin_only());
        assert!(highlighter.error().is_some());
        highlighter.set_language("go");
        assert!(highlighter.error().is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Highlighter::new("a", "rust", &builtin_only());
        let mut copy = original.clone();
        copy.set_source("b");
        copy.enable_line_numbers(LineNumbers::Normal);
        copy.set_language("go");
        assert_eq!(original.source(), "a");
        assert_eq!(original.language(), "rust");
        assert_eq!(original.options().line_numbers, LineNumbers::None);

        original.set_footer_content("x");
        assert_eq!(copy.options().footer_content, None);
    }

    #[test]
    fn test_crlf_is_normalised() {
        let mut highlighter = Highlighter::new("a\r\nb\rc", "text", &builtin_only());
        highlighter.set_header_type(HeaderType::None);
        assert_eq!(highlighter.parse_code(), "a\nb\nc");
    }

    #[test]
    fn test_classes_mode() {
        let mut highlighter = Highlighter::new("fn main() {}", "rust", &builtin_only());
        highlighter.enable_classes(true);
        assert_eq!(
            highlighter.parse_code(),
            concat!(
                r#"<pre class="rust"><span class="kw2">fn</span> main"#,
                r#"<span class="br0">()</span> <span class="br0">{}</span></pre>"#
            )
        );
    }

    #[test]
    fn test_get_stylesheet() {
        let highlighter = Highlighter::new("", "php", &builtin_only());
        let css = highlighter.get_stylesheet();
        assert!(css.starts_with(".php {font-family:monospace;}\n"));
        assert!(css.contains(".php .li2 {font-weight: bold; vertical-align:top;}\n"));
        assert!(css.contains(".php .kw1 {color: #b1b100;}\n"));
    }
}
