//! Template registry for named, reusable highlighters

use std::path::{Path, PathBuf};

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

use crate::config::{HelperConfig, DEFAULT_LANGUAGE, DEFAULT_RESOURCE_PATH};
use crate::highlighter::{Highlight, Highlighter};

/// Registry of named highlighter templates
///
/// One registry lives for one rendering pass. Templates are created lazily
/// on first reference, configured in place by callers, and cloned with new
/// source through [`make_named`](Self::make_named).
#[derive(Debug, Clone)]
pub struct TemplateRegistry<H = Highlighter> {
    /// `None` marks a stale entry, rebuilt on its next lookup
    templates: IndexMap<String, Option<H>>,
    default_language: String,
    resource_path: PathBuf,
}

impl<H: Highlight> Default for TemplateRegistry<H> {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, DEFAULT_RESOURCE_PATH)
    }
}

impl<H: Highlight> TemplateRegistry<H> {
    /// Create an empty registry
    pub fn new(default_language: impl Into<String>, resource_path: impl Into<PathBuf>) -> Self {
        Self {
            templates: IndexMap::new(),
            default_language: default_language.into(),
            resource_path: resource_path.into(),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn resource_path(&self) -> &Path {
        &self.resource_path
    }

    /// Create an unregistered highlighter for `source`
    pub fn make(&self, source: &str, language: Option<&str>) -> H {
        let mut highlighter: H = build(&self.resource_path, &self.default_language, language);
        highlighter.set_source(source);
        highlighter
    }

    /// Highlight `source` without keeping the highlighter
    pub fn parse(&self, source: &str, language: Option<&str>) -> String {
        self.make(source, language).parse_code()
    }

    /// Fetch the template `name`, creating it if needed.
    ///
    /// `language` only applies when the template is created; an existing
    /// template is returned unchanged.
    pub fn template(&mut self, name: &str, language: Option<&str>) -> &mut H {
        let Self {
            templates,
            default_language,
            resource_path,
        } = self;

        let slot = match templates.entry(name.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!(template = name, "template created");
                entry.insert(None)
            }
        };
        slot.get_or_insert_with(|| {
            let highlighter: H =
                build(resource_path.as_path(), default_language.as_str(), language);
            debug!(template = name, language = highlighter.language(), "template built");
            highlighter
        })
    }

    /// Replace the template `name` with a fresh one, keeping its position
    /// if it already exists
    pub fn replace_template(&mut self, name: &str, language: Option<&str>) -> &mut H {
        let highlighter: H = build(&self.resource_path, &self.default_language, language);
        debug!(template = name, language = highlighter.language(), "template replaced");
        self.templates.insert(name.to_string(), Some(highlighter));
        self.template(name, language)
    }

    /// Mark the template `name` stale. Returns whether it was registered.
    ///
    /// The name stays registered; the next lookup rebuilds it from scratch.
    pub fn invalidate(&mut self, name: &str) -> bool {
        match self.templates.get_mut(name) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// Clone the template `name` with new source.
    ///
    /// The template is created first if needed, using `language`. The
    /// returned highlighter is independent of the template.
    pub fn make_named(&mut self, name: &str, source: Option<&str>, language: Option<&str>) -> H {
        let mut highlighter = self.template(name, language).clone();
        highlighter.set_source(source.unwrap_or(""));
        debug!(template = name, "template cloned");
        highlighter
    }

    /// [`make_named`](Self::make_named) with the source always given
    pub fn make_from(&mut self, name: &str, source: &str, language: Option<&str>) -> H {
        self.make_named(name, Some(source), language)
    }

    /// Look up a live template without creating it
    pub fn get(&self, name: &str) -> Option<&H> {
        self.templates.get(name).and_then(Option::as_ref)
    }

    /// Registered template names in creation order
    pub fn templates(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    /// Whether `name` is a registered, live template
    pub fn has_template(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// A fresh highlighter for `language`, or the default language
fn build<H: Highlight>(resource_path: &Path, default_language: &str, language: Option<&str>) -> H {
    let mut highlighter = H::with_language_path(resource_path);
    highlighter.set_language(language.unwrap_or(default_language));
    highlighter
}

impl TemplateRegistry<Highlighter> {
    /// Create a registry from configuration, declaring its templates
    pub fn from_config(config: &HelperConfig) -> Self {
        let mut registry = Self::new(config.language.clone(), config.path.clone());
        for (name, template) in &config.templates {
            let highlighter = registry.template(name, template.language.as_deref());
            template.apply(highlighter);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Records configuration without rendering anything real
    #[derive(Debug, Clone, PartialEq)]
    struct Probe {
        path: PathBuf,
        language: String,
        source: String,
        line_numbers: bool,
    }

    impl Highlight for Probe {
        fn with_language_path(path: &Path) -> Self {
            Probe {
                path: path.to_path_buf(),
                language: String::new(),
                source: String::new(),
                line_numbers: false,
            }
        }

        fn set_language_path(&mut self, path: &Path) {
            self.path = path.to_path_buf();
        }

        fn set_language(&mut self, language: &str) {
            self.language = language.to_string();
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
            format!("[{}|{}|{}]", self.language, self.line_numbers, self.source)
        }
    }

    fn registry() -> TemplateRegistry<Probe> {
        TemplateRegistry::new("php", "/res")
    }

    #[test]
    fn test_make_uses_defaults() {
        let made = registry().make("x", None);
        assert_eq!(made.language, "php");
        assert_eq!(made.path, PathBuf::from("/res"));
        assert_eq!(made.source, "x");
    }

    #[test]
    fn test_make_is_not_registered() {
        let registry = registry();
        registry.make("x", Some("go"));
        assert!(registry.templates().is_empty());
    }

    #[test]
    fn test_parse_renders() {
        assert_eq!(registry().parse("x", Some("go")), "[go|false|x]");
    }

    #[test]
    fn test_template_ignores_later_language() {
        let mut registry = registry();
        assert_eq!(registry.template("X", Some("go")).language, "go");
        assert_eq!(registry.template("X", Some("rust")).language, "go");
        assert_eq!(registry.template("X", None).language, "go");
    }

    #[test]
    fn test_template_mutations_persist() {
        let mut registry = registry();
        registry.template("X", None).line_numbers = true;
        assert!(registry.template("X", None).line_numbers);
    }

    #[test]
    fn test_make_named_clones_with_source() {
        let mut registry = registry();
        registry.template("X", Some("go")).line_numbers = true;

        let mut clone = registry.make_named("X", Some("a"), Some("rust"));
        assert_eq!(clone.language, "go");
        assert_eq!(clone.source, "a");
        assert!(clone.line_numbers);

        clone.line_numbers = false;
        assert!(registry.get("X").expect("template").line_numbers);
        assert_eq!(registry.get("X").expect("template").source, "");
    }

    #[test]
    fn test_make_named_defaults() {
        let mut registry = registry();
        let clone = registry.make_named("Fresh", None, None);
        assert_eq!(clone.source, "");
        assert_eq!(clone.language, "php");
        assert!(registry.has_template("Fresh"));
    }

    #[test]
    fn test_names_keep_creation_order() {
        let mut registry = registry();
        registry.template("b", None);
        registry.make_named("a", None, None);
        registry.template("c", None);
        registry.template("b", None);
        assert_eq!(registry.templates(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_stale_entry_is_rebuilt_in_place() {
        let mut registry = registry();
        registry.template("a", Some("go")).line_numbers = true;
        registry.template("b", None);

        assert!(registry.invalidate("a"));
        assert!(!registry.has_template("a"));
        assert_eq!(registry.templates(), vec!["a", "b"]);

        let rebuilt = registry.template("a", Some("rust"));
        assert_eq!(rebuilt.language, "rust");
        assert!(!rebuilt.line_numbers);
        assert_eq!(registry.templates(), vec!["a", "b"]);
    }

    #[test]
    fn test_healed_entry_is_not_rebuilt_again() {
        let mut registry = registry();
        registry.template("a", Some("go"));
        registry.invalidate("a");

        registry.template("a", Some("rust")).line_numbers = true;
        let healed = registry.template("a", Some("lisp"));
        assert_eq!(healed.language, "rust");
        assert!(healed.line_numbers);
        assert_eq!(registry.templates(), vec!["a"]);
    }

    #[test]
    fn test_make_named_heals_stale_entry() {
        let mut registry = registry();
        registry.template("a", Some("go"));
        registry.invalidate("a");
        let clone = registry.make_named("a", Some("src"), Some("lisp"));
        assert_eq!(clone.language, "lisp");
        assert!(registry.has_template("a"));
    }

    #[test]
    fn test_invalidate_unknown_name() {
        assert!(!registry().invalidate("nope"));
    }

    #[test]
    fn test_replace_template() {
        let mut registry = registry();
        registry.template("a", Some("go")).line_numbers = true;
        registry.template("b", None);

        let replaced = registry.replace_template("a", Some("rust"));
        assert_eq!(replaced.language, "rust");
        assert!(!replaced.line_numbers);
        assert_eq!(registry.templates(), vec!["a", "b"]);
    }

    #[test]
    fn test_has_template() {
        let mut registry = registry();
        registry.template("Code", None);
        assert!(registry.has_template("Code"));
        assert!(!registry.has_template("code"));
        assert!(!registry.has_template("Other"));
    }
}
