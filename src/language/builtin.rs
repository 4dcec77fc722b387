//! Language definitions compiled into the crate

use super::{normalize_name, LanguageDefinition};

const BUILTIN: &[(&str, &str)] = &[
    ("go", include_str!("../../languages/go.toml")),
    ("html5", include_str!("../../languages/html5.toml")),
    ("javascript", include_str!("../../languages/javascript.toml")),
    ("jquery", include_str!("../../languages/jquery.toml")),
    ("lisp", include_str!("../../languages/lisp.toml")),
    ("php", include_str!("../../languages/php.toml")),
    ("python", include_str!("../../languages/python.toml")),
    ("rust", include_str!("../../languages/rust.toml")),
    ("text", include_str!("../../languages/text.toml")),
];

pub(super) fn source(id: &str) -> Option<&'static str> {
    BUILTIN
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, content)| *content)
}

/// Names of the built-in languages, sorted
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(name, _)| *name)
}

/// Load a built-in definition by (unnormalised) name
pub fn builtin(name: &str) -> Option<LanguageDefinition> {
    let id = normalize_name(name);
    let content = source(&id)?;
    LanguageDefinition::from_str(content, &format!("builtin:{}", id)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtins_parse() {
        for name in builtin_names() {
            let content = source(name).expect("listed builtin has a source");
            if let Err(err) = LanguageDefinition::from_str(content, name) {
                panic!("builtin {} is invalid:\n{}", name, err.format());
            }
        }
    }

    #[test]
    fn test_builtin_lookup_is_normalised() {
        let definition = builtin("JavaScript").expect("javascript");
        assert_eq!(definition.name, "Javascript");
        assert!(builtin("cobol").is_none());
    }

    #[test]
    fn test_builtin_names_sorted() {
        let names: Vec<_> = builtin_names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
