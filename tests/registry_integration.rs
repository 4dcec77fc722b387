//! Integration tests for the template registry over the bundled highlighter

use geshi_helper::{
    GeshiHelper, Highlight, HelperConfig, LineNumbers, Outcome, TemplateConfig,
};
use pretty_assertions::assert_eq;

/// Registry that only sees the built-in language definitions
fn helper() -> GeshiHelper {
    GeshiHelper::new("php", "/nonexistent/geshi-languages")
}

#[test]
fn test_end_to_end_scenario() {
    let mut helper = helper();

    assert_eq!(helper.template("Code", None).language(), "php");

    let clone = helper.make_from("Code", "<?php echo 1; ?>", None);
    assert_eq!(clone.source(), "<?php echo 1; ?>");
    assert_eq!(clone.language(), "php");
    assert_eq!(helper.get("Code").expect("template").source(), "");

    assert_eq!(helper.templates(), vec!["Code"]);
    assert!(helper.has_template("Code"));
    assert!(!helper.has_template("Other"));
}

#[test]
fn test_template_language_is_fixed_at_creation() {
    let mut helper = helper();
    helper.template("X", Some("go"));
    assert_eq!(helper.template("X", Some("rust")).language(), "go");
    assert_eq!(helper.make_named("X", Some("x"), Some("python")).language(), "go");
}

#[test]
fn test_clone_renders_like_make() {
    let mut helper = helper();
    helper.template("Snippet", Some("javascript"));
    let source = "// ID selector example\nvar main = $('#main');";

    let cloned = helper.make_named("Snippet", Some(source), None);
    let made = helper.make(source, Some("javascript"));
    assert_eq!(cloned.parse_code(), made.parse_code());
}

#[test]
fn test_clones_are_independent() {
    let mut helper = helper();
    helper
        .template("Jquery", Some("jquery"))
        .enable_line_numbers(LineNumbers::Fancy(2));

    let mut first = helper.make_from("Jquery", "a", None);
    first.set_footer_content("first only");
    first.enable_line_numbers(LineNumbers::None);

    let second = helper.make_from("Jquery", "b", None);
    let template = helper.get("Jquery").expect("template");

    assert_eq!(template.options().footer_content, None);
    assert_eq!(template.options().line_numbers, LineNumbers::Fancy(2));
    assert_eq!(second.options().footer_content, None);
    assert_eq!(second.options().line_numbers, LineNumbers::Fancy(2));
    assert_eq!(first.source(), "a");
    assert_eq!(second.source(), "b");
}

#[test]
fn test_template_changes_reach_later_clones_only() {
    let mut helper = helper();
    let before = helper.make_from("T", "x", None);
    helper.template("T", None).set_header_content("late");
    let after = helper.make_from("T", "x", None);

    assert_eq!(before.options().header_content, None);
    assert_eq!(after.options().header_content.as_deref(), Some("late"));
}

#[test]
fn test_make_named_creates_missing_template() {
    let mut helper = helper();
    let clone = helper.make_named("PHP", Some("array_flip([1, 2, 3, 4]);"), None);
    assert_eq!(clone.language(), "php");
    let rare = helper.make_named("Rare", Some("(+ 1 2 3 4)"), Some("lisp"));
    assert_eq!(rare.language(), "lisp");
    assert_eq!(helper.templates(), vec!["PHP", "Rare"]);
}

#[test]
fn test_dynamic_make_clones_template() {
    let mut helper = helper();
    helper
        .template("Imp", Some("php"))
        .enable_line_numbers(LineNumbers::Normal);

    let outcome = helper.call("makeImp", &["echo 1;"]).expect("dispatch");
    let Outcome::Highlighter(clone) = outcome else {
        panic!("expected a highlighter");
    };
    assert_eq!(clone.source(), "echo 1;");
    assert_eq!(clone.options().line_numbers, LineNumbers::Normal);
}

#[test]
fn test_literal_make_takes_precedence() {
    let mut helper = helper();
    let outcome = helper.call("make", &["x", "go"]).expect("dispatch");
    let Outcome::Highlighter(made) = outcome else {
        panic!("expected a highlighter");
    };
    assert_eq!(made.language(), "go");
    assert!(helper.templates().is_empty());
}

#[test]
fn test_call_templates() {
    let mut helper = helper();
    helper.call("template", &["A"]).expect("dispatch");
    helper.call("makeB", &[]).expect("dispatch");

    match helper.call("templates", &[]).expect("dispatch") {
        Outcome::Names(names) => assert_eq!(names, vec!["A", "B"]),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(matches!(
        helper.call("templates", &["A"]),
        Ok(Outcome::Exists(true))
    ));
    assert!(matches!(
        helper.call("templates", &["missing"]),
        Ok(Outcome::Exists(false))
    ));
}

#[test]
fn test_call_template_returns_live_reference() {
    let mut helper = helper();
    if let Outcome::Template(template) = helper.call("template", &["A", "go"]).expect("dispatch") {
        template.set_footer_content("kept");
    } else {
        panic!("expected the template");
    }
    assert_eq!(
        helper.get("A").expect("template").options().footer_content.as_deref(),
        Some("kept")
    );
}

#[test]
fn test_call_parse() {
    let mut helper = helper();
    match helper.call("parse", &["x", "text"]).expect("dispatch") {
        Outcome::Output(html) => assert!(html.starts_with(r#"<pre class="text""#)),
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn test_unknown_operation() {
    let mut helper = helper();
    let err = helper.call("render", &["x"]).unwrap_err();
    assert_eq!(err.to_string(), "call to undefined operation render()");
}

#[test]
fn test_from_config_declares_templates() {
    let config = HelperConfig::new()
        .with_language("go")
        .with_path("/nonexistent/geshi-languages")
        .with_template(
            "Imp",
            TemplateConfig {
                language: Some("php".to_string()),
                line_numbers: Some(LineNumbers::Normal),
                overall_style: Some("background: #eefcfc;".to_string()),
                ..TemplateConfig::default()
            },
        )
        .with_template("Plain", TemplateConfig::default());

    let mut helper = GeshiHelper::from_config(&config);
    assert_eq!(helper.default_language(), "go");
    assert_eq!(helper.templates(), vec!["Imp", "Plain"]);
    assert_eq!(helper.get("Plain").expect("template").language(), "go");

    let mut clone = helper.make_from("Imp", "echo 1;", None);
    clone.start_line_numbers_at(3);
    let html = clone.parse_code();
    assert!(html.starts_with(r#"<pre class="php" style="background: #eefcfc;"><ol start="3">"#));
}

#[test]
fn test_invalidated_template_heals_on_clone() {
    let mut helper = helper();
    helper
        .template("A", Some("go"))
        .set_footer_content("old");
    helper.template("B", None);
    helper.invalidate("A");

    let clone = helper.make_from("A", "x", Some("rust"));
    assert_eq!(clone.language(), "rust");
    assert_eq!(clone.options().footer_content, None);
    assert_eq!(helper.templates(), vec!["A", "B"]);
}
