//! HTML generation from classified fragments

use crate::scanner::{Fragment, TokenClass};
use crate::stylesheet::Stylesheet;

use super::{HeaderType, LineNumbers, RenderOptions};

/// Language information substituted into markup
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Normalised language id, used as the wrapper's class
    pub language_id: &'a str,
    /// Display name, substituted for `{LANGUAGE}`
    pub language_name: &'a str,
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(c),
    }
}

/// Build rendered lines incrementally, closing spans at line ends
struct LineBuilder<'a> {
    options: &'a RenderOptions,
    stylesheet: &'a Stylesheet,
    lines: Vec<String>,
    current: String,
    column: usize,
}

impl<'a> LineBuilder<'a> {
    fn new(options: &'a RenderOptions, stylesheet: &'a Stylesheet) -> Self {
        Self {
            options,
            stylesheet,
            lines: vec![],
            current: String::new(),
            column: 0,
        }
    }

    fn open_span(&self, class: TokenClass) -> Option<String> {
        let name = class.css_class();
        if self.options.use_classes {
            Some(format!(r#"<span class="{}">"#, name))
        } else {
            self.stylesheet
                .resolve(&name)
                .map(|style| format!(r#"<span style="{}">"#, escape_html(style)))
        }
    }

    fn push(&mut self, text: &str, class: Option<TokenClass>) {
        let open = class.and_then(|class| self.open_span(class));
        for (index, piece) in text.split('\n').enumerate() {
            if index > 0 {
                self.end_line();
            }
            if piece.is_empty() {
                continue;
            }
            let content = self.expand(piece);
            match &open {
                Some(tag) => {
                    self.current.push_str(tag);
                    self.current.push_str(&content);
                    self.current.push_str("</span>");
                }
                None => self.current.push_str(&content),
            }
        }
    }

    /// Escape `piece` and expand tabs to the next tab stop
    fn expand(&mut self, piece: &str) -> String {
        let width = self.options.tab_width;
        let mut out = String::with_capacity(piece.len());
        for c in piece.chars() {
            if c == '\t' && width > 0 {
                let pad = width - self.column % width;
                out.extend(std::iter::repeat(' ').take(pad));
                self.column += pad;
            } else {
                push_escaped(&mut out, c);
                self.column += 1;
            }
        }
        out
    }

    fn end_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.column = 0;
    }

    fn finish(mut self) -> Vec<String> {
        self.end_line();
        self.lines
    }
}

fn substitute(content: &str, context: &RenderContext<'_>) -> String {
    content
        .replace("{LANGUAGE}", context.language_name)
        .replace("{VERSION}", env!("CARGO_PKG_VERSION"))
}

fn style_attr(options: &RenderOptions, style: &str) -> String {
    if options.use_classes || style.is_empty() {
        String::new()
    } else {
        format!(r#" style="{}""#, escape_html(style))
    }
}

fn numbered(lines: &[String], options: &RenderOptions) -> String {
    let interval = match options.line_numbers {
        LineNumbers::Fancy(n) => Some(n.max(1)),
        _ => None,
    };
    let start = if options.start_line == 1 {
        String::new()
    } else {
        format!(r#" start="{}""#, options.start_line)
    };

    let items: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let fancy = interval.is_some_and(|n| index % n == n - 1);
            let (item_class, line_class, style) = if fancy {
                ("li2", "de2", &options.fancy_line_style)
            } else {
                ("li1", "de1", &options.line_style)
            };
            let content = if line.is_empty() { "&nbsp;" } else { line };
            format!(
                r#"<li class="{}"{}><div class="{}">{}</div></li>"#,
                item_class,
                style_attr(options, style),
                line_class,
                content
            )
        })
        .collect();

    format!("<ol{}>{}</ol>", start, items.join("\n"))
}

/// Render classified `fragments` of `source` as HTML
pub fn render_html(
    source: &str,
    fragments: &[Fragment],
    context: RenderContext<'_>,
    options: &RenderOptions,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = LineBuilder::new(options, stylesheet);
    for fragment in fragments {
        builder.push(&source[fragment.range.clone()], fragment.class);
    }
    let lines = builder.finish();

    let overall = style_attr(options, &options.overall_style);
    let (open, close) = match options.header_type {
        HeaderType::Pre => (
            format!(r#"<pre class="{}"{}>"#, context.language_id, overall),
            "</pre>",
        ),
        HeaderType::Div => (
            format!(r#"<div class="{}"{}>"#, context.language_id, overall),
            "</div>",
        ),
        HeaderType::None => (String::new(), ""),
    };

    let mut html = open;
    if let Some(header) = &options.header_content {
        html.push_str(&format!(
            r#"<div class="head">{}</div>"#,
            substitute(header, &context)
        ));
    }
    match options.line_numbers {
        LineNumbers::None => html.push_str(&lines.join("\n")),
        _ => html.push_str(&numbered(&lines, options)),
    }
    if let Some(footer) = &options.footer_content {
        html.push_str(&format!(
            r#"<div class="foot">{}</div>"#,
            substitute(footer, &context)
        ));
    }
    html.push_str(close);
    html
}
