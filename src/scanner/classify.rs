//! Classification of raw tokens against a language definition

use super::lexer::{tokenize, Span, Token};
use crate::language::LanguageDefinition;

/// Highlight class of a run of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Keyword from the numbered group (1-based)
    Keyword(usize),
    Comment,
    MultiComment,
    String,
    /// Escape sequence inside a string
    Escape,
    Number,
    Symbol,
    Bracket,
    Variable,
}

impl TokenClass {
    /// CSS class name used in class mode and stylesheets
    pub fn css_class(self) -> String {
        match self {
            TokenClass::Keyword(group) => format!("kw{}", group),
            TokenClass::Comment => "co1".to_string(),
            TokenClass::MultiComment => "coMULTI".to_string(),
            TokenClass::String => "st0".to_string(),
            TokenClass::Escape => "es0".to_string(),
            TokenClass::Number => "nu0".to_string(),
            TokenClass::Symbol => "sy0".to_string(),
            TokenClass::Bracket => "br0".to_string(),
            TokenClass::Variable => "re0".to_string(),
        }
    }
}

/// A contiguous run of source text sharing one class.
///
/// `class` is `None` for text rendered without markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub class: Option<TokenClass>,
    pub range: Span,
}

/// Fragment accumulator that merges adjacent runs of the same class
#[derive(Debug, Default)]
struct Fragments(Vec<Fragment>);

impl Fragments {
    fn push(&mut self, class: Option<TokenClass>, range: Span) {
        if range.is_empty() {
            return;
        }
        if let Some(last) = self.0.last_mut() {
            if last.class == class && last.range.end == range.start {
                last.range.end = range.end;
                return;
            }
        }
        self.0.push(Fragment { class, range });
    }
}

/// Split `source` into classified fragments.
///
/// The fragments are contiguous and cover the whole input.
pub fn classify(source: &str, language: &LanguageDefinition) -> Vec<Fragment> {
    let tokens = tokenize(source);
    let mut fragments = Fragments::default();
    let mut index = 0;

    while index < tokens.len() {
        let (token, span) = &tokens[index];
        let text = &source[span.clone()];

        if language.is_line_comment(text) {
            let end = tokens[index..]
                .iter()
                .position(|(token, _)| *token == Token::Newline)
                .map_or(tokens.len(), |offset| index + offset);
            fragments.push(
                Some(TokenClass::Comment),
                span.start..tokens[end - 1].1.end,
            );
            index = end;
            continue;
        }

        if let Some(close) = language.block_comment_close(text) {
            let end = tokens[index + 1..]
                .iter()
                .position(|(_, span)| &source[span.clone()] == close)
                .map_or(tokens.len(), |offset| index + offset + 2);
            fragments.push(
                Some(TokenClass::MultiComment),
                span.start..tokens[end - 1].1.end,
            );
            index = end;
            continue;
        }

        if language.is_quote(text) {
            index = scan_string(source, &tokens, index, language.escape, &mut fragments);
            continue;
        }

        let class = match token {
            Token::Word => language.keyword_group(text).map(TokenClass::Keyword),
            Token::Variable if language.variables => Some(TokenClass::Variable),
            Token::Variable => None,
            Token::Number if language.numbers => Some(TokenClass::Number),
            Token::Bracket if language.symbols => Some(TokenClass::Bracket),
            Token::Whitespace | Token::Newline | Token::Number | Token::Bracket => None,
            _ if language.symbols => Some(TokenClass::Symbol),
            _ => None,
        };
        fragments.push(class, span.clone());
        index += 1;
    }

    fragments.0
}

/// Consume a string opened by the token at `start`, returning the index
/// after its closing quote. Unterminated strings run to the end of input.
fn scan_string(
    source: &str,
    tokens: &[(Token, Span)],
    start: usize,
    escapes: bool,
    fragments: &mut Fragments,
) -> usize {
    let quote = &source[tokens[start].1.clone()];
    let mut segment_start = tokens[start].1.start;

    for (index, (token, span)) in tokens.iter().enumerate().skip(start + 1) {
        if escapes && *token == Token::Escape {
            fragments.push(Some(TokenClass::String), segment_start..span.start);
            fragments.push(Some(TokenClass::Escape), span.clone());
            segment_start = span.end;
        } else if &source[span.clone()] == quote {
            fragments.push(Some(TokenClass::String), segment_start..span.end);
            return index + 1;
        }
    }

    fragments.push(Some(TokenClass::String), segment_start..source.len());
    tokens.len()
}
