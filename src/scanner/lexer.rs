//! Raw lexer for highlightable source text using logos
//!
//! The lexer knows nothing about a particular language. It splits text into
//! lexemes that are coarse enough to be classified later against a
//! [`LanguageDefinition`](crate::language::LanguageDefinition): comment and
//! quote delimiters are emitted as their own tokens so a definition can pick
//! which of them are meaningful.

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[regex(r"[ \t\r\f]+")]
    Whitespace,
    #[token("\n")]
    Newline,

    // Comment delimiters (longer patterns win)
    #[token("//")]
    SlashSlash,
    #[token("/*")]
    SlashStar,
    #[token("*/")]
    StarSlash,
    #[token("#")]
    Hash,
    #[token("--")]
    DashDash,
    #[token(";")]
    Semicolon,
    #[token("<!--")]
    MarkupCommentOpen,
    #[token("-->")]
    MarkupCommentClose,

    // Quote delimiters
    #[token("\"")]
    DoubleQuote,
    #[token("'")]
    SingleQuote,
    #[token("`")]
    Backtick,

    /// Backslash followed by any character on the same line
    #[regex(r"\\.")]
    Escape,

    #[regex(r"[0-9][0-9_]*(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Number,

    /// `$name` style variable
    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*")]
    Variable,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    #[regex(r"[(){}\[\]]")]
    Bracket,

    /// Any other single character; named one-character tokens win
    #[regex(r#"[^\sA-Za-z0-9_(){}\[\]"'`\\]"#, priority = 1)]
    Symbol,
}

/// Lex `source` into tokens with their spans.
///
/// Bytes the lexer cannot match (a trailing backslash, stray whitespace
/// characters) come back as [`Token::Symbol`], so the spans always cover
/// the whole input.
pub fn tokenize(source: &str) -> Vec<(Token, Span)> {
    Token::lexer(source)
        .spanned()
        .map(|(token, span)| (token.unwrap_or(Token::Symbol), span))
        .collect()
}

/// Whether `text` lexes to exactly one token.
///
/// Language definitions may only use delimiters that satisfy this, since
/// classification compares whole tokens.
pub fn is_single_token(text: &str) -> bool {
    let mut lexer = Token::lexer(text);
    matches!(lexer.next(), Some(Ok(_))) && lexer.span() == (0..text.len()) && lexer.next().is_none()
}
