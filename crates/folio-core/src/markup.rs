//! Minimal tag markup used by the hero code sample.
//!
//! The dialect is deliberately small: plain text interleaved with
//! `<name>`/`</name>` tags that the renderer maps to styles (`<kw>`, `<str>`,
//! `<fn>`, `<cmt>`). The typewriter reveals text character by character but
//! commits tags whole, so every intermediate render stays balanced.

use crate::{Error, Result};

/// A lexed piece of markup source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Plain text run
    Text(String),
    /// A complete tag including its angle brackets, e.g. `<kw>` or `</kw>`
    Tag(String),
}

impl Token {
    /// The source slice this token was lexed from
    pub fn source(&self) -> &str {
        match self {
            Token::Text(s) | Token::Tag(s) => s,
        }
    }
}

/// Lex markup into text runs and whole tags.
///
/// An unterminated trailing `<...` is kept as a text run so lossless
/// re-joining holds even for partially typed output.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '<' {
            text.push(ch);
            continue;
        }

        let mut tag = String::from('<');
        let mut closed = false;
        for tc in chars.by_ref() {
            tag.push(tc);
            if tc == '>' {
                closed = true;
                break;
            }
        }

        if closed {
            if !text.is_empty() {
                tokens.push(Token::Text(std::mem::take(&mut text)));
            }
            tokens.push(Token::Tag(tag));
        } else {
            // Dangling `<...` at end of input
            text.push_str(&tag);
        }
    }

    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }

    tokens
}

/// True when every `<` is closed by a `>` before the next `<` or end of input.
///
/// This is the typewriter's structural invariant: it must hold for the
/// rendered output after every commit.
pub fn is_balanced(source: &str) -> bool {
    let mut in_tag = false;
    for ch in source.chars() {
        match ch {
            '<' => {
                if in_tag {
                    return false;
                }
                in_tag = true;
            }
            '>' => {
                in_tag = false;
            }
            _ => {}
        }
    }
    !in_tag
}

/// Remove all tags, keeping only text runs.
pub fn strip_tags(source: &str) -> String {
    tokenize(source)
        .into_iter()
        .filter_map(|t| match t {
            Token::Text(s) => Some(s),
            Token::Tag(_) => None,
        })
        .collect()
}

/// Reject markup with unterminated tags at load time.
pub fn validate(source: &str) -> Result<()> {
    if is_balanced(source) {
        Ok(())
    } else {
        Err(Error::Markup(format!(
            "unterminated tag in markup: {:?}",
            truncate(source, 40)
        )))
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
