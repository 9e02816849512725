//! Tokenization: raw field text → normalized index terms.
//!
//! No stemming is applied. The corpus is dense with code identifiers
//! (`CovMatrix`, `fit!`, `Series`) where stemming corrupts matches; exact
//! and prefix matching do the work instead.
//!
//! Tokenization is pure and deterministic: the same input always yields the
//! same token sequence, positions, and offsets. Snippet extraction relies on
//! this to reconstruct byte offsets by re-tokenizing.

use crate::types::Token;
use crate::utils::normalize;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Stop words stripped from body text.
///
/// Applied only to the `text` field: titles and page names are short and
/// every token there is meaningful (`A`, `In`, type names).
static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let json = include_str!("../data/stop_words.json");
    let by_lang: HashMap<String, Vec<String>> =
        serde_json::from_str(json).expect("embedded stop word list is valid JSON");
    by_lang.into_values().flatten().collect()
});

/// Check if a word is a stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Characters that belong inside a term. `_` is a word character so
/// identifiers like `heading_level` stay whole.
#[inline]
fn is_term_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenize without stop word filtering (title, page, and category fields).
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_impl(text, false)
}

/// Tokenize body text: same splitting rules, stop words removed.
/// Positions are ordinals over the tokens that survive filtering.
pub fn tokenize_text(text: &str) -> Vec<Token> {
    tokenize_impl(text, true)
}

fn tokenize_impl(text: &str, strip_stop_words: bool) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut position = 0u32;
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if !is_term_char(c) {
            chars.next();
            continue;
        }

        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if !is_term_char(c) {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }

        // Trailing `!`/`?` are term-internal: `fit!` and `isready?` are
        // single symbols in the source material.
        let mut trailing_mark = false;
        while let Some(&(i, c)) = chars.peek() {
            if c != '!' && c != '?' {
                break;
            }
            trailing_mark = true;
            end = i + c.len_utf8();
            chars.next();
        }

        let term = normalize(&text[start..end]);
        if term.is_empty() || (strip_stop_words && is_stop_word(&term)) {
            continue;
        }

        tokens.push(Token {
            term: term.clone(),
            position,
            offset: start as u32,
        });

        if trailing_mark {
            // Also emit the bare stem at the same position so the exact
            // query `fit` finds `fit!`.
            let stem = term.trim_end_matches(['!', '?']);
            if !stem.is_empty() && !(strip_stop_words && is_stop_word(stem)) {
                tokens.push(Token {
                    term: stem.to_string(),
                    position,
                    offset: start as u32,
                });
            }
        }

        position += 1;
    }

    tokens
}

/// Byte length of the raw token starting at `start`, using the same
/// character classes as the tokenizer (including trailing `!`/`?`).
///
/// Used by snippet extraction to recover the original span of a token whose
/// normalized form may differ in byte length.
pub(crate) fn raw_token_len(text: &str, start: usize) -> usize {
    let rest = &text[start..];
    let mut end = 0;
    let mut in_run = true;
    for (i, c) in rest.char_indices() {
        if in_run && is_term_char(c) {
            end = i + c.len_utf8();
        } else if c == '!' || c == '?' {
            in_run = false;
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    end
}
