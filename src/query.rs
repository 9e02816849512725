//! Query parsing: raw input → term/prefix/phrase clauses.
//!
//! Parsing runs on every keystroke and must never fail. Malformed input
//! degrades to the nearest sensible query: an unterminated quote is a
//! phrase running to end-of-string, an empty box is an empty query that
//! matches nothing.

use crate::tokenize::{is_stop_word, tokenize};

/// One parsed unit of a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Exact term, matched in any field.
    Term(String),
    /// The in-progress final token; matches any indexed term with this
    /// prefix (search-as-you-type).
    Prefix(String),
    /// Quoted word sequence requiring positional adjacency in body text.
    Phrase(Vec<String>),
}

/// A parsed query. Clauses combine with implicit AND; an empty query
/// matches nothing (never "everything").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub clauses: Vec<Clause>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Parse a raw query string.
///
/// Whitespace-separated words become [`Clause::Term`]s; double-quoted
/// groups become [`Clause::Phrase`]s; the final word becomes a
/// [`Clause::Prefix`] when the input does not end in whitespace, so an
/// in-progress word still matches.
///
/// Terms and phrase words are normalized with the same tokenizer rules as
/// the index, including stop word removal — a stop word clause would
/// otherwise AND-out every result because body text never indexes them.
/// The trailing prefix token is kept verbatim: a half-typed word is not a
/// stop word yet.
pub fn parse_query(raw: &str) -> Query {
    let mut clauses: Vec<Clause> = Vec::new();
    // Index into `clauses` of the clause made from the last unquoted word,
    // set only when that word runs to end-of-input.
    let mut trailing_word: Option<usize> = None;

    let mut chars = raw.char_indices().peekable();
    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c == '"' {
            chars.next();
            let body_start = start + c.len_utf8();
            let mut body_end = raw.len();
            for (i, d) in chars.by_ref() {
                if d == '"' {
                    body_end = i;
                    break;
                }
            }
            let words: Vec<String> = tokenize(&raw[body_start..body_end])
                .into_iter()
                .map(|t| t.term)
                .filter(|t| !is_stop_word(t))
                .collect();
            if !words.is_empty() {
                clauses.push(Clause::Phrase(words));
            }
            trailing_word = None;
            continue;
        }

        // Unquoted word: runs to the next whitespace or quote.
        let mut end = raw.len();
        while let Some(&(i, d)) = chars.peek() {
            if d.is_whitespace() || d == '"' {
                end = i;
                break;
            }
            chars.next();
        }

        trailing_word = None;
        let word_terms: Vec<String> = tokenize(&raw[start..end]).into_iter().map(|t| t.term).collect();
        let runs_to_end = end == raw.len();
        let last = word_terms.len().saturating_sub(1);
        for (i, term) in word_terms.into_iter().enumerate() {
            let is_final = runs_to_end && i == last;
            // A half-typed final word is kept even when it looks like a
            // stop word ("the" may become "theme").
            if is_stop_word(&term) && !is_final {
                continue;
            }
            clauses.push(Clause::Term(term));
            if is_final {
                trailing_word = Some(clauses.len() - 1);
            }
        }
    }

    // The last word of an in-progress query is a prefix, not an exact term.
    if let Some(i) = trailing_word {
        if let Clause::Term(term) = clauses[i].clone() {
            clauses[i] = Clause::Prefix(term);
        }
    }

    Query { clauses }
}
