//! Snippet extraction and term highlighting.
//!
//! Pure functions of `(results, query, store)` — no state, no I/O. The
//! tokenizer is deterministic, so re-tokenizing a record's text here
//! reproduces exactly the offsets the index builder saw.

use crate::query::{Clause, Query};
use crate::store::RecordStore;
use crate::tokenize::{raw_token_len, tokenize_text};
use crate::types::{FormattedResult, RankedResult};

/// Bytes of context kept on each side of the first match.
pub const SNIPPET_RADIUS: usize = 60;
/// Fallback prefix length when no query term occurs in the body text.
pub const FALLBACK_LEN: usize = 120;
/// Markers wrapped around matched terms inside the snippet window.
pub const HIGHLIGHT_OPEN: &str = "<mark>";
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// Produce display results for ranked records.
pub fn format_results(
    results: &[RankedResult],
    query: &Query,
    store: &RecordStore,
) -> Vec<FormattedResult> {
    results
        .iter()
        .filter_map(|result| {
            let record = store.get(result.record)?;
            Some(FormattedResult {
                location: record.location.clone(),
                page: record.page.clone(),
                title: record.title.clone(),
                category: record.category.clone(),
                snippet: extract_snippet(&record.text, query),
                score: result.score,
            })
        })
        .collect()
}

/// Does this indexed term satisfy any clause of the query?
fn matches_query(term: &str, query: &Query) -> bool {
    query.clauses.iter().any(|clause| match clause {
        Clause::Term(t) => term == t,
        Clause::Prefix(p) => term.starts_with(p.as_str()),
        Clause::Phrase(words) => words.iter().any(|w| w == term),
    })
}

/// Extract a highlighted window around the first matching token.
///
/// Falls back to the leading text when the match was elsewhere
/// (title/page/category); empty text yields `None`.
pub fn extract_snippet(text: &str, query: &Query) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let tokens = tokenize_text(text);
    let Some(first) = tokens.iter().find(|t| matches_query(&t.term, query)) else {
        return Some(leading_window(text));
    };

    let anchor = first.offset as usize;
    let match_end = anchor + raw_token_len(text, anchor);

    let mut start = anchor.saturating_sub(SNIPPET_RADIUS);
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (match_end + SNIPPET_RADIUS).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }

    // Trim partial words at the window edges, never cutting into the match.
    if start > 0 {
        if let Some((i, c)) = text[start..anchor]
            .char_indices()
            .find(|(_, c)| c.is_whitespace())
        {
            start += i + c.len_utf8();
        }
    }
    if end < text.len() {
        if let Some((i, _)) = text[match_end..end]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
        {
            end = match_end + i;
        }
    }

    // Wrap every matching token inside the window in highlight markers.
    let mut out = String::with_capacity(end - start + 2 * HIGHLIGHT_OPEN.len());
    let mut cursor = start;
    for token in &tokens {
        let token_start = token.offset as usize;
        if token_start < start || token_start < cursor {
            // Before the window, or a stem duplicate sharing an offset.
            continue;
        }
        if token_start >= end {
            break;
        }
        if !matches_query(&token.term, query) {
            continue;
        }
        let token_end = (token_start + raw_token_len(text, token_start)).min(end);
        out.push_str(&text[cursor..token_start]);
        out.push_str(HIGHLIGHT_OPEN);
        out.push_str(&text[token_start..token_end]);
        out.push_str(HIGHLIGHT_CLOSE);
        cursor = token_end;
    }
    out.push_str(&text[cursor..end]);
    Some(out)
}

/// First words of the text, capped at [`FALLBACK_LEN`] bytes.
fn leading_window(text: &str) -> String {
    if text.len() <= FALLBACK_LEN {
        return text.to_string();
    }
    let mut end = FALLBACK_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    if let Some((i, _)) = text[..end]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
    {
        end = i;
    }
    text[..end].to_string()
}
