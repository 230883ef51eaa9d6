//! Token classification: the year anchor vs. residual text terms.

use std::sync::LazyLock;

use regex::Regex;

/// Year-like token grammar: optional sign, digits and/or trailing
/// wildcards, optionally a hyphenated second run forming a range.
static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d*\**$|^-?\d*\**--?\d*\**$").expect("year token grammar"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    YearLike,
    Text,
}

/// A single query token with its classification tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub text: String,
    pub kind: TermKind,
}

pub fn is_year_like(token: &str) -> bool {
    YEAR_TOKEN.is_match(token)
}

/// Tag each whitespace-separated token, in original order.
pub fn tag_tokens(query: &str) -> Vec<Term> {
    query
        .split_whitespace()
        .map(|token| Term {
            text: token.to_string(),
            kind: if is_year_like(token) {
                TermKind::YearLike
            } else {
                TermKind::Text
            },
        })
        .collect()
}

/// The classified query: at most one year anchor, taken from the first
/// year-like token in original order. Every other token, year-like or
/// not, joins the residual text filter (lowercased; matching is
/// case-insensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub year_anchor: Option<String>,
    pub text_terms: Vec<String>,
}

impl Classification {
    /// True for empty input; the caller must skip retrieval entirely.
    pub fn is_empty(&self) -> bool {
        self.year_anchor.is_none() && self.text_terms.is_empty()
    }
}

pub fn classify(query: &str) -> Classification {
    let mut classification = Classification::default();
    for term in tag_tokens(query) {
        if classification.year_anchor.is_none() && term.kind == TermKind::YearLike {
            classification.year_anchor = Some(term.text);
        } else {
            classification.text_terms.push(term.text.to_lowercase());
        }
    }
    classification
}
