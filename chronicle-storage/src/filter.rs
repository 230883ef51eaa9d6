//! Structured, parameterized filter descriptors.
//!
//! Retrieval predicates are built as data and compiled to SQL
//! fragments with bound parameters; user text never reaches the
//! statement string. Fragments use unnumbered `?` placeholders and are
//! composed left-to-right with their parameter lists concatenated in
//! the same order.

use rusqlite::types::Value;

use chronicle_core::models::YearMatch;

/// Conjunctive substring match: every term must appear in at least one
/// of the listed columns. Column names are trusted identifiers owned
/// by the query modules, never user input.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFilter {
    columns: Vec<String>,
    terms: Vec<String>,
}

impl TextFilter {
    pub fn new(columns: &[&str], terms: &[String]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            terms: terms.to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compile to a SQL fragment plus bound parameters. An empty term
    /// list compiles to the neutral predicate.
    pub fn compile(&self) -> (String, Vec<Value>) {
        if self.terms.is_empty() {
            return ("1=1".to_string(), Vec::new());
        }
        let mut clauses = Vec::with_capacity(self.terms.len());
        let mut params = Vec::with_capacity(self.terms.len() * self.columns.len());
        for term in &self.terms {
            let pattern = format!("%{}%", escape_like(term));
            let alternatives: Vec<String> = self
                .columns
                .iter()
                .map(|col| format!("{col} LIKE ? ESCAPE '\\'"))
                .collect();
            clauses.push(format!("({})", alternatives.join(" OR ")));
            for _ in &self.columns {
                params.push(Value::Text(pattern.clone()));
            }
        }
        (clauses.join(" AND "), params)
    }
}

/// Compile a year match spec into a predicate over `column`.
pub fn year_predicate(year: &YearMatch, column: &str) -> (String, Vec<Value>) {
    match year {
        YearMatch::Exact(y) => (format!("{column} = ?"), vec![Value::Integer(*y)]),
        YearMatch::Between { start, end } => (
            format!("{column} BETWEEN ? AND ?"),
            vec![Value::Integer(*start), Value::Integer(*end)],
        ),
        YearMatch::Pattern { prefix, wildcards } => {
            // One `_` per wildcard position; LIKE over the decimal
            // string enforces the same-length property.
            let pattern = format!("{prefix}{}", "_".repeat(*wildcards));
            (
                format!("CAST({column} AS TEXT) LIKE ?"),
                vec![Value::Text(pattern)],
            )
        }
    }
}

/// Escape LIKE metacharacters in a user term so it matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
