//! Dropdown list processing for the pollutant and matrix inputs.

use serde::Serialize;
use std::collections::HashSet;

/// Text shown in place of entries when a query matches nothing.
pub const NO_RESULTS_TEXT: &str = "No results found";

/// What a filtered dropdown should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum MenuEntries {
    /// Matching candidates, in candidate order
    Items(Vec<String>),
    /// The query matched nothing. Not an error; render it distinctly from an entry.
    NoResults,
}

impl MenuEntries {
    /// Entries to list, empty for `NoResults`.
    pub fn items(&self) -> &[String] {
        match self {
            MenuEntries::Items(items) => items,
            MenuEntries::NoResults => &[],
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, MenuEntries::NoResults)
    }
}

/// Remove blanks and duplicates, keeping first-seen order.
pub fn distinct_values<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for value in values {
        let value: String = value.into();
        if value.trim().is_empty() {
            continue;
        }
        if seen.insert(value.clone()) {
            result.push(value);
        }
    }
    result
}

/// Parse a `/unique-pollutants` or `/unique-matrices` response body.
///
/// `null` bodies and `null` entries are tolerated; the result is passed
/// through [`distinct_values`].
pub fn parse_value_list(body: &str) -> Result<Vec<String>, serde_json::Error> {
    let values: Option<Vec<Option<String>>> = serde_json::from_str(body)?;
    Ok(distinct_values(values.unwrap_or_default().into_iter().flatten()))
}

/// Case-insensitive substring filter over `candidates`.
///
/// A blank query returns the candidates unchanged. A non-blank query that
/// matches nothing returns [`MenuEntries::NoResults`].
pub fn filter_menu(query: &str, candidates: &[String]) -> MenuEntries {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return MenuEntries::Items(candidates.to_vec());
    }
    let matches: Vec<String> = candidates
        .iter()
        .filter(|c| c.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    if matches.is_empty() {
        MenuEntries::NoResults
    } else {
        MenuEntries::Items(matches)
    }
}
