//! Listing search over posts and events.
//!
//! Two query languages exist for the public listings:
//!
//! - [`SearchMode::Attribute`]: a bare query matches titles, while
//!   `@tag term`, `@tags term` and `@content term` search that field.
//! - [`SearchMode::FullText`]: the query matches title, content, or tag.
//!
//! Matching is a case-insensitive substring test on the trimmed query. An
//! empty query matches everything.

use super::model::Searchable;

/// Query language for listing search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Title search with `@attribute` prefixes
    #[default]
    Attribute,
    /// Title, content, and tag search
    FullText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Criterion {
    Everything,
    Nothing,
    Title(String),
    Tag(String),
    Content(String),
    AnyField(String),
}

/// Parsed listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    criterion: Criterion,
}

impl SearchQuery {
    /// Parses raw search box input.
    pub fn parse(raw: &str, mode: SearchMode) -> Self {
        let query = raw.trim().to_lowercase();

        let criterion = if query.is_empty() {
            Criterion::Everything
        } else {
            match mode {
                SearchMode::FullText => Criterion::AnyField(query),
                SearchMode::Attribute => Self::parse_attribute(query),
            }
        };

        Self { criterion }
    }

    fn parse_attribute(query: String) -> Criterion {
        let Some(rest) = query.strip_prefix('@') else {
            return Criterion::Title(query);
        };

        let mut parts = rest.split(' ');
        let attribute = parts.next().unwrap_or("");
        let term = parts.collect::<Vec<_>>().join(" ");

        if term.is_empty() {
            return Criterion::Everything;
        }

        match attribute {
            "tag" | "tags" => Criterion::Tag(term),
            "content" => Criterion::Content(term),
            _ => Criterion::Nothing,
        }
    }

    /// Whether an item satisfies the query.
    pub fn matches(&self, item: &impl Searchable) -> bool {
        let contains = |field: &str, term: &str| field.to_lowercase().contains(term);

        match &self.criterion {
            Criterion::Everything => true,
            Criterion::Nothing => false,
            Criterion::Title(term) => contains(item.title(), term),
            Criterion::Tag(term) => item.tag().is_some_and(|tag| contains(tag, term)),
            Criterion::Content(term) => contains(item.content(), term),
            Criterion::AnyField(term) => {
                contains(item.title(), term)
                    || contains(item.content(), term)
                    || item.tag().is_some_and(|tag| contains(tag, term))
            }
        }
    }
}

/// Items matching `query`, in their original order.
pub fn filter<'a, T: Searchable>(items: impl IntoIterator<Item = &'a T>, query: &SearchQuery) -> Vec<&'a T>
where
    T: 'a,
{
    items.into_iter().filter(|item| query.matches(*item)).collect()
}
