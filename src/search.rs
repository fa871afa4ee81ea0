//! Query predicates deciding whether a record belongs to a filtered list.
//!
//! Every predicate treats an empty or whitespace-only query as "match
//! everything". Non-blank queries are compared case-insensitively and are
//! otherwise used verbatim, so a trailing space is part of the search term.

use std::borrow::Cow;

use serde::Serialize;

/// Decides whether `item` matches `query`.
pub trait SearchFilter<T: ?Sized> {
    fn matches(&self, item: &T, query: &str) -> bool;
}

impl<T: ?Sized, F> SearchFilter<T> for F
where
    F: Fn(&T, &str) -> bool,
{
    fn matches(&self, item: &T, query: &str) -> bool {
        is_blank(query) || self(item, query)
    }
}

/// Returns `true` when the query contains nothing to search for.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Default predicate: serializes the record to JSON and searches the text.
///
/// Records that fail to serialize never match a non-blank query.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerializedMatch;

impl<T: Serialize + ?Sized> SearchFilter<T> for SerializedMatch {
    fn matches(&self, item: &T, query: &str) -> bool {
        if is_blank(query) {
            return true;
        }
        match serde_json::to_string(item) {
            Ok(text) => contains_ignore_case(&text, query),
            Err(_) => false,
        }
    }
}

/// Records exposing the individual fields a list page searches.
pub trait Searchable {
    /// Field values to test, usually the zero-padded id followed by text
    /// columns. Empty values are allowed and never match a non-blank query.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

/// Field predicate: matches when any [`Searchable::search_fields`] value
/// contains the query.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldMatch;

impl<T: Searchable + ?Sized> SearchFilter<T> for FieldMatch {
    fn matches(&self, item: &T, query: &str) -> bool {
        if is_blank(query) {
            return true;
        }
        let needle = query.to_lowercase();
        item.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Item {
        id: i32,
        name: &'static str,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![
                Cow::Owned(crate::domain::types::padded_id(self.id)),
                Cow::Borrowed(self.name),
            ]
        }
    }

    #[test]
    fn blank_query_matches_everything() {
        let item = Item { id: 1, name: "Alpha" };
        assert!(SerializedMatch.matches(&item, ""));
        assert!(SerializedMatch.matches(&item, "   "));
        assert!(FieldMatch.matches(&item, "\t"));
        let never = |_: &Item, _: &str| false;
        assert!(never.matches(&item, " "));
    }

    #[test]
    fn serialized_match_is_case_insensitive() {
        let item = Item { id: 1, name: "Alpha" };
        assert!(SerializedMatch.matches(&item, "al"));
        assert!(SerializedMatch.matches(&item, "ALPHA"));
        assert!(!SerializedMatch.matches(&item, "beta"));
    }

    #[test]
    fn serialized_match_sees_field_names() {
        let item = Item { id: 1, name: "Alpha" };
        // The JSON text includes keys, so searching a key name matches.
        assert!(SerializedMatch.matches(&item, "name"));
    }

    #[test]
    fn field_match_checks_padded_id_and_fields() {
        let item = Item { id: 42, name: "Gamma" };
        assert!(FieldMatch.matches(&item, "00042"));
        assert!(FieldMatch.matches(&item, "gAm"));
        assert!(!FieldMatch.matches(&item, "name"));
    }

    #[test]
    fn query_is_not_trimmed_once_non_blank() {
        let item = Item { id: 1, name: "Alpha" };
        assert!(!FieldMatch.matches(&item, "alpha "));
    }

    #[test]
    fn closures_act_as_predicates() {
        let by_name = |item: &Item, query: &str| contains_ignore_case(item.name, query);
        let item = Item { id: 3, name: "Beta" };
        assert!(by_name.matches(&item, "ET"));
        assert!(!by_name.matches(&item, "x"));
    }
}
