//! Deduplication of loosely typed string values.

use std::borrow::Cow;

use ahash::AHashSet;
use serde_json::Value;

/// A value that may carry a string.
///
/// Only string values pass through [`unique_strings`]; everything else is dropped.
pub trait TextValue {
    /// The string held by the value, if it holds one.
    fn text(&self) -> Option<&str>;
}

impl TextValue for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextValue for String {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextValue for Cow<'_, str> {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: TextValue + ?Sized> TextValue for &T {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

impl<T: TextValue> TextValue for Option<T> {
    fn text(&self) -> Option<&str> {
        self.as_ref()?.text()
    }
}

impl TextValue for Value {
    fn text(&self) -> Option<&str> {
        self.as_str()
    }
}

/// Filters the values down to unique non-blank strings.
///
/// Missing values, non-string values and strings that are empty after trimming are dropped. Of the
/// remaining strings the first occurrence of each is kept, in first-occurrence order. Kept strings
/// are not trimmed.
pub fn unique_strings<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: TextValue,
{
    let mut seen = AHashSet::new();
    let mut unique = vec![];

    for value in values {
        let Some(text) = value.text() else {
            continue;
        };

        if text.trim().is_empty() || seen.contains(text) {
            continue;
        }

        seen.insert(text.to_owned());
        unique.push(text.to_owned());
    }

    unique
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn drops_duplicates_and_missing_values() {
        let values = [Some("a"), Some("a"), Some(""), None, None, Some("b")];
        assert_eq!(unique_strings(values), vec!["a", "b"]);
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let values = ["c", "a", "c", "b", "a"];
        assert_eq!(unique_strings(values), vec!["c", "a", "b"]);
    }

    #[test]
    fn whitespace_only_is_dropped_but_kept_values_are_not_trimmed() {
        let values = vec![" ".to_string(), "\t\n".to_string(), " x ".to_string()];
        assert_eq!(unique_strings(&values), vec![" x "]);
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(unique_strings(["x", " x", "x"]), vec!["x", " x"]);
    }

    #[test]
    fn non_string_json_values_are_dropped() {
        let values = json!(["a", 1, null, true, {"a": 1}, ["a"], "a", "b", ""]);
        let Value::Array(values) = values else {
            unreachable!()
        };
        assert_eq!(unique_strings(&values), vec!["a", "b"]);
    }

    #[test]
    fn empty_input() {
        assert!(unique_strings(Vec::<String>::new()).is_empty());
    }
}
