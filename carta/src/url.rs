//! Reading and writing query parameters of URL-like strings.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::CartaError;

/// Characters left unescaped when encoding a query component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Decoded query parameters.
///
/// Keys are unique and kept in order of their first occurrence. Setting an existing key replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    entries: Vec<(String, String)>,
}

impl UrlParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of the key, returning the previous value if the key was present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Value of the key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order of first occurrence.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UrlParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl IntoIterator for UrlParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Parses the query parameters of the given URL.
///
/// The query is the part between the first `?` and the next `?` (if any). Pairs are separated by
/// `&` and split at their first `=`. Pairs without a value or with an empty value are skipped.
/// Values are percent-decoded, keys are taken as is. If a key occurs several times, the last value
/// wins.
///
/// Malformed escapes and escapes decoding to invalid UTF-8 are returned as errors.
pub fn parse_url_params(url: &str) -> Result<UrlParams, CartaError> {
    let mut params = UrlParams::new();
    let Some(query) = url.split('?').nth(1) else {
        return Ok(params);
    };

    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };

        if value.is_empty() {
            log::trace!("Skipping url param '{key}' with empty value");
            continue;
        }

        params.insert(key, decode_component(value)?);
    }

    Ok(params)
}

/// Returns the URL with the given parameters set.
///
/// Parameters already present in the URL keep their position and (if not overridden) their raw
/// value. New keys are appended in the given order. Keys and values are percent-encoded. A
/// `#fragment` of the URL is preserved.
pub fn url_with_params<I, K, V>(url: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let (without_fragment, fragment) = match url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (url, None),
    };
    let (base, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));

    let mut pairs: Vec<(String, String)> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key.to_owned(), value.to_owned())
        })
        .collect();

    for (key, value) in params {
        let key = encode_component(key.as_ref());
        let value = encode_component(value.as_ref());
        match pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => pairs.push((key, value)),
        }
    }

    let mut result = base.to_owned();
    if !pairs.is_empty() {
        result.push('?');
        let query = pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        result.push_str(&query);
    }

    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }

    result
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn decode_component(value: &str) -> Result<String, CartaError> {
    let bytes = value.as_bytes();
    for (position, _) in value.match_indices('%') {
        let is_valid = matches!(
            bytes.get(position + 1..position + 3),
            Some([high, low]) if high.is_ascii_hexdigit() && low.is_ascii_hexdigit()
        );
        if !is_valid {
            return Err(CartaError::MalformedEncoding { position });
        }
    }

    Ok(percent_decode_str(value).decode_utf8()?.into_owned())
}
