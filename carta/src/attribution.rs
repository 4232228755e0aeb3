//! Copyright notices of the data sources shown on a map.
//!
//! Mapping engines keep a source cache per data source. A cache is "used" while the source
//! contributes to the rendered map, and the source may declare an attribution string. That string
//! can contain anchor markup, e.g. `© <a href="https://www.openstreetmap.org/copyright">OSM</a>`.
//! [`collect_copyrights`] turns all attributions of used sources into a list of unique fragments,
//! with every anchor kept verbatim as its own fragment.

use std::sync::OnceLock;

use regex::Regex;

use crate::dedup::unique_strings;

/// Separator used by [`render_copyrights`] when none is given.
pub const DEFAULT_SEPARATOR: &str = " | ";

/// A data source of the map.
pub trait Source {
    /// Attribution of the source, possibly containing anchor markup.
    fn attribution(&self) -> Option<&str>;
}

/// Engine-side cache of a data source.
pub trait SourceCache {
    /// Source type held by the cache.
    type Source: Source + ?Sized;

    /// Whether the source is in use by the current map state.
    fn is_used(&self) -> bool;

    /// The cached source.
    fn source(&self) -> &Self::Source;
}

/// Plain description of a data source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInfo {
    /// Attribution of the source.
    pub attribution: Option<String>,
}

impl SourceInfo {
    /// Creates a source with the given attribution.
    pub fn with_attribution(attribution: impl Into<String>) -> Self {
        Self {
            attribution: Some(attribution.into()),
        }
    }
}

impl Source for SourceInfo {
    fn attribution(&self) -> Option<&str> {
        self.attribution.as_deref()
    }
}

/// Plain source cache entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCacheEntry {
    /// Whether the source is in use.
    pub used: bool,
    /// The source.
    pub source: SourceInfo,
}

impl SourceCacheEntry {
    /// Creates a new entry.
    pub fn new(used: bool, source: SourceInfo) -> Self {
        Self { used, source }
    }
}

impl SourceCache for SourceCacheEntry {
    type Source = SourceInfo;

    fn is_used(&self) -> bool {
        self.used
    }

    fn source(&self) -> &SourceInfo {
        &self.source
    }
}

fn anchor_regex() -> &'static Regex {
    static ANCHOR: OnceLock<Regex> = OnceLock::new();
    ANCHOR.get_or_init(|| Regex::new(r"(?s)<a\b[^>]*>.*?</a>").expect("anchor regex is valid"))
}

/// Splits the text at anchor elements, keeping the anchors as separate fragments.
///
/// Text before, between and after anchors is returned as is, including empty strings at the
/// boundaries.
pub fn split_anchors(text: &str) -> Vec<&str> {
    let mut fragments = vec![];
    let mut last = 0;

    for anchor in anchor_regex().find_iter(text) {
        fragments.push(&text[last..anchor.start()]);
        fragments.push(anchor.as_str());
        last = anchor.end();
    }

    fragments.push(&text[last..]);
    fragments
}

/// Collects the copyright fragments of all used sources.
///
/// Source caches are visited in iteration order of the collection. Each non-empty attribution is
/// split with [`split_anchors`]. The fragments are then deduplicated by exact equality and blank
/// fragments are dropped, keeping first-occurrence order.
pub fn collect_copyrights<'a, K, C, I>(source_caches: I) -> Vec<String>
where
    I: IntoIterator<Item = (K, &'a C)>,
    C: SourceCache + ?Sized + 'a,
{
    let mut fragments = vec![];
    let mut used_count = 0;

    for (_, cache) in source_caches {
        if !cache.is_used() {
            continue;
        }

        used_count += 1;
        let Some(attribution) = cache.source().attribution() else {
            continue;
        };

        if !attribution.is_empty() {
            fragments.extend(split_anchors(attribution));
        }
    }

    let copyrights = unique_strings(fragments);
    log::trace!(
        "Collected {} copyright fragments from {used_count} used sources",
        copyrights.len()
    );

    copyrights
}

/// Joins copyright fragments into a single display line.
pub fn render_copyrights<I>(fragments: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fragments
        .into_iter()
        .map(|fragment| fragment.as_ref().trim().to_owned())
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
