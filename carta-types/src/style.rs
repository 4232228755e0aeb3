//! Map style document with the metadata extensions used by realtime layers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Highest zoom level considered when looking up a graph.
pub const MAX_GRAPH_ZOOM: i64 = 25;

/// A map style document.
///
/// Everything except `metadata` is kept as an open JSON object, so any style understood by the
/// mapping engine round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSpecification {
    /// Style metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<StyleMetadata>,
    /// All other style properties (`version`, `sources`, `layers`, ...).
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl StyleSpecification {
    /// Graph mapping of the style, if the style declares one.
    pub fn graphs(&self) -> Option<&BTreeMap<i64, String>> {
        self.metadata.as_ref()?.graphs.as_ref()
    }
}

/// The `metadata` object of a style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleMetadata {
    /// Zoom level to graph name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphs: Option<BTreeMap<i64, String>>,
    /// Other metadata entries.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl StyleMetadata {
    /// Returns the graph to use at the given zoom level.
    ///
    /// The zoom is floored and clamped to `1..=MAX_GRAPH_ZOOM`. The graph with the largest key not
    /// exceeding that level is returned.
    pub fn graph_for_zoom(&self, zoom: f64) -> Option<&str> {
        let level = if zoom.is_finite() && zoom >= 1.0 {
            (zoom.floor() as i64).min(MAX_GRAPH_ZOOM)
        } else {
            1
        };

        self.graphs
            .as_ref()?
            .range(..=level)
            .next_back()
            .map(|(_, graph)| graph.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: &str = r#"{
        "version": 8,
        "name": "travic",
        "sources": {},
        "layers": [],
        "metadata": {
            "graphs": { "1": "osm", "11": "np_topo", "15": "np_detail" },
            "mapbox:type": "template"
        }
    }"#;

    #[test]
    fn parses_graphs_metadata() {
        let style: StyleSpecification = serde_json::from_str(STYLE).unwrap();
        let graphs = style.graphs().unwrap();
        assert_eq!(graphs.len(), 3);
        assert_eq!(graphs[&11], "np_topo");
        assert_eq!(style.properties["version"], 8);

        let metadata = style.metadata.as_ref().unwrap();
        assert_eq!(metadata.other["mapbox:type"], "template");
    }

    #[test]
    fn style_without_metadata() {
        let style: StyleSpecification =
            serde_json::from_str(r#"{"version": 8, "layers": []}"#).unwrap();
        assert!(style.metadata.is_none());
        assert!(style.graphs().is_none());

        let json = serde_json::to_value(&style).unwrap();
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn round_trips_unknown_properties() {
        let style: StyleSpecification = serde_json::from_str(STYLE).unwrap();
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["name"], "travic");
        assert_eq!(json["metadata"]["graphs"]["15"], "np_detail");
    }

    #[test]
    fn graph_lookup_by_zoom() {
        let style: StyleSpecification = serde_json::from_str(STYLE).unwrap();
        let metadata = style.metadata.unwrap();

        assert_eq!(metadata.graph_for_zoom(0.0), Some("osm"));
        assert_eq!(metadata.graph_for_zoom(f64::NAN), Some("osm"));
        assert_eq!(metadata.graph_for_zoom(10.9), Some("osm"));
        assert_eq!(metadata.graph_for_zoom(11.0), Some("np_topo"));
        assert_eq!(metadata.graph_for_zoom(14.99), Some("np_topo"));
        assert_eq!(metadata.graph_for_zoom(40.0), Some("np_detail"));
    }

    #[test]
    fn graph_lookup_without_low_zoom_entry() {
        let metadata = StyleMetadata {
            graphs: Some([(5, "osm".to_string())].into_iter().collect()),
            other: Map::new(),
        };
        assert_eq!(metadata.graph_for_zoom(3.0), None);
        assert_eq!(metadata.graph_for_zoom(5.0), Some("osm"));
        assert_eq!(StyleMetadata::default().graph_for_zoom(5.0), None);
    }
}
