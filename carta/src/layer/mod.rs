//! Layer trees and the helpers working on them.
//!
//! Mapping engines own their layers. The functions here only need the tree structure
//! ([`LayerNode`]) and, for copyright collection, visibility and copyright notices
//! ([`Attributed`]). [`Layer`] is a ready-made implementation of both.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dedup::unique_strings;

mod tree;

pub use tree::{flatten, preorder, LayerInput, LayerNode, Preorder};

/// A layer that may carry copyright notices.
pub trait Attributed {
    /// Whether the layer is currently visible.
    fn is_visible(&self) -> bool {
        true
    }

    /// Copyright notices of the layer.
    fn copyrights(&self) -> &[String];
}

/// Collects copyright notices of all visible layers of the tree.
///
/// Visibility is checked per layer, a hidden group does not hide the notices of its visible
/// children. The result contains no duplicates and no blank strings.
pub fn layer_copyrights<'a, T>(input: impl Into<LayerInput<'a, T>>) -> Vec<String>
where
    T: LayerNode + Attributed + 'a,
{
    unique_strings(
        preorder(input)
            .filter(|layer| layer.is_visible())
            .flat_map(|layer| layer.copyrights()),
    )
}

/// A generic map layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layer {
    /// Name of the layer.
    pub name: String,
    /// Whether the layer is visible.
    #[cfg_attr(feature = "serde", serde(default = "default_visible"))]
    pub visible: bool,
    /// Copyright notices of the layer data.
    #[cfg_attr(feature = "serde", serde(default))]
    pub copyrights: Vec<String>,
    /// Nested layers.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Layer>,
}

#[cfg(feature = "serde")]
fn default_visible() -> bool {
    true
}

impl Layer {
    /// Creates a new visible layer without children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            copyrights: vec![],
            children: vec![],
        }
    }

    /// Adds a child layer.
    pub fn with_child(mut self, child: Layer) -> Self {
        self.children.push(child);
        self
    }

    /// Adds a copyright notice.
    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyrights.push(copyright.into());
        self
    }

    /// Sets visibility of the layer.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl LayerNode for Layer {
    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl Attributed for Layer {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn copyrights(&self) -> &[String] {
        &self.copyrights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basemap() -> Layer {
        Layer::new("basemap")
            .with_copyright("© OpenStreetMap contributors")
            .with_child(Layer::new("labels").with_copyright("© swisstopo"))
            .with_child(
                Layer::new("hillshade")
                    .with_visible(false)
                    .with_copyright("© hidden"),
            )
    }

    #[test]
    fn flattens_layers() {
        let layers = vec![basemap(), Layer::new("realtime")];
        let names: Vec<_> = flatten(&layers)
            .into_iter()
            .map(|layer| layer.name.as_str())
            .collect();
        assert_eq!(names, vec!["basemap", "labels", "hillshade", "realtime"]);
    }

    #[test]
    fn collects_copyrights_of_visible_layers() {
        let layers = vec![
            basemap(),
            Layer::new("realtime")
                .with_copyright("© geOps")
                .with_copyright(" ")
                .with_copyright("© swisstopo"),
        ];

        assert_eq!(
            layer_copyrights(&layers),
            vec![
                "© OpenStreetMap contributors",
                "© swisstopo",
                "© geOps"
            ]
        );
    }

    #[test]
    fn hidden_group_keeps_visible_children() {
        let group = Layer::new("group")
            .with_visible(false)
            .with_copyright("© group")
            .with_child(Layer::new("child").with_copyright("© child"));

        assert_eq!(layer_copyrights(LayerInput::Single(&group)), vec!["© child"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_defaults() {
        let layer: Layer = serde_json::from_str(
            r#"{"name": "root", "children": [{"name": "child", "visible": false}]}"#,
        )
        .unwrap();

        assert!(layer.visible);
        assert!(layer.copyrights.is_empty());
        assert!(!layer.children[0].visible);
    }
}
