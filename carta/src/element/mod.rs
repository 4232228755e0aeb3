//! Default display elements of the map controls.
//!
//! The elements are plain descriptions (tag, id, class, style table, content) that the embedding
//! front-end turns into real DOM nodes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Color;

pub mod marker;

/// Id of the default copyright element.
pub const COPYRIGHT_ELEMENT_ID: &str = "carta-copyright";

/// Class name of the default stop finder element.
pub const STOP_FINDER_CLASS: &str = "carta-stop-finder";

const STOP_FINDER_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("top", "0"),
    ("left", "50px"),
    ("margin", "10px"),
    ("display", "flex"),
    ("flex-direction", "column"),
];

/// A DOM-like display element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    tag: String,
    id: Option<String>,
    class_name: Option<String>,
    style: Vec<(String, String)>,
    inner_html: Option<String>,
}

impl Element {
    /// Creates an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Sets the id of the element.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the class name of the element.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Sets a style property. An existing value of the property is replaced in place.
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_style(property, value);
        self
    }

    /// Sets the HTML content of the element.
    pub fn with_inner_html(mut self, html: impl Into<String>) -> Self {
        self.inner_html = Some(html.into());
        self
    }

    /// Sets a style property. An existing value of the property is replaced in place.
    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.style.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.style.push((property, value)),
        }
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Id of the element.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Class name of the element.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// HTML content of the element.
    pub fn inner_html(&self) -> Option<&str> {
        self.inner_html.as_deref()
    }

    /// Value of a style property.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Style properties in the order they were set.
    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.style.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Style table as an inline CSS declaration list, e.g. `position: absolute; top: 0;`.
    pub fn css_text(&self) -> String {
        self.style
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Creates the default element holding the copyright line of the map.
pub fn copyright_element() -> Element {
    Element::new("div")
        .with_id(COPYRIGHT_ELEMENT_ID)
        .with_style("background", Color::WHITE.with_alpha(204).to_css())
        .with_style("bottom", "0")
        .with_style("font-size", ".8rem")
        .with_style("padding", "0 10px")
        .with_style("position", "absolute")
        .with_style("right", "0")
}

/// Creates the default container of the stop finder control.
pub fn stop_finder_element() -> Element {
    STOP_FINDER_STYLE.iter().fold(
        Element::new("div").with_class_name(STOP_FINDER_CLASS),
        |element, (property, value)| element.with_style(*property, *value),
    )
}
