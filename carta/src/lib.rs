//! Carta is a set of small helpers for map front-ends built on top of third-party mapping engines.
//!
//! The helpers do not render anything themselves. They work on data owned by the engine and
//! return plain values:
//!
//! * [`layer`] flattens nested layer trees and collects the copyright notices of visible layers.
//! * [`attribution`] collects the attributions of the sources the engine currently uses, keeping
//!   embedded links intact and each notice only once.
//! * [`dedup`] filters loosely typed values down to unique non-blank strings.
//! * [`url`] reads and writes query parameters.
//! * [`projection`] converts bounding boxes between geographic and web mercator coordinates.
//! * [`element`] creates the default elements of the map controls and the point marker bitmap.
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! use carta::attribution::{collect_copyrights, render_copyrights, SourceCacheEntry, SourceInfo};
//! use carta::element::copyright_element;
//!
//! let mut caches = HashMap::new();
//! caches.insert(
//!     "osm",
//!     SourceCacheEntry::new(true, SourceInfo::with_attribution("© OpenStreetMap contributors")),
//! );
//!
//! let line = render_copyrights(collect_copyrights(&caches), " | ");
//! let element = copyright_element().with_inner_html(line);
//! ```

pub mod attribution;
mod color;
pub mod dedup;
pub mod element;
pub mod error;
pub mod layer;
pub mod projection;
pub mod url;

// Reexport carta_types
pub use carta_types;
pub use color::Color;
pub use error::CartaError;
