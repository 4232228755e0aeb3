//! Data types shared between the `carta` helpers and the code calling them.
//!
//! * [`Extent`] and [`LngLatBounds`] describe rectangles in projected and geographic space.
//! * [`CornerSource`] is the capability the reprojection helper needs from a bounding box.
//! * [`StyleSpecification`] is a map style document extended with `metadata.graphs`.

mod extent;
pub mod style;

pub use extent::{CornerSource, Extent, LngLatBounds};
pub use style::{StyleMetadata, StyleSpecification};
