//! Reprojection of bounding boxes between geographic and web mercator coordinates.
//!
//! The transformation itself is done by the [`geodesy`] crate, this module only adapts the shapes:
//! bounding box → flat corner array → projected extent.

use carta_types::{CornerSource, Extent, LngLatBounds};
use geodesy::prelude::*;

use crate::error::CartaError;

/// Geodesy definition of the EPSG:4326 → EPSG:3857 conversion.
const WEB_MERCATOR_DEFINITION: &str = "webmerc";

/// Prepared EPSG:4326 → EPSG:3857 transformation.
///
/// Creating the operation parses its definition, so keep an instance around when reprojecting
/// many boxes.
pub struct Reprojector {
    context: Minimal,
    op: OpHandle,
}

impl Reprojector {
    /// Creates the web mercator transformation.
    pub fn web_mercator() -> Result<Self, CartaError> {
        let mut context = Minimal::new();
        let op = context.op(WEB_MERCATOR_DEFINITION)?;
        Ok(Self { context, op })
    }

    /// Converts a geographic bounding box into a projected extent in meters.
    pub fn to_projected(&self, bbox: &impl CornerSource) -> Result<Extent, CartaError> {
        let [west, south, east, north] = bbox.corners();
        let mut corners = [Coor2D::geo(south, west), Coor2D::geo(north, east)];
        self.context.apply(self.op, Fwd, &mut corners)?;

        let [min, max] = corners;
        Ok(Extent::new(min.0[0], min.0[1], max.0[0], max.0[1]))
    }

    /// Converts a projected extent in meters back into geographic bounds.
    pub fn to_geographic(&self, extent: &Extent) -> Result<LngLatBounds, CartaError> {
        let mut corners = [
            Coor2D::raw(extent.min_x, extent.min_y),
            Coor2D::raw(extent.max_x, extent.max_y),
        ];
        self.context.apply(self.op, Inv, &mut corners)?;

        let [min, max] = corners;
        Ok(LngLatBounds::new(
            min.0[0].to_degrees(),
            min.0[1].to_degrees(),
            max.0[0].to_degrees(),
            max.0[1].to_degrees(),
        ))
    }
}

/// Converts a geographic bounding box into a web mercator extent in meters.
pub fn to_web_mercator(bbox: &impl CornerSource) -> Result<Extent, CartaError> {
    Reprojector::web_mercator()?.to_projected(bbox)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const HALF_WORLD: f64 = 20_037_508.342_789_244;

    #[test]
    fn projects_world_width() {
        let extent = to_web_mercator(&LngLatBounds::new(-180.0, 0.0, 180.0, 0.0)).unwrap();
        assert_abs_diff_eq!(extent.min_x, -HALF_WORLD, epsilon = 1e-3);
        assert_abs_diff_eq!(extent.max_x, HALF_WORLD, epsilon = 1e-3);
        assert_abs_diff_eq!(extent.min_y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(extent.max_y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn web_mercator_square_limit() {
        let limit = 85.051_128_779_806_59;
        let extent = to_web_mercator(&[-180.0, -limit, 180.0, limit]).unwrap();
        assert_abs_diff_eq!(extent.min_y, -HALF_WORLD, epsilon = 1.0);
        assert_abs_diff_eq!(extent.max_y, HALF_WORLD, epsilon = 1.0);
    }

    #[test]
    fn round_trips_through_geographic() {
        let reprojector = Reprojector::web_mercator().unwrap();
        let bounds = LngLatBounds::new(5.9559, 45.818, 10.4921, 47.8084);

        let extent = reprojector.to_projected(&bounds).unwrap();
        assert!(extent.width() > 0.0);
        assert!(extent.height() > 0.0);

        let back = reprojector.to_geographic(&extent).unwrap();
        assert_abs_diff_eq!(back.west, bounds.west, epsilon = 1e-9);
        assert_abs_diff_eq!(back.south, bounds.south, epsilon = 1e-9);
        assert_abs_diff_eq!(back.east, bounds.east, epsilon = 1e-9);
        assert_abs_diff_eq!(back.north, bounds.north, epsilon = 1e-9);
    }
}
