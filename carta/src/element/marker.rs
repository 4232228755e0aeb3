//! Bitmap of the point marker.
//!
//! Rendering the marker is done once: [`marker_bitmap`] keeps a process-wide instance, and
//! [`MarkerCache`] does the same for an explicitly owned cache with a custom style.

use std::sync::{Arc, OnceLock};

use image::{Rgba, RgbaImage};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Color;

static DEFAULT_MARKER: OnceLock<RgbaImage> = OnceLock::new();

/// Appearance of the point marker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkerStyle {
    /// Radius of the filled circle in pixels.
    pub radius: f32,
    /// Width of the outline around the circle in pixels.
    pub stroke_width: f32,
    /// Fill color.
    pub fill: Color,
    /// Outline color.
    pub stroke: Color,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 6.0,
            stroke_width: 2.0,
            fill: Color::rgb(235, 0, 0),
            stroke: Color::WHITE,
        }
    }
}

impl MarkerStyle {
    /// Sets the radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the outline width.
    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the outline color.
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }

    /// Side of the square bitmap in pixels.
    pub fn size(&self) -> u32 {
        ((self.radius.max(0.0) + self.stroke_width.max(0.0)) * 2.0).ceil() as u32
    }

    /// Draws the marker into a new bitmap.
    pub fn render(&self) -> RgbaImage {
        let size = self.size();
        let center = size as f32 / 2.0;
        let radius = self.radius.max(0.0);
        let outer = radius + self.stroke_width.max(0.0);

        RgbaImage::from_fn(size, size, |x, y| {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let distance = (dx * dx + dy * dy).sqrt();

            let color = if distance <= radius {
                self.fill
            } else if distance <= outer {
                self.stroke
            } else {
                Color::TRANSPARENT
            };

            Rgba(color.to_u8_array())
        })
    }
}

/// Returns the process-wide marker bitmap with the default style.
///
/// The bitmap is rendered on the first call. All later calls return the same instance.
pub fn marker_bitmap() -> &'static RgbaImage {
    DEFAULT_MARKER.get_or_init(|| {
        log::debug!("Rendering default marker bitmap");
        MarkerStyle::default().render()
    })
}

/// Lazily rendered marker bitmap owned by the caller.
#[derive(Debug, Default)]
pub struct MarkerCache {
    style: MarkerStyle,
    bitmap: OnceLock<Arc<RgbaImage>>,
}

impl MarkerCache {
    /// Creates an empty cache for the given style. Nothing is rendered until the first
    /// [`MarkerCache::get`] call.
    pub fn new(style: MarkerStyle) -> Self {
        Self {
            style,
            bitmap: OnceLock::new(),
        }
    }

    /// Style of the cached marker.
    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    /// Returns true if the bitmap was already rendered.
    pub fn is_rendered(&self) -> bool {
        self.bitmap.get().is_some()
    }

    /// Returns the bitmap, rendering it on the first call.
    pub fn get(&self) -> Arc<RgbaImage> {
        self.bitmap
            .get_or_init(|| {
                log::debug!("Rendering marker bitmap with style {:?}", self.style);
                Arc::new(self.style.render())
            })
            .clone()
    }
}
