//! Off-screen 2D drawing used to turn text and simple vector art into
//! point-cloud targets.
//!
//! The drawing surface is a capability: the browser build draws with a
//! canvas 2D context, the native build and the tests use
//! [`SoftwareRasterizer`]. Tests can also hand over any [`PixelBuffer`]
//! directly.

mod software;
mod text;

pub use software::SoftwareRasterizer;

use crate::error::RasterError;
use glam::Vec2;

/// Tightly packed RGBA8 pixels, row-major, origin top-left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Opaque black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let mut data = vec![0u8; width as usize * height as usize * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RasterError> {
        if data.len() != width as usize * height as usize * 4 {
            return Err(RasterError::BufferSize {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Red channel at `(x, y)`; out-of-range reads are black.
    #[inline]
    pub fn red(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[self.offset(x, y)]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let o = self.offset(x, y);
        self.data[o..o + 4].copy_from_slice(&rgba);
    }
}

/// Filled white shape on a black surface. Coordinates are in pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Bold text centered horizontally and vertically on `(x, y)`.
    Text {
        text: String,
        x: f32,
        y: f32,
        size_px: f32,
    },
    /// Full ellipse rotated by `rotation` radians about its center.
    Ellipse {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        rotation: f32,
    },
    /// Closed polygon; the last point joins the first.
    Polygon { points: Vec<Vec2> },
    /// Circular arc closed by its chord, swept the same way as the canvas
    /// `arc()` call (angles clockwise on screen unless `anticlockwise`).
    Arc {
        cx: f32,
        cy: f32,
        radius: f32,
        start: f32,
        end: f32,
        anticlockwise: bool,
    },
}

impl DrawCommand {
    pub fn text(text: impl Into<String>, x: f32, y: f32, size_px: f32) -> Self {
        DrawCommand::Text {
            text: text.into(),
            x,
            y,
            size_px,
        }
    }

    pub fn circle(cx: f32, cy: f32, radius: f32) -> Self {
        DrawCommand::Ellipse {
            cx,
            cy,
            rx: radius,
            ry: radius,
            rotation: 0.0,
        }
    }

    pub fn polygon(points: &[[f32; 2]]) -> Self {
        DrawCommand::Polygon {
            points: points.iter().map(|p| Vec2::from(*p)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RasterScene {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<DrawCommand>,
}

pub trait Rasterizer {
    fn rasterize(&mut self, scene: &RasterScene) -> Result<PixelBuffer, RasterError>;
}

/// Hands back a prepared buffer regardless of the scene. Useful when the
/// mask comes from somewhere other than draw commands.
#[derive(Clone, Debug)]
pub struct FixedRasterizer {
    pub buffer: PixelBuffer,
}

impl Rasterizer for FixedRasterizer {
    fn rasterize(&mut self, _scene: &RasterScene) -> Result<PixelBuffer, RasterError> {
        Ok(self.buffer.clone())
    }
}
