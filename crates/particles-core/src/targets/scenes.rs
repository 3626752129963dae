//! Draw-command scenes behind the rasterized targets.

use crate::raster::{DrawCommand, RasterScene};
use std::f32::consts::PI;

/// A scene plus the world units per pixel used when sampling it.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskScene {
    pub scene: RasterScene,
    pub point_scale: f32,
}

fn three_lines(lines: [&str; 3], size_px: f32) -> RasterScene {
    let (width, height) = (500u32, 300u32);
    let w = width as f32;
    let h = height as f32;
    let rows = [h / 4.0, h / 2.0, h * 0.75];
    RasterScene {
        width,
        height,
        commands: lines
            .iter()
            .zip(rows)
            .map(|(text, y)| DrawCommand::text(*text, w / 2.0, y, size_px))
            .collect(),
    }
}

/// Shown for an open hand.
pub fn love_text() -> MaskScene {
    MaskScene {
        scene: three_lines(["LOVE U", "FROM", "NASRIL"], 50.0),
        point_scale: 0.05,
    }
}

/// Shown for the victory sign.
pub fn birthday_text() -> MaskScene {
    MaskScene {
        scene: three_lines(["HAPPY", "BIRTHDAY", "NANDA"], 60.0),
        point_scale: 0.05,
    }
}

/// Greeting above a rabbit head and a fox head, each with a caption.
/// Shown for a closed fist.
pub fn characters() -> MaskScene {
    let (width, height) = (600u32, 500u32);
    let mut commands = vec![DrawCommand::text("HALOO", width as f32 / 2.0, 60.0, 60.0)];

    let (rx, ry) = (180.0, 250.0);
    commands.extend([
        DrawCommand::Ellipse {
            cx: rx - 25.0,
            cy: ry - 70.0,
            rx: 15.0,
            ry: 60.0,
            rotation: -0.1,
        },
        DrawCommand::Ellipse {
            cx: rx + 25.0,
            cy: ry - 70.0,
            rx: 15.0,
            ry: 60.0,
            rotation: 0.1,
        },
        DrawCommand::circle(rx, ry, 55.0),
        DrawCommand::text("NANDA", rx, ry + 90.0, 30.0),
    ]);

    let (fx, fy) = (420.0, 250.0);
    commands.extend([
        DrawCommand::polygon(&[[fx - 50.0, fy - 40.0], [fx - 20.0, fy - 100.0], [fx, fy - 50.0]]),
        DrawCommand::polygon(&[[fx + 50.0, fy - 40.0], [fx + 20.0, fy - 100.0], [fx, fy - 50.0]]),
        DrawCommand::polygon(&[[fx - 55.0, fy - 20.0], [fx + 55.0, fy - 20.0], [fx, fy + 60.0]]),
        // upper half-disc for the cheeks
        DrawCommand::Arc {
            cx: fx,
            cy: fy - 20.0,
            radius: 50.0,
            start: 0.0,
            end: PI,
            anticlockwise: true,
        },
        DrawCommand::text("NASRIL", fx, fy + 90.0, 30.0),
    ]);

    MaskScene {
        scene: RasterScene {
            width,
            height,
            commands,
        },
        point_scale: 0.04,
    }
}
