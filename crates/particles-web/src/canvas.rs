use particles_core::{DrawCommand, PixelBuffer, RasterError, RasterScene, Rasterizer};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn surface_err(e: JsValue) -> RasterError {
    RasterError::SurfaceUnavailable(format!("{e:?}"))
}

/// Detached `<canvas>` with a 2D context, used to draw the text and
/// character masks with the browser's own fonts.
pub struct CanvasRasterizer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRasterizer {
    pub fn new() -> Result<Self, RasterError> {
        let document = web::window()
            .and_then(|w| w.document())
            .ok_or_else(|| RasterError::SurfaceUnavailable("no document".into()))?;
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(surface_err)?
            .dyn_into()
            .map_err(|el: web::Element| surface_err(el.into()))?;
        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(surface_err)?
            .ok_or_else(|| RasterError::SurfaceUnavailable("2d context refused".into()))?
            .dyn_into()
            .map_err(|obj: js_sys::Object| surface_err(obj.into()))?;
        Ok(Self { canvas, ctx })
    }

    fn draw(&self, cmd: &DrawCommand) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCommand::Text {
                text,
                x,
                y,
                size_px,
            } => {
                ctx.set_font(&format!("bold {size_px}px Arial"));
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.fill_text(text, *x as f64, *y as f64)?;
            }
            DrawCommand::Ellipse {
                cx,
                cy,
                rx,
                ry,
                rotation,
            } => {
                ctx.begin_path();
                ctx.ellipse(
                    *cx as f64,
                    *cy as f64,
                    *rx as f64,
                    *ry as f64,
                    *rotation as f64,
                    0.0,
                    TAU,
                )?;
                ctx.fill();
            }
            DrawCommand::Polygon { points } => {
                let Some((first, rest)) = points.split_first() else {
                    return Ok(());
                };
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for p in rest {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                ctx.close_path();
                ctx.fill();
            }
            DrawCommand::Arc {
                cx,
                cy,
                radius,
                start,
                end,
                anticlockwise,
            } => {
                ctx.begin_path();
                ctx.arc_with_anticlockwise(
                    *cx as f64,
                    *cy as f64,
                    *radius as f64,
                    *start as f64,
                    *end as f64,
                    *anticlockwise,
                )?;
                ctx.fill();
            }
        }
        Ok(())
    }
}

impl Rasterizer for CanvasRasterizer {
    fn rasterize(&mut self, scene: &RasterScene) -> Result<PixelBuffer, RasterError> {
        self.canvas.set_width(scene.width);
        self.canvas.set_height(scene.height);
        let (w, h) = (scene.width as f64, scene.height as f64);

        self.ctx.set_fill_style_str("#000");
        self.ctx.fill_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style_str("#fff");
        for cmd in &scene.commands {
            self.draw(cmd).map_err(surface_err)?;
        }

        let image = self
            .ctx
            .get_image_data(0.0, 0.0, w, h)
            .map_err(surface_err)?;
        PixelBuffer::from_rgba(scene.width, scene.height, image.data().0)
    }
}
