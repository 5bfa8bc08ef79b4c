//! Annotation canvas adapter.
//!
//! This is the only module that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives the draw commands computed by [`crate::overlay`] and produces
//! pixels; it does not read or mutate any application state. Fallible
//! `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::overlay::{label_tag_size, DrawCommand};

/// Accent color for boxes, corners, and label tags.
const STROKE_COLOR: &str = "#00d4ff";
const LABEL_FILL: &str = "rgba(0, 212, 255, 0.9)";
const LABEL_TEXT_COLOR: &str = "#000";

const OUTLINE_WIDTH: f64 = 3.0;
const CORNER_WIDTH: f64 = 4.0;
const SHADOW_BLUR: f64 = 10.0;

const TITLE_FONT: &str = "bold 14px Inter, sans-serif";
const DETAIL_FONT: &str = "12px Inter, sans-serif";

/// Resize the canvas to the rendered image size, clear it, and execute the
/// commands in order. Always clearing first makes repeated invocations
/// idempotent and non-accumulating.
pub fn paint(
    canvas: &HtmlCanvasElement,
    width: f64,
    height: f64,
    commands: &[DrawCommand],
) -> Result<(), JsValue> {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    ctx.clear_rect(0.0, 0.0, width, height);

    for command in commands {
        match command {
            DrawCommand::Outline {
                x,
                y,
                width,
                height,
            } => {
                ctx.set_stroke_style_str(STROKE_COLOR);
                ctx.set_line_width(OUTLINE_WIDTH);
                ctx.set_shadow_color(STROKE_COLOR);
                ctx.set_shadow_blur(SHADOW_BLUR);
                ctx.stroke_rect(*x, *y, *width, *height);
            }
            DrawCommand::Corner { points } => {
                ctx.set_stroke_style_str(STROKE_COLOR);
                ctx.set_line_width(CORNER_WIDTH);
                ctx.set_shadow_color(STROKE_COLOR);
                ctx.set_shadow_blur(SHADOW_BLUR);
                ctx.begin_path();
                ctx.move_to(points[0].x, points[0].y);
                ctx.line_to(points[1].x, points[1].y);
                ctx.line_to(points[2].x, points[2].y);
                ctx.stroke();
            }
            DrawCommand::Label { x, y, title, detail } => {
                let (tag_w, tag_h) = label_tag_size();
                ctx.set_shadow_blur(0.0);
                ctx.set_fill_style_str(LABEL_FILL);
                ctx.fill_rect(*x, *y - tag_h - 5.0, tag_w, tag_h);

                ctx.set_fill_style_str(LABEL_TEXT_COLOR);
                ctx.set_font(TITLE_FONT);
                ctx.fill_text(title, *x + 5.0, *y - 10.0)?;
                ctx.set_font(DETAIL_FONT);
                ctx.fill_text(detail, *x + 65.0, *y - 10.0)?;
            }
        }
    }

    Ok(())
}
