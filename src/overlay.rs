//! Detection result model and bounding-box overlay geometry.
//!
//! The geometry here is DOM-free: given the source image dimensions reported
//! by the backend, the on-screen rendered size of the `<img>`, and the list of
//! detected faces, [`compute_overlay_geometry`] produces the draw commands for
//! the annotation canvas. The imperative step that executes them against a 2d
//! context lives in [`crate::canvas`].

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use serde::Deserialize;

/// Leg length of the L-shaped corner accents, in canvas pixels.
const CORNER_LEN: f64 = 20.0;

/// Label tag dimensions, in canvas pixels. The tag sits just above the box.
const LABEL_WIDTH: f64 = 100.0;
const LABEL_HEIGHT: f64 = 25.0;

/// One detected face, in source-image pixel coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaceBox {
    /// `[x1, y1, x2, y2]` with `x1 < x2`, `y1 < y2`.
    pub bbox: [f64; 4],
    /// Detector confidence in `[0, 1]`.
    pub confidence: f64,
    /// Box center `[x, y]`.
    pub center: [f64; 2],
}

/// Result of one detection request. Held until a new image is selected or a
/// new detection runs, then replaced wholesale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectionResult {
    pub face_count: u32,
    /// `[width, height]` of the image as processed by the backend.
    pub image_size: [u32; 2],
    pub faces: Vec<FaceBox>,
}

/// A point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One primitive to draw on the annotation canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Highlighted rectangle around a face.
    Outline {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// L-shaped corner accent: three points forming two joined strokes.
    Corner { points: [Point; 3] },
    /// Filled label tag above the box: face number plus confidence.
    Label {
        x: f64,
        y: f64,
        title: String,
        detail: String,
    },
}

/// Compute the overlay for `faces`, scaled from source-image space into the
/// rendered size of the on-screen image.
///
/// Returns no commands when there is nothing to draw or when the reported
/// image size is degenerate (a zero dimension would make the scale factors
/// meaningless).
///
/// The output is a pure function of its inputs, so re-running it after a
/// resize (with the new rendered size) is all that overlay tracking needs.
pub fn compute_overlay_geometry(
    image_size: [u32; 2],
    rendered_width: f64,
    rendered_height: f64,
    faces: &[FaceBox],
) -> Vec<DrawCommand> {
    if faces.is_empty() || image_size[0] == 0 || image_size[1] == 0 {
        return Vec::new();
    }

    let scale_x = rendered_width / f64::from(image_size[0]);
    let scale_y = rendered_height / f64::from(image_size[1]);

    let mut commands = Vec::with_capacity(faces.len() * 6);
    for (index, face) in faces.iter().enumerate() {
        let [x1, y1, x2, y2] = face.bbox;
        let x = x1 * scale_x;
        let y = y1 * scale_y;
        let width = (x2 - x1) * scale_x;
        let height = (y2 - y1) * scale_y;

        commands.push(DrawCommand::Outline {
            x,
            y,
            width,
            height,
        });

        // Corner accents, clockwise from top-left. Each is an L whose elbow
        // sits on the box corner.
        commands.push(corner(
            Point {
                x,
                y: y + CORNER_LEN,
            },
            Point { x, y },
            Point {
                x: x + CORNER_LEN,
                y,
            },
        ));
        commands.push(corner(
            Point {
                x: x + width - CORNER_LEN,
                y,
            },
            Point { x: x + width, y },
            Point {
                x: x + width,
                y: y + CORNER_LEN,
            },
        ));
        commands.push(corner(
            Point {
                x,
                y: y + height - CORNER_LEN,
            },
            Point { x, y: y + height },
            Point {
                x: x + CORNER_LEN,
                y: y + height,
            },
        ));
        commands.push(corner(
            Point {
                x: x + width - CORNER_LEN,
                y: y + height,
            },
            Point {
                x: x + width,
                y: y + height,
            },
            Point {
                x: x + width,
                y: y + height - CORNER_LEN,
            },
        ));

        commands.push(DrawCommand::Label {
            x,
            y,
            title: format!("Face {}", index + 1),
            detail: format!("{:.1}%", face.confidence * 100.0),
        });
    }
    commands
}

/// Size of the label tag background, shared with the draw adapter.
pub fn label_tag_size() -> (f64, f64) {
    (LABEL_WIDTH, LABEL_HEIGHT)
}

fn corner(a: Point, b: Point, c: Point) -> DrawCommand {
    DrawCommand::Corner { points: [a, b, c] }
}
