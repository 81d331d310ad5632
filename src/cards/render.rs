//! Rendering instructions for card faces.
//!
//! The engine never draws. It hands the presentation layer a closed,
//! data-only description of what a face looks like so every frontend
//! renders the same card the same way.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardColor, Shape};

/// Geometry drawn inside a card face's inset area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primitive {
    /// Circle centered in the area, diameter = shorter side.
    InscribedCircle,
    /// Square centered in the area, edge = shorter side.
    InscribedSquare,
    /// Both diagonals of the area.
    Diagonals,
    /// The whole area.
    FullRect,
}

/// How a primitive is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paint {
    Fill,
    Stroke { line_width: u32 },
}

/// Everything needed to draw one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceInstructions {
    pub primitive: Primitive,
    pub paint: Paint,
    /// Inset from the card edge to the drawing area, in points.
    pub margin: u32,
    pub corner_radius: u32,
}

const FACE_MARGIN: u32 = 10;
const CORNER_RADIUS: u32 = 20;
const CROSS_LINE_WIDTH: u32 = 5;

/// Map a shape to its drawing instructions.
#[must_use]
pub const fn face_instructions(shape: Shape) -> FaceInstructions {
    let (primitive, paint) = match shape {
        Shape::Circle => (Primitive::InscribedCircle, Paint::Fill),
        Shape::Square => (Primitive::InscribedSquare, Paint::Fill),
        Shape::Cross => (
            Primitive::Diagonals,
            Paint::Stroke {
                line_width: CROSS_LINE_WIDTH,
            },
        ),
        Shape::Fill => (Primitive::FullRect, Paint::Fill),
    };

    FaceInstructions {
        primitive,
        paint,
        margin: FACE_MARGIN,
        corner_radius: CORNER_RADIUS,
    }
}

impl CardColor {
    /// sRGB value for this palette entry.
    #[must_use]
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            CardColor::Black => [0, 0, 0],
            CardColor::Brown => [153, 102, 51],
            CardColor::Green => [0, 255, 0],
            CardColor::Gray => [128, 128, 128],
            CardColor::Yellow => [255, 255, 0],
            CardColor::Purple => [128, 0, 128],
            CardColor::Orange => [255, 128, 0],
            CardColor::Red => [255, 0, 0],
            CardColor::Blue => [0, 0, 255],
        }
    }
}

impl Card {
    /// Drawing instructions and color for this card's face.
    #[must_use]
    pub const fn face(&self) -> (FaceInstructions, [u8; 3]) {
        (face_instructions(self.shape), self.color.rgb())
    }
}
