// src/demo_scene.rs

use glam::Vec2;

use crate::error::GeometryError;
use crate::generator::{EllipseParams, Fill, Shape, ShapeGenerator, ShapeKind, SquaresParams};
use crate::geometry::{BLUE, RED};

pub const CIRCLE_NUM_POINTS: usize = 100;
pub const ELLIPSE_NUM_POINTS: usize = 100;
pub const SQUARE_NUM: usize = 6;

const TRIANGLE_CENTER: Vec2 = Vec2::new(0.0, 0.70);
const TRIANGLE_SCALE: f32 = 0.25;

pub const SQUARES: SquaresParams = SquaresParams {
    center: Vec2::new(0.0, -0.25),
    ring_count: SQUARE_NUM,
    initial_scale: 0.90,
    scale_step: 0.15,
};

const CIRCLE_CENTER: Vec2 = Vec2::new(0.65, 0.70);
const ELLIPSE_CENTER: Vec2 = Vec2::new(-0.65, 0.70);
const ROUND_RADIUS: f32 = 0.25;
const ELLIPSE_SQUASH: f32 = 0.50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demo {
    BlueSquare,
    Picture,
    /// Picture with circle and ellipse drawn as centered fans.
    PictureCentered,
}

impl Demo {
    pub fn title(self) -> &'static str {
        match self {
            Demo::BlueSquare => "Blue Square",
            Demo::Picture => "Primitives",
            Demo::PictureCentered => "Primitives (centered fans)",
        }
    }

    /// Shapes in draw order.
    pub fn shapes(self) -> Result<Vec<Shape>, GeometryError> {
        match self {
            Demo::BlueSquare => Ok(vec![ShapeGenerator::quad(BLUE)?]),
            Demo::Picture => picture(false),
            Demo::PictureCentered => picture(true),
        }
    }
}

fn picture(centered: bool) -> Result<Vec<Shape>, GeometryError> {
    let circle = EllipseParams {
        center: CIRCLE_CENTER,
        radius_x: ROUND_RADIUS,
        radius_y: ROUND_RADIUS,
        point_count: CIRCLE_NUM_POINTS,
        fill: Fill::Gradient,
        centered,
    };
    let ellipse = EllipseParams {
        center: ELLIPSE_CENTER,
        radius_x: ROUND_RADIUS,
        radius_y: ROUND_RADIUS * ELLIPSE_SQUASH,
        point_count: ELLIPSE_NUM_POINTS,
        fill: Fill::Solid(RED),
        centered,
    };

    Ok(vec![
        ShapeGenerator::triangle(TRIANGLE_CENTER, TRIANGLE_SCALE)?,
        ShapeGenerator::nested_squares(&SQUARES)?,
        ShapeGenerator::line()?,
        ShapeGenerator::ellipse_shape(ShapeKind::Circle, &circle)?,
        ShapeGenerator::ellipse(&ellipse)?,
    ])
}
