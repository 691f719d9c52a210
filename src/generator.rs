// src/generator.rs

use std::f32::consts::FRAC_PI_4;
use std::fmt;
use std::ops::Range;

use glam::Vec2;

use crate::error::GeometryError;
use crate::geometry::{
    ellipse_points, regular_polygon_points, Color, Topology, BLACK, BLUE, GREEN,
    MAX_INDEXED_VERTICES, RED, WHITE,
};
use crate::rendering_lib::vertex::Vertex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Quad,
    Triangle,
    Squares,
    Line,
    Circle,
    Ellipse,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Quad => "quad",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Squares => "squares",
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coloring rule for round shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    /// Red channel follows the sweep fraction `i / n`, from 0 up to just below 1.
    Gradient,
    Solid(Color),
}

impl Fill {
    fn color(self, index: usize, count: usize) -> Color {
        match self {
            Fill::Gradient => [index as f32 / count as f32, 0.0, 0.0],
            Fill::Solid(color) => color,
        }
    }
}

/// Generated geometry for one shape. `runs` are the vertex ranges drawn as
/// separate primitives and always tile `vertices` in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub topology: Topology,
    pub vertices: Vec<Vertex>,
    pub runs: Vec<Range<u32>>,
}

impl Shape {
    fn single_run(
        kind: ShapeKind,
        topology: Topology,
        vertices: Vec<Vertex>,
    ) -> Result<Self, GeometryError> {
        let len = checked_len(vertices.len())?;
        Ok(Self { kind, topology, vertices, runs: vec![0..len] })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

fn checked_len(len: usize) -> Result<u32, GeometryError> {
    if len > MAX_INDEXED_VERTICES {
        return Err(GeometryError::TooManyVertices(len));
    }
    Ok(len as u32)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquaresParams {
    pub center: Vec2,
    pub ring_count: usize,
    pub initial_scale: f32,
    pub scale_step: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseParams {
    pub center: Vec2,
    pub radius_x: f32,
    pub radius_y: f32,
    pub point_count: usize,
    pub fill: Fill,
    /// Prepend the center and repeat the first rim point, giving `n + 2` vertices.
    pub centered: bool,
}

pub struct ShapeGenerator;

impl ShapeGenerator {
    /// Axis-aligned square of half-size 0.5 built from two triangles.
    pub fn quad(color: Color) -> Result<Shape, GeometryError> {
        let corners = [
            [-0.5, 0.5],
            [0.5, 0.5],
            [0.5, -0.5],
            [-0.5, 0.5],
            [0.5, -0.5],
            [-0.5, -0.5],
        ];
        let vertices = corners.iter().map(|&p| Vertex::new(p, color)).collect();
        Shape::single_run(ShapeKind::Quad, Topology::Triangles, vertices)
    }

    /// Upright triangle colored red, green, blue.
    pub fn triangle(center: Vec2, scale: f32) -> Result<Shape, GeometryError> {
        let points = regular_polygon_points(center, scale, 3, 0.0)?;
        let vertices = points
            .into_iter()
            .zip([RED, GREEN, BLUE])
            .map(|(p, color)| Vertex::at(p, color))
            .collect();
        Shape::single_run(ShapeKind::Triangle, Topology::Triangles, vertices)
    }

    /// Concentric squares, outermost first, alternating white and black.
    /// Scales strictly decrease, so more than one ring needs a positive step.
    pub fn nested_squares(params: &SquaresParams) -> Result<Shape, GeometryError> {
        if params.ring_count > 1 && (params.scale_step.is_nan() || params.scale_step <= 0.0) {
            return Err(GeometryError::NonPositiveStep(params.scale_step));
        }
        let vertex_count = params
            .ring_count
            .checked_mul(4)
            .ok_or(GeometryError::TooManyVertices(usize::MAX))?;
        checked_len(vertex_count)?;
        let mut vertices = Vec::with_capacity(vertex_count);
        let mut runs = Vec::with_capacity(params.ring_count);
        for ring in 0..params.ring_count {
            let scale = Self::ring_scale(params, ring);
            let color = Self::ring_color(ring);
            let start = vertices.len() as u32;
            for p in regular_polygon_points(params.center, scale, 4, FRAC_PI_4)? {
                vertices.push(Vertex::at(p, color));
            }
            runs.push(start..vertices.len() as u32);
        }
        Ok(Shape { kind: ShapeKind::Squares, topology: Topology::TriangleFan, vertices, runs })
    }

    pub fn ring_scale(params: &SquaresParams, ring: usize) -> f32 {
        params.initial_scale - params.scale_step * ring as f32
    }

    pub fn ring_color(ring: usize) -> Color {
        if ring % 2 == 0 { WHITE } else { BLACK }
    }

    /// Diagonal line across the whole viewport, white to blue.
    pub fn line() -> Result<Shape, GeometryError> {
        let vertices = vec![Vertex::new([-1.0, -1.0], WHITE), Vertex::new([1.0, 1.0], BLUE)];
        Shape::single_run(ShapeKind::Line, Topology::Lines, vertices)
    }

    pub fn circle(
        center: Vec2,
        radius: f32,
        point_count: usize,
        fill: Fill,
    ) -> Result<Shape, GeometryError> {
        let params = EllipseParams {
            center,
            radius_x: radius,
            radius_y: radius,
            point_count,
            fill,
            centered: false,
        };
        Self::ellipse_shape(ShapeKind::Circle, &params)
    }

    pub fn ellipse(params: &EllipseParams) -> Result<Shape, GeometryError> {
        Self::ellipse_shape(ShapeKind::Ellipse, params)
    }

    pub fn ellipse_shape(kind: ShapeKind, params: &EllipseParams) -> Result<Shape, GeometryError> {
        let n = params.point_count;
        let points = ellipse_points(params.center, params.radius_x, params.radius_y, n)?;
        let mut vertices = Vec::with_capacity(n + 2);
        // A gradient fan has a white hub; a solid fan uses its tint throughout.
        if params.centered {
            let center_color = match params.fill {
                Fill::Gradient => WHITE,
                Fill::Solid(color) => color,
            };
            vertices.push(Vertex::at(params.center, center_color));
        }
        for (i, p) in points.iter().enumerate() {
            vertices.push(Vertex::at(*p, params.fill.color(i, n)));
        }
        if params.centered {
            vertices.push(Vertex::at(points[0], params.fill.color(0, n)));
        }
        Shape::single_run(kind, Topology::TriangleFan, vertices)
    }
}
