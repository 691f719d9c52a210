// src/geometry.rs

use std::f32::consts::{FRAC_PI_2, TAU};
use std::ops::Range;

use glam::Vec2;

use crate::error::GeometryError;

pub type Color = [f32; 3];

pub const WHITE: Color = [1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0];
pub const RED: Color = [1.0, 0.0, 0.0];
pub const GREEN: Color = [0.0, 1.0, 0.0];
pub const BLUE: Color = [0.0, 0.0, 1.0];

/// Largest vertex count addressable by a `u16` index buffer.
pub const MAX_INDEXED_VERTICES: usize = u16::MAX as usize + 1;

/// How the vertices of a shape are assembled into primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    Triangles,
    TriangleFan,
    Lines,
}

/// Topology as the GPU sees it. Fans have no GPU counterpart and are
/// triangulated into a triangle list through an index buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveClass {
    TriangleList,
    LineList,
}

impl Topology {
    pub fn primitive_class(self) -> PrimitiveClass {
        match self {
            Topology::Triangles | Topology::TriangleFan => PrimitiveClass::TriangleList,
            Topology::Lines => PrimitiveClass::LineList,
        }
    }

    pub fn is_indexed(self) -> bool {
        matches!(self, Topology::TriangleFan)
    }
}

fn check_closed(point_count: usize) -> Result<(), GeometryError> {
    if point_count < 3 {
        return Err(GeometryError::TooFewPoints(point_count));
    }
    Ok(())
}

/// Points of a regular polygon inscribed in a circle of radius `scale`.
///
/// Point `i` sits at angle `phase + 2π·i/n`, measured from +Y towards +X
/// (`center + scale·(sin a, cos a)`).
pub fn regular_polygon_points(
    center: Vec2,
    scale: f32,
    point_count: usize,
    phase: f32,
) -> Result<Vec<Vec2>, GeometryError> {
    check_closed(point_count)?;
    let step = TAU / point_count as f32;
    Ok((0..point_count)
        .map(|i| {
            let angle = phase + step * i as f32;
            center + scale * Vec2::new(angle.sin(), angle.cos())
        })
        .collect())
}

/// Points on an axis-aligned ellipse, starting at angle π/2 (the +X extreme)
/// and stepping by `2π/n`.
pub fn ellipse_points(
    center: Vec2,
    radius_x: f32,
    radius_y: f32,
    point_count: usize,
) -> Result<Vec<Vec2>, GeometryError> {
    check_closed(point_count)?;
    let step = TAU / point_count as f32;
    Ok((0..point_count)
        .map(|i| {
            let angle = FRAC_PI_2 + step * i as f32;
            center + Vec2::new(radius_x * angle.sin(), radius_y * angle.cos())
        })
        .collect())
}

/// Triangulates every fan run into `(first, first + k, first + k + 1)` triples.
/// Runs shorter than 3 vertices produce nothing.
pub fn fan_indices(runs: &[Range<u32>]) -> Result<Vec<u16>, GeometryError> {
    let mut indices = Vec::new();
    for run in runs {
        if run.end as usize > MAX_INDEXED_VERTICES {
            return Err(GeometryError::TooManyVertices(run.end as usize));
        }
        let len = run.end.saturating_sub(run.start);
        if len < 3 {
            continue;
        }
        for k in 1..len - 1 {
            for index in [run.start, run.start + k, run.start + k + 1] {
                indices.push(to_index(index)?);
            }
        }
    }
    Ok(indices)
}

fn to_index(index: u32) -> Result<u16, GeometryError> {
    u16::try_from(index).map_err(|_| GeometryError::TooManyVertices(index as usize + 1))
}
