// src/rendering_lib/harness.rs
//
// Backend-agnostic bookkeeping for uploaded shapes. The wgpu side lives in
// `renderer.rs`; tests drive the same code through recording mocks.

use std::ops::Range;

use crate::error::GeometryError;
use crate::generator::{Shape, ShapeKind};
use crate::geometry::{fan_indices, PrimitiveClass, Topology};
use super::vertex::Vertex;

/// Creates GPU buffers for static geometry.
pub trait GeometryUploader {
    type Buffer;

    fn upload_vertices(&mut self, label: &str, vertices: &[Vertex]) -> Self::Buffer;
    fn upload_indices(&mut self, label: &str, indices: &[u16]) -> Self::Buffer;
}

/// Receives the draw calls of one frame.
pub trait DrawPass<'a, B: 'a> {
    fn bind(&mut self, class: PrimitiveClass, vertices: &'a B, indices: Option<&'a B>);
    fn draw(&mut self, vertices: Range<u32>);
    fn draw_indexed(&mut self, indices: Range<u32>);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCall {
    Direct(Range<u32>),
    Indexed(Range<u32>),
}

pub struct GpuShape<B> {
    pub kind: ShapeKind,
    pub topology: Topology,
    pub vertex_buffer: B,
    pub index_buffer: Option<B>,
    pub draws: Vec<DrawCall>,
}

/// Owns every uploaded shape; draws them in insertion order.
pub struct RenderContext<B> {
    shapes: Vec<GpuShape<B>>,
}

impl<B> Default for RenderContext<B> {
    fn default() -> Self {
        Self { shapes: Vec::new() }
    }
}

impl<B> RenderContext<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shapes<U>(uploader: &mut U, shapes: &[Shape]) -> Result<Self, GeometryError>
    where
        U: GeometryUploader<Buffer = B>,
    {
        let mut context = Self::new();
        for shape in shapes {
            context.upload(uploader, shape)?;
        }
        Ok(context)
    }

    /// Uploads `shape`, replacing any shape of the same kind.
    pub fn upload<U>(&mut self, uploader: &mut U, shape: &Shape) -> Result<(), GeometryError>
    where
        U: GeometryUploader<Buffer = B>,
    {
        let name = shape.kind.name();
        let vertex_buffer = uploader.upload_vertices(name, &shape.vertices);

        let (index_buffer, draws) = if shape.topology.is_indexed() {
            let mut draws = Vec::with_capacity(shape.runs.len());
            let mut offset = 0u32;
            for run in &shape.runs {
                let count = fan_indices(std::slice::from_ref(run))?.len() as u32;
                if count > 0 {
                    draws.push(DrawCall::Indexed(offset..offset + count));
                }
                offset += count;
            }
            let indices = fan_indices(&shape.runs)?;
            (Some(uploader.upload_indices(name, &indices)), draws)
        } else {
            let draws = shape.runs.iter().cloned().map(DrawCall::Direct).collect();
            (None, draws)
        };

        log::debug!(
            "uploaded {name}: {} vertices, {} draw calls",
            shape.vertex_count(),
            draws.len()
        );

        let gpu_shape = GpuShape {
            kind: shape.kind,
            topology: shape.topology,
            vertex_buffer,
            index_buffer,
            draws,
        };
        match self.shapes.iter_mut().find(|s| s.kind == shape.kind) {
            Some(existing) => *existing = gpu_shape,
            None => self.shapes.push(gpu_shape),
        }
        Ok(())
    }

    pub fn shape(&self, kind: ShapeKind) -> Option<&GpuShape<B>> {
        self.shapes.iter().find(|s| s.kind == kind)
    }

    pub fn shapes(&self) -> impl Iterator<Item = &GpuShape<B>> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn record<'a, P>(&'a self, pass: &mut P)
    where
        B: 'a,
        P: DrawPass<'a, B>,
    {
        for shape in &self.shapes {
            if shape.draws.is_empty() {
                continue;
            }
            let class = shape.topology.primitive_class();
            pass.bind(class, &shape.vertex_buffer, shape.index_buffer.as_ref());
            for draw in &shape.draws {
                match draw {
                    DrawCall::Direct(range) => pass.draw(range.clone()),
                    DrawCall::Indexed(range) => pass.draw_indexed(range.clone()),
                }
            }
        }
    }
}
