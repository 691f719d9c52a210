// src/rendering_lib/renderer.rs

use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::geometry::PrimitiveClass;
use super::harness::{DrawPass, GeometryUploader, RenderContext};
use super::shader::ShaderProgram;
use super::vertex::Vertex;

/// Uploads static geometry with `create_buffer_init`, which pads to the copy alignment.
pub struct WgpuUploader<'d> {
    device: &'d wgpu::Device,
}

impl<'d> WgpuUploader<'d> {
    pub fn new(device: &'d wgpu::Device) -> Self {
        Self { device }
    }
}

impl GeometryUploader for WgpuUploader<'_> {
    type Buffer = wgpu::Buffer;

    fn upload_vertices(&mut self, label: &str, vertices: &[Vertex]) -> wgpu::Buffer {
        let label = format!("{label} vertex buffer");
        self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label.as_str()),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        })
    }

    fn upload_indices(&mut self, label: &str, indices: &[u16]) -> wgpu::Buffer {
        let label = format!("{label} index buffer");
        self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label.as_str()),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        })
    }
}

struct WgpuPass<'a> {
    pass: wgpu::RenderPass<'a>,
    program: &'a ShaderProgram,
}

impl<'a> DrawPass<'a, wgpu::Buffer> for WgpuPass<'a> {
    fn bind(
        &mut self,
        class: PrimitiveClass,
        vertices: &'a wgpu::Buffer,
        indices: Option<&'a wgpu::Buffer>,
    ) {
        self.pass.set_pipeline(self.program.pipeline(class));
        self.pass.set_vertex_buffer(0, vertices.slice(..));
        if let Some(indices) = indices {
            self.pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint16);
        }
    }

    fn draw(&mut self, vertices: Range<u32>) {
        self.pass.draw(vertices, 0..1);
    }

    fn draw_indexed(&mut self, indices: Range<u32>) {
        self.pass.draw_indexed(indices, 0, 0..1);
    }
}

pub struct Renderer {
    program: ShaderProgram,
    context: RenderContext<wgpu::Buffer>,
}

impl Renderer {
    pub fn new(program: ShaderProgram, context: RenderContext<wgpu::Buffer>) -> Self {
        Self { program, context }
    }

    pub fn context(&self) -> &RenderContext<wgpu::Buffer> {
        &self.context
    }

    /// Clears `output_view` and draws every shape once.
    pub fn render_frame(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) {
        let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Shape Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        let mut pass = WgpuPass { pass: render_pass, program: &self.program };
        self.context.record(&mut pass);
    }
}
