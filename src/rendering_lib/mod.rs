// src/rendering_lib/mod.rs

pub mod harness;
pub mod renderer;
pub mod shader;
pub mod vertex;

pub use harness::{DrawCall, DrawPass, GeometryUploader, GpuShape, RenderContext};
pub use renderer::{Renderer, WgpuUploader};
pub use shader::{ShaderProgram, ShaderSources};
pub use vertex::Vertex;
