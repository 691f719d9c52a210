// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("a closed shape needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    #[error("{0} vertices do not fit a 16-bit index buffer")]
    TooManyVertices(usize),
    #[error("nested rings need a positive scale step, got {0}")]
    NonPositiveStep(f32),
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("cannot read shader source {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{stage} shader {} failed to compile:\n{message}", path.display())]
    Compile {
        stage: &'static str,
        path: PathBuf,
        message: String,
    },
    #[error("shader program failed to link:\n{0}")]
    Link(String),
}

/// Startup failures. All of them end the process with a nonzero status.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter for backends {0:?}")]
    NoAdapter(wgpu::Backends),
    #[error("surface reports no supported texture format")]
    IncompatibleSurface,
    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeometryError),
}
