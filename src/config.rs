// src/config.rs

use std::path::{Path, PathBuf};

use crate::demo_scene::Demo;

pub const SHADER_DIR_ENV: &str = "PRIMITIVE_DEMOS_SHADER_DIR";
pub const DEFAULT_SHADER_DIR: &str = "shaders";

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Primitives".to_string(), width: 500, height: 500 }
    }
}

/// Locations of the vertex and fragment stage sources.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderConfig {
    pub vertex_path: PathBuf,
    pub fragment_path: PathBuf,
}

impl ShaderConfig {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self { vertex_path: dir.join("vertex.wgsl"), fragment_path: dir.join("fragment.wgsl") }
    }
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_SHADER_DIR)
    }
}

#[derive(Debug, Clone)]
pub struct GpuConfig {
    /// OpenGL unless `WGPU_BACKEND` says otherwise.
    pub backends: wgpu::Backends,
    pub power_preference: wgpu::PowerPreference,
    pub present_mode: wgpu::PresentMode,
    /// The GL default framebuffer is linear, so non-sRGB formats are preferred.
    pub prefer_srgb: bool,
}

impl Default for GpuConfig {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::GL,
            power_preference: wgpu::PowerPreference::default(),
            present_mode: wgpu::PresentMode::Fifo,
            prefer_srgb: false,
        }
    }
}

impl GpuConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(backends) = wgpu::util::backend_bits_from_env() {
            config.backends = backends;
        }
        config
    }
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub shaders: ShaderConfig,
    pub gpu: GpuConfig,
    pub clear_color: wgpu::Color,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            shaders: ShaderConfig::default(),
            gpu: GpuConfig::default(),
            clear_color: wgpu::Color::BLACK,
        }
    }
}

impl DemoConfig {
    pub fn for_demo(demo: Demo) -> Self {
        Self {
            window: WindowConfig { title: demo.title().to_string(), ..WindowConfig::default() },
            ..Self::default()
        }
    }

    /// `for_demo` plus environment overrides for the backend and shader directory.
    pub fn from_env(demo: Demo) -> Self {
        let mut config = Self::for_demo(demo);
        config.gpu = GpuConfig::from_env();
        if let Ok(dir) = std::env::var(SHADER_DIR_ENV) {
            config.shaders = ShaderConfig::in_dir(dir);
        }
        config
    }
}
