// src/rendering_lib/shader.rs

use std::path::{Path, PathBuf};

use crate::config::ShaderConfig;
use crate::error::ShaderError;
use crate::geometry::PrimitiveClass;
use super::vertex::Vertex;

pub const VERTEX_ENTRY_POINT: &str = "vs_main";
pub const FRAGMENT_ENTRY_POINT: &str = "fs_main";

/// Raw stage sources, read once at startup.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: String,
    pub vertex_path: PathBuf,
    pub fragment: String,
    pub fragment_path: PathBuf,
}

impl ShaderSources {
    pub fn load(config: &ShaderConfig) -> Result<Self, ShaderError> {
        Ok(Self {
            vertex: read_source(&config.vertex_path)?,
            vertex_path: config.vertex_path.clone(),
            fragment: read_source(&config.fragment_path)?,
            fragment_path: config.fragment_path.clone(),
        })
    }
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path)
        .map_err(|source| ShaderError::Io { path: path.to_path_buf(), source })
}

/// Compiled vertex/fragment pair linked into one pipeline per primitive class.
pub struct ShaderProgram {
    triangle_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
}

impl ShaderProgram {
    pub async fn compile(
        device: &wgpu::Device,
        sources: &ShaderSources,
        target_format: wgpu::TextureFormat,
    ) -> Result<Self, ShaderError> {
        let vertex_module =
            compile_stage(device, "vertex", &sources.vertex, &sources.vertex_path).await?;
        let fragment_module =
            compile_stage(device, "fragment", &sources.fragment, &sources.fragment_path).await?;

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shape Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let stages = (&vertex_module, &fragment_module);
        let triangle_pipeline =
            create_pipeline(device, &layout, stages, target_format, PrimitiveClass::TriangleList);
        let line_pipeline =
            create_pipeline(device, &layout, stages, target_format, PrimitiveClass::LineList);
        if let Some(error) = device.pop_error_scope().await {
            return Err(ShaderError::Link(error.to_string()));
        }

        log::info!(
            "shader program ready ({} + {})",
            sources.vertex_path.display(),
            sources.fragment_path.display()
        );
        Ok(Self { triangle_pipeline, line_pipeline })
    }

    pub fn pipeline(&self, class: PrimitiveClass) -> &wgpu::RenderPipeline {
        match class {
            PrimitiveClass::TriangleList => &self.triangle_pipeline,
            PrimitiveClass::LineList => &self.line_pipeline,
        }
    }
}

async fn compile_stage(
    device: &wgpu::Device,
    stage: &'static str,
    source: &str,
    path: &Path,
) -> Result<wgpu::ShaderModule, ShaderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(stage),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    match device.pop_error_scope().await {
        Some(error) => Err(ShaderError::Compile {
            stage,
            path: path.to_path_buf(),
            message: error.to_string(),
        }),
        None => Ok(module),
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    (vertex_module, fragment_module): (&wgpu::ShaderModule, &wgpu::ShaderModule),
    target_format: wgpu::TextureFormat,
    class: PrimitiveClass,
) -> wgpu::RenderPipeline {
    let (label, topology) = match class {
        PrimitiveClass::TriangleList => {
            ("Triangle List Pipeline", wgpu::PrimitiveTopology::TriangleList)
        }
        PrimitiveClass::LineList => ("Line List Pipeline", wgpu::PrimitiveTopology::LineList),
    };
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: vertex_module,
            entry_point: VERTEX_ENTRY_POINT,
            buffers: &[Vertex::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: fragment_module,
            entry_point: FRAGMENT_ENTRY_POINT,
            targets: &[Some(wgpu::ColorTargetState {
                format: target_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_both_stages() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShaderConfig::in_dir(dir.path());
        std::fs::File::create(&config.vertex_path).unwrap().write_all(b"// vs").unwrap();
        std::fs::File::create(&config.fragment_path).unwrap().write_all(b"// fs").unwrap();

        let sources = ShaderSources::load(&config).unwrap();
        assert_eq!(sources.vertex, "// vs");
        assert_eq!(sources.fragment, "// fs");
        assert_eq!(sources.fragment_path, config.fragment_path);
    }

    #[test]
    fn missing_stage_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShaderConfig::in_dir(dir.path());
        std::fs::write(&config.vertex_path, "// vs").unwrap();

        match ShaderSources::load(&config) {
            Err(ShaderError::Io { path, .. }) => assert_eq!(path, config.fragment_path),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn bundled_shaders_declare_entry_points() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders");
        let sources = ShaderSources::load(&ShaderConfig::in_dir(dir)).unwrap();
        assert!(sources.vertex.contains(VERTEX_ENTRY_POINT));
        assert!(sources.fragment.contains(FRAGMENT_ENTRY_POINT));
    }
}
