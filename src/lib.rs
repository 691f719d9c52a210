// src/lib.rs

pub mod app;
pub mod config;
pub mod demo_scene;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod logging;
pub mod rendering_lib;

pub use app::run;
pub use demo_scene::Demo;
pub use error::{GeometryError, InitError, ShaderError};
pub use generator::{Fill, Shape, ShapeGenerator, ShapeKind};
