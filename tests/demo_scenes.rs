// tests/demo_scenes.rs
//
// Drives every demo through the render harness with in-memory buffers.

use std::ops::Range;

use primitive_demos::demo_scene::Demo;
use primitive_demos::geometry::PrimitiveClass;
use primitive_demos::rendering_lib::{DrawPass, GeometryUploader, RenderContext, Vertex};
use primitive_demos::ShapeKind;

#[derive(Default)]
struct MemoryUploader {
    vertex_buffers: Vec<Vec<Vertex>>,
    index_buffers: Vec<Vec<u16>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Buffer {
    Vertices(usize),
    Indices(usize),
}

impl GeometryUploader for MemoryUploader {
    type Buffer = Buffer;

    fn upload_vertices(&mut self, _label: &str, vertices: &[Vertex]) -> Buffer {
        self.vertex_buffers.push(vertices.to_vec());
        Buffer::Vertices(self.vertex_buffers.len() - 1)
    }

    fn upload_indices(&mut self, _label: &str, indices: &[u16]) -> Buffer {
        self.index_buffers.push(indices.to_vec());
        Buffer::Indices(self.index_buffers.len() - 1)
    }
}

/// Resolves every draw into the triangles or lines it would rasterize.
struct Rasterizer<'u> {
    uploads: &'u MemoryUploader,
    bound: Option<(PrimitiveClass, Buffer, Option<Buffer>)>,
    triangles: Vec<[Vertex; 3]>,
    lines: Vec<[Vertex; 2]>,
}

impl<'u> Rasterizer<'u> {
    fn new(uploads: &'u MemoryUploader) -> Self {
        Self { uploads, bound: None, triangles: Vec::new(), lines: Vec::new() }
    }

    fn emit(&mut self, class: PrimitiveClass, vertices: Vec<Vertex>) {
        match class {
            PrimitiveClass::TriangleList => {
                assert_eq!(vertices.len() % 3, 0);
                self.triangles.extend(vertices.chunks(3).map(|t| [t[0], t[1], t[2]]));
            }
            PrimitiveClass::LineList => {
                assert_eq!(vertices.len() % 2, 0);
                self.lines.extend(vertices.chunks(2).map(|l| [l[0], l[1]]));
            }
        }
    }

    fn bound_vertices(&self) -> (PrimitiveClass, &'u [Vertex], Option<&'u [u16]>) {
        let uploads = self.uploads;
        let (class, vertices, indices) = self.bound.expect("draw without bind");
        let Buffer::Vertices(v) = vertices else { panic!("index buffer bound as vertices") };
        let indices = indices.map(|b| match b {
            Buffer::Indices(i) => uploads.index_buffers[i].as_slice(),
            Buffer::Vertices(_) => panic!("vertex buffer bound as indices"),
        });
        (class, uploads.vertex_buffers[v].as_slice(), indices)
    }
}

impl<'a, 'u> DrawPass<'a, Buffer> for Rasterizer<'u> {
    fn bind(&mut self, class: PrimitiveClass, vertices: &'a Buffer, indices: Option<&'a Buffer>) {
        self.bound = Some((class, *vertices, indices.copied()));
    }

    fn draw(&mut self, range: Range<u32>) {
        let (class, vertices, _) = self.bound_vertices();
        let picked = vertices[range.start as usize..range.end as usize].to_vec();
        self.emit(class, picked);
    }

    fn draw_indexed(&mut self, range: Range<u32>) {
        let (class, vertices, indices) = self.bound_vertices();
        let indices = indices.expect("indexed draw without index buffer");
        let picked = indices[range.start as usize..range.end as usize]
            .iter()
            .map(|&i| vertices[i as usize])
            .collect();
        self.emit(class, picked);
    }
}

fn rasterize(demo: Demo) -> (Vec<[Vertex; 3]>, Vec<[Vertex; 2]>) {
    let shapes = demo.shapes().unwrap();
    let mut uploader = MemoryUploader::default();
    let context = RenderContext::from_shapes(&mut uploader, &shapes).unwrap();
    let mut rasterizer = Rasterizer::new(&uploader);
    context.record(&mut rasterizer);
    (rasterizer.triangles, rasterizer.lines)
}

#[test]
fn blue_square_draws_two_triangles() {
    let (triangles, lines) = rasterize(Demo::BlueSquare);
    assert_eq!(triangles.len(), 2);
    assert!(lines.is_empty());
    assert!(triangles.iter().flatten().all(|v| v.color == [0.0, 0.0, 1.0]));
}

#[test]
fn picture_primitive_counts() {
    let (triangles, lines) = rasterize(Demo::Picture);
    // triangle + 6 squares of 2 + circle and ellipse fans of 98 each
    assert_eq!(triangles.len(), 1 + 6 * 2 + 98 + 98);
    assert_eq!(lines.len(), 1);
}

#[test]
fn centered_picture_fans_cover_full_rim() {
    let (triangles, _) = rasterize(Demo::PictureCentered);
    // center + 100 rim points + closing point gives 100 fan triangles per shape
    assert_eq!(triangles.len(), 1 + 6 * 2 + 100 + 100);
}

#[test]
fn shapes_are_addressable_by_kind() {
    let shapes = Demo::Picture.shapes().unwrap();
    let mut uploader = MemoryUploader::default();
    let context = RenderContext::from_shapes(&mut uploader, &shapes).unwrap();

    assert_eq!(context.len(), 5);
    assert!(context.shape(ShapeKind::Quad).is_none());
    let line = context.shape(ShapeKind::Line).unwrap();
    assert!(line.index_buffer.is_none());
    let circle = context.shape(ShapeKind::Circle).unwrap();
    assert!(circle.index_buffer.is_some());
}

#[test]
fn runs_tile_each_shape_vertex_list() {
    for demo in [Demo::BlueSquare, Demo::Picture, Demo::PictureCentered] {
        for shape in demo.shapes().unwrap() {
            let mut end = 0;
            for run in &shape.runs {
                assert_eq!(run.start, end, "{demo:?} {:?} has a gap or overlap", shape.kind);
                assert!(run.end > run.start, "{demo:?} {:?} has an empty run", shape.kind);
                end = run.end;
            }
            assert_eq!(end as usize, shape.vertex_count(), "{demo:?} {:?}", shape.kind);
        }
    }
}
