// Shared helpers for integration tests
#![allow(dead_code)]

use tile_fill::{
    ByteOffset, FillVertex, PaintMode, Point, Primitive, PrimitiveKind, Program, RenderBackend,
    Ring, Triangulator, VertexBinding,
};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateVertexBuffer { handle: usize, vertices: usize },
    CreateIndexBuffer { handle: usize, kind: PrimitiveKind, elements: usize, bytes: usize },
    Bind {
        program: Program,
        paint_mode: PaintMode,
        vertex_buffer: usize,
        index_buffer: usize,
        vertex_offset: ByteOffset,
    },
    Draw { kind: PrimitiveKind, index_count: usize, index_offset: ByteOffset },
}

/// Backend that records calls instead of talking to a GPU.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<Call>,
    /// Uploaded vertex data, by handle
    pub vertex_data: Vec<Vec<FillVertex>>,
    /// Uploaded index data as raw u16s, by handle
    pub index_data: Vec<Vec<u16>>,
    pub fail_draws: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draws(&self) -> Vec<(PrimitiveKind, usize, ByteOffset)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Draw { kind, index_count, index_offset } => Some((*kind, *index_count, *index_offset)),
                _ => None,
            })
            .collect()
    }

    pub fn binds(&self) -> Vec<(Program, PaintMode, ByteOffset)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Bind { program, paint_mode, vertex_offset, .. } => Some((*program, *paint_mode, *vertex_offset)),
                _ => None,
            })
            .collect()
    }
}

impl RenderBackend for RecordingBackend {
    type VertexBuffer = usize;
    type IndexBuffer = usize;

    fn create_vertex_buffer(&mut self, vertices: Vec<FillVertex>) -> anyhow::Result<usize> {
        let handle = self.vertex_data.len();
        self.calls.push(Call::CreateVertexBuffer { handle, vertices: vertices.len() });
        self.vertex_data.push(vertices);
        Ok(handle)
    }

    fn create_index_buffer<P: Primitive>(&mut self, primitives: Vec<P>) -> anyhow::Result<usize> {
        let handle = self.index_data.len();
        let raw: &[u16] = bytemuck::cast_slice(&primitives);
        self.calls.push(Call::CreateIndexBuffer {
            handle,
            kind: P::KIND,
            elements: primitives.len(),
            bytes: std::mem::size_of_val(primitives.as_slice()),
        });
        self.index_data.push(raw.to_vec());
        Ok(handle)
    }

    fn bind_vertex_layout(
        &mut self,
        binding: &VertexBinding,
        vertex_buffer: &usize,
        index_buffer: &usize,
        vertex_offset: ByteOffset,
    ) -> anyhow::Result<()> {
        self.calls.push(Call::Bind {
            program: binding.program,
            paint_mode: binding.paint_mode,
            vertex_buffer: *vertex_buffer,
            index_buffer: *index_buffer,
            vertex_offset,
        });
        Ok(())
    }

    fn draw_indexed(&mut self, kind: PrimitiveKind, index_count: usize, index_offset: ByteOffset) -> anyhow::Result<()> {
        if self.fail_draws {
            anyhow::bail!("draw rejected by test backend");
        }
        self.calls.push(Call::Draw { kind, index_count, index_offset });
        Ok(())
    }
}

/// Fan triangulation of the outer ring only. Cheap and predictable, for
/// tests that care about partitioning rather than triangle quality.
#[derive(Debug, Clone, Copy, Default)]
pub struct FanTriangulator;

impl Triangulator for FanTriangulator {
    fn triangulate(&self, rings: &[Ring]) -> Vec<u32> {
        let n = rings.first().map(Vec::len).unwrap_or(0) as u32;
        let mut indices = Vec::new();
        for i in 1..n.saturating_sub(1) {
            indices.extend_from_slice(&[0, i, i + 1]);
        }
        indices
    }
}

pub fn triangle(x: i16, y: i16) -> Ring {
    vec![Point::new(x, y), Point::new(x + 4, y), Point::new(x, y + 4)]
}

pub fn square(x: i16, y: i16, size: i16) -> Ring {
    vec![
        Point::new(x, y),
        Point::new(x + size, y),
        Point::new(x + size, y + size),
        Point::new(x, y + size),
    ]
}

/// `n` distinct points laid out row by row. Only the count matters.
pub fn long_ring(n: usize) -> Ring {
    (0..n)
        .map(|i| Point::new((i % 30_000) as i16, (i / 30_000) as i16))
        .collect()
}
