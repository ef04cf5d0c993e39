//! Rendering backend seam
//!
//! The bucket never talks to a graphics API directly. Uploads and draws go
//! through `RenderBackend`, which hosts implement on top of their GPU context.
//! Binding configurations are plain data: each topology has four of them
//! (plain / pattern × regular / overdraw), fixed at compile time.

use serde::Serialize;

use crate::bucket::FillVertex;

/// Which index topology a buffer or draw call uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveKind {
    Lines,
    Triangles,
}

impl PrimitiveKind {
    /// Indices per element (segment or triangle).
    pub const fn indices_per_element(self) -> usize {
        match self {
            PrimitiveKind::Lines => 2,
            PrimitiveKind::Triangles => 3,
        }
    }
}

/// An index buffer element type: a fixed number of `u16` indices, laid out
/// contiguously so it can be uploaded as raw bytes.
pub trait Primitive: bytemuck::Pod + Send + Sync {
    const KIND: PrimitiveKind;
}

/// Shader programs a fill bucket can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Program {
    Fill,
    FillPattern,
    Outline,
    OutlinePattern,
}

/// Plain colour or pattern texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shading {
    Plain,
    Pattern,
}

/// Regular rendering or overdraw visualisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PaintMode {
    #[default]
    Regular,
    Overdraw,
}

/// Byte offset into a GPU buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct ByteOffset(pub usize);

impl ByteOffset {
    pub const ZERO: ByteOffset = ByteOffset(0);

    /// Offset moved past `count` items of `stride` bytes each.
    pub const fn advance(self, count: usize, stride: usize) -> ByteOffset {
        ByteOffset(self.0 + count * stride)
    }

    pub const fn bytes(self) -> usize {
        self.0
    }
}

/// How the shared vertex buffer is bound for one draw configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VertexBinding {
    pub program: Program,
    pub paint_mode: PaintMode,
    /// Bytes per vertex; the only attribute is the `i16` position at offset 0.
    pub stride: usize,
}

impl VertexBinding {
    pub const fn new(program: Program, paint_mode: PaintMode) -> Self {
        VertexBinding {
            program,
            paint_mode,
            stride: std::mem::size_of::<FillVertex>(),
        }
    }
}

/// The four binding configurations of one topology.
///
/// Slots: `[plain, plain overdraw, pattern, pattern overdraw]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingSet {
    configs: [VertexBinding; 4],
}

impl BindingSet {
    pub const fn new(plain: Program, pattern: Program) -> Self {
        BindingSet {
            configs: [
                VertexBinding::new(plain, PaintMode::Regular),
                VertexBinding::new(plain, PaintMode::Overdraw),
                VertexBinding::new(pattern, PaintMode::Regular),
                VertexBinding::new(pattern, PaintMode::Overdraw),
            ],
        }
    }

    pub const fn select(&self, shading: Shading, mode: PaintMode) -> &VertexBinding {
        let slot = match (shading, mode) {
            (Shading::Plain, PaintMode::Regular) => 0,
            (Shading::Plain, PaintMode::Overdraw) => 1,
            (Shading::Pattern, PaintMode::Regular) => 2,
            (Shading::Pattern, PaintMode::Overdraw) => 3,
        };
        &self.configs[slot]
    }

    pub fn iter(&self) -> impl Iterator<Item = &VertexBinding> {
        self.configs.iter()
    }
}

/// Bindings used for the triangulated fill.
pub const FILL_BINDINGS: BindingSet = BindingSet::new(Program::Fill, Program::FillPattern);

/// Bindings used for the ring outlines.
pub const OUTLINE_BINDINGS: BindingSet = BindingSet::new(Program::Outline, Program::OutlinePattern);

/// GPU resource allocation and draw submission.
///
/// Implementations own the buffers they create. Buffer creation takes the
/// data by value; the bucket keeps no copy.
pub trait RenderBackend {
    type VertexBuffer;
    type IndexBuffer;

    fn create_vertex_buffer(&mut self, vertices: Vec<FillVertex>) -> anyhow::Result<Self::VertexBuffer>;

    fn create_index_buffer<P: Primitive>(&mut self, primitives: Vec<P>) -> anyhow::Result<Self::IndexBuffer>;

    /// Bind the vertex layout for `binding`, with vertex 0 at `vertex_offset`.
    fn bind_vertex_layout(
        &mut self,
        binding: &VertexBinding,
        vertex_buffer: &Self::VertexBuffer,
        index_buffer: &Self::IndexBuffer,
        vertex_offset: ByteOffset,
    ) -> anyhow::Result<()>;

    /// Draw `index_count` `u16` indices starting at `index_offset` in the bound index buffer.
    fn draw_indexed(
        &mut self,
        primitive: PrimitiveKind,
        index_count: usize,
        index_offset: ByteOffset,
    ) -> anyhow::Result<()>;
}
