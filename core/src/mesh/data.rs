//! CPU-side mesh data structures.
//!
//! This module provides:
//! - [`PrimitiveTopology`] - How vertices are assembled into primitives
//! - [`MeshVertex`] - Interleaved position / normal / tangent / uv vertex
//! - [`MeshData`] - Vertices, optional indices and topology

/// Primitive topology describing how vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Every three vertices form a triangle.
    #[default]
    TriangleList,
    /// Vertices form a connected strip of triangles.
    TriangleStrip,
}

impl PrimitiveTopology {
    /// Number of triangles assembled from `element_count` vertices or indices.
    pub fn triangle_count(&self, element_count: u32) -> u32 {
        match self {
            Self::TriangleList => element_count / 3,
            Self::TriangleStrip => element_count.saturating_sub(2),
        }
    }
}

/// Interleaved vertex matching the PBR shader's input layout.
///
/// 44 bytes: position (12), normal (12), tangent (12), uv (8).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tangent: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    /// Size of one vertex in bytes.
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    /// Byte offsets of (position, normal, tangent, uv).
    pub const ATTRIBUTE_OFFSETS: [usize; 4] = [0, 12, 24, 36];
}

/// CPU-side mesh ready for upload.
#[derive(Clone, Default)]
pub struct MeshData {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    topology: PrimitiveTopology,
    label: Option<String>,
}

impl MeshData {
    /// Create a non-indexed mesh.
    pub fn new(vertices: Vec<MeshVertex>, topology: PrimitiveTopology) -> Self {
        Self {
            vertices,
            indices: Vec::new(),
            topology,
            label: None,
        }
    }

    /// Set the index list.
    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = indices;
        self
    }

    /// Set the debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Number of elements a draw call consumes (indices if indexed, vertices otherwise).
    pub fn draw_count(&self) -> u32 {
        if self.is_indexed() {
            self.index_count()
        } else {
            self.vertex_count()
        }
    }

    pub fn triangle_count(&self) -> u32 {
        self.topology.triangle_count(self.draw_count())
    }

    /// Vertex buffer contents.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents (u32).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl std::fmt::Debug for MeshData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshData")
            .field("label", &self.label)
            .field("topology", &self.topology)
            .field("vertex_count", &self.vertex_count())
            .field("index_count", &self.index_count())
            .finish()
    }
}
