//! CPU-side mesh types and generators.
//!
//! - [`MeshVertex`] - Interleaved vertex (position, normal, tangent, uv)
//! - [`MeshData`] - CPU-side mesh data (vertices, indices, topology)
//! - Generators for the sphere strip, capture cube and full-screen quad

mod data;
pub mod generators;

pub use data::{MeshData, MeshVertex, PrimitiveTopology};
