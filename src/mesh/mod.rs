//! Mesh representation.
//!
//! Provides the edge-centred view of an unstructured horizontal mesh:
//! - Cell and vertex connectivity of each edge
//! - Distances between the cells and vertices of each edge
//! - The vertical sigma levels shared by every column
//! - A structured quadrilateral generator for tests and benchmarks

mod geometry;

pub use geometry::MeshGeometry;
