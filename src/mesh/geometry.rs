//! Edge-centered mesh geometry.
//!
//! The geometry stores, per edge:
//! - The two adjacent cells (`cells_on_edge`)
//! - The two adjacent vertices (`vertices_on_edge`)
//! - The distance between the two cell centers (`dc_edge`)
//! - The distance between the two vertices (`dv_edge`)
//!
//! plus the vertical sigma levels shared by every edge.
//!
//! Edge convention: the positive normal direction of an edge points from
//! its first cell to its second cell. The cell-to-cell line and the
//! vertex-to-vertex line of an edge are orthogonal.

use crate::error::SiaError;
use crate::types::{CellIndex, EdgeIndex, VertexIndex};
use crate::vertical::SigmaLevels;

/// Immutable mesh geometry for one partition.
///
/// Built once per run by the host mesh layer. Adjacency of edges that are
/// never active (e.g. domain-boundary edges) may point outside the cell
/// and vertex arrays; only active edges are range-checked.
#[derive(Clone, Debug)]
pub struct MeshGeometry {
    /// Number of cells
    pub n_cells: usize,

    /// Number of vertices
    pub n_vertices: usize,

    /// Number of edges
    pub n_edges: usize,

    /// Edge-cell connectivity: cells_on_edge[e] = [c1, c2]
    pub cells_on_edge: Vec<[usize; 2]>,

    /// Edge-vertex connectivity: vertices_on_edge[e] = [v1, v2]
    pub vertices_on_edge: Vec<[usize; 2]>,

    /// Distance between the two cell centers of each edge
    pub dc_edge: Vec<f64>,

    /// Distance between the two vertices of each edge
    pub dv_edge: Vec<f64>,

    /// Layer-center sigma levels shared by every edge
    pub levels: SigmaLevels,

    /// Optional cell-center coordinates (x, y), empty if not supplied
    pub cell_positions: Vec<(f64, f64)>,

    /// Optional vertex coordinates (x, y), empty if not supplied
    pub vertex_positions: Vec<(f64, f64)>,
}

impl MeshGeometry {
    /// Assemble geometry from host-supplied arrays.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the per-edge arrays do not all have the same
    /// length.
    pub fn new(
        n_cells: usize,
        n_vertices: usize,
        cells_on_edge: Vec<[usize; 2]>,
        vertices_on_edge: Vec<[usize; 2]>,
        dc_edge: Vec<f64>,
        dv_edge: Vec<f64>,
        levels: SigmaLevels,
    ) -> Result<Self, SiaError> {
        let mesh = Self {
            n_cells,
            n_vertices,
            n_edges: cells_on_edge.len(),
            cells_on_edge,
            vertices_on_edge,
            dc_edge,
            dv_edge,
            levels,
            cell_positions: Vec::new(),
            vertex_positions: Vec::new(),
        };
        mesh.check_shapes()?;
        Ok(mesh)
    }

    /// Attach cell-center and vertex coordinates.
    pub fn with_positions(
        mut self,
        cell_positions: Vec<(f64, f64)>,
        vertex_positions: Vec<(f64, f64)>,
    ) -> Result<Self, SiaError> {
        check_len("cell_positions", self.n_cells, cell_positions.len())?;
        check_len("vertex_positions", self.n_vertices, vertex_positions.len())?;
        self.cell_positions = cell_positions;
        self.vertex_positions = vertex_positions;
        Ok(self)
    }

    /// Create a structured rectangular C-grid of `nx × ny` quad cells.
    ///
    /// Only interior edges are generated: every edge has two real cells and
    /// two real vertices. For an edge between horizontally adjacent cells
    /// the first cell is the western one and the first vertex the southern
    /// one; for vertically adjacent cells the first cell is the southern
    /// one and the first vertex the western one.
    ///
    /// # Arguments
    /// * `nx`, `ny` - number of cells in x and y
    /// * `dx`, `dy` - cell spacing in x and y
    /// * `levels` - vertical sigma levels
    ///
    /// ```
    /// use sia_rs::mesh::MeshGeometry;
    /// use sia_rs::vertical::SigmaLevels;
    ///
    /// let mesh = MeshGeometry::structured_quad(3, 2, 1000.0, 1000.0, SigmaLevels::uniform(5));
    /// assert_eq!(mesh.n_cells, 6);
    /// assert_eq!(mesh.n_vertices, 12);
    /// assert_eq!(mesh.n_edges, 2 * 2 + 3 * 1);
    /// ```
    pub fn structured_quad(nx: usize, ny: usize, dx: f64, dy: f64, levels: SigmaLevels) -> Self {
        assert!(
            nx > 0 && ny > 0,
            "Need at least one cell in each direction"
        );
        assert!(dx > 0.0 && dy > 0.0, "Cell spacing must be positive");

        let cell = |i: usize, j: usize| j * nx + i;
        let vertex = |i: usize, j: usize| j * (nx + 1) + i;

        let n_edges = (nx - 1) * ny + nx * (ny - 1);
        let mut cells_on_edge = Vec::with_capacity(n_edges);
        let mut vertices_on_edge = Vec::with_capacity(n_edges);
        let mut dc_edge = Vec::with_capacity(n_edges);
        let mut dv_edge = Vec::with_capacity(n_edges);

        // Edges with x-directed normals
        for j in 0..ny {
            for i in 0..nx - 1 {
                cells_on_edge.push([cell(i, j), cell(i + 1, j)]);
                vertices_on_edge.push([vertex(i + 1, j), vertex(i + 1, j + 1)]);
                dc_edge.push(dx);
                dv_edge.push(dy);
            }
        }

        // Edges with y-directed normals
        for j in 0..ny - 1 {
            for i in 0..nx {
                cells_on_edge.push([cell(i, j), cell(i, j + 1)]);
                vertices_on_edge.push([vertex(i, j + 1), vertex(i + 1, j + 1)]);
                dc_edge.push(dy);
                dv_edge.push(dx);
            }
        }

        let cell_positions = (0..ny)
            .flat_map(|j| (0..nx).map(move |i| ((i as f64 + 0.5) * dx, (j as f64 + 0.5) * dy)))
            .collect();
        let vertex_positions = (0..=ny)
            .flat_map(|j| (0..=nx).map(move |i| (i as f64 * dx, j as f64 * dy)))
            .collect();

        Self {
            n_cells: nx * ny,
            n_vertices: (nx + 1) * (ny + 1),
            n_edges,
            cells_on_edge,
            vertices_on_edge,
            dc_edge,
            dv_edge,
            levels,
            cell_positions,
            vertex_positions,
        }
    }

    /// Number of vertical levels.
    #[inline]
    pub fn n_levels(&self) -> usize {
        self.levels.n_levels()
    }

    /// The two cells adjacent to an edge.
    #[inline]
    pub fn cells_on_edge(&self, edge: EdgeIndex) -> (CellIndex, CellIndex) {
        let [c1, c2] = self.cells_on_edge[edge];
        (CellIndex::new(c1), CellIndex::new(c2))
    }

    /// The two vertices adjacent to an edge.
    #[inline]
    pub fn vertices_on_edge(&self, edge: EdgeIndex) -> (VertexIndex, VertexIndex) {
        let [v1, v2] = self.vertices_on_edge[edge];
        (VertexIndex::new(v1), VertexIndex::new(v2))
    }

    /// Check that every per-edge array has `n_edges` entries.
    pub fn check_shapes(&self) -> Result<(), SiaError> {
        check_len("cells_on_edge", self.n_edges, self.cells_on_edge.len())?;
        check_len("vertices_on_edge", self.n_edges, self.vertices_on_edge.len())?;
        check_len("dc_edge", self.n_edges, self.dc_edge.len())?;
        check_len("dv_edge", self.n_edges, self.dv_edge.len())?;
        Ok(())
    }

    /// Check that an edge's adjacency and distances can support a stencil.
    ///
    /// Called only for active edges.
    pub fn check_edge_stencil(&self, edge: EdgeIndex) -> Result<(), SiaError> {
        let e = edge.get();
        for &c in &self.cells_on_edge[e] {
            if c >= self.n_cells {
                return Err(SiaError::shape_mismatch(
                    format!("cells_on_edge[{}] (cell index bound)", e),
                    self.n_cells,
                    c,
                ));
            }
        }
        for &v in &self.vertices_on_edge[e] {
            if v >= self.n_vertices {
                return Err(SiaError::shape_mismatch(
                    format!("vertices_on_edge[{}] (vertex index bound)", e),
                    self.n_vertices,
                    v,
                ));
            }
        }
        check_distance("dc_edge", e, self.dc_edge[e])?;
        check_distance("dv_edge", e, self.dv_edge[e])?;
        Ok(())
    }
}

fn check_len(field: &str, expected: usize, actual: usize) -> Result<(), SiaError> {
    if expected != actual {
        return Err(SiaError::shape_mismatch(field, expected, actual));
    }
    Ok(())
}

fn check_distance(field: &str, edge: usize, value: f64) -> Result<(), SiaError> {
    // Also rejects NaN
    if !(value > 0.0 && value.is_finite()) {
        return Err(SiaError::invalid(
            format!("{}[{}]", field, edge),
            value,
            "must be positive on dynamic edges",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels() -> SigmaLevels {
        SigmaLevels::uniform(3)
    }

    #[test]
    fn test_structured_quad_counts() {
        let mesh = MeshGeometry::structured_quad(4, 3, 500.0, 250.0, levels());

        assert_eq!(mesh.n_cells, 12);
        assert_eq!(mesh.n_vertices, 20);
        assert_eq!(mesh.n_edges, 3 * 3 + 4 * 2);
        assert_eq!(mesh.n_levels(), 3);
        assert!(mesh.check_shapes().is_ok());
        assert_eq!(mesh.cell_positions.len(), 12);
        assert_eq!(mesh.vertex_positions.len(), 20);
    }

    #[test]
    fn test_structured_quad_edge_geometry() {
        let (dx, dy) = (500.0, 250.0);
        let mesh = MeshGeometry::structured_quad(2, 2, dx, dy, levels());

        for e in EdgeIndex::iter(mesh.n_edges) {
            let (c1, c2) = mesh.cells_on_edge(e);
            let (v1, v2) = mesh.vertices_on_edge(e);
            let p1 = mesh.cell_positions[c1];
            let p2 = mesh.cell_positions[c2];
            let q1 = mesh.vertex_positions[v1];
            let q2 = mesh.vertex_positions[v2];

            // dc and dv match the coordinates
            let dc = ((p2.0 - p1.0).powi(2) + (p2.1 - p1.1).powi(2)).sqrt();
            let dv = ((q2.0 - q1.0).powi(2) + (q2.1 - q1.1).powi(2)).sqrt();
            assert!((dc - mesh.dc_edge[e.get()]).abs() < 1e-12);
            assert!((dv - mesh.dv_edge[e.get()]).abs() < 1e-12);

            // Cell line and vertex line are orthogonal
            let dot = (p2.0 - p1.0) * (q2.0 - q1.0) + (p2.1 - p1.1) * (q2.1 - q1.1);
            assert!(dot.abs() < 1e-9, "Edge {} not orthogonal", e);

            assert!(mesh.check_edge_stencil(e).is_ok());
        }
    }

    #[test]
    fn test_single_cell_has_no_edges() {
        let mesh = MeshGeometry::structured_quad(1, 1, 1.0, 1.0, levels());
        assert_eq!(mesh.n_edges, 0);
    }

    #[test]
    fn test_new_rejects_inconsistent_lengths() {
        let err = MeshGeometry::new(
            2,
            2,
            vec![[0, 1]],
            vec![[0, 1]],
            vec![1.0, 1.0],
            vec![1.0],
            levels(),
        )
        .unwrap_err();
        assert_eq!(err, SiaError::shape_mismatch("dc_edge", 1, 2));
    }

    #[test]
    fn test_with_positions_checks_lengths() {
        let mesh = MeshGeometry::new(2, 2, vec![[0, 1]], vec![[0, 1]], vec![1.0], vec![1.0], levels())
            .unwrap();
        assert!(mesh.clone().with_positions(vec![(0.0, 0.0)], vec![(0.0, 0.0); 2]).is_err());
        assert!(mesh.with_positions(vec![(0.0, 0.0); 2], vec![(0.0, 0.0); 2]).is_ok());
    }

    #[test]
    fn test_edge_stencil_checks() {
        let mesh = MeshGeometry::new(
            2,
            2,
            vec![[0, 1], [0, 5], [0, 1]],
            vec![[0, 1], [0, 1], [0, 1]],
            vec![1.0, 1.0, 0.0],
            vec![1.0, 1.0, 1.0],
            levels(),
        )
        .unwrap();

        assert!(mesh.check_edge_stencil(EdgeIndex::new(0)).is_ok());
        assert!(matches!(
            mesh.check_edge_stencil(EdgeIndex::new(1)),
            Err(SiaError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            mesh.check_edge_stencil(EdgeIndex::new(2)),
            Err(SiaError::InvalidParameter { .. })
        ));
    }
}
