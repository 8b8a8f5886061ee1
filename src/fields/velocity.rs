//! Per-edge, per-level normal velocity storage.

use crate::types::{EdgeIndex, LevelIndex};

/// Normal velocity at every (edge, level).
///
/// # Memory Layout
///
/// Edge-major: `data[e * n_levels + k]`. Each edge owns a contiguous
/// column of `n_levels` values, which lets the kernel hand disjoint
/// chunks to worker threads.
#[derive(Clone, Debug, PartialEq)]
pub struct VelocityField {
    /// Number of edges
    pub n_edges: usize,
    /// Number of vertical levels
    pub n_levels: usize,
    /// Flat storage, length n_edges * n_levels
    pub data: Vec<f64>,
}

impl VelocityField {
    /// Create a zero-initialized velocity field.
    pub fn zeros(n_edges: usize, n_levels: usize) -> Self {
        Self {
            n_edges,
            n_levels,
            data: vec![0.0; n_edges * n_levels],
        }
    }

    /// Velocity at one edge and level.
    #[inline]
    pub fn get(&self, edge: EdgeIndex, level: LevelIndex) -> f64 {
        self.data[edge.get() * self.n_levels + level.get()]
    }

    /// Set velocity at one edge and level.
    #[inline]
    pub fn set(&mut self, edge: EdgeIndex, level: LevelIndex, value: f64) {
        self.data[edge.get() * self.n_levels + level.get()] = value;
    }

    /// The column of velocities on one edge.
    #[inline]
    pub fn column(&self, edge: EdgeIndex) -> &[f64] {
        let start = edge.get() * self.n_levels;
        &self.data[start..start + self.n_levels]
    }

    /// Mutable column of velocities on one edge.
    #[inline]
    pub fn column_mut(&mut self, edge: EdgeIndex) -> &mut [f64] {
        let start = edge.get() * self.n_levels;
        &mut self.data[start..start + self.n_levels]
    }

    /// Check that the buffer length agrees with the stated dimensions.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.data.len() == self.n_edges * self.n_levels
    }

    /// Maximum absolute velocity over all edges and levels.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, &u| acc.max(u.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_edge_major() {
        let mut u = VelocityField::zeros(3, 2);
        u.set(EdgeIndex::new(1), LevelIndex::new(1), 5.0);

        assert_eq!(u.data[3], 5.0);
        assert_eq!(u.column(EdgeIndex::new(1)), &[0.0, 5.0]);
        assert_eq!(u.get(EdgeIndex::new(1), LevelIndex::new(1)), 5.0);
    }

    #[test]
    fn test_column_mut_and_max_abs() {
        let mut u = VelocityField::zeros(2, 3);
        u.column_mut(EdgeIndex::new(0)).copy_from_slice(&[1.0, -7.0, 2.0]);
        assert_eq!(u.max_abs(), 7.0);
        assert!(u.is_consistent());

        u.data.pop();
        assert!(!u.is_consistent());
    }
}
