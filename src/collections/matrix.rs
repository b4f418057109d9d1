//! `Matrix` — a 2D dense matrix over one contiguous row-major buffer.
//!
//! Both the edge-cost table and the shortest-path table of the matrix engine
//! live here, so row scans (the inner loop of the Dijkstra selection) are
//! cache-friendly slices.

use std::ops::{Index, IndexMut};

/// A dense `rows x cols` matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Creates a new matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Returns a shared reference to the element at (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Returns a mutable row as a slice.
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&mut self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Overwrites every cell with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}
