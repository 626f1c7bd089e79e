use crate::errors::MatrixError;

/// Sparse boolean matrix storing only its true cells.
///
/// Each row holds a sorted list of true column indices, the row-major shape
/// a CSR matrix flattens to. All binary operations return fresh matrices;
/// nothing is mutated after construction except through [`BoolMatrix::set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<usize>>,
}

impl BoolMatrix {
    /// Creates an all-false matrix of the given shape.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Vec::new(); rows],
        }
    }

    /// Creates the `n × n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for (i, row) in matrix.cells.iter_mut().enumerate() {
            row.push(i);
        }
        matrix
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Marks the cell `(row, col)` true. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::CellOutOfRange`] when the cell lies outside the
    /// matrix.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::CellOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let cells = &mut self.cells[row];
        if let Err(insert_at) = cells.binary_search(&col) {
            cells.insert(insert_at, col);
        }
        Ok(())
    }

    /// Returns whether the cell `(row, col)` is true. Cells outside the
    /// matrix are false.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .is_some_and(|cells| cells.binary_search(&col).is_ok())
    }

    /// Iterates the true columns of `row`, each exactly once, in ascending
    /// order.
    pub fn row_true_cols(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .get(row)
            .map_or(&[] as &[usize], Vec::as_slice)
            .iter()
            .copied()
    }

    /// Number of true cells.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    /// Element-wise OR of two equally shaped matrices.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] when shapes differ.
    pub fn or(&self, other: &BoolMatrix) -> Result<BoolMatrix, MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.dimension_mismatch(other));
        }
        let mut out = BoolMatrix::zeros(self.rows, self.cols);
        for (row, out_cells) in out.cells.iter_mut().enumerate() {
            let mut merged = self.cells[row].clone();
            merged.extend_from_slice(&other.cells[row]);
            merged.sort_unstable();
            merged.dedup();
            *out_cells = merged;
        }
        Ok(out)
    }

    /// Boolean semiring product: `out[i, k] = ∃ j. self[i, j] ∧ other[j, k]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] when the inner dimensions
    /// disagree.
    pub fn matmul(&self, other: &BoolMatrix) -> Result<BoolMatrix, MatrixError> {
        if self.cols != other.rows {
            return Err(self.dimension_mismatch(other));
        }
        let mut out = BoolMatrix::zeros(self.rows, other.cols);
        for (row, out_cells) in out.cells.iter_mut().enumerate() {
            let mut reached = Vec::new();
            for &mid in &self.cells[row] {
                reached.extend_from_slice(&other.cells[mid]);
            }
            reached.sort_unstable();
            reached.dedup();
            *out_cells = reached;
        }
        Ok(out)
    }

    /// Kronecker product: `out[i·rB + p, j·cB + q] = self[i, j] ∧ other[p, q]`
    /// where `other` is `rB × cB`.
    ///
    /// This block layout is what makes the product-state index identity
    /// `idx((a, b)) = idx(a)·rB + idx(b)` hold for intersected automata.
    #[must_use]
    pub fn kron(&self, other: &BoolMatrix) -> BoolMatrix {
        let mut out = BoolMatrix::zeros(self.rows * other.rows, self.cols * other.cols);
        for (i, self_cells) in self.cells.iter().enumerate() {
            if self_cells.is_empty() {
                continue;
            }
            for (p, other_cells) in other.cells.iter().enumerate() {
                let target = &mut out.cells[i * other.rows + p];
                for &j in self_cells {
                    for &q in other_cells {
                        target.push(j * other.cols + q);
                    }
                }
            }
        }
        out
    }

    /// Positive difference: `out[i, j] = self[i, j] ∧ ¬other[i, j]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] when shapes differ.
    pub fn diff_positive(&self, other: &BoolMatrix) -> Result<BoolMatrix, MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.dimension_mismatch(other));
        }
        let mut out = BoolMatrix::zeros(self.rows, self.cols);
        for (row, out_cells) in out.cells.iter_mut().enumerate() {
            let removed = &other.cells[row];
            *out_cells = self.cells[row]
                .iter()
                .copied()
                .filter(|col| removed.binary_search(col).is_err())
                .collect();
        }
        Ok(out)
    }

    /// `exp`-fold boolean self-product by repeated squaring. `pow(0)` is the
    /// identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for non-square matrices.
    pub fn pow(&self, mut exp: usize) -> Result<BoolMatrix, MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut result = BoolMatrix::identity(self.rows);
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.matmul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.matmul(&base)?;
            }
        }
        Ok(result)
    }

    fn dimension_mismatch(&self, other: &BoolMatrix) -> MatrixError {
        MatrixError::DimensionMismatch {
            left_rows: self.rows,
            left_cols: self.cols,
            right_rows: other.rows,
            right_cols: other.cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_cells(rows: usize, cols: usize, cells: &[(usize, usize)]) -> BoolMatrix {
        let mut matrix = BoolMatrix::zeros(rows, cols);
        for &(row, col) in cells {
            matrix.set(row, col).unwrap();
        }
        matrix
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut matrix = BoolMatrix::zeros(2, 2);
        matrix.set(0, 1).unwrap();
        matrix.set(0, 1).unwrap();
        assert_eq!(matrix.nnz(), 1);
        assert!(matrix.get(0, 1));
        assert!(!matrix.get(1, 0));
    }

    #[test]
    fn test_set_out_of_range() {
        let mut matrix = BoolMatrix::zeros(2, 3);
        assert!(matches!(
            matrix.set(2, 0),
            Err(MatrixError::CellOutOfRange { .. })
        ));
        assert!(matches!(
            matrix.set(0, 3),
            Err(MatrixError::CellOutOfRange { .. })
        ));
    }

    #[test]
    fn test_matmul_reaches_two_steps() {
        // 0 -> 1 -> 2 as an adjacency matrix; squaring yields 0 -> 2.
        let step = from_cells(3, 3, &[(0, 1), (1, 2)]);
        let two = step.matmul(&step).unwrap();
        assert!(two.get(0, 2));
        assert_eq!(two.nnz(), 1);
    }

    #[test]
    fn test_matmul_shape_mismatch() {
        let a = BoolMatrix::zeros(2, 3);
        let b = BoolMatrix::zeros(2, 3);
        assert!(matches!(
            a.matmul(&b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_kron_block_layout() {
        let a = from_cells(2, 2, &[(0, 1)]);
        let b = from_cells(2, 2, &[(1, 0)]);
        let c = a.kron(&b);
        assert_eq!(c.rows(), 4);
        assert_eq!(c.cols(), 4);
        // a[0, 1] ∧ b[1, 0] is the single true cell, at (0·2 + 1, 1·2 + 0).
        assert!(c.get(1, 2));
        assert_eq!(c.nnz(), 1);
    }

    #[test]
    fn test_diff_positive() {
        let a = from_cells(1, 4, &[(0, 0), (0, 2), (0, 3)]);
        let b = from_cells(1, 4, &[(0, 2)]);
        let c = a.diff_positive(&b).unwrap();
        assert!(c.get(0, 0));
        assert!(!c.get(0, 2));
        assert!(c.get(0, 3));
        assert_eq!(c.nnz(), 2);
    }

    #[test]
    fn test_pow_zero_is_identity() {
        let step = from_cells(3, 3, &[(0, 1), (1, 2)]);
        assert_eq!(step.pow(0).unwrap(), BoolMatrix::identity(3));
    }

    #[test]
    fn test_pow_closes_a_chain() {
        // Reflexive chain: pow(n) relates every earlier node to every later one.
        let reflexive = from_cells(3, 3, &[(0, 0), (1, 1), (2, 2), (0, 1), (1, 2)])
            .pow(3)
            .unwrap();
        assert!(reflexive.get(0, 2));
        assert!(reflexive.get(0, 0));
        assert!(!reflexive.get(2, 0));
    }

    #[test]
    fn test_row_true_cols_sorted_unique() {
        let matrix = from_cells(2, 5, &[(1, 4), (1, 0), (1, 2), (1, 0)]);
        let cols: Vec<usize> = matrix.row_true_cols(1).collect();
        assert_eq!(cols, vec![0, 2, 4]);
    }
}
