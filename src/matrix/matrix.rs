use std::fmt;
use std::ops::Index;

use crate::error::{Error, Result};
use crate::matrix::{Element, Vector};

/// A rectangular matrix stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// A `rows` by `cols` matrix filled with `T::default()`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix { rows, cols, data: vec![T::default(); rows * cols] }
    }

    /// Builds a matrix from its rows. Fails if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(Error::JaggedMatrix { row, expected: cols, found: values.len() });
            }
        }
        Ok(Matrix { rows: rows.len(), cols, data: rows.into_iter().flatten().collect() })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Copies one row out as a vector.
    pub fn row(&self, row: usize) -> Option<Vector<T>> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(Vector::new(self.data[start..start + self.cols].to_vec()))
    }

    pub fn transpose(&self) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c]);
            }
        }
        Matrix { rows: self.cols, cols: self.rows, data }
    }

    pub fn scale(&self, scalar: T) -> Matrix<T> {
        self.map(|v| v * scalar)
    }

    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// The matrix product `self · other`. Requires `self.cols() == other.rows()`.
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != other.rows {
            return Err(Error::DimensionMismatch {
                op: "multiply",
                left: self.size(),
                right: other.size(),
            });
        }
        let mut product = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                product.data[i * other.cols + j] = (0..self.cols)
                    .fold(T::default(), |acc, k| acc + self[(i, k)] * other[(k, j)]);
            }
        }
        Ok(product)
    }

    /// Applies `f` to every element.
    pub fn map<U: Element>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix { rows: self.rows, cols: self.cols, data: self.data.iter().map(|&v| f(v)).collect() }
    }

    fn zip_with(&self, other: &Matrix<T>, op: &'static str, f: impl Fn(T, T) -> T) -> Result<Matrix<T>> {
        if self.size() != other.size() {
            return Err(Error::DimensionMismatch { op, left: self.size(), right: other.size() });
        }
        let data = self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect();
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }
}

impl<T: Element + Into<f64>> Matrix<T> {
    /// Widens an integer matrix to floating point.
    pub fn to_f64(&self) -> Matrix<f64> {
        self.map(Into::into)
    }
}

impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "index ({}, {}) out of bounds", row, col);
        &self.data[row * self.cols + col]
    }
}

impl<T: Element> From<Vector<T>> for Matrix<T> {
    /// A vector becomes a single column.
    fn from(vector: Vector<T>) -> Self {
        let rows = vector.len();
        Matrix { rows, cols: 1, data: vector.into_iter().collect() }
    }
}

impl<T: Element + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.rows == 1 {
            let row: Vec<String> = self.data.iter().map(|v| v.to_string()).collect();
            return write!(f, "[{}]", row.join(", "));
        }
        for r in 0..self.rows {
            let (open, close) = match r {
                0 => ("┌", "┐"),
                r if r == self.rows - 1 => ("└", "┘"),
                _ => ("│", "│"),
            };
            write!(f, "{} ", open)?;
            for c in 0..self.cols {
                write!(f, "{} ", self.data[r * self.cols + c])?;
            }
            write!(f, "{}", close)?;
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::Complex;

    fn m(rows: Vec<Vec<i32>>) -> Matrix<i32> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_jagged_rows_rejected() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, Error::JaggedMatrix { row: 1, expected: 2, found: 1 }));
    }

    #[test]
    fn test_add_subtract() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![5, 6], vec![7, 8]]);
        assert_eq!(a.add(&b).unwrap(), m(vec![vec![6, 8], vec![10, 12]]));
        assert_eq!(b.subtract(&a).unwrap(), m(vec![vec![4, 4], vec![4, 4]]));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let err = a.add(&b).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { op: "add", left: (2, 2), right: (2, 3) }));
        assert!(b.multiply(&a).is_err());
    }

    #[test]
    fn test_multiply() {
        let row = m(vec![vec![1, 2, 3]]);
        let col = m(vec![vec![4], vec![5], vec![6]]);
        assert_eq!(row.multiply(&col).unwrap(), m(vec![vec![32]]));
        assert_eq!(col.multiply(&row).unwrap().size(), (3, 3));

        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(a.multiply(&b).unwrap(), m(vec![vec![2, 1], vec![4, 3]]));
    }

    #[test]
    fn test_transpose() {
        let a = m(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let t = a.transpose();
        assert_eq!(t.size(), (3, 2));
        assert_eq!(t[(2, 0)], 3);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_scale_and_widen() {
        let a = m(vec![vec![1, -2], vec![3, 0]]);
        assert_eq!(a.scale(3), m(vec![vec![3, -6], vec![9, 0]]));
        let f = a.to_f64();
        assert_eq!(f.get(0, 1), Some(-2.0));
        assert_eq!(f.get(2, 0), None);
    }

    #[test]
    fn test_complex_elements() {
        let a = Matrix::from_rows(vec![vec![Complex::I, Complex::ONE]]).unwrap();
        let b = Matrix::from_rows(vec![vec![Complex::I], vec![Complex::ONE]]).unwrap();
        assert_eq!(a.multiply(&b).unwrap()[(0, 0)], Complex::ZERO);
    }

    #[test]
    fn test_display() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(a.to_string(), "┌ 1 2 ┐\n└ 3 4 ┘");
        assert_eq!(m(vec![vec![1, 2]]).to_string(), "[1, 2]");
    }
}
