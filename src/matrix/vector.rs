use crate::error::{Error, Result};
use crate::matrix::{Element, Matrix};

/// A column vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    values: Vec<T>,
}

impl<T: Element> Vector<T> {
    pub fn new(values: Vec<T>) -> Self {
        Vector { values }
    }

    pub fn zeros(len: usize) -> Self {
        Vector { values: vec![T::default(); len] }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// The 1 by n row matrix holding the same values.
    pub fn transpose(&self) -> Matrix<T> {
        Matrix::from(self.clone()).transpose()
    }

    pub fn scale(&self, scalar: T) -> Vector<T> {
        Vector::new(self.values.iter().map(|&v| v * scalar).collect())
    }

    pub fn add(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Inner product `Σ a[i]·b[i]`.
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        self.check_len(other, "dot")?;
        Ok(self
            .values
            .iter()
            .zip(&other.values)
            .fold(T::default(), |acc, (&a, &b)| acc + a * b))
    }

    fn check_len(&self, other: &Vector<T>, op: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::DimensionMismatch {
                op,
                left: (self.len(), 1),
                right: (other.len(), 1),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Vector<T>, op: &'static str, f: impl Fn(T, T) -> T) -> Result<Vector<T>> {
        self.check_len(other, op)?;
        Ok(Vector::new(
            self.values.iter().zip(&other.values).map(|(&a, &b)| f(a, b)).collect(),
        ))
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<T: Element> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Vector::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        let a = Vector::new(vec![1.0, 2.0, 3.0]);
        let b = Vector::new(vec![4.0, 5.0, 6.0]);
        assert_eq!(a.dot(&b).unwrap(), 32.0);
    }

    #[test]
    fn test_length_mismatch() {
        let a = Vector::new(vec![1, 2, 3]);
        let b = Vector::new(vec![1, 2]);
        assert!(matches!(a.add(&b), Err(Error::DimensionMismatch { op: "add", .. })));
        assert!(a.dot(&b).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector::new(vec![1, 2, 3]);
        let b = Vector::new(vec![3, 2, 1]);
        assert_eq!(a.add(&b).unwrap(), Vector::new(vec![4, 4, 4]));
        assert_eq!(a.subtract(&b).unwrap(), Vector::new(vec![-2, 0, 2]));
        assert_eq!(a.scale(2).as_slice(), &[2, 4, 6]);
    }

    #[test]
    fn test_transpose_and_row() {
        let v = Vector::new(vec![7, 8, 9]);
        let row = v.transpose();
        assert_eq!(row.size(), (1, 3));
        assert_eq!(row.row(0).unwrap(), v);
        assert_eq!(Matrix::from(v).size(), (3, 1));
    }
}
