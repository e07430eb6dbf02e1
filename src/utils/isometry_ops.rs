use crate::math::{Isometry, Matrix, Real, Vector};

/// Extra operations with isometries.
pub trait IsometryOps {
    /// Transform a vector by the absolute value of the homogeneous matrix
    /// equivalent to `self`.
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real>;
}

impl IsometryOps for Isometry<Real> {
    #[inline]
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation.to_rotation_matrix().into_inner().abs() * *v
    }
}

/// Extra operations with 3x3 matrices.
pub trait MatrixOps {
    /// The outer product `a ⊗ b`.
    fn outer(a: &Vector<Real>, b: &Vector<Real>) -> Self;

    /// The tensor `|v|² I - v ⊗ v` that appears in the parallel-axis theorem.
    fn parallel_axis_term(v: &Vector<Real>) -> Self;
}

impl MatrixOps for Matrix<Real> {
    #[inline]
    fn outer(a: &Vector<Real>, b: &Vector<Real>) -> Self {
        a * b.transpose()
    }

    #[inline]
    fn parallel_axis_term(v: &Vector<Real>) -> Self {
        Matrix::from_diagonal_element(v.norm_squared()) - Self::outer(v, v)
    }
}
