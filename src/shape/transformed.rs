use crate::bounding_volume::details::support_map_aabb;
use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Matrix, Point, Real, Rotation, Translation, Vector};
use crate::shape::{SharedShape, SupportMap};

/// Tolerance used to recognize identity and rotation matrices.
pub const ROTATION_EPSILON: Real = 1.0e-5;

/// The kind of linear map applied by a [`Transformed`] shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum TransformKind {
    /// The linear map is the identity: only the translation applies.
    Identity,
    /// The linear map is a proper rotation.
    Rotation,
    /// Any other invertible linear map (scaling, shearing, reflection...).
    General,
}

impl TransformKind {
    /// Classifies a linear map.
    pub fn classify(linear: &Matrix<Real>) -> Self {
        if abs_diff_eq!(*linear, Matrix::identity(), epsilon = ROTATION_EPSILON) {
            TransformKind::Identity
        } else if abs_diff_eq!(
            linear.transpose() * linear,
            Matrix::identity(),
            epsilon = ROTATION_EPSILON
        ) && linear.determinant() > 0.0
        {
            TransformKind::Rotation
        } else {
            TransformKind::General
        }
    }
}

/// A shape mapped by an affine transformation.
///
/// The inner shape is referenced, never copied. Support points follow
/// `support(d) = M · inner.support(Mᵗ · d) + t`, which holds for any invertible
/// linear map `M`.
#[derive(Clone, Debug)]
pub struct Transformed {
    inner: SharedShape,
    linear: Matrix<Real>,
    translation: Vector<Real>,
    kind: TransformKind,
}

impl Transformed {
    /// Wraps `inner` into a shape mapped by `linear` then translated by `translation`.
    pub fn new(inner: SharedShape, linear: Matrix<Real>, translation: Vector<Real>) -> Self {
        Self {
            inner,
            linear,
            translation,
            kind: TransformKind::classify(&linear),
        }
    }

    /// Wraps `inner` into a shape moved by the rigid motion `pos`.
    pub fn from_isometry(inner: SharedShape, pos: &Isometry<Real>) -> Self {
        Self::new(
            inner,
            pos.rotation.to_rotation_matrix().into_inner(),
            pos.translation.vector,
        )
    }

    /// The transformed shape.
    pub fn inner(&self) -> &SharedShape {
        &self.inner
    }

    /// The linear part of the transformation.
    pub fn linear(&self) -> &Matrix<Real> {
        &self.linear
    }

    /// The translational part of the transformation.
    pub fn translation(&self) -> &Vector<Real> {
        &self.translation
    }

    /// The kind of the linear part, as classified when it was last set.
    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    /// Replaces the transformation and re-classifies it.
    pub fn set_transform(&mut self, linear: Matrix<Real>, translation: Vector<Real>) {
        self.linear = linear;
        self.translation = translation;
        self.kind = TransformKind::classify(&linear);
    }

    /// Replaces the translation only.
    pub fn set_translation(&mut self, translation: Vector<Real>) {
        self.translation = translation;
    }

    /// The rigid motion equivalent to this transformation, if it is one.
    fn local_isometry(&self) -> Option<Isometry<Real>> {
        let rotation = match self.kind {
            TransformKind::Identity => Rotation::identity(),
            TransformKind::Rotation => Rotation::from_matrix(&self.linear),
            TransformKind::General => return None,
        };
        Some(Isometry::from_parts(
            Translation::from(self.translation),
            rotation,
        ))
    }

    /// The world-space Aabb of this shape transformed by `pos`.
    ///
    /// Rigid transformations are folded into `pos` and delegated to the inner shape.
    /// Other ones go through the support map.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        match self.local_isometry() {
            Some(local) => self.inner.compute_aabb(&(pos * local)),
            None => support_map_aabb(pos, self),
        }
    }
}

impl SupportMap for Transformed {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match self.kind {
            TransformKind::Identity => self.inner.local_support_point(dir) + self.translation,
            TransformKind::Rotation | TransformKind::General => {
                let local_dir = self.linear.transpose() * dir;
                let pt = self.inner.local_support_point(&local_dir);
                Point::from(self.linear * pt.coords + self.translation)
            }
        }
    }
}
