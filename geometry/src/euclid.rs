//! Conversions from and to euclid's typed 3D geometry. The unit is dropped going in and chosen
//! by the caller going out.
use euclid::{Box3D, Point3D, Size3D, Vector3D};

use crate::{BoundingBox, BoundsError, Scalar, Size, Vector3};

impl<T, U> From<Point3D<T, U>> for Vector3<T> {
    fn from(p: Point3D<T, U>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl<T, U> From<Vector3<T>> for Point3D<T, U> {
    fn from(v: Vector3<T>) -> Self {
        Point3D::new(v.x, v.y, v.z)
    }
}

impl<T, U> From<Vector3D<T, U>> for Vector3<T> {
    fn from(v: Vector3D<T, U>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T, U> From<Vector3<T>> for Vector3D<T, U> {
    fn from(v: Vector3<T>) -> Self {
        Vector3D::new(v.x, v.y, v.z)
    }
}

impl<T: Scalar, U> TryFrom<Size3D<T, U>> for Size<T> {
    type Error = BoundsError;

    fn try_from(size: Size3D<T, U>) -> Result<Self, Self::Error> {
        Self::try_new(size.width, size.height, size.depth)
    }
}

impl<T: Scalar, U> From<Size<T>> for Size3D<T, U> {
    fn from(size: Size<T>) -> Self {
        Size3D::new(size.width(), size.height(), size.depth())
    }
}

impl<T: Scalar, U> TryFrom<Box3D<T, U>> for BoundingBox<T> {
    type Error = BoundsError;

    fn try_from(b: Box3D<T, U>) -> Result<Self, Self::Error> {
        Self::try_new(b.min, b.max)
    }
}

impl<T: Scalar, U> From<BoundingBox<T>> for Box3D<T, U> {
    fn from(b: BoundingBox<T>) -> Self {
        Box3D::new(b.min().into(), b.max().into())
    }
}
