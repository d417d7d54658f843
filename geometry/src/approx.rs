//! Approximate equality for floating point boxes, mainly for tests of code that uses them.
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{BoundingBox, Scalar, Size, Vector3};

impl<T: AbsDiffEq> AbsDiffEq for Vector3<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T: RelativeEq> RelativeEq for Vector3<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl<T: UlpsEq> UlpsEq for Vector3<T>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

impl<T: Scalar + AbsDiffEq> AbsDiffEq for Size<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_vector().abs_diff_eq(&other.to_vector(), epsilon)
    }
}

impl<T: Scalar + RelativeEq> RelativeEq for Size<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.to_vector()
            .relative_eq(&other.to_vector(), epsilon, max_relative)
    }
}

impl<T: Scalar + AbsDiffEq> AbsDiffEq for BoundingBox<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.min().abs_diff_eq(&other.min(), epsilon)
            && self.max().abs_diff_eq(&other.max(), epsilon)
    }
}

impl<T: Scalar + RelativeEq> RelativeEq for BoundingBox<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.min().relative_eq(&other.min(), epsilon, max_relative)
            && self.max().relative_eq(&other.max(), epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_ne, assert_ulps_eq};

    use super::*;

    #[test]
    fn compares_componentwise() {
        let a = Vector3::new(0.1 + 0.2, 1.0, -1.0);
        let b = Vector3::new(0.3, 1.0, -1.0);
        assert_ne!(a, b);
        assert_ulps_eq!(a, b);
        assert_relative_ne!(a, Vector3::new(0.3, 1.0, -1.1));
    }

    #[test]
    fn compares_boxes() {
        let a = BoundingBox::new((0.0, 0.0, 0.0), (0.1 + 0.2, 1.0, 1.0));
        let b = BoundingBox::from_min_size((0.0, 0.0, 0.0), Size::new(0.3, 1.0, 1.0));
        assert_abs_diff_eq!(a, b);
        assert_abs_diff_eq!(a.size(), b.size());
    }
}
