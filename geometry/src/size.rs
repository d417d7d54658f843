use std::ops;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::{precondition_failed, Axis, BoundsError},
    Scalar, Vector3,
};

/// The extent of a box along the x (width), y (height) and z (depth) axis.
///
/// All three components are non-negative. Constructing a `Size` with a negative (or NaN)
/// component panics.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Size<T> {
    width: T,
    height: T,
    depth: T,
}

impl<T: Scalar> Size<T> {
    #[track_caller]
    pub fn new(width: T, height: T, depth: T) -> Self {
        match Self::try_new(width, height, depth) {
            Ok(size) => size,
            Err(err) => precondition_failed(err),
        }
    }

    pub fn try_new(width: T, height: T, depth: T) -> Result<Self, BoundsError> {
        let zero = T::zero();
        for (axis, extent) in Axis::ALL.into_iter().zip([width, height, depth]) {
            if !(extent >= zero) {
                return Err(BoundsError::NegativeExtent { axis });
            }
        }
        Ok(Self::new_unchecked(width, height, depth))
    }

    /// x → width, y → height, z → depth.
    #[track_caller]
    pub fn from_vector(v: Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    pub fn zero() -> Self {
        Self::new_unchecked(T::zero(), T::zero(), T::zero())
    }

    // Used for sizes derived from box corners, where a wrapped integer subtraction may produce
    // values that look negative.
    pub(crate) const fn new_unchecked(width: T, height: T, depth: T) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn width(&self) -> T {
        self.width
    }

    pub fn height(&self) -> T {
        self.height
    }

    pub fn depth(&self) -> T {
        self.depth
    }

    pub fn to_vector(self) -> Vector3<T> {
        Vector3::new(self.width, self.height, self.depth)
    }

    /// `width * height * depth`. Wraps on integer overflow.
    pub fn volume(&self) -> T {
        self.width.times(self.height).times(self.depth)
    }

    /// `true` if the extent along at least one axis is zero.
    pub fn is_empty(&self) -> bool {
        let zero = T::zero();
        self.width == zero || self.height == zero || self.depth == zero
    }
}

impl<T: Scalar> TryFrom<Vector3<T>> for Size<T> {
    type Error = BoundsError;

    fn try_from(v: Vector3<T>) -> Result<Self, Self::Error> {
        Self::try_new(v.x, v.y, v.z)
    }
}

impl<T: Scalar> From<Size<T>> for Vector3<T> {
    fn from(size: Size<T>) -> Self {
        size.to_vector()
    }
}

impl<T: Scalar> ops::Add<Size<T>> for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Size<T>) -> Self::Output {
        self + rhs.to_vector()
    }
}

impl<T: Scalar> ops::Sub<Size<T>> for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Size<T>) -> Self::Output {
        self - rhs.to_vector()
    }
}

// Serialized as a `[width, height, depth]` tuple, validated when deserialized.

impl<T: Serialize> Serialize for Size<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.width, &self.height, &self.depth).serialize(serializer)
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for Size<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (width, height, depth) = <(T, T, T)>::deserialize(deserializer)?;
        Self::try_new(width, height, depth).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_vector_components() {
        let size = Size::from_vector(Vector3::new(6, 1, 0));
        assert_eq!((size.width(), size.height(), size.depth()), (6, 1, 0));
        assert_eq!(size.to_vector(), Vector3::new(6, 1, 0));
        assert_eq!(Size::try_from(Vector3::new(1.0, 2.0, 3.0)), Ok(Size::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn equality_compares_all_fields() {
        assert_eq!(Size::new(1, 2, 3), Size::new(1, 2, 3));
        assert_ne!(Size::new(1, 2, 3), Size::new(1, 2, 4));
        assert_ne!(Size::new(1, 2, 3), Size::new(3, 2, 1));
    }

    #[test]
    fn rejects_negative_components() {
        assert_eq!(
            Size::try_new(1, -1, 0),
            Err(BoundsError::NegativeExtent { axis: Axis::Y })
        );
        assert_eq!(
            Size::try_new(0.0, 0.0, -0.5),
            Err(BoundsError::NegativeExtent { axis: Axis::Z })
        );
        assert_eq!(
            Size::try_new(f64::NAN, 1.0, 1.0),
            Err(BoundsError::NegativeExtent { axis: Axis::X })
        );
        // Negative zero compares equal to zero.
        assert!(Size::try_new(-0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    #[should_panic(expected = "Negative extent on the x axis")]
    fn negative_width_is_fatal() {
        Size::new(-1.0, 1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "Negative extent on the z axis")]
    fn negative_vector_is_fatal() {
        Size::from_vector(Vector3::new(0i16, 0, -3));
    }

    #[test]
    fn volume_and_emptiness() {
        assert_eq!(Size::new(2, 3, 4).volume(), 24);
        assert_eq!(Size::new(16u8, 16, 1).volume(), 0);
        assert!(!Size::new(2, 3, 4).is_empty());
        assert!(Size::new(2.0, 0.0, 4.0).is_empty());
        assert!(Size::<u32>::zero().is_empty());
    }

    #[test]
    fn offsets_vectors() {
        let p = Vector3::new(1, 2, 3);
        let size = Size::new(10, 20, 30);
        assert_eq!(p + size, Vector3::new(11, 22, 33));
        assert_eq!(p + size - size, p);
    }

    #[test]
    fn serde_validates() {
        let size = Size::new(1u32, 2, 3);
        assert_eq!(serde_json::to_string(&size).unwrap(), "[1,2,3]");
        assert_eq!(serde_json::from_str::<Size<u32>>("[1,2,3]").unwrap(), size);

        let err = serde_json::from_str::<Size<i32>>("[1,-2,3]").unwrap_err();
        assert!(err.to_string().contains("Negative extent on the y axis"));
    }
}
