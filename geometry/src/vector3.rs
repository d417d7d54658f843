use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    scalar::{clamp_of, max_of, min_of},
    FloatScalar, Scalar, SignedScalar,
};

/// A point or offset in 3D space.
///
/// Operators work componentwise and use the [`Scalar`] arithmetic, so on integer coordinates
/// they wrap on overflow.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn map<R>(self, mut f: impl FnMut(T) -> R) -> Vector3<R> {
        Vector3::new(f(self.x), f(self.y), f(self.z))
    }

    fn zip_map<R>(self, other: Self, mut f: impl FnMut(T, T) -> R) -> Vector3<R> {
        Vector3::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Copy> Vector3<T> {
    pub const fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }
}

impl<T: Scalar> Vector3<T> {
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Componentwise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, min_of)
    }

    /// Componentwise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, max_of)
    }

    /// Clamps every component into the closed interval `[lower, upper]` of the same axis.
    ///
    /// `lower` must not exceed `upper` on any axis.
    #[must_use]
    pub fn clamp(self, lower: Self, upper: Self) -> Self {
        Self::new(
            clamp_of(self.x, lower.x, upper.x),
            clamp_of(self.y, lower.y, upper.y),
            clamp_of(self.z, lower.z, upper.z),
        )
    }

    pub fn min_element(self) -> T {
        min_of(min_of(self.x, self.y), self.z)
    }

    pub fn max_element(self) -> T {
        max_of(max_of(self.x, self.y), self.z)
    }

    /// `x² + y² + z²`. Wraps on integer overflow.
    pub fn squared_length(self) -> T {
        self.x
            .times(self.x)
            .plus(self.y.times(self.y))
            .plus(self.z.times(self.z))
    }
}

impl<T: FloatScalar> Vector3<T> {
    pub fn length(self) -> T {
        self.squared_length().sqrt()
    }

    #[must_use]
    pub fn halved(self) -> Self {
        self.map(FloatScalar::halved)
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, T::plus)
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, T::minus)
    }
}

impl<T: Scalar> Mul for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, T::times)
    }
}

impl<T: SignedScalar> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(T::negated)
    }
}

impl<T> From<(T, T, T)> for Vector3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        v.to_array()
    }
}

// Serialized as a `[x, y, z]` tuple.

impl<T: Serialize> Serialize for Vector3<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Vector3<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <(T, T, T)>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn componentwise_operators() {
        let a = Vector3::new(1, -2, 3);
        let b = Vector3::new(4, 5, -6);
        assert_eq!(a + b, Vector3::new(5, 3, -3));
        assert_eq!(a - b, Vector3::new(-3, -7, 9));
        assert_eq!(a * b, Vector3::new(4, -10, -18));
        assert_eq!(-a, Vector3::new(-1, 2, -3));
        assert_eq!(a.min(b), Vector3::new(1, -2, -6));
        assert_eq!(a.max(b), Vector3::new(4, 5, 3));
    }

    #[test]
    fn integer_operators_wrap() {
        let v = Vector3::new(u8::MAX, 0, 1);
        assert_eq!(v + Vector3::splat(1), Vector3::new(0, 1, 2));
        assert_eq!(Vector3::<u8>::zero() - Vector3::new(1, 2, 3), Vector3::new(255, 254, 253));
    }

    #[test]
    fn clamp_into_closed_interval() {
        let lower = Vector3::new(0.0, 0.0, 0.0);
        let upper = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(
            Vector3::new(-1.0, 1.0, 4.0).clamp(lower, upper),
            Vector3::new(0.0, 1.0, 3.0)
        );
        assert_eq!(upper.clamp(lower, upper), upper);
    }

    #[test]
    fn elements() {
        let v = Vector3::new(3, -7, 5);
        assert_eq!(v.min_element(), -7);
        assert_eq!(v.max_element(), 5);
    }

    #[test]
    fn squared_length_and_length() {
        let v = Vector3::new(1.0, 2.0, 2.0);
        assert_eq!(v.squared_length(), 9.0);
        assert_eq!(v.length(), 3.0);
        assert_relative_eq!(Vector3::new(1.0f32, 1.0, 1.0).length(), 3.0f32.sqrt());
        assert_eq!(Vector3::new(-2, 3, 6).squared_length(), 49);
    }

    #[test]
    fn integer_squared_length_wraps() {
        // 12² = 144 does not fit into an i8.
        assert_eq!(Vector3::new(12i8, 0, 0).squared_length(), 144u8 as i8);
        assert_eq!(Vector3::new(16u8, 0, 0).squared_length(), 0);
        assert_eq!(Vector3::new(0u8, 10, 12).squared_length(), 244);
    }

    #[test]
    fn halved() {
        assert_eq!(Vector3::new(1.0, -3.0, 0.0).halved(), Vector3::new(0.5, -1.5, 0.0));
    }

    #[test]
    fn tuple_and_array_conversions() {
        let v: Vector3<i64> = (1, 2, 3).into();
        assert_eq!(v, Vector3::from([1, 2, 3]));
        let t: (i64, i64, i64) = v.into();
        assert_eq!(t, (1, 2, 3));
        let a: [i64; 3] = v.into();
        assert_eq!(a, [1, 2, 3]);
        assert_eq!(v.map(|c| c * 10), Vector3::new(10, 20, 30));
    }

    #[test]
    fn serializes_as_tuple() {
        let v = Vector3::new(1.5, -2.0, 0.25);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.5,-2.0,0.25]");
        let back: Vector3<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
