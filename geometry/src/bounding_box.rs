use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::{precondition_failed, Axis, BoundsError},
    Contains, FloatScalar, Scalar, SignedScalar, Size, Vector3,
};

/// An axis-aligned box, given by its minimum and maximum corner.
///
/// `min <= max` holds on every axis. Constructors panic if it doesn't (see the `try_`
/// variants for checked construction), and there is no way to mutate a box in place, so an
/// instance is always valid.
///
/// The operations available depend on the scalar:
///
/// - every [`Scalar`]: construction from corners or from `min` and a [`Size`], containment,
///   [`size`](Self::size) and [`squared_distance`](Self::squared_distance).
/// - [`SignedScalar`] (floats and signed integers):
///   [`signed_squared_distance`](Self::signed_squared_distance).
/// - [`FloatScalar`]: construction from a center, [`center`](Self::center),
///   [`distance`](Self::distance) and [`signed_distance`](Self::signed_distance).
///
/// On integer scalars all arithmetic wraps silently, so boxes spanning more than the range of
/// the scalar produce meaningless sizes and distances.
///
/// ```compile_fail
/// use massive_bounds::{BoundingBox, Vector3};
///
/// // No integer center for odd extents.
/// let b = BoundingBox::new(Vector3::new(0, 0, 0), Vector3::new(3, 3, 3));
/// b.center();
/// ```
///
/// ```compile_fail
/// use massive_bounds::{BoundingBox, Vector3};
///
/// // Unsigned scalars can't represent the negative inside distance.
/// let b = BoundingBox::new(Vector3::new(0u32, 0, 0), Vector3::new(4, 4, 4));
/// b.signed_squared_distance(Vector3::new(2, 2, 2));
/// ```
///
/// ```compile_fail
/// use massive_bounds::{BoundingBox, Size, Vector3};
///
/// BoundingBox::from_center_size(Vector3::new(1, 1, 1), Size::new(3, 3, 3));
/// ```
///
/// ```compile_fail
/// use massive_bounds::{BoundingBox, Vector3};
///
/// let b = BoundingBox::new(Vector3::new(0i64, 0, 0), Vector3::new(4, 4, 4));
/// b.distance(Vector3::new(5, 5, 5));
/// ```
///
/// ```compile_fail
/// use massive_bounds::{BoundingBox, Vector3};
///
/// let b = BoundingBox::new(Vector3::new(0i32, 0, 0), Vector3::new(4, 4, 4));
/// b.signed_distance(Vector3::new(2, 2, 2));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BoundingBox<T> {
    min: Vector3<T>,
    max: Vector3<T>,
}

impl<T: Scalar> BoundingBox<T> {
    /// # Panics
    ///
    /// If `min` exceeds `max` on any axis, or a coordinate is NaN.
    #[track_caller]
    pub fn new(min: impl Into<Vector3<T>>, max: impl Into<Vector3<T>>) -> Self {
        match Self::try_new(min, max) {
            Ok(bounds) => bounds,
            Err(err) => precondition_failed(err),
        }
    }

    pub fn try_new(
        min: impl Into<Vector3<T>>,
        max: impl Into<Vector3<T>>,
    ) -> Result<Self, BoundsError> {
        let (min, max) = (min.into(), max.into());
        for (axis, (lo, hi)) in Axis::ALL
            .into_iter()
            .zip(min.to_array().into_iter().zip(max.to_array()))
        {
            // Negated, so that NaN coordinates are rejected, too.
            if !(lo <= hi) {
                return Err(BoundsError::InvertedAxis { axis });
            }
        }
        Ok(Self { min, max })
    }

    /// A box starting at `min` and extending by `size`.
    ///
    /// # Panics
    ///
    /// On integer scalars `min + size` wraps. If that inverts an axis, this panics like
    /// [`new`](Self::new).
    #[track_caller]
    pub fn from_min_size(min: impl Into<Vector3<T>>, size: Size<T>) -> Self {
        let min = min.into();
        Self::new(min, min + size)
    }

    pub fn try_from_min_size(
        min: impl Into<Vector3<T>>,
        size: Size<T>,
    ) -> Result<Self, BoundsError> {
        let min = min.into();
        Self::try_new(min, min + size)
    }

    /// A box from any two opposite corners.
    ///
    /// # Panics
    ///
    /// If a coordinate of either corner is unordered (NaN).
    #[track_caller]
    pub fn from_corners(a: impl Into<Vector3<T>>, b: impl Into<Vector3<T>>) -> Self {
        let (a, b) = (a.into(), b.into());
        for corner in [a, b] {
            if let Some(axis) = unordered_axis(corner) {
                precondition_failed(BoundsError::Unordered { axis });
            }
        }
        Self::new(a.min(b), a.max(b))
    }

    /// The smallest box containing all `points`. `None` if there are none, or if a coordinate
    /// of any point is unordered (NaN).
    pub fn enclosing(points: impl IntoIterator<Item = Vector3<T>>) -> Option<Self> {
        let (min, max) = points.into_iter().try_fold(
            None,
            |current: Option<(Vector3<T>, Vector3<T>)>, p| {
                if unordered_axis(p).is_some() {
                    return None;
                }
                Some(Some(match current {
                    Some((min, max)) => (p.min(min), p.max(max)),
                    None => (p, p),
                }))
            },
        )??;
        Self::try_new(min, max).ok()
    }

    pub fn min(&self) -> Vector3<T> {
        self.min
    }

    pub fn max(&self) -> Vector3<T> {
        self.max
    }

    /// `max - min`, wrapping on integer scalars.
    pub fn size(&self) -> Size<T> {
        let v = self.max - self.min;
        Size::new_unchecked(v.x, v.y, v.z)
    }

    /// A box with the same `min` corner and a new size.
    #[must_use]
    #[track_caller]
    pub fn with_size(&self, size: Size<T>) -> Self {
        Self::from_min_size(self.min, size)
    }

    #[must_use]
    #[track_caller]
    pub fn translated(&self, offset: impl Into<Vector3<T>>) -> Self {
        let offset = offset.into();
        Self::new(self.min + offset, self.max + offset)
    }

    /// `true` if the box has no extent along at least one axis.
    pub fn is_empty(&self) -> bool {
        !(self.min.x < self.max.x && self.min.y < self.max.y && self.min.z < self.max.z)
    }

    pub fn volume(&self) -> T {
        self.size().volume()
    }

    /// All eight corners, starting at `min` and ending at `max`. Bit 0 of the index selects the
    /// x coordinate, bit 1 y and bit 2 z.
    pub fn corners(&self) -> [Vector3<T>; 8] {
        let (lo, hi) = (self.min, self.max);
        std::array::from_fn(|i| {
            Vector3::new(
                if i & 1 == 0 { lo.x } else { hi.x },
                if i & 2 == 0 { lo.y } else { hi.y },
                if i & 4 == 0 { lo.z } else { hi.z },
            )
        })
    }

    /// The point on or in the box nearest to `p`. This is `p` itself if the box contains it.
    pub fn closest_point(&self, p: impl Into<Vector3<T>>) -> Vector3<T> {
        p.into().clamp(self.min, self.max)
    }

    /// The squared euclidean distance from `p` to the box. Zero for points on or inside the
    /// box.
    ///
    /// On integer scalars this wraps on overflow.
    pub fn squared_distance(&self, p: impl Into<Vector3<T>>) -> T {
        let p = p.into();
        (p - self.closest_point(p)).squared_length()
    }

    // The distance from an inside point to the nearest face.
    fn penetration_depth(&self, p: Vector3<T>) -> T {
        (p - self.min).min(self.max - p).min_element()
    }
}

impl<T: SignedScalar> BoundingBox<T> {
    /// Like [`squared_distance`](Self::squared_distance) for points outside of the box. For
    /// points inside, this is the negated square of the distance to the nearest face, so the
    /// value decreases the deeper the point is. Zero on the surface.
    pub fn signed_squared_distance(&self, p: impl Into<Vector3<T>>) -> T {
        let p = p.into();
        if !self.contains(p) {
            return self.squared_distance(p);
        }
        let depth = self.penetration_depth(p);
        depth.times(depth).negated()
    }
}

impl<T: FloatScalar> BoundingBox<T> {
    /// A box of `size` centered at `center`.
    #[track_caller]
    pub fn from_center_size(center: impl Into<Vector3<T>>, size: Size<T>) -> Self {
        let center = center.into();
        let half = size.to_vector().halved();
        Self::new(center - half, center + half)
    }

    pub fn center(&self) -> Vector3<T> {
        (self.min + self.max).halved()
    }

    pub fn distance(&self, p: impl Into<Vector3<T>>) -> T {
        self.squared_distance(p).sqrt()
    }

    /// Negative distance to the nearest face for points inside, [`distance`](Self::distance)
    /// for points outside, zero on the surface.
    pub fn signed_distance(&self, p: impl Into<Vector3<T>>) -> T {
        let p = p.into();
        if self.contains(p) {
            self.penetration_depth(p).negated()
        } else {
            self.distance(p)
        }
    }
}

// The first axis whose coordinate is not comparable to itself.
fn unordered_axis<T: PartialOrd>(v: Vector3<T>) -> Option<Axis> {
    Axis::ALL
        .into_iter()
        .zip(v.to_array())
        .find_map(|(axis, c)| c.partial_cmp(&c).is_none().then_some(axis))
}

impl<T: Scalar> Contains<Vector3<T>> for BoundingBox<T> {
    fn contains(&self, p: Vector3<T>) -> bool {
        self.contains(&p)
    }
}

/// Closed on all sides: points on the surface are contained.
impl<T: Scalar> Contains<&Vector3<T>> for BoundingBox<T> {
    fn contains(&self, p: &Vector3<T>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}

impl<T: Scalar> Contains<&BoundingBox<T>> for BoundingBox<T> {
    fn contains(&self, b: &BoundingBox<T>) -> bool {
        self.contains(&b.min) && self.contains(&b.max)
    }
}

// Serialized as a `[min, max]` tuple, validated when deserialized.

impl<T: Serialize> Serialize for BoundingBox<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.min, &self.max).serialize(serializer)
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for BoundingBox<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (min, max) = <(Vector3<T>, Vector3<T>)>::deserialize(deserializer)?;
        Self::try_new(min, max).map_err(serde::de::Error::custom)
    }
}
