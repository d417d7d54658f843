//! Axis-aligned 3D bounding boxes over floating point and integer scalars.
//!
//! [`BoundingBox`] offers a different set of operations depending on the scalar it is
//! instantiated with, see [`Scalar`], [`SignedScalar`] and [`FloatScalar`]. Asking for a
//! floating point only operation on an integer box is a compile error, not a runtime one.

mod approx;
mod bounding_box;
mod error;
mod euclid;
mod glam;
pub mod prelude;
mod scalar;
mod size;
mod vector3;

pub use bounding_box::*;
pub use error::{Axis, BoundsError};
pub use scalar::{FloatScalar, Scalar, SignedScalar};
pub use size::*;
pub use vector3::*;

pub trait Contains<Other> {
    fn contains(&self, other: Other) -> bool;
}
