pub use crate::{BoundingBox, Contains, FloatScalar, Scalar, SignedScalar, Size, Vector3};
