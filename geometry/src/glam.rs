use glam::{DVec3, I64Vec3, IVec3, U64Vec3, UVec3, Vec3};

use crate::Vector3;

macro_rules! glam_conversions {
    ($($glam:ty => $scalar:ty),*) => {$(
        impl From<$glam> for Vector3<$scalar> {
            fn from(v: $glam) -> Self {
                Self::new(v.x, v.y, v.z)
            }
        }

        impl From<Vector3<$scalar>> for $glam {
            fn from(v: Vector3<$scalar>) -> Self {
                <$glam>::new(v.x, v.y, v.z)
            }
        }
    )*};
}

glam_conversions!(
    Vec3 => f32,
    DVec3 => f64,
    IVec3 => i32,
    UVec3 => u32,
    I64Vec3 => i64,
    U64Vec3 => u64
);

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    use super::*;

    #[test]
    fn converts_both_ways() {
        let v: Vector3<f64> = DVec3::new(1.0, 2.0, 3.0).into();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(DVec3::from(v), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(UVec3::from(Vector3::new(7u32, 8, 9)), UVec3::new(7, 8, 9));
        assert_eq!(Vector3::from(IVec3::new(-1, 0, 1)), Vector3::new(-1, 0, 1));
    }

    #[test]
    fn glam_points_query_boxes() {
        let b = BoundingBox::new(Vec3::ZERO, Vec3::ONE);
        assert!(b.contains(Vector3::from(Vec3::splat(0.5))));
        assert_eq!(b.squared_distance(Vec3::new(2.0, 0.5, 0.5)), 1.0);
        assert_eq!(Vec3::from(b.center()), Vec3::splat(0.5));
    }
}
