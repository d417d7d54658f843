use log::error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Axis {
    #[display("x")]
    X,
    #[display("y")]
    Y,
    #[display("z")]
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// A violated construction invariant of a [`Size`](crate::Size) or a
/// [`BoundingBox`](crate::BoundingBox).
///
/// The regular constructors treat these as programmer errors and panic. The `try_` variants
/// return them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum BoundsError {
    #[display("Minimum exceeds maximum on the {axis} axis")]
    InvertedAxis { axis: Axis },
    #[display("Negative extent on the {axis} axis")]
    NegativeExtent { axis: Axis },
    #[display("Unordered coordinate on the {axis} axis")]
    Unordered { axis: Axis },
}

#[track_caller]
pub(crate) fn precondition_failed(err: BoundsError) -> ! {
    error!("Bounds precondition failed: {err}");
    panic!("{err}");
}
