//! Shared types for the simplecurve validity engine.

use geo::{Coord, GeoNum, LineString};
use serde::{Deserialize, Serialize};

/// Read-only, ordered view over the vertices of one curve.
///
/// The validators are written against this capability rather than a
/// concrete container, so slices, vectors and [`geo::LineString`] all
/// plug in directly. Implementations must yield the same finite sequence
/// every time [`points`](Self::points) is called.
///
/// Nothing here assumes an O(1) length: every algorithm walks the
/// iterator and stops as soon as it has seen enough.
pub trait PointSequence {
    /// Coordinate scalar type.
    type Scalar: GeoNum;

    /// Iterate the vertices in traversal order.
    fn points(&self) -> impl DoubleEndedIterator<Item = Coord<Self::Scalar>> + Clone;

    /// Returns the first vertex, if any.
    fn front(&self) -> Option<Coord<Self::Scalar>> {
        self.points().next()
    }

    /// Returns the last vertex, if any.
    fn back(&self) -> Option<Coord<Self::Scalar>> {
        self.points().next_back()
    }

    /// Returns `true` if the sequence has no vertices.
    fn is_empty(&self) -> bool {
        self.points().next().is_none()
    }
}

impl<T: GeoNum> PointSequence for [Coord<T>] {
    type Scalar = T;

    fn points(&self) -> impl DoubleEndedIterator<Item = Coord<T>> + Clone {
        self.iter().copied()
    }
}

impl<T: GeoNum> PointSequence for Vec<Coord<T>> {
    type Scalar = T;

    fn points(&self) -> impl DoubleEndedIterator<Item = Coord<T>> + Clone {
        self.iter().copied()
    }
}

impl<T: GeoNum> PointSequence for LineString<T> {
    type Scalar = T;

    fn points(&self) -> impl DoubleEndedIterator<Item = Coord<T>> + Clone {
        self.0.iter().copied()
    }
}

impl<S: PointSequence + ?Sized> PointSequence for &S {
    type Scalar = S::Scalar;

    fn points(&self) -> impl DoubleEndedIterator<Item = Coord<Self::Scalar>> + Clone {
        (**self).points()
    }
}

/// Whether a sequence's last vertex is adjacent to its first for
/// neighbour-based checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Closure {
    /// The first and last vertices have a single neighbour each.
    #[default]
    Open,
    /// The sequence is a ring: the last vertex is followed by the first.
    ///
    /// A stored closing point equal to the first vertex is the same vertex,
    /// not an extra one.
    Closed,
}

/// Number of distinct points in a sequence, capped at three.
///
/// Validity rules never need to tell three distinct points from more, so
/// the classifier stops scanning as soon as it can prove
/// [`ThreeOrMore`](Self::ThreeOrMore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DistinctPoints {
    /// Empty sequence.
    Zero,
    /// Every point is the same.
    One,
    /// Exactly two distinct values, including sequences that alternate
    /// between them and close back onto the start.
    Two,
    /// At least three distinct values.
    ThreeOrMore,
}

/// Per-call validity policy.
///
/// The same geometry can be checked under either policy; nothing here is
/// stored on the geometry itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidityPolicy {
    /// Accept vertices where the curve folds back onto itself.
    pub allow_spikes: bool,
}

impl ValidityPolicy {
    /// Spikes are rejected unless the caller opts in.
    pub const DEFAULT_ALLOW_SPIKES: bool = false;

    /// Returns a copy of this policy with `allow_spikes` replaced.
    #[must_use = "returns a new policy; the original is unchanged"]
    pub const fn with_allow_spikes(self, allow_spikes: bool) -> Self {
        Self { allow_spikes }
    }
}

impl Default for ValidityPolicy {
    fn default() -> Self {
        Self {
            allow_spikes: Self::DEFAULT_ALLOW_SPIKES,
        }
    }
}

/// Why a linear geometry is not a valid simple curve.
///
/// Returned by the `validate*` functions. This is a description of the
/// input, not a failure of the check itself: every well-formed input
/// produces either `Ok(())` or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ValidityError {
    /// A curve needs at least two distinct points to be one-dimensional.
    #[error("curve has fewer than two distinct points ({distinct:?})")]
    TooFewPoints {
        /// The classifier bucket that was observed.
        distinct: DistinctPoints,
    },

    /// Two distinct points whose path returns to its start: a single
    /// segment traversed there and back.
    #[error("curve folds back onto a single segment")]
    DegenerateLoop,

    /// The curve reverses direction onto itself at a vertex.
    #[error("curve has a spike at vertex {vertex}")]
    Spike {
        /// Index of the spike vertex in the input sequence.
        vertex: usize,
    },

    /// An element of a multi-curve is invalid.
    #[error("curve {index} is invalid: {source}")]
    Element {
        /// Position of the first invalid curve in the collection.
        index: usize,
        /// Why that curve is invalid.
        source: Box<Self>,
    },
}
