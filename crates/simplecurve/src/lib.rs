//! simplecurve: OGC simple-curve validity checks (sans-IO).
//!
//! Decides whether a linestring or multi-linestring is a valid simple
//! curve in the sense of OGC Simple Feature Access: at least two distinct
//! points and, unless the caller allows them, no spikes (vertices where the
//! path folds straight back onto itself).
//!
//! The checks are layered, leaves first:
//!
//! 1. [`distinct_points`]: classify a point sequence as 0, 1, 2 or 3+
//!    distinct points, stopping as soon as the bucket is known.
//! 2. [`has_spikes`] / [`find_spike`]: sliding-window fold-back detection.
//! 3. [`is_valid_linestring`]: one curve.
//! 4. [`is_valid_multi_linestring`]: every curve of a collection.
//! 5. [`is_valid`] / [`validate`]: dispatch on the geometry kind.
//!
//! Every function is a pure read-only predicate over borrowed input. Point
//! equality is the exact `PartialEq` of [`geo::Coord`].

pub mod dispatch;
pub mod distinct;
pub mod geometry;
pub mod linear;
pub mod multi;
pub mod spikes;
pub mod types;

pub use dispatch::{GeometryKind, Validate};
pub use distinct::distinct_points;
pub use geometry::Geometry;
pub use linear::{is_valid_linestring, validate_linestring};
pub use multi::{is_valid_multi_linestring, validate_multi_linestring};
pub use spikes::{find_spike, has_spikes};
pub use types::{Closure, DistinctPoints, PointSequence, ValidityError, ValidityPolicy};

/// Returns `true` if `geometry` is valid with the given spike policy.
///
/// # Examples
///
/// ```
/// use geo::{MultiLineString, line_string};
///
/// let straight = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0), (x: 2.0, y: 2.0)];
/// assert!(simplecurve::is_valid(&straight, false));
///
/// let mls = MultiLineString::new(vec![
///     line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)],
///     line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 0.0, y: 0.0)],
/// ]);
/// assert!(!simplecurve::is_valid(&mls, false));
/// assert!(simplecurve::is_valid(&mls, true));
/// ```
#[must_use = "returns whether the geometry is valid"]
pub fn is_valid<G: Validate + ?Sized>(geometry: &G, allow_spikes: bool) -> bool {
    geometry.is_valid(allow_spikes)
}

/// Check `geometry` under `policy`, reporting why it is invalid.
///
/// # Errors
///
/// Returns the first [`ValidityError`] the geometry exhibits. For a
/// multi-linestring this is [`ValidityError::Element`] naming the first
/// invalid curve.
pub fn validate<G: Validate + ?Sized>(
    geometry: &G,
    policy: &ValidityPolicy,
) -> Result<(), ValidityError> {
    geometry.validate(policy)
}
