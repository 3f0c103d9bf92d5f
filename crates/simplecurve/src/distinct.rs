//! Distinct-point classification.
//!
//! Counts how many distinct points a sequence holds, but only up to three:
//! every validity rule in this crate needs to tell apart 0, 1, 2 and
//! "3 or more", never an exact cardinality. The scan stops at the first
//! point that settles the bucket, so on a long, clearly valid curve the
//! cost is bounded by the position of the third distinct value.

use crate::types::{DistinctPoints, PointSequence};

/// Classify `sequence` by its number of distinct points.
///
/// The walk steps through at most three "first point different from the
/// previous one" transitions:
///
/// 1. `p1`: the first point different from the front. None means every
///    point is equal ([`One`](DistinctPoints::One)).
/// 2. `p2`: the first point after `p1` different from `p1`. None means
///    [`Two`](DistinctPoints::Two).
/// 3. If `p2` equals the front, the path went there and back using only
///    two values, which is still [`Two`](DistinctPoints::Two). Otherwise
///    it is [`ThreeOrMore`](DistinctPoints::ThreeOrMore).
///
/// Step 3 compares against the original front only, so `A, B, A, C`
/// classifies as `Two` even though it holds three values.
///
/// # Examples
///
/// ```
/// use geo::coord;
/// use simplecurve::{DistinctPoints, distinct_points};
///
/// let a = coord! { x: 0, y: 0 };
/// let b = coord! { x: 1, y: 0 };
/// assert_eq!(distinct_points(&[a, b, a, b][..]), DistinctPoints::Two);
/// ```
#[must_use = "returns the distinct-point bucket without side effects"]
pub fn distinct_points<S: PointSequence + ?Sized>(sequence: &S) -> DistinctPoints {
    let mut points = sequence.points();

    let Some(front) = points.next() else {
        return DistinctPoints::Zero;
    };

    let Some(p1) = points.find(|p| *p != front) else {
        return DistinctPoints::One;
    };

    match points.find(|p| *p != p1) {
        None => DistinctPoints::Two,
        Some(p2) if p2 == front => DistinctPoints::Two,
        Some(_) => DistinctPoints::ThreeOrMore,
    }
}
