//! Spike detection: vertices where a curve folds back onto itself.
//!
//! A spike is a vertex `V` with neighbours `A` (before) and `B` (after)
//! such that `A -> V` and `V -> B` lie on one line and point in opposite
//! directions. The path goes out to `V` and comes straight back, enclosing
//! zero area.
//!
//! Consecutive equal points are collapsed before the window is applied:
//! a zero-length segment is a duplicate point, not a fold, and never makes
//! a spike by itself.

use geo::algorithm::kernels::{Kernel, Orientation};
use geo::{Coord, GeoNum};

use crate::types::{Closure, PointSequence};

/// Returns `true` if `sequence` has at least one spike under `closure`.
///
/// See [`find_spike`] for the scan rules.
///
/// # Examples
///
/// ```
/// use geo::coord;
/// use simplecurve::{Closure, has_spikes};
///
/// let folded = [
///     coord! { x: 0, y: 0 },
///     coord! { x: 2, y: 0 },
///     coord! { x: 1, y: 0 },
/// ];
/// assert!(has_spikes(&folded[..], Closure::Open));
/// ```
#[must_use = "returns whether a spike was found"]
pub fn has_spikes<S: PointSequence + ?Sized>(sequence: &S, closure: Closure) -> bool {
    find_spike(sequence, closure).is_some()
}

/// Find the first spike vertex in `sequence`.
///
/// Returns the index (into the input sequence) of the first vertex of the
/// spike's run of equal points, or `None` if the curve has no spike.
///
/// - [`Closure::Open`]: the first and last vertices have no triple and are
///   never tested.
/// - [`Closure::Closed`]: the window wraps, so the last vertex is tested
///   against the first and the first against the last. A stored closing
///   point equal to the first vertex is not a separate vertex.
#[must_use = "returns the index of the first spike, if any"]
pub fn find_spike<S: PointSequence + ?Sized>(sequence: &S, closure: Closure) -> Option<usize> {
    let vertices = collapse_duplicates(sequence.points());
    match closure {
        Closure::Open => scan_open(vertices),
        Closure::Closed => scan_closed(vertices.collect()),
    }
}

/// Returns `true` if `a -> v -> b` reverses direction at `v` along a line.
///
/// Collinearity comes from the kernel's orientation predicate, which is
/// exact for integer coordinates and robust for floats. Once the points
/// are collinear, reversal is read off the signs of one component pair,
/// so no coordinate products are formed.
///
/// Both segments must be non-degenerate (`a != v` and `v != b`).
fn is_spike<T: GeoNum>(a: Coord<T>, v: Coord<T>, b: Coord<T>) -> bool {
    if <T::Ker as Kernel<T>>::orient2d(a, v, b) != Orientation::Collinear {
        return false;
    }
    let incoming = v - a;
    let outgoing = b - v;
    // Collinear: a vertical incoming segment means a vertical outgoing one.
    if incoming.x == T::zero() {
        opposite_signs(incoming.y, outgoing.y)
    } else {
        opposite_signs(incoming.x, outgoing.x)
    }
}

fn opposite_signs<T: GeoNum>(p: T, q: T) -> bool {
    let zero = T::zero();
    (p < zero && q > zero) || (p > zero && q < zero)
}

/// Drop every point equal to its predecessor, keeping the index of the
/// first point of each run.
fn collapse_duplicates<T: GeoNum>(
    points: impl Iterator<Item = Coord<T>>,
) -> impl Iterator<Item = (usize, Coord<T>)> {
    let mut previous: Option<Coord<T>> = None;
    points.enumerate().filter(move |&(_, p)| {
        if previous == Some(p) {
            false
        } else {
            previous = Some(p);
            true
        }
    })
}

fn scan_open<T: GeoNum>(mut vertices: impl Iterator<Item = (usize, Coord<T>)>) -> Option<usize> {
    let (_, mut a) = vertices.next()?;
    let (mut v_idx, mut v) = vertices.next()?;

    for (b_idx, b) in vertices {
        if is_spike(a, v, b) {
            tracing::trace!(vertex = v_idx, "spike found");
            return Some(v_idx);
        }
        a = v;
        v = b;
        v_idx = b_idx;
    }
    None
}

fn scan_closed<T: GeoNum>(mut ring: Vec<(usize, Coord<T>)>) -> Option<usize> {
    if ring.len() > 1 && ring.first().map(|&(_, p)| p) == ring.last().map(|&(_, p)| p) {
        ring.pop();
    }
    if ring.len() < 2 {
        return None;
    }

    let n = ring.len();
    (0..n).find_map(|i| {
        let (_, a) = ring[(i + n - 1) % n];
        let (v_idx, v) = ring[i];
        let (_, b) = ring[(i + 1) % n];
        is_spike(a, v, b).then(|| {
            tracing::trace!(vertex = v_idx, "spike found across ring");
            v_idx
        })
    })
}

#[cfg(test)]
mod tests {
    use geo::{Coord, coord};

    use super::*;

    fn c(x: i32, y: i32) -> Coord<i32> {
        coord! { x: x, y: y }
    }

    fn open(points: &[Coord<i32>]) -> Option<usize> {
        find_spike(points, Closure::Open)
    }

    fn closed(points: &[Coord<i32>]) -> Option<usize> {
        find_spike(points, Closure::Closed)
    }

    #[test]
    fn empty_and_short_sequences_have_no_spikes() {
        assert_eq!(open(&[]), None);
        assert_eq!(open(&[c(0, 0)]), None);
        assert_eq!(open(&[c(0, 0), c(1, 0)]), None);
        assert_eq!(closed(&[]), None);
        assert_eq!(closed(&[c(0, 0)]), None);
    }

    #[test]
    fn straight_continuation_is_not_a_spike() {
        assert_eq!(open(&[c(0, 0), c(1, 1), c(2, 2)]), None);
    }

    #[test]
    fn turn_is_not_a_spike() {
        assert_eq!(open(&[c(0, 0), c(1, 0), c(1, 1)]), None);
    }

    #[test]
    fn fold_back_past_start_is_a_spike() {
        assert_eq!(open(&[c(0, 0), c(1, 0), c(-1, 0)]), Some(1));
    }

    #[test]
    fn fold_back_short_of_start_is_a_spike() {
        assert_eq!(open(&[c(0, 0), c(2, 0), c(1, 0)]), Some(1));
    }

    #[test]
    fn return_to_previous_point_is_a_spike() {
        assert_eq!(open(&[c(0, 0), c(1, 0), c(0, 0)]), Some(1));
    }

    #[test]
    fn duplicate_points_alone_are_not_spikes() {
        assert_eq!(open(&[c(0, 0), c(0, 0), c(1, 0), c(1, 0), c(2, 0)]), None);
    }

    #[test]
    fn duplicates_are_skipped_when_looking_for_neighbours() {
        // The fold at (2, 0) is only visible once the repeated vertex is
        // collapsed; the reported index is the first of the run.
        let pts = [c(0, 0), c(2, 0), c(2, 0), c(2, 0), c(1, 0)];
        assert_eq!(open(&pts), Some(1));
    }

    #[test]
    fn first_spike_wins() {
        let pts = [c(0, 0), c(1, 0), c(1, 1), c(1, 0), c(0, 0), c(3, 0)];
        assert_eq!(open(&pts), Some(2));
    }

    #[test]
    fn open_policy_ignores_fold_across_endpoints() {
        // As a ring this folds at both ends; as an open curve it is a
        // straight segment.
        assert_eq!(open(&[c(0, 0), c(1, 0), c(2, 0)]), None);
        assert_eq!(closed(&[c(0, 0), c(1, 0), c(2, 0)]), Some(0));
    }

    #[test]
    fn closed_square_has_no_spikes() {
        let square = [c(0, 0), c(1, 0), c(1, 1), c(0, 1), c(0, 0)];
        assert_eq!(closed(&square), None);
        assert_eq!(closed(&square[..4]), None);
    }

    #[test]
    fn closed_policy_tests_the_start_vertex() {
        // The ring runs (1, 0) -> (0, 0) -> (2, 0) through the first vertex.
        let pts = [c(0, 0), c(2, 0), c(1, 1), c(1, 0), c(0, 0)];
        assert_eq!(open(&pts), None);
        assert_eq!(closed(&pts), Some(0));
    }

    #[test]
    fn two_vertex_ring_folds() {
        assert_eq!(closed(&[c(0, 0), c(1, 0)]), Some(0));
        assert_eq!(closed(&[c(0, 0), c(1, 0), c(0, 0)]), Some(0));
    }

    #[test]
    fn float_coordinates() {
        let pts = [
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 0.5, y: 0.5 },
            coord! { x: 0.25, y: 0.25 },
        ];
        assert!(has_spikes(&pts[..], Closure::Open));
        let pts = [
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 0.5, y: 0.5 },
            coord! { x: 1.0, y: 1.0 },
        ];
        assert!(!has_spikes(&pts[..], Closure::Open));
    }

    #[test]
    fn repeated_calls_agree() {
        let pts = [c(0, 0), c(3, 0), c(3, 3), c(3, 1)];
        assert_eq!(open(&pts), open(&pts));
        assert_eq!(open(&pts), Some(2));
    }

    #[test]
    fn large_axis_aligned_coordinates() {
        assert_eq!(open(&[c(0, 0), c(100_000, 0), c(-100_000, 0)]), Some(1));
        assert_eq!(open(&[c(0, 0), c(100_000, 0), c(200_000, 0)]), None);
        assert_eq!(open(&[c(0, 0), c(0, 100_000), c(0, -100_000)]), Some(1));
        assert_eq!(open(&[c(7, -60_000), c(7, 0), c(7, 60_000)]), None);
    }
}
