//! Property tests for the classifier and spike detector.

use std::collections::HashSet;

use geo::{Coord, coord};
use proptest::prelude::*;
use simplecurve::{Closure, DistinctPoints, distinct_points, find_spike, is_valid_linestring};

/// Small integer grid, so that repeated and collinear points are common.
fn curve() -> impl Strategy<Value = Vec<Coord<i32>>> {
    prop::collection::vec((-3i32..=3, -3i32..=3), 0..12)
        .prop_map(|pts| pts.into_iter().map(|(x, y)| coord! { x: x, y: y }).collect())
}

/// Curves drawn from at most two distinct values.
fn two_valued_curve() -> impl Strategy<Value = Vec<Coord<i32>>> {
    prop::collection::vec(any::<bool>(), 0..12).prop_map(|picks| {
        picks
            .into_iter()
            .map(|b| if b { coord! { x: 0, y: 0 } } else { coord! { x: 2, y: 1 } })
            .collect()
    })
}

fn exact_bucket(points: &[Coord<i32>]) -> DistinctPoints {
    let distinct: HashSet<(i32, i32)> = points.iter().map(|c| (c.x, c.y)).collect();
    match distinct.len() {
        0 => DistinctPoints::Zero,
        1 => DistinctPoints::One,
        2 => DistinctPoints::Two,
        _ => DistinctPoints::ThreeOrMore,
    }
}

proptest! {
    #[test]
    fn classification_is_repeatable(points in curve()) {
        prop_assert_eq!(distinct_points(&points), distinct_points(&points));
    }

    #[test]
    fn classification_never_overcounts(points in curve()) {
        prop_assert!(distinct_points(&points) <= exact_bucket(&points));
    }

    #[test]
    fn up_to_two_values_is_order_independent(mut points in two_valued_curve()) {
        let expected = exact_bucket(&points);
        prop_assert_eq!(distinct_points(&points), expected);
        points.reverse();
        prop_assert_eq!(distinct_points(&points), expected);
    }

    #[test]
    fn spike_detection_is_repeatable(points in curve()) {
        prop_assert_eq!(
            find_spike(&points, Closure::Open),
            find_spike(&points, Closure::Open)
        );
        prop_assert_eq!(
            find_spike(&points, Closure::Closed),
            find_spike(&points, Closure::Closed)
        );
    }

    #[test]
    fn spikes_do_not_depend_on_direction(mut points in curve()) {
        let forward = find_spike(&points, Closure::Open).is_some();
        points.reverse();
        prop_assert_eq!(find_spike(&points, Closure::Open).is_some(), forward);
    }

    #[test]
    fn allowing_spikes_never_rejects_more(points in curve()) {
        if is_valid_linestring(&points, false) {
            prop_assert!(is_valid_linestring(&points, true));
        }
    }

    #[test]
    fn fewer_than_two_points_is_never_valid(points in prop::collection::vec((-3i32..=3, -3i32..=3), 0..2)) {
        let points: Vec<Coord<i32>> = points.into_iter().map(|(x, y)| coord! { x: x, y: y }).collect();
        prop_assert!(!is_valid_linestring(&points, false));
        prop_assert!(!is_valid_linestring(&points, true));
    }
}
