//! Validity of a single linear curve (linestring).
//!
//! A curve is one-dimensional, so it needs at least two distinct points.
//! Optionally it must also be free of spikes. Reference: OGC 06-103r4,
//! section 6.1.6.1.

use crate::distinct::distinct_points;
use crate::spikes::find_spike;
use crate::types::{Closure, DistinctPoints, PointSequence, ValidityError};

/// Returns `true` if `curve` is a valid simple curve under `allow_spikes`.
///
/// # Examples
///
/// ```
/// use geo::line_string;
/// use simplecurve::is_valid_linestring;
///
/// let there_and_back = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 0.0, y: 0.0)];
/// assert!(!is_valid_linestring(&there_and_back, false));
/// assert!(is_valid_linestring(&there_and_back, true));
/// ```
#[must_use = "returns whether the curve is valid"]
pub fn is_valid_linestring<S: PointSequence + ?Sized>(curve: &S, allow_spikes: bool) -> bool {
    validate_linestring(curve, allow_spikes).is_ok()
}

/// Check `curve`, reporting why it is invalid.
///
/// Rules, in order:
///
/// 1. Fewer than two distinct points: [`ValidityError::TooFewPoints`].
/// 2. Spikes disallowed and exactly two distinct points: valid unless the
///    curve ends where it starts ([`ValidityError::DegenerateLoop`]). With
///    two values the spike scan would give the same answer, so it is
///    skipped.
/// 3. Otherwise valid if spikes are allowed or none is found
///    ([`ValidityError::Spike`]).
///
/// The spike scan wraps across the endpoints only when the curve is itself
/// closed (first point equals last point).
///
/// # Errors
///
/// Returns the first rule the curve breaks.
pub fn validate_linestring<S: PointSequence + ?Sized>(
    curve: &S,
    allow_spikes: bool,
) -> Result<(), ValidityError> {
    let distinct = distinct_points(curve);
    tracing::trace!(?distinct, "classified curve");

    if distinct < DistinctPoints::Two {
        tracing::debug!(?distinct, "curve has too few distinct points");
        return Err(ValidityError::TooFewPoints { distinct });
    }

    let is_closed = curve.front() == curve.back();

    if !allow_spikes && distinct == DistinctPoints::Two {
        if is_closed {
            tracing::debug!("two-point curve closes on itself");
            return Err(ValidityError::DegenerateLoop);
        }
        return Ok(());
    }

    if allow_spikes {
        return Ok(());
    }

    let closure = if is_closed {
        Closure::Closed
    } else {
        Closure::Open
    };
    match find_spike(curve, closure) {
        Some(vertex) => {
            tracing::debug!(vertex, ?closure, "curve has a spike");
            Err(ValidityError::Spike { vertex })
        }
        None => Ok(()),
    }
}
