//! Validity of a collection of curves (multi-linestring).
//!
//! A multi-curve is valid exactly when every element is. Intersections
//! between elements are a topology question and are not checked here.
//! Reference: OGC 06-103r4, section 6.1.8.1.

use crate::linear::{is_valid_linestring, validate_linestring};
use crate::types::{PointSequence, ValidityError};

/// Returns `true` if every curve in `curves` is valid.
///
/// Stops at the first invalid curve. An empty collection is valid.
#[must_use = "returns whether every curve is valid"]
pub fn is_valid_multi_linestring<'a, S, I>(curves: I, allow_spikes: bool) -> bool
where
    S: PointSequence + ?Sized + 'a,
    I: IntoIterator<Item = &'a S>,
{
    curves
        .into_iter()
        .all(|curve| is_valid_linestring(curve, allow_spikes))
}

/// Check every curve in `curves`, reporting the first invalid one.
///
/// # Errors
///
/// Returns [`ValidityError::Element`] carrying the index of the first
/// invalid curve and the reason it failed.
pub fn validate_multi_linestring<'a, S, I>(curves: I, allow_spikes: bool) -> Result<(), ValidityError>
where
    S: PointSequence + ?Sized + 'a,
    I: IntoIterator<Item = &'a S>,
{
    curves
        .into_iter()
        .enumerate()
        .try_for_each(|(index, curve)| {
            validate_linestring(curve, allow_spikes).map_err(|reason| {
                tracing::debug!(index, %reason, "multi-curve element is invalid");
                ValidityError::Element {
                    index,
                    source: Box::new(reason),
                }
            })
        })
}
