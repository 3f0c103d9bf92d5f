//! Geometry-kind dispatch: the single entry point for validity checks.
//!
//! This module defines the [`Validate`] trait, implemented once per
//! supported geometry kind, and the [`GeometryKind`] tag that names those
//! kinds.
//!
//! # Extending
//!
//! The set of kinds is closed. Supporting a new one (points, rings,
//! polygons) means adding a [`GeometryKind`] variant and a [`Validate`]
//! impl that routes to its own validator; callers of [`crate::is_valid`]
//! and [`crate::validate`] do not change.

use geo::{GeoNum, LineString, MultiLineString};
use serde::Serialize;

use crate::linear::validate_linestring;
use crate::multi::validate_multi_linestring;
use crate::types::{ValidityError, ValidityPolicy};

/// Geometry kinds the engine can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GeometryKind {
    /// A single curve.
    LineString,
    /// A collection of curves.
    MultiLineString,
}

/// A geometry whose OGC validity can be checked.
pub trait Validate {
    /// Which kind of geometry this is.
    fn kind(&self) -> GeometryKind;

    /// Check the geometry under `policy`, reporting why it is invalid.
    ///
    /// # Errors
    ///
    /// Returns the first validity rule the geometry breaks.
    fn validate(&self, policy: &ValidityPolicy) -> Result<(), ValidityError>;

    /// Returns `true` if the geometry is valid with the given spike policy.
    fn is_valid(&self, allow_spikes: bool) -> bool {
        self.validate(&ValidityPolicy { allow_spikes }).is_ok()
    }
}

impl<T: GeoNum> Validate for LineString<T> {
    fn kind(&self) -> GeometryKind {
        GeometryKind::LineString
    }

    fn validate(&self, policy: &ValidityPolicy) -> Result<(), ValidityError> {
        validate_linestring(self, policy.allow_spikes)
    }
}

impl<T: GeoNum> Validate for MultiLineString<T> {
    fn kind(&self) -> GeometryKind {
        GeometryKind::MultiLineString
    }

    fn validate(&self, policy: &ValidityPolicy) -> Result<(), ValidityError> {
        validate_multi_linestring(self, policy.allow_spikes)
    }
}

impl<G: Validate + ?Sized> Validate for &G {
    fn kind(&self) -> GeometryKind {
        (**self).kind()
    }

    fn validate(&self, policy: &ValidityPolicy) -> Result<(), ValidityError> {
        (**self).validate(policy)
    }
}
