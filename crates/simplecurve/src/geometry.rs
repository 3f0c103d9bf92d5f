//! Owned, serializable linear geometry.
//!
//! [`Geometry`] is the closed set of kinds this crate validates, wrapping
//! the `geo` types. It serializes as GeoJSON-style geometry objects:
//!
//! ```json
//! {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}
//! {"type": "MultiLineString", "coordinates": [[[0.0, 0.0], [1.0, 0.0]]]}
//! ```
//!
//! Uses custom `Serialize`/`Deserialize` implementations through a proxy
//! enum because `geo` only implements serde behind a feature flag, and with
//! a different layout.

use geo::{Coord, LineString, MultiLineString};
use serde::{Deserialize, Serialize};

use crate::dispatch::{GeometryKind, Validate};
use crate::types::{ValidityError, ValidityPolicy};

/// A linear geometry of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A single curve.
    LineString(LineString<f64>),
    /// A collection of curves.
    MultiLineString(MultiLineString<f64>),
}

impl Validate for Geometry {
    fn kind(&self) -> GeometryKind {
        match self {
            Self::LineString(_) => GeometryKind::LineString,
            Self::MultiLineString(_) => GeometryKind::MultiLineString,
        }
    }

    fn validate(&self, policy: &ValidityPolicy) -> Result<(), ValidityError> {
        match self {
            Self::LineString(ls) => ls.validate(policy),
            Self::MultiLineString(mls) => mls.validate(policy),
        }
    }
}

impl From<LineString<f64>> for Geometry {
    fn from(ls: LineString<f64>) -> Self {
        Self::LineString(ls)
    }
}

impl From<MultiLineString<f64>> for Geometry {
    fn from(mls: MultiLineString<f64>) -> Self {
        Self::MultiLineString(mls)
    }
}

/// Serde-compatible proxy for [`Geometry`].
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
enum GeometryProxy {
    LineString(Vec<[f64; 2]>),
    MultiLineString(Vec<Vec<[f64; 2]>>),
}

fn positions(ls: &LineString<f64>) -> Vec<[f64; 2]> {
    ls.0.iter().map(|&c| <[f64; 2]>::from(c)).collect()
}

fn linestring(positions: Vec<[f64; 2]>) -> LineString<f64> {
    LineString::new(positions.into_iter().map(Coord::from).collect())
}

impl Serialize for Geometry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let proxy = match self {
            Self::LineString(ls) => GeometryProxy::LineString(positions(ls)),
            Self::MultiLineString(mls) => {
                GeometryProxy::MultiLineString(mls.iter().map(positions).collect())
            }
        };
        proxy.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let proxy = GeometryProxy::deserialize(deserializer)?;
        Ok(match proxy {
            GeometryProxy::LineString(coords) => Self::LineString(linestring(coords)),
            GeometryProxy::MultiLineString(lines) => Self::MultiLineString(MultiLineString::new(
                lines.into_iter().map(linestring).collect(),
            )),
        })
    }
}
