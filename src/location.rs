//! Coordinate values and the pluggable sources that produce them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Latitude/longitude of Cairo, reported by the default source.
pub const CAIRO: Coordinates = Coordinates {
    latitude: 30.0444,
    longitude: 31.2357,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let reason = if !self.latitude.is_finite() || !self.longitude.is_finite() {
            Some("coordinates must be finite")
        } else if !(-90.0..=90.0).contains(&self.latitude) {
            Some("latitude must lie within [-90, 90]")
        } else if !(-180.0..=180.0).contains(&self.longitude) {
            Some("longitude must lie within [-180, 180]")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(Error::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
                reason,
            }),
            None => Ok(()),
        }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(value: Coordinates) -> Self {
        (value.latitude, value.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            decimal(self.latitude),
            decimal(self.longitude)
        )
    }
}

// Shortest round-trip rendering, keeping a trailing ".0" on integral values.
// Magnitudes below 1e-4 or from 1e16 up switch to exponent form with a signed,
// two-digit exponent ("1e-05", "1.5e+16").
fn decimal(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let text = format!("{value:e}");
        if let Some((mantissa, exponent)) = text.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.abs());
            }
        }
        return text;
    }
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Where a GPS unit reads its position from.
pub trait LocationSource: Send + Sync {
    fn locate(&self) -> Coordinates;
}

/// Always reports the same position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(Coordinates);

impl FixedLocation {
    pub fn new(coordinates: impl Into<Coordinates>) -> Self {
        Self(coordinates.into())
    }
}

impl Default for FixedLocation {
    fn default() -> Self {
        Self(CAIRO)
    }
}

impl LocationSource for FixedLocation {
    fn locate(&self) -> Coordinates {
        self.0
    }
}
