//! Pressure-to-depth conversion for CTD profiles.
//!
//! Implements the Sea-Bird application note AN69 formula
//! (<http://www.seabird.com/application_notes/AN69.htm>). Depth is returned
//! negative downward, following the profile coordinate convention.

use std::f64::consts::PI;

/// Convert pressure in decibars to depth in meters at the given latitude
/// (decimal degrees).
pub fn pressure_to_depth(pressure: f64, latitude: f64) -> f64 {
    let x = ((PI / 180.0) * latitude / 57.29578).sin().powi(2);
    let g = 9.780318 * (1.0 + (5.2788e-3 + 2.36e-5 * x) * x) + 1.092e-6 * pressure;

    -((((-1.82e-15 * pressure + 2.279e-10) * pressure - 2.2512e-5) * pressure + 9.72659)
        * pressure)
        / g
}
