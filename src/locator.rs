//! Maidenhead locator math.
//!
//! Locators are resolved to the center of their cell, so two stations in
//! the same square are zero kilometers apart regardless of where in the
//! square they sit.

use std::fmt;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Reasons a locator string cannot be resolved to a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The locator was empty after trimming.
    Empty,
    /// The locator was not 4 or 6 characters long.
    BadLength(usize),
    /// A character was outside the range its position allows.
    BadChar {
        /// Zero-based position of the offending character.
        index: usize,
        /// The character as typed (after upper-casing).
        ch: char,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "empty grid locator"),
            GridError::BadLength(len) => write!(f, "grid locator must be 4 or 6 characters, got {len}"),
            GridError::BadChar { index, ch } => {
                write!(f, "invalid character {ch:?} at position {index} in grid locator")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Result alias for locator operations.
pub type GridResult<T> = Result<T, GridError>;

/// Resolves a 4- or 6-character locator to the latitude/longitude of its
/// cell center, in degrees. Input is trimmed and case-insensitive.
pub fn grid_to_latlon(grid: &str) -> GridResult<(f64, f64)> {
    let norm = grid.trim().to_ascii_uppercase();
    if norm.is_empty() {
        return Err(GridError::Empty);
    }
    let chars: Vec<char> = norm.chars().collect();
    if chars.len() != 4 && chars.len() != 6 {
        return Err(GridError::BadLength(chars.len()));
    }

    let mut lon = letter(chars[0], 0, 'R')? * 20.0 - 180.0;
    let mut lat = letter(chars[1], 1, 'R')? * 10.0 - 90.0;
    lon += digit(chars[2], 2)? * 2.0;
    lat += digit(chars[3], 3)?;

    if chars.len() == 6 {
        // Subsquares split the 2x1 degree square 24 ways on each axis.
        lon += letter(chars[4], 4, 'X')? / 12.0 + 1.0 / 24.0;
        lat += letter(chars[5], 5, 'X')? / 24.0 + 1.0 / 48.0;
    } else {
        lon += 1.0;
        lat += 0.5;
    }

    Ok((lat, lon))
}

/// Great-circle distance in kilometers between the centers of two locators.
pub fn distance_km(a: &str, b: &str) -> GridResult<f64> {
    let (lat1, lon1) = grid_to_latlon(a)?;
    let (lat2, lon2) = grid_to_latlon(b)?;
    Ok(haversine_km(lat1, lon1, lat2, lon2))
}

fn letter(ch: char, index: usize, last: char) -> GridResult<f64> {
    if ('A'..=last).contains(&ch) {
        Ok(f64::from(ch as u8 - b'A'))
    } else {
        Err(GridError::BadChar { index, ch })
    }
}

fn digit(ch: char, index: usize) -> GridResult<f64> {
    match ch.to_digit(10) {
        Some(value) => Ok(f64::from(value)),
        None => Err(GridError::BadChar { index, ch }),
    }
}

fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}
