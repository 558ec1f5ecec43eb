//! Contest rules and Cabrillo export for VHF/UHF general contesting.
//!
//! Scoring awards one point per kilometer of great-circle distance between
//! the station's grid square and the grid square received in the exchange;
//! the claimed score is the plain sum over the log. There are no
//! multipliers. Export renders a Cabrillo v3.0 report with CRLF line
//! endings and a fixed file name in the user's home directory.
//!
//! # Examples
//!
//! Scoring and report rendering against an in-memory log:
//! ```
//! use vhflog::{
//!     cabrillo,
//!     contact::ContactRecord,
//!     contest,
//!     source::{LogSource, MemoryLog},
//!     station::{ContestSettings, StationProfile},
//! };
//!
//! let station = StationProfile {
//!     call: "W1AW".to_string(),
//!     grid_square: "FN31".to_string(),
//!     ..StationProfile::default()
//! };
//! let settings = ContestSettings::default();
//!
//! let mut contact = ContactRecord {
//!     ts: "2024-06-08 14:05:00".to_string(),
//!     call: "K1ABC".to_string(),
//!     freq_khz: 144_200,
//!     mode: "USB".to_string(),
//!     prefix: "W1AW".to_string(),
//!     ..ContactRecord::default()
//! };
//! contact.capture_exchange("59", "59", "fn42");
//!
//! let mut log = MemoryLog::new();
//! log.push(contact);
//!
//! assert_eq!(contest::calc_score(&station, &log), 199);
//! let report = cabrillo::render_report(&station, &settings, &log.contacts_asc(), &[]);
//! assert!(report.contains("CLAIMED-SCORE: 199"));
//! ```
#![deny(missing_docs)]

/// Cabrillo rendering and file export.
pub mod cabrillo;
/// Logged contact records.
pub mod contact;
/// Contest profile and top-level rule operations.
pub mod contest;
/// Entry-form wiring declarations.
pub mod form;
/// Maidenhead locator math.
pub mod locator;
/// Distance scoring, multipliers, and dupe tracking.
pub mod scoring;
/// Host log collaborators.
pub mod source;
/// Station and contest configuration records.
pub mod station;
/// Shared contest enums.
pub mod types;
