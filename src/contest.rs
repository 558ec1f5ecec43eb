//! Contest profile and top-level rule operations.
//!
//! Everything takes its inputs explicitly: the station profile, the contest
//! settings, and a [`LogSource`]. There is no shared session state.

use std::path::{Path, PathBuf};

use crate::{
    cabrillo::{self, ExportResult},
    contact::ContactRecord,
    scoring,
    source::LogSource,
    station::{ContestSettings, StationProfile},
    types::{DupeScheme, Mode},
};

/// Contest identifier used in the CONTEST header and export file name.
pub const CABRILLO_NAME: &str = "UHF_VHF_GENERAL";

/// Display name of the contest.
pub const CONTEST_NAME: &str = "UHF VHF General Logging";

/// Static description of one contest's rules and log-view behavior.
#[derive(Debug, Clone)]
pub struct ContestProfile {
    /// Human-readable contest name.
    pub name: &'static str,
    /// Cabrillo contest identifier.
    pub cabrillo_name: &'static str,
    /// Modes the contest accepts.
    pub modes: &'static [Mode],
    /// Dupe-checking scheme the host should apply.
    pub dupe_scheme: DupeScheme,
    /// Log-view column headers.
    pub columns: &'static [&'static str],
    /// Whether a space advances out of each entry field.
    pub advance_on_space: &'static [bool],
}

/// Profile for the UHF/VHF general contest: any station, worked once per
/// band, one point per kilometer.
pub fn profile() -> ContestProfile {
    ContestProfile {
        name: CONTEST_NAME,
        cabrillo_name: CABRILLO_NAME,
        modes: &[Mode::SSB, Mode::FM, Mode::AM, Mode::CW],
        dupe_scheme: DupeScheme::EachBand,
        columns: &[
            "YYYY-MM-DD HH:MM:SS",
            "Call",
            "Freq",
            "Mode",
            "Exchange1",
            "PTS",
        ],
        advance_on_space: &[true, true, true, true, true],
    }
}

/// Points for one contact: kilometers between the station grid and the
/// received grid. Unscorable grids yield zero.
pub fn points(station: &StationProfile, contact: &ContactRecord) -> u32 {
    scoring::contact_points(&station.grid_square, &contact.exchange)
}

/// Multiplier display value. This contest recognizes no multipliers.
pub fn show_mults(_log: &dyn LogSource) -> u32 {
    0
}

/// Number of contacts in the log.
pub fn show_qso(log: &dyn LogSource) -> usize {
    log.contact_count()
}

/// Claimed score: the sum of per-contact distances over the whole log.
pub fn calc_score(station: &StationProfile, log: &dyn LogSource) -> u64 {
    let contacts = log.contacts_asc();
    scoring::claimed_score(&station.grid_square, &contacts)
}

/// Exports the Cabrillo report to the user's home directory and returns
/// the written path.
pub fn cabrillo(
    station: &StationProfile,
    settings: &ContestSettings,
    log: &dyn LogSource,
) -> ExportResult<PathBuf> {
    log::debug!("cabrillo export for {} ({CABRILLO_NAME})", station.call);
    cabrillo::write_report(station, settings, &log.contacts_asc(), &log.operators())
}

/// Exports the Cabrillo report into `dir` instead of the home directory.
pub fn cabrillo_to(
    dir: &Path,
    station: &StationProfile,
    settings: &ContestSettings,
    log: &dyn LogSource,
) -> ExportResult<PathBuf> {
    cabrillo::write_report_to(dir, station, settings, &log.contacts_asc(), &log.operators())
}
