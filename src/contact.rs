//! Logged contact records.

use serde::{Deserialize, Serialize};

use crate::types::Band;

/// Fully materialized contact row as supplied by the host log.
///
/// The host creates and owns these; this crate only reads them. Serde field
/// names match the host's column names, so rows round-trip through JSON
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContactRecord {
    /// Timestamp in `YYYY-MM-DD HH:MM:SS` form.
    #[serde(rename = "TS")]
    pub ts: String,
    /// Remote station callsign.
    #[serde(rename = "Call")]
    pub call: String,
    /// Frequency in kHz.
    #[serde(rename = "Freq")]
    pub freq_khz: u64,
    /// Mode as logged. Free-form; normalized only at report time.
    #[serde(rename = "Mode")]
    pub mode: String,
    /// Signal report sent.
    #[serde(rename = "SNT")]
    pub report_sent: String,
    /// Signal report received.
    #[serde(rename = "RCV")]
    pub report_rcvd: String,
    /// Received exchange: the remote station's grid square.
    #[serde(rename = "Exchange1")]
    pub exchange: String,
    /// Section or zone, when the contest carries one.
    #[serde(rename = "Sect")]
    pub section: String,
    /// Logging station prefix used on the sent side of a QSO line.
    #[serde(rename = "StationPrefix")]
    pub prefix: String,
}

impl ContactRecord {
    /// Band bucket derived from the logged frequency.
    pub fn band(&self) -> Band {
        Band::from_khz(self.freq_khz)
    }

    /// Records the operator-entered exchange. The grid is upper-cased on
    /// capture; the reports are stored as typed.
    pub fn capture_exchange(&mut self, sent: &str, rcvd: &str, grid: &str) {
        self.report_sent = sent.to_string();
        self.report_rcvd = rcvd.to_string();
        self.exchange = grid.trim().to_ascii_uppercase();
    }
}
