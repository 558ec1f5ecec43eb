//! Host-supplied station and contest configuration records.

use serde::{Deserialize, Serialize};

/// Overlay sentinel meaning "no overlay category entered".
pub const OVERLAY_NONE: &str = "N/A";

/// The logging operator's own station information.
///
/// Supplied whole by the host and read-only here. Field names mirror the
/// host's station document, so `from_json_str` accepts it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct StationProfile {
    /// Station callsign.
    pub call: String,
    /// Station Maidenhead grid square.
    pub grid_square: String,
    /// Operator name.
    pub name: String,
    /// Street address.
    pub street1: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal code.
    pub zip: String,
    /// Country.
    pub country: String,
    /// Contact email.
    pub email: String,
    /// Club name, empty when none.
    pub club: String,
    /// ARRL section used for the LOCATION header.
    #[serde(rename = "ARRLSection")]
    pub arrl_section: String,
}

impl StationProfile {
    /// Parses a station document from its host JSON form.
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}

/// Configuration of the active contest instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ContestSettings {
    /// CATEGORY-OPERATOR value.
    pub operator_category: String,
    /// CATEGORY-ASSISTED value.
    pub assisted_category: String,
    /// CATEGORY-BAND value.
    pub band_category: String,
    /// CATEGORY-MODE value.
    pub mode_category: String,
    /// CATEGORY-POWER value.
    pub power_category: String,
    /// CATEGORY-TRANSMITTER value.
    pub transmitter_category: String,
    /// CATEGORY-OVERLAY value; [`OVERLAY_NONE`] suppresses the header line.
    pub overlay_category: String,
    /// Sent-exchange template, upper-cased into each QSO line.
    pub sent_exchange: String,
}

impl Default for ContestSettings {
    fn default() -> Self {
        Self {
            operator_category: String::new(),
            assisted_category: String::new(),
            band_category: String::new(),
            mode_category: String::new(),
            power_category: String::new(),
            transmitter_category: String::new(),
            overlay_category: OVERLAY_NONE.to_string(),
            sent_exchange: String::new(),
        }
    }
}

impl ContestSettings {
    /// Parses contest settings from their host JSON form.
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// True when an overlay category other than the sentinel is set.
    pub fn has_overlay(&self) -> bool {
        self.overlay_category != OVERLAY_NONE
    }
}
