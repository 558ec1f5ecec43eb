//! Shared contest enums and band plumbing.

use serde::{Deserialize, Serialize};

/// VHF/UHF contest band bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    /// 2 meters.
    B2m,
    /// 70 centimeters.
    B70cm,
    /// 23 centimeters.
    B23cm,
    /// 13 centimeters.
    B13cm,
    /// Any non-standard band.
    Other,
}

impl Band {
    /// Classifies a kHz frequency into a band bucket.
    pub fn from_khz(khz: u64) -> Self {
        match khz {
            144_000..=148_000 => Self::B2m,
            420_000..=450_000 => Self::B70cm,
            1_240_000..=1_300_000 => Self::B23cm,
            2_300_000..=2_450_000 => Self::B13cm,
            _ => Self::Other,
        }
    }
}

/// Emission mode bucket for the modes this contest accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Single side-band phone.
    SSB,
    /// Frequency modulation phone.
    FM,
    /// Amplitude modulation phone.
    AM,
    /// Continuous Wave.
    CW,
}

impl Mode {
    /// Cabrillo spelling of the mode bucket.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SSB => "SSB",
            Self::FM => "FM",
            Self::AM => "AM",
            Self::CW => "CW",
        }
    }
}

/// Dupe-checking scheme the host should apply for a contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DupeScheme {
    /// Each station counts once for the whole contest.
    OncePerContest,
    /// Each station counts once per band.
    EachBand,
    /// Each station counts once per band and mode.
    EachBandMode,
    /// No dupe checking.
    NoChecking,
}
