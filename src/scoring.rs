//! Distance scoring, the (empty) multiplier unit, and dupe tracking.

use hashbrown::HashSet;

use crate::{
    contact::ContactRecord,
    locator::{self, GridError},
    types::DupeScheme,
};

/// Points for one contact: great-circle kilometers between the station
/// grid and the received grid, rounded to the nearest whole kilometer.
pub fn try_contact_points(own_grid: &str, their_grid: &str) -> Result<u32, GridError> {
    let km = locator::distance_km(own_grid, their_grid)?;
    Ok(km.round() as u32)
}

/// Defensive form of [`try_contact_points`]: an empty or malformed grid on
/// either side scores zero points.
pub fn contact_points(own_grid: &str, their_grid: &str) -> u32 {
    match try_contact_points(own_grid, their_grid) {
        Ok(points) => points,
        Err(err) => {
            log::debug!("unscorable grid pair {own_grid:?} / {their_grid:?}: {err}");
            0
        }
    }
}

/// Multiplier count for a contact. This contest recognizes no multiplier
/// categories; the unit exists for interface uniformity.
pub fn multiplier_count(_contact: &ContactRecord) -> u32 {
    0
}

/// Claimed score: the sum of per-contact points over the log.
pub fn claimed_score<'a, I>(own_grid: &str, contacts: I) -> u64
where
    I: IntoIterator<Item = &'a ContactRecord>,
{
    contacts
        .into_iter()
        .map(|contact| u64::from(contact_points(own_grid, &contact.exchange)))
        .sum()
}

/// Identity of a contact for dupe purposes under a given scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DupeKey {
    /// Upper-cased remote callsign.
    pub call: String,
    /// Band component, present when the scheme is band-scoped.
    pub band: Option<crate::types::Band>,
    /// Mode component, present when the scheme is mode-scoped.
    pub mode: Option<String>,
}

/// Tracks worked stations according to a [`DupeScheme`].
#[derive(Debug)]
pub struct DupeTracker {
    scheme: DupeScheme,
    seen: HashSet<DupeKey>,
}

impl DupeTracker {
    /// Creates an empty tracker for `scheme`.
    pub fn new(scheme: DupeScheme) -> Self {
        Self {
            scheme,
            seen: HashSet::new(),
        }
    }

    fn key_for(&self, contact: &ContactRecord) -> Option<DupeKey> {
        let call = contact.call.trim().to_ascii_uppercase();
        match self.scheme {
            DupeScheme::OncePerContest => Some(DupeKey {
                call,
                band: None,
                mode: None,
            }),
            DupeScheme::EachBand => Some(DupeKey {
                call,
                band: Some(contact.band()),
                mode: None,
            }),
            DupeScheme::EachBandMode => Some(DupeKey {
                call,
                band: Some(contact.band()),
                mode: Some(crate::cabrillo::cabrillo_mode(&contact.mode).to_string()),
            }),
            DupeScheme::NoChecking => None,
        }
    }

    /// Whether `contact` repeats an already-recorded contact.
    pub fn is_dupe(&self, contact: &ContactRecord) -> bool {
        self.key_for(contact)
            .is_some_and(|key| self.seen.contains(&key))
    }

    /// Records `contact`, returning true when it was already a dupe.
    pub fn check_and_record(&mut self, contact: &ContactRecord) -> bool {
        match self.key_for(contact) {
            Some(key) => !self.seen.insert(key),
            None => false,
        }
    }

    /// Number of distinct keys recorded so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(call: &str, freq_khz: u64, mode: &str, grid: &str) -> ContactRecord {
        ContactRecord {
            call: call.to_string(),
            freq_khz,
            mode: mode.to_string(),
            exchange: grid.to_string(),
            ..ContactRecord::default()
        }
    }

    #[test]
    fn points_are_rounded_kilometers() {
        assert_eq!(contact_points("FN31", "FN42"), 199);
        assert_eq!(contact_points("FN31", "FN31"), 0);
    }

    #[test]
    fn malformed_grids_score_zero() {
        assert_eq!(contact_points("FN31", ""), 0);
        assert_eq!(contact_points("", "FN42"), 0);
        assert_eq!(contact_points("FN31", "not a grid"), 0);
        assert!(try_contact_points("FN31", "").is_err());
    }

    #[test]
    fn multiplier_unit_is_always_zero() {
        assert_eq!(multiplier_count(&contact("K1ABC", 144_200, "SSB", "FN42")), 0);
        assert_eq!(multiplier_count(&ContactRecord::default()), 0);
    }

    #[test]
    fn claimed_score_sums_contact_points() {
        let log = vec![
            contact("K1ABC", 144_200, "USB", "FN42"),
            contact("K2DEF", 432_100, "FM", "FN31"),
            contact("K3GHI", 144_250, "CW", "bogus"),
        ];
        let expected: u64 = log
            .iter()
            .map(|c| u64::from(contact_points("FN31", &c.exchange)))
            .sum();
        assert_eq!(claimed_score("FN31", &log), expected);
        assert_eq!(claimed_score("FN31", &log), 199);
    }

    #[test]
    fn each_band_scheme_admits_new_bands_only() {
        let mut dupes = DupeTracker::new(DupeScheme::EachBand);
        assert!(!dupes.check_and_record(&contact("K1ABC", 144_200, "SSB", "FN42")));
        assert!(dupes.is_dupe(&contact("k1abc", 144_300, "CW", "FN42")));
        assert!(dupes.check_and_record(&contact("K1ABC", 144_300, "CW", "FN42")));
        assert!(!dupes.check_and_record(&contact("K1ABC", 432_100, "SSB", "FN42")));
        assert_eq!(dupes.len(), 2);
    }

    #[test]
    fn band_mode_scheme_folds_sideband_modes_together() {
        let mut dupes = DupeTracker::new(DupeScheme::EachBandMode);
        assert!(!dupes.check_and_record(&contact("K1ABC", 144_200, "USB", "FN42")));
        // LSB and USB are the same reported mode, so this is a dupe.
        assert!(dupes.check_and_record(&contact("K1ABC", 144_200, "LSB", "FN42")));
        assert!(!dupes.check_and_record(&contact("K1ABC", 144_200, "CW", "FN42")));
    }

    #[test]
    fn no_checking_scheme_never_flags() {
        let mut dupes = DupeTracker::new(DupeScheme::NoChecking);
        assert!(!dupes.check_and_record(&contact("K1ABC", 144_200, "SSB", "FN42")));
        assert!(!dupes.check_and_record(&contact("K1ABC", 144_200, "SSB", "FN42")));
        assert!(dupes.is_empty());
    }
}
