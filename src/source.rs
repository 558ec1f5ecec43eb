//! Host log collaborators.
//!
//! The host application owns the contact log; this crate consumes it
//! through [`LogSource`] at scoring and export time.

use hashbrown::HashMap;

use crate::contact::ContactRecord;

/// Read-only view of the host's contact log.
pub trait LogSource {
    /// All contacts, ordered ascending by timestamp.
    fn contacts_asc(&self) -> Vec<ContactRecord>;

    /// Number of logged contacts.
    fn contact_count(&self) -> usize;

    /// Additional operator callsigns for the OPERATORS header line.
    fn operators(&self) -> Vec<String> {
        Vec::new()
    }
}

/// In-memory log source for hosts and tests, with a callsign index.
#[derive(Debug, Default)]
pub struct MemoryLog {
    contacts: Vec<ContactRecord>,
    by_call: HashMap<String, Vec<usize>>,
    operators: Vec<String>,
}

impl MemoryLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a contact and indexes it by upper-cased callsign.
    pub fn push(&mut self, contact: ContactRecord) {
        let idx = self.contacts.len();
        self.by_call
            .entry(contact.call.trim().to_ascii_uppercase())
            .or_default()
            .push(idx);
        self.contacts.push(contact);
    }

    /// Registers an additional operator callsign.
    pub fn add_operator(&mut self, call: impl Into<String>) {
        self.operators.push(call.into());
    }

    /// Contacts previously logged under `call`, case-insensitive, in
    /// insertion order.
    pub fn by_call(&self, call: &str) -> Vec<&ContactRecord> {
        self.by_call
            .get(&call.trim().to_ascii_uppercase())
            .into_iter()
            .flat_map(|ids| ids.iter())
            .map(|&idx| &self.contacts[idx])
            .collect()
    }

    /// Number of contacts held.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// True when no contacts are held.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl LogSource for MemoryLog {
    fn contacts_asc(&self) -> Vec<ContactRecord> {
        let mut out = self.contacts.clone();
        out.sort_by(|a, b| a.ts.cmp(&b.ts));
        out
    }

    fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    fn operators(&self) -> Vec<String> {
        self.operators.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(call: &str, ts: &str) -> ContactRecord {
        ContactRecord {
            call: call.to_string(),
            ts: ts.to_string(),
            freq_khz: 144_200,
            ..ContactRecord::default()
        }
    }

    #[test]
    fn contacts_come_back_sorted_by_timestamp() {
        let mut log = MemoryLog::new();
        log.push(contact("K2DEF", "2024-06-08 15:00:00"));
        log.push(contact("K1ABC", "2024-06-08 14:05:00"));

        let ordered = log.contacts_asc();
        assert_eq!(ordered[0].call, "K1ABC");
        assert_eq!(ordered[1].call, "K2DEF");
        assert_eq!(log.contact_count(), 2);
    }

    #[test]
    fn by_call_index_is_case_insensitive() {
        let mut log = MemoryLog::new();
        log.push(contact("K1ABC", "2024-06-08 14:05:00"));
        log.push(contact("k1abc", "2024-06-08 14:07:00"));
        log.push(contact("K2DEF", "2024-06-08 14:09:00"));

        assert_eq!(log.by_call("K1abc").len(), 2);
        assert_eq!(log.by_call("W9XYZ").len(), 0);
    }

    #[test]
    fn operators_round_trip() {
        let mut log = MemoryLog::new();
        assert!(log.operators().is_empty());
        log.add_operator("N1MM");
        log.add_operator("K5TUX");
        assert_eq!(log.operators(), vec!["N1MM".to_string(), "K5TUX".to_string()]);
    }
}
