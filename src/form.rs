//! Entry-form wiring for the contact-entry window.
//!
//! Declarative only: the host form framework consumes this to decide which
//! exchange fields are visible, how they are labeled, and where TAB moves
//! focus. Nothing here renders anything.

use hashbrown::HashMap;

/// Fields of the host's contact-entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    /// Remote callsign entry.
    Callsign,
    /// First exchange field.
    Field1,
    /// Second exchange field.
    Field2,
    /// Third exchange field.
    Field3,
    /// Fourth exchange field.
    Field4,
}

/// Visibility and label for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSetup {
    /// The field being configured.
    pub field: EntryField,
    /// Whether the field is shown.
    pub visible: bool,
    /// Replacement label, when the default does not fit the contest.
    pub label: Option<&'static str>,
}

/// Complete form wiring for one contest.
#[derive(Debug, Clone)]
pub struct FormLayout {
    /// Per-field visibility and labels.
    pub fields: Vec<FieldSetup>,
    /// Forward TAB targets.
    pub tab_next: HashMap<EntryField, EntryField>,
    /// Backward TAB targets.
    pub tab_prev: HashMap<EntryField, EntryField>,
}

/// Form wiring for this contest: signal reports plus a grid entry labeled
/// "Grid"; the fourth field stays hidden.
pub fn form_layout() -> FormLayout {
    let fields = vec![
        FieldSetup { field: EntryField::Field1, visible: true, label: None },
        FieldSetup { field: EntryField::Field2, visible: true, label: None },
        FieldSetup { field: EntryField::Field3, visible: true, label: Some("Grid") },
        FieldSetup { field: EntryField::Field4, visible: false, label: None },
    ];

    let mut tab_next = HashMap::new();
    tab_next.insert(EntryField::Callsign, EntryField::Field3);
    tab_next.insert(EntryField::Field1, EntryField::Field3);
    tab_next.insert(EntryField::Field2, EntryField::Field3);
    tab_next.insert(EntryField::Field3, EntryField::Callsign);

    let mut tab_prev = HashMap::new();
    tab_prev.insert(EntryField::Callsign, EntryField::Field3);
    tab_prev.insert(EntryField::Field1, EntryField::Callsign);
    tab_prev.insert(EntryField::Field2, EntryField::Callsign);
    tab_prev.insert(EntryField::Field3, EntryField::Callsign);

    FormLayout {
        fields,
        tab_next,
        tab_prev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_entry_is_visible_and_labeled() {
        let layout = form_layout();
        let grid = layout
            .fields
            .iter()
            .find(|setup| setup.field == EntryField::Field3)
            .expect("field 3 configured");
        assert!(grid.visible);
        assert_eq!(grid.label, Some("Grid"));

        let unused = layout
            .fields
            .iter()
            .find(|setup| setup.field == EntryField::Field4)
            .expect("field 4 configured");
        assert!(!unused.visible);
    }

    #[test]
    fn tab_cycles_between_callsign_and_grid() {
        let layout = form_layout();
        assert_eq!(
            layout.tab_next.get(&EntryField::Callsign),
            Some(&EntryField::Field3)
        );
        assert_eq!(
            layout.tab_next.get(&EntryField::Field3),
            Some(&EntryField::Callsign)
        );
        assert_eq!(
            layout.tab_prev.get(&EntryField::Field1),
            Some(&EntryField::Callsign)
        );
    }
}
