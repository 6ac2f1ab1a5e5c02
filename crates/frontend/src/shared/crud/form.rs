use contracts::domain::common::{Entity, EntityId};
use contracts::shared::validation::FieldErrors;

/// Which submit path the form will take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Draft holds no identifier; submit issues a create
    Create,
    /// Editing the record with this identifier; submit issues an update
    Edit(EntityId),
}

/// Draft, mode and inline errors of one entity form.
///
/// Plain data so the state machine is testable off-browser; components wrap
/// it in a signal and bind inputs to the draft's fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<E: Entity> {
    pub mode: FormMode,
    pub draft: E::Draft,
    pub errors: FieldErrors,
}

impl<E: Entity> FormState<E> {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            draft: E::Draft::default(),
            errors: FieldErrors::new(),
        }
    }

    /// Switch to edit mode with every field set from the record.
    pub fn populate(&mut self, record: &E) {
        self.mode = FormMode::Edit(record.id());
        self.draft = record.to_draft();
        self.errors.clear();
    }

    /// Back to the empty create-mode draft.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Run the entity schema, keeping the messages for inline display.
    pub fn validate(&mut self) -> bool {
        self.errors = E::validate(&self.draft);
        self.errors.is_empty()
    }

    pub fn selected_id(&self) -> Option<EntityId> {
        match self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.selected_id().is_some()
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }
}

impl<E: Entity> Default for FormState<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_supplier::{Supplier, SupplierDraft};

    fn record() -> Supplier {
        Supplier {
            id: 3,
            name: "Acme".into(),
            email: "sales@acme.example".into(),
            address: "12 Main St".into(),
            phone_number: "0123456789".into(),
        }
    }

    #[test]
    fn reset_then_populate_round_trips_the_record() {
        let mut form = FormState::<Supplier>::new();
        form.reset();
        form.populate(&record());

        assert_eq!(form.mode, FormMode::Edit(3));
        assert_eq!(form.draft.name, "Acme");
        assert_eq!(form.draft.email, "sales@acme.example");
        assert_eq!(form.draft.address, "12 Main St");
        assert_eq!(form.draft.phone_number, "0123456789");
    }

    #[test]
    fn reset_returns_to_the_empty_create_draft() {
        let mut form = FormState::<Supplier>::new();
        form.populate(&record());
        form.reset();

        assert_eq!(form.mode, FormMode::Create);
        assert_eq!(form.selected_id(), None);
        assert_eq!(form.draft, SupplierDraft::default());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn validate_records_the_complete_violation_set() {
        let mut form = FormState::<Supplier>::new();
        assert!(!form.validate());
        assert_eq!(form.errors.len(), 4);
        assert!(form.error("phoneNumber").is_some());

        form.draft = record().to_draft();
        assert!(form.validate());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn populate_clears_stale_errors() {
        let mut form = FormState::<Supplier>::new();
        assert!(!form.validate());
        form.populate(&record());
        assert!(form.errors.is_empty());
    }
}
