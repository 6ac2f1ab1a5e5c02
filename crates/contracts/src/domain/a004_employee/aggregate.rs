use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, EntityId};
use crate::shared::validation::{FieldErrors, ValidationRules};

/// Back-office employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    /// ISO date string; bound to a date input, never parsed client-side
    #[serde(default)]
    pub birthday: String,
}

/// Form draft for creating or updating an employee
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub birthday: String,
}

const FIRST_NAME: ValidationRules = ValidationRules::required();
const LAST_NAME: ValidationRules = ValidationRules::required();
const EMAIL: ValidationRules = ValidationRules::email();
const ADDRESS: ValidationRules = ValidationRules::required();
const PHONE_NUMBER: ValidationRules = ValidationRules::required();
const BIRTHDAY: ValidationRules = ValidationRules::required();

impl Entity for Employee {
    type Draft = EmployeeDraft;

    fn collection_name() -> &'static str {
        "employees"
    }

    fn element_name() -> &'static str {
        "Employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            phone_number: self.phone_number.clone(),
            birthday: self.birthday.clone(),
        }
    }

    fn validate(draft: &EmployeeDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        FIRST_NAME.check(&mut errors, "firstName", "First name", &draft.first_name);
        LAST_NAME.check(&mut errors, "lastName", "Last name", &draft.last_name);
        EMAIL.check(&mut errors, "email", "E-mail", &draft.email);
        ADDRESS.check(&mut errors, "address", "Address", &draft.address);
        PHONE_NUMBER.check(&mut errors, "phoneNumber", "Phone number", &draft.phone_number);
        BIRTHDAY.check(&mut errors, "birthday", "Birthday", &draft.birthday);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_reports_all_six_fields() {
        let errors = Employee::validate(&EmployeeDraft::default());
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn complete_draft_passes() {
        let draft = EmployeeDraft {
            first_name: "An".into(),
            last_name: "Nguyen".into(),
            email: "an.nguyen@shop.example".into(),
            address: "Da Nang".into(),
            phone_number: "0905123456".into(),
            birthday: "1992-04-01".into(),
        };
        assert!(Employee::validate(&draft).is_empty());
    }
}
