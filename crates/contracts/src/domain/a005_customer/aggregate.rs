use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, EntityId};
use crate::shared::validation::{FieldErrors, ValidationRules};

/// Shop customer, referenced by `Order.customerId`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub birthday: String,
}

/// Form draft for creating or updating a customer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
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

impl Entity for Customer {
    type Draft = CustomerDraft;

    fn collection_name() -> &'static str {
        "customers"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> CustomerDraft {
        CustomerDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            phone_number: self.phone_number.clone(),
            birthday: self.birthday.clone(),
        }
    }

    fn validate(draft: &CustomerDraft) -> FieldErrors {
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
        let errors = Customer::validate(&CustomerDraft::default());
        assert_eq!(errors.len(), 6);
        assert!(errors.get("birthday").is_some());
    }

    #[test]
    fn populate_then_read_back_returns_record_values() {
        let record = Customer {
            id: 42,
            first_name: "Linh".into(),
            last_name: "Tran".into(),
            email: "linh.tran@mail.example".into(),
            address: "Hoi An".into(),
            phone_number: "0912345678".into(),
            birthday: "1998-11-23".into(),
        };
        let draft = record.to_draft();
        assert_eq!(draft.first_name, "Linh");
        assert_eq!(draft.last_name, "Tran");
        assert_eq!(draft.email, "linh.tran@mail.example");
        assert_eq!(draft.address, "Hoi An");
        assert_eq!(draft.phone_number, "0912345678");
        assert_eq!(draft.birthday, "1998-11-23");
    }
}
