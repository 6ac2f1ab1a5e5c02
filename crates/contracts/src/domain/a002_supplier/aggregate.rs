use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, EntityId};
use crate::shared::validation::{FieldErrors, ValidationRules};

/// Goods supplier, referenced by `Product.supplierId`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
}

/// Form draft for creating or updating a supplier
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
}

const NAME: ValidationRules = ValidationRules::required();
const EMAIL: ValidationRules = ValidationRules::email();
const ADDRESS: ValidationRules = ValidationRules::required();
const PHONE_NUMBER: ValidationRules = ValidationRules::required();

impl Entity for Supplier {
    type Draft = SupplierDraft;

    fn collection_name() -> &'static str {
        "suppliers"
    }

    fn element_name() -> &'static str {
        "Supplier"
    }

    fn list_name() -> &'static str {
        "Suppliers"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> SupplierDraft {
        SupplierDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            phone_number: self.phone_number.clone(),
        }
    }

    fn validate(draft: &SupplierDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        NAME.check(&mut errors, "name", "Name", &draft.name);
        EMAIL.check(&mut errors, "email", "E-mail", &draft.email);
        ADDRESS.check(&mut errors, "address", "Address", &draft.address);
        PHONE_NUMBER.check(&mut errors, "phoneNumber", "Phone number", &draft.phone_number);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_reports_every_violated_field() {
        let errors = Supplier::validate(&SupplierDraft::default());
        assert_eq!(errors.len(), 4);
        for field in ["name", "email", "address", "phoneNumber"] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn malformed_email_is_rejected() {
        let draft = SupplierDraft {
            name: "Acme".into(),
            email: "acme-at-example".into(),
            address: "12 Main St".into(),
            phone_number: "0123456789".into(),
        };
        let errors = Supplier::validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("E-mail is not a valid e-mail address"));
    }

    #[test]
    fn complete_draft_passes() {
        let draft = SupplierDraft {
            name: "Acme".into(),
            email: "sales@acme.example".into(),
            address: "12 Main St".into(),
            phone_number: "0123456789".into(),
        };
        assert!(Supplier::validate(&draft).is_empty());
    }

    #[test]
    fn draft_serializes_camel_case() {
        let body = serde_json::to_value(SupplierDraft {
            name: "Acme".into(),
            email: "sales@acme.example".into(),
            address: "12 Main St".into(),
            phone_number: "0123456789".into(),
        })
        .unwrap();
        assert_eq!(body["phoneNumber"], "0123456789");
        assert!(body.get("phone_number").is_none());
    }
}
