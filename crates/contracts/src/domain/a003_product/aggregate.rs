use serde::{Deserialize, Serialize};

use crate::domain::a001_category::Category;
use crate::domain::a002_supplier::Supplier;
use crate::domain::common::{Entity, EntityId};
use crate::shared::validation::{FieldErrors, ValidationRules};

/// Product on sale, linked to one category and one supplier.
///
/// The server denormalizes the referenced category and supplier onto the
/// record; both snapshots are read-only on the client and never sent back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub categories_id: EntityId,
    #[serde(default)]
    pub supplier_id: EntityId,
    #[serde(default)]
    pub categories: Option<Category>,
    #[serde(default)]
    pub supplier: Option<Supplier>,
}

/// Form draft for creating or updating a product.
///
/// Numeric fields default to `0` when cleared; `0` is schema-valid even
/// where it is domain-meaningless (a free product, an unset reference).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub discount: f64,
    pub stock: i64,
    pub categories_id: EntityId,
    pub supplier_id: EntityId,
}

const NAME: ValidationRules = ValidationRules::required();
const DESCRIPTION: ValidationRules = ValidationRules::required();

impl Entity for Product {
    type Draft = ProductDraft;

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            discount: self.discount,
            stock: self.stock,
            categories_id: self.categories_id,
            supplier_id: self.supplier_id,
        }
    }

    fn validate(draft: &ProductDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        NAME.check(&mut errors, "name", "Name", &draft.name);
        DESCRIPTION.check(&mut errors, "description", "Description", &draft.description);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Green tea".into(),
            description: "Loose leaf, 100g".into(),
            price: 4.5,
            discount: 0.0,
            stock: 120,
            categories_id: 7,
            supplier_id: 3,
        }
    }

    #[test]
    fn zero_numbers_are_schema_valid() {
        // structural validation only; price 0 / unset references pass
        let mut d = draft();
        d.price = 0.0;
        d.categories_id = 0;
        d.supplier_id = 0;
        assert!(Product::validate(&d).is_empty());
    }

    #[test]
    fn blank_strings_are_not() {
        let errors = Product::validate(&ProductDraft::default());
        assert_eq!(errors.len(), 2);
        assert!(errors.get("name").is_some());
        assert!(errors.get("description").is_some());
    }

    #[test]
    fn snapshots_are_optional_on_the_wire() {
        let record: Product = serde_json::from_str(
            r#"{"id":1,"name":"Green tea","description":"","price":4.5,
                "discount":0,"stock":120,"categoriesId":7,"supplierId":3}"#,
        )
        .unwrap();
        assert!(record.categories.is_none());
        assert!(record.supplier.is_none());
        assert_eq!(record.categories_id, 7);

        let record: Product = serde_json::from_str(
            r#"{"id":1,"name":"Green tea","price":4.5,"discount":0,"stock":120,
                "categoriesId":7,"supplierId":3,
                "categories":{"id":7,"name":"Drinks","description":""},
                "supplier":{"id":3,"name":"Acme","email":"sales@acme.example"}}"#,
        )
        .unwrap();
        assert_eq!(record.categories.as_ref().unwrap().name, "Drinks");
        assert_eq!(record.supplier.as_ref().unwrap().id, 3);
    }

    #[test]
    fn draft_keeps_snapshot_fields_off_the_request_body() {
        let body = serde_json::to_value(draft()).unwrap();
        assert_eq!(body["categoriesId"], 7);
        assert_eq!(body["supplierId"], 3);
        assert!(body.get("categories").is_none());
        assert!(body.get("supplier").is_none());
    }

    #[test]
    fn edit_round_trip_preserves_every_field() {
        let record = Product {
            id: 11,
            name: "Green tea".into(),
            description: "Loose leaf".into(),
            price: 4.5,
            discount: 0.1,
            stock: 120,
            categories_id: 7,
            supplier_id: 3,
            categories: None,
            supplier: None,
        };
        let d = record.to_draft();
        assert_eq!(d, ProductDraft {
            name: "Green tea".into(),
            description: "Loose leaf".into(),
            price: 4.5,
            discount: 0.1,
            stock: 120,
            categories_id: 7,
            supplier_id: 3,
        });
    }
}
