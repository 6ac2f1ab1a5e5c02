use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, EntityId};
use crate::shared::validation::{FieldErrors, ValidationRules};

/// Product category, referenced by `Product.categoriesId`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Form draft for creating or updating a category
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

const NAME: ValidationRules = ValidationRules::required();
const DESCRIPTION: ValidationRules = ValidationRules::none();

impl Entity for Category {
    type Draft = CategoryDraft;

    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn validate(draft: &CategoryDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        NAME.check(&mut errors, "name", "Name", &draft.name);
        DESCRIPTION.check(&mut errors, "description", "Description", &draft.description);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_blocks_submission() {
        let draft = CategoryDraft::default();
        let errors = Category::validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Name must not be empty"));
    }

    #[test]
    fn description_is_optional() {
        let draft = CategoryDraft {
            name: "Drinks".into(),
            description: String::new(),
        };
        assert!(Category::validate(&draft).is_empty());
    }

    #[test]
    fn record_round_trips_into_draft() {
        let record = Category {
            id: 7,
            name: "Drinks".into(),
            description: "Beverages".into(),
        };
        let draft = record.to_draft();
        assert_eq!(draft.name, record.name);
        assert_eq!(draft.description, record.description);
    }

    #[test]
    fn wire_shape_matches_server() {
        let record: Category =
            serde_json::from_str(r#"{"id":7,"name":"Drinks","description":"Beverages"}"#).unwrap();
        assert_eq!(record.id, 7);

        let body = serde_json::to_value(CategoryDraft {
            name: "Drinks".into(),
            description: "Beverages".into(),
        })
        .unwrap();
        assert_eq!(body["name"], "Drinks");
        assert_eq!(body["description"], "Beverages");
    }
}
