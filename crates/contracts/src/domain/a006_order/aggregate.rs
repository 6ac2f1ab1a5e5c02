use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, EntityId};
use crate::shared::validation::{FieldErrors, ValidationRules};

/// Customer order with its line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    #[serde(default)]
    pub created_date: String,
    #[serde(default)]
    pub shipped_date: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub shipping_address: String,
    #[serde(default)]
    pub shipping_city: String,
    #[serde(default)]
    pub payment_type: String,
    #[serde(default)]
    pub customer_id: EntityId,
    #[serde(default)]
    pub employee_id: EntityId,
    #[serde(default)]
    pub order_details: Vec<OrderDetail>,
}

/// One order line. The same shape is used in records and drafts; the
/// server key is the (orderId, productId) pair, not a surrogate id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(default)]
    pub order_id: EntityId,
    #[serde(default)]
    pub product_id: EntityId,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
}

/// Form draft for creating or updating an order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub created_date: String,
    pub shipped_date: String,
    pub status: String,
    pub description: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub payment_type: String,
    pub customer_id: EntityId,
    pub employee_id: EntityId,
    pub order_details: Vec<OrderDetail>,
}

const CREATED_DATE: ValidationRules = ValidationRules::required();
const SHIPPED_DATE: ValidationRules = ValidationRules::required();
const STATUS: ValidationRules = ValidationRules::required();
const DESCRIPTION: ValidationRules = ValidationRules::required();
const SHIPPING_ADDRESS: ValidationRules = ValidationRules::required();
const SHIPPING_CITY: ValidationRules = ValidationRules::required();
const PAYMENT_TYPE: ValidationRules = ValidationRules::required();

impl Entity for Order {
    type Draft = OrderDraft;

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> OrderDraft {
        OrderDraft {
            created_date: self.created_date.clone(),
            shipped_date: self.shipped_date.clone().unwrap_or_default(),
            status: self.status.clone(),
            description: self.description.clone(),
            shipping_address: self.shipping_address.clone(),
            shipping_city: self.shipping_city.clone(),
            payment_type: self.payment_type.clone(),
            customer_id: self.customer_id,
            employee_id: self.employee_id,
            order_details: self.order_details.clone(),
        }
    }

    fn validate(draft: &OrderDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        CREATED_DATE.check(&mut errors, "createdDate", "Created date", &draft.created_date);
        SHIPPED_DATE.check(&mut errors, "shippedDate", "Shipped date", &draft.shipped_date);
        STATUS.check(&mut errors, "status", "Status", &draft.status);
        DESCRIPTION.check(&mut errors, "description", "Description", &draft.description);
        SHIPPING_ADDRESS.check(
            &mut errors,
            "shippingAddress",
            "Shipping address",
            &draft.shipping_address,
        );
        SHIPPING_CITY.check(&mut errors, "shippingCity", "Shipping city", &draft.shipping_city);
        PAYMENT_TYPE.check(&mut errors, "paymentType", "Payment type", &draft.payment_type);
        if draft.order_details.is_empty() {
            errors.insert("orderDetails", "Order must contain at least one line".into());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft {
            created_date: "2024-05-01".into(),
            shipped_date: "2024-05-03".into(),
            status: "shipped".into(),
            description: "May restock".into(),
            shipping_address: "12 Tran Phu".into(),
            shipping_city: "Da Nang".into(),
            payment_type: "cash".into(),
            customer_id: 4,
            employee_id: 2,
            order_details: vec![OrderDetail {
                order_id: 0,
                product_id: 11,
                quantity: 3,
                price: 4.5,
                discount: 0.0,
            }],
        }
    }

    #[test]
    fn empty_line_items_block_submission() {
        let mut d = draft();
        d.order_details.clear();
        let errors = Order::validate(&d);
        assert_eq!(
            errors.get("orderDetails"),
            Some("Order must contain at least one line")
        );
    }

    #[test]
    fn complete_draft_passes() {
        assert!(Order::validate(&draft()).is_empty());
    }

    #[test]
    fn empty_draft_reports_every_field_and_the_lines() {
        let errors = Order::validate(&OrderDraft::default());
        assert_eq!(errors.len(), 8);
    }

    #[test]
    fn null_shipped_date_round_trips_to_empty_draft_field() {
        let record: Order = serde_json::from_str(
            r#"{"id":9,"createdDate":"2024-05-01","shippedDate":null,"status":"new",
                "description":"x","shippingAddress":"a","shippingCity":"b",
                "paymentType":"cash","customerId":4,"employeeId":2,
                "orderDetails":[{"orderId":9,"productId":11,"quantity":3,"price":4.5,"discount":0}]}"#,
        )
        .unwrap();
        assert_eq!(record.shipped_date, None);
        assert_eq!(record.to_draft().shipped_date, "");
        assert_eq!(record.order_details.len(), 1);
        assert_eq!(record.order_details[0].product_id, 11);
    }

    #[test]
    fn draft_serializes_line_items_camel_case() {
        let body = serde_json::to_value(draft()).unwrap();
        assert_eq!(body["orderDetails"][0]["productId"], 11);
        assert_eq!(body["orderDetails"][0]["orderId"], 0);
        assert_eq!(body["paymentType"], "cash");
    }
}
