//! Common transport-layer types shared between the backend and the dashboard.
//! These structs mirror the backend's request/response payloads so the
//! frontend and the compute crate can (de)serialize them without duplicating
//! shapes.

mod category;

pub use category::Category;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ===================== Transactions =====================

/// Transaction record as returned by `GET /transactions` and `POST /transactions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDto {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
    /// Signed amount, negative for expenses. Sent as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub category: Option<String>,
}

impl TransactionDto {
    /// Label used for grouping: the backend's label as given, or
    /// `Uncategorized` when it is absent or empty.
    pub fn category_key(&self) -> &str {
        match self.category.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => Category::Uncategorized.label(),
        }
    }
}

/// Request body for creating a new transaction.
///
/// The date and category are forwarded exactly as typed into the form. An
/// amount that failed to parse is sent as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTransactionRequest {
    pub date: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    pub category: String,
}

// ===================== Assistant =====================

/// Request for categorizing a single free-text description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorizeRequest {
    pub description: String,
}

/// Categorization verdict. The backend also echoes the description back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorizationResult {
    pub category: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request for free-form financial advice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdviceRequest {
    pub prompt: String,
}

/// Markdown-formatted advice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdviceResult {
    pub advice: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_deserializes_numeric_amount() {
        let raw = json!({
            "id": 7,
            "date": "2024-01-15",
            "description": "Rent",
            "amount": -1500.0,
            "category": "Housing"
        });

        let transaction: TransactionDto = serde_json::from_value(raw).unwrap();
        assert_eq!(transaction.id, 7);
        assert_eq!(transaction.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(transaction.amount, Decimal::new(-1500, 0));
        assert_eq!(transaction.category_key(), "Housing");
    }

    #[test]
    fn test_transaction_without_category() {
        let raw = json!({
            "id": 1,
            "date": "2024-02-01",
            "description": "Mystery",
            "amount": 12.34,
            "category": null
        });

        let transaction: TransactionDto = serde_json::from_value(raw).unwrap();
        assert_eq!(transaction.category, None);
        assert_eq!(transaction.amount, Decimal::new(1234, 2));
        assert_eq!(transaction.category_key(), "Uncategorized");

        let missing = json!({
            "id": 2,
            "date": "2024-02-01",
            "description": "No field",
            "amount": 1
        });
        let transaction: TransactionDto = serde_json::from_value(missing).unwrap();
        assert_eq!(transaction.category, None);
    }

    #[test]
    fn test_category_key_keeps_labels_outside_the_form_set() {
        let raw = json!({
            "id": 3,
            "date": "2024-02-03",
            "description": "Pharmacy",
            "amount": -40,
            "category": "Health"
        });
        let transaction: TransactionDto = serde_json::from_value(raw).unwrap();
        assert_eq!(transaction.category_key(), "Health");

        let empty = TransactionDto {
            category: Some(String::new()),
            ..transaction
        };
        assert_eq!(empty.category_key(), "Uncategorized");
    }

    #[test]
    fn test_create_request_sends_amount_as_number() {
        let request = CreateTransactionRequest {
            date: "2024-01-15".to_string(),
            description: "Rent".to_string(),
            amount: Some(Decimal::new(-1500, 0)),
            category: "Housing".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["amount"], json!(-1500.0));
        assert_eq!(value["date"], json!("2024-01-15"));
        assert_eq!(value["category"], json!("Housing"));
    }

    #[test]
    fn test_create_request_unparsed_amount_is_null() {
        let request = CreateTransactionRequest {
            date: "2024-01-15".to_string(),
            description: "Oops".to_string(),
            amount: None,
            category: String::new(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value["amount"].is_null());
    }

    #[test]
    fn test_categorization_result_confidence_is_optional() {
        let with: CategorizationResult = serde_json::from_value(json!({
            "description": "Starbucks coffee",
            "category": "Restaurants",
            "confidence": 0.87
        }))
        .unwrap();
        assert_eq!(with.confidence, Some(0.87));

        let without: CategorizationResult =
            serde_json::from_value(json!({ "category": "Travel" })).unwrap();
        assert_eq!(without.confidence, None);
        assert_eq!(without.description, None);
    }

    #[test]
    fn test_categorize_request_only_carries_description() {
        let value = serde_json::to_value(CategorizeRequest {
            description: "Starbucks coffee".to_string(),
        })
        .unwrap();
        assert_eq!(value, json!({ "description": "Starbucks coffee" }));
    }
}
