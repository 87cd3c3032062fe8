use chrono::NaiveDate;
use common::CreateTransactionRequest;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Unsubmitted "Add Transaction" form state, kept as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub date: String,
    pub description: String,
    pub amount: String,
    pub category: String,
}

/// A single form field edit.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Date(String),
    Description(String),
    Amount(String),
    Category(String),
}

impl TransactionDraft {
    /// Empty draft dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            description: String::new(),
            amount: String::new(),
            category: String::new(),
        }
    }

    pub fn edit(&mut self, field: DraftField) {
        match field {
            DraftField::Date(value) => self.date = value,
            DraftField::Description(value) => self.description = value,
            DraftField::Amount(value) => self.amount = value,
            DraftField::Category(value) => self.category = value,
        }
    }

    /// Amount as a decimal, or `None` when the text is empty or not a number.
    /// Scientific notation is accepted since number inputs allow it. Values
    /// beyond `Decimal`'s range (about 7.9e28) also give `None` and are sent
    /// as `null`.
    pub fn parsed_amount(&self) -> Option<Decimal> {
        let raw = self.amount.trim();
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .ok()
    }

    /// Builds the creation request. Nothing is validated here; the form
    /// controls are the only gate.
    pub fn to_request(&self) -> CreateTransactionRequest {
        CreateTransactionRequest {
            date: self.date.clone(),
            description: self.description.clone(),
            amount: self.parsed_amount(),
            category: self.category.clone(),
        }
    }
}
