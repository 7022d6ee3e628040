//! Transaction DTOs
//!
//! Ledger entries returned by `/transactions` (own) and
//! `/admin/transactions` (everyone).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use kernel::id::{BookingId, TransactionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Payment,
    Refund,
    Payout,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(default)]
    pub booking_id: Option<BookingId>,
    pub amount: f64,
    #[serde(rename = "type", alias = "kind")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Settled and counted in revenue
    pub fn is_settled(&self) -> bool {
        self.status == TransactionStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id":1,"amount":50.0,"type":"refund","status":"completed",
                "createdAt":"2025-01-31T23:59:59Z"}"#,
        )
        .unwrap();
        assert_eq!(tx.kind, TransactionKind::Refund);
        assert!(tx.is_settled());
        assert!(tx.booking_id.is_none());
    }
}
