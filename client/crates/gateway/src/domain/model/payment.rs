//! Payment DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kernel::id::{BookingId, PaymentId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    BankTransfer,
    EWallet,
}

/// Payment for one booking
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub booking_id: BookingId,
    pub amount: f64,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub method: Option<PaymentMethod>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// New payment (`POST /payments`)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub booking_id: BookingId,
    pub amount: f64,
    pub method: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_from_api() {
        let payment: Payment = serde_json::from_str(
            r#"{"id":"p1","bookingId":"b1","amount":360.0,"status":"completed",
                "method":"bank_transfer","createdAt":"2025-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(payment.status, PaymentStatus::Completed);
        assert_eq!(payment.method, Some(PaymentMethod::BankTransfer));
        assert!(payment.created_at.is_some());
    }

    #[test]
    fn test_new_payment_body() {
        let json = serde_json::to_value(NewPayment {
            booking_id: BookingId::new("b1"),
            amount: 10.0,
            method: PaymentMethod::EWallet,
        })
        .unwrap();
        assert_eq!(json["method"], "e_wallet");
        assert_eq!(json["bookingId"], "b1");
    }
}
