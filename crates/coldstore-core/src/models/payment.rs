//! Payments against bookings.

use serde::{Deserialize, Serialize};

use super::{Identified, require_non_negative};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    BankTransfer,
    Paypal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: i64,
    pub booking_id: i64,
    #[serde(deserialize_with = "super::decimal", default)]
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Identified for Payment {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.payment_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub booking_id: i64,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl NewPayment {
    pub fn validate(&self) -> Result<()> {
        require_non_negative("amount", self.amount)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            r#""bank_transfer""#
        );
        assert_eq!(
            serde_json::from_str::<PaymentMethod>(r#""credit_card""#).unwrap(),
            PaymentMethod::CreditCard
        );
    }

    #[test]
    fn deserialize_payment_without_transaction() {
        let json = r#"{
            "paymentId": 4, "bookingId": 11, "amount": 252.0,
            "paymentMethod": "paypal", "status": "refunded",
            "createdAt": "2025-01-01T00:00:00Z", "updatedAt": "2025-01-01T00:00:00Z"
        }"#;
        let p: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(p.status, PaymentStatus::Refunded);
        assert!(p.transaction_id.is_none());
    }

    #[test]
    fn negative_amount_is_rejected() {
        let p = NewPayment {
            booking_id: 1,
            amount: -5.0,
            payment_method: PaymentMethod::Paypal,
            status: PaymentStatus::Pending,
            transaction_id: None,
        };
        assert!(p.validate().is_err());
    }
}
