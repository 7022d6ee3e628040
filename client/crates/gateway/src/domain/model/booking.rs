//! Booking DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kernel::id::{BookingId, UserId, VillaId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub const fn code(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }

    pub const fn is_cancelled(&self) -> bool {
        matches!(self, BookingStatus::Cancelled)
    }
}

/// A stay booked by a customer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub villa_id: VillaId,
    #[serde(default, alias = "customerId")]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub villa_name: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: f64,
    #[serde(default)]
    pub status: BookingStatus,
}

/// New booking (`POST /bookings`)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub villa_id: VillaId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}
