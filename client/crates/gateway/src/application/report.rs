//! Client-side Reports
//!
//! Figures derived from API responses for owner and admin dashboards.
//! Only settled transactions count: payments add, refunds subtract, and
//! payouts (money leaving the platform to owners) are ignored.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::domain::model::booking::Booking;
use crate::domain::model::transaction::{Transaction, TransactionKind};

/// Calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(at: &DateTime<Utc>) -> Self {
        Self {
            year: at.year(),
            month: at.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Contribution of one transaction to revenue
fn signed_amount(tx: &Transaction) -> Option<f64> {
    if !tx.is_settled() {
        return None;
    }
    match tx.kind {
        TransactionKind::Payment => Some(tx.amount.abs()),
        TransactionKind::Refund => Some(-tx.amount.abs()),
        TransactionKind::Payout => None,
    }
}

/// Net revenue: settled payments minus settled refunds
pub fn total_revenue(transactions: &[Transaction]) -> f64 {
    transactions.iter().filter_map(signed_amount).sum()
}

/// Net revenue per month; months without settled activity are absent
pub fn revenue_by_month(transactions: &[Transaction]) -> BTreeMap<YearMonth, f64> {
    let mut months = BTreeMap::new();
    for tx in transactions {
        if let Some(amount) = signed_amount(tx) {
            *months.entry(YearMonth::of(&tx.created_at)).or_insert(0.0) += amount;
        }
    }
    months
}

/// Nights stayed; zero for inverted dates
pub fn nights(booking: &Booking) -> i64 {
    booking
        .check_out
        .signed_duration_since(booking.check_in)
        .num_days()
        .max(0)
}

/// Bookings not cancelled whose check-in is `today` or later, earliest first
pub fn upcoming_bookings(bookings: &[Booking], today: NaiveDate) -> Vec<&Booking> {
    let mut upcoming: Vec<&Booking> = bookings
        .iter()
        .filter(|b| !b.status.is_cancelled() && b.check_in >= today)
        .collect();
    upcoming.sort_by_key(|b| b.check_in);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::booking::BookingStatus;
    use crate::domain::model::transaction::TransactionStatus;
    use chrono::TimeZone;
    use kernel::id::{BookingId, TransactionId, VillaId};

    fn tx(
        id: &str,
        kind: TransactionKind,
        status: TransactionStatus,
        amount: f64,
        (y, m, d): (i32, u32, u32),
    ) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            booking_id: None,
            amount,
            kind,
            status,
            created_at: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(id: &str, check_in: NaiveDate, check_out: NaiveDate, status: BookingStatus) -> Booking {
        Booking {
            id: BookingId::new(id),
            villa_id: VillaId::new("7"),
            user_id: None,
            villa_name: None,
            check_in,
            check_out,
            guests: 2,
            total_price: 100.0,
            status,
        }
    }

    fn ledger() -> Vec<Transaction> {
        use TransactionKind::*;
        use TransactionStatus::*;
        vec![
            tx("1", Payment, Completed, 300.0, (2025, 1, 10)),
            tx("2", Payment, Completed, 200.0, (2025, 1, 28)),
            tx("3", Refund, Completed, 50.0, (2025, 2, 2)),
            tx("4", Payment, Pending, 999.0, (2025, 2, 3)),
            tx("5", Payment, Failed, 999.0, (2025, 2, 4)),
            tx("6", Payout, Completed, 400.0, (2025, 2, 5)),
            tx("7", Payment, Completed, 120.0, (2024, 12, 31)),
        ]
    }

    #[test]
    fn test_total_revenue() {
        assert_eq!(total_revenue(&ledger()), 570.0);
        assert_eq!(total_revenue(&[]), 0.0);
    }

    #[test]
    fn test_revenue_by_month_is_chronological() {
        let months = revenue_by_month(&ledger());
        let keys: Vec<String> = months.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, ["2024-12", "2025-01", "2025-02"]);
        assert_eq!(months[&YearMonth { year: 2025, month: 1 }], 500.0);
        assert_eq!(months[&YearMonth { year: 2025, month: 2 }], -50.0);
    }

    #[test]
    fn test_nights() {
        let b = booking("b", date(2025, 3, 1), date(2025, 3, 4), BookingStatus::Confirmed);
        assert_eq!(nights(&b), 3);
        let inverted = booking("b", date(2025, 3, 4), date(2025, 3, 1), BookingStatus::Pending);
        assert_eq!(nights(&inverted), 0);
    }

    #[test]
    fn test_upcoming_bookings() {
        let today = date(2025, 3, 10);
        let bookings = vec![
            booking("late", date(2025, 4, 1), date(2025, 4, 3), BookingStatus::Confirmed),
            booking("past", date(2025, 3, 1), date(2025, 3, 3), BookingStatus::Completed),
            booking("today", today, date(2025, 3, 12), BookingStatus::Pending),
            booking("cancelled", date(2025, 3, 20), date(2025, 3, 22), BookingStatus::Cancelled),
        ];

        let ids: Vec<&str> = upcoming_bookings(&bookings, today)
            .into_iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, ["today", "late"]);
    }
}
