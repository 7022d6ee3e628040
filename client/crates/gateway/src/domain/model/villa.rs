//! Villa DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kernel::id::{UserId, VillaId};

/// Moderation state of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VillaStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl VillaStatus {
    pub const fn code(&self) -> &'static str {
        match self {
            VillaStatus::Pending => "pending",
            VillaStatus::Approved => "approved",
            VillaStatus::Rejected => "rejected",
        }
    }

    /// Only approved villas are bookable by customers
    pub const fn is_listed(&self) -> bool {
        matches!(self, VillaStatus::Approved)
    }
}

/// A villa listing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Villa {
    pub id: VillaId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    pub price_per_night: f64,
    pub max_guests: u32,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub owner_id: Option<UserId>,
    #[serde(default)]
    pub status: VillaStatus,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Villa {
    /// Whether `guests` people fit
    pub fn fits(&self, guests: u32) -> bool {
        guests > 0 && guests <= self.max_guests
    }
}

/// Search filters for `GET /villas`; unset fields are left out of the query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VillaQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
}

impl VillaQuery {
    pub fn in_city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }
}

/// New listing (`POST /villas`)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVilla {
    pub name: String,
    pub description: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub price_per_night: f64,
    pub max_guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    pub amenities: Vec<String>,
}

/// Partial update (`PUT /villas/{id}`); only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VillaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_guests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}

/// Body of `PATCH /admin/villas/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VillaStatusChange {
    pub status: VillaStatus,
}
