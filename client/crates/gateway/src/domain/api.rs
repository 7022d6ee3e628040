//! Remote API Trait
//!
//! Every operation the front end can perform against the backend. The
//! implementation attaches the current bearer token itself; callers never
//! pass credentials.

use kernel::id::{BookingId, PaymentId, UserId, VillaId};

use crate::domain::model::{
    auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile},
    booking::{Booking, NewBooking},
    payment::{NewPayment, Payment},
    transaction::Transaction,
    villa::{NewVilla, Villa, VillaQuery, VillaStatus, VillaUpdate},
};
use crate::error::ApiResult;

/// Villa marketplace API
#[trait_variant::make(VillaApi: Send)]
pub trait LocalVillaApi {
    // Auth
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;
    async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse>;
    async fn me(&self) -> ApiResult<UserProfile>;

    // Villas
    async fn list_villas(&self, query: &VillaQuery) -> ApiResult<Vec<Villa>>;
    async fn get_villa(&self, id: &VillaId) -> ApiResult<Villa>;
    async fn create_villa(&self, villa: &NewVilla) -> ApiResult<Villa>;
    async fn update_villa(&self, id: &VillaId, update: &VillaUpdate) -> ApiResult<Villa>;
    async fn delete_villa(&self, id: &VillaId) -> ApiResult<()>;
    async fn owner_villas(&self) -> ApiResult<Vec<Villa>>;

    // Bookings
    async fn list_bookings(&self) -> ApiResult<Vec<Booking>>;
    async fn get_booking(&self, id: &BookingId) -> ApiResult<Booking>;
    async fn create_booking(&self, booking: &NewBooking) -> ApiResult<Booking>;
    async fn cancel_booking(&self, id: &BookingId) -> ApiResult<Booking>;
    async fn owner_bookings(&self) -> ApiResult<Vec<Booking>>;

    // Payments
    async fn create_payment(&self, payment: &NewPayment) -> ApiResult<Payment>;
    async fn get_payment(&self, id: &PaymentId) -> ApiResult<Payment>;

    // Wishlist
    async fn wishlist(&self) -> ApiResult<Vec<Villa>>;
    async fn add_to_wishlist(&self, villa_id: &VillaId) -> ApiResult<()>;
    async fn remove_from_wishlist(&self, villa_id: &VillaId) -> ApiResult<()>;

    // Transactions
    async fn transactions(&self) -> ApiResult<Vec<Transaction>>;

    // Admin
    async fn admin_users(&self) -> ApiResult<Vec<UserProfile>>;
    async fn admin_delete_user(&self, id: &UserId) -> ApiResult<()>;
    async fn admin_villas(&self) -> ApiResult<Vec<Villa>>;
    async fn admin_set_villa_status(&self, id: &VillaId, status: VillaStatus)
    -> ApiResult<Villa>;
    async fn admin_transactions(&self) -> ApiResult<Vec<Transaction>>;
}
