//! Command handlers
//!
//! Thin front end over the session store and the gateway. Output is plain
//! text on stdout; diagnostics go through `tracing` on stderr.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use gateway::application::report::{nights, revenue_by_month, total_revenue, upcoming_bookings};
use gateway::application::{Gate, RequireLogin, SignInInput, SignInOutput, SignInUseCase, SignOutUseCase};
use gateway::domain::model::booking::{Booking, NewBooking};
use gateway::domain::model::villa::{Villa, VillaQuery};
use gateway::VillaApi;
use kernel::error::app_error::{AppError, AppResult, OptionExt};
use kernel::id::VillaId;
use session::domain::repository::SessionRepository;
use session::{Destination, Role, Session, SessionStore};

use crate::cli::Command;

pub struct Commands<A, R>
where
    A: VillaApi,
    R: SessionRepository,
{
    api: Arc<A>,
    session: Arc<SessionStore<R>>,
}

impl<A, R> Commands<A, R>
where
    A: VillaApi,
    R: SessionRepository,
{
    pub fn new(api: Arc<A>, session: Arc<SessionStore<R>>) -> Self {
        Self { api, session }
    }

    pub async fn run(&self, command: Command) -> AppResult<()> {
        match command {
            Command::Login { email, password } => {
                self.login(email, password).await?;
                Ok(())
            }
            Command::Logout => {
                self.logout();
                Ok(())
            }
            Command::Whoami => self.whoami().await,
            Command::Villas { city } => self.villas(city).await,
            Command::Bookings => self.bookings().await,
            Command::Wishlist => self.wishlist().await,
            Command::Revenue => self.revenue().await,
            Command::Book {
                villa_id,
                check_in,
                check_out,
                guests,
                email,
                password,
            } => {
                let credentials = email.zip(password);
                self.book(VillaId::new(villa_id), check_in, check_out, guests, credentials)
                    .await
            }
        }
    }

    async fn login(&self, email: String, password: String) -> AppResult<SignInOutput> {
        let output = SignInUseCase::new(self.api.clone(), self.session.clone())
            .execute(SignInInput { email, password })
            .await?;

        println!("Logged in as {} (user {})", output.role, output.user_id);
        if let Some(destination) = &output.destination {
            println!("Resuming {destination}");
        }
        Ok(output)
    }

    fn logout(&self) {
        if SignOutUseCase::new(self.session.clone()).execute() {
            println!("Logged out");
        } else {
            println!("Not logged in");
        }
    }

    async fn whoami(&self) -> AppResult<()> {
        let Session::LoggedIn(credentials) = self.session.snapshot() else {
            println!("Not logged in");
            return Ok(());
        };

        match self.api.me().await {
            Ok(profile) => println!(
                "{} <{}>, {} (user {})",
                profile.name, profile.email, profile.role, profile.id
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Could not fetch profile");
                println!("{} (user {}), profile unavailable", credentials.role, credentials.user_id);
            }
        }
        Ok(())
    }

    async fn villas(&self, city: Option<String>) -> AppResult<()> {
        let query = VillaQuery {
            city,
            ..VillaQuery::default()
        };
        let villas = self.api.list_villas(&query).await?;
        print_villas(&villas);
        Ok(())
    }

    async fn bookings(&self) -> AppResult<()> {
        let role = self.require_role()?;
        let bookings = if role == Role::Owner {
            self.api.owner_bookings().await?
        } else {
            self.api.list_bookings().await?
        };

        if bookings.is_empty() {
            println!("No bookings");
            return Ok(());
        }
        for booking in &bookings {
            print_booking(booking);
        }

        let today = Local::now().date_naive();
        println!("{} upcoming", upcoming_bookings(&bookings, today).len());
        Ok(())
    }

    async fn wishlist(&self) -> AppResult<()> {
        self.require_role()?;
        let villas = self.api.wishlist().await?;
        print_villas(&villas);
        Ok(())
    }

    async fn revenue(&self) -> AppResult<()> {
        let role = self.require_role()?;
        if !role.can_manage_villas() {
            return Err(AppError::forbidden("Revenue is available to owners and admins"));
        }
        let transactions = if role.is_admin() {
            self.api.admin_transactions().await?
        } else {
            self.api.transactions().await?
        };

        for (month, amount) in revenue_by_month(&transactions) {
            println!("{month}\t{amount:>12.2}");
        }
        println!("total\t{:>12.2}", total_revenue(&transactions));
        Ok(())
    }

    async fn book(
        &self,
        villa_id: VillaId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
        credentials: Option<(String, String)>,
    ) -> AppResult<()> {
        if check_out <= check_in {
            return Err(AppError::bad_request("Check-out must be after check-in"));
        }
        if guests == 0 {
            return Err(AppError::bad_request("At least one guest is required"));
        }

        let gate = RequireLogin::new(self.session.clone())
            .guard(Destination::booking_flow(villa_id.as_str()));

        if gate == Gate::LoginRequired {
            let Some((email, password)) = credentials else {
                println!("Log in to book: villa login <email> <password>, or pass --email and --password");
                return Ok(());
            };

            let output = self.login(email, password).await?;
            let resumes_here = matches!(
                output.destination.as_ref().map(|d| d.split()),
                Some(("booking_flow", Some(id))) if id == villa_id.as_str()
            );
            if !resumes_here {
                return Ok(());
            }
        }

        let role = self.require_role()?;
        if !role.can_book() {
            return Err(AppError::forbidden("Only customers can book villas"));
        }

        let booking = self
            .api
            .create_booking(&NewBooking {
                villa_id,
                check_in,
                check_out,
                guests,
            })
            .await?;

        println!("Booked:");
        print_booking(&booking);
        Ok(())
    }

    fn require_role(&self) -> AppResult<Role> {
        self.session
            .role()
            .ok_or_unauthorized("Not logged in")
    }
}

fn print_villas(villas: &[Villa]) {
    if villas.is_empty() {
        println!("No villas");
        return;
    }
    for villa in villas {
        println!(
            "{}\t{}\t{}\t{:.2}/night\tup to {} guests",
            villa.id, villa.name, villa.city, villa.price_per_night, villa.max_guests
        );
    }
}

fn print_booking(booking: &Booking) {
    println!(
        "{}\t{}\t{} -> {} ({} nights)\t{} guests\t{:.2}\t{}",
        booking.id,
        booking.villa_name.as_deref().unwrap_or(booking.villa_id.as_str()),
        booking.check_in,
        booking.check_out,
        nights(booking),
        booking.guests,
        booking.total_price,
        booking.status.code()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    use parking_lot::Mutex;

    use gateway::{ApiError, ApiResult};
    use gateway::domain::model::auth::{
        LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile,
    };
    use gateway::domain::model::booking::BookingStatus;
    use gateway::domain::model::payment::{NewPayment, Payment};
    use gateway::domain::model::transaction::Transaction;
    use gateway::domain::model::villa::{NewVilla, VillaStatus, VillaUpdate};
    use kernel::error::kind::ErrorKind;
    use kernel::id::{BookingId, PaymentId, UserId};
    use platform::MemoryStorage;
    use session::{BearerToken, KvSessionRepository, SessionConfig};

    type Repo = KvSessionRepository<MemoryStorage>;
    type Store = SessionStore<Repo>;

    /// In-memory API: accepts password "secret", records what it was asked
    struct FakeApi {
        session: Arc<Store>,
        login_role: Role,
        calls: Mutex<Vec<&'static str>>,
        // Each booking with the bearer token it was sent with
        booked: Mutex<Vec<(NewBooking, Option<String>)>>,
    }

    impl FakeApi {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().clone()
        }
    }

    fn unused() -> ApiError {
        ApiError::Status {
            status: 501,
            message: "Not served by the fake".into(),
        }
    }

    impl VillaApi for FakeApi {
        async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
            self.calls.lock().push("login");
            if request.password != "secret" {
                return Err(ApiError::Status {
                    status: 401,
                    message: "Invalid credentials".into(),
                });
            }
            Ok(LoginResponse {
                token: BearerToken::new("abc123"),
                role: self.login_role,
                user_id: UserId::new("42"),
            })
        }

        async fn register(&self, _: &RegisterRequest) -> ApiResult<RegisterResponse> {
            Err(unused())
        }

        async fn me(&self) -> ApiResult<UserProfile> {
            Err(unused())
        }

        async fn list_villas(&self, _: &VillaQuery) -> ApiResult<Vec<Villa>> {
            Err(unused())
        }

        async fn get_villa(&self, _: &VillaId) -> ApiResult<Villa> {
            Err(unused())
        }

        async fn create_villa(&self, _: &NewVilla) -> ApiResult<Villa> {
            Err(unused())
        }

        async fn update_villa(&self, _: &VillaId, _: &VillaUpdate) -> ApiResult<Villa> {
            Err(unused())
        }

        async fn delete_villa(&self, _: &VillaId) -> ApiResult<()> {
            Err(unused())
        }

        async fn owner_villas(&self) -> ApiResult<Vec<Villa>> {
            Err(unused())
        }

        async fn list_bookings(&self) -> ApiResult<Vec<Booking>> {
            Err(unused())
        }

        async fn get_booking(&self, _: &BookingId) -> ApiResult<Booking> {
            Err(unused())
        }

        async fn create_booking(&self, booking: &NewBooking) -> ApiResult<Booking> {
            self.calls.lock().push("create_booking");
            let bearer = self.session.current_token().map(|t| t.expose().to_string());
            self.booked.lock().push((booking.clone(), bearer));
            Ok(Booking {
                id: BookingId::new("b1"),
                villa_id: booking.villa_id.clone(),
                user_id: self.session.user_id(),
                villa_name: None,
                check_in: booking.check_in,
                check_out: booking.check_out,
                guests: booking.guests,
                total_price: 300.0,
                status: BookingStatus::default(),
            })
        }

        async fn cancel_booking(&self, _: &BookingId) -> ApiResult<Booking> {
            Err(unused())
        }

        async fn owner_bookings(&self) -> ApiResult<Vec<Booking>> {
            Err(unused())
        }

        async fn create_payment(&self, _: &NewPayment) -> ApiResult<Payment> {
            Err(unused())
        }

        async fn get_payment(&self, _: &PaymentId) -> ApiResult<Payment> {
            Err(unused())
        }

        async fn wishlist(&self) -> ApiResult<Vec<Villa>> {
            Err(unused())
        }

        async fn add_to_wishlist(&self, _: &VillaId) -> ApiResult<()> {
            Err(unused())
        }

        async fn remove_from_wishlist(&self, _: &VillaId) -> ApiResult<()> {
            Err(unused())
        }

        async fn transactions(&self) -> ApiResult<Vec<Transaction>> {
            self.calls.lock().push("transactions");
            Ok(Vec::new())
        }

        async fn admin_users(&self) -> ApiResult<Vec<UserProfile>> {
            Err(unused())
        }

        async fn admin_delete_user(&self, _: &UserId) -> ApiResult<()> {
            Err(unused())
        }

        async fn admin_villas(&self) -> ApiResult<Vec<Villa>> {
            Err(unused())
        }

        async fn admin_set_villa_status(&self, _: &VillaId, _: VillaStatus) -> ApiResult<Villa> {
            Err(unused())
        }

        async fn admin_transactions(&self) -> ApiResult<Vec<Transaction>> {
            self.calls.lock().push("admin_transactions");
            Ok(Vec::new())
        }
    }

    fn setup(login_role: Role) -> (Commands<FakeApi, Repo>, Arc<FakeApi>, Arc<Store>) {
        let session = Arc::new(SessionStore::with_storage(
            MemoryStorage::new("villa_session"),
            SessionConfig::default(),
        ));
        let api = Arc::new(FakeApi {
            session: session.clone(),
            login_role,
            calls: Mutex::new(Vec::new()),
            booked: Mutex::new(Vec::new()),
        });
        (Commands::new(api.clone(), session.clone()), api, session)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 11, day).unwrap()
    }

    fn book_villa_7(email: Option<&str>, password: Option<&str>) -> Command {
        Command::Book {
            villa_id: "7".into(),
            check_in: date(10),
            check_out: date(13),
            guests: 2,
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    // ========================================================================
    // book
    // ========================================================================

    #[tokio::test]
    async fn test_book_logged_out_without_credentials_remembers_villa() {
        let (commands, api, session) = setup(Role::Customer);

        commands.run(book_villa_7(None, None)).await.unwrap();

        assert_eq!(
            session.peek_after_login_destination(),
            Some(Destination::booking_flow("7"))
        );
        assert!(api.calls().is_empty());
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_book_logged_out_with_credentials_signs_in_and_books() {
        let (commands, api, session) = setup(Role::Customer);

        commands
            .run(book_villa_7(Some("ana@example.com"), Some("secret")))
            .await
            .unwrap();

        assert_eq!(api.calls(), vec!["login", "create_booking"]);
        assert!(session.is_logged_in());
        assert_eq!(session.peek_after_login_destination(), None);

        let booked = api.booked.lock();
        let (booking, bearer) = &booked[0];
        assert_eq!(booking.villa_id.as_str(), "7");
        assert_eq!((booking.check_in, booking.check_out), (date(10), date(13)));
        assert_eq!(bearer.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_book_when_logged_in_skips_sign_in() {
        let (commands, api, session) = setup(Role::Customer);
        session.login(Role::Customer, UserId::new("42"), BearerToken::new("tok-42"));

        commands.run(book_villa_7(None, None)).await.unwrap();

        assert_eq!(api.calls(), vec!["create_booking"]);
        assert_eq!(api.booked.lock()[0].1.as_deref(), Some("tok-42"));
        assert_eq!(session.peek_after_login_destination(), None);
    }

    #[tokio::test]
    async fn test_owner_cannot_book() {
        let (commands, api, session) = setup(Role::Owner);

        let err = commands
            .run(book_villa_7(Some("olga@example.com"), Some("secret")))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(session.role(), Some(Role::Owner));
        assert!(api.booked.lock().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_password_keeps_destination() {
        let (commands, api, session) = setup(Role::Customer);

        let err = commands
            .run(book_villa_7(Some("ana@example.com"), Some("wrong")))
            .await
            .unwrap_err();

        assert!(err.is_auth_error());
        assert!(!session.is_logged_in());
        assert_eq!(
            session.peek_after_login_destination(),
            Some(Destination::booking_flow("7"))
        );
        assert_eq!(api.calls(), vec!["login"]);
    }

    #[tokio::test]
    async fn test_book_rejects_bad_stay_before_anything_else() {
        let (commands, api, session) = setup(Role::Customer);

        let backwards = Command::Book {
            villa_id: "7".into(),
            check_in: date(13),
            check_out: date(13),
            guests: 2,
            email: None,
            password: None,
        };
        let err = commands.run(backwards).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);

        let nobody = Command::Book {
            villa_id: "7".into(),
            check_in: date(10),
            check_out: date(13),
            guests: 0,
            email: None,
            password: None,
        };
        let err = commands.run(nobody).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);

        assert!(api.calls().is_empty());
        assert_eq!(session.peek_after_login_destination(), None);
    }

    // ========================================================================
    // revenue
    // ========================================================================

    #[tokio::test]
    async fn test_revenue_requires_login() {
        let (commands, api, _session) = setup(Role::Owner);

        let err = commands.run(Command::Revenue).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_revenue_by_role() {
        let (commands, api, session) = setup(Role::Owner);

        session.login(Role::Customer, UserId::new("1"), BearerToken::new("t1"));
        let err = commands.run(Command::Revenue).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert!(api.calls().is_empty());

        session.login(Role::Owner, UserId::new("2"), BearerToken::new("t2"));
        commands.run(Command::Revenue).await.unwrap();

        session.login(Role::Admin, UserId::new("3"), BearerToken::new("t3"));
        commands.run(Command::Revenue).await.unwrap();

        assert_eq!(api.calls(), vec!["transactions", "admin_transactions"]);
    }
}
