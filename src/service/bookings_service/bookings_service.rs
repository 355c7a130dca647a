use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

///
/// Per user ledger of completed bookings
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingsService: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::Validation] when email is missing
    /// - [Error::UserNotExist] when there's no user with the email
    ///
    async fn find_booked_tickets(&self, user: input::UserEmail) -> Result<output::Tickets, Error>;

    ///
    /// Append completed booking to user's ledger.
    /// Booking date is assigned by the server.
    ///
    /// ### Returns
    /// All user's tickets, including the appended one
    ///
    /// ### Errors
    /// - [Error::Validation] when email or any required booking field is missing
    /// - [Error::UserNotExist] when there's no user with the email, user is not created
    ///
    async fn append_booking(&self, booking: input::AddBooking) -> Result<output::Tickets, Error>;

    ///
    /// Aggregate ledgers of all users into revenue and movie popularity
    ///
    async fn booking_statistics(&self) -> Result<output::BookingStatistics, Error>;
}
