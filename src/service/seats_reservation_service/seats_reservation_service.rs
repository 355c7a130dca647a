use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeatsReservationService: Send + Sync {
    ///
    /// Merge selected seats into booked seats of the showtime,
    /// creating theatre, date and showtime when they don't exist yet.
    /// Submitting the same seats again changes nothing.
    ///
    /// ### Returns
    /// Theatre after the reservation
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - any required field is missing or empty
    ///     - seat code is malformed
    ///     - show date is not `DD-MM-YYYY`
    /// - [Error::ReservationContention] when concurrent writers kept
    ///     invalidating every step of the chain
    ///
    async fn reserve_seats(
        &self,
        reservation: input::SeatsReservation,
    ) -> Result<output::Theatre, Error>;
}
