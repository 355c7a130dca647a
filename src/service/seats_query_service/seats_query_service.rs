use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

///
/// Read side of the seat inventory. Never modifies stored theatres.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeatsQueryService: Send + Sync {
    ///
    /// Find seats booked for the showtime.
    ///
    /// ### Returns
    /// Booked seat codes, empty when theatre, date or showtime does not exist
    ///
    /// ### Errors
    /// - [Error::Validation] when any of the key fields is missing
    ///
    async fn find_booked_seats(
        &self,
        query: input::ShowTimeQuery,
    ) -> Result<output::BookedSeats, Error>;

    ///
    /// Count seats booked for the showtime.
    /// Always equal to the length of [SeatsQueryService::find_booked_seats]
    ///
    async fn count_booked_seats(
        &self,
        query: input::ShowTimeQuery,
    ) -> Result<output::SeatsCount, Error>;

    async fn check_seat_availability(
        &self,
        query: input::ShowTimeQuery,
    ) -> Result<output::SeatAvailability, Error>;

    async fn verify_cinema_name(&self, name: String)
        -> Result<output::CinemaVerification, Error>;

    ///
    /// ### Errors
    /// - [Error::CinemaNotExist] when there's no theatre with both name and location
    ///
    async fn find_cinema(&self, lookup: input::CinemaLookup) -> Result<output::Theatre, Error>;

    async fn find_cinemas_in_location(
        &self,
        location: String,
    ) -> Result<Vec<output::Theatre>, Error>;
}
