use super::Theatre;
use crate::{dto::input, repository::Error};
use axum::async_trait;

///
/// Inventory of theatres, each embedding its show dates and showtimes.
///
/// Write operations are single conditional updates guarded by the showtime key,
/// so a concurrent writer can never overwrite seats added by another one.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TheatresRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Theatre>, Error>;

    async fn find_by_name_and_location(
        &self,
        name: &str,
        location: &str,
    ) -> Result<Option<Theatre>, Error>;

    ///
    /// Finds all theatres of the location sorted by name
    ///
    async fn find_many_by_location(&self, location: &str) -> Result<Vec<Theatre>, Error>;

    ///
    /// Inserts new theatre with a single date and showtime seeded with seats
    ///
    /// ### Errors
    /// - [Error::InsertUniqueViolation] when theatre with the name already exists
    ///
    async fn insert(
        &self,
        key: &input::ShowTimeKey,
        address: &str,
        location: &str,
        seats: &[String],
    ) -> Result<(), Error>;

    ///
    /// Merges seats into booked seats of the showtime (set union)
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - theatre does not exist
    ///     - theatre has no such date
    ///     - date has no showtime with the time and movie
    ///
    async fn add_booked_seats(&self, key: &input::ShowTimeKey, seats: &[String])
        -> Result<(), Error>;

    ///
    /// Appends new showtime seeded with seats to the existing date
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - theatre does not exist
    ///     - theatre has no such date
    ///     - showtime with the time and movie already exists
    ///
    async fn push_show_time(&self, key: &input::ShowTimeKey, seats: &[String])
        -> Result<(), Error>;

    ///
    /// Appends new date with a single showtime seeded with seats
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - theatre does not exist
    ///     - date already exists
    ///
    async fn push_date(&self, key: &input::ShowTimeKey, seats: &[String]) -> Result<(), Error>;
}
