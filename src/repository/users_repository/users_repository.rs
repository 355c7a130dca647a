use super::BookedTicket;
use crate::repository::Error;
use axum::async_trait;

///
/// Users with their append-only ledger of booked tickets.
/// Users are registered by the authentication service, this application only reads them.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Inserts new user with an empty ledger
    ///
    /// ### Errors
    /// - [Error::InsertUniqueViolation] when user with the email already exists
    ///
    async fn insert(&self, email: &str, name: &str) -> Result<(), Error>;

    ///
    /// Finds user's tickets in booking order.
    /// Returns `None` when the user does not exist
    ///
    async fn find_booked_tickets(&self, email: &str) -> Result<Option<Vec<BookedTicket>>, Error>;

    ///
    /// Appends ticket to user's ledger
    ///
    /// ### Returns
    /// All user's tickets, including the appended one
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when user does not exist
    ///
    async fn push_booked_ticket(
        &self,
        email: &str,
        ticket: &BookedTicket,
    ) -> Result<Vec<BookedTicket>, Error>;

    ///
    /// Finds tickets of all users
    ///
    async fn find_all_booked_tickets(&self) -> Result<Vec<BookedTicket>, Error>;
}
