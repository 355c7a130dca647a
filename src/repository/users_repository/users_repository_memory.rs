use super::{BookedTicket, UsersRepository};
use crate::repository::Error;
use axum::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

///
/// In-process users keyed by email, each owning its booked tickets
///
pub struct UsersRepositoryMemory {
    users: Mutex<HashMap<String, Vec<BookedTicket>>>,
}

impl UsersRepositoryMemory {
    pub fn new() -> Self {
        let users = HashMap::new();
        let users = Mutex::new(users);

        Self { users }
    }
}

impl Default for UsersRepositoryMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryMemory {
    async fn insert(&self, email: &str, _name: &str) -> Result<(), Error> {
        let mut users = self.users.lock().await;

        if users.contains_key(email) {
            return Err(Error::InsertUniqueViolation);
        }

        users.insert(email.to_string(), Vec::new());

        Ok(())
    }

    async fn find_booked_tickets(&self, email: &str) -> Result<Option<Vec<BookedTicket>>, Error> {
        let users = self.users.lock().await;

        Ok(users.get(email).cloned())
    }

    async fn push_booked_ticket(
        &self,
        email: &str,
        ticket: &BookedTicket,
    ) -> Result<Vec<BookedTicket>, Error> {
        let mut users = self.users.lock().await;

        let seats_booked = users.get_mut(email).ok_or(Error::NoDocumentUpdated)?;
        seats_booked.push(ticket.clone());

        Ok(seats_booked.clone())
    }

    async fn find_all_booked_tickets(&self) -> Result<Vec<BookedTicket>, Error> {
        let users = self.users.lock().await;

        let tickets = users
            .values()
            .flat_map(|seats_booked| seats_booked.iter().cloned())
            .collect();

        Ok(tickets)
    }
}
