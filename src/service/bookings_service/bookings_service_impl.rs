use super::BookingsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, UsersRepository},
};
use axum::async_trait;
use std::{collections::BTreeMap, sync::Arc};
use time::OffsetDateTime;

pub struct BookingsServiceImpl {
    repository: Arc<dyn UsersRepository>,
}

impl BookingsServiceImpl {
    pub fn new(repository: Arc<dyn UsersRepository>) -> Self {
        Self { repository }
    }

    fn booked_ticket(booking: input::ValidBooking) -> repository::BookedTicket {
        repository::BookedTicket {
            movie_name: booking.movie_name,
            certification: booking.certification,
            genres: booking.genres,
            language: booking.language,
            theatre_name: booking.theatre_name,
            theatre_location: booking.theatre_location,
            show_date: booking.show_date,
            show_time: booking.show_time,
            total_amount: booking.total_amount,
            selected_seats: booking.selected_seats,
            payment_id: booking.payment_id,
            booking_date: OffsetDateTime::now_utc(),
        }
    }

    fn aggregate(tickets: &[repository::BookedTicket]) -> output::BookingStatistics {
        let mut movies = BTreeMap::<&str, output::MoviePopularity>::new();

        for ticket in tickets {
            let movie = movies
                .entry(ticket.movie_name.as_str())
                .or_insert_with(|| output::MoviePopularity {
                    movie_name: ticket.movie_name.clone(),
                    bookings: 0,
                    tickets: 0,
                    revenue: 0.0,
                });
            movie.bookings += 1;
            movie.tickets += ticket.selected_seats.len();
            movie.revenue += ticket.total_amount;
        }

        let mut movies = movies.into_values().collect::<Vec<_>>();
        movies.sort_by(|a, b| {
            b.tickets
                .cmp(&a.tickets)
                .then_with(|| a.movie_name.cmp(&b.movie_name))
        });

        output::BookingStatistics {
            total_bookings: tickets.len(),
            total_tickets: movies.iter().map(|movie| movie.tickets).sum(),
            total_revenue: movies.iter().map(|movie| movie.revenue).sum(),
            movies,
        }
    }
}

#[async_trait]
impl BookingsService for BookingsServiceImpl {
    async fn find_booked_tickets(&self, user: input::UserEmail) -> Result<output::Tickets, Error> {
        let email = input::required(user.email, "email is required")?;
        tracing::info!(email, "finding booked tickets");

        let tickets = self
            .repository
            .find_booked_tickets(&email)
            .await?
            .ok_or(Error::UserNotExist)?;
        tracing::info!(count = tickets.len(), "found booked tickets");

        Ok(output::Tickets::from(tickets))
    }

    async fn append_booking(&self, booking: input::AddBooking) -> Result<output::Tickets, Error> {
        tracing::trace!(?booking);
        let booking = input::ValidAddBooking::try_from(booking)?;
        tracing::info!(
            email = booking.email,
            movie = booking.booking.movie_name,
            "appending booking"
        );

        let ticket = Self::booked_ticket(booking.booking);
        let tickets = self
            .repository
            .push_booked_ticket(&booking.email, &ticket)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::UserNotExist,
                err => Error::Database(err),
            })?;
        tracing::info!(count = tickets.len(), "appended booking");

        Ok(output::Tickets::from(tickets))
    }

    async fn booking_statistics(&self) -> Result<output::BookingStatistics, Error> {
        tracing::info!("aggregating booking statistics");

        let tickets = self.repository.find_all_booked_tickets().await?;
        let statistics = Self::aggregate(&tickets);
        tracing::info!(
            total_bookings = statistics.total_bookings,
            total_tickets = statistics.total_tickets,
            "aggregated booking statistics"
        );

        Ok(statistics)
    }
}
