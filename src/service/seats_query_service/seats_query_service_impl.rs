use super::{SeatsQueryService, SeatsQueryServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::TheatresRepository,
};
use axum::async_trait;
use std::sync::Arc;

pub struct SeatsQueryServiceImpl {
    config: SeatsQueryServiceConfig,
    repository: Arc<dyn TheatresRepository>,
}

impl SeatsQueryServiceImpl {
    pub fn new(config: SeatsQueryServiceConfig, repository: Arc<dyn TheatresRepository>) -> Self {
        Self { config, repository }
    }

    async fn booked_seats(&self, key: &input::ShowTimeKey) -> Result<Vec<String>, Error> {
        let booked_seats = self
            .repository
            .find_by_name(&key.theatre_name)
            .await?
            .and_then(|theatre| {
                theatre
                    .booked_seats(&key.date, &key.time, &key.movie_name)
                    .map(<[String]>::to_vec)
            })
            .unwrap_or_default();

        Ok(booked_seats)
    }
}

#[async_trait]
impl SeatsQueryService for SeatsQueryServiceImpl {
    async fn find_booked_seats(
        &self,
        query: input::ShowTimeQuery,
    ) -> Result<output::BookedSeats, Error> {
        let key = input::ShowTimeKey::try_from(query)?;
        tracing::info!(?key, "finding booked seats");

        let booked_seats = self.booked_seats(&key).await?;
        tracing::info!(count = booked_seats.len(), "found booked seats");

        Ok(output::BookedSeats { booked_seats })
    }

    async fn count_booked_seats(
        &self,
        query: input::ShowTimeQuery,
    ) -> Result<output::SeatsCount, Error> {
        let key = input::ShowTimeKey::try_from(query)?;
        tracing::info!(?key, "counting booked seats");

        let count = self.booked_seats(&key).await?.len();

        Ok(output::SeatsCount { count })
    }

    async fn check_seat_availability(
        &self,
        query: input::ShowTimeQuery,
    ) -> Result<output::SeatAvailability, Error> {
        let key = input::ShowTimeKey::try_from(query)?;
        tracing::info!(?key, "checking seat availability");

        let count = self.booked_seats(&key).await?.len();
        let status = if count < self.config.seats_load_threshold {
            output::SeatAvailabilityStatus::Available
        } else {
            output::SeatAvailabilityStatus::Filling
        };
        tracing::info!(count, ?status, "checked seat availability");

        Ok(output::SeatAvailability { count, status })
    }

    async fn verify_cinema_name(
        &self,
        name: String,
    ) -> Result<output::CinemaVerification, Error> {
        let name = input::required(Some(name), "name is required")?;
        tracing::info!(name, "verifying cinema");

        let theatre = self.repository.find_by_name(&name).await?;
        tracing::info!(exists = theatre.is_some(), "verified cinema");

        Ok(output::CinemaVerification {
            exists: theatre.is_some(),
            data: theatre.map(output::Theatre::from),
        })
    }

    async fn find_cinema(&self, lookup: input::CinemaLookup) -> Result<output::Theatre, Error> {
        let key = input::CinemaKey::try_from(lookup)?;
        tracing::info!(?key, "finding cinema");

        let theatre = self
            .repository
            .find_by_name_and_location(&key.name, &key.location)
            .await?
            .ok_or(Error::CinemaNotExist)?;

        Ok(output::Theatre::from(theatre))
    }

    async fn find_cinemas_in_location(
        &self,
        location: String,
    ) -> Result<Vec<output::Theatre>, Error> {
        let location = input::required(Some(location), "location is required")?;
        tracing::info!(location, "finding cinemas");

        let theatres = self.repository.find_many_by_location(&location).await?;
        tracing::info!(count = theatres.len(), "found cinemas");

        let theatres = theatres.into_iter().map(output::Theatre::from).collect();

        Ok(theatres)
    }
}
