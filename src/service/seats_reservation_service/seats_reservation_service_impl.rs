use super::{SeatsReservationService, SeatsReservationServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, TheatresRepository},
};
use axum::async_trait;
use std::sync::Arc;

pub struct SeatsReservationServiceImpl {
    config: SeatsReservationServiceConfig,
    repository: Arc<dyn TheatresRepository>,
}

impl SeatsReservationServiceImpl {
    pub fn new(
        config: SeatsReservationServiceConfig,
        repository: Arc<dyn TheatresRepository>,
    ) -> Self {
        Self { config, repository }
    }

    ///
    /// Walks the chain merge seats -> push showtime -> push date -> insert theatre,
    /// stopping at the first step whose guard matched.
    ///
    /// ### Returns
    /// `false` when the theatre was created concurrently and the chain has to start over
    ///
    async fn reserve_round(
        &self,
        reservation: &input::ValidSeatsReservation,
    ) -> Result<bool, Error> {
        let key = &reservation.key;
        let seats = reservation.selected_seats.as_slice();

        if Self::applied(self.repository.add_booked_seats(key, seats).await)? {
            tracing::debug!("merged seats into existing showtime");
            return Ok(true);
        }

        if Self::applied(self.repository.push_show_time(key, seats).await)? {
            tracing::debug!("created showtime");
            return Ok(true);
        }

        if Self::applied(self.repository.push_date(key, seats).await)? {
            tracing::debug!("created date");
            return Ok(true);
        }

        let result = self
            .repository
            .insert(key, &reservation.address, &reservation.location, seats)
            .await;

        match result {
            Ok(()) => {
                tracing::debug!("created theatre");
                Ok(true)
            }
            Err(repository::Error::InsertUniqueViolation) => Ok(false),
            Err(err) => Err(Error::Database(err)),
        }
    }

    fn applied(result: Result<(), repository::Error>) -> Result<bool, Error> {
        match result {
            Ok(()) => Ok(true),
            Err(repository::Error::NoDocumentUpdated) => Ok(false),
            Err(err) => Err(Error::Database(err)),
        }
    }
}

#[async_trait]
impl SeatsReservationService for SeatsReservationServiceImpl {
    async fn reserve_seats(
        &self,
        reservation: input::SeatsReservation,
    ) -> Result<output::Theatre, Error> {
        tracing::trace!(?reservation);
        let reservation = input::ValidSeatsReservation::try_from(reservation)?;

        let key = &reservation.key;
        tracing::info!(
            theatre = %key.theatre_name,
            date = %key.date,
            time = %key.time,
            movie = %key.movie_name,
            seats = ?reservation.selected_seats,
            payment_id = ?reservation.payment_id,
            "reserving seats"
        );

        let mut reserved = false;
        for round in 1..=self.config.max_rounds {
            if self.reserve_round(&reservation).await? {
                reserved = true;
                break;
            }
            tracing::debug!(round, "theatre created concurrently, retrying");
        }

        if !reserved {
            return Err(Error::ReservationContention {
                rounds: self.config.max_rounds,
            });
        }

        let theatre = self
            .repository
            .find_by_name(&key.theatre_name)
            .await?
            .ok_or(Error::CinemaNotExist)?;
        tracing::info!("reserved seats");

        Ok(output::Theatre::from(theatre))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{MockTheatresRepository, Theatre};
    use bson::oid::ObjectId;
    use std::sync::Arc;

    fn reservation() -> input::SeatsReservation {
        input::SeatsReservation {
            name: Some("PVR Saket".to_string()),
            address: Some("Addr".to_string()),
            location: Some("Delhi-NCR".to_string()),
            selected_seats: Some(vec!["A1".to_string(), "A2".to_string()]),
            show_date: Some("01-06-2025".to_string()),
            show_time: Some("18:00".to_string()),
            movie_name: Some("Inception".to_string()),
            payment_id: None,
        }
    }

    fn theatre() -> Theatre {
        Theatre {
            id: ObjectId::new(),
            name: "PVR Saket".to_string(),
            address: "Addr".to_string(),
            location: "Delhi-NCR".to_string(),
            distance: Theatre::DEFAULT_DISTANCE.to_string(),
            is_full: false,
            is_empty: false,
            dates: Vec::new(),
        }
    }

    fn service(repository: MockTheatresRepository) -> SeatsReservationServiceImpl {
        SeatsReservationServiceImpl::new(
            SeatsReservationServiceConfig { max_rounds: 3 },
            Arc::new(repository),
        )
    }

    fn no_document_updated() -> Result<(), repository::Error> {
        Err(repository::Error::NoDocumentUpdated)
    }

    #[tokio::test]
    async fn reserve_seats_merged_into_existing_show_time() {
        let mut repository = MockTheatresRepository::new();
        repository
            .expect_add_booked_seats()
            .withf(|key, seats| {
                key.theatre_name == "PVR Saket" && seats.len() == 2 && seats[1] == "A2"
            })
            .times(1)
            .returning(|_, _| Ok(()));
        repository.expect_push_show_time().never();
        repository.expect_push_date().never();
        repository.expect_insert().never();
        repository
            .expect_find_by_name()
            .returning(|_| Ok(Some(theatre())));
        let service = service(repository);

        let theatre = service.reserve_seats(reservation()).await.unwrap();

        assert_eq!(theatre.name, "PVR Saket");
    }

    #[tokio::test]
    async fn reserve_seats_created_show_time() {
        let mut repository = MockTheatresRepository::new();
        repository
            .expect_add_booked_seats()
            .returning(|_, _| no_document_updated());
        repository
            .expect_push_show_time()
            .times(1)
            .returning(|_, _| Ok(()));
        repository.expect_push_date().never();
        repository.expect_insert().never();
        repository
            .expect_find_by_name()
            .returning(|_| Ok(Some(theatre())));
        let service = service(repository);

        let result = service.reserve_seats(reservation()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn reserve_seats_created_date() {
        let mut repository = MockTheatresRepository::new();
        repository
            .expect_add_booked_seats()
            .returning(|_, _| no_document_updated());
        repository
            .expect_push_show_time()
            .returning(|_, _| no_document_updated());
        repository
            .expect_push_date()
            .times(1)
            .returning(|_, _| Ok(()));
        repository.expect_insert().never();
        repository
            .expect_find_by_name()
            .returning(|_| Ok(Some(theatre())));
        let service = service(repository);

        let result = service.reserve_seats(reservation()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn reserve_seats_created_theatre() {
        let mut repository = MockTheatresRepository::new();
        repository
            .expect_add_booked_seats()
            .returning(|_, _| no_document_updated());
        repository
            .expect_push_show_time()
            .returning(|_, _| no_document_updated());
        repository
            .expect_push_date()
            .returning(|_, _| no_document_updated());
        repository
            .expect_insert()
            .withf(|key, address, location, _| {
                key.date == "01-06-2025" && address == "Addr" && location == "Delhi-NCR"
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        repository
            .expect_find_by_name()
            .returning(|_| Ok(Some(theatre())));
        let service = service(repository);

        let result = service.reserve_seats(reservation()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn reserve_seats_theatre_created_concurrently() {
        let mut repository = MockTheatresRepository::new();
        let mut merges = 0;
        repository
            .expect_add_booked_seats()
            .times(2)
            .returning(move |_, _| {
                merges += 1;
                match merges {
                    1 => no_document_updated(),
                    _ => Ok(()),
                }
            });
        repository
            .expect_push_show_time()
            .times(1)
            .returning(|_, _| no_document_updated());
        repository
            .expect_push_date()
            .times(1)
            .returning(|_, _| no_document_updated());
        repository
            .expect_insert()
            .times(1)
            .returning(|_, _, _, _| Err(repository::Error::InsertUniqueViolation));
        repository
            .expect_find_by_name()
            .returning(|_| Ok(Some(theatre())));
        let service = service(repository);

        let result = service.reserve_seats(reservation()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn reserve_seats_contention() {
        let mut repository = MockTheatresRepository::new();
        repository
            .expect_add_booked_seats()
            .times(3)
            .returning(|_, _| no_document_updated());
        repository
            .expect_push_show_time()
            .returning(|_, _| no_document_updated());
        repository
            .expect_push_date()
            .returning(|_, _| no_document_updated());
        repository
            .expect_insert()
            .times(3)
            .returning(|_, _, _, _| Err(repository::Error::InsertUniqueViolation));
        repository.expect_find_by_name().never();
        let service = service(repository);

        let result = service.reserve_seats(reservation()).await;

        assert!(matches!(
            result,
            Err(Error::ReservationContention { rounds: 3 })
        ));
    }

    #[tokio::test]
    async fn reserve_seats_missing_address() {
        let mut repository = MockTheatresRepository::new();
        repository.expect_add_booked_seats().never();
        repository.expect_insert().never();
        let service = service(repository);

        let mut reservation = reservation();
        reservation.address = Some(String::new());

        let result = service.reserve_seats(reservation).await;

        assert!(matches!(
            result,
            Err(Error::Validation("address is required"))
        ));
    }

    #[tokio::test]
    async fn reserve_seats_malformed_show_date() {
        let mut repository = MockTheatresRepository::new();
        repository.expect_add_booked_seats().never();
        let service = service(repository);

        let mut reservation = reservation();
        reservation.show_date = Some("2025-06-01".to_string());

        let result = service.reserve_seats(reservation).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn reserve_seats_database_error() {
        let mut repository = MockTheatresRepository::new();
        repository
            .expect_add_booked_seats()
            .returning(|_, _| Err(repository::Error::InsertUniqueViolation));
        repository.expect_push_show_time().never();
        let service = service(repository);

        let result = service.reserve_seats(reservation()).await;

        assert!(matches!(result, Err(Error::Database(_))));
    }
}
