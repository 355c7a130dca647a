use super::{ApplicationEnv, StorageEnv};
use crate::{
    repository::{
        TheatresRepository, TheatresRepositoryImpl, TheatresRepositoryMemory, UsersRepository,
        UsersRepositoryImpl, UsersRepositoryMemory,
    },
    service::{
        BookingsService, BookingsServiceImpl, SeatsQueryService, SeatsQueryServiceConfig,
        SeatsQueryServiceImpl, SeatsReservationService, SeatsReservationServiceConfig,
        SeatsReservationServiceImpl,
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub seats_query_service: Arc<dyn SeatsQueryService>,
    pub seats_reservation_service: Arc<dyn SeatsReservationService>,
    pub bookings_service: Arc<dyn BookingsService>,
}

pub struct ApplicationStateToClose {
    /// `None` for in-memory storage
    pub db_client: Option<Client>,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    let theatres_repository: Arc<dyn TheatresRepository>;
    let users_repository: Arc<dyn UsersRepository>;
    let mut db_client = None;

    match &env.storage {
        StorageEnv::MongoDb {
            connection_string,
            name,
        } => {
            tracing::info!("connecting to database");
            let db_client_options = ClientOptions::parse(connection_string).await?;
            let client = Client::with_options(db_client_options)?;
            let db = client.database(name);

            tracing::info!("creating repositories");
            theatres_repository = Arc::new(TheatresRepositoryImpl::new(db.clone()).await?);
            users_repository = Arc::new(UsersRepositoryImpl::new(db).await?);
            db_client = Some(client);
        }
        StorageEnv::Memory => {
            tracing::warn!("using in-memory storage, nothing will be persisted");
            theatres_repository = Arc::new(TheatresRepositoryMemory::new());
            users_repository = Arc::new(UsersRepositoryMemory::new());
        }
    }

    let state = create_services(env, theatres_repository, users_repository);

    Ok((state, ApplicationStateToClose { db_client }))
}

pub fn create_services(
    env: &ApplicationEnv,
    theatres_repository: Arc<dyn TheatresRepository>,
    users_repository: Arc<dyn UsersRepository>,
) -> ApplicationState {
    tracing::info!("creating services");
    let config = SeatsQueryServiceConfig {
        seats_load_threshold: env.seats_load_threshold,
    };
    let seats_query_service = SeatsQueryServiceImpl::new(config, theatres_repository.clone());
    let seats_query_service = Arc::new(seats_query_service);

    let config = SeatsReservationServiceConfig {
        max_rounds: env.reservation_max_rounds,
    };
    let seats_reservation_service = SeatsReservationServiceImpl::new(config, theatres_repository);
    let seats_reservation_service = Arc::new(seats_reservation_service);

    let bookings_service = BookingsServiceImpl::new(users_repository);
    let bookings_service = Arc::new(bookings_service);

    ApplicationState {
        seats_query_service,
        seats_reservation_service,
        bookings_service,
    }
}
