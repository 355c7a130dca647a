use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::{BookingsService, SeatsQueryService, SeatsReservationService},
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

type Success<T> = Json<output::Success<T>>;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/bookit/cinema/booked-seats", get(get_booked_seats))
        .route("/bookit/cinema/seats-count", get(get_seats_count))
        .route("/bookit/cinema/availability", get(get_seat_availability))
        .route("/bookit/cinema/verify/:name", get(verify_cinema_name))
        .route("/bookit/cinema/find", get(find_cinema))
        .route(
            "/bookit/cinema/location/:location",
            get(find_cinemas_in_location),
        )
        .route("/bookit/cinema/seats", post(reserve_seats))
        .route("/bookit/user/booked-tickets", get(get_booked_tickets))
        .route("/bookit/user/add-booking", post(add_booking))
        .route("/bookit/admin/booking-stats", get(get_booking_statistics))
        .fallback(route_not_found)
}

fn success<T>(body: T) -> Success<T> {
    Json(output::Success::new(body))
}

async fn get_booked_seats(
    State(service): State<Arc<dyn SeatsQueryService>>,
    query: Result<Query<input::ShowTimeQuery>, QueryRejection>,
) -> Result<Success<output::BookedSeats>, Error> {
    let Query(query) = query?;
    let booked_seats = service.find_booked_seats(query).await?;

    Ok(success(booked_seats))
}

async fn get_seats_count(
    State(service): State<Arc<dyn SeatsQueryService>>,
    query: Result<Query<input::ShowTimeQuery>, QueryRejection>,
) -> Result<Success<output::SeatsCount>, Error> {
    let Query(query) = query?;
    let count = service.count_booked_seats(query).await?;

    Ok(success(count))
}

async fn get_seat_availability(
    State(service): State<Arc<dyn SeatsQueryService>>,
    query: Result<Query<input::ShowTimeQuery>, QueryRejection>,
) -> Result<Success<output::SeatAvailability>, Error> {
    let Query(query) = query?;
    let availability = service.check_seat_availability(query).await?;

    Ok(success(availability))
}

async fn verify_cinema_name(
    State(service): State<Arc<dyn SeatsQueryService>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Success<output::CinemaVerification>, Error> {
    let Path(name) = path?;
    let verification = service.verify_cinema_name(name).await?;

    Ok(success(verification))
}

async fn find_cinema(
    State(service): State<Arc<dyn SeatsQueryService>>,
    query: Result<Query<input::CinemaLookup>, QueryRejection>,
) -> Result<Success<output::Data<output::Theatre>>, Error> {
    let Query(lookup) = query?;
    let data = service.find_cinema(lookup).await?;

    Ok(success(output::Data { data }))
}

async fn find_cinemas_in_location(
    State(service): State<Arc<dyn SeatsQueryService>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Success<output::Data<Vec<output::Theatre>>>, Error> {
    let Path(location) = path?;
    let data = service.find_cinemas_in_location(location).await?;

    Ok(success(output::Data { data }))
}

async fn reserve_seats(
    State(service): State<Arc<dyn SeatsReservationService>>,
    body: Result<Json<input::SeatsReservation>, JsonRejection>,
) -> Result<Success<output::Data<output::Theatre>>, Error> {
    let Json(reservation) = body?;
    let data = service.reserve_seats(reservation).await?;

    Ok(success(output::Data { data }))
}

async fn get_booked_tickets(
    State(service): State<Arc<dyn BookingsService>>,
    query: Result<Query<input::UserEmail>, QueryRejection>,
) -> Result<Success<output::Tickets>, Error> {
    let Query(user) = query?;
    let tickets = service.find_booked_tickets(user).await?;

    Ok(success(tickets))
}

async fn add_booking(
    State(service): State<Arc<dyn BookingsService>>,
    body: Result<Json<input::AddBooking>, JsonRejection>,
) -> Result<Success<output::Tickets>, Error> {
    let Json(booking) = body?;
    let tickets = service.append_booking(booking).await?;

    Ok(success(tickets))
}

async fn get_booking_statistics(
    State(service): State<Arc<dyn BookingsService>>,
) -> Result<Success<output::Data<output::BookingStatistics>>, Error> {
    let data = service.booking_statistics().await?;

    Ok(success(output::Data { data }))
}

async fn route_not_found() -> Error {
    Error::RouteNotFound
}
