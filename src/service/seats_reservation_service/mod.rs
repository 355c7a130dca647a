mod dto;
mod seats_reservation_service;
mod seats_reservation_service_impl;

pub use dto::SeatsReservationServiceConfig;
pub use seats_reservation_service::*;
pub use seats_reservation_service_impl::*;
