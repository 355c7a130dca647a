mod bookings_service;
mod seats_query_service;
mod seats_reservation_service;

pub use bookings_service::*;
pub use seats_query_service::*;
pub use seats_reservation_service::*;
